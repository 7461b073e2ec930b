use uuid::Uuid;

/// Generate a 32-character lowercase hex identifier.
///
/// Used for job ids, run ids and bridge access tokens.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
