pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Single-line JSON for table cells; `null` renders as an empty cell.
pub fn compact_json(value: &serde_json::Value, max_len: usize) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => truncate(s, max_len),
        other => truncate(&other.to_string(), max_len),
    }
}
