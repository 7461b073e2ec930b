use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::link::{LinkSet, UncheckedLinks};
use crate::page::PageMeta;

/// Page document as received; body links are checked only when used.
#[derive(Deserialize)]
struct ResponseBody<T> {
    data: Vec<T>,
    #[serde(default)]
    links: UncheckedLinks,
    #[serde(default)]
    meta: PageMeta,
}

/// Read a paginated response back into typed items and navigation links.
///
/// The body must be a page document whose `data` holds `T`s; anything else is
/// a decode error rather than an empty result. When `link_header` is given
/// and non-blank it is the source of the links, otherwise the body's `links`
/// member is used, and only the links actually used must be well formed.
/// Keys absent from the source stay absent.
pub fn parse_paginated_response<T: DeserializeOwned>(
    body: &[u8],
    link_header: Option<&str>,
) -> Result<(Vec<T>, LinkSet)> {
    let document: ResponseBody<T> = serde_json::from_slice(body).map_err(DecodeError::Body)?;

    let links = match link_header.map(str::trim).filter(|h| !h.is_empty()) {
        Some(header) => LinkSet::parse_link_header(header)?,
        None => document.links.check()?,
    };

    debug!(
        items = document.data.len(),
        count = document.meta.count,
        has_next = links.next.is_some(),
        has_prev = links.prev.is_some(),
        "decoded paginated response"
    );

    Ok((document.data, links))
}
