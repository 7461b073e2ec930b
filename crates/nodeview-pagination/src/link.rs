use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::error::{DecodeError, PaginationError, Result};
use crate::request::PageRequest;

const OFFSET_PARAM: &str = "offset";
const SIZE_PARAM: &str = "size";

// Relative references (`/v2/specs?...`) are resolved against this origin and
// written back without it.
static PLACEHOLDER_ORIGIN: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://nodeview.invalid/").unwrap());

/// Endpoint that navigation links point at, e.g. `/v2/bridge_types`.
///
/// Any existing query is kept; `offset` and `size` are replaced per link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBase {
    url: Url,
    absolute: bool,
}

impl LinkBase {
    pub fn parse(base: &str) -> Result<Self> {
        let (url, absolute) = resolve(base).map_err(|source| PaginationError::InvalidBase {
            base: base.to_string(),
            source,
        })?;
        Ok(Self { url, absolute })
    }

    /// Link for `request` relative to this base.
    pub fn link(&self, request: PageRequest) -> PageLink {
        let mut url = self.url.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != OFFSET_PARAM && k != SIZE_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (k, v) in &kept {
                query.append_pair(k, v);
            }
            query
                .append_pair(OFFSET_PARAM, &request.offset.to_string())
                .append_pair(SIZE_PARAM, &request.size.get().to_string());
        }

        PageLink {
            href: render_href(&url, self.absolute),
            offset: request.offset,
            size: request.size.get(),
        }
    }
}

/// Reference to one page: the wire form is just `href`, while `offset` and
/// `size` are read back out of its query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLink", into = "RawLink")]
pub struct PageLink {
    pub href: String,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawLink {
    href: String,
}

impl PageLink {
    /// Recover offset and size from an href produced by [`LinkBase::link`].
    pub fn parse(href: &str) -> std::result::Result<Self, DecodeError> {
        let invalid = |reason: &str| DecodeError::Link {
            href: href.to_string(),
            reason: reason.to_string(),
        };

        let (url, _) = resolve(href).map_err(|e| invalid(&e.to_string()))?;
        let mut offset = None;
        let mut size = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                OFFSET_PARAM => {
                    let parsed = value.parse::<usize>();
                    offset = Some(parsed.map_err(|_| invalid("offset is not a number"))?);
                }
                SIZE_PARAM => {
                    let parsed = value.parse::<usize>();
                    size = Some(parsed.map_err(|_| invalid("size is not a number"))?);
                }
                _ => {}
            }
        }

        let offset = offset.ok_or_else(|| invalid("missing offset"))?;
        let size = size.ok_or_else(|| invalid("missing size"))?;
        if size == 0 {
            return Err(invalid("size must be at least 1"));
        }

        Ok(Self {
            href: href.to_string(),
            offset,
            size,
        })
    }
}

impl TryFrom<RawLink> for PageLink {
    type Error = DecodeError;

    fn try_from(raw: RawLink) -> std::result::Result<Self, Self::Error> {
        Self::parse(&raw.href)
    }
}

impl From<PageLink> for RawLink {
    fn from(link: PageLink) -> Self {
        RawLink { href: link.href }
    }
}

/// Navigation links of one page. A missing key means there is no page in
/// that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
}

impl LinkSet {
    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Render as an RFC 8288 `Link` header value, `None` when there are no
    /// links to send.
    pub fn to_link_header(&self) -> Option<String> {
        let parts: Vec<String> = [("next", &self.next), ("prev", &self.prev)]
            .into_iter()
            .filter_map(|(rel, link)| {
                link.as_ref()
                    .map(|l| format!("<{}>; rel=\"{}\"", l.href, rel))
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Parse an RFC 8288 `Link` header. Relations other than `next` and
    /// `prev`/`previous` are ignored, as are parameters other than `rel`.
    pub fn parse_link_header(header: &str) -> std::result::Result<Self, DecodeError> {
        let mut links = LinkSet::default();

        for value in split_unquoted(header, ',') {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let after_open = value
                .strip_prefix('<')
                .ok_or_else(|| DecodeError::Header(format!("expected '<' at '{}'", value)))?;
            let close = after_open
                .find('>')
                .ok_or_else(|| DecodeError::Header("unterminated '<'".to_string()))?;
            let href = &after_open[..close];
            let params = &after_open[close + 1..];

            for rel in relations(params) {
                match rel {
                    "next" => links.next = Some(PageLink::parse(href)?),
                    "prev" | "previous" => links.prev = Some(PageLink::parse(href)?),
                    _ => {}
                }
            }
        }

        Ok(links)
    }
}

/// Body links as received, before their hrefs are checked.
///
/// A response may carry links that a `Link` header overrides; those are never
/// validated.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UncheckedLinks {
    #[serde(default)]
    next: Option<RawLink>,
    #[serde(default)]
    prev: Option<RawLink>,
}

impl UncheckedLinks {
    pub(crate) fn check(self) -> std::result::Result<LinkSet, DecodeError> {
        Ok(LinkSet {
            next: self.next.map(PageLink::try_from).transpose()?,
            prev: self.prev.map(PageLink::try_from).transpose()?,
        })
    }
}

/// Split on `delim` except inside a quoted string or a `<...>` target.
fn split_unquoted(s: &str, delim: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut in_target = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' if !in_target => in_quotes = !in_quotes,
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            c if c == delim && !in_quotes && !in_target => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

fn relations(params: &str) -> Vec<&str> {
    split_unquoted(params, ';')
        .into_iter()
        .filter_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("rel")
                .then(|| value.trim().trim_matches('"'))
        })
        .flat_map(str::split_whitespace)
        .collect()
}

fn resolve(reference: &str) -> std::result::Result<(Url, bool), url::ParseError> {
    match Url::parse(reference) {
        Ok(url) => Ok((url, true)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok((PLACEHOLDER_ORIGIN.join(reference)?, false))
        }
        Err(e) => Err(e),
    }
}

fn render_href(url: &Url, absolute: bool) -> String {
    if absolute {
        return url.to_string();
    }
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
