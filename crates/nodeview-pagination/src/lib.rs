//! Offset-based pagination for list endpoints.
//!
//! The producer side ([`Paginator`], [`paginate`]) slices an ordered
//! collection and computes `next`/`prev` links. The consumer side
//! ([`parse_paginated_response`]) turns a response body plus optional `Link`
//! header back into typed items and the same [`LinkSet`].
//!
//! ```
//! use nodeview_pagination::{Paginator, parse_paginated_response};
//!
//! let paginator = Paginator::new("/v2/bridge_types", 100).unwrap();
//! let page = paginator.paginate(&["a", "b"], 0, Some("1")).unwrap();
//! assert_eq!(page.links.next.as_ref().map(|l| l.offset), Some(1));
//!
//! let body = serde_json::to_vec(&page.to_document()).unwrap();
//! let (items, links) = parse_paginated_response::<String>(&body, None).unwrap();
//! assert_eq!(items, vec!["a".to_string()]);
//! assert_eq!(links, page.links);
//! ```

mod decode;
pub mod error;
mod link;
mod page;
mod request;

pub use decode::parse_paginated_response;
pub use error::{DecodeError, PageSizeProblem, PaginationError, Result};
pub use link::{LinkBase, LinkSet, PageLink};
pub use page::{Page, PageDocument, PageMeta, Paginator, paginate};
pub use request::{DEFAULT_MAX_PAGE_SIZE, PageRequest, PageSize};
