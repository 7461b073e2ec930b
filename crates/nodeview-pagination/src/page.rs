use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::link::{LinkBase, LinkSet};
use crate::request::{DEFAULT_MAX_PAGE_SIZE, PageRequest, PageSize};

/// One bounded slice of an ordered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub request: PageRequest,
    pub links: LinkSet,
}

impl<T> Page<T> {
    /// Wire document for this page.
    pub fn to_document(&self) -> PageDocument<T>
    where
        T: Clone,
    {
        PageDocument {
            data: self.items.clone(),
            links: self.links.clone(),
            meta: PageMeta { count: self.total },
        }
    }

    pub fn into_document(self) -> PageDocument<T> {
        PageDocument {
            data: self.items,
            links: self.links,
            meta: PageMeta { count: self.total },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Size of the whole collection, not of this page
    pub count: usize,
}

/// Serialized form of a page: `{"data": [...], "links": {...}, "meta": {"count": N}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: LinkSet,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Slice `collection` according to `request` and compute navigation links.
///
/// - `next` is present iff `offset + size < total`
/// - `prev` is present iff `offset > 0`, pointing at `max(0, offset - size)`
///
/// An offset past the end yields an empty page.
pub fn paginate<T: Clone>(collection: &[T], request: PageRequest, base: &LinkBase) -> Page<T> {
    let total = collection.len();
    let size = request.size.get();
    let start = request.offset.min(total);
    let end = request.offset.saturating_add(size).min(total);

    let mut links = LinkSet::default();
    if request.offset.saturating_add(size) < total {
        links.next = Some(base.link(request.next()));
    }
    if request.offset > 0 {
        links.prev = Some(base.link(request.prev()));
    }

    debug!(
        offset = request.offset,
        size,
        total,
        has_next = links.next.is_some(),
        has_prev = links.prev.is_some(),
        "paginated collection"
    );

    Page {
        items: collection[start..end].to_vec(),
        total,
        request,
        links,
    }
}

/// Producer-side paginator bound to one list endpoint.
#[derive(Debug, Clone)]
pub struct Paginator {
    base: LinkBase,
    max_size: usize,
}

impl Paginator {
    pub fn new(base: &str, max_size: usize) -> Result<Self> {
        Ok(Self {
            base: LinkBase::parse(base)?,
            max_size,
        })
    }

    pub fn with_default_max(base: &str) -> Result<Self> {
        Self::new(base, DEFAULT_MAX_PAGE_SIZE)
    }

    /// Validate `raw_size` and return the page starting at `offset`.
    pub fn paginate<T: Clone>(
        &self,
        collection: &[T],
        offset: usize,
        raw_size: Option<&str>,
    ) -> Result<Page<T>> {
        let request = PageRequest::parse(offset, raw_size, self.max_size)?;
        Ok(paginate(collection, request, &self.base))
    }

    /// Page for a request that was validated elsewhere.
    pub fn paginate_request<T: Clone>(&self, collection: &[T], request: PageRequest) -> Page<T> {
        paginate(collection, request, &self.base)
    }

    /// Same as [`Paginator::paginate`] for an already typed size.
    pub fn paginate_sized<T: Clone>(
        &self,
        collection: &[T],
        offset: usize,
        size: usize,
    ) -> Result<Page<T>> {
        let request = PageRequest::new(offset, PageSize::new(size, self.max_size)?);
        Ok(paginate(collection, request, &self.base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaginationError;

    fn paginator() -> Paginator {
        Paginator::new("/v2/bridge_types", 100).unwrap()
    }

    #[test]
    fn test_two_items_size_one() {
        let items = vec!["first", "second"];

        let page1 = paginator().paginate(&items, 0, Some("1")).unwrap();
        assert_eq!(page1.items, vec!["first"]);
        assert_eq!(page1.total, 2);
        assert_eq!(page1.links.next.as_ref().unwrap().offset, 1);
        assert_eq!(page1.links.next.as_ref().unwrap().size, 1);
        assert!(page1.links.prev.is_none());

        let page2 = paginator().paginate(&items, 1, Some("1")).unwrap();
        assert_eq!(page2.items, vec!["second"]);
        assert!(page2.links.next.is_none());
        assert_eq!(page2.links.prev.as_ref().unwrap().offset, 0);

        // next of page 1 and prev of page 2 invert each other
        assert_eq!(page1.links.next.unwrap().offset, page2.request.offset);
        assert_eq!(page2.links.prev.unwrap().offset, page1.request.offset);
    }

    #[test]
    fn test_offset_beyond_total() {
        let items = vec![1, 2, 3];
        let page = paginator().paginate(&items, 10, Some("2")).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert!(page.links.next.is_none());
        assert_eq!(page.links.prev.unwrap().offset, 8);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let items: Vec<u32> = (0..10).collect();
        let page = paginator().paginate(&items, 3, Some("5")).unwrap();
        assert_eq!(page.items, vec![3, 4, 5, 6, 7]);
        assert_eq!(page.links.prev.unwrap().offset, 0);
        assert_eq!(page.links.next.unwrap().offset, 8);
    }

    #[test]
    fn test_exact_fit_has_no_next() {
        let items: Vec<u32> = (0..4).collect();
        let page = paginator().paginate(&items, 0, Some("4")).unwrap();
        assert_eq!(page.items.len(), 4);
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u32> = vec![];
        let page = paginator().paginate(&items, 0, Some("25")).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_invalid_sizes_are_rejected() {
        let items = vec![1, 2];
        for raw in [Some("x"), Some("0"), None, Some("101")] {
            let err = paginator().paginate(&items, 0, raw).unwrap_err();
            assert!(
                matches!(err, PaginationError::InvalidPageSize { .. }),
                "{:?} should be rejected",
                raw
            );
            assert_eq!(err.http_status(), 422);
        }
        assert!(paginator().paginate(&items, 0, Some("100")).is_ok());
    }

    #[test]
    fn test_document_shape() {
        let items = vec!["a", "b", "c"];
        let page = paginator().paginate_sized(&items, 1, 1).unwrap();
        let value = serde_json::to_value(page.to_document()).unwrap();
        insta::assert_json_snapshot!(value, @r###"
        {
          "data": [
            "b"
          ],
          "links": {
            "next": {
              "href": "/v2/bridge_types?offset=2&size=1"
            },
            "prev": {
              "href": "/v2/bridge_types?offset=0&size=1"
            }
          },
          "meta": {
            "count": 3
          }
        }
        "###);
    }
}
