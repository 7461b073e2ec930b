use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PageSizeProblem, PaginationError, Result};

/// Upper bound used when the caller has no configured maximum
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Validated page size: always in `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl PageSize {
    /// Parse a raw `size` query value.
    ///
    /// Missing, non-numeric, zero and oversized values are all client errors.
    pub fn parse(raw: Option<&str>, max: usize) -> Result<Self> {
        let Some(raw) = raw else {
            return Err(PaginationError::InvalidPageSize {
                value: None,
                problem: PageSizeProblem::Missing,
            });
        };

        let invalid = |problem| PaginationError::InvalidPageSize {
            value: Some(raw.to_string()),
            problem,
        };

        let size = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| invalid(PageSizeProblem::NotANumber))?;
        Self::new(size, max).map_err(|err| match err {
            PaginationError::InvalidPageSize { problem, .. } => invalid(problem),
            other => other,
        })
    }

    pub fn new(size: usize, max: usize) -> Result<Self> {
        if size == 0 {
            return Err(PaginationError::InvalidPageSize {
                value: Some(size.to_string()),
                problem: PageSizeProblem::Zero,
            });
        }
        if size > max {
            return Err(PaginationError::InvalidPageSize {
                value: Some(size.to_string()),
                problem: PageSizeProblem::TooLarge { max },
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position and length of the requested slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub size: PageSize,
}

impl PageRequest {
    pub fn new(offset: usize, size: PageSize) -> Self {
        Self { offset, size }
    }

    /// Validate a raw size and pair it with `offset`.
    pub fn parse(offset: usize, raw_size: Option<&str>, max: usize) -> Result<Self> {
        Ok(Self::new(offset, PageSize::parse(raw_size, max)?))
    }

    /// Convert a 1-based page number into an offset request.
    ///
    /// Page 0 is treated as the first page.
    pub fn from_page(page: usize, size: PageSize) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(size.get());
        Self::new(offset, size)
    }

    /// Request for the page that follows this one.
    pub fn next(&self) -> Self {
        Self::new(self.offset.saturating_add(self.size.get()), self.size)
    }

    /// Request for the page that precedes this one, clamped at offset 0.
    pub fn prev(&self) -> Self {
        Self::new(self.offset.saturating_sub(self.size.get()), self.size)
    }
}
