use serde::Serialize;

use crate::errors::ValidationError;

/// Pagination descriptor attached to an envelope: current page index, page
/// length, and total item count. Each field is optional and validated on its
/// own; no cross-field relationship (such as `page * size <= total`) is
/// enforced and `total` is never derived automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<i64>,
}

impl Paging {
    /// Empty descriptor with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a descriptor from optional fields, validating each supplied
    /// value. An absent field stays unset.
    pub fn from_parts(
        page: Option<i64>,
        size: Option<i64>,
        total: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let mut paging = Self::new();
        if let Some(page) = page {
            paging = paging.with_page(page)?;
        }
        if let Some(size) = size {
            paging = paging.with_size(size)?;
        }
        if let Some(total) = total {
            paging = paging.with_total(total)?;
        }
        Ok(paging)
    }

    /// Sets the current page index. Negative values are rejected.
    pub fn with_page(mut self, page: i64) -> Result<Self, ValidationError> {
        if page < 0 {
            tracing::warn!("page number cannot be negative: {}", page);
            return Err(ValidationError::NegativePage(page));
        }
        self.page = Some(page);
        Ok(self)
    }

    /// Sets the page length. Must be greater than zero.
    pub fn with_size(mut self, size: i64) -> Result<Self, ValidationError> {
        if size <= 0 {
            tracing::warn!("page size must be greater than 0: {}", size);
            return Err(ValidationError::NonPositiveSize(size));
        }
        self.size = Some(size);
        Ok(self)
    }

    /// Sets the total item count across all pages. Negative values are
    /// rejected.
    pub fn with_total(mut self, total: i64) -> Result<Self, ValidationError> {
        if total < 0 {
            tracing::warn!("total count cannot be negative: {}", total);
            return Err(ValidationError::NegativeTotal(total));
        }
        self.total = Some(total);
        Ok(self)
    }

    /// Current page index, if set.
    pub fn page(&self) -> Option<i64> {
        self.page
    }

    /// Page length, if set.
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    /// Total item count, if set.
    pub fn total(&self) -> Option<i64> {
        self.total
    }
}
