use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// One-based pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Rejects windows outside `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`, and
    /// windows whose row offset would overflow a signed 64-bit integer.
    ///
    /// # Returns
    /// - `Ok(())` - Window is usable
    /// - `Err(AppError::Validation)` - Page or page size out of range
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::Validation(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.offset().is_none() {
            return Err(AppError::Validation(format!(
                "page {} is too far past the end",
                self.page
            )));
        }

        Ok(())
    }

    /// Zero-based page index as expected by SeaORM's paginator.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }

    /// Row offset of the window, `None` when it does not fit the store's signed 64-bit
    /// offset.
    fn offset(&self) -> Option<u64> {
        self.page
            .checked_sub(1)?
            .checked_mul(self.page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

/// One page of results plus counts computed over the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total.div_ceil(request.page_size),
        }
    }
}
