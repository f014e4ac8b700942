//! Zero-based page addressing.

use thiserror::Error;

pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("page size must be at least 1")]
pub struct PageSizeError;

/// One page of a sorted result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Result<Self, PageSizeError> {
        if size == 0 {
            return Err(PageSizeError);
        }
        Ok(Self { number, size })
    }

    pub const fn number(&self) -> u32 {
        self.number
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> usize {
        self.number as usize * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
