//! 1-based pagination parameters.
//!
//! Page numbers and page sizes are never zero. Zero indicates a caller
//! bug, so it is rejected at construction and the cache algorithms stay
//! total over valid inputs.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(NonZeroU32);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number.
    ///
    /// Returns [`Error::ZeroPage`] for zero: page numbers are 1-based.
    pub fn new(page: u32) -> Result<Self> {
        NonZeroU32::new(page).map(Self).ok_or(Error::ZeroPage)
    }

    /// Returns the page number as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Absolute offset of this page's first position in the full result
    /// sequence.
    #[must_use]
    pub const fn offset(self, per_page: PerPage) -> usize {
        (self.0.get() as usize - 1) * per_page.get() as usize
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of records per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerPage(NonZeroU32);

impl PerPage {
    /// The page size used when a query does not specify one.
    pub const DEFAULT: Self = Self(NonZeroU32::new(20).unwrap());

    /// Creates a page size.
    ///
    /// Returns [`Error::ZeroPerPage`] for zero: an empty page cannot be
    /// requested.
    pub fn new(per_page: u32) -> Result<Self> {
        NonZeroU32::new(per_page).map(Self).ok_or(Error::ZeroPerPage)
    }

    /// Returns the page size as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
