//! Common types shared by all domain entities

pub mod pagination;
#[cfg(any(test, feature = "fakes"))]
pub mod default_factories;

// Re-exports
pub use pagination::Pagination;
#[cfg(any(test, feature = "fakes"))]
pub use default_factories::DefaultFactories;

/// Unix epoch timestamp in seconds; `0` means unset
pub type Timestamp = u64;
