//! Data models
//!
//! Shared between the report server and the dashboard (via API).
//! Raw rows are string-typed; everything past the normalizer is typed.

pub mod filter;
pub mod order;
pub mod period;
pub mod product;
pub mod record;
pub mod report;

// Re-exports
pub use filter::*;
pub use order::*;
pub use period::*;
pub use product::*;
pub use record::*;
pub use report::*;
