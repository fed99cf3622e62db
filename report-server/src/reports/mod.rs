//! Report aggregation pipeline
//!
//! Stages, leaves first:
//!
//! - [`period`] - current/previous window resolution
//! - [`normalize`] - raw rows to typed records, window partition
//! - [`aggregate`] - product, category, payment, day, hour and customer views
//! - [`compare`] - growth rates and ratios
//! - [`assemble`] - merges everything into a `ReportResult`
//!
//! Everything here is synchronous and pure; I/O lives in [`crate::source`].

pub mod aggregate;
pub mod assemble;
pub mod compare;
pub mod diagnostics;
pub mod normalize;
pub mod period;

pub use assemble::{ReportSettings, build_report};
pub use diagnostics::DataQuality;
pub use normalize::{DateFormat, Snapshot};
