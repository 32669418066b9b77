//! wastecast-core — cafeteria food-waste estimation.
//!
//! Estimates a waste level by nearest attendance match within a menu type,
//! then derives a worst-case waste mass for that level.

pub mod config;
pub mod dataset;
pub mod error;
pub mod estimator;
pub mod quantity;
pub mod types;

pub use config::Config;
pub use dataset::{Dataset, DatasetSource};
pub use error::{CoreError, CoreResult};
pub use estimator::{FALLBACK_LEVEL, estimate};
pub use quantity::{Derived, derive};
pub use types::*;
