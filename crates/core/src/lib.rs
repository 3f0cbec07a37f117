#![forbid(unsafe_code)]

pub mod filter;
pub mod model;
pub mod percent;
pub mod threshold;

pub use filter::CategoryFilter;
pub use threshold::{Threshold, ThresholdError};
