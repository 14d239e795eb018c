//! Common types shared across the earth-resources services.

pub mod bbox;
pub mod error;

pub use bbox::FilterBoundingBox;
pub use error::{RequestTrace, ServiceError, ServiceResult};
