//! One function per platform endpoint.
//!
//! Bindings return the [`Exchange`](crate::Exchange) untouched so callers can
//! inspect the status and body themselves. Compound workflows (fetch then
//! act) stop after the first call unless it succeeded with a 2xx status and a
//! decodable body.

pub mod accounts;
pub mod branding;
pub mod common_resources;
pub mod elements;
pub mod formulas;
pub mod instances;
pub mod intelligence;
pub mod jobs;
pub mod metrics;
pub mod transformations;
