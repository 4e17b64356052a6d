//! Blocking client for the Cloud Elements platform REST API.
//!
//! A [`Ctx`] is built once from [`config::ClientSettings`] and passed to every
//! binding in [`resources`]. Bindings return the raw [`Exchange`] (body,
//! status, curl equivalent); [`presentation`] turns those bodies into tables
//! or CSV.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod presentation;
pub mod resources;
pub mod telemetry;

pub use ce_api_types as types;
pub use client::{Auth, Ctx};
pub use error::{ClientError, NO_STATUS};
pub use http::{Exchange, execute};
