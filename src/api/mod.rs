//! REST API module for haiku generation
//!
//! HTTP surface over [`crate::haiku::HaikuGenerator`], compiled behind the
//! `server` feature.

#[cfg(feature = "server")]
pub mod haiku_routes;

#[cfg(feature = "server")]
pub use haiku_routes::{create_haiku_router, HaikuQuery, USAGE_HINT};
