//! API Module
//!
//! HTTP handlers and routing for the Pokemon API.
//!
//! # Endpoints
//! - `GET /water`
//! - `GET /electric`
//! - `GET /grass`
//! - `GET /legendary`
//! - `GET /fire`
//!
//! Each returns a JSON array of every record of that type.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
