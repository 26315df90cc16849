//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - PDF upload to `/extract-and-validate`
//! - [`health`] - Backend availability probe
//! - [`http`] - Status mapping and abortable timeouts shared by both

pub mod health;
pub mod http;
pub mod upload;

pub use health::*;
pub use upload::*;
