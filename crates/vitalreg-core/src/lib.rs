//! Core types and pure logic for the vital events registry.
//!
//! Free of HTTP and database dependencies; every other crate in the
//! workspace depends on it.

pub mod certificate;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod page;
pub mod person;
pub mod record;
pub mod store;

pub use error::{Error, Result};
