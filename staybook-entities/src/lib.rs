#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # staybook-entities
//!
//! Reusable, agnostic domain entities for Staybook.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod booking;
pub mod date;
pub mod geo;
pub mod id;
pub mod image;
pub mod review;
pub mod spot;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
