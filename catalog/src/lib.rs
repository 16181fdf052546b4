//! Course catalog, filter selections, and dashboard mock records for the
//! kids center site.
//!
//! This crate is UI-framework agnostic so the `client` crate can render it
//! directly and tests can exercise the filter without a DOM. Everything here
//! is static data plus pure functions over it.

pub mod course;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod format;
pub mod role;

pub use course::{COURSES, Course};
pub use error::ParseError;
pub use filter::{AgeGroup, CatalogFilter, Weekday, filter_courses};
pub use format::format_rubles;
pub use role::Role;
