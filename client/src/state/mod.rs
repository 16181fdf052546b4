//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `view` holds the page-level role and filter selections; `ui` holds
//! panel-local chrome such as the admin tab strip.

pub mod ui;
pub mod view;
