//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (`badge`, `button`, `card`, `icon`) stand in for a UI toolkit.
//! Panels (`guest_panel`, `parent_panel`, `teacher_panel`, `admin_panel`)
//! compose them over `catalog` data; only the guest panel reads view state.

pub mod admin_panel;
pub mod badge;
pub mod button;
pub mod card;
pub mod catalog_filters;
pub mod course_card;
pub mod guest_panel;
pub mod icon;
pub mod parent_panel;
pub mod site_footer;
pub mod site_header;
pub mod stat_tile;
pub mod teacher_panel;
