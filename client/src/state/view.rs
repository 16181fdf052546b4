//! Page-level view state: active role and catalog filter selections.
//!
//! DESIGN
//! ======
//! One `ViewState` value is created by the root component, wrapped in a
//! single `RwSignal`, and passed down to the pieces that read or change it.
//! Every interaction replaces a field synchronously; nothing else on the
//! page holds mutable state across panels.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use catalog::filter::parse_selection;
use catalog::{AgeGroup, COURSES, CatalogFilter, Course, ParseError, Role, Weekday, filter_courses};

/// Role flag plus the two catalog selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub role: Role,
    pub filter: CatalogFilter,
}

impl ViewState {
    /// Switch the visible panel. No guards: any role may follow any other.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_age(&mut self, age: Option<AgeGroup>) {
        self.filter.age = age;
    }

    pub fn set_weekday(&mut self, weekday: Option<Weekday>) {
        self.filter.weekday = weekday;
    }

    /// Apply the age `<select>` value. An unknown value leaves the current
    /// selection in place.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownAge`] when `value` is neither `all` nor an age token.
    pub fn select_age(&mut self, value: &str) -> Result<(), ParseError> {
        let age = parse_selection(value)?;
        self.set_age(age);
        Ok(())
    }

    /// Apply the weekday `<select>` value. An unknown value leaves the
    /// current selection in place.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownWeekday`] when `value` is neither `all` nor a weekday token.
    pub fn select_weekday(&mut self, value: &str) -> Result<(), ParseError> {
        let weekday = parse_selection(value)?;
        self.set_weekday(weekday);
        Ok(())
    }

    /// Catalog courses passing the current selections, in catalog order.
    #[must_use]
    pub fn visible_courses(&self) -> Vec<&'static Course> {
        filter_courses(COURSES, &self.filter)
    }
}
