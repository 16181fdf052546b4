//! Catalog filter: age-group and weekday tokens matched against course labels.
//!
//! DESIGN
//! ======
//! Each selection is an `Option`: `None` is the "all" choice and matches
//! every course. A set token matches when it occurs as a substring of the
//! corresponding label. There is no range parsing, so the `9` token matches
//! nothing in the sample catalog because no label contains that character.

use std::str::FromStr;

use crate::course::Course;
use crate::error::ParseError;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Select value used for the "unset" choice of either filter.
pub const ALL: &str = "all";

/// Age groups offered by the age selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    FiveToSix,
    SevenToEight,
    NineToTen,
    ElevenToTwelve,
}

impl AgeGroup {
    pub const ALL: [Self; 4] = [Self::FiveToSix, Self::SevenToEight, Self::NineToTen, Self::ElevenToTwelve];

    /// Substring searched for in [`Course::age`]. Also used as the select value.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::FiveToSix => "5",
            Self::SevenToEight => "7",
            Self::NineToTen => "9",
            Self::ElevenToTwelve => "11",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FiveToSix => "5-6 лет",
            Self::SevenToEight => "7-8 лет",
            Self::NineToTen => "9-10 лет",
            Self::ElevenToTwelve => "11-12 лет",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.token() == s)
            .ok_or_else(|| ParseError::UnknownAge(s.to_owned()))
    }
}

/// Weekdays offered by the weekday selector. The center is closed for
/// classes at the weekend, so only Monday to Friday appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Self; 5] = [Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday];

    /// Two-letter abbreviation searched for in [`Course::schedule`].
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Monday => "ПН",
            Self::Tuesday => "ВТ",
            Self::Wednesday => "СР",
            Self::Thursday => "ЧТ",
            Self::Friday => "ПТ",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Понедельник",
            Self::Tuesday => "Вторник",
            Self::Wednesday => "Среда",
            Self::Thursday => "Четверг",
            Self::Friday => "Пятница",
        }
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.token() == s)
            .ok_or_else(|| ParseError::UnknownWeekday(s.to_owned()))
    }
}

/// Current pair of filter selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub age: Option<AgeGroup>,
    pub weekday: Option<Weekday>,
}

impl CatalogFilter {
    /// Whether `course` passes both selections.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        label_matches(course.age, self.age.map(AgeGroup::token))
            && label_matches(course.schedule, self.weekday.map(Weekday::token))
    }
}

/// Courses that pass `filter`, in catalog order.
#[must_use]
pub fn filter_courses<'a>(courses: &'a [Course], filter: &CatalogFilter) -> Vec<&'a Course> {
    courses.iter().filter(|course| filter.matches(course)).collect()
}

/// Parse a select value where [`ALL`] means "no selection".
///
/// # Errors
///
/// Returns the token type's parse error when `value` is neither [`ALL`] nor
/// a known token.
pub fn parse_selection<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value == ALL {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// Select value for a selection, the inverse of [`parse_selection`].
#[must_use]
pub fn selection_value(token: Option<&'static str>) -> &'static str {
    token.unwrap_or(ALL)
}

fn label_matches(label: &str, token: Option<&str>) -> bool {
    token.map_or(true, |token| label.contains(token))
}
