//! Local UI chrome state owned by individual panels.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the page-level `ViewState`
//! so a panel's controls cannot affect any other panel.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available on the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Courses,
    Students,
    Teachers,
    Finance,
}

impl AdminTab {
    /// Tab strip order.
    pub const ALL: [Self; 4] = [Self::Courses, Self::Students, Self::Teachers, Self::Finance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Courses => "Курсы",
            Self::Students => "Ученики",
            Self::Teachers => "Педагоги",
            Self::Finance => "Финансы",
        }
    }
}
