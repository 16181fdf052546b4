//! Dashboard perspective selected from the site navigation.

use std::fmt;

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Which panel the page shows. Any role can switch to any other directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Public landing page with the course catalog.
    #[default]
    Guest,
    Parent,
    Teacher,
    Admin,
}

impl Role {
    /// Navigation order of the header buttons.
    pub const ALL: [Self; 4] = [Self::Guest, Self::Parent, Self::Teacher, Self::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Parent => "parent",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Caption of the header navigation button that activates this role.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Guest => "Курсы",
            Self::Parent => "Личный кабинет",
            Self::Teacher => "Для педагогов",
            Self::Admin => "Администратор",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
