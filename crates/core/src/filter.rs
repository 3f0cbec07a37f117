use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::model::{ALL_SENTINEL, CategoryName};

/// Which generic questions are listed: all of them, or one category's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryName),
}

impl CategoryFilter {
    /// Parse a filter value. `all` (any case) and blank input select everything;
    /// any other value names a category, known or not.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match CategoryName::new(raw) {
            Ok(name) => Self::Category(name),
            Err(_) => Self::All,
        }
    }

    /// Value used for form controls; round-trips through `parse`.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Category(name) => name.as_str(),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Category(name) => name.label(),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<CategoryName> for CategoryFilter {
    fn from(name: CategoryName) -> Self {
        Self::Category(name)
    }
}
