//! Expense categories
//!
//! A fixed set of well-known categories plus a free-text variant. The store
//! accepts any category; only the interactive picker restricts input to the
//! fixed set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Rent,
    Utilities,
    Others,
    /// Free-text category recorded outside the fixed set
    Custom(String),
}

impl Category {
    /// The fixed set offered by the interactive picker
    pub const PRESETS: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Rent,
        Category::Utilities,
        Category::Others,
    ];

    /// Parse a category name, falling back to free text for unknown names
    ///
    /// Matching against the fixed set is case-insensitive; anything else is
    /// preserved verbatim as a custom category.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "shopping" => Category::Shopping,
            "rent" => Category::Rent,
            "utilities" => Category::Utilities,
            "others" => Category::Others,
            _ => Category::Custom(trimmed.to_string()),
        }
    }

    /// The display name of this category
    pub fn name(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Others => "Others",
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.name().to_string()
    }
}
