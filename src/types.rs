//! Core value types for the friend circle
//!
//! Gender and category are small closed sets with a fixed text form, used both
//! in the data file and in user-facing output.

use serde::{Deserialize, Serialize};

/// Gender flag stored with each friend
///
/// The data file stores a single symbol. `M` is the primary symbol and the
/// fallback for anything unrecognized; `H` is accepted as an alternate
/// spelling of `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Lenient parse used by construction and `set_gender`
    ///
    /// Input is trimmed and upper-cased; `H` maps to `M`; anything that is not
    /// `M` or `F` afterwards becomes `Male`.
    pub fn normalize(input: &str) -> Self {
        match input.trim().to_uppercase().as_str() {
            "F" => Gender::Female,
            // "M", the alternate "H", and everything unrecognized
            _ => Gender::Male,
        }
    }

    /// Strict parse: only the exact symbols `M` and `F`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Parse gender as typed on the command line
    ///
    /// Accepts the file symbols and the English words, case-insensitively.
    pub fn parse_user_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "m" | "h" | "male" | "man" | "men" => Some(Gender::Male),
            "f" | "female" | "woman" | "women" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Single-character symbol written to the data file
    pub fn symbol(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category derived from the total of a friend's scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Total above 90
    SuperFriend,

    /// Total of 80 to 90
    Primary,

    /// Total of 60 to 79
    Secondary,

    /// Total of 40 to 59
    Tertiary,

    /// Total of 20 to 39
    Occasional,

    /// Total below 20
    Acquaintance,

    /// Placeholder before the first classification
    Unknown,
}

impl Category {
    /// Every category that classification can produce, best first
    pub const RANKED: [Category; 6] = [
        Category::SuperFriend,
        Category::Primary,
        Category::Secondary,
        Category::Tertiary,
        Category::Occasional,
        Category::Acquaintance,
    ];

    /// Classify a score total; lower bounds are inclusive except for `SuperFriend`
    pub fn from_total(total: i64) -> Self {
        if total > 90 {
            Category::SuperFriend
        } else if total >= 80 {
            Category::Primary
        } else if total >= 60 {
            Category::Secondary
        } else if total >= 40 {
            Category::Tertiary
        } else if total >= 20 {
            Category::Occasional
        } else {
            Category::Acquaintance
        }
    }

    /// Label written to the data file and shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Category::SuperFriend => "Super Friend",
            Category::Primary => "Primary",
            Category::Secondary => "Secondary",
            Category::Tertiary => "Tertiary",
            Category::Occasional => "Occasional",
            Category::Acquaintance => "Acquaintance",
            Category::Unknown => "Unknown",
        }
    }

    /// Parse a label or slug (`Super Friend`, `super-friend`, `super_friend`)
    pub fn from_label(label: &str) -> Option<Self> {
        let key: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match key.as_str() {
            "superfriend" => Some(Category::SuperFriend),
            "primary" => Some(Category::Primary),
            "secondary" => Some(Category::Secondary),
            "tertiary" => Some(Category::Tertiary),
            "occasional" => Some(Category::Occasional),
            "acquaintance" => Some(Category::Acquaintance),
            "unknown" => Some(Category::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
