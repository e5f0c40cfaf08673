//! List filters for the ranked view

use crate::error::{CircleError, Result};
use crate::friend::Friend;
use crate::types::{Category, Gender};

/// Total used by the `top` shorthand
pub const TOP_TOTAL: i64 = 80;

/// Which friends a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Gender(Gender),
    Category(Category),
    /// Total at or above the given value
    MinTotal(i64),
}

impl ListFilter {
    pub fn matches(&self, friend: &Friend) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Gender(gender) => friend.gender() == *gender,
            ListFilter::Category(category) => friend.category() == *category,
            ListFilter::MinTotal(min) => friend.total() >= *min,
        }
    }
}

impl std::str::FromStr for ListFilter {
    type Err = CircleError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "" | "all" => return Ok(ListFilter::All),
            "men" | "male" => return Ok(ListFilter::Gender(Gender::Male)),
            "women" | "female" => return Ok(ListFilter::Gender(Gender::Female)),
            "top" => return Ok(ListFilter::MinTotal(TOP_TOTAL)),
            _ => {}
        }

        if let Some(min) = input.strip_prefix("min:") {
            return min.trim().parse::<i64>().map(ListFilter::MinTotal).map_err(|_| {
                CircleError::Validation(format!("'{}' is not a valid minimum total", min))
            });
        }

        // Classification never yields Unknown, so it is not a usable filter
        Category::from_label(&input)
            .filter(|&category| category != Category::Unknown)
            .map(ListFilter::Category)
            .ok_or_else(|| {
                CircleError::Validation(format!(
                    "unknown filter '{}' (use all, men, women, top, min:<total>, or a category)",
                    s
                ))
            })
    }
}

impl std::fmt::Display for ListFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFilter::All => write!(f, "All"),
            ListFilter::Gender(Gender::Male) => write!(f, "Men"),
            ListFilter::Gender(Gender::Female) => write!(f, "Women"),
            ListFilter::Category(category) => write!(f, "{}", category),
            ListFilter::MinTotal(min) => write!(f, "Total Score ≥ {}", min),
        }
    }
}
