use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_expiry::{is_expired, is_expiring};

use crate::item::{Category, Item};

/// Sort order for the item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Case-insensitive lexicographic, ascending.
    #[default]
    Name,
    /// Soonest-expiring first.
    ExpireDate,
    /// Newest first.
    CreatedAt,
}

/// Expiry-status filter bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    /// Days-until-expiry in `[0, 4]`.
    Expiring,
    /// Expiry date strictly before today.
    Expired,
}

impl StatusFilter {
    /// Whether `item` falls in this bucket at `today`.
    pub fn matches(&self, item: &Item, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Expiring => is_expiring(item.days_until_expiry_at(today)),
            Self::Expired => is_expired(item.days_until_expiry_at(today)),
        }
    }
}

/// Category filter, `All` or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Food,
    Household,
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Food => category == Category::Food,
            Self::Household => category == Category::Household,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Food => Self::Food,
            Category::Household => Self::Household,
        }
    }
}

/// The user-selected view over the item collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub sort: SortOption,
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl ItemQuery {
    /// Evaluate the query: category filter, then status filter, then sort.
    ///
    /// Pure over its inputs; calling twice without mutating `items` yields
    /// identical output. Sorting is stable, so ties keep collection order.
    pub fn apply(&self, items: &[Item], today: NaiveDate) -> Vec<Item> {
        let mut out: Vec<Item> = items
            .iter()
            .filter(|item| self.category.matches(item.category))
            .filter(|item| self.status.matches(item, today))
            .cloned()
            .collect();

        match self.sort {
            SortOption::Name => {
                out.sort_by_key(|item| item.name.to_lowercase());
            }
            SortOption::ExpireDate => {
                out.sort_by_key(|item| item.days_until_expiry_at(today));
            }
            SortOption::CreatedAt => {
                out.sort_by_key(|item| std::cmp::Reverse(item.created_at));
            }
        }
        out
    }
}
