use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_expiry::{days_until_expiry_at, is_valid_date_string, status_text, Severity};

/// Unique item identifier (UUID v4), assigned by the store at creation.
pub type ItemId = Uuid;

/// Closed category classification, orthogonal to expiry status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Household,
}

impl Category {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Household => "Household",
        }
    }

    /// Parse from the stored lowercase name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "food" => Some(Self::Food),
            "household" => Some(Self::Household),
            _ => None,
        }
    }
}

/// A tracked perishable good.
///
/// Serialized field names are camelCase so the persisted JSON array keeps
/// the shape the import/export collaborator exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    /// Count on hand, at least 1.
    pub quantity: u32,
    /// `yyyy-MM-dd`; the date after which the item counts as expired.
    pub expire_date: String,
    /// Optional `yyyy-MM-dd`; display-only, the UI falls back to
    /// `created_at` when absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub purchase_date: Option<String>,
    /// Set once at creation; drives the "recently added" sort.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Signed days between this item's expiry date and `today`.
    pub fn days_until_expiry_at(&self, today: NaiveDate) -> i64 {
        days_until_expiry_at(&self.expire_date, today)
    }

    /// Severity tier at `today`.
    pub fn severity_at(&self, today: NaiveDate) -> Severity {
        Severity::from_days(self.days_until_expiry_at(today))
    }

    /// Human-readable expiry status at `today`.
    pub fn status_text_at(&self, today: NaiveDate) -> String {
        status_text(self.days_until_expiry_at(today))
    }
}

/// Payload for creating an item; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub expire_date: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub purchase_date: Option<String>,
}

/// Partial update: `None` fields are left untouched.
///
/// `id` and `created_at` are immutable and not representable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub quantity: Option<u32>,
    pub expire_date: Option<String>,
    pub purchase_date: Option<String>,
}

impl ItemPatch {
    /// Merge the set fields onto `item`.
    pub fn apply(&self, item: &mut Item) {
        if let Some(ref name) = self.name {
            item.name = name.clone();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(ref expire_date) = self.expire_date {
            item.expire_date = expire_date.clone();
        }
        if let Some(ref purchase_date) = self.purchase_date {
            item.purchase_date = Some(purchase_date.clone());
        }
    }

    /// Whether this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.expire_date.is_none()
            && self.purchase_date.is_none()
    }
}

/// Validation error for a field of an add/edit form payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// Validate an add-form payload before handing it to the store.
///
/// This is the form collaborator's contract; the store itself accepts
/// whatever well-typed payload it receives and never re-validates.
pub fn validate_new_item(data: &NewItem) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push(ValidationError {
            field: "name".into(),
            message: "name must not be empty".into(),
        });
    }
    if data.quantity < 1 {
        errors.push(ValidationError {
            field: "quantity".into(),
            message: "quantity must be at least 1".into(),
        });
    }
    if !is_valid_date_string(&data.expire_date) {
        errors.push(ValidationError {
            field: "expireDate".into(),
            message: format!("'{}' is not a valid yyyy-MM-dd date", data.expire_date),
        });
    }
    if let Some(ref purchase_date) = data.purchase_date {
        if !is_valid_date_string(purchase_date) {
            errors.push(ValidationError {
                field: "purchaseDate".into(),
                message: format!("'{}' is not a valid yyyy-MM-dd date", purchase_date),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
