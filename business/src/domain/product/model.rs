use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        quantity: i64,
        created_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            created_at,
            deleted_at,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// The mutable part of a product, validated before it is handed to storage.
///
/// Both create and update go through this type, so an empty name or a zero
/// quantity can never reach the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    quantity: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i64) -> Result<Self, ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        // A zero quantity is indistinguishable from an omitted one.
        if quantity == 0 {
            return Err(ProductError::QuantityMissing);
        }

        Ok(Self { name, quantity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}
