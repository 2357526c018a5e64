use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.quantity,
            self.created_at,
            self.deleted_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_column_into_domain() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: 4,
            name: "Widget".to_string(),
            quantity: 12,
            created_at: now,
            deleted_at: None,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, 4);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.quantity, 12);
        assert_eq!(product.created_at, now);
        assert!(!product.is_deleted());
    }
}
