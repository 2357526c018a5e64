use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::pagination::ProductFilter;

/// Storage port for products.
///
/// Soft-deleted rows are invisible to every read. `update` and `delete` are
/// silent no-ops for ids that do not match a live row.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<i64, RepositoryError>;
    async fn update(&self, id: i64, product: &NewProduct) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError>;
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn count_total(&self) -> Result<i64, RepositoryError>;
}
