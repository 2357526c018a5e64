use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::pagination::ProductFilter;

pub struct ListProductsParams {
    pub filter: ProductFilter,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    /// Fails with `ProductError::NotFound` when the window is empty.
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, ProductError>;
}
