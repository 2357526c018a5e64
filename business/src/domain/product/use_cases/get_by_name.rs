use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductByNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetProductByNameUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByNameParams) -> Result<Product, ProductError>;
}
