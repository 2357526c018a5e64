use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct CreateProductParams {
    pub name: String,
    pub quantity: i64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    /// Returns the id assigned by storage.
    async fn execute(&self, params: CreateProductParams) -> Result<i64, ProductError>;
}
