use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct UpdateProductParams {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<i64, ProductError>;
}
