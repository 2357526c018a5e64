use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait CountProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<i64, ProductError>;
}
