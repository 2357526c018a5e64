use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::NewProduct;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    /// Storage ignores unknown ids, so updating a missing product succeeds.
    async fn execute(&self, params: UpdateProductParams) -> Result<i64, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let product = NewProduct::new(params.name, params.quantity)?;

        self.repository
            .update(params.id, &product)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to update product {}: {}", params.id, e));
                ProductError::Repository(e)
            })?;

        self.logger.info(&format!("Product updated: {}", params.id));
        Ok(params.id)
    }
}
