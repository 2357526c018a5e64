use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::count::CountProductsUseCase;

pub struct CountProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CountProductsUseCase for CountProductsUseCaseImpl {
    async fn execute(&self) -> Result<i64, ProductError> {
        let total = self.repository.count_total().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to count products: {}", e));
            ProductError::Repository(e)
        })?;

        self.logger.debug(&format!("Total products: {}", total));
        Ok(total)
    }
}
