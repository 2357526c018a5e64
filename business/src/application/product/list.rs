use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, ProductError> {
        let filter = params.filter;
        self.logger.debug(&format!(
            "Listing products: page={} limit={} name={:?}",
            filter.page, filter.limit, filter.name
        ));

        let products = self.repository.list(&filter).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to list products: {}", e));
            ProductError::Repository(e)
        })?;

        // An empty window is reported as absence, not as an empty success.
        if products.is_empty() {
            return Err(ProductError::NotFound);
        }

        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
