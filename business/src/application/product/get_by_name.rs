use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_name::{
    GetProductByNameParams, GetProductByNameUseCase,
};

pub struct GetProductByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByNameUseCase for GetProductByNameUseCaseImpl {
    async fn execute(&self, params: GetProductByNameParams) -> Result<Product, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        self.logger
            .info(&format!("Fetching product by name: {}", params.name));

        self.repository
            .get_by_name(&params.name)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Lookup of product {:?} failed: {}", params.name, e))
            })
    }
}
