use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Storage delete is a no-op for unknown ids; check first so a repeated
        // delete is reported instead of silently succeeding.
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Cannot delete product {}: {}", params.id, e))
            })?;

        self.repository.delete(product.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", product.id, e));
            ProductError::Repository(e)
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product};
    use crate::domain::product::pagination::ProductFilter;
    use chrono::Utc;
    use mockall::{Sequence, mock};

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &NewProduct) -> Result<i64, RepositoryError>;
            async fn update(&self, id: i64, product: &NewProduct) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError>;
            async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
            async fn count_total(&self) -> Result<i64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn widget(id: i64) -> Product {
        Product::from_repository(id, "Widget".to_string(), 5, Utc::now(), None)
    }

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(widget(id)));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 99 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_on_second_delete() {
        let mut seq = Sequence::new();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(widget(id)));
        mock_repo
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        // Once soft-deleted the row is invisible to lookups.
        mock_repo
            .expect_get_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DeleteProductParams { id: 1 }).await.is_ok());
        let second = use_case.execute(DeleteProductParams { id: 1 }).await;

        assert!(matches!(second.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_from_delete() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(widget(id)));
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::database_error("deadlock")));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError(_))
        ));
    }
}
