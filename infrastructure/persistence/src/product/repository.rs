use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::pagination::ProductFilter;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use super::query;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |e| {
        tracing::error!(operation, error = %e, "product query failed");
        RepositoryError::database_error(e)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(query::INSERT)
            .bind(product.name())
            .bind(product.quantity())
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("create"))?;

        Ok(id)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<(), RepositoryError> {
        let result = sqlx::query(query::UPDATE)
            .bind(product.name())
            .bind(product.quantity())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("update"))?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "update matched no live product");
        }
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&query::select_by_id())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("get_by_id"))?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&query::select_by_name())
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("get_by_name"))?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let pattern = filter.name.as_deref().map(query::contains_pattern);

        let entities = sqlx::query_as::<_, ProductEntity>(&query::select_page())
            .bind(pattern)
            .bind(filter.limit)
            .bind(filter.page)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("list"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query(query::SOFT_DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete"))?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no live product");
        }
        Ok(())
    }

    async fn count_total(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>(query::COUNT_LIVE)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("count_total"))
    }
}
