//! Runs against a throwaway database created by `sqlx::test` (needs
//! `DATABASE_URL` pointing at a Postgres server).

use business::domain::errors::RepositoryError;
use business::domain::product::model::NewProduct;
use business::domain::product::pagination::ProductFilter;
use business::domain::product::repository::ProductRepository;
use chrono::{DateTime, Utc};
use persistence::product::repository::ProductRepositoryPostgres;
use sqlx::PgPool;

async fn seed(repo: &ProductRepositoryPostgres, name: &str) -> i64 {
    repo.create(&NewProduct::new(name, 1).unwrap())
        .await
        .unwrap()
}

async fn list_names(repo: &ProductRepositoryPostgres, filter: ProductFilter) -> Vec<String> {
    repo.list(&filter)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect()
}

async fn deleted_at(pool: &PgPool, id: i64) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT deleted_at FROM products WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_then_read_back(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);

    let id = repo
        .create(&NewProduct::new("Widget", 5).unwrap())
        .await
        .unwrap();

    let product = repo.get_by_id(id).await.unwrap();
    assert_eq!(product.id, id);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.quantity, 5);
    assert_eq!(product.deleted_at, None);

    let by_name = repo.get_by_name("Widget").await.unwrap();
    assert_eq!(by_name.id, id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_missing_product_is_not_found(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);

    assert!(matches!(repo.get_by_id(999).await, Err(RepositoryError::NotFound)));
    assert!(matches!(repo.get_by_name("Ghost").await, Err(RepositoryError::NotFound)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_name_lookup_is_exact(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    seed(&repo, "Widget").await;

    assert!(matches!(repo.get_by_name("widget").await, Err(RepositoryError::NotFound)));
    assert!(matches!(repo.get_by_name("Widg").await, Err(RepositoryError::NotFound)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_soft_deleted_product_is_hidden_from_reads(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool.clone());
    seed(&repo, "Apple").await;
    let banana = seed(&repo, "Banana").await;
    seed(&repo, "Cherry").await;

    repo.delete(banana).await.unwrap();

    assert!(deleted_at(&pool, banana).await.is_some());
    assert!(matches!(repo.get_by_id(banana).await, Err(RepositoryError::NotFound)));
    assert!(matches!(repo.get_by_name("Banana").await, Err(RepositoryError::NotFound)));
    assert_eq!(
        list_names(&repo, ProductFilter::default()).await,
        vec!["Apple", "Cherry"]
    );
    assert_eq!(repo.count_total().await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_name_filter_is_case_insensitive_substring(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    seed(&repo, "Blue Widget").await;
    seed(&repo, "Gadget").await;

    let filter = ProductFilter::new(0, 10, Some("WIDGET".to_string()));
    assert_eq!(list_names(&repo, filter).await, vec!["Blue Widget"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_absent_name_filter_lists_everything(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    seed(&repo, "Blue Widget").await;
    seed(&repo, "Gadget").await;

    let filter = ProductFilter::new(0, 10, None);
    assert_eq!(list_names(&repo, filter).await, vec!["Blue Widget", "Gadget"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_like_wildcards_in_filter_match_literally(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    seed(&repo, "50%_off").await;
    seed(&repo, "500 off").await;
    seed(&repo, "Widget").await;

    let percent = ProductFilter::new(0, 10, Some("%".to_string()));
    assert_eq!(list_names(&repo, percent).await, vec!["50%_off"]);

    let underscore = ProductFilter::new(0, 10, Some("_".to_string()));
    assert_eq!(list_names(&repo, underscore).await, vec!["50%_off"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_page_is_a_raw_row_offset(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    seed(&repo, "Apple").await;
    seed(&repo, "Banana").await;
    seed(&repo, "Cherry").await;

    assert_eq!(
        list_names(&repo, ProductFilter::new(1, 1, None)).await,
        vec!["Banana"]
    );
    assert_eq!(
        list_names(&repo, ProductFilter::new(1, 10, None)).await,
        vec!["Banana", "Cherry"]
    );
    assert!(list_names(&repo, ProductFilter::new(3, 10, None)).await.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_zero_limit_returns_empty_window(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    seed(&repo, "Apple").await;

    assert!(list_names(&repo, ProductFilter::new(0, 0, None)).await.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_replaces_name_and_quantity(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool);
    let id = seed(&repo, "Widget").await;

    repo.update(id, &NewProduct::new("W2", 9).unwrap())
        .await
        .unwrap();

    let product = repo.get_by_id(id).await.unwrap();
    assert_eq!(product.name, "W2");
    assert_eq!(product.quantity, 9);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_of_missing_or_deleted_row_is_a_no_op(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool.clone());
    let id = seed(&repo, "Widget").await;
    repo.delete(id).await.unwrap();

    repo.update(999, &NewProduct::new("Ghost", 1).unwrap())
        .await
        .unwrap();
    repo.update(id, &NewProduct::new("Revived", 1).unwrap())
        .await
        .unwrap();

    let name: String = sqlx::query_scalar("SELECT name FROM products WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Widget");
    assert_eq!(repo.count_total().await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_of_missing_or_deleted_row_is_a_no_op(pool: PgPool) {
    let repo = ProductRepositoryPostgres::new(pool.clone());
    let id = seed(&repo, "Widget").await;

    repo.delete(999).await.unwrap();
    repo.delete(id).await.unwrap();
    let first = deleted_at(&pool, id).await;

    repo.delete(id).await.unwrap();

    assert!(first.is_some());
    assert_eq!(deleted_at(&pool, id).await, first);
}
