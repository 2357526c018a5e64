use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::pagination::ProductPage;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Quantity in stock (cannot be zero)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Quantity in stock (cannot be zero)
    pub quantity: i64,
}

/// Identifier of the product a write was applied to.
#[derive(Debug, Clone, Object)]
pub struct ProductIdResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Quantity in stock
    pub quantity: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Soft-deletion timestamp
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            created_at: product.created_at,
            deleted_at: product.deleted_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PaginationResponse {
    /// Total number of live products
    pub count: i64,
    /// Next page, absent when it would be empty
    pub next_page: Option<i64>,
    /// Previous page, absent on the first page
    pub previous_page: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub data: Vec<ProductResponse>,
    pub pagination: PaginationResponse,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            data: page.products.into_iter().map(|p| p.into()).collect(),
            pagination: PaginationResponse {
                count: page.count,
                next_page: page.links.next_page,
                previous_page: page.links.previous_page,
            },
        }
    }
}
