use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ErrorKind;
use business::domain::product::pagination::{ProductFilter, ProductPage, compute_page_links};
use business::domain::product::use_cases::count::CountProductsUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_by_name::{
    GetProductByNameParams, GetProductByNameUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductIdResponse, ProductListResponse, ProductResponse,
    UpdateProductRequest,
};
use crate::api::product::params::{parse_filter, parse_id};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_name_use_case: Arc<dyn GetProductByNameUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    count_use_case: Arc<dyn CountProductsUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_name_use_case: Arc<dyn GetProductByNameUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        count_use_case: Arc<dyn CountProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            delete_use_case,
            list_use_case,
            count_use_case,
        }
    }

    /// Confirms the proposed next page by asking for it. An empty page drops
    /// the link; any other failure fails the whole listing.
    async fn page(&self, filter: ProductFilter) -> Result<ProductPage, ListProductsResponse> {
        let products = self
            .list_use_case
            .execute(ListProductsParams {
                filter: filter.clone(),
            })
            .await
            .map_err(|err| {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListProductsResponse::NotFound(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            })?;

        let mut links = compute_page_links(filter.page);
        if let Some(next_page) = links.next_page {
            let probe = self
                .list_use_case
                .execute(ListProductsParams {
                    filter: filter.at_page(next_page),
                })
                .await;
            match probe {
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => links.next_page = None,
                Err(err) => {
                    let (_status, json) = err.into_error_response();
                    return Err(ListProductsResponse::InternalError(json));
                }
            }
        }

        let count = self.count_use_case.execute().await.map_err(|err| {
            let (_status, json) = err.into_error_response();
            ListProductsResponse::InternalError(json)
        })?;

        Ok(ProductPage {
            products,
            count,
            links,
        })
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, deleting and listing products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            quantity: body.0.quantity,
        };

        match self.create_use_case.execute(params).await {
            Ok(id) => CreateProductResponse::Ok(Json(ProductIdResponse { id })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// `page` is a row offset (default 0), `limit` the window size (default 10)
    /// and `name` an optional case-insensitive substring filter.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
        name: Query<Option<String>>,
    ) -> ListProductsResponse {
        let filter = match parse_filter(page.0, limit.0, name.0) {
            Ok(filter) => filter,
            Err(json) => return ListProductsResponse::BadRequest(json),
        };

        match self.page(filter).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(response) => response,
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by its exact name
    #[oai(path = "/products/name/:name", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_name(&self, name: Path<String>) -> GetProductResponse {
        match self
            .get_by_name_use_case
            .execute(GetProductByNameParams { name: name.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductResponse::BadRequest(json),
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces name and quantity. Unknown ids are accepted without effect.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            name: body.0.name,
            quantity: body.0.quantity,
        };

        match self.update_use_case.execute(params).await {
            Ok(id) => UpdateProductResponse::Ok(Json(ProductIdResponse { id })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Soft-deletes the product; it disappears from every read.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

fn invalid_body(err: poem::Error) -> Json<ErrorResponse> {
    tracing::debug!(error = %err, "rejected request body");
    ErrorResponse::validation("product.invalid_body")
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(invalid_body(err))
}

#[derive(ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductIdResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(invalid_body(err))
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
