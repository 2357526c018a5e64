//! Parsing of raw path and query strings into use-case inputs.
//!
//! Failures are returned as ready-made 400 bodies so handlers can bail out
//! before any use case runs.

use poem_openapi::payload::Json;

use business::domain::product::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, ProductFilter};

use crate::api::error::ErrorResponse;

pub fn parse_id(raw: &str) -> Result<i64, Json<ErrorResponse>> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

fn parse_optional_int(
    raw: Option<String>,
    default: i64,
    message: &str,
) -> Result<i64, Json<ErrorResponse>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| ErrorResponse::validation(message)),
    }
}

/// Builds the listing filter from `page`, `limit` and `name` query values.
///
/// `page` is a raw row offset. Neither value may be negative; a zero `limit`
/// yields an empty window.
pub fn parse_filter(
    page: Option<String>,
    limit: Option<String>,
    name: Option<String>,
) -> Result<ProductFilter, Json<ErrorResponse>> {
    let page = parse_optional_int(page, DEFAULT_PAGE, "product.invalid_page")?;
    if page < 0 {
        return Err(ErrorResponse::validation("product.invalid_page"));
    }

    let limit = parse_optional_int(limit, DEFAULT_LIMIT, "product.invalid_limit")?;
    if limit < 0 {
        return Err(ErrorResponse::validation("product.invalid_limit"));
    }

    Ok(ProductFilter::new(page, limit, name))
}
