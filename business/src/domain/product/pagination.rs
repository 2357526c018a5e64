use serde::{Deserialize, Serialize};

use super::model::Product;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;

/// Window and filter for a product listing.
///
/// `page` is used as a raw row offset, it is not multiplied by `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub page: i64,
    pub limit: i64,
    pub name: Option<String>,
}

impl ProductFilter {
    pub fn new(page: i64, limit: i64, name: Option<String>) -> Self {
        Self {
            page,
            limit,
            name: name.filter(|n| !n.is_empty()),
        }
    }

    /// Same filter, moved to another page.
    pub fn at_page(&self, page: i64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub next_page: Option<i64>,
    pub previous_page: Option<i64>,
}

/// Proposes neighbour pages for `current_page`.
///
/// The next page is proposed unless it would overflow; callers must confirm
/// it exists before exposing it.
pub fn compute_page_links(current_page: i64) -> PageLinks {
    PageLinks {
        next_page: current_page.checked_add(1),
        previous_page: (current_page > 0).then(|| current_page - 1),
    }
}

/// One page of products as returned to API clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub count: i64,
    pub links: PageLinks,
}
