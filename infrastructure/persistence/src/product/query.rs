//! SQL for the `products` table. Every statement is parameterized.

const COLUMNS: &str = "id, name, quantity, created_at, deleted_at";

pub const INSERT: &str = "INSERT INTO products (name, quantity) VALUES ($1, $2) RETURNING id";

pub const UPDATE: &str =
    "UPDATE products SET name = $1, quantity = $2 WHERE id = $3 AND deleted_at IS NULL";

pub const SOFT_DELETE: &str =
    "UPDATE products SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL";

pub const COUNT_LIVE: &str = "SELECT COUNT(*) FROM products WHERE deleted_at IS NULL";

pub fn select_by_id() -> String {
    format!("SELECT {COLUMNS} FROM products WHERE deleted_at IS NULL AND id = $1")
}

pub fn select_by_name() -> String {
    format!("SELECT {COLUMNS} FROM products WHERE deleted_at IS NULL AND name = $1 ORDER BY id LIMIT 1")
}

/// `$1` is an optional ILIKE pattern, `$2` the limit and `$3` the raw offset.
pub fn select_page() -> String {
    format!(
        "SELECT {COLUMNS} FROM products \
         WHERE deleted_at IS NULL AND ($1::TEXT IS NULL OR name ILIKE $1) \
         ORDER BY id LIMIT $2 OFFSET $3"
    )
}

/// Builds a substring pattern for ILIKE, escaping the wildcards users may type.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
