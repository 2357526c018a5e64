use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Liveness probe
    Health,
    /// Product catalog CRUD and listing
    Products,
}
