
/// URL of the backend search endpoint
pub const SEARCH_API_URL: &'static str = &"/api/search";
