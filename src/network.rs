//! Network URL constants for the Storefront SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.storefront.example";

/// Default base URL for product image uploads.
pub const DEFAULT_UPLOADS_URL: &str = "https://api.storefront.example/uploads";
