//! Remote catalog client
//!
//! Fetch wrapper for the product endpoints. Raw wire products are
//! normalized into canonical [`Product`]s right here, so search and cart
//! logic never see the backend's heterogeneous field names. Empty result
//! vs transport error is the caller's distinction: an empty `Vec` is a
//! successful response.

use shared::api::{
    AckResponse, CategoriesResponse, FeaturedProductsResponse, ProductByIdRequest,
    ProductListResponse, ProductResponse, RateProductRequest,
};
use shared::models::Product;

use crate::{ClientError, ClientResult, HttpClient};

/// Client for the product/catalog endpoints
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
}

impl CatalogClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the full product collection, normalized
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let response: ProductListResponse = self.http.get("/api/product/get-all").await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        Ok(normalize_all(response.products))
    }

    /// Fetch one product by id
    pub async fn get_product(&self, product_id: &str) -> ClientResult<Product> {
        let request = ProductByIdRequest {
            product_id: product_id.to_string(),
        };
        let response: ProductResponse = self.http.post("/api/product/get-by-id", &request).await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        response
            .product
            .and_then(shared::models::RawProduct::normalize)
            .ok_or_else(|| ClientError::NotFound(format!("Product {} not found", product_id)))
    }

    /// Fetch featured products, normalized
    pub async fn featured_products(&self) -> ClientResult<Vec<Product>> {
        let response: FeaturedProductsResponse =
            self.http.get("/api/get/featured-products").await?;
        Ok(normalize_all(response.featured_products))
    }

    /// Fetch the category names
    pub async fn list_categories(&self) -> ClientResult<Vec<String>> {
        let response: CategoriesResponse = self.http.get("/api/product/get-categories").await?;
        Ok(response
            .categories
            .into_iter()
            .map(|c| c.category)
            .collect())
    }

    /// Submit a rating for a product
    ///
    /// No client-side clamping: the backend owns rating bounds and
    /// per-user overwrite semantics.
    pub async fn rate_product(
        &self,
        product_id: &str,
        user_id: &str,
        new_rating: f64,
    ) -> ClientResult<()> {
        let request = RateProductRequest {
            user_id: user_id.to_string(),
            new_rating,
        };
        let response: AckResponse = self
            .http
            .put(&format!("/api/product/{}/rate", product_id), &request)
            .await?;
        if !response.success {
            return Err(ClientError::rejected(response.message));
        }
        Ok(())
    }
}

fn normalize_all(raw: Vec<shared::models::RawProduct>) -> Vec<Product> {
    raw.into_iter().filter_map(|p| p.normalize()).collect()
}
