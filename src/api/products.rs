use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ApiResponse, Product, ProductFilter, ProductPayload, SortItem, SortRequest};

impl ApiClient {
    /// Active products for the storefront. When no category filter is
    /// given the key is left out of the query entirely; an empty query
    /// means "no filter" to the backend.
    pub async fn active_products(
        &self,
        category_id: Option<i64>,
    ) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(category_id) = category_id {
            params.push(("categoryId", category_id.to_string()));
        }
        let response = self
            .http
            .get(self.url("/products"))
            .query(&params)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn product(&self, id: i64) -> Result<ApiResponse<Product>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/products/{}", id)))
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        let response = self
            .http
            .get(self.url("/admin/products"))
            .query(&filter.to_query())
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_product(&self, id: i64) -> Result<ApiResponse<Product>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/admin/products/{}", id)))
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_create_product(
        &self,
        payload: &ProductPayload,
    ) -> Result<ApiResponse<Product>, ApiError> {
        let response = self
            .http
            .post(self.url("/admin/products"))
            .json(payload)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<ApiResponse<Product>, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/admin/products/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_delete_product(&self, id: i64) -> Result<ApiResponse<()>, ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/admin/products/{}", id)))
            .send()
            .await?;
        Self::read(response).await
    }

    /// Flips the active flag. Method and path only, no body.
    pub async fn admin_toggle_product(&self, id: i64) -> Result<ApiResponse<Product>, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/admin/products/{}/toggle", id)))
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_sort_products(
        &self,
        items: &[SortItem],
    ) -> Result<ApiResponse<()>, ApiError> {
        let response = self
            .http
            .put(self.url("/admin/products/sort"))
            .json(&SortRequest { items })
            .send()
            .await?;
        Self::read(response).await
    }
}
