use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ApiResponse, CategoryPayload, ProductCategory, SortItem, SortRequest};

impl ApiClient {
    /// Active categories for the public storefront.
    pub async fn active_categories(
        &self,
    ) -> Result<ApiResponse<Vec<ProductCategory>>, ApiError> {
        let response = self
            .http
            .get(self.url("/product-categories"))
            .send()
            .await?;
        Self::read(response).await
    }

    /// All categories, inactive ones included.
    pub async fn admin_categories(
        &self,
    ) -> Result<ApiResponse<Vec<ProductCategory>>, ApiError> {
        let response = self
            .http
            .get(self.url("/admin/product-categories"))
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_create_category(
        &self,
        payload: &CategoryPayload,
    ) -> Result<ApiResponse<ProductCategory>, ApiError> {
        let response = self
            .http
            .post(self.url("/admin/product-categories"))
            .json(payload)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_update_category(
        &self,
        id: i64,
        payload: &CategoryPayload,
    ) -> Result<ApiResponse<ProductCategory>, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/admin/product-categories/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_delete_category(&self, id: i64) -> Result<ApiResponse<()>, ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/admin/product-categories/{}", id)))
            .send()
            .await?;
        Self::read(response).await
    }

    /// Flips the active flag. Method and path only, no body.
    pub async fn admin_toggle_category(
        &self,
        id: i64,
    ) -> Result<ApiResponse<ProductCategory>, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/admin/product-categories/{}/toggle", id)))
            .send()
            .await?;
        Self::read(response).await
    }

    pub async fn admin_sort_categories(
        &self,
        items: &[SortItem],
    ) -> Result<ApiResponse<()>, ApiError> {
        let response = self
            .http
            .put(self.url("/admin/product-categories/sort"))
            .json(&SortRequest { items })
            .send()
            .await?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{client, ok_envelope};
    use crate::error::ApiError;
    use crate::models::{CategoryPayload, SortItem};
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn category_json() -> serde_json::Value {
        json!({
            "id": 7,
            "name": "Cat Toys",
            "description": null,
            "sortOrder": 3,
            "isActive": true,
            "createdAt": "2024-05-01T08:00:00Z",
            "updatedAt": "2024-05-02T08:00:00Z",
        })
    }

    #[tokio::test]
    async fn create_sends_only_the_fields_that_are_set() {
        let (server, api) = client().await;
        Mock::given(method("POST"))
            .and(path("/api/admin/product-categories"))
            .and(body_json(json!({ "name": "Cat Toys", "sortOrder": 3 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(category_json())))
            .expect(1)
            .mount(&server)
            .await;

        let payload = CategoryPayload {
            name: Some("Cat Toys".to_string()),
            sort_order: Some(3),
            ..Default::default()
        };
        let reply = api.admin_create_category(&payload).await.unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.data.id, 7);
    }

    #[tokio::test]
    async fn toggle_sends_no_body() {
        let (server, api) = client().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/product-categories/7/toggle"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(category_json())))
            .expect(1)
            .mount(&server)
            .await;

        let reply = api.admin_toggle_category(7).await.unwrap();
        assert!(reply.is_success());
    }

    #[tokio::test]
    async fn sort_body_keeps_the_submitted_order() {
        let (server, api) = client().await;
        Mock::given(method("PUT"))
            .and(path("/api/admin/product-categories/sort"))
            .and(body_json(json!({ "items": [
                { "id": 1, "sortOrder": 2 },
                { "id": 3, "sortOrder": 1 },
            ]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(null))))
            .expect(1)
            .mount(&server)
            .await;

        let items = [
            SortItem { id: 1, sort_order: 2 },
            SortItem { id: 3, sort_order: 1 },
        ];
        let reply = api.admin_sort_categories(&items).await.unwrap();
        assert!(reply.is_success());
    }

    #[tokio::test]
    async fn http_failure_is_a_transport_error() {
        let (server, api) = client().await;
        Mock::given(method("DELETE"))
            .and(path("/api/admin/product-categories/9"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        match api.admin_delete_category(9).await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other.map(|r| r.code)),
        }
    }

    #[tokio::test]
    async fn application_failure_resolves_with_its_code() {
        let (server, api) = client().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/product-categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 50000,
                "message": "database unavailable",
                "data": [],
            })))
            .mount(&server)
            .await;

        let reply = api.admin_categories().await.unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.message, "database unavailable");
    }

    #[tokio::test]
    async fn unreachable_backend_rejects() {
        // A dropped listener's port refuses connections; a dropped MockServer
        // returns to wiremock's pool and keeps listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let api = crate::api::ApiClient::new(
            &format!("{}/api", uri),
            std::time::Duration::from_secs(1),
        )
        .unwrap();
        assert!(matches!(
            api.active_categories().await,
            Err(ApiError::Transport(_))
        ));
    }
}
