use serde::{Deserialize, Serialize};

/// Envelope every backend reply arrives in. `code` is the application-level
/// result, independent of the HTTP status; 0 means success.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_unit: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub sort_order: i32,
    /// Denormalized by the backend for display, never sent back.
    #[serde(default)]
    pub category_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update body for a category. Unset fields stay off the wire, so
/// a subset payload is transmitted as exactly that subset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Create/update body for a product, same partial-record rules.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// One entry of a bulk-reorder request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SortItem {
    pub id: i64,
    pub sort_order: i32,
}

#[derive(Debug, Serialize)]
pub struct SortRequest<'a> {
    pub items: &'a [SortItem],
}

/// Admin product listing filter. `None` fields are omitted from the query
/// string entirely, which the backend reads as "no filter".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub is_active: Option<bool>,
    pub keyword: Option<String>,
}

impl ProductFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category_id) = self.category_id {
            params.push(("categoryId", category_id.to_string()));
        }
        if let Some(is_active) = self.is_active {
            params.push(("isActive", is_active.to_string()));
        }
        if let Some(keyword) = &self.keyword {
            params.push(("keyword", keyword.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_category_serializes_only_set_fields() {
        let payload = CategoryPayload {
            name: Some("Dog Supplies".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Dog Supplies" })
        );
    }

    #[test]
    fn partial_product_uses_camel_case_wire_names() {
        let payload = ProductPayload {
            category_id: Some(2),
            price_unit: Some("kg".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "categoryId": 2, "priceUnit": "kg", "isActive": false })
        );
    }

    #[test]
    fn sort_request_preserves_order_and_pairs() {
        let items = vec![
            SortItem { id: 1, sort_order: 2 },
            SortItem { id: 3, sort_order: 1 },
        ];
        assert_eq!(
            serde_json::to_value(SortRequest { items: &items }).unwrap(),
            json!({ "items": [
                { "id": 1, "sortOrder": 2 },
                { "id": 3, "sortOrder": 1 },
            ]})
        );
    }

    #[test]
    fn empty_filter_builds_an_empty_query() {
        assert!(ProductFilter::default().to_query().is_empty());
    }

    #[test]
    fn filter_emits_only_present_fields() {
        let filter = ProductFilter {
            category_id: Some(5),
            keyword: Some("leash".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("categoryId", "5".to_string()),
                ("keyword", "leash".to_string()),
            ]
        );
    }

    #[test]
    fn envelope_code_is_the_success_signal() {
        let ok: ApiResponse<Vec<ProductCategory>> = serde_json::from_value(json!({
            "code": 0,
            "message": "ok",
            "data": [{
                "id": 1,
                "name": "Cats",
                "sortOrder": 10,
                "isActive": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T00:00:00Z",
            }],
        }))
        .unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.data[0].name, "Cats");
        assert_eq!(ok.data[0].description, None);

        let failed: ApiResponse<()> = serde_json::from_value(json!({
            "code": 40001,
            "message": "category not found",
            "data": null,
        }))
        .unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.message, "category not found");
    }
}
