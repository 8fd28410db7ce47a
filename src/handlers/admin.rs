use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, post, web};
use serde::Deserialize;
use tera::Tera;

use super::{base_context, into_data, non_empty, redirect, render};
use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{CategoryPayload, ProductFilter, ProductPayload, SortItem};

pub async fn dashboard(
    tmpl: web::Data<Tera>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let mut context = base_context(&config);
    let filter = ProductFilter::default();
    let (categories, products) = futures_util::join!(
        api.admin_categories(),
        api.admin_products(&filter)
    );
    match into_data(categories) {
        Ok(categories) => context.insert("category_count", &categories.len()),
        Err(err) => context.insert("error", &err),
    }
    match into_data(products) {
        Ok(products) => context.insert("product_count", &products.len()),
        Err(err) => context.insert("error", &err),
    }
    render(&tmpl, "admin/index.html", &context)
}

pub async fn categories(
    tmpl: web::Data<Tera>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let mut context = base_context(&config);
    match into_data(api.admin_categories().await) {
        Ok(categories) => context.insert("categories", &categories),
        Err(err) => context.insert("error", &err),
    }
    render(&tmpl, "admin/categories.html", &context)
}

/// Filter and edit-selection query for the product management view. All
/// fields come in as text; blanks are dropped rather than rejected.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category_id: Option<String>,
    pub is_active: Option<String>,
    pub keyword: Option<String>,
    pub edit: Option<String>,
}

impl ProductListQuery {
    fn filter(&self) -> ProductFilter {
        ProductFilter {
            category_id: self.category_id.as_deref().and_then(|v| v.parse().ok()),
            is_active: match self.is_active.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
            keyword: non_empty(self.keyword.clone()),
        }
    }
}

pub async fn products(
    tmpl: web::Data<Tera>,
    query: web::Query<ProductListQuery>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let filter = query.filter();
    let mut context = base_context(&config);

    let (products, categories) = futures_util::join!(
        api.admin_products(&filter),
        api.admin_categories()
    );
    match into_data(products) {
        Ok(products) => context.insert("products", &products),
        Err(err) => context.insert("error", &err),
    }
    match into_data(categories) {
        Ok(categories) => context.insert("categories", &categories),
        Err(err) => context.insert("category_error", &err),
    }

    if let Some(id) = query.edit.as_deref().and_then(|v| v.parse::<i64>().ok()) {
        match into_data(api.admin_product(id).await) {
            Ok(product) => context.insert("editing", &product),
            Err(err) => context.insert("error", &err),
        }
    }

    context.insert("filter_category", &filter.category_id.unwrap_or(0));
    context.insert(
        "filter_active",
        match filter.is_active {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        },
    );
    context.insert("filter_keyword", filter.keyword.as_deref().unwrap_or(""));

    render(&tmpl, "admin/products.html", &context)
}

#[derive(Deserialize)]
pub struct CategoryForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<String>,
    pub is_active: Option<String>,
}

impl CategoryForm {
    fn payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: non_empty(self.name.clone()),
            description: non_empty(self.description.clone()),
            sort_order: self.sort_order.as_deref().and_then(|v| v.parse().ok()),
            is_active: self.is_active.as_deref().and_then(|v| v.parse().ok()),
        }
    }
}

#[post("/categories/create")]
pub async fn create_category(
    form: web::Form<CategoryForm>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    match into_data(api.admin_create_category(&form.payload()).await) {
        Ok(_) => redirect(&config, "/admin/categories"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Failed to create: {}", e)),
    }
}

#[post("/categories/update")]
pub async fn update_category(
    form: web::Form<CategoryForm>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    let Some(id) = form.id.as_deref().and_then(|v| v.parse::<i64>().ok()) else {
        return HttpResponse::BadRequest().body("Invalid or missing id");
    };
    match into_data(api.admin_update_category(id, &form.payload()).await) {
        Ok(_) => redirect(&config, "/admin/categories"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Failed to update: {}", e)),
    }
}

#[post("/categories/delete")]
pub async fn delete_category(
    form: web::Form<HashMap<String, String>>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    if let Some(id) = form.get("delete_id").and_then(|v| v.parse::<i64>().ok()) {
        return match into_data(api.admin_delete_category(id).await) {
            Ok(_) => redirect(&config, "/admin/categories"),
            Err(e) => {
                HttpResponse::InternalServerError().body(format!("Failed to delete: {}", e))
            }
        };
    }
    HttpResponse::BadRequest().body("Invalid or missing delete_id")
}

#[post("/categories/toggle")]
pub async fn toggle_category(
    form: web::Form<HashMap<String, String>>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    if let Some(id) = form.get("toggle_id").and_then(|v| v.parse::<i64>().ok()) {
        return match into_data(api.admin_toggle_category(id).await) {
            Ok(_) => redirect(&config, "/admin/categories"),
            Err(e) => {
                HttpResponse::InternalServerError().body(format!("Failed to toggle: {}", e))
            }
        };
    }
    HttpResponse::BadRequest().body("Invalid or missing toggle_id")
}

/// Reorder submissions arrive as a JSON array in the `items` field,
/// written by the drag-and-drop script on the management pages.
fn parse_sort_items(form: &HashMap<String, String>) -> Option<Vec<SortItem>> {
    serde_json::from_str(form.get("items")?).ok()
}

#[post("/categories/sort")]
pub async fn sort_categories(
    form: web::Form<HashMap<String, String>>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    let Some(items) = parse_sort_items(&form) else {
        return HttpResponse::BadRequest().body("Invalid or missing items");
    };
    match into_data(api.admin_sort_categories(&items).await) {
        Ok(_) => redirect(&config, "/admin/categories"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Failed to sort: {}", e)),
    }
}

#[derive(Deserialize)]
pub struct ProductForm {
    pub id: Option<String>,
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    /// Comma or newline separated image references.
    pub images: Option<String>,
    /// Comma-separated.
    pub tags: Option<String>,
    pub is_active: Option<String>,
    pub sort_order: Option<String>,
}

impl ProductForm {
    fn payload(&self) -> ProductPayload {
        ProductPayload {
            category_id: self.category_id.as_deref().and_then(|v| v.parse().ok()),
            name: non_empty(self.name.clone()),
            description: non_empty(self.description.clone()),
            price: self.price.as_deref().and_then(|v| v.parse().ok()),
            price_unit: non_empty(self.price_unit.clone()),
            images: non_empty(self.images.clone()).map(|text| {
                text.split(|c: char| c == ',' || c == '\n')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(String::from)
                    .collect()
            }),
            tags: non_empty(self.tags.clone()).map(|text| {
                text.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            }),
            is_active: self.is_active.as_deref().and_then(|v| v.parse().ok()),
            sort_order: self.sort_order.as_deref().and_then(|v| v.parse().ok()),
        }
    }
}

#[post("/products/create")]
pub async fn create_product(
    form: web::Form<ProductForm>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    match into_data(api.admin_create_product(&form.payload()).await) {
        Ok(_) => redirect(&config, "/admin/products"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Failed to create: {}", e)),
    }
}

#[post("/products/update")]
pub async fn update_product(
    form: web::Form<ProductForm>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    let Some(id) = form.id.as_deref().and_then(|v| v.parse::<i64>().ok()) else {
        return HttpResponse::BadRequest().body("Invalid or missing id");
    };
    match into_data(api.admin_update_product(id, &form.payload()).await) {
        Ok(_) => redirect(&config, "/admin/products"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Failed to update: {}", e)),
    }
}

#[post("/products/delete")]
pub async fn delete_product(
    form: web::Form<HashMap<String, String>>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    if let Some(id) = form.get("delete_id").and_then(|v| v.parse::<i64>().ok()) {
        return match into_data(api.admin_delete_product(id).await) {
            Ok(_) => redirect(&config, "/admin/products"),
            Err(e) => {
                HttpResponse::InternalServerError().body(format!("Failed to delete: {}", e))
            }
        };
    }
    HttpResponse::BadRequest().body("Invalid or missing delete_id")
}

#[post("/products/toggle")]
pub async fn toggle_product(
    form: web::Form<HashMap<String, String>>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    if let Some(id) = form.get("toggle_id").and_then(|v| v.parse::<i64>().ok()) {
        return match into_data(api.admin_toggle_product(id).await) {
            Ok(_) => redirect(&config, "/admin/products"),
            Err(e) => {
                HttpResponse::InternalServerError().body(format!("Failed to toggle: {}", e))
            }
        };
    }
    HttpResponse::BadRequest().body("Invalid or missing toggle_id")
}

#[post("/products/sort")]
pub async fn sort_products(
    form: web::Form<HashMap<String, String>>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> impl Responder {
    let Some(items) = parse_sort_items(&form) else {
        return HttpResponse::BadRequest().body("Invalid or missing items");
    };
    match into_data(api.admin_sort_products(&items).await) {
        Ok(_) => redirect(&config, "/admin/products"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Failed to sort: {}", e)),
    }
}
