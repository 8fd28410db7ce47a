use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tera::Tera;

use super::{base_context, into_data, render};
use crate::api::ApiClient;
use crate::config::Config;

/// Query strings arrive as text; ids are parsed by hand so a blank
/// `?categoryId=` behaves like no filter instead of a 400.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub category_id: Option<String>,
    pub id: Option<String>,
}

fn parse_id(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.parse().ok())
}

pub async fn home(
    tmpl: web::Data<Tera>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let mut context = base_context(&config);
    match into_data(api.active_categories().await) {
        Ok(categories) => context.insert("categories", &categories),
        Err(err) => context.insert("error", &err),
    }
    render(&tmpl, "home.html", &context)
}

pub async fn products(
    tmpl: web::Data<Tera>,
    query: web::Query<CatalogQuery>,
    api: web::Data<ApiClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let category_id = parse_id(&query.category_id);
    let mut context = base_context(&config);

    // independent calls, no ordering between them
    let (categories, products) = futures_util::join!(
        api.active_categories(),
        api.active_products(category_id)
    );

    match into_data(categories) {
        Ok(categories) => context.insert("categories", &categories),
        Err(err) => context.insert("category_error", &err),
    }
    match into_data(products) {
        Ok(products) => context.insert("products", &products),
        Err(err) => context.insert("error", &err),
    }

    if let Some(id) = parse_id(&query.id) {
        match into_data(api.product(id).await) {
            Ok(product) => context.insert("product", &product),
            Err(err) => context.insert("detail_error", &err),
        }
    }

    // 0 never collides with a real id; it marks "no filter" to the template
    context.insert("selected_category", &category_id.unwrap_or(0));

    render(&tmpl, "products.html", &context)
}

pub async fn login(tmpl: web::Data<Tera>, config: web::Data<Config>) -> HttpResponse {
    render(&tmpl, "login.html", &base_context(&config))
}
