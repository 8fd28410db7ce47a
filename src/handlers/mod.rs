pub mod admin;
pub mod views;

use actix_web::HttpResponse;
use tera::{Context, Tera};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::ApiResponse;

/// Extracts the payload a view can display. Both failure channels end up
/// as a message here, but only after each was checked on its own terms:
/// transport errors via `Err`, application failures via the envelope code.
pub(crate) fn into_data<T>(result: Result<ApiResponse<T>, ApiError>) -> Result<T, String> {
    match result {
        Ok(reply) if reply.is_success() => Ok(reply.data),
        Ok(reply) => Err(reply.message),
        Err(err) => Err(err.to_string()),
    }
}

pub(crate) fn base_context(config: &Config) -> Context {
    let mut context = Context::new();
    context.insert("base_path", &config.base_path);
    context
}

pub(crate) fn render(tmpl: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tmpl.render(name, context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(err) => {
            log::error!("tera render error for {}: {:?}", name, err);
            HttpResponse::InternalServerError().body("Template render error")
        }
    }
}

pub(crate) fn redirect(config: &Config, to: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", format!("{}{}", config.base_path, to)))
        .finish()
}

/// Blank form inputs mean "field not provided", keeping update payloads
/// partial instead of writing empty strings through.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
