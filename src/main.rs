mod api;
mod config;
mod error;
mod handlers;
mod models;
mod proxy;

use actix_files::Files;
use actix_web::{App, HttpServer, Scope, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use api::ApiClient;
use config::Config;
use handlers::{admin, views};

/// The whole navigation surface lives under the public base path:
/// storefront views, the nested admin section, static assets, and the
/// development proxy for `{base}/api/*`.
fn routes(base_path: &str) -> Scope {
    web::scope(base_path)
        .service(web::resource("/api/{tail:.*}").to(proxy::forward))
        .route("", web::get().to(views::home))
        .route("/", web::get().to(views::home))
        .route("/products", web::get().to(views::products))
        .route("/login", web::get().to(views::login))
        .service(
            web::scope("/admin")
                .route("", web::get().to(admin::dashboard))
                .route("/categories", web::get().to(admin::categories))
                .route("/products", web::get().to(admin::products))
                .service(admin::create_category)
                .service(admin::update_category)
                .service(admin::delete_category)
                .service(admin::toggle_category)
                .service(admin::sort_categories)
                .service(admin::create_product)
                .service(admin::update_product)
                .service(admin::delete_product)
                .service(admin::toggle_product)
                .service(admin::sort_products),
        )
        .service(Files::new("/assets", "public/assets"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let api = ApiClient::new(&config.api_base(), config.request_timeout)
        .map_err(std::io::Error::other)?;
    let proxy_client = reqwest::Client::new();
    let tera = Tera::new("public/**/*.html").map_err(std::io::Error::other)?;

    log::info!(
        "listening on {}:{}, base path {}, backend {}",
        config.host,
        config.port,
        config.base_path,
        config.api_target
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(proxy_client.clone()))
            .wrap(middleware::Logger::default())
            .service(routes(&config.base_path))
    })
    .bind(bind)?
    .run()
    .await
}
