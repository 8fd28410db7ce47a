use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::config::Config;

/// Development-time forwarder for `{base}/api/*`. Path rewriting follows
/// `Config::forwarded_path`; the outbound Host header is derived from the
/// target URL rather than copied from the inbound request, since backends
/// commonly validate Host.
pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    config: web::Data<Config>,
    client: web::Data<reqwest::Client>,
) -> HttpResponse {
    let mut url = format!("{}{}", config.api_target, config.forwarded_path(req.path()));
    if !req.query_string().is_empty() {
        url.push('?');
        url.push_str(req.query_string());
    }

    let method = match reqwest::Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return HttpResponse::MethodNotAllowed().finish(),
    };

    let mut upstream = client.request(method, &url);
    for (name, value) in req.headers() {
        if skip_header(name.as_str()) {
            continue;
        }
        upstream = upstream.header(name.as_str(), value.as_bytes());
    }

    match upstream.body(body.to_vec()).send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let mut reply = HttpResponse::build(status);
            for (name, value) in response.headers() {
                if skip_header(name.as_str()) {
                    continue;
                }
                reply.append_header((name.as_str(), value.as_bytes()));
            }
            reply.streaming(response.bytes_stream())
        }
        Err(err) => {
            log::warn!("proxy target {} failed: {}", url, err);
            HttpResponse::BadGateway().body(format!("Error forwarding to backend: {}", err))
        }
    }
}

/// Hop-by-hop headers plus the ones the forwarding client recomputes.
fn skip_header(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "host"
            | "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "content-length"
    )
}
