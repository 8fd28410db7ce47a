use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup from the environment
/// (`.env` is loaded by `main` before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Public base path every route and asset lives under, e.g. `/eyangpet`.
    pub base_path: String,
    /// Backend origin the API proxy forwards to.
    pub api_target: String,
    pub rewrite: RewritePolicy,
    pub request_timeout: Duration,
}

/// Whether the proxy strips the public base path before forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewritePolicy {
    /// Strip only when the target looks like a local address.
    Auto,
    Always,
    Never,
}

impl RewritePolicy {
    fn parse(value: &str) -> Self {
        match value {
            "always" => RewritePolicy::Always,
            "never" => RewritePolicy::Never,
            _ => RewritePolicy::Auto,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5173);
        let base_path = env::var("BASE_PATH")
            .unwrap_or_else(|_| "/eyangpet".to_string())
            .trim_end_matches('/')
            .to_string();
        let api_target = env::var("API_TARGET")
            .unwrap_or_else(|_| "http://localhost:9909".to_string())
            .trim_end_matches('/')
            .to_string();
        let rewrite = RewritePolicy::parse(
            env::var("PROXY_REWRITE")
                .unwrap_or_else(|_| "auto".to_string())
                .as_str(),
        );
        let request_timeout = Duration::from_secs(
            env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        );

        Config {
            host,
            port,
            base_path,
            api_target,
            rewrite,
            request_timeout,
        }
    }

    /// True when forwarded paths should drop the public base path.
    ///
    /// The locality test is a substring match on `localhost`, kept from the
    /// configuration this replaces. A public hostname that happens to
    /// contain `localhost` would be misclassified; `PROXY_REWRITE=never`
    /// is the escape hatch.
    pub fn should_rewrite(&self) -> bool {
        match self.rewrite {
            RewritePolicy::Always => true,
            RewritePolicy::Never => false,
            RewritePolicy::Auto => self.api_target.contains("localhost"),
        }
    }

    /// Rewrites an inbound request path for forwarding. `{base}/api/...`
    /// becomes `/api/...` when rewriting applies; otherwise the path is
    /// passed through untouched.
    pub fn forwarded_path<'a>(&self, path: &'a str) -> &'a str {
        if !self.should_rewrite() {
            return path;
        }
        let prefix = format!("{}/api", self.base_path);
        if path.starts_with(&prefix) {
            &path[self.base_path.len()..]
        } else {
            path
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(api_target: &str, rewrite: RewritePolicy) -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            base_path: "/eyangpet".to_string(),
            api_target: api_target.trim_end_matches('/').to_string(),
            rewrite,
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Base URL the server-side API bindings call, always ending in `/api`.
    /// Local targets take bare `/api`; public targets expect the full
    /// base-path prefix, same decision the proxy makes.
    pub fn api_base(&self) -> String {
        if self.should_rewrite() {
            format!("{}/api", self.api_target)
        } else {
            format!("{}{}/api", self.api_target, self.base_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_target_strips_base_path() {
        let cfg = Config::for_tests("http://localhost:9909", RewritePolicy::Auto);
        assert_eq!(cfg.forwarded_path("/eyangpet/api/products"), "/api/products");
        assert_eq!(
            cfg.forwarded_path("/eyangpet/api/admin/products/3/toggle"),
            "/api/admin/products/3/toggle"
        );
    }

    #[test]
    fn public_target_keeps_path_unchanged() {
        let cfg = Config::for_tests("https://prod.example.com/eyangpet", RewritePolicy::Auto);
        assert_eq!(
            cfg.forwarded_path("/eyangpet/api/products"),
            "/eyangpet/api/products"
        );
    }

    #[test]
    fn rewrite_overrides_beat_locality() {
        let local = Config::for_tests("http://localhost:9909", RewritePolicy::Never);
        assert_eq!(
            local.forwarded_path("/eyangpet/api/products"),
            "/eyangpet/api/products"
        );

        let public = Config::for_tests("https://prod.example.com", RewritePolicy::Always);
        assert_eq!(public.forwarded_path("/eyangpet/api/products"), "/api/products");
    }

    #[test]
    fn paths_outside_the_api_prefix_are_not_rewritten() {
        let cfg = Config::for_tests("http://localhost:9909", RewritePolicy::Auto);
        assert_eq!(cfg.forwarded_path("/eyangpet/products"), "/eyangpet/products");
    }

    #[test]
    fn api_base_follows_the_rewrite_decision() {
        let local = Config::for_tests("http://localhost:9909", RewritePolicy::Auto);
        assert_eq!(local.api_base(), "http://localhost:9909/api");

        let public = Config::for_tests("https://prod.example.com", RewritePolicy::Auto);
        assert_eq!(public.api_base(), "https://prod.example.com/eyangpet/api");
    }
}
