use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:8080")
///
/// Only the verbs the cart exposes are allowed: GET, POST, DELETE, OPTIONS.
pub fn init_cors() -> Cors {
    let allowed_origins =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
        .expose_headers(vec!["location"])
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_default_origins() {
        assert_eq!(
            parse_origins(DEFAULT_ORIGINS),
            vec!["http://localhost:5173", "http://localhost:8080"]
        );
    }

    #[test]
    fn should_trim_and_skip_empty_origins() {
        assert_eq!(
            parse_origins(" https://shop.example.com , ,https://admin.example.com,"),
            vec!["https://shop.example.com", "https://admin.example.com"]
        );
    }
}
