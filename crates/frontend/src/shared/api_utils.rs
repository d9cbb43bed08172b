//! API utilities for frontend-backend communication

/// Port of `trunk serve` during development
const DEV_SERVER_PORT: &str = "8080";

/// Port the backend listens on by default (see `[server] port` in config.toml)
const DEV_BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// When the panel is served by the backend itself the API lives on the same
/// origin, so the base is empty and requests use relative `/api/...` URLs.
/// Only under `trunk serve` are requests sent to the backend port on the
/// same host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    base_for(&protocol, &hostname, &port)
}

fn base_for(protocol: &str, hostname: &str, page_port: &str) -> String {
    if page_port == DEV_SERVER_PORT {
        format!("{}//{}:{}", protocol, hostname, DEV_BACKEND_PORT)
    } else {
        String::new()
    }
}

/// Build a full API URL from a path that starts with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
