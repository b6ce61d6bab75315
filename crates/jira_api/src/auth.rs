//! HTTP basic authentication helpers.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

/// Returns the `Authorization` header value for a username/password pair.
pub fn basic_auth_value(username: &str, password: &str) -> String {
    let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}
