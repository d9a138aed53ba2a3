//! One-shot error messages carried across a redirect

use axum::{
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

pub const FLASH_COOKIE: &str = "flash_error";
pub const FLASH_HEADER: &str = "x-flash-error";

/// `303 See Other` to `location`, carrying `message` for the next page
pub fn redirect_with_flash(location: &str, message: &str) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    let headers = response.headers_mut();

    headers.insert(
        LOCATION,
        HeaderValue::from_str(location).unwrap_or_else(|_| HeaderValue::from_static("/")),
    );

    let cookie = format!(
        "{}={}; Path=/; Max-Age=60; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        URL_SAFE_NO_PAD.encode(message)
    );
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.insert(SET_COOKIE, value);
    }

    if let Ok(value) = HeaderValue::from_str(message) {
        headers.insert(FLASH_HEADER, value);
    }

    response
}

/// Decode the flash message from a request's cookies
#[cfg(test)]
pub(crate) fn read_flash(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, value)| URL_SAFE_NO_PAD.decode(value).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, HeaderMap};

    #[test]
    fn test_redirect_carries_message() {
        let response = redirect_with_flash("/signup", "Please try again.");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/signup");
        assert_eq!(response.headers()[FLASH_HEADER], "Please try again.");

        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash_error="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_invalid_location_falls_back_to_root() {
        let response = redirect_with_flash("/bad\nlocation", "msg");
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[test]
    fn test_read_flash_round_trip() {
        let response = redirect_with_flash("/", "The email domain does not exist.");
        let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        let pair = set_cookie.split(';').next().unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("session=abc; {}", pair)).unwrap(),
        );

        assert_eq!(
            read_flash(&headers).as_deref(),
            Some("The email domain does not exist.")
        );
    }

    #[test]
    fn test_read_flash_without_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session=abc"));
        assert_eq!(read_flash(&headers), None);
        assert_eq!(read_flash(&HeaderMap::new()), None);
    }
}
