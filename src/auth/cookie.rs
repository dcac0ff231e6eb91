use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use time::Duration;

/// Name of the session cookie. Kept spelled this way for compatibility
/// with existing clients.
pub const SESSION_COOKIE: &str = "Authorisation";

/// Builds the `Set-Cookie` value for a freshly issued session token.
pub fn session_cookie(token: &str, max_age: Duration) -> anyhow::Result<HeaderValue> {
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        max_age.whole_seconds()
    );
    Ok(HeaderValue::from_str(&cookie)?)
}

/// Builds the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("Authorisation=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pulls the session token out of the `Cookie` header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(COOKIE)?.to_str().ok()?;
    for pair in value.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_cookie_round_trips_through_extraction() {
        let set = session_cookie("tok123", Duration::hours(24)).expect("header value");
        let set = set.to_str().expect("ascii");
        assert!(set.contains("HttpOnly"));
        assert!(set.contains("SameSite=Lax"));
        assert!(set.contains("Max-Age=86400"));

        // The client echoes back only the name=value pair.
        let pair = set.split(';').next().expect("first attr");
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(pair).expect("cookie"));
        assert_eq!(session_token(&headers).as_deref(), Some("tok123"));
    }

    #[test]
    fn extraction_finds_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; Authorisation=abc.def.ghi; lang=en"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn extraction_returns_none_without_cookie_header() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn extraction_returns_none_for_other_cookies_only() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = clear_session_cookie();
        assert!(value.to_str().unwrap().contains("Max-Age=0"));
    }
}
