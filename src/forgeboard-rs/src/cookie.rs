//! Cookie strategies for the two kinds of hosting environment.
//!
//! Browser-like hosts already have a cookie jar; server-rendering hosts do
//! not, and must replay the cookies of the request they are handling. The
//! hosting environment picks an implementation at client construction — the
//! client never sniffs its surroundings.

/// One cookie captured from a hosting environment's request context.
#[derive(Debug, Clone)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Where outgoing requests get their `Cookie` header from.
pub trait CookieSource: Send + Sync {
    /// Value for the outgoing `Cookie` header, or `None` to leave cookie
    /// handling to the client's own jar.
    fn cookie_header(&self) -> Option<String>;
}

/// Browser-like hosts: the client's jar tracks session cookies on its own,
/// so no header is injected.
pub struct AmbientJar;

impl CookieSource for AmbientJar {
    fn cookie_header(&self) -> Option<String> {
        None
    }
}

/// Server-rendering hosts: cookies captured from the incoming request are
/// replayed on every outgoing one.
pub struct ExplicitCookies {
    cookies: Vec<Cookie>,
}

impl ExplicitCookies {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }
}

impl CookieSource for ExplicitCookies {
    fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let header = self
            .cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(header)
    }
}
