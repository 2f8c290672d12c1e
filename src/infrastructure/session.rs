//! Signed-cookie session store
//!
//! The session flag lives in a single HMAC-signed cookie. A tampered or
//! unsigned cookie fails signature verification inside `SignedCookieJar`
//! and reads as anonymous.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

use crate::domain::Session;

/// Cookie value marking an authenticated session
const LOGGED_IN: &str = "1";

/// Session flag backed by a signed cookie jar
pub struct CookieSession {
    jar: SignedCookieJar,
    cookie_name: String,
}

impl CookieSession {
    pub fn new(jar: SignedCookieJar, cookie_name: impl Into<String>) -> Self {
        Self {
            jar,
            cookie_name: cookie_name.into(),
        }
    }

    /// Recover the jar for inclusion in the response
    pub fn into_jar(self) -> SignedCookieJar {
        self.jar
    }
}

impl Session for CookieSession {
    fn logged_in(&self) -> bool {
        self.jar
            .get(&self.cookie_name)
            .is_some_and(|cookie| cookie.value() == LOGGED_IN)
    }

    fn login(self) -> Self {
        let cookie = Cookie::build((self.cookie_name.clone(), LOGGED_IN))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        Self {
            jar: self.jar.add(cookie),
            cookie_name: self.cookie_name,
        }
    }

    fn logout(self) -> Self {
        let cookie = Cookie::build((self.cookie_name.clone(), ""))
            .path("/")
            .build();
        Self {
            jar: self.jar.remove(cookie),
            cookie_name: self.cookie_name,
        }
    }
}
