//! One-shot flash messages.
//!
//! A flash message survives exactly one redirect: it is set as a cookie on
//! the redirecting response and removed the next time a page takes it.

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "arcade_flash";

fn flash_cookie(value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(FLASH_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie
}

/// Queue a flash message for the next page render.
pub fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    jar.add(flash_cookie(message.to_string()))
}

/// Take the pending flash message, clearing it from the jar.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            let jar = jar.remove(flash_cookie(String::new()));
            (jar, Some(message))
        }
        None => (jar, None),
    }
}
