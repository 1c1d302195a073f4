//! Page handlers.
//!
//! Deliberately bare markup: the pages exist to exercise the
//! authentication flows, not to be looked at.

use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::web::flash::take_flash;
use crate::web::middleware::{RequireAnonymous, RequireIdentity};

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// GET / - entry page with the login and registration forms.
///
/// Renders (and consumes) any pending flash message.
pub async fn entry(_guard: RequireAnonymous, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = take_flash(jar);
    let notice = flash
        .map(|message| format!("<p class=\"notice\">{}</p>\n", escape_html(&message)))
        .unwrap_or_default();

    let body = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Arcade</title></head>\n<body>\n\
         <h1>Arcade</h1>\n{notice}\
         <form method=\"post\" action=\"/login\">\n\
         <input name=\"name\" placeholder=\"Name\">\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/register\">\n\
         <input name=\"name\" placeholder=\"Name\">\n\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\">\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         </body>\n</html>\n"
    );

    (jar, Html(body))
}

/// GET /games - the protected lounge page.
pub async fn games(RequireIdentity(identity): RequireIdentity) -> Html<String> {
    let name = escape_html(&identity.name);
    let body = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Games</title></head>\n<body>\n\
         <h1>Games</h1>\n\
         <p>Signed in as {name}</p>\n\
         <form method=\"post\" action=\"/logout\">\n\
         <button type=\"submit\">Log out</button>\n\
         </form>\n\
         </body>\n</html>\n"
    );

    Html(body)
}
