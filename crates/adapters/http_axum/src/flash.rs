//! One-shot flash messages carried in a signed cookie.
//!
//! A mutating flow (reset) pushes a message and redirects; the next rendered
//! settings page takes every pending message and clears the cookie in the
//! same response. The cookie is signed with the configured secret, so a
//! client cannot forge or alter notices.

use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

/// Cookie holding the pending messages as a JSON string array.
pub const COOKIE_NAME: &str = "sandman_flash";

/// Append a message for the next rendered page.
#[must_use]
pub fn push(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    let mut messages = peek(&jar);
    messages.push(message.to_string());
    let payload = serde_json::to_string(&messages).unwrap_or_default();
    jar.add(make_cookie(payload))
}

/// Take every pending message, clearing the cookie.
#[must_use]
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    let messages = peek(&jar);
    let jar = jar.remove(make_cookie(String::new()));
    (jar, messages)
}

fn peek(jar: &SignedCookieJar) -> Vec<String> {
    jar.get(COOKIE_NAME)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

fn make_cookie(value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(COOKIE_NAME, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn empty_jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn should_take_pushed_message_exactly_once() {
        let jar = push(empty_jar(), "The config file could not be reset.");

        let (jar, messages) = take(jar);
        assert_eq!(messages, vec!["The config file could not be reset."]);

        let (_, again) = take(jar);
        assert!(again.is_empty());
    }

    #[test]
    fn should_accumulate_multiple_messages_in_order() {
        let jar = push(empty_jar(), "first");
        let jar = push(jar, "second");

        let (_, messages) = take(jar);
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn should_take_nothing_from_an_empty_jar() {
        let (_, messages) = take(empty_jar());
        assert!(messages.is_empty());
    }
}
