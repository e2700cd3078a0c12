//! Session cookie and token extraction.

use salvo::{
    http::{
        cookie::{Cookie, SameSite},
        header::AUTHORIZATION,
    },
    prelude::{Request, Response},
};

/// Cookie carrying the session token for browser clients.
pub(crate) const SESSION_COOKIE: &str = "thali_session";

pub(crate) fn set_session_cookie(res: &mut Response, token: String) {
    res.add_cookie(
        Cookie::build((SESSION_COOKIE, token))
            .http_only(true)
            .path("/")
            .same_site(SameSite::Lax)
            .build(),
    );
}

pub(crate) fn clear_session_cookie(res: &mut Response) {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .build();

    cookie.make_removal();

    res.add_cookie(cookie);
}

/// The session token from `Authorization: Bearer` or, failing that, the
/// session cookie.
pub(crate) fn session_token(req: &Request) -> Option<String> {
    extract_bearer_token(req)
        .map(str::to_owned)
        .or_else(|| {
            req.cookie(SESSION_COOKIE)
                .map(|cookie| cookie.value().trim().to_owned())
        })
        .filter(|token| !token.is_empty())
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
