/// How long the "Link copied" notice stays up, in milliseconds.
pub const COPY_NOTICE_MS: u32 = 2_000;

#[cfg(debug_assertions)]
const FALLBACK_ORIGIN: &str = "http://localhost:8080"; // trunk serve

#[cfg(not(debug_assertions))]
const FALLBACK_ORIGIN: &str = "";

/// Origin that shareable card links are built on.
///
/// A build-time `CARD_SHARE_ORIGIN` wins, so a deployment can point links at
/// a canonical host. Otherwise links follow whatever host is serving the page.
pub fn get_share_origin() -> String {
    if let Some(origin) = option_env!("CARD_SHARE_ORIGIN").and_then(normalize_origin) {
        return origin;
    }

    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .and_then(|origin| normalize_origin(&origin))
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

fn normalize_origin(origin: &str) -> Option<String> {
    let origin = origin.trim().trim_end_matches('/');
    if origin.is_empty() || origin == "null" {
        None
    } else {
        Some(origin.to_string())
    }
}
