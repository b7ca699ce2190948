use std::borrow::Cow;

use crate::Route;

/// The two names a card is made of, in display (decoded) form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardNames {
    pub name: String,
    pub from: String,
}

impl CardNames {
    /// Builds names from raw form input. Both fields are trimmed and must
    /// be non-empty afterwards.
    pub fn from_form(name: &str, from: &str) -> Option<Self> {
        let name = name.trim();
        let from = from.trim();
        if name.is_empty() || from.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            from: from.to_string(),
        })
    }

    /// Builds names from the two still-encoded path segments of a card URL.
    pub fn from_segments(name: &str, from: &str) -> Option<Self> {
        if name.is_empty() || from.is_empty() {
            return None;
        }
        Some(Self {
            name: decode_segment(name),
            from: decode_segment(from),
        })
    }

    pub fn encoded_name(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.name)
    }

    pub fn encoded_from(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.from)
    }

    /// Host-relative path of this card, e.g. `/Alice/Bob`.
    pub fn local_path(&self) -> String {
        format!("/{}/{}", self.encoded_name(), self.encoded_from())
    }

    /// Absolute link that can be handed to someone else.
    pub fn share_url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.local_path())
    }

    pub fn route(&self) -> Route {
        Route::Card {
            name: self.encoded_name().into_owned(),
            from: self.encoded_from().into_owned(),
        }
    }
}

/// Percent-decodes one path segment. Hand-edited URLs can carry broken
/// escapes, so invalid UTF-8 is replaced instead of rejected.
fn decode_segment(segment: &str) -> String {
    let bytes = urlencoding::decode_binary(segment.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    fn names(name: &str, from: &str) -> CardNames {
        CardNames::from_form(name, from).expect("valid names")
    }

    fn path_segments(path: &str) -> (String, String) {
        let mut parts = path.trim_start_matches('/').split('/');
        let name = parts.next().unwrap_or_default().to_string();
        let from = parts.next().unwrap_or_default().to_string();
        assert!(parts.next().is_none(), "path {path} has more than two segments");
        (name, from)
    }

    #[test]
    fn form_input_is_trimmed() {
        let n = names("  Alice ", "\tBob\n");
        assert_eq!(n.name, "Alice");
        assert_eq!(n.from, "Bob");
    }

    #[test]
    fn blank_form_fields_are_rejected() {
        assert_eq!(CardNames::from_form("", "Bob"), None);
        assert_eq!(CardNames::from_form("Alice", ""), None);
        assert_eq!(CardNames::from_form("   ", "Bob"), None);
        assert_eq!(CardNames::from_form("Alice", " \t "), None);
    }

    #[test]
    fn share_url_joins_origin_and_segments() {
        let n = names("Alice", "Bob");
        assert_eq!(n.share_url("https://cards.example.com"), "https://cards.example.com/Alice/Bob");
        assert_eq!(n.share_url("https://cards.example.com/"), "https://cards.example.com/Alice/Bob");
    }

    #[test]
    fn reserved_characters_stay_inside_their_segment() {
        let n = names("Mary Jane / Jr.", "50% #1 fan?");
        let path = n.local_path();
        assert_eq!(path, "/Mary%20Jane%20%2F%20Jr./50%25%20%231%20fan%3F");

        let (name, from) = path_segments(&path);
        assert_eq!(CardNames::from_segments(&name, &from), Some(n));
    }

    #[test]
    fn links_decode_back_to_the_submitted_names() {
        let cases = [
            ("Alice", "Bob"),
            (" Zoë ", "Łukasz"),
            ("山田 花子", "🎂 the office 🎉"),
            ("a+b=c&d", "100%"),
            ("..", "~tilde_under-score."),
        ];
        for (name, from) in cases {
            let submitted = names(name, from);
            let url = submitted.share_url("https://cards.example.com");
            let path = url.strip_prefix("https://cards.example.com").unwrap();
            let (n, f) = path_segments(path);
            let decoded = CardNames::from_segments(&n, &f).unwrap();
            assert_eq!(decoded.name, name.trim());
            assert_eq!(decoded.from, from.trim());
        }
    }

    #[test]
    fn missing_segments_yield_nothing() {
        assert_eq!(CardNames::from_segments("Alice", ""), None);
        assert_eq!(CardNames::from_segments("", "Bob"), None);
    }

    #[test]
    fn broken_escapes_are_shown_literally() {
        let n = CardNames::from_segments("100%", "%zz").unwrap();
        assert_eq!(n.name, "100%");
        assert_eq!(n.from, "%zz");

        // a lone continuation byte is not UTF-8
        let n = CardNames::from_segments("A%80B", "Bob").unwrap();
        assert_eq!(n.name, "A\u{FFFD}B");
    }

    #[test]
    fn card_route_carries_encoded_segments() {
        let n = names("Mary Jane", "Bob");
        assert_eq!(
            n.route(),
            Route::Card {
                name: "Mary%20Jane".to_string(),
                from: "Bob".to_string(),
            }
        );
        assert_eq!(n.route().to_path(), n.local_path());
    }
}
