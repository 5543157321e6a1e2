//! Image URL format check. Purely syntactic, nothing is resolved.

use std::sync::LazyLock;

use regex::Regex;

/// `http(s)://host[:port][/path][?query][#fragment]`, where host is a dotted
/// name ending in a 2+ letter label or a dotted-quad address. Letters fold
/// ASCII-only, so look-alikes such as KELVIN SIGN do not count as `k`.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i-u)^(https?://)",
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.?)+[a-z]{2,}|",
        r"(([0-9]{1,3}\.){3}[0-9]{1,3}))",
        r"(:[0-9]+)?(/[-a-z0-9%@_.~+&:]*)*",
        r"(\?[;&a-z0-9%@_.,~+&:=-]*)?",
        r"(#[-a-z0-9_]*)?$",
    ))
    .expect("url: static regex pattern must compile")
});

/// Whether `url` looks like an http(s) URL. The input is not trimmed.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_image_urls() {
        assert!(is_valid_url("https://example.com/img.png"));
        assert!(is_valid_url("http://x.test/a.png"));
        assert!(is_valid_url("https://cdn.example.co.uk/assets/header-bg_2.jpg"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM/IMG.PNG"));
    }

    #[test]
    fn accepts_port_query_and_fragment() {
        assert!(is_valid_url("http://example.com:8080/a/b.png"));
        assert!(is_valid_url("https://example.com/img.png?w=800&h=200"));
        assert!(is_valid_url("https://example.com/page#top"));
        assert!(is_valid_url("https://example.com"));
    }

    #[test]
    fn accepts_dotted_quad() {
        assert!(is_valid_url("http://192.168.0.1/img.png"));
        assert!(is_valid_url("http://10.0.0.1:3000"));
    }

    #[test]
    fn rejects_non_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com/img.png"));
        assert!(!is_valid_url("ftp://example.com/img.png"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://example.c"));
        assert!(!is_valid_url("https://example.co\u{212A}/a.png"));
        assert!(!is_valid_url("https://\u{17F}ite.com/"));
        assert!(!is_valid_url("https://site.com/\u{17F}.png"));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(!is_valid_url(" https://example.com/img.png"));
        assert!(!is_valid_url("https://example.com/img.png "));
        assert!(!is_valid_url("https://example.com/my image.png"));
    }
}
