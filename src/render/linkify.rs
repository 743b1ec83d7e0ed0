//! URL detection and anchor substitution.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::encode_html_entities;
use crate::safe::{Linkified, SafeHtml};

/// URL-like tokens: an explicit `http://`, `https://`, `ftp://` or `mailto:`
/// prefix (group 2), or a bare `www.` prefix, followed by the shortest run
/// of non-whitespace characters that reaches a terminal symbol. The terminal
/// symbol (group 3) ends the token without being part of it: whitespace, a
/// quote, a closing bracket, an already-escaped `>` (`&#62`), or end of
/// line. Prefixes are matched lowercase only.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)((?:(https?://|ftp://|mailto:)|www\.)\S+?)(\s|"|'|\)|\]|\}|&#62|$)"#)
        .unwrap()
});

/// Auto-links URLs in `text` for HTML embedding.
///
/// Returns [`Linkified::Raw`] untouched when `text` is absent or contains no
/// URL-like token; in that case nothing is escaped either, even if the text
/// carries markup characters. When at least one token matches, the whole
/// text is entity-escaped first and every token is then replaced with an
/// anchor element. Bare `www.` tokens get an `https://` href prefix; tokens
/// with an explicit protocol keep it verbatim.
///
/// The match check runs on the raw text, the substitution on the escaped
/// text. Matches are re-derived rather than reused: escaping shifts offsets
/// and rewrites characters (an `&` inside a URL becomes `&#38;` and the
/// token must still span it).
pub fn linkify(text: Option<&str>) -> Linkified<'_> {
    let Some(text) = text else {
        return Linkified::Raw(None);
    };
    if !URL_RE.is_match(text) {
        return Linkified::Raw(Some(text));
    }

    let escaped = encode_html_entities(text);
    let html = URL_RE.replace_all(&escaped, |caps: &Captures<'_>| {
        let url = &caps[1];
        let terminal = &caps[3];
        let href = if caps.get(2).is_some() {
            url.to_string()
        } else {
            format!("https://{}", url)
        };
        format!(
            r#"<a class="link" target="_blank" href="{}">{}</a>{} "#,
            href, url, terminal
        )
    });
    Linkified::Safe(SafeHtml::new(html.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safe(text: &str) -> String {
        match linkify(Some(text)) {
            Linkified::Safe(html) => html.into_string(),
            Linkified::Raw(_) => panic!("expected a transformation for {:?}", text),
        }
    }

    #[test]
    fn test_absent_input_identity() {
        assert_eq!(linkify(None), Linkified::Raw(None));
    }

    #[test]
    fn test_no_url_passthrough_unescaped() {
        let input = "Hello <b>World</b>";
        assert_eq!(linkify(Some(input)), Linkified::Raw(Some(input)));
    }

    #[test]
    fn test_bare_www_link() {
        // terminal symbol is the consumed space, plus the appended one
        assert_eq!(
            safe("Visit www.example.com today"),
            "Visit <a class=\"link\" target=\"_blank\" href=\"https://www.example.com\">www.example.com</a>  today"
        );
    }

    #[test]
    fn test_protocol_url_with_trailing_punctuation() {
        assert_eq!(
            safe("See https://example.com/a?b=1)."),
            "See <a class=\"link\" target=\"_blank\" href=\"https://example.com/a?b=1\">https://example.com/a?b=1</a>) ."
        );
    }

    #[test]
    fn test_whole_text_escaped_when_url_present() {
        assert_eq!(
            safe("Hello <b> www.example.com"),
            "Hello &#60;b&#62; <a class=\"link\" target=\"_blank\" href=\"https://www.example.com\">www.example.com</a> "
        );
    }

    #[test]
    fn test_ampersand_inside_url_escaped_and_matched() {
        assert_eq!(
            safe("https://example.com/a?b=1&c=2 end"),
            "<a class=\"link\" target=\"_blank\" href=\"https://example.com/a?b=1&#38;c=2\">https://example.com/a?b=1&#38;c=2</a>  end"
        );
    }

    #[test]
    fn test_escaped_gt_terminal_not_duplicated() {
        // the ';' of the escaped '>' stays outside the terminal symbol
        assert_eq!(
            safe("go https://x.com>"),
            "go <a class=\"link\" target=\"_blank\" href=\"https://x.com\">https://x.com</a>&#62 ;"
        );
    }

    #[test]
    fn test_mailto_and_ftp_keep_prefix() {
        assert_eq!(
            safe("mailto:user@example.com"),
            "<a class=\"link\" target=\"_blank\" href=\"mailto:user@example.com\">mailto:user@example.com</a> "
        );
        assert_eq!(
            safe("ftp://files.example.com/x"),
            "<a class=\"link\" target=\"_blank\" href=\"ftp://files.example.com/x\">ftp://files.example.com/x</a> "
        );
    }

    #[test]
    fn test_all_occurrences_transformed() {
        let html = safe("www.a.com and www.b.com");
        assert_eq!(html.matches("<a class=\"link\"").count(), 2);
        assert_eq!(
            html,
            "<a class=\"link\" target=\"_blank\" href=\"https://www.a.com\">www.a.com</a>  and <a class=\"link\" target=\"_blank\" href=\"https://www.b.com\">www.b.com</a> "
        );
    }

    #[test]
    fn test_lowercase_prefixes_only() {
        let upper = "HTTP://EXAMPLE.COM and WWW.example.com";
        assert_eq!(linkify(Some(upper)), Linkified::Raw(Some(upper)));
    }

    #[test]
    fn test_quote_terminal() {
        assert_eq!(
            safe("'www.example.com'"),
            "'<a class=\"link\" target=\"_blank\" href=\"https://www.example.com\">www.example.com</a>' "
        );
    }

    #[test]
    fn test_newline_is_a_terminal() {
        assert_eq!(
            safe("www.a.com\nplain"),
            "<a class=\"link\" target=\"_blank\" href=\"https://www.a.com\">www.a.com</a>\n plain"
        );
    }

    #[test]
    fn test_closing_bracket_terminals() {
        assert_eq!(
            safe("[www.a.com]"),
            "[<a class=\"link\" target=\"_blank\" href=\"https://www.a.com\">www.a.com</a>] "
        );
        assert_eq!(
            safe("{https://x.com}"),
            "{<a class=\"link\" target=\"_blank\" href=\"https://x.com\">https://x.com</a>} "
        );
    }
}
