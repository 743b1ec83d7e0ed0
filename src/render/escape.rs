/// Replaces every character in {U+00A0..=U+9999, `<`, `>`, `&`} with its
/// decimal numeric character reference (`&#NNN;`).
///
/// Code points above U+9999 (some CJK, Hangul, emoji) pass through, as does
/// all printable ASCII apart from the three markup characters. Quotes are
/// deliberately left alone.
pub fn encode_html_entities(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' | '>' | '&' | '\u{00A0}'..='\u{9999}' => {
                escaped.push_str(&format!("&#{};", ch as u32));
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
