//! HTML escaping for text inserted into markup.

/// Replacements applied in order. `&` must come first so the entities
/// introduced by later replacements are not escaped again.
const REPLACEMENTS: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
];

/// Escape `&`, `"`, `'`, `<` and `>` so `text` can be placed inside markup.
///
/// ```
/// use shopfront_core::escape_html;
///
/// assert_eq!(
///     escape_html(r#"Men's <Shoes> & "Sale""#),
///     "Men&#39;s &lt;Shoes&gt; &amp; &quot;Sale&quot;"
/// );
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = text.to_string();
    for (from, to) in REPLACEMENTS {
        if escaped.contains(from) {
            escaped = escaped.replace(from, to);
        }
    }
    escaped
}
