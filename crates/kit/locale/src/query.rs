//! URL query-parameter extraction.

/// Returns the first value for `key` in the query portion of `url`.
///
/// Everything before the first `?` is ignored, so hash-router URLs such as
/// `app/#/live?lang=zh-CN` work. Key comparison is case-insensitive. Values
/// end at `&` or `#` and are returned raw, without percent-decoding. A key
/// present without `=` yields an empty string.
pub fn query_param(url: &str, key: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    // Anything after the first `#` in the remainder is a fragment.
    let query = query.split('#').next().unwrap_or_default();
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name.eq_ignore_ascii_case(key) {
            return Some(value.to_string());
        }
    }
    None
}
