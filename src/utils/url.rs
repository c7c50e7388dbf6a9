/// Canonical form used for comparing URLs: lower-cased, without a leading
/// `http://`/`https://` and without trailing `/`.
///
/// Repeated schemes and slashes are stripped as well so that the result is
/// a fixed point: `normalize_url(&normalize_url(u)) == normalize_url(u)`.
pub fn normalize_url(url: &str) -> String {
    let lowered = url.to_lowercase();
    let mut rest = lowered.as_str();
    while let Some(stripped) = rest
        .strip_prefix("https://")
        .or_else(|| rest.strip_prefix("http://"))
    {
        rest = stripped;
    }
    rest.trim_end_matches('/').to_string()
}
