use url::Url;

/// Base used to resolve path-relative locations such as `/verify?token=...`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Returns the `token` query parameter of `location`, decoded. An empty value
/// counts as missing.
pub fn token_from_url(location: &str) -> Option<String> {
    let base = Url::parse(RELATIVE_BASE).ok()?;
    let url = base.join(location.trim()).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
