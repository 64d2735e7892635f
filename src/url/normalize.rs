use url::Url;

/// Query parameter the listing uses for pagination
pub const PAGE_PARAM: &str = "page";

/// Resolves a link target to an absolute URL against the site origin
///
/// Targets that already start with `http` are returned untouched; everything else
/// is joined onto the origin.
///
/// Returns None if the link should be excluded:
/// - empty targets and fragment-only anchors
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - targets the URL parser rejects
///
/// # Examples
///
/// ```
/// use shadow_fleet_scraper::url::resolve_href;
/// use url::Url;
///
/// let origin = Url::parse("https://war-sanctions.gur.gov.ua").unwrap();
/// assert_eq!(
///     resolve_href("/en/transport/shadow-fleet/42", &origin),
///     Some("https://war-sanctions.gur.gov.ua/en/transport/shadow-fleet/42".to_string())
/// );
/// ```
pub fn resolve_href(href: &str, origin: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with("http") {
        return Some(href.to_string());
    }

    origin.join(href).ok().map(|url| url.to_string())
}

/// Returns true if the URL still carries a pagination query parameter
pub fn has_page_param(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.query_pairs().any(|(key, _)| key == PAGE_PARAM),
        Err(_) => url.contains("?page=") || url.contains("&page="),
    }
}
