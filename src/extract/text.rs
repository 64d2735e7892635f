//! Page flattening and tag lookups

use crate::url::resolve_href;
use scraper::{Html, Selector};
use url::Url;

/// Path segments that mark an image as a vessel photo
const PHOTO_MARKERS: &[&str] = &["/uploads/", "/media/"];

/// Elements whose text is code or markup, never page content
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Concatenates the visible text nodes of the document, tags stripped
pub fn flatten_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(text_node) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| SKIPPED_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            text.push_str(text_node);
        }
    }

    text
}

/// Finds the vessel photo: the first image whose source lives under an
/// uploads or media directory, made absolute against the origin
pub fn find_photo_url(document: &Html, origin: &Url) -> Option<String> {
    let img_selector = Selector::parse("img[src]").ok()?;

    document
        .select(&img_selector)
        .filter_map(|element| element.value().attr("src"))
        .find(|src| PHOTO_MARKERS.iter().any(|marker| src.contains(marker)))
        .and_then(|src| resolve_href(src, origin))
}
