//! Image URLs for destination cards, built against a text-to-image service.
//! The browser fetches the image directly; the server never calls the service.

use reqwest::Url;

pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 400;

/// Text prompt sent to the image service.
pub fn image_prompt(country: &str, keyword: &str) -> String {
    format!("{} {} scenery", country.trim(), keyword.trim())
}

/// Builds `{base}/{prompt}?width=..&height=..&nologo=true` with the prompt as
/// one percent-encoded path segment. Returns `None` for an unusable base URL.
pub fn image_url(base: &str, country: &str, keyword: &str) -> Option<String> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(&image_prompt(country, keyword));
    url.query_pairs_mut()
        .append_pair("width", &IMAGE_WIDTH.to_string())
        .append_pair("height", &IMAGE_HEIGHT.to_string())
        .append_pair("nologo", "true");
    Some(url.into())
}
