pub mod cambridge;
pub mod conjugation;
pub mod dictionary;

pub use dictionary::EnglishDictionary;

use url::Url;

/// Append `segments` to `base`, percent-encoding each one
pub(crate) fn page_url(base: &str, segments: &[&str]) -> String {
    let Ok(mut url) = Url::parse(base) else {
        tracing::warn!(base, "base url does not parse, joining segments verbatim");
        return format!("{}/{}", base.trim_end_matches('/'), segments.join("/"));
    };

    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }

    url.to_string()
}
