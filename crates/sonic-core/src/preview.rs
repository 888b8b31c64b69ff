use crate::constants::PREVIEW_PATH_SEGMENT;
use crate::payload::ResultItem;
use url::Url;

/// Where to fetch an item's audio preview from.
///
/// An explicit `previewUrl` wins. Otherwise a file name is resolved against
/// the media host as `{base}/songs/{file name}`, with the file name
/// percent-encoded as a single path segment.
pub fn resolve_preview_url(item: &ResultItem, base: Option<&Url>) -> Option<String> {
    if let Some(url) = item.preview_url.as_deref().filter(|u| !u.trim().is_empty()) {
        return Some(url.to_owned());
    }
    let filename = item.filename.as_deref().filter(|f| !f.is_empty())?;
    let mut url = base?.clone();
    {
        let mut segments = url.path_segments_mut().ok()?;
        segments.pop_if_empty();
        segments.push(PREVIEW_PATH_SEGMENT);
        segments.push(filename);
    }
    Some(url.into())
}
