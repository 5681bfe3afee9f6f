//! Request URL construction.

use url::Url;

use crate::error::{MonascaError, Result};
use crate::query::QueryParams;

/// Join `path` onto `base_url` and attach the encoded query.
///
/// The resource path is appended to whatever path the base URL already has.
/// Query keys come out in alphabetical order and values are
/// form-urlencoded, so `a:1,b:2` becomes `a%3A1%2Cb%3A2`.
pub fn build_url(base_url: &str, path: &str, params: &QueryParams) -> Result<String> {
    let mut url = Url::parse(base_url).map_err(|e| MonascaError::InvalidUrl {
        url: base_url.to_string(),
        detail: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(MonascaError::InvalidUrl {
            url: base_url.to_string(),
            detail: "URL cannot carry a path".to_string(),
        });
    }

    let joined = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);

    if params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(params.iter());
    }

    Ok(url.into())
}

/// `collection/<id>` with `id` percent-encoded as one path segment.
///
/// `""`, `"."` and `".."` are rejected: URL normalization would drop them
/// as dot segments and the request would hit a different resource.
pub fn resource_path(collection: &str, id: &str) -> Result<String> {
    if matches!(id, "" | "." | "..") {
        return Err(MonascaError::InvalidUrl {
            url: format!("{collection}/{id}"),
            detail: "resource id must not be empty, '.' or '..'".to_string(),
        });
    }
    Ok(format!("{collection}/{}", urlencoding::encode(id)))
}
