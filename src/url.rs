//! Deep link URL splitting.
//!
//! URLs are expected in the shape `scheme://pathpart[/][?query|#fragment]`.
//! Nothing here allocates or percent-decodes; every returned string is a
//! slice of the input.

/// Splits a URL on the first `://` into scheme and scheme-specific part.
///
/// A URL without the separator is not a deep link and resolves to nothing,
/// so the caller treats `None` as a no-match rather than an error.
pub(crate) fn split_scheme(url: &str) -> Option<(&str, &str)> {
    url.split_once("://")
}

/// Extracts the path portion of the scheme-specific part: everything before
/// the first `#` or `?`, with a single trailing `/` stripped. This tolerates
/// the `callback/#token=...` shape produced by OAuth redirects.
pub(crate) fn path_of(rest: &str) -> &str {
    let end = rest.find(['#', '?']).unwrap_or(rest.len());
    let path = &rest[..end];
    path.strip_suffix('/').unwrap_or(path)
}

/// Iterates over the `key=value` pairs trailing the URL.
///
/// The pair source is everything after the first `#` if one is present, else
/// everything after the first `?`, else nothing; fragment wins over query.
/// Pieces without a `=` are skipped, and only the first `=` of a piece
/// separates key from value, so values keep embedded and trailing `=`
/// characters verbatim (base64ish OAuth tokens survive intact).
pub(crate) fn pairs(url: &str) -> impl Iterator<Item = (&str, &str)> {
    let source = match url.find('#') {
        Some(i) => &url[i + 1..],
        None => match url.find('?') {
            Some(i) => &url[i + 1..],
            None => "",
        },
    };

    source
        .split('&')
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| piece.split_once('='))
}
