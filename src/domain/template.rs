//! Template composition
//!
//! A template is any document containing the substitution marker. Rendered
//! content replaces the first occurrence of the marker; later occurrences are
//! left untouched in the suffix.

use std::path::Path;

use crate::error::{PagewrightError, PagewrightResult};

/// Default substitution marker
pub const DEFAULT_MARKER: &str = "{{ post }}";

/// A template split around its substitution marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: Vec<u8>,
    suffix: Vec<u8>,
    extra_markers: usize,
}

impl Template {
    /// Split `bytes` on the first occurrence of `marker`
    ///
    /// `origin` is only used to name the template in the error.
    pub fn parse(bytes: &[u8], marker: &str, origin: &Path) -> PagewrightResult<Self> {
        let needle = marker.as_bytes();
        let at = find(bytes, needle).ok_or_else(|| PagewrightError::MissingMarker {
            marker: marker.to_string(),
            template: origin.to_path_buf(),
        })?;

        let suffix = &bytes[at + needle.len()..];
        Ok(Self {
            prefix: bytes[..at].to_vec(),
            suffix: suffix.to_vec(),
            extra_markers: count(suffix, needle),
        })
    }

    /// Number of marker occurrences after the one used as split point
    pub fn extra_markers(&self) -> usize {
        self.extra_markers
    }

    /// prefix + content + suffix
    pub fn compose(&self, content: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.prefix.len() + content.len() + self.suffix.len());
        out.extend_from_slice(&self.prefix);
        out.extend_from_slice(content);
        out.extend_from_slice(&self.suffix);
        out
    }
}

/// Parse and compose in one step
pub fn compose(
    template: &[u8],
    marker: &str,
    content: &[u8],
    origin: &Path,
) -> PagewrightResult<Vec<u8>> {
    Template::parse(template, marker, origin).map(|t| t.compose(content))
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut n = 0;
    let mut rest = haystack;
    while let Some(at) = find(rest, needle) {
        n += 1;
        rest = &rest[at + needle.len()..];
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "template.html";

    #[test]
    fn composes_around_marker() {
        let out = compose(
            b"<html>{{ post }}</html>",
            DEFAULT_MARKER,
            b"<h1 id=\"hi\">Hi</h1>\n",
            Path::new(ORIGIN),
        )
        .unwrap();
        assert_eq!(out, b"<html><h1 id=\"hi\">Hi</h1>\n</html>".to_vec());
    }

    #[test]
    fn missing_marker_names_expected_marker() {
        let err = compose(b"<html></html>", DEFAULT_MARKER, b"x", Path::new(ORIGIN)).unwrap_err();
        match err {
            PagewrightError::MissingMarker { marker, template } => {
                assert_eq!(marker, "{{ post }}");
                assert_eq!(template, Path::new(ORIGIN));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_marker_wins_and_rest_stay_in_suffix() {
        let template =
            Template::parse(b"a{{ post }}b{{ post }}c", DEFAULT_MARKER, Path::new(ORIGIN)).unwrap();
        assert_eq!(template.extra_markers(), 1);
        assert_eq!(template.compose(b"X"), b"aXb{{ post }}c".to_vec());
    }

    #[test]
    fn marker_at_edges() {
        assert_eq!(
            compose(b"{{ post }}", DEFAULT_MARKER, b"body", Path::new(ORIGIN)).unwrap(),
            b"body".to_vec()
        );
        assert_eq!(
            compose(b"{{ post }}tail", DEFAULT_MARKER, b"", Path::new(ORIGIN)).unwrap(),
            b"tail".to_vec()
        );
    }

    #[test]
    fn content_is_inserted_verbatim() {
        let content = b"{{ post }} inside content";
        let out = compose(b"[{{ post }}]", DEFAULT_MARKER, content, Path::new(ORIGIN)).unwrap();
        assert_eq!(out, b"[{{ post }} inside content]".to_vec());
    }

    #[test]
    fn count_non_overlapping() {
        assert_eq!(count(b"aaaa", b"aa"), 2);
        assert_eq!(count(b"", b"aa"), 0);
    }
}
