//! DocumentRenderer port - converts raw document bytes to output markup

/// Converts a source document into the markup inserted into the template
///
/// Rendering never fails: malformed input still produces some output.
pub trait DocumentRenderer {
    /// Render raw document bytes
    fn render(&self, source: &[u8]) -> Vec<u8>;
}

impl<R: DocumentRenderer + ?Sized> DocumentRenderer for &R {
    fn render(&self, source: &[u8]) -> Vec<u8> {
        (**self).render(source)
    }
}
