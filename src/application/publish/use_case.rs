//! Publisher implementation

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::domain::ports::{DocumentRenderer, FileSystem};
use crate::domain::{Normalizer, Template};
use crate::error::PagewrightResult;

use super::result::{CleanResult, Published};

/// Where the template lives and how artifacts are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// Template file, read on every publish
    pub template: PathBuf,
    /// Substitution marker inside the template
    pub marker: String,
    /// Output naming rules
    pub normalizer: Normalizer,
}

impl PublishOptions {
    /// Options for a configured site
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            template: site.template.clone(),
            marker: site.marker.clone(),
            normalizer: site.normalizer(),
        }
    }
}

/// Renders source documents into the template and writes artifacts
///
/// Nothing is cached: the template and the source are read on every call.
pub struct Publisher<FS, R>
where
    FS: FileSystem,
    R: DocumentRenderer,
{
    fs: FS,
    renderer: R,
    options: PublishOptions,
}

impl<FS, R> Publisher<FS, R>
where
    FS: FileSystem,
    R: DocumentRenderer,
{
    /// Create a new publisher
    pub fn new(fs: FS, renderer: R, options: PublishOptions) -> Self {
        Self {
            fs,
            renderer,
            options,
        }
    }

    /// Publisher configuration
    pub fn options(&self) -> &PublishOptions {
        &self.options
    }

    /// Whether a source document is still present
    pub fn source_exists(&self, source: &Path) -> bool {
        self.fs.exists(source)
    }

    /// Rebuild the artifact for one source document
    pub fn publish(&self, source: &Path) -> PagewrightResult<Published> {
        let output = self.options.normalizer.to_output_path(source)?;

        let template_bytes = self.fs.read(&self.options.template)?;
        let template = Template::parse(&template_bytes, &self.options.marker, &self.options.template)?;
        if template.extra_markers() > 0 {
            tracing::warn!(
                "[publish] {} contains \"{}\" {} more time(s); only the first is replaced",
                self.options.template.display(),
                self.options.marker,
                template.extra_markers()
            );
        }

        let document = self.fs.read(source)?;
        let page = template.compose(&self.renderer.render(&document));

        self.fs.write(&output, &page)?;
        tracing::info!("[publish] {} -> {}", source.display(), output.display());

        Ok(Published {
            source: source.to_path_buf(),
            output,
            bytes: page.len(),
        })
    }

    /// Delete every file under the output tree with the output extension
    ///
    /// Provenance is not checked. A missing output tree is an empty clean.
    pub fn clean_output_tree(&self) -> PagewrightResult<CleanResult> {
        let normalizer = &self.options.normalizer;
        let mut result = CleanResult::new();

        for path in self.fs.list_files(normalizer.output_dir())? {
            if !normalizer.is_output_artifact(&path) {
                continue;
            }

            self.fs.remove(&path)?;
            tracing::debug!("[clean] removed {}", path.display());
            result.deleted.push(path);
        }

        tracing::info!(
            "[clean] removed {} file(s) from {}",
            result.count(),
            normalizer.output_dir().display()
        );
        Ok(result)
    }
}
