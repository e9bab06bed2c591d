pub mod clean;
pub mod generate;
pub mod run;

use pagewright::{Config, LocalFs, MarkdownRenderer, PublishOptions, Publisher};

/// Publisher over the local disk for the configured site
pub(crate) fn local_publisher(config: &Config) -> Publisher<LocalFs, MarkdownRenderer> {
    Publisher::new(
        LocalFs::new(),
        MarkdownRenderer::new(),
        PublishOptions::from_site(&config.site),
    )
}
