use anyhow::Result;

use pagewright::{Config, WatchOptions, WatchUseCase};

use crate::ui::context::UiContext;

pub fn cmd_generate(config: &Config, ui: &UiContext) -> Result<()> {
    let use_case = WatchUseCase::new(
        super::local_publisher(config),
        WatchOptions::from_site(&config.site),
    );

    use_case.generate(|event| ui.emit("generate", &event))?;
    Ok(())
}
