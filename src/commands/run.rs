use anyhow::{Context, Result};

use pagewright::{Config, WatchEvent, WatchOptions, WatchUseCase};

use crate::ui::context::UiContext;
use crate::ui::views;

pub fn cmd_run(config: &Config, ui: &UiContext) -> Result<()> {
    let publisher = super::local_publisher(config);

    let cleaned = publisher.clean_output_tree()?;
    if !ui.json {
        print!(
            "{}",
            views::render_run_header(&config.site.pages, &config.site.output, ui.color, ui.unicode)
        );
    }
    ui.emit(
        "run",
        &WatchEvent::CleanComplete {
            deleted: cleaned
                .deleted
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        },
    );

    // Repeated Ctrl+C must not block the handler
    let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })
    .context("failed to install Ctrl+C handler")?;

    let use_case = WatchUseCase::new(publisher, WatchOptions::from_site(&config.site));
    use_case.run(shutdown_rx, |event| ui.emit("run", &event))?;
    Ok(())
}
