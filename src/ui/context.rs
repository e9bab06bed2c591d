use pagewright::config::{ColorMode, Config};
use pagewright::WatchEvent;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match config.output.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }

    /// Print one event: NDJSON line, or a timestamped human line
    pub fn emit(&self, command: &str, event: &WatchEvent) {
        if self.json {
            println!("{}", event.to_json(command));
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let Some(line) =
            views::render_watch_event(&timestamp, event, self.verbose, self.color, self.unicode)
        else {
            return;
        };

        match event {
            WatchEvent::Error { .. } => eprint!("{line}"),
            _ => print!("{line}"),
        }
    }
}
