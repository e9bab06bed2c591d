use std::path::Path;

use crossterm::style::Stylize;
use pagewright::PagewrightError;

use crate::ui::icon::Icon;
use crate::ui::theme;

/// A rendered fatal error: what failed, where, and how to fix it
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<String>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: &Path) -> Self {
        self.file = Some(file.display().to_string());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = Icon::Error.colored(supports_color, supports_unicode);
        let title = if supports_color {
            format!("{}", "ERROR".with(theme::colors::ERROR).bold())
        } else {
            "ERROR".to_string()
        };

        let mut out = format!("{} {}: {}\n", icon, title, self.message);
        if let Some(file) = &self.file {
            out.push_str(&format!("  in {}\n", file));
        }
        if let Some(fix) = &self.fix {
            let label = if supports_color {
                format!("{}", "Fix:".with(theme::colors::INFO))
            } else {
                "Fix:".to_string()
            };
            out.push_str(&format!("  {} {}\n", label, fix));
        }
        out
    }
}

fn format_pagewright_error(
    err: &PagewrightError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = match err {
        PagewrightError::MissingMarker { marker, template } => {
            ErrorBlock::new(err.to_string()).with_fix(format!(
                "Put {} in {} where page content should go.",
                marker,
                template.display()
            ))
        }
        PagewrightError::DirectoryNotFound { path } => ErrorBlock::new(err.to_string())
            .with_fix(format!(
                "Create {} and add some .md files, or set site.pages in pagewright.toml.",
                path.display()
            )),
        PagewrightError::InvalidConfig { file, .. } => ErrorBlock::new(err.to_string())
            .with_fix(format!("Fix or remove {} and try again.", file.display())),
        PagewrightError::WatcherInit(_) | PagewrightError::Watch { .. } => {
            ErrorBlock::new(err.to_string())
                .with_fix("Check the OS file watch limits (e.g. fs.inotify.max_user_watches).")
        }
        other => {
            let block = ErrorBlock::new(other.to_string());
            match other.path() {
                Some(path) if !other.to_string().contains(&path.display().to_string()) => {
                    block.with_file(path)
                }
                _ => block,
            }
        }
    };

    block.render(supports_color, supports_unicode)
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(pw) = err.downcast_ref::<PagewrightError>() {
        return format_pagewright_error(pw, supports_color, supports_unicode);
    }

    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
