//! Human renderings of build, watch and clean output

use std::path::Path;

use crossterm::style::Stylize;
use pagewright::{CleanResult, WatchEvent};

use crate::ui::icon::Icon;
use crate::ui::theme;

/// Banner printed once before `run` starts building
pub fn render_run_header(
    pages: &Path,
    output: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if supports_color {
        format!("{}", "Pagewright".bold())
    } else {
        "Pagewright".to_string()
    };

    let mut out = format!(
        "{} {}\n",
        Icon::Watch.colored(supports_color, supports_unicode),
        title
    );
    for (label, value) in [
        ("Source", pages.display().to_string()),
        ("Output", output.display().to_string()),
        ("Hint", "Press Ctrl+C to stop".to_string()),
    ] {
        out.push_str(&format!("  {:<7} {}\n", format!("{label}:"), dim(&value, supports_color)));
    }
    out.push('\n');
    out
}

/// One line per event; `None` for events only shown with `-v`
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    let line = match event {
        WatchEvent::BuildStarted { source } => {
            format!("{} {} Building: {}\n", prefix, icon(Icon::Progress), source)
        }
        WatchEvent::Updating { path } => {
            format!("{} {} Updating: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::Published { output, .. } if verbose > 0 => {
            format!("{} {} Wrote: {}\n", prefix, icon(Icon::Success), output)
        }
        WatchEvent::DirectoryRegistered { path } if verbose > 0 => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Folder), path)
        }
        WatchEvent::Published { .. } | WatchEvent::DirectoryRegistered { .. } => return None,
        WatchEvent::DirectoryAdded { path } => {
            format!("{} {} New directory: {}\n", prefix, icon(Icon::Folder), path)
        }
        WatchEvent::BuildComplete { published } => format!(
            "{} {} Built {} {}\n",
            prefix,
            icon(Icon::Success),
            published,
            plural(*published, "page", "pages")
        ),
        WatchEvent::WatchStarted {
            source,
            directories,
        } => format!(
            "{} {} Watching {} ({} {})\n",
            prefix,
            icon(Icon::Watch),
            source,
            directories,
            plural(*directories, "directory", "directories")
        ),
        WatchEvent::CleanComplete { deleted } => format!(
            "{} {} Removed {} {}\n",
            prefix,
            icon(Icon::Clean),
            deleted.len(),
            plural(deleted.len(), "file", "files")
        ),
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Warning), message)
        }
        WatchEvent::Shutdown => {
            format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch))
        }
    };

    Some(line)
}

/// Confirmation printed by `clean`
pub fn render_clean_result(
    result: &CleanResult,
    output: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Done. Removed {} {} from {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        result.count(),
        plural(result.count(), "file", "files"),
        output.display()
    )
}

fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(theme::colors::DIM))
    } else {
        text.to_string()
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
