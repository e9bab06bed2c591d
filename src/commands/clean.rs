use anyhow::Result;

use pagewright::{Config, WatchEvent};

use crate::ui::context::UiContext;
use crate::ui::views;

pub fn cmd_clean(config: &Config, ui: &UiContext) -> Result<()> {
    let result = super::local_publisher(config).clean_output_tree()?;

    if ui.json {
        let event = WatchEvent::CleanComplete {
            deleted: result
                .deleted
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        };
        println!("{}", event.to_json("clean"));
    } else {
        print!(
            "{}",
            views::render_clean_result(&result, &config.site.output, ui.color, ui.unicode)
        );
    }

    Ok(())
}
