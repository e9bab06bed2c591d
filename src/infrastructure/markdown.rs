//! Markdown renderer
//!
//! Renders documents with `pulldown-cmark` and a fixed extension set, adds
//! heading identifiers derived from the heading text, then applies one
//! textual fixup so back-to-back inline code spans do not run together.

use std::collections::HashMap;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::domain::ports::DocumentRenderer;

/// Two inline code spans separated only by a soft line break
const ADJACENT_CODE_SPANS: &str = "</code>\n<code>";
const SEPARATED_CODE_SPANS: &str = "</code>\n<br>\n<code>";

/// Markdown to HTML renderer
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Renderer with the standard extension set
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_HEADING_ATTRIBUTES
                | Options::ENABLE_DEFINITION_LIST,
        }
    }

    /// Render a Markdown string to HTML
    pub fn render_str(&self, source: &str) -> String {
        let events = with_heading_ids(Parser::new_ext(source, self.options));

        let mut out = String::with_capacity(source.len() + source.len() / 2);
        html::push_html(&mut out, events.into_iter());

        separate_adjacent_code_spans(&out)
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, source: &[u8]) -> Vec<u8> {
        self.render_str(&String::from_utf8_lossy(source)).into_bytes()
    }
}

/// Insert a line break between inline code spans that sit on adjacent lines
///
/// Only the literal `</code>\n<code>` sequence is rewritten.
pub fn separate_adjacent_code_spans(html: &str) -> String {
    html.replace(ADJACENT_CODE_SPANS, SEPARATED_CODE_SPANS)
}

/// Anchor name for a heading: lowercase letters and digits, every other run
/// of characters collapsed into a single `-`, no leading or trailing dash
pub fn heading_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn with_heading_ids<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = events.collect();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
            continue;
        }

        let slug = heading_slug(&heading_text(&events[i + 1..]));
        if slug.is_empty() {
            continue;
        }
        let slug = unique_slug(&mut seen, slug);

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }

    events
}

/// First use of a slug keeps it; repeats get `-1`, `-2`, ... appended,
/// skipping any suffixed form already taken
fn unique_slug(seen: &mut HashMap<String, usize>, slug: String) -> String {
    let mut id = slug;
    while let Some(count) = seen.get(&id).copied() {
        let next = format!("{}-{}", id, count + 1);
        seen.insert(id, count + 1);
        id = next;
    }
    seen.insert(id.clone(), 0);
    id
}

fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}
