//! Markdown to HTML fragment rendering.
//!
//! Parsing and HTML emission are delegated to `pulldown-cmark`. This module only
//! adjusts the event stream: heading ids are filled in, fenced code blocks are
//! downgraded when that extension is off, and headings are recorded for the
//! table of contents. Heading attribute syntax (`{#id .class}`) is never
//! enabled, so trailing braces stay part of the heading text.

use markdown_html_config::Extensions;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::anchors::{generate_anchor, AnchorRegistry};
use crate::toc::{self, TocEntry};

/// HTML produced from a Markdown source, before template embedding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub headings: usize,
    pub toc: Vec<TocEntry>,
}

impl Fragment {
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Nested list linking to every heading; empty when the TOC extension is off.
    pub fn toc_html(&self) -> String {
        toc::render_html(&self.toc)
    }
}

/// Map the extension set onto parser options.
pub fn parser_options(extensions: &Extensions) -> Options {
    let mut options = Options::empty();
    if extensions.tables {
        options.insert(Options::ENABLE_TABLES);
    }
    options
}

/// Render `source` to an HTML fragment. Never fails: malformed input is
/// handled by the parser's own recovery rules.
///
/// Headings get ids when either `header_ids` or `toc` is on, since every TOC
/// entry links to its heading.
pub fn render_fragment(source: &str, extensions: &Extensions) -> Fragment {
    let mut events: Vec<Event<'_>> = Parser::new_ext(source, parser_options(extensions)).collect();
    let emit_ids = extensions.header_ids || extensions.toc;
    let mut registry = AnchorRegistry::new();
    let mut headings = 0usize;
    let mut entries = Vec::new();

    for idx in 0..events.len() {
        let heading = match &events[idx] {
            Event::Start(Tag::Heading { level, .. }) => Some(*level),
            _ => None,
        };

        let Some(level) = heading else {
            if !extensions.fenced_code_blocks
                && matches!(
                    events[idx],
                    Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_)))
                )
            {
                events[idx] = Event::Start(Tag::CodeBlock(CodeBlockKind::Indented));
            }
            continue;
        };

        headings += 1;
        if !emit_ids {
            continue;
        }

        let text = heading_text(&events[idx + 1..]);
        let anchor = registry.unique(&generate_anchor(&text));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[idx] {
            *id = Some(CowStr::from(anchor.clone()));
        }

        if extensions.toc {
            entries.push(TocEntry {
                level: heading_depth(level),
                text,
                anchor,
            });
        }
    }

    let mut output = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut output, events.into_iter());

    Fragment {
        html: output,
        headings,
        toc: entries,
    }
}

/// Plain text of the heading that starts right before `events`, with
/// whitespace collapsed.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(value) | Event::Code(value) => text.push_str(value),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
