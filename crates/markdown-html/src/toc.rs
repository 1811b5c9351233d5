use html_escape::{encode_double_quoted_attribute, encode_text};

/// A heading captured for the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    pub anchor: String,
}

/// Render entries as nested `<ul>` lists linking to each heading anchor.
///
/// Nesting is relative: a jump of several levels opens a single nested list,
/// and entries shallower than the first one stay in the outermost list.
pub fn render_html(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    let mut open_levels: Vec<usize> = Vec::new();

    for entry in entries {
        match open_levels.last().copied() {
            None => {
                output.push_str("<ul>\n");
                open_levels.push(entry.level);
            }
            Some(current) if entry.level > current => {
                output.push_str("\n<ul>\n");
                open_levels.push(entry.level);
            }
            Some(_) => {
                output.push_str("</li>\n");
                while open_levels.len() > 1
                    && open_levels.last().is_some_and(|level| entry.level < *level)
                {
                    open_levels.pop();
                    output.push_str("</ul>\n</li>\n");
                }
            }
        }

        output.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            encode_double_quoted_attribute(&entry.anchor),
            encode_text(&entry.text)
        ));
    }

    output.push_str("</li>\n");
    while open_levels.pop().is_some() {
        output.push_str("</ul>\n");
        if !open_levels.is_empty() {
            output.push_str("</li>\n");
        }
    }

    output
}
