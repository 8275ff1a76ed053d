//! Inline style resolution for Markdown output.
//!
//! Overlapping style flags on a run resolve into one canonical nesting
//! order so the same style set always renders identically: the link
//! wraps the innermost text, then code, then bold, then italic, then
//! strikethrough outward.

use crate::model::RunStyle;

/// Render a run's text with its style flags applied.
///
/// Raw text is escaped before wrapping so escaping never interferes with
/// the intentional markers. Code spans skip backslash escaping (they
/// display verbatim) but keep pipes escaped so the span survives inside
/// a table row. Empty text renders as the empty string so an
/// anchor-only run leaves no styling artifacts.
pub(crate) fn styled_run(text: &str, style: &RunStyle, escape: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = if style.code {
        text.replace('|', "\\|")
    } else if escape {
        escape_markdown(text)
    } else {
        text.to_string()
    };

    if let Some(ref url) = style.link {
        result = format!("[{}]({})", result, format_link_url(url));
    }
    if style.code {
        result = wrap_code(&result);
    }
    if style.bold {
        result = format!("**{}**", result);
    }
    if style.italic {
        result = format!("*{}*", result);
    }
    if style.strikethrough {
        result = format!("~~{}~~", result);
    }

    result
}

/// Escape special Markdown characters.
///
/// Backslash, backtick, asterisk, underscore, brackets, and pipe are
/// escaped everywhere; `#` only where it starts a line and could read as
/// a heading.
pub(crate) fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_line_start = true;
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            '#' if at_line_start => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
        at_line_start = c == '\n';
    }
    result
}

/// Wrap text in an inline code span.
///
/// Text containing a backtick gets a double-backtick fence with padding,
/// the standard Markdown escape for literal backticks.
fn wrap_code(text: &str) -> String {
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

/// Format a link target, angle-wrapping URLs that would break the
/// `[text](url)` syntax.
fn format_link_url(url: &str) -> String {
    if url.contains(' ') || url.contains(')') {
        format!("<{}>", url)
    } else {
        url.to_string()
    }
}
