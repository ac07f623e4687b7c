//! Optional post-processing of generated source text.

use std::sync::Arc;

/// Text-to-text pass applied to every generated file.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Built-in formatter for generated files.
///
/// Strips trailing whitespace, collapses runs of blank lines to one and
/// ends the text with exactly one newline. Empty input stays empty.
pub fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if !blank_run && !out.is_empty() {
                out.push('\n');
            }
            blank_run = true;
            continue;
        }
        blank_run = false;
        out.push_str(line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

/// The built-in formatter as a [`Formatter`].
pub fn tidy_formatter() -> Formatter {
    Arc::new(tidy)
}
