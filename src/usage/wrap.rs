//! Whitespace-normalising word wrap.

/// Column used when a width of zero is requested.
pub const DEFAULT_WIDTH: usize = 80;

/// Wrap `text` into lines no wider than `width`, each starting with `prefix`.
///
/// Runs of whitespace collapse to a single space. A word longer than the
/// available room gets a line of its own rather than being split.
pub fn wrap(text: &str, width: usize, prefix: &str) -> Vec<String> {
    let width = if width == 0 { DEFAULT_WIDTH } else { width };
    let base = prefix.chars().count();

    let mut lines = Vec::new();
    let mut line = String::from(prefix);
    let mut len = base;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if len > base && len + 1 + word_len > width {
            lines.push(std::mem::replace(&mut line, String::from(prefix)));
            len = base;
        }
        if len > base {
            line.push(' ');
            len += 1;
        }
        line.push_str(word);
        len += word_len;
    }

    if len > base {
        lines.push(line);
    }
    lines
}
