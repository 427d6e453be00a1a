//! Greedy word wrapping.
//!
//! Lines are packed with as many whitespace-delimited words as fit in the
//! column limit. Words are never split: a word wider than the limit gets a
//! line of its own.

/// Wrap `text` into lines of at most `width` characters.
///
/// Whitespace runs are collapsed into a single break opportunity and never
/// appear at the start or end of a line. Width is counted in `char`s.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Join lines with a newline followed by `indentation` tab characters.
pub fn join_indented<S: AsRef<str>>(lines: &[S], indentation: usize) -> String {
    match lines {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, rest @ ..] => {
            let separator = format!("\n{}", "\t".repeat(indentation));
            let mut out = first.as_ref().to_string();
            for line in rest {
                out.push_str(&separator);
                out.push_str(line.as_ref());
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("'alpha', and 'beta'.", 72), vec!["'alpha', and 'beta'."]);
    }

    #[test]
    fn test_wrap_breaks_at_whitespace() {
        let lines = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_wrap_exact_width() {
        let lines = wrap("abc def", 7);
        assert_eq!(lines, vec!["abc def"]);
        let lines = wrap("abc def", 6);
        assert_eq!(lines, vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_long_word_is_not_split() {
        let lines = wrap("tiny enormousword tiny", 5);
        assert_eq!(lines, vec!["tiny", "enormousword", "tiny"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap("  one \t two\n\nthree  ", 72);
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 72).is_empty());
        assert!(wrap("   ", 72).is_empty());
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // four 2-byte chars per word
        let lines = wrap("éééé éééé", 9);
        assert_eq!(lines, vec!["éééé éééé"]);
    }

    #[test]
    fn test_join_indented() {
        assert_eq!(join_indented(&["a", "b", "c"], 2), "a\n\t\tb\n\t\tc");
        assert_eq!(join_indented(&["a", "b"], 0), "a\nb");
        assert_eq!(join_indented(&["only"], 5), "only");
        assert_eq!(join_indented::<&str>(&[], 5), "");
    }

    #[test]
    fn test_join_single_line_skips_separator() {
        assert_eq!(join_indented(&["only"], usize::MAX), "only");
    }
}
