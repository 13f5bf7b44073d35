//! Text measurement and wrapping
//!
//! Unicode-aware helpers shared by the UI and the plain `show` renderer.
//! Widths come from `unicode-width`, so site copy with typographic
//! characters (non-breaking hyphens, arrows) measures correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string.
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Usable column count for rendering, reserving room for borders and
/// padding. Falls back to a conservative default when the terminal size is
/// unavailable, as with piped output.
pub fn get_terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) => std::cmp::max((cols as usize).saturating_sub(12), 30),
        Err(_) => 68,
    }
}

/// Wrap text at word boundaries to fit `max_width` display columns. Words
/// wider than the limit fall back to character wrapping.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for line in text.lines() {
        if text_width(line) <= max_width {
            lines.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = text_width(word);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let (tail, tail_width) = break_long_word(word, max_width, &mut lines);
                current = tail;
                current_width = tail_width;
            } else if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_width = word_width;
            } else {
                if current_width > 0 {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Character-wrap a word wider than the limit. Full lines go straight into
/// `lines`; the unfinished tail comes back so the caller can keep packing
/// words after it.
fn break_long_word(word: &str, max_width: usize, lines: &mut Vec<String>) -> (String, usize) {
    let mut current = String::new();
    let mut current_width = 0;

    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    (current, current_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Circular by Design", 40), vec!["Circular by Design"]);
    }

    #[test]
    fn long_text_breaks_at_word_boundaries() {
        let wrapped = wrap_text("This is a very long line that should be wrapped", 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(text_width(line) <= 20);
        }
    }

    #[test]
    fn wraps_site_copy_with_typographic_characters() {
        let text = "Certified collection, secure data destruction, and high‑yield metal recovery.";
        let wrapped = wrap_text(text, 30);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(text_width(line) <= 30);
        }
    }

    #[test]
    fn oversized_word_gets_character_wrapped() {
        let wrapped = wrap_text("hydrometallurgical", 6);
        assert!(wrapped.len() >= 3);
        for line in &wrapped {
            assert!(text_width(line) <= 6);
        }
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn terminal_width_has_a_floor() {
        assert!(get_terminal_width() >= 30);
    }
}
