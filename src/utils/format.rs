use unicode_width::UnicodeWidthStr;

/// Pad a string to `width` display columns.
///
/// Arabic and emoji glyphs are wider than their char count; plain `{:<w}`
/// formatting misaligns columns that mix scripts.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let pad = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(pad))
}

/// Whole-number completion percentage, 0 when the list is empty.
pub fn completion_percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_display_accounts_for_wide_glyphs() {
        // "ص" is 1 column, but the string byte length is larger
        let padded = pad_display("صلاة", 8);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 8);
    }

    #[test]
    fn completion_percent_handles_empty_and_full() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(0, 4), 0);
        assert_eq!(completion_percent(2, 4), 50);
        assert_eq!(completion_percent(4, 4), 100);
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        // count may transiently exceed the goal after a preset switch
        assert_eq!(progress_bar(50, 33, 4), "████");
    }
}
