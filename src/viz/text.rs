//! Text measurement and wrapping utilities.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
/// Each glyph is taken as 0.6 of the font size, rounded up over the whole string.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    let units = text.chars().count() as u64 * font_px as u64 * 3;
    units.div_ceil(5) as u32
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

/// Wrap text on word boundaries to fit within `max_px`; words longer than a
/// whole line are truncated.
pub fn wrap_text_to_width(text: &str, font_px: u32, max_px: u32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if estimate_text_width_px(&candidate, font_px) <= max_px {
            cur = candidate;
        } else {
            if !cur.is_empty() {
                lines.push(std::mem::take(&mut cur));
            }
            cur = truncate_to_width(word, font_px, max_px);
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}
