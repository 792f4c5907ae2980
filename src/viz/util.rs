//! Utility functions for visualization: colors, locale mapping, tick formatting.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

use super::text::estimate_text_width_px;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format a y tick value: whole numbers with thousands separators from 1000 up,
/// otherwise up to two decimals with the locale's decimal separator.
pub fn format_tick(v: f64, locale: &Locale, dec_sep: char) -> String {
    let a = v.abs();
    if a >= 1000.0 {
        return (v.round() as i64).to_formatted_string(locale);
    }
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    let s = format!("{:.*}", prec, v);
    if dec_sep == '.' {
        s
    } else {
        s.replace('.', &dec_sep.to_string())
    }
}

/// Compute a tight left label area width for the Y axis (in pixels),
/// based on the formatted tick labels that will appear.
///
/// Returns a width clamped to a sensible range to avoid extremes.
pub fn compute_left_label_area_px(
    ymin: f64,
    ymax: f64,
    ticks: usize,
    font_px: u32,
    locale: &Locale,
    dec_sep: char,
) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let v = ymin + (ymax - ymin) * t;
        let s = format_tick(v, locale, dec_sep);
        max_px = max_px.max(estimate_text_width_px(&s, font_px));
    }

    // Room for tick marks plus the rotated y description.
    let with_padding = max_px.saturating_add(18 + font_px);
    with_padding.clamp(48, 160)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_around() {
        assert_eq!(office_color(0), office_color(10));
        assert_ne!(office_color(0), office_color(1));
    }

    #[test]
    fn locale_tags() {
        assert_eq!(map_locale("DE").1, ',');
        assert_eq!(map_locale("unknown").1, '.');
    }

    #[test]
    fn tick_formatting() {
        let (en_locale, en_sep) = map_locale("en");
        let (de_locale, de_sep) = map_locale("de");
        assert_eq!(format_tick(30000.0, en_locale, en_sep), "30,000");
        assert_eq!(format_tick(30000.0, de_locale, de_sep), "30.000");
        assert_eq!(format_tick(12.34, en_locale, en_sep), "12.3");
        assert_eq!(format_tick(1.5, de_locale, de_sep), "1,50");
        assert_eq!(format_tick(250.4, en_locale, en_sep), "250");
    }

    #[test]
    fn left_area_is_clamped() {
        let (locale, sep) = map_locale("en");
        let w = compute_left_label_area_px(0.0, 1.0, 10, 16, locale, sep);
        assert!((48..=160).contains(&w));
        let wide = compute_left_label_area_px(0.0, 1.0e12, 10, 16, locale, sep);
        assert_eq!(wide, 160);
    }
}
