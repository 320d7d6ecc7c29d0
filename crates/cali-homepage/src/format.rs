//! Text formatting helpers for the rendered pages

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a single path segment
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, which leaves
/// canonical names readable in links ("Korea%2C%20Rep.").
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Default decimal places for values below 1000
pub const DEFAULT_DECIMALS: usize = 1;

/// Format a metric value for display
///
/// Values `>= 1000` are rounded to whole numbers with thousands separators;
/// smaller values keep exactly `decimals` places. Ties round away from zero.
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = if value >= 1000.0 {
        format!("{:.0}", value.round())
    } else {
        let scale = 10f64.powi(decimals as i32);
        format!("{:.*}", decimals, (value * scale).round() / scale)
    };
    group_thousands(&fixed)
}

/// Insert `,` separators into the integer part of a formatted number
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Percent-encode a value for use as one URL path segment
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
