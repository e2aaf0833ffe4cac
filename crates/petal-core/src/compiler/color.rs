//! Opacity modifiers for color values

/// Apply an opacity in percent to a CSS color value.
///
/// Hex colors become `rgb(r g b / alpha)`. Anything else (named colors,
/// `rgba(...)`, custom properties) is wrapped in `color-mix` so the result is
/// still a valid color.
pub fn apply_opacity(value: &str, opacity: u8) -> String {
    let alpha = f64::from(opacity.min(100)) / 100.0;
    match parse_hex(value) {
        Some((r, g, b)) => format!("rgb({} {} {} / {})", r, g, b, alpha),
        None => format!("color-mix(in srgb, {} {}%, transparent)", value, opacity.min(100)),
    }
}

/// Parse `#rgb` or `#rrggbb`
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}
