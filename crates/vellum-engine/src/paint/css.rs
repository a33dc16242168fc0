use std::fmt;

use super::named;

/// Straight-alpha sRGB color as written in CSS.
///
/// Channels are rounded to whole bytes and alpha to three decimals, so the
/// same input always yields the same `rgb(...)` / `rgba(...)` text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Straight alpha in `[0, 1]`.
    pub a: f32,
}

impl CssColor {
    pub const BLACK: CssColor = CssColor { r: 0, g: 0, b: 0, a: 1.0 };

    /// Parses hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`, `rgba()`,
    /// `hsl()`, `hsla()`, named colors and `transparent`.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = function_args(&s, &["rgba", "rgb"]) {
            return parse_rgb_args(&args);
        }
        if let Some(args) = function_args(&s, &["hsla", "hsl"]) {
            return parse_hsl_args(&args);
        }
        if s == "transparent" {
            return Some(CssColor { r: 0, g: 0, b: 0, a: 0.0 });
        }
        named::lookup(&s).map(|[r, g, b]| CssColor { r, g, b, a: 1.0 })
    }

    /// Lenient parse: anything unrecognized reads as opaque black.
    pub fn parse_or_black(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::BLACK)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_rgb_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

fn round_alpha(a: f32) -> f32 {
    (a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

fn parse_hex(hex: &str) -> Option<CssColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let a = if expanded.len() == 8 { f32::from(byte(6)?) / 255.0 } else { 1.0 };
    Some(CssColor { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: round_alpha(a) })
}

/// Splits `name(a, b c / d)` into its components for any of `names`.
fn function_args(s: &str, names: &[&str]) -> Option<Vec<String>> {
    let name = names.iter().find(|n| s.starts_with(**n))?;
    let inner = s[name.len()..].trim_start().strip_prefix('(')?.strip_suffix(')')?;
    let args: Vec<String> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();
    Some(args)
}

fn parse_number(s: &str) -> Option<f32> {
    s.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_alpha(s: Option<&String>) -> Option<f32> {
    match s {
        None => Some(1.0),
        Some(s) => match s.strip_suffix('%') {
            Some(pct) => parse_number(pct).map(|v| v / 100.0),
            None => parse_number(s),
        },
    }
}

fn parse_channel(s: &str) -> Option<u8> {
    let v = match s.strip_suffix('%') {
        Some(pct) => parse_number(pct)? * 255.0 / 100.0,
        None => parse_number(s)?,
    };
    Some(v.clamp(0.0, 255.0).round() as u8)
}

fn parse_rgb_args(args: &[String]) -> Option<CssColor> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    Some(CssColor {
        r: parse_channel(&args[0])?,
        g: parse_channel(&args[1])?,
        b: parse_channel(&args[2])?,
        a: round_alpha(parse_alpha(args.get(3))?),
    })
}

fn parse_hsl_args(args: &[String]) -> Option<CssColor> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let h = parse_number(args[0].trim_end_matches("deg"))?;
    let s = parse_number(args[1].trim_end_matches('%'))? / 100.0;
    let l = parse_number(args[2].trim_end_matches('%'))? / 100.0;
    let a = parse_alpha(args.get(3))?;
    let [r, g, b] = hsl_to_rgb(h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
    Some(CssColor { r, g, b, a: round_alpha(a) })
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let h = h.rem_euclid(360.0) / 360.0;
    let channel = |n: f32| {
        let k = (n + h * 12.0).rem_euclid(12.0);
        let a = s * l.min(1.0 - l);
        let v = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    [channel(0.0), channel(8.0), channel(4.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: f32) -> Option<CssColor> {
        Some(CssColor { r, g, b, a })
    }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_short_and_long() {
        assert_eq!(CssColor::parse("#f00"), rgba(255, 0, 0, 1.0));
        assert_eq!(CssColor::parse("#0693e3"), rgba(6, 147, 227, 1.0));
        assert_eq!(CssColor::parse("#00000080"), rgba(0, 0, 0, 0.502));
    }

    #[test]
    fn hex_rejects_bad_digits() {
        assert_eq!(CssColor::parse("#12"), None);
        assert_eq!(CssColor::parse("#zzzzzz"), None);
    }

    // ── functional ────────────────────────────────────────────────────────

    #[test]
    fn rgb_forms() {
        assert_eq!(CssColor::parse("rgb(155, 81, 224)"), rgba(155, 81, 224, 1.0));
        assert_eq!(CssColor::parse("rgba(6,147,227,0.5)"), rgba(6, 147, 227, 0.5));
        assert_eq!(CssColor::parse("rgb(100% 0% 0% / 50%)"), rgba(255, 0, 0, 0.5));
    }

    #[test]
    fn hsl_primary_colors() {
        assert_eq!(CssColor::parse("hsl(0, 100%, 50%)"), rgba(255, 0, 0, 1.0));
        assert_eq!(CssColor::parse("hsl(120deg, 100%, 50%)"), rgba(0, 255, 0, 1.0));
        assert_eq!(CssColor::parse("hsla(240, 100%, 50%, 0.25)"), rgba(0, 0, 255, 0.25));
    }

    // ── keywords ──────────────────────────────────────────────────────────

    #[test]
    fn named_and_transparent() {
        assert_eq!(CssColor::parse("RebeccaPurple"), rgba(102, 51, 153, 1.0));
        assert_eq!(CssColor::parse("transparent"), rgba(0, 0, 0, 0.0));
        assert_eq!(CssColor::parse("notacolor"), None);
        assert_eq!(CssColor::parse_or_black("notacolor"), CssColor::BLACK);
    }

    // ── output ────────────────────────────────────────────────────────────

    #[test]
    fn rgb_string_switches_on_alpha() {
        assert_eq!(CssColor::parse("red").unwrap().to_rgb_string(), "rgb(255, 0, 0)");
        assert_eq!(
            CssColor::parse("rgba(1, 2, 3, 0.5)").unwrap().to_rgb_string(),
            "rgba(1, 2, 3, 0.5)"
        );
    }
}
