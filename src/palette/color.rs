use crate::foundation::core::Rgb8;
use crate::foundation::error::{BorderError, BorderResult};

const NAMED_COLORS: &[(&str, Rgb8)] = &[
    ("black", Rgb8::new(0, 0, 0)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("cyan", Rgb8::new(0, 255, 255)),
    ("green", Rgb8::new(0, 255, 0)),
    ("magenta", Rgb8::new(255, 0, 255)),
    ("purple", Rgb8::new(113, 27, 248)),
    ("red", Rgb8::new(255, 0, 0)),
    ("white", Rgb8::new(255, 255, 255)),
    ("yellow", Rgb8::new(255, 255, 0)),
];

const PROFILES: &[(&str, &str, &str)] = &[
    ("cm", "cyan", "magenta"),
    ("cy", "cyan", "yellow"),
    ("my", "magenta", "yellow"),
    ("imposter", "black", "red"),
];

/// Profile used when no explicit colors are given.
pub const DEFAULT_PROFILE: &str = "cm";

/// A color as the caller supplied it, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// Already-resolved channels.
    Rgb(Rgb8),
    /// `#RRGGBB` string.
    Hex(String),
    /// Palette name such as `"cyan"`.
    Named(String),
}

impl ColorSpec {
    /// Classify a user string: a leading `#` means hex, anything else is a palette name.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with('#') {
            Self::Hex(s.to_owned())
        } else {
            Self::Named(s.to_owned())
        }
    }

    /// Validate and normalize to RGB.
    pub fn resolve(&self) -> BorderResult<Rgb8> {
        match self {
            Self::Rgb(c) => Ok(*c),
            Self::Hex(s) => parse_hex(s),
            Self::Named(name) => named_color(name),
        }
    }
}

impl From<Rgb8> for ColorSpec {
    fn from(c: Rgb8) -> Self {
        Self::Rgb(c)
    }
}

/// Parse `#RRGGBB` (case-insensitive, leading `#` optional).
pub fn parse_hex(s: &str) -> BorderResult<Rgb8> {
    let digits = s.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BorderError::validation(format!(
            "hex color must be #RRGGBB, got \"{s}\""
        )));
    }

    let byte = |pair: &str| {
        u8::from_str_radix(pair, 16)
            .map_err(|_| BorderError::validation(format!("invalid hex byte \"{pair}\" in \"{s}\"")))
    };
    Ok(Rgb8::new(
        byte(&digits[0..2])?,
        byte(&digits[2..4])?,
        byte(&digits[4..6])?,
    ))
}

/// Look up a palette color by (case-insensitive) name.
pub fn named_color(name: &str) -> BorderResult<Rgb8> {
    let key = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, c)| *c)
        .ok_or_else(|| {
            BorderError::validation(format!(
                "unknown color \"{name}\" (expected a #RRGGBB value or one of: {})",
                palette_names().collect::<Vec<_>>().join(", ")
            ))
        })
}

/// Look up a two-color profile by name.
pub fn profile(name: &str) -> BorderResult<(Rgb8, Rgb8)> {
    let key = name.trim().to_ascii_lowercase();
    let (_, primary, secondary) = PROFILES
        .iter()
        .find(|(n, _, _)| *n == key)
        .ok_or_else(|| {
            BorderError::config(format!(
                "unknown profile \"{name}\" (expected one of: {})",
                profile_names().collect::<Vec<_>>().join(", ")
            ))
        })?;
    Ok((named_color(primary)?, named_color(secondary)?))
}

/// Resolve the two border colors.
///
/// Explicit colors win only when both are given; otherwise `profile` supplies the pair.
pub fn resolve_colors(
    primary: Option<&str>,
    secondary: Option<&str>,
    profile_name: &str,
) -> BorderResult<(Rgb8, Rgb8)> {
    match (primary, secondary) {
        (Some(p), Some(s)) => Ok((ColorSpec::parse(p).resolve()?, ColorSpec::parse(s).resolve()?)),
        _ => profile(profile_name),
    }
}

/// Names accepted by [`named_color`].
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|(n, _)| *n)
}

/// Names accepted by [`profile`].
pub fn profile_names() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|(n, _, _)| *n)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;
