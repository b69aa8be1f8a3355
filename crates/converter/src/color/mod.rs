//! Colors are parsed from one of three source forms: a named color
//! (`red`, `Fuchsia`), a hex color (`#ff0000`, `#f00`) or the `rgb()`
//! function with either integer or percentage channels.
//!
//! The source text of each color is retained verbatim, so `OrAnGe` is
//! emitted as `OrAnGe` and `rgb(100%, 0%, 0%)` is not rewritten to `red`.

use std::fmt;

use crate::{
    rule::{Rejection, RejectionKind},
    value::Number,
};

pub(crate) use name::NAMED_COLORS;

mod name;

#[derive(Debug, Clone)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    /// Literal string from source text
    literal: String,
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb() == other.rgb()
    }
}

impl Eq for Color {}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8, literal: String) -> Self {
        Color {
            red,
            green,
            blue,
            literal,
        }
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Parse a single color token
    pub(crate) fn parse(token: &str) -> Result<Self, Rejection> {
        if let Some(hex) = token.strip_prefix('#') {
            return Self::parse_hex(token, hex);
        }

        if let Some(args) = strip_function(token, "rgb") {
            return Self::parse_rgb(token, args);
        }

        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Rejection::new(
                RejectionKind::Syntax,
                format!("Expected color, was \"{}\".", token),
            ));
        }

        match NAMED_COLORS.get(token.to_ascii_lowercase().as_str()) {
            Some(&[red, green, blue]) => Ok(Color::new(red, green, blue, token.to_owned())),
            None => Err(Rejection::new(
                RejectionKind::Domain,
                format!("Unknown color name \"{}\".", token),
            )),
        }
    }

    fn parse_hex(token: &str, hex: &str) -> Result<Self, Rejection> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Rejection::new(
                RejectionKind::Syntax,
                format!("Expected hex digits in \"{}\".", token),
            ));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or_default();

        let [red, green, blue] = match hex.len() {
            6 => [channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])],
            3 => [
                channel(&hex[0..1]) * 0x11,
                channel(&hex[1..2]) * 0x11,
                channel(&hex[2..3]) * 0x11,
            ],
            _ => {
                return Err(Rejection::new(
                    RejectionKind::Syntax,
                    format!("Expected 3 or 6 hex digits in \"{}\".", token),
                ))
            }
        };

        Ok(Color::new(red, green, blue, token.to_owned()))
    }

    fn parse_rgb(token: &str, args: &str) -> Result<Self, Rejection> {
        let channels: Vec<&str> = args.split(',').map(str::trim).collect();

        if channels.len() != 3 {
            return Err(Rejection::new(
                RejectionKind::Syntax,
                format!("Expected 3 channels in \"{}\".", token),
            ));
        }

        let percent = channels[0].ends_with('%');
        let mut rgb = [0_u8; 3];

        for (slot, channel) in rgb.iter_mut().zip(&channels) {
            if channel.ends_with('%') != percent {
                return Err(Rejection::new(
                    RejectionKind::Syntax,
                    format!("Channels of \"{}\" must all be numbers or all be percentages.", token),
                ));
            }

            *slot = if percent {
                let value = parse_channel_number(token, channel.trim_end_matches('%'))?;
                (value.clamp(0.0, 100.0).0 * 255.0 / 100.0).round() as u8
            } else {
                let value = parse_channel_number(token, channel)?;
                value.clamp(0.0, 255.0).0.round() as u8
            };
        }

        let [red, green, blue] = rgb;
        Ok(Color::new(red, green, blue, token.to_owned()))
    }
}

fn parse_channel_number(token: &str, text: &str) -> Result<Number, Rejection> {
    let valid = !text.is_empty()
        && text
            .trim_start_matches(['+', '-'])
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.');

    match text.parse::<f64>() {
        Ok(n) if valid => Ok(Number(n)),
        _ => Err(Rejection::new(
            RejectionKind::Syntax,
            format!("Expected number in \"{}\", was \"{}\".", token, text),
        )),
    }
}

/// Strip `name(` and `)` from `token`, ignoring the case of `name`
pub(crate) fn strip_function<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    let open = token.find('(')?;
    if !token[..open].eq_ignore_ascii_case(name) {
        return None;
    }

    token[open + 1..].strip_suffix(')')
}

/// Split a color list on whitespace, keeping function arguments together
pub(crate) fn split_tokens(raw: &str) -> Result<Vec<&str>, Rejection> {
    let mut tokens = Vec::new();
    let mut depth = 0_usize;
    let mut start = None;

    for (idx, c) in raw.char_indices() {
        match c {
            '(' => {
                depth += 1;
                start.get_or_insert(idx);
            }
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Rejection::new(
                        RejectionKind::Syntax,
                        format!("Unmatched \")\" in \"{}\".", raw),
                    )
                })?;
            }
            c if c.is_ascii_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&raw[begin..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }

    if depth != 0 {
        return Err(Rejection::new(
            RejectionKind::Syntax,
            format!("Expected \")\" in \"{}\".", raw),
        ));
    }

    if let Some(begin) = start {
        tokens.push(&raw[begin..]);
    }

    Ok(tokens)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}
