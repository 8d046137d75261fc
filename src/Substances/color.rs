//! # Color Mixing Module
//!
//! ## Aim
//! Computes the visible color of a liquid mixture in the flask. Every substance carries a
//! display color; the mixture color is a volume-weighted average of the added portions.
//!
//! ## Main Data Structures and Logic
//! - `Rgb`: 8-bit RGB triple with hex parsing/formatting
//! - `mix()`: blends two colors weighted by their volumes
//! - `mix_sequence()`: strict left fold over (color, volume) pairs, the accumulator keeps
//!   the cumulative volume of everything mixed so far
//!
//! ## Usage
//! ```rust
//! use ChemFlask::Substances::color::{Rgb, mix, mix_sequence};
//! let red = Rgb::new(255, 0, 0);
//! let blue = Rgb::new(0, 0, 255);
//! let purple = mix(red, 10.0, blue, 10.0).unwrap();
//! assert_eq!(purple, Rgb::new(128, 0, 128));
//! let seq = mix_sequence(&[(red, 10.0), (blue, 10.0)]).unwrap();
//! assert_eq!(seq.to_hex(), "#800080");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// color of an empty flask and of a mixture with zero total volume
pub const FALLBACK_COLOR: Rgb = Rgb::new(255, 255, 255);

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("Invalid hex color: '{0}'")]
    InvalidHex(String),
    #[error("Volume must be a non-negative number, got {0}")]
    NegativeVolume(f64),
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    /// builds a color from a 0xRRGGBB literal, used by the static catalog
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
    /// parses "#RRGGBB" or "RRGGBB"
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
    /// lowercase "#rrggbb"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
    /// ANSI true-color escape painting the background with this color
    pub fn ansi_background(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn check_volume(volume: f64) -> Result<(), ColorError> {
    if volume.is_nan() || volume < 0.0 {
        return Err(ColorError::NegativeVolume(volume));
    }
    Ok(())
}

fn blend_channel(a: u8, va: f64, b: u8, vb: f64) -> u8 {
    let value = (a as f64 * va + b as f64 * vb) / (va + vb);
    value.round().clamp(0.0, 255.0) as u8
}

/// Mixes two colors weighted by volume.
///
/// Zero total volume gives `FALLBACK_COLOR`; a negative volume is rejected.
pub fn mix(color_a: Rgb, volume_a: f64, color_b: Rgb, volume_b: f64) -> Result<Rgb, ColorError> {
    check_volume(volume_a)?;
    check_volume(volume_b)?;
    let total = volume_a + volume_b;
    if total == 0.0 {
        return Ok(FALLBACK_COLOR);
    }
    Ok(Rgb::new(
        blend_channel(color_a.r, volume_a, color_b.r, volume_b),
        blend_channel(color_a.g, volume_a, color_b.g, volume_b),
        blend_channel(color_a.b, volume_a, color_b.b, volume_b),
    ))
}

/// Left fold over the portions in the order they were poured into the flask.
/// The accumulator is mixed at its cumulative volume against each next portion at its own volume.
/// An empty slice gives `FALLBACK_COLOR`.
pub fn mix_sequence(portions: &[(Rgb, f64)]) -> Result<Rgb, ColorError> {
    let Some(((first_color, first_volume), rest)) = portions.split_first() else {
        return Ok(FALLBACK_COLOR);
    };
    check_volume(*first_volume)?;
    let mut current = *first_color;
    let mut cumulative = *first_volume;
    for (color, volume) in rest {
        current = mix(current, cumulative, *color, *volume)?;
        cumulative += volume;
    }
    Ok(current)
}
