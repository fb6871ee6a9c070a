//! Color schemes and multi-stop interpolation engine.

use std::fmt;
use std::str::FromStr;

use pixmorph_core::Error;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Black -> White
    #[default]
    Grayscale,
    /// White -> Black
    GrayscaleReversed,
    /// Black -> Red -> Yellow -> White
    Hot,
    /// Black -> Blue-gray -> White
    Bone,
}

impl ColorScheme {
    /// All available schemes.
    pub const ALL: &'static [ColorScheme] = &[
        Self::Grayscale,
        Self::GrayscaleReversed,
        Self::Hot,
        Self::Bone,
    ];

    /// Conventional short name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "gray",
            Self::GrayscaleReversed => "gray_r",
            Self::Hot => "hot",
            Self::Bone => "bone",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| {
                Error::invalid_argument("cmap", s, "expected one of gray, gray_r, hot, bone")
            })
    }
}

// ─── Color stop definitions ────────────────────────────────────────────

const HOT_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 10, 0, 0),
    ColorStop::new(0.365, 255, 0, 0),
    ColorStop::new(0.746, 255, 255, 0),
    ColorStop::new(1.000, 255, 255, 255),
];

const BONE_STOPS: &[ColorStop] = &[
    ColorStop::new(0.000, 0, 0, 0),
    ColorStop::new(0.365, 81, 81, 113),
    ColorStop::new(0.746, 166, 198, 198),
    ColorStop::new(1.000, 255, 255, 255),
];

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

/// `stops` is one of the non-empty tables above, ordered by `t`.
fn multi_stop(stops: &[ColorStop], t: f64) -> Rgb {
    debug_assert!(!stops.is_empty(), "color stop table must not be empty");
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

fn gray(t: f64) -> Rgb {
    let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb::new(v, v, v)
}

/// Evaluate a color scheme at normalized position `t` ∈ [0, 1].
///
/// Grayscale ramps are linear; the other schemes interpolate between stops.
/// Positions outside [0, 1] are clamped.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgb {
    match scheme {
        ColorScheme::Grayscale => gray(t),
        ColorScheme::GrayscaleReversed => gray(1.0 - t),
        ColorScheme::Hot => multi_stop(HOT_STOPS, t),
        ColorScheme::Bone => multi_stop(BONE_STOPS, t),
    }
}
