use std::{fmt, num::ParseIntError, ops, str::FromStr};

/// An 8-bit-per-channel color whose channels may leave `0..=255` between
/// operations. Every combining operator clamps its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// {0}
#[derive(Debug, displaydoc::Display)]
pub struct ParseColorError(ParseColorErrorRepr);

#[derive(Debug, displaydoc::Display)]
enum ParseColorErrorRepr {
    /// Invalid color format, expected `#00aa9f` or a color name
    InvalidFormat,
    /// Invalid hex value, {0}
    InvalidColorValue(ParseIntError),
}

impl std::error::Error for ParseColorError {}

/// Named colors usable wherever a [`Color`] is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    OceanGreen,
    Cyan,
    SkyBlue,
    Blue,
    Purple,
    Pink,
    HotPink,
    White,
    Grey,
    Black,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: i32, g: i32, b: i32) -> Color {
        Color { r, g, b }
    }

    pub fn clamp(self) -> Color {
        let f = |c: i32| c.clamp(0, 255);
        Color::new(f(self.r), f(self.g), f(self.b))
    }

    /// Every channel multiplied by `k`, truncated.
    pub fn scale(self, k: f64) -> Color {
        let f = |c: i32| (c as f64 * k) as i32;
        Color::new(f(self.r), f(self.g), f(self.b)).clamp()
    }

    /// Filters `self` through `other`, scaled by `k`: `self * other * k / 255`.
    pub fn combine(self, other: Color, k: f64) -> Color {
        let f = |a: i32, b: i32| (a as f64 * b as f64 * k / 255.0) as i32;
        Color::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b)).clamp()
    }
}

impl ops::Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b).clamp()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b } = self.clamp();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        if let Ok(named) = s.parse::<Palette>() {
            return Ok(named.into());
        }
        if !(s.starts_with('#') && s.len() == 7 && s.is_ascii()) {
            Err(ParseColorErrorRepr::InvalidFormat)?
        }
        let [r, g, b] = [&s[1..3], &s[3..5], &s[5..7]]
            .map(|it| u8::from_str_radix(it, 16).map_err(ParseColorErrorRepr::InvalidColorValue));
        Ok(Color::new(r?.into(), g?.into(), b?.into()))
    }
}

impl From<ParseColorErrorRepr> for ParseColorError {
    fn from(repr: ParseColorErrorRepr) -> ParseColorError {
        ParseColorError(repr)
    }
}

impl Palette {
    pub const fn color(self) -> Color {
        let (r, g, b) = match self {
            Palette::Red => (255, 0, 0),
            Palette::Orange => (255, 127, 0),
            Palette::Yellow => (255, 255, 0),
            Palette::Lime => (127, 255, 0),
            Palette::Green => (0, 255, 0),
            Palette::OceanGreen => (0, 255, 127),
            Palette::Cyan => (0, 255, 255),
            Palette::SkyBlue => (0, 127, 255),
            Palette::Blue => (0, 0, 255),
            Palette::Purple => (127, 0, 255),
            Palette::Pink => (255, 0, 255),
            Palette::HotPink => (255, 0, 127),
            Palette::White => (255, 255, 255),
            Palette::Grey => (127, 127, 127),
            Palette::Black => (0, 0, 0),
        };
        Color::new(r, g, b)
    }
}

impl From<Palette> for Color {
    fn from(p: Palette) -> Color {
        p.color()
    }
}

impl FromStr for Palette {
    type Err = ();

    fn from_str(s: &str) -> Result<Palette, ()> {
        let res = match s {
            "red" => Palette::Red,
            "orange" => Palette::Orange,
            "yellow" => Palette::Yellow,
            "lime" => Palette::Lime,
            "green" => Palette::Green,
            "ocean-green" => Palette::OceanGreen,
            "cyan" => Palette::Cyan,
            "sky-blue" => Palette::SkyBlue,
            "blue" => Palette::Blue,
            "purple" => Palette::Purple,
            "pink" => Palette::Pink,
            "hot-pink" => Palette::HotPink,
            "white" => Palette::White,
            "grey" => Palette::Grey,
            "black" => Palette::Black,
            _ => return Err(()),
        };
        Ok(res)
    }
}
