use std::fmt;

/// A final pixel value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

impl From<scene::Color> for Color {
    fn from(color: scene::Color) -> Color {
        let scene::Color { r, g, b } = color.clamp();
        // Clamped above, the casts are lossless.
        Color { r: r as u8, g: g as u8, b: b as u8 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b } = self;
        write!(f, "{r} {g} {b}")
    }
}

#[test]
fn test_from_scene_color_clamps() {
    assert_eq!(Color::from(scene::Color::new(-3, 128, 700)), Color::new(0, 128, 255));
    assert_eq!(Color::new(1, 20, 255).to_string(), "1 20 255");
}
