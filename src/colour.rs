/// An 8-bit-per-channel RGBA colour, as used by raster card output
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new, fully opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new opaque grey, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }

    /// Copy of this colour with a different alpha channel
    pub const fn with_alpha(self, a: u8) -> Colour {
        Colour { a, ..self }
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour { r, g, b, a }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0);
    pub const WHITE: Colour = Colour::new_grey_bytes(255);
    pub const CHARCOAL: Colour = Colour::new_rgb_bytes(51, 51, 51);
    pub const SILVER: Colour = Colour::new_rgb_bytes(180, 180, 180);
    pub const NIGHT: Colour = Colour::new_rgb_bytes(30, 30, 30);
    pub const MIST: Colour = Colour::new_rgb_bytes(230, 230, 230);
    pub const PAPER: Colour = Colour::new_rgb_bytes(253, 245, 230);
    pub const SEPIA: Colour = Colour::new_rgb_bytes(60, 50, 40);
}
