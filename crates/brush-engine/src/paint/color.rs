use std::fmt;

/// Packed RGBA color in `0xRRGGBBAA` order.
///
/// Invariant:
/// - red is the most significant byte, alpha the least significant one.
///
/// Colors are stored as straight (non-premultiplied) sRGB bytes. The painter
/// writes them into the back buffer verbatim; no blending is performed.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000ff);
    pub const WHITE: Color = Color(0xffffffff);
    pub const TRANSPARENT: Color = Color(0x00000000);

    /// Creates a color from a packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn hex(rgba: u32) -> Self {
        Self(rgba)
    }

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Opaque color from red, green and blue bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xff)
    }

    /// Creates a color from `[r, g, b, a]` bytes, as stored in a `Canvas`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Packed `0xRRGGBBAA` value.
    #[inline]
    pub const fn to_hex(self) -> u32 {
        self.0
    }

    /// `[r, g, b, a]` bytes, the layout of an `Rgba8` texel.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 0xff
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xffffff00) | a as u32)
    }

    /// Straight-alpha `f64` components in `[0, 1]`, still sRGB encoded.
    #[inline]
    pub fn to_f64(self) -> [f64; 4] {
        let [r, g, b, a] = self.to_bytes();
        [
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        ]
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(rgba: u32) -> Self {
        Self(rgba)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08x})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
