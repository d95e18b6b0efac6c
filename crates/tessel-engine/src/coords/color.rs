use std::fmt;

/// Packed 32-bit color.
///
/// Layout (bit 31 → bit 0): `AAAAAAAA BBBBBBBB GGGGGGGG RRRRRRRR`.
///
/// Alpha is a transparency test only: `0` means "do not draw" during block
/// copies, anything else is drawn as-is. No blending is performed.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const ALPHA_OPAQUE: u8 = 0xFF;
    pub const ALPHA_TRANSPARENT: u8 = 0;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const TEAL: Color = Color::rgb(0, 255, 255);
    pub const PURPLE: Color = Color::rgb(255, 0, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const DARK_GRAY: Color = Color::rgb(128, 128, 128);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, Self::ALPHA_OPAQUE)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Low 24 bits (red, green, blue) with alpha masked off.
    #[inline]
    pub const fn rgb_bits(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// Channel equality ignoring alpha.
    #[inline]
    pub const fn same_rgb(self, other: Color) -> bool {
        self.rgb_bits() == other.rgb_bits()
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == Self::ALPHA_TRANSPARENT
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.rgb_bits() | (a as u32) << 24)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}
