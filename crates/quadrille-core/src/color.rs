// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # RGBA Colors
//!
//! An 8-bit-per-channel color value. Squares carry one, grid cells record one
//! for their fill and border layers, and filler squares use
//! `Rgba::TRANSPARENT` by convention so a renderer can skip them.

/// An 8-bit-per-channel, straight-alpha RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Rgba = Rgba::opaque(0xFF, 0xFF, 0xFF);
    pub const RED: Rgba = Rgba::opaque(0xFF, 0x00, 0x00);
    pub const GREEN: Rgba = Rgba::opaque(0x00, 0xFF, 0x00);
    pub const BLUE: Rgba = Rgba::opaque(0x00, 0x00, 0xFF);
    pub const YELLOW: Rgba = Rgba::opaque(0xFF, 0xFF, 0x00);
    pub const MAGENTA: Rgba = Rgba::opaque(0xFF, 0x00, 0xFF);
    pub const CYAN: Rgba = Rgba::opaque(0x00, 0xFF, 0xFF);
    pub const PURPLE_DARK: Rgba = Rgba::opaque(0x66, 0x50, 0xA4);
    pub const PURPLE_LIGHT: Rgba = Rgba::opaque(0xD0, 0xBC, 0xFF);
    pub const ORANGE_DARK: Rgba = Rgba::opaque(0xE6, 0x51, 0x00);
    pub const ORANGE_LIGHT: Rgba = Rgba::opaque(0xFF, 0xB7, 0x4D);
    pub const PINK_DARK: Rgba = Rgba::opaque(0x7D, 0x52, 0x60);
    pub const PINK_LIGHT: Rgba = Rgba::opaque(0xEF, 0xB8, 0xC8);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Returns `true` if the alpha channel is zero.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Composites `other` on top of `self` (source-over).
    ///
    /// A fully transparent `other` leaves `self` untouched.
    pub fn layer(self, other: Rgba) -> Rgba {
        if other.a == 0 {
            return self;
        }

        let a_dst = unit(self.a);
        let a_src = unit(other.a);
        let a_out = a_src + a_dst * (1.0 - a_src);

        let channel = |dst: u8, src: u8| -> u8 {
            let value = (unit(src) * a_src + unit(dst) * a_dst * (1.0 - a_src)) / a_out;
            byte(value)
        };

        Rgba {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: byte(a_out),
        }
    }

    /// Mixes two colors by weight, taking each color's alpha into account.
    ///
    /// The channel weights are renormalized so that they sum to one; mixing
    /// with a transparent color therefore does not darken the result. The
    /// resulting alpha is the weighted alpha sum, clamped to opaque.
    pub fn mix(self, weight: f32, other: Rgba, other_weight: f32) -> Rgba {
        let aw_self = unit(self.a) * weight.max(0.0);
        let aw_other = unit(other.a) * other_weight.max(0.0);
        let a = aw_self + aw_other;

        if a <= 0.0 {
            return Rgba::TRANSPARENT;
        }

        let w_self = aw_self / a;
        let w_other = 1.0 - w_self;
        let channel = |lhs: u8, rhs: u8| -> u8 { byte(unit(lhs) * w_self + unit(rhs) * w_other) };

        Rgba {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: byte(a),
        }
    }
}

#[inline]
fn unit(channel: u8) -> f32 {
    channel as f32 / 255.0
}

#[inline]
fn byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<u32> for Rgba {
    /// Interprets the value as `0xRRGGBBAA`.
    #[inline]
    fn from(value: u32) -> Self {
        let [r, g, b, a] = value.to_be_bytes();
        Rgba { r, g, b, a }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
