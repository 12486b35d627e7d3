//! Integer-only RGBA color algebra.
//!
//! Colors are immutable values; every operation returns a new [`Color`].
//! All arithmetic is integer, truncating, and clamped to the 8-bit channel
//! range, so results are bit-identical across re-execution. The algebra
//! consumes already-computed random values and never generates its own.

use serde::{Deserialize, Serialize};

use crate::error::SeedbrushError;

/// Fully opaque alpha.
pub const OPAQUE: u8 = 0xFF;

/// Four 8-bit channels. Alpha is carried through each operation untouched
/// unless documented otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// An opaque color from the three RGB channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: OPAQUE }
    }

    /// Unpack a 24-bit `0xRRGGBB` value; alpha defaults to opaque.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            red: (packed >> 16) as u8,
            green: (packed >> 8) as u8,
            blue: packed as u8,
            alpha: OPAQUE,
        }
    }

    /// Pack the RGB channels as `0xRRGGBB`, dropping alpha.
    pub const fn packed(self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Blend `self` over `other` at `ratio` out of `total`.
    ///
    /// A `total` of 100 is a plain weighted average. Totals off 100 under-
    /// or overmix by scaling the result, clamped per channel, which pushes
    /// the blend outside the source bounds on purpose. Alpha comes from
    /// `self`. Fails with [`SeedbrushError::RatioInvalid`] when
    /// `ratio > total`.
    pub fn mix(self, other: Color, ratio: u16, total: u16) -> Result<Color, SeedbrushError> {
        if ratio > total {
            return Err(SeedbrushError::RatioInvalid);
        }
        Ok(Color {
            red: mix_component(self.red, other.red, ratio, total),
            green: mix_component(self.green, other.green, ratio, total),
            blue: mix_component(self.blue, other.blue, ratio, total),
            alpha: self.alpha,
        })
    }

    /// Brighten every RGB channel by `percent`, with each channel gaining
    /// at least `minimum_bump`, clamped at 255. Alpha passes through.
    pub fn brighten(self, percent: u32, minimum_bump: u8) -> Color {
        Color {
            red: brighten_component(self.red, percent, minimum_bump),
            green: brighten_component(self.green, percent, minimum_bump),
            blue: brighten_component(self.blue, percent, minimum_bump),
            alpha: self.alpha,
        }
    }

    /// Pick a color proportionally between `start` and `stop` from an
    /// already-randomized color.
    ///
    /// The channels move together: one percentage is derived from the sum
    /// of the random channels, then applied per channel between the
    /// normalized floor and ceiling. A random channel at zero lands on the
    /// floor, 254 on the ceiling, and the spread in between stays close to
    /// uniform. The result is always opaque.
    pub fn randomize(start: Color, stop: Color, random: Color) -> Color {
        let sum = u32::from(random.red) + u32::from(random.green) + u32::from(random.blue);
        // Scales the 0..=765 channel sum onto 0..=100.
        let percent = (1320 * sum / 10_000) % 101;
        Color {
            red: randomize_component(start.red, stop.red, random.red, percent),
            green: randomize_component(start.green, stop.green, random.green, percent),
            blue: randomize_component(start.blue, stop.blue, random.blue, percent),
            alpha: OPAQUE,
        }
    }
}

fn mix_component(component1: u8, component2: u8, ratio: u16, total: u16) -> u8 {
    // The inverse weight bottoms out at zero once ratio passes 100.
    let inverse = 100u64.saturating_sub(u64::from(ratio));
    let mixed = (u64::from(component1) * u64::from(ratio) + u64::from(component2) * inverse)
        * u64::from(total)
        / 10_000;
    mixed.min(0xFF) as u8
}

fn brighten_component(component: u8, percent: u32, minimum_bump: u8) -> u8 {
    let wide = u64::from(component);
    let mut brightened = wide * (u64::from(percent) + 100) / 100;
    if brightened - wide < u64::from(minimum_bump) {
        brightened = wide + u64::from(minimum_bump);
    }
    brightened.min(0xFF) as u8
}

fn randomize_component(start: u8, stop: u8, random: u8, percent: u32) -> u8 {
    if start == stop {
        return start;
    }
    let (floor, ceiling) = if start < stop { (start, stop) } else { (stop, start) };
    // The parity of the random channel nudges the ceiling so consecutive
    // random values spread over distinct outputs.
    let span = u32::from(ceiling) - u32::from(random & 1) - u32::from(floor);
    floor + (span * percent / 100) as u8
}
