//! Acceleration sample decoding.

use crate::params::MeasureRange;

// Bit 19 of a 20-bit axis word carries the sign.
const SIGN_BIT: u32 = 0x8_0000;
const AXIS_MASK: u32 = 0xF_FFFF;

/// One raw acceleration sample, one signed 20-bit value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    /// X-axis reading in LSB.
    pub x: i32,
    /// Y-axis reading in LSB.
    pub y: i32,
    /// Z-axis reading in LSB.
    pub z: i32,
}

impl AxisSample {
    /// Decodes the nine data register bytes read in
    /// [`AXIS_READ_SEQUENCE`](crate::registers::AXIS_READ_SEQUENCE) order.
    pub fn from_raw(raw: &[u8; 9]) -> Self {
        Self {
            x: decode_axis(raw[0], raw[1], raw[2]),
            y: decode_axis(raw[3], raw[4], raw[5]),
            z: decode_axis(raw[6], raw[7], raw[8]),
        }
    }

    /// Converts the sample to micro-g using the sensitivity of `range`.
    pub fn to_micro_g(self, range: MeasureRange) -> [i32; 3] {
        let scale = |lsb: i32| (i64::from(lsb) * range.nano_g_per_lsb() / 1_000) as i32;
        [scale(self.x), scale(self.y), scale(self.z)]
    }
}

/// Packs the 20-bit field spread over `b0` (bits 3:0 in the upper nibble),
/// `b1` (bits 11:4) and `b2` (bits 19:12).
pub const fn pack_axis(b0: u8, b1: u8, b2: u8) -> u32 {
    ((b0 as u32) >> 4) | ((b1 as u32) << 4) | ((b2 as u32) << 12)
}

/// Interprets a 20-bit word as two's complement.
pub const fn sign_extend_20(raw: u32) -> i32 {
    let raw = raw & AXIS_MASK;
    if raw & SIGN_BIT != 0 {
        -(((!raw & AXIS_MASK) + 1) as i32)
    } else {
        raw as i32
    }
}

/// Decodes one axis from its three data register bytes, least significant first.
pub const fn decode_axis(b0: u8, b1: u8, b2: u8) -> i32 {
    sign_extend_20(pack_axis(b0, b1, b2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extension_covers_the_20_bit_range() {
        assert_eq!(sign_extend_20(0x00000), 0);
        assert_eq!(sign_extend_20(0x7FFFF), 524_287);
        assert_eq!(sign_extend_20(0x80000), -524_288);
        assert_eq!(sign_extend_20(0xFFFFF), -1);
    }

    #[test]
    fn low_nibble_of_first_byte_is_discarded() {
        assert_eq!(decode_axis(0x10, 0x00, 0x00), 1);
        assert_eq!(decode_axis(0x1F, 0x00, 0x00), 1);
    }

    #[test]
    fn packing_spreads_bytes_across_the_word() {
        assert_eq!(pack_axis(0xF0, 0xFF, 0x0F), 0xFFFF);
        assert_eq!(decode_axis(0xF0, 0xFF, 0x0F), 65_535);
        assert_eq!(decode_axis(0x00, 0x00, 0x80), -524_288);
        assert_eq!(decode_axis(0xF0, 0xFF, 0xFF), -1);
    }

    #[test]
    fn from_raw_splits_axes_in_order() {
        let raw = [0x10, 0x00, 0x00, 0x20, 0x00, 0x00, 0xF0, 0xFF, 0xFF];
        assert_eq!(AxisSample::from_raw(&raw), AxisSample { x: 1, y: 2, z: -1 });
    }

    #[test]
    fn micro_g_scaling_follows_range() {
        let sample = AxisSample { x: 256_000, y: -1_000, z: 0 };
        assert_eq!(sample.to_micro_g(MeasureRange::G2), [998_400, -3_900, 0]);
        assert_eq!(sample.to_micro_g(MeasureRange::G8), [3_993_600, -15_600, 0]);
    }
}
