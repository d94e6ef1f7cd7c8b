use crate::{
    clipper::{
        constants::{DEFAULT_PRECISION, MAX_PRECISION},
        enums::PolyFillType,
    },
    utils::bit_ops::{get_bits, set_bits},
};

/// Engine settings. Packs into a single `u32` so it can cross the wasm boundary as one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipperConfig {
    pub precision: u8,
    pub force_alternate_orientation: bool,
    pub subject_fill: PolyFillType,
    pub clip_fill: PolyFillType,
}

const CONFIG_OFFSETS: [u8; 4] = [0, 3, 4, 6];

const CONFIG_BITS: [u8; 4] = [3, 1, 2, 2];

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            force_alternate_orientation: true,
            subject_fill: PolyFillType::EvenOdd,
            clip_fill: PolyFillType::EvenOdd,
        }
    }
}

impl ClipperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid units per caller unit.
    pub fn scale(&self) -> f64 {
        10f64.powi(self.precision.min(MAX_PRECISION) as i32)
    }

    pub fn deserialize(&mut self, packed: u32) {
        self.precision = get_bits(packed, CONFIG_OFFSETS[0], CONFIG_BITS[0]) as u8;
        self.force_alternate_orientation = get_bits(packed, CONFIG_OFFSETS[1], CONFIG_BITS[1]) != 0;
        self.subject_fill =
            PolyFillType::from_u8(get_bits(packed, CONFIG_OFFSETS[2], CONFIG_BITS[2]) as u8)
                .unwrap_or_default();
        self.clip_fill =
            PolyFillType::from_u8(get_bits(packed, CONFIG_OFFSETS[3], CONFIG_BITS[3]) as u8)
                .unwrap_or_default();
    }

    pub fn serialize(&self) -> u32 {
        let mut result: u32 = 0;

        result = set_bits(result, self.precision as u16, CONFIG_OFFSETS[0], CONFIG_BITS[0]);
        result = set_bits(
            result,
            self.force_alternate_orientation as u16,
            CONFIG_OFFSETS[1],
            CONFIG_BITS[1],
        );
        result = set_bits(result, self.subject_fill as u16, CONFIG_OFFSETS[2], CONFIG_BITS[2]);
        result = set_bits(result, self.clip_fill as u16, CONFIG_OFFSETS[3], CONFIG_BITS[3]);

        result
    }
}

impl From<u32> for ClipperConfig {
    fn from(packed: u32) -> Self {
        let mut result = Self::default();
        result.deserialize(packed);
        result
    }
}
