//! Decisions that depend on the requested boolean operation.
//!
//! Everything else in the sweep is operation agnostic: winding counts are kept
//! for both input sets and these functions turn them into output decisions.

use crate::clipper::enums::{ClipType, PolyFillType, PolyType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRules {
    pub subject: PolyFillType,
    pub clip: PolyFillType,
}

impl FillRules {
    pub fn new(subject: PolyFillType, clip: PolyFillType) -> Self {
        Self { subject, clip }
    }

    /// Fill rule of the set `poly_type` belongs to.
    #[inline(always)]
    pub fn own(&self, poly_type: PolyType) -> PolyFillType {
        match poly_type {
            PolyType::Subject => self.subject,
            PolyType::Clip => self.clip,
        }
    }

    /// Fill rule of the opposite set.
    #[inline(always)]
    pub fn other(&self, poly_type: PolyType) -> PolyFillType {
        match poly_type {
            PolyType::Subject => self.clip,
            PolyType::Clip => self.subject,
        }
    }
}

/// Winding count folded through a fill rule so that 0 and 1 mean outside and on the boundary.
#[inline(always)]
pub fn effective_wind(fill_type: PolyFillType, wind_cnt: i32) -> i32 {
    match fill_type {
        PolyFillType::Positive => wind_cnt,
        PolyFillType::Negative => -wind_cnt,
        _ => wind_cnt.abs(),
    }
}

fn is_inside_other(fill_type: PolyFillType, wind_cnt2: i32) -> bool {
    match fill_type {
        PolyFillType::EvenOdd | PolyFillType::NonZero => wind_cnt2 != 0,
        PolyFillType::Positive => wind_cnt2 > 0,
        PolyFillType::Negative => wind_cnt2 < 0,
    }
}

/// Whether a newly activated edge bounds the result of `clip_type`.
pub fn is_contributing(
    clip_type: ClipType,
    rules: &FillRules,
    poly_type: PolyType,
    wind_cnt: i32,
    wind_cnt2: i32,
) -> bool {
    let is_on_own_boundary = match rules.own(poly_type) {
        PolyFillType::EvenOdd => true,
        PolyFillType::NonZero => wind_cnt.abs() == 1,
        PolyFillType::Positive => wind_cnt == 1,
        PolyFillType::Negative => wind_cnt == -1,
    };

    if !is_on_own_boundary {
        return false;
    }

    let inside_other = is_inside_other(rules.other(poly_type), wind_cnt2);

    match clip_type {
        ClipType::Intersection => inside_other,
        ClipType::Union => !inside_other,
        ClipType::Difference => match poly_type {
            PolyType::Subject => !inside_other,
            PolyType::Clip => inside_other,
        },
        ClipType::Xor => true,
    }
}

/// Two contributing edges of different sets meeting at a crossing close their rings
/// instead of swapping, except for Xor where both sides stay open.
#[inline(always)]
pub fn closes_at_crossing(clip_type: ClipType, poly_type1: PolyType, poly_type2: PolyType) -> bool {
    poly_type1 != poly_type2 && clip_type != ClipType::Xor
}

/// Whether two non-contributing edges of the same set open a ring where they cross.
/// `wc2_*` are the effective winding counts of the other set on each edge.
pub fn opens_at_crossing(clip_type: ClipType, poly_type: PolyType, wc2_1: i32, wc2_2: i32) -> bool {
    match clip_type {
        ClipType::Intersection => wc2_1 > 0 && wc2_2 > 0,
        ClipType::Union => wc2_1 <= 0 && wc2_2 <= 0,
        ClipType::Difference => match poly_type {
            PolyType::Clip => wc2_1 > 0 && wc2_2 > 0,
            PolyType::Subject => wc2_1 <= 0 && wc2_2 <= 0,
        },
        ClipType::Xor => true,
    }
}
