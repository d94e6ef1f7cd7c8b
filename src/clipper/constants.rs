pub const UNASSIGNED: usize = usize::MAX;

pub const HORIZONTAL: f64 = -9007199254740992.0;

/// Largest scaled coordinate magnitude accepted at ingestion.
pub const HI_RANGE: i64 = 0x3FFF_FFFF_FFFF_FFFF;

pub const MAX_PRECISION: u8 = 6;

pub const DEFAULT_PRECISION: u8 = 6;

pub const PROTECT_NONE: u8 = 0;

pub const PROTECT_LEFT: u8 = 1;

pub const PROTECT_RIGHT: u8 = 2;

pub const PROTECT_BOTH: u8 = PROTECT_LEFT | PROTECT_RIGHT;
