#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[repr(u8)]
pub enum PolyFillType {
    #[default]
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

impl PolyFillType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(PolyFillType::EvenOdd),
            1 => Some(PolyFillType::NonZero),
            2 => Some(PolyFillType::Positive),
            3 => Some(PolyFillType::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

impl ClipType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ClipType::Intersection),
            1 => Some(ClipType::Union),
            2 => Some(ClipType::Difference),
            3 => Some(ClipType::Xor),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

/// Outer/hole classification of an output ring while it is being built.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum HoleState {
    Outer = 0,
    Hole = 1,
    Unknown = 2,
}

impl HoleState {
    pub fn negate(self) -> Self {
        match self {
            HoleState::Outer => HoleState::Hole,
            HoleState::Hole => HoleState::Outer,
            HoleState::Unknown => HoleState::Unknown,
        }
    }
}
