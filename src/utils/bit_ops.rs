/// Low `width` bits set.
#[inline(always)]
fn field_mask(width: u8) -> u32 {
    u32::MAX.checked_shl(width as u32).map_or(u32::MAX, |shifted| !shifted)
}

/// Writes `value` into the `width`-bit field starting at bit `offset`, truncating it to the field.
#[inline(always)]
pub fn set_bits(source: u32, value: u16, offset: u8, width: u8) -> u32 {
    let mask = field_mask(width) << offset;
    (source & !mask) | ((u32::from(value) << offset) & mask)
}

#[inline(always)]
pub fn get_bits(source: u32, offset: u8, width: u8) -> u16 {
    ((source >> offset) & field_mask(width)) as u16
}
