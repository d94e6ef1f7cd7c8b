use crate::geometry::point::Point;

#[inline(always)]
pub fn cycle_index(index: usize, size: usize, offset: isize) -> usize {
    ((index as isize + offset).rem_euclid(size as isize)) as usize
}

/// Exact collinearity test for three grid points; also true when any two coincide.
#[inline(always)]
pub fn slopes_equal(pt1: &Point<i64>, pt2: &Point<i64>, pt3: &Point<i64>) -> bool {
    let lhs = (pt1.y as i128 - pt2.y as i128) * (pt2.x as i128 - pt3.x as i128);
    let rhs = (pt1.x as i128 - pt2.x as i128) * (pt2.y as i128 - pt3.y as i128);

    lhs == rhs
}
