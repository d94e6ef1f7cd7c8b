use num_traits::Num;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Num + Copy> Point<T> {
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_is_component_wise() {
        assert_eq!(Point::new(3, 4).sub(&Point::new(1, 1)), Point::new(2, 3));
    }
}
