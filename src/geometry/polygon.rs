use num_traits::ToPrimitive;

use crate::geometry::point::Point;

pub type Polygon<T = f64> = Vec<Point<T>>;

/// One ring of a clipping result.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Polygon<f64>,
    pub is_hole: bool,
}

impl Contour {
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

/// Signed shoelace area; positive for counter-clockwise rings with the y axis up.
pub fn polygon_area<T: ToPrimitive + Copy>(points: &[Point<T>]) -> f64 {
    let point_count = points.len();
    if point_count < 3 {
        return 0.0;
    }

    let mut result = 0.0;
    let mut prev = &points[point_count - 1];

    for curr in points {
        let prev_x = prev.x.to_f64().unwrap_or(0.0);
        let prev_y = prev.y.to_f64().unwrap_or(0.0);
        let curr_x = curr.x.to_f64().unwrap_or(0.0);
        let curr_y = curr.y.to_f64().unwrap_or(0.0);

        result += (prev_x + curr_x) * (curr_y - prev_y);
        prev = curr;
    }

    result * 0.5
}

#[inline(always)]
fn turn(origin: &Point<i64>, a: &Point<i64>, b: &Point<i64>) -> i128 {
    (a.x as i128 - origin.x as i128) * (b.y as i128 - origin.y as i128)
        - (b.x as i128 - origin.x as i128) * (a.y as i128 - origin.y as i128)
}

/// Returns 0 when outside, 1 when inside and -1 when `point` lies on the boundary.
pub fn point_in_polygon(point: &Point<i64>, path: &[Point<i64>]) -> i8 {
    let point_count = path.len();
    if point_count < 3 {
        return 0;
    }

    let mut result = 0;
    let mut curr = &path[0];

    for i in 1..=point_count {
        let next = if i == point_count { &path[0] } else { &path[i] };

        if next.y == point.y
            && (next.x == point.x || (curr.y == point.y && ((next.x > point.x) == (curr.x < point.x))))
        {
            return -1;
        }

        if (curr.y < point.y) != (next.y < point.y) {
            if curr.x >= point.x && next.x > point.x {
                result = 1 - result;
            } else if curr.x >= point.x || next.x > point.x {
                let d = turn(point, curr, next);
                if d == 0 {
                    return -1;
                }
                if (d > 0) == (next.y > curr.y) {
                    result = 1 - result;
                }
            }
        }

        curr = next;
    }

    result
}

/// True when `inner` lies inside `outer`; vertices on the boundary of `outer` are skipped.
pub fn poly_contains_poly(inner: &[Point<i64>], outer: &[Point<i64>]) -> bool {
    for point in inner {
        let state = point_in_polygon(point, outer);
        if state >= 0 {
            return state > 0;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: i64) -> Vec<Point<i64>> {
        vec![
            Point::new(0, 0),
            Point::new(size, 0),
            Point::new(size, size),
            Point::new(0, size),
        ]
    }

    #[test]
    fn area_sign_depends_on_orientation() {
        let mut points = square(2);
        assert_relative_eq!(polygon_area(&points), 4.0);

        points.reverse();
        assert_relative_eq!(polygon_area(&points), -4.0);
        assert_relative_eq!(polygon_area(&points[..2]), 0.0);
    }

    #[test]
    fn point_in_polygon_reports_boundary() {
        let path = square(10);

        assert_eq!(point_in_polygon(&Point::new(5, 5), &path), 1);
        assert_eq!(point_in_polygon(&Point::new(11, 5), &path), 0);
        assert_eq!(point_in_polygon(&Point::new(10, 5), &path), -1);
        assert_eq!(point_in_polygon(&Point::new(0, 0), &path), -1);
        assert_eq!(point_in_polygon(&Point::new(5, 10), &path), -1);
    }

    #[test]
    fn containment_skips_shared_vertices() {
        let outer = square(10);
        let inner = vec![Point::new(0, 0), Point::new(5, 2), Point::new(2, 5)];
        let outside = vec![Point::new(0, 0), Point::new(-5, -2), Point::new(-2, -5)];

        assert!(poly_contains_poly(&inner, &outer));
        assert!(!poly_contains_poly(&outside, &outer));
    }
}
