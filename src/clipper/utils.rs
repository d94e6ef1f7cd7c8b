use crate::{
    clipper::constants::HI_RANGE,
    geometry::point::Point,
    utils::{
        math::{cycle_index, slopes_equal},
        round::round_to_i64,
    },
};

/// Scales a caller coordinate onto the integer grid; `None` for non-finite or out of range input.
pub fn to_grid_point(point: &Point<f64>, scale: f64) -> Option<Point<i64>> {
    let x = point.x * scale;
    let y = point.y * scale;

    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    // range is checked on the grid value, HI_RANGE has no exact f64 form
    let result = Point::new(round_to_i64(x), round_to_i64(y));
    let range = -HI_RANGE..=HI_RANGE;

    if !range.contains(&result.x) || !range.contains(&result.y) {
        return None;
    }

    Some(result)
}

pub fn from_grid_point(point: &Point<i64>, scale: f64) -> Point<f64> {
    Point::new(point.x as f64 / scale, point.y as f64 / scale)
}

/// Removes duplicate and collinear vertices in place, treating the path as closed.
/// Returns false (and empties the path) when fewer than three vertices survive.
pub fn clean_polygon(path: &mut Vec<Point<i64>>) -> bool {
    let mut point_count = path.len();
    if point_count < 3 {
        path.clear();
        return false;
    }

    let mut marked: Vec<bool> = vec![false; point_count];
    let mut curr_index = 0;

    while point_count > 2 && !marked[curr_index] {
        let prev_index = cycle_index(curr_index, point_count, -1);
        let next_index = cycle_index(curr_index, point_count, 1);

        // duplicates are collinear too
        if slopes_equal(&path[prev_index], &path[curr_index], &path[next_index]) {
            path.remove(curr_index);
            marked.remove(curr_index);
            point_count -= 1;
            curr_index = if prev_index < curr_index {
                prev_index
            } else {
                prev_index - 1
            };
            marked[curr_index] = false;
            marked[cycle_index(curr_index, point_count, 1)] = false;
        } else {
            marked[curr_index] = true;
            curr_index = cycle_index(curr_index, point_count, 1);
        }
    }

    if point_count < 3 {
        path.clear();
        return false;
    }

    true
}
