use crate::{
    clipper::{
        constants::UNASSIGNED,
        enums::{Direction, HoleState},
        utils::from_grid_point,
    },
    geometry::{
        point::Point,
        polygon::{poly_contains_poly, polygon_area, Contour},
    },
    utils::math::slopes_equal,
};

#[derive(Debug, Clone, Copy)]
pub struct OutPt {
    pub pt: Point<i64>,
    pub next: usize,
    pub prev: usize,
}

/// Output ring header. `pts` is the left-most point, `pts.prev` the right-most.
#[derive(Debug, Clone, Copy)]
pub struct OutRecord {
    pub pts: usize,
    pub first_left: usize,
    pub hole_state: HoleState,
}

/// Arena of output rings and their points, rebuilt on every run.
pub struct OutRec {
    records: Vec<OutRecord>,
    points: Vec<OutPt>,
}

impl OutRec {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline(always)]
    pub fn hole_state(&self, rec_index: usize) -> HoleState {
        self.records[rec_index].hole_state
    }

    #[inline(always)]
    pub fn first_left(&self, rec_index: usize) -> usize {
        self.records[rec_index].first_left
    }

    #[inline(always)]
    pub fn is_unassigned(&self, rec_index: usize) -> bool {
        self.records[rec_index].pts == UNASSIGNED
    }

    pub fn point_count(&self, rec_index: usize) -> usize {
        let start = self.records[rec_index].pts;
        if start == UNASSIGNED {
            return 0;
        }

        let mut result = 1;
        let mut index = self.points[start].next;

        while index != start {
            result += 1;
            index = self.points[index].next;
        }

        result
    }

    fn add_out_pt(&mut self, pt: Point<i64>) -> usize {
        let index = self.points.len();
        self.points.push(OutPt {
            pt,
            next: index,
            prev: index,
        });

        index
    }

    /// Opens a new single-point ring. Returns `(record_index, point_index)`.
    pub fn create(&mut self, pt: Point<i64>) -> (usize, usize) {
        let point_index = self.add_out_pt(pt);
        let rec_index = self.records.len();

        self.records.push(OutRecord {
            pts: point_index,
            first_left: UNASSIGNED,
            hole_state: HoleState::Outer,
        });

        (rec_index, point_index)
    }

    /// Links `rec_index` under `owner_index`; a ring with no owner is an outer ring.
    pub fn set_hole_state(&mut self, rec_index: usize, owner_index: usize) {
        let hole_state = if owner_index == UNASSIGNED {
            HoleState::Outer
        } else {
            self.records[owner_index].hole_state.negate()
        };

        let record = &mut self.records[rec_index];
        record.first_left = owner_index;
        record.hole_state = hole_state;
    }

    pub fn add_point(&mut self, rec_index: usize, pt: Point<i64>, to_front: bool) -> usize {
        let first_index = self.records[rec_index].pts;
        let last_index = self.points[first_index].prev;

        if to_front && pt == self.points[first_index].pt {
            return first_index;
        }

        if !to_front && pt == self.points[last_index].pt {
            return last_index;
        }

        let point_index = self.add_out_pt(pt);
        self.points[point_index].next = first_index;
        self.points[point_index].prev = last_index;
        self.points[last_index].next = point_index;
        self.points[first_index].prev = point_index;

        if to_front {
            self.records[rec_index].pts = point_index;
        }

        point_index
    }

    fn is_right_of(&self, rec1_index: usize, rec2_index: usize) -> bool {
        let mut index = rec1_index;
        let mut steps = 0;

        while steps <= self.records.len() {
            index = self.records[index].first_left;
            if index == UNASSIGNED {
                return false;
            }
            if index == rec2_index {
                return true;
            }
            steps += 1;
        }

        false
    }

    fn reverse_links(&mut self, start_index: usize) {
        let mut index = start_index;

        loop {
            let point = &mut self.points[index];
            std::mem::swap(&mut point.next, &mut point.prev);
            index = point.prev;

            if index == start_index {
                break;
            }
        }
    }

    /// Splices `rec2_index` onto `rec1_index` at the ends given by the two edge sides.
    /// `rec2_index` is emptied and left pointing at the surviving ring.
    pub fn append_polygon(
        &mut self,
        rec1_index: usize,
        rec2_index: usize,
        side1: Direction,
        side2: Direction,
    ) {
        let hole_state = if self.is_right_of(rec1_index, rec2_index) {
            let first_left = self.records[rec2_index].first_left;
            if first_left != rec1_index {
                self.records[rec1_index].first_left = first_left;
            }
            self.records[rec2_index].hole_state
        } else if self.is_right_of(rec2_index, rec1_index) {
            self.records[rec1_index].hole_state
        } else if self.records[rec1_index].hole_state == self.records[rec2_index].hole_state {
            self.records[rec1_index].hole_state
        } else {
            HoleState::Unknown
        };

        let p1_lft = self.records[rec1_index].pts;
        let p1_rt = self.points[p1_lft].prev;
        let p2_lft = self.records[rec2_index].pts;
        let p2_rt = self.points[p2_lft].prev;

        match (side1, side2) {
            (Direction::Left, Direction::Left) => {
                // rev(ring2) ++ ring1
                self.reverse_links(p2_lft);
                self.points[p2_lft].next = p1_lft;
                self.points[p1_lft].prev = p2_lft;
                self.points[p1_rt].next = p2_rt;
                self.points[p2_rt].prev = p1_rt;
                self.records[rec1_index].pts = p2_rt;
            }
            (Direction::Left, Direction::Right) => {
                // ring2 ++ ring1
                self.points[p2_rt].next = p1_lft;
                self.points[p1_lft].prev = p2_rt;
                self.points[p2_lft].prev = p1_rt;
                self.points[p1_rt].next = p2_lft;
                self.records[rec1_index].pts = p2_lft;
            }
            (Direction::Right, Direction::Right) => {
                // ring1 ++ rev(ring2)
                self.reverse_links(p2_lft);
                self.points[p1_rt].next = p2_rt;
                self.points[p2_rt].prev = p1_rt;
                self.points[p2_lft].next = p1_lft;
                self.points[p1_lft].prev = p2_lft;
            }
            (Direction::Right, Direction::Left) => {
                // ring1 ++ ring2
                self.points[p1_rt].next = p2_lft;
                self.points[p2_lft].prev = p1_rt;
                self.points[p1_lft].prev = p2_rt;
                self.points[p2_rt].next = p1_lft;
            }
        }

        self.records[rec1_index].hole_state = hole_state;

        let record2 = &mut self.records[rec2_index];
        record2.pts = UNASSIGNED;
        record2.first_left = rec1_index;
    }

    pub fn fixup_all(&mut self) {
        for rec_index in 0..self.records.len() {
            if self.records[rec_index].pts != UNASSIGNED {
                self.fixup(rec_index);
            }
        }
    }

    /// Drops duplicate and collinear points; a ring that collapses below 3 points is emptied.
    pub fn fixup(&mut self, rec_index: usize) {
        let mut last_ok = UNASSIGNED;
        let mut index = self.records[rec_index].pts;

        loop {
            let OutPt { pt, next, prev } = self.points[index];

            if prev == index || prev == next {
                self.records[rec_index].pts = UNASSIGNED;
                return;
            }

            let prev_pt = self.points[prev].pt;
            let next_pt = self.points[next].pt;

            if pt == next_pt || pt == prev_pt || slopes_equal(&prev_pt, &pt, &next_pt) {
                last_ok = UNASSIGNED;
                self.points[prev].next = next;
                self.points[next].prev = prev;
                index = prev;
            } else if index == last_ok {
                break;
            } else {
                if last_ok == UNASSIGNED {
                    last_ok = index;
                }
                index = next;
            }
        }

        self.records[rec_index].pts = index;
    }

    fn export_ring(&self, rec_index: usize) -> Vec<Point<i64>> {
        let start = self.records[rec_index].pts;
        let mut result = Vec::new();

        if start == UNASSIGNED {
            return result;
        }

        let mut index = start;
        loop {
            result.push(self.points[index].pt);
            index = self.points[index].next;
            if index == start {
                break;
            }
        }

        result
    }

    /// Collects the surviving rings, resolves unknown hole states by nesting depth and
    /// scales the coordinates back down.
    pub fn build_result(&self, scale: f64, force_orientation: bool) -> Vec<Contour> {
        let mut rings: Vec<(Vec<Point<i64>>, HoleState)> = Vec::new();

        for rec_index in 0..self.records.len() {
            let ring = self.export_ring(rec_index);
            if ring.len() >= 3 {
                rings.push((ring, self.records[rec_index].hole_state));
            }
        }

        let ring_count = rings.len();
        let mut result = Vec::with_capacity(ring_count);

        for i in 0..ring_count {
            let is_hole = match rings[i].1 {
                HoleState::Outer => false,
                HoleState::Hole => true,
                HoleState::Unknown => {
                    let depth = (0..ring_count)
                        .filter(|&j| j != i && poly_contains_poly(&rings[i].0, &rings[j].0))
                        .count();
                    depth % 2 == 1
                }
            };

            let ring = &rings[i].0;
            let mut points: Vec<Point<f64>> = ring
                .iter()
                .map(|point| from_grid_point(point, scale))
                .collect();

            if force_orientation && is_hole == (polygon_area(ring) > 0.0) {
                points.reverse();
            }

            result.push(Contour { points, is_hole });
        }

        result
    }

    pub fn clean(&mut self) {
        self.records.clear();
        self.points.clear();
    }
}
