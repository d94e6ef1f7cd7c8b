use std::ops::{Index, IndexMut};

use crate::{
    clipper::{
        constants::{HORIZONTAL, UNASSIGNED},
        contributing::FillRules,
        enums::{Direction, PolyFillType, PolyType},
        error::ClipError,
    },
    geometry::point::Point,
    utils::{math::cycle_index, round::round_to_i64},
};

/// One directed segment of an input ring. Every link is an index into the owning `TEdge`.
#[derive(Debug, Clone)]
pub struct Edge {
    pub bot: Point<i64>,
    pub curr: Point<i64>,
    pub top: Point<i64>,
    pub delta: Point<i64>,
    pub dx: f64,
    pub poly_type: PolyType,
    pub side: Direction,
    pub wind_delta: i32,
    pub wind_cnt: i32,
    pub wind_cnt2: i32,
    pub out_idx: usize,
    pub next: usize,
    pub prev: usize,
    pub next_in_lml: usize,
    pub next_in_ael: usize,
    pub prev_in_ael: usize,
    pub next_in_sel: usize,
    pub prev_in_sel: usize,
}

impl Edge {
    fn new(curr: Point<i64>, next: usize, prev: usize, poly_type: PolyType) -> Self {
        Self {
            bot: curr,
            curr,
            top: curr,
            delta: Point::default(),
            dx: 0.0,
            poly_type,
            side: Direction::Left,
            wind_delta: 0,
            wind_cnt: 0,
            wind_cnt2: 0,
            out_idx: UNASSIGNED,
            next,
            prev,
            next_in_lml: UNASSIGNED,
            next_in_ael: UNASSIGNED,
            prev_in_ael: UNASSIGNED,
            next_in_sel: UNASSIGNED,
            prev_in_sel: UNASSIGNED,
        }
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.delta.y == 0
    }

    #[inline(always)]
    pub fn is_assigned(&self) -> bool {
        self.out_idx != UNASSIGNED
    }

    pub fn top_x(&self, current_y: i64) -> i64 {
        if current_y == self.top.y {
            return self.top.x;
        }

        self.bot
            .x
            .saturating_add(round_to_i64(self.dx * (current_y - self.bot.y) as f64))
    }

    fn set_dx(&mut self) {
        self.delta = self.top.sub(&self.bot);
        self.dx = if self.delta.y == 0 {
            HORIZONTAL
        } else {
            self.delta.x as f64 / self.delta.y as f64
        };
    }

    // bot.x must meet the previous edge of the bound
    fn reverse_horizontal(&mut self) {
        std::mem::swap(&mut self.top.x, &mut self.bot.x);
    }
}

/// Edge arena shared by the rings, the bound chains, the AEL and the SEL.
pub struct TEdge {
    edges: Vec<Edge>,
    pub active: usize,
    pub sorted: usize,
}

impl Index<usize> for TEdge {
    type Output = Edge;

    fn index(&self, index: usize) -> &Edge {
        &self.edges[index]
    }
}

impl IndexMut<usize> for TEdge {
    fn index_mut(&mut self, index: usize) -> &mut Edge {
        &mut self.edges[index]
    }
}

impl TEdge {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            active: UNASSIGNED,
            sorted: UNASSIGNED,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Builds a closed ring from a cleaned path and returns the index of its first edge.
    pub fn create_path(&mut self, polygon: &[Point<i64>], poly_type: PolyType) -> usize {
        let point_count = polygon.len();
        if point_count < 3 {
            return UNASSIGNED;
        }

        let offset = self.edges.len();

        for (i, point) in polygon.iter().enumerate() {
            let next = offset + cycle_index(i, point_count, 1);
            let prev = offset + cycle_index(i, point_count, -1);
            self.edges.push(Edge::new(*point, next, prev, poly_type));
        }

        for index in offset..offset + point_count {
            let next_curr = self.edges[self.edges[index].next].curr;
            let edge = &mut self.edges[index];

            if edge.curr.y >= next_curr.y {
                edge.bot = edge.curr;
                edge.top = next_curr;
            } else {
                edge.top = edge.curr;
                edge.bot = next_curr;
            }

            edge.set_dx();
        }

        offset
    }

    pub fn find_next_loc_min(&self, index: usize) -> usize {
        let mut result = index;

        loop {
            while self.edges[result].bot != self.edges[self.edges[result].prev].bot
                || self.edges[result].curr == self.edges[result].top
            {
                result = self.edges[result].next;
            }

            if !self.edges[result].is_horizontal()
                && !self.edges[self.edges[result].prev].is_horizontal()
            {
                break;
            }

            while self.edges[self.edges[result].prev].is_horizontal() {
                result = self.edges[result].prev;
            }

            let horz_start = result;

            while self.edges[result].is_horizontal() {
                result = self.edges[result].next;
            }

            // horizontal between a rising and a falling edge
            if self.edges[result].top.y == self.edges[self.edges[result].prev].bot.y {
                continue;
            }

            if self.edges[self.edges[horz_start].prev].bot.x < self.edges[result].bot.x {
                result = horz_start;
            }

            break;
        }

        result
    }

    /// Splits the minimum at `index` into its bounds and sets their winding direction.
    /// Returns `(y, left_bound, right_bound, is_left_forward)`.
    pub fn create_local_minima(&mut self, index: usize) -> (i64, usize, usize, bool) {
        let prev = self.edges[index].prev;
        let (left_bound, right_bound, is_left_forward) =
            if self.edges[index].dx < self.edges[prev].dx {
                (prev, index, false)
            } else {
                (index, prev, true)
            };

        let wind_delta = if self.edges[left_bound].next == right_bound {
            -1
        } else {
            1
        };

        self.edges[left_bound].wind_delta = wind_delta;
        self.edges[right_bound].wind_delta = -wind_delta;

        (self.edges[index].bot.y, left_bound, right_bound, is_left_forward)
    }

    /// Threads `next_in_lml` from `index` up to the bound's maximum.
    /// Returns the first edge past the bound.
    pub fn process_bound(&mut self, index: usize, is_next_forward: bool) -> usize {
        let mut result = index;
        let mut edge_index = index;

        if self.edges[edge_index].is_horizontal() {
            let start = if is_next_forward {
                self.edges[edge_index].prev
            } else {
                self.edges[edge_index].next
            };
            let bot_x = self.edges[edge_index].bot.x;

            if self.edges[start].is_horizontal() {
                if self.edges[start].bot.x != bot_x && self.edges[start].top.x != bot_x {
                    self.edges[edge_index].reverse_horizontal();
                }
            } else if self.edges[start].bot.x != bot_x {
                self.edges[edge_index].reverse_horizontal();
            }
        }

        let start_index = edge_index;

        if is_next_forward {
            while self.edges[result].top.y == self.edges[self.edges[result].next].bot.y {
                result = self.edges[result].next;
            }

            // a top horizontal joins this bound only from its left end
            if self.edges[result].is_horizontal() {
                let mut horz_index = result;
                while self.edges[self.edges[horz_index].prev].is_horizontal() {
                    horz_index = self.edges[horz_index].prev;
                }

                let before_horz = self.edges[horz_index].prev;
                if self.edges[before_horz].top.x > self.edges[self.edges[result].next].top.x {
                    result = before_horz;
                }
            }

            while edge_index != result {
                self.edges[edge_index].next_in_lml = self.edges[edge_index].next;
                self.align_horizontal(edge_index, start_index, true);
                edge_index = self.edges[edge_index].next;
            }

            self.align_horizontal(edge_index, start_index, true);

            return self.edges[result].next;
        }

        while self.edges[result].top.y == self.edges[self.edges[result].prev].bot.y {
            result = self.edges[result].prev;
        }

        if self.edges[result].is_horizontal() {
            let mut horz_index = result;
            while self.edges[self.edges[horz_index].next].is_horizontal() {
                horz_index = self.edges[horz_index].next;
            }

            let after_horz = self.edges[horz_index].next;
            if self.edges[after_horz].top.x >= self.edges[self.edges[result].prev].top.x {
                result = after_horz;
            }
        }

        while edge_index != result {
            self.edges[edge_index].next_in_lml = self.edges[edge_index].prev;
            self.align_horizontal(edge_index, start_index, false);
            edge_index = self.edges[edge_index].prev;
        }

        self.align_horizontal(edge_index, start_index, false);

        self.edges[result].prev
    }

    fn align_horizontal(&mut self, index: usize, start_index: usize, is_forward: bool) {
        if index == start_index || !self.edges[index].is_horizontal() {
            return;
        }

        let neighbour = if is_forward {
            self.edges[index].prev
        } else {
            self.edges[index].next
        };

        if self.edges[index].bot.x != self.edges[neighbour].top.x {
            self.edges[index].reverse_horizontal();
        }
    }

    /// Clears every per-run field so a new pass starts from the ingested geometry.
    pub fn reset(&mut self) {
        for edge in self.edges.iter_mut() {
            edge.curr = edge.bot;
            edge.side = Direction::Left;
            edge.out_idx = UNASSIGNED;
            edge.wind_cnt = 0;
            edge.wind_cnt2 = 0;
            edge.next_in_ael = UNASSIGNED;
            edge.prev_in_ael = UNASSIGNED;
            edge.next_in_sel = UNASSIGNED;
            edge.prev_in_sel = UNASSIGNED;
        }

        self.active = UNASSIGNED;
        self.sorted = UNASSIGNED;
    }

    pub fn reset_bounds(&mut self, left_bound: usize, right_bound: usize) {
        self.edges[left_bound].side = Direction::Left;
        self.edges[right_bound].side = Direction::Right;
    }

    pub fn clean(&mut self) {
        self.edges.clear();
        self.active = UNASSIGNED;
        self.sorted = UNASSIGNED;
    }

    #[inline(always)]
    fn next_in(&self, index: usize, is_ael: bool) -> usize {
        if is_ael {
            self.edges[index].next_in_ael
        } else {
            self.edges[index].next_in_sel
        }
    }

    #[inline(always)]
    fn prev_in(&self, index: usize, is_ael: bool) -> usize {
        if is_ael {
            self.edges[index].prev_in_ael
        } else {
            self.edges[index].prev_in_sel
        }
    }

    #[inline(always)]
    fn set_next_in(&mut self, index: usize, is_ael: bool, value: usize) {
        if is_ael {
            self.edges[index].next_in_ael = value;
        } else {
            self.edges[index].next_in_sel = value;
        }
    }

    #[inline(always)]
    fn set_prev_in(&mut self, index: usize, is_ael: bool, value: usize) {
        if is_ael {
            self.edges[index].prev_in_ael = value;
        } else {
            self.edges[index].prev_in_sel = value;
        }
    }

    #[inline(always)]
    fn set_head(&mut self, is_ael: bool, value: usize) {
        if is_ael {
            self.active = value;
        } else {
            self.sorted = value;
        }
    }

    #[inline(always)]
    fn head(&self, is_ael: bool) -> usize {
        if is_ael {
            self.active
        } else {
            self.sorted
        }
    }

    #[inline(always)]
    fn is_detached(&self, index: usize, is_ael: bool) -> bool {
        self.next_in(index, is_ael) == UNASSIGNED && self.prev_in(index, is_ael) == UNASSIGNED
    }

    /// AEL neighbour to the right when `is_next`, otherwise to the left.
    #[inline(always)]
    pub fn get_neighbour(&self, index: usize, is_next: bool) -> usize {
        if is_next {
            self.edges[index].next_in_ael
        } else {
            self.edges[index].prev_in_ael
        }
    }

    pub fn delete_from_list(&mut self, index: usize, is_ael: bool) {
        let prev = self.prev_in(index, is_ael);
        let next = self.next_in(index, is_ael);

        if prev == UNASSIGNED && next == UNASSIGNED && index != self.head(is_ael) {
            return;
        }

        if prev != UNASSIGNED {
            self.set_next_in(prev, is_ael, next);
        } else {
            self.set_head(is_ael, next);
        }

        if next != UNASSIGNED {
            self.set_prev_in(next, is_ael, prev);
        }

        self.set_next_in(index, is_ael, UNASSIGNED);
        self.set_prev_in(index, is_ael, UNASSIGNED);
    }

    pub fn swap_positions_in_list(&mut self, edge1_index: usize, edge2_index: usize, is_ael: bool) {
        // either edge may have left the list already
        if self.is_detached(edge1_index, is_ael) || self.is_detached(edge2_index, is_ael) {
            return;
        }

        let next1 = self.next_in(edge1_index, is_ael);
        let prev1 = self.prev_in(edge1_index, is_ael);
        let next2 = self.next_in(edge2_index, is_ael);
        let prev2 = self.prev_in(edge2_index, is_ael);

        if next1 == edge2_index {
            if next2 != UNASSIGNED {
                self.set_prev_in(next2, is_ael, edge1_index);
            }
            if prev1 != UNASSIGNED {
                self.set_next_in(prev1, is_ael, edge2_index);
            }
            self.set_prev_in(edge2_index, is_ael, prev1);
            self.set_next_in(edge2_index, is_ael, edge1_index);
            self.set_prev_in(edge1_index, is_ael, edge2_index);
            self.set_next_in(edge1_index, is_ael, next2);
        } else if next2 == edge1_index {
            if next1 != UNASSIGNED {
                self.set_prev_in(next1, is_ael, edge2_index);
            }
            if prev2 != UNASSIGNED {
                self.set_next_in(prev2, is_ael, edge1_index);
            }
            self.set_prev_in(edge1_index, is_ael, prev2);
            self.set_next_in(edge1_index, is_ael, edge2_index);
            self.set_prev_in(edge2_index, is_ael, edge1_index);
            self.set_next_in(edge2_index, is_ael, next1);
        } else {
            self.set_next_in(edge1_index, is_ael, next2);
            if next2 != UNASSIGNED {
                self.set_prev_in(next2, is_ael, edge1_index);
            }
            self.set_prev_in(edge1_index, is_ael, prev2);
            if prev2 != UNASSIGNED {
                self.set_next_in(prev2, is_ael, edge1_index);
            }
            self.set_next_in(edge2_index, is_ael, next1);
            if next1 != UNASSIGNED {
                self.set_prev_in(next1, is_ael, edge2_index);
            }
            self.set_prev_in(edge2_index, is_ael, prev1);
            if prev1 != UNASSIGNED {
                self.set_next_in(prev1, is_ael, edge2_index);
            }
        }

        if self.prev_in(edge1_index, is_ael) == UNASSIGNED {
            self.set_head(is_ael, edge1_index);
        } else if self.prev_in(edge2_index, is_ael) == UNASSIGNED {
            self.set_head(is_ael, edge2_index);
        }
    }

    fn e2_inserts_before_e1(&self, edge1_index: usize, edge2_index: usize) -> bool {
        let edge1 = &self.edges[edge1_index];
        let edge2 = &self.edges[edge2_index];

        if edge2.curr.x != edge1.curr.x {
            return edge2.curr.x < edge1.curr.x;
        }

        if edge2.top.y > edge1.top.y {
            edge2.top.x < edge1.top_x(edge2.top.y)
        } else {
            edge1.top.x > edge2.top_x(edge1.top.y)
        }
    }

    /// Inserts by current x, scanning right from `start_index` when it is assigned.
    pub fn insert_edge_into_ael(&mut self, index: usize, start_index: usize) {
        if self.active == UNASSIGNED {
            self.edges[index].prev_in_ael = UNASSIGNED;
            self.edges[index].next_in_ael = UNASSIGNED;
            self.active = index;
            return;
        }

        if start_index == UNASSIGNED && self.e2_inserts_before_e1(self.active, index) {
            self.edges[index].prev_in_ael = UNASSIGNED;
            self.edges[index].next_in_ael = self.active;
            self.edges[self.active].prev_in_ael = index;
            self.active = index;
            return;
        }

        let mut curr_index = if start_index == UNASSIGNED {
            self.active
        } else {
            start_index
        };

        while self.edges[curr_index].next_in_ael != UNASSIGNED
            && !self.e2_inserts_before_e1(self.edges[curr_index].next_in_ael, index)
        {
            curr_index = self.edges[curr_index].next_in_ael;
        }

        let next_index = self.edges[curr_index].next_in_ael;
        self.edges[index].next_in_ael = next_index;
        if next_index != UNASSIGNED {
            self.edges[next_index].prev_in_ael = index;
        }
        self.edges[index].prev_in_ael = curr_index;
        self.edges[curr_index].next_in_ael = index;
    }

    pub fn add_edge_to_sel(&mut self, index: usize) {
        self.edges[index].prev_in_sel = UNASSIGNED;
        self.edges[index].next_in_sel = self.sorted;
        if self.sorted != UNASSIGNED {
            self.edges[self.sorted].prev_in_sel = index;
        }
        self.sorted = index;
    }

    pub fn pop_edge_from_sel(&mut self) -> Option<usize> {
        if self.sorted == UNASSIGNED {
            return None;
        }

        let result = self.sorted;
        self.delete_from_list(result, false);

        Some(result)
    }

    pub fn copy_ael_to_sel(&mut self) {
        let mut index = self.active;
        self.sorted = index;

        while index != UNASSIGNED {
            self.edges[index].prev_in_sel = self.edges[index].prev_in_ael;
            self.edges[index].next_in_sel = self.edges[index].next_in_ael;
            index = self.edges[index].next_in_ael;
        }
    }

    /// Drops the SEL after intersection sorting; only AEL members can be linked there.
    pub fn clear_sel(&mut self) {
        let mut index = self.active;

        while index != UNASSIGNED {
            self.edges[index].prev_in_sel = UNASSIGNED;
            self.edges[index].next_in_sel = UNASSIGNED;
            index = self.edges[index].next_in_ael;
        }

        self.sorted = UNASSIGNED;
    }

    pub fn set_winding_count(&mut self, index: usize, rules: &FillRules) {
        let poly_type = self.edges[index].poly_type;
        let wind_delta = self.edges[index].wind_delta;
        let mut prev_index = self.edges[index].prev_in_ael;

        // nearest AEL edge to the left from the same set
        while prev_index != UNASSIGNED && self.edges[prev_index].poly_type != poly_type {
            prev_index = self.edges[prev_index].prev_in_ael;
        }

        let mut curr_index;

        if prev_index == UNASSIGNED {
            self.edges[index].wind_cnt = wind_delta;
            self.edges[index].wind_cnt2 = 0;
            curr_index = self.active;
        } else {
            let prev = &self.edges[prev_index];
            let wind_cnt = if rules.own(poly_type) == PolyFillType::EvenOdd {
                if prev.wind_cnt == 0 {
                    1
                } else {
                    0
                }
            } else if prev.wind_cnt * prev.wind_delta < 0 {
                // outside prev
                if prev.wind_cnt.abs() > 1 {
                    if prev.wind_delta * wind_delta < 0 {
                        prev.wind_cnt
                    } else {
                        prev.wind_cnt + wind_delta
                    }
                } else {
                    wind_delta
                }
            } else if prev.wind_delta * wind_delta < 0 {
                prev.wind_cnt
            } else {
                prev.wind_cnt + wind_delta
            };

            let wind_cnt2 = prev.wind_cnt2;
            curr_index = prev.next_in_ael;
            self.edges[index].wind_cnt = wind_cnt;
            self.edges[index].wind_cnt2 = wind_cnt2;
        }

        // wind_cnt2 counts the other set's edges to the left
        let is_other_even_odd = rules.other(poly_type) == PolyFillType::EvenOdd;
        let mut wind_cnt2 = self.edges[index].wind_cnt2;

        while curr_index != index && curr_index != UNASSIGNED {
            if is_other_even_odd {
                wind_cnt2 = if wind_cnt2 == 0 { 1 } else { 0 };
            } else {
                wind_cnt2 += self.edges[curr_index].wind_delta;
            }
            curr_index = self.edges[curr_index].next_in_ael;
        }

        self.edges[index].wind_cnt2 = wind_cnt2;
    }

    pub fn copy_winding(&mut self, source_index: usize, target_index: usize) {
        self.edges[target_index].wind_cnt = self.edges[source_index].wind_cnt;
        self.edges[target_index].wind_cnt2 = self.edges[source_index].wind_cnt2;
    }

    /// Winding bookkeeping for `edge1` crossing over `edge2`.
    /// Assumes `edge1` is to the right of `edge2` above the crossing.
    pub fn update_winding_at_crossing(&mut self, edge1_index: usize, edge2_index: usize, rules: &FillRules) {
        let poly_type1 = self.edges[edge1_index].poly_type;
        let poly_type2 = self.edges[edge2_index].poly_type;
        let wind_delta1 = self.edges[edge1_index].wind_delta;
        let wind_delta2 = self.edges[edge2_index].wind_delta;

        if poly_type1 == poly_type2 {
            if rules.own(poly_type1) == PolyFillType::EvenOdd {
                let wind_cnt1 = self.edges[edge1_index].wind_cnt;
                self.edges[edge1_index].wind_cnt = self.edges[edge2_index].wind_cnt;
                self.edges[edge2_index].wind_cnt = wind_cnt1;
                return;
            }

            let wind_cnt1 = self.edges[edge1_index].wind_cnt;
            let wind_cnt2 = self.edges[edge2_index].wind_cnt;

            self.edges[edge1_index].wind_cnt = if wind_cnt1 + wind_delta2 == 0 {
                -wind_cnt1
            } else {
                wind_cnt1 + wind_delta2
            };
            self.edges[edge2_index].wind_cnt = if wind_cnt2 - wind_delta1 == 0 {
                -wind_cnt2
            } else {
                wind_cnt2 - wind_delta1
            };
            return;
        }

        let edge1 = &mut self.edges[edge1_index];
        if rules.own(poly_type2) != PolyFillType::EvenOdd {
            edge1.wind_cnt2 += wind_delta2;
        } else {
            edge1.wind_cnt2 = if edge1.wind_cnt2 == 0 { 1 } else { 0 };
        }

        let edge2 = &mut self.edges[edge2_index];
        if rules.own(poly_type1) != PolyFillType::EvenOdd {
            edge2.wind_cnt2 -= wind_delta1;
        } else {
            edge2.wind_cnt2 = if edge2.wind_cnt2 == 0 { 1 } else { 0 };
        }
    }

    pub fn intersect_point(&self, edge1_index: usize, edge2_index: usize) -> Point<i64> {
        let edge1 = &self.edges[edge1_index];
        let edge2 = &self.edges[edge2_index];
        let mut result = Point::new(0i64, 0i64);

        if edge1.dx == edge2.dx {
            result.y = edge1.curr.y;
            result.x = edge1.top_x(result.y);
            return result;
        }

        if edge1.delta.x == 0 {
            result.x = edge1.bot.x;
            result.y = if edge2.is_horizontal() {
                edge2.bot.y
            } else {
                let b2 = edge2.bot.y as f64 - edge2.bot.x as f64 / edge2.dx;
                round_to_i64(result.x as f64 / edge2.dx + b2)
            };
        } else if edge2.delta.x == 0 {
            result.x = edge2.bot.x;
            result.y = if edge1.is_horizontal() {
                edge1.bot.y
            } else {
                let b1 = edge1.bot.y as f64 - edge1.bot.x as f64 / edge1.dx;
                round_to_i64(result.x as f64 / edge1.dx + b1)
            };
        } else {
            let b1 = edge1.bot.x as f64 - edge1.bot.y as f64 * edge1.dx;
            let b2 = edge2.bot.x as f64 - edge2.bot.y as f64 * edge2.dx;
            let q = (b2 - b1) / (edge1.dx - edge2.dx);

            result.y = round_to_i64(q);
            result.x = if edge1.dx.abs() < edge2.dx.abs() {
                round_to_i64(edge1.dx * q + b1)
            } else {
                round_to_i64(edge2.dx * q + b2)
            };
        }

        if result.y < edge1.top.y || result.y < edge2.top.y {
            result.y = edge1.top.y.max(edge2.top.y);
            result.x = if edge1.dx.abs() < edge2.dx.abs() {
                edge1.top_x(result.y)
            } else {
                edge2.top_x(result.y)
            };
        }

        // clamp to the scanbeam bottom
        if result.y > edge1.curr.y {
            result.y = edge1.curr.y;
            result.x = if edge1.dx.abs() > edge2.dx.abs() {
                edge2.top_x(result.y)
            } else {
                edge1.top_x(result.y)
            };
        }

        result
    }

    pub fn is_maxima(&self, index: usize, y: i64) -> bool {
        self.edges[index].top.y == y && self.edges[index].next_in_lml == UNASSIGNED
    }

    pub fn is_intermediate(&self, index: usize, y: i64) -> bool {
        self.edges[index].top.y == y && self.edges[index].next_in_lml != UNASSIGNED
    }

    /// Edge reaching its final top at `point`.
    pub fn is_stopping(&self, index: usize, point: &Point<i64>) -> bool {
        self.edges[index].next_in_lml == UNASSIGNED && self.edges[index].top == *point
    }

    pub fn maxima_pair(&self, index: usize) -> usize {
        let edge = &self.edges[index];
        let next = &self.edges[edge.next];
        let prev = &self.edges[edge.prev];

        if next.top == edge.top && next.next_in_lml == UNASSIGNED {
            edge.next
        } else if prev.top == edge.top && prev.next_in_lml == UNASSIGNED {
            edge.prev
        } else {
            UNASSIGNED
        }
    }

    /// Like `maxima_pair`, but ignores a pair that already left the AEL.
    pub fn maxima_pair_ex(&self, index: usize) -> usize {
        let result = self.maxima_pair(index);

        if result != UNASSIGNED
            && self.is_detached(result, true)
            && result != self.active
            && !self.edges[result].is_horizontal()
        {
            return UNASSIGNED;
        }

        result
    }

    pub fn horz_direction(&self, index: usize) -> (Direction, i64, i64) {
        let edge = &self.edges[index];

        if edge.bot.x < edge.top.x {
            (Direction::Right, edge.bot.x, edge.top.x)
        } else {
            (Direction::Left, edge.top.x, edge.bot.x)
        }
    }

    /// Advances a bound to its next segment, taking over the AEL slot and output state.
    pub fn update_edge_into_ael(&mut self, index: usize) -> Result<usize, ClipError> {
        let next_index = self.edges[index].next_in_lml;
        if next_index == UNASSIGNED {
            return Err(ClipError::UpdateEdge);
        }

        let edge = self.edges[index].clone();
        let ael_prev = edge.prev_in_ael;
        let ael_next = edge.next_in_ael;

        let next = &mut self.edges[next_index];
        next.out_idx = edge.out_idx;
        next.side = edge.side;
        next.wind_delta = edge.wind_delta;
        next.wind_cnt = edge.wind_cnt;
        next.wind_cnt2 = edge.wind_cnt2;
        next.curr = next.bot;
        next.prev_in_ael = ael_prev;
        next.next_in_ael = ael_next;

        if ael_prev != UNASSIGNED {
            self.edges[ael_prev].next_in_ael = next_index;
        } else {
            self.active = next_index;
        }

        if ael_next != UNASSIGNED {
            self.edges[ael_next].prev_in_ael = next_index;
        }

        self.edges[index].prev_in_ael = UNASSIGNED;
        self.edges[index].next_in_ael = UNASSIGNED;

        Ok(next_index)
    }

    /// Output ring of the nearest contributing edge to the left with odd parity, if any.
    pub fn hole_owner(&self, index: usize) -> usize {
        let mut owner_index = UNASSIGNED;
        let mut curr_index = self.edges[index].prev_in_ael;

        while curr_index != UNASSIGNED {
            let out_idx = self.edges[curr_index].out_idx;

            if out_idx != UNASSIGNED {
                if owner_index == UNASSIGNED {
                    owner_index = curr_index;
                } else if self.edges[owner_index].out_idx == out_idx {
                    owner_index = UNASSIGNED;
                }
            }

            curr_index = self.edges[curr_index].prev_in_ael;
        }

        if owner_index == UNASSIGNED {
            UNASSIGNED
        } else {
            self.edges[owner_index].out_idx
        }
    }

    pub fn swap_sides(&mut self, edge1_index: usize, edge2_index: usize) {
        let side = self.edges[edge1_index].side;
        self.edges[edge1_index].side = self.edges[edge2_index].side;
        self.edges[edge2_index].side = side;
    }

    pub fn swap_poly_indexes(&mut self, edge1_index: usize, edge2_index: usize) {
        let out_idx = self.edges[edge1_index].out_idx;
        self.edges[edge1_index].out_idx = self.edges[edge2_index].out_idx;
        self.edges[edge2_index].out_idx = out_idx;
    }
}
