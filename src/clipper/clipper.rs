use log::{debug, warn};

use crate::{
    clipper::{
        constants::{MAX_PRECISION, PROTECT_BOTH, PROTECT_LEFT, PROTECT_NONE, PROTECT_RIGHT, UNASSIGNED},
        contributing::{closes_at_crossing, effective_wind, is_contributing, opens_at_crossing, FillRules},
        enums::{ClipType, Direction, PolyFillType, PolyType},
        error::ClipError,
        intersect_node::IntersectNode,
        local_minima::LocalMinima,
        out_rec::OutRec,
        scanbeam::Scanbeam,
        t_edge::TEdge,
        utils::{clean_polygon, to_grid_point},
    },
    clipper_config::ClipperConfig,
    geometry::{
        point::Point,
        polygon::{Contour, Polygon},
    },
};

pub struct Clipper {
    local_minima: LocalMinima,
    intersections: IntersectNode,
    scanbeam: Scanbeam,
    t_edge: TEdge,
    out_rec: OutRec,
    config: ClipperConfig,
    clip_type: ClipType,
    is_precision_locked: bool,
    is_execute_locked: bool,
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipper {
    pub fn new() -> Self {
        Self::with_config(ClipperConfig::default())
    }

    pub fn with_config(config: ClipperConfig) -> Self {
        let mut config = config;
        if config.precision > MAX_PRECISION {
            warn!(
                "precision {} is out of range, using {}",
                config.precision, MAX_PRECISION
            );
            config.precision = MAX_PRECISION;
        }

        Self {
            local_minima: LocalMinima::new(),
            intersections: IntersectNode::new(),
            scanbeam: Scanbeam::new(),
            t_edge: TEdge::new(),
            out_rec: OutRec::new(),
            config,
            clip_type: ClipType::Intersection,
            is_precision_locked: false,
            is_execute_locked: false,
        }
    }

    pub fn config(&self) -> ClipperConfig {
        self.config
    }

    pub fn precision(&self) -> u8 {
        self.config.precision
    }

    /// Fails once any polygon has been ingested; the grid must stay the same for all edges.
    pub fn set_precision(&mut self, precision: u8) -> Result<(), ClipError> {
        if precision > MAX_PRECISION {
            return Err(ClipError::PrecisionOutOfRange(precision));
        }

        if self.is_precision_locked {
            return Err(ClipError::PrecisionLocked);
        }

        self.config.precision = precision;

        Ok(())
    }

    pub fn force_alternate_orientation(&self) -> bool {
        self.config.force_alternate_orientation
    }

    pub fn set_force_alternate_orientation(&mut self, value: bool) {
        self.config.force_alternate_orientation = value;
    }

    pub fn set_fill_types(&mut self, subject_fill: PolyFillType, clip_fill: PolyFillType) {
        self.config.subject_fill = subject_fill;
        self.config.clip_fill = clip_fill;
    }

    pub fn add_polygon(&mut self, polygon: &[Point<f64>], poly_type: PolyType) -> bool {
        let scale = self.config.scale();
        let mut path: Vec<Point<i64>> = Vec::with_capacity(polygon.len());

        for point in polygon {
            match to_grid_point(point, scale) {
                Some(grid_point) => path.push(grid_point),
                None => {
                    warn!(
                        "{:?} polygon rejected, coordinate ({}, {}) is out of range",
                        poly_type, point.x, point.y
                    );
                    return false;
                }
            }
        }

        if !clean_polygon(&mut path) {
            debug!(
                "{:?} polygon with {} points is degenerate, skipped",
                poly_type,
                polygon.len()
            );
            return false;
        }

        self.is_precision_locked = true;

        let mut edge_index = self.t_edge.create_path(&path, poly_type);
        let mut min_index = UNASSIGNED;

        loop {
            edge_index = self.t_edge.find_next_loc_min(edge_index);
            if edge_index == min_index {
                break;
            }
            if min_index == UNASSIGNED {
                min_index = edge_index;
            }

            let (y, left_bound, right_bound, is_left_forward) =
                self.t_edge.create_local_minima(edge_index);
            self.local_minima.insert(y, left_bound, right_bound);

            let left_end = self.t_edge.process_bound(left_bound, is_left_forward);
            let right_end = self.t_edge.process_bound(right_bound, !is_left_forward);

            edge_index = if is_left_forward { left_end } else { right_end };
        }

        true
    }

    pub fn add_polygons(&mut self, polygons: &[Polygon], poly_type: PolyType) -> bool {
        let mut result = false;

        for polygon in polygons {
            if self.add_polygon(polygon, poly_type) {
                result = true;
            }
        }

        result
    }

    /// Drops every ingested polygon. Precision may be changed again afterwards.
    pub fn clear(&mut self) {
        self.dispose();
        self.t_edge.clean();
        self.local_minima.clean();
        self.is_precision_locked = false;
    }

    pub fn execute(&mut self, clip_type: ClipType) -> Result<Vec<Contour>, ClipError> {
        if self.is_execute_locked {
            return Err(ClipError::ExecuteLocked);
        }

        self.is_execute_locked = true;
        self.clip_type = clip_type;

        let result = self.execute_internal().map(|_| {
            self.out_rec
                .build_result(self.config.scale(), self.config.force_alternate_orientation)
        });

        match &result {
            Ok(contours) => debug!(
                "{:?} of {} edges produced {} contours",
                clip_type,
                self.t_edge.len(),
                contours.len()
            ),
            Err(error) => warn!("{:?} aborted: {}", clip_type, error),
        }

        self.dispose();
        self.is_execute_locked = false;

        result
    }

    fn execute_internal(&mut self) -> Result<(), ClipError> {
        self.reset();

        let bot_y = match self.scanbeam.pop() {
            Some(y) => y,
            None => return Ok(()),
        };

        self.insert_local_minima_into_ael(bot_y)?;

        while let Some(top_y) = self.scanbeam.pop() {
            self.process_horizontals()?;
            self.process_intersections(top_y)?;
            self.process_edges_at_top_of_scanbeam(top_y)?;
            self.insert_local_minima_into_ael(top_y)?;
        }

        self.out_rec.fixup_all();

        Ok(())
    }

    /// Run-scoped state is already empty here: `execute` disposes it on every exit path.
    fn reset(&mut self) {
        self.local_minima.reset();

        for i in 0..self.local_minima.len() {
            self.t_edge.reset_bounds(
                self.local_minima.get_left_bound(i),
                self.local_minima.get_right_bound(i),
            );
            self.scanbeam.insert(self.local_minima.get_y(i));
        }
    }

    fn dispose(&mut self) {
        self.scanbeam.clean();
        self.intersections.clean();
        self.out_rec.clean();
        self.t_edge.reset();
    }

    #[inline(always)]
    fn fill_rules(&self) -> FillRules {
        FillRules::new(self.config.subject_fill, self.config.clip_fill)
    }

    fn is_contributing(&self, edge_index: usize) -> bool {
        let edge = &self.t_edge[edge_index];

        is_contributing(
            self.clip_type,
            &self.fill_rules(),
            edge.poly_type,
            edge.wind_cnt,
            edge.wind_cnt2,
        )
    }

    fn update_edge_into_ael(&mut self, edge_index: usize) -> Result<usize, ClipError> {
        let result = self.t_edge.update_edge_into_ael(edge_index)?;

        if !self.t_edge[result].is_horizontal() {
            self.scanbeam.insert(self.t_edge[result].top.y);
        }

        Ok(result)
    }

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) -> Result<(), ClipError> {
        let rules = self.fill_rules();

        while let Some((left_bound, right_bound)) = self.local_minima.pop_at(bot_y) {
            self.t_edge.insert_edge_into_ael(left_bound, UNASSIGNED);
            self.t_edge.insert_edge_into_ael(right_bound, left_bound);
            self.t_edge.set_winding_count(left_bound, &rules);
            self.t_edge.copy_winding(left_bound, right_bound);

            if self.is_contributing(left_bound) {
                let point = self.t_edge[left_bound].bot;
                self.add_local_min_poly(left_bound, right_bound, point);
            }

            self.scanbeam.insert(self.t_edge[left_bound].top.y);

            if self.t_edge[right_bound].is_horizontal() {
                self.t_edge.add_edge_to_sel(right_bound);

                let next_index = self.t_edge[right_bound].next_in_lml;
                if next_index != UNASSIGNED {
                    self.scanbeam.insert(self.t_edge[next_index].top.y);
                }
            } else {
                self.scanbeam.insert(self.t_edge[right_bound].top.y);
            }

            // edges between the new bounds cross the right bound at the minimum
            let point = self.t_edge[left_bound].curr;
            let mut edge_index = self.t_edge[left_bound].next_in_ael;

            while edge_index != right_bound {
                if edge_index == UNASSIGNED {
                    return Err(ClipError::RightBoundMissing);
                }

                self.intersect_edges(right_bound, edge_index, point, PROTECT_BOTH)?;
                edge_index = self.t_edge[edge_index].next_in_ael;
            }
        }

        Ok(())
    }

    fn add_out_pt(&mut self, edge_index: usize, point: Point<i64>) {
        let out_idx = self.t_edge[edge_index].out_idx;

        if out_idx == UNASSIGNED {
            let (rec_index, _) = self.out_rec.create(point);
            let owner_index = self.t_edge.hole_owner(edge_index);
            self.out_rec.set_hole_state(rec_index, owner_index);
            self.t_edge[edge_index].out_idx = rec_index;
            return;
        }

        let to_front = self.t_edge[edge_index].side == Direction::Left;
        self.out_rec.add_point(out_idx, point, to_front);
    }

    fn add_local_min_poly(&mut self, edge1_index: usize, edge2_index: usize, point: Point<i64>) {
        let (left_index, right_index) = if self.t_edge[edge2_index].is_horizontal()
            || self.t_edge[edge1_index].dx > self.t_edge[edge2_index].dx
        {
            (edge1_index, edge2_index)
        } else {
            (edge2_index, edge1_index)
        };

        self.add_out_pt(left_index, point);
        self.t_edge[right_index].out_idx = self.t_edge[left_index].out_idx;
        self.t_edge[left_index].side = Direction::Left;
        self.t_edge[right_index].side = Direction::Right;
    }

    fn add_local_max_poly(&mut self, edge1_index: usize, edge2_index: usize, point: Point<i64>) {
        self.add_out_pt(edge1_index, point);

        let out_idx1 = self.t_edge[edge1_index].out_idx;
        let out_idx2 = self.t_edge[edge2_index].out_idx;

        if out_idx1 == out_idx2 {
            self.t_edge[edge1_index].out_idx = UNASSIGNED;
            self.t_edge[edge2_index].out_idx = UNASSIGNED;
        } else if out_idx1 < out_idx2 {
            self.append_polygon(edge1_index, edge2_index);
        } else {
            self.append_polygon(edge2_index, edge1_index);
        }
    }

    fn append_polygon(&mut self, edge1_index: usize, edge2_index: usize) {
        let rec1_index = self.t_edge[edge1_index].out_idx;
        let rec2_index = self.t_edge[edge2_index].out_idx;
        let side1 = self.t_edge[edge1_index].side;
        let side2 = self.t_edge[edge2_index].side;

        self.out_rec
            .append_polygon(rec1_index, rec2_index, side1, side2);

        self.t_edge[edge1_index].out_idx = UNASSIGNED;
        self.t_edge[edge2_index].out_idx = UNASSIGNED;

        let mut edge_index = self.t_edge.active;
        while edge_index != UNASSIGNED {
            if self.t_edge[edge_index].out_idx == rec2_index {
                self.t_edge[edge_index].out_idx = rec1_index;
                self.t_edge[edge_index].side = side1;
            }
            edge_index = self.t_edge[edge_index].next_in_ael;
        }
    }

    /// Resolves a crossing of two AEL neighbours at `point`. `edge1` is left of `edge2`
    /// below the crossing. Bits of `protects` keep the matching edge alive at its top.
    fn intersect_edges(
        &mut self,
        edge1_index: usize,
        edge2_index: usize,
        point: Point<i64>,
        protects: u8,
    ) -> Result<(), ClipError> {
        let edge1_stops =
            protects & PROTECT_LEFT == 0 && self.t_edge.is_stopping(edge1_index, &point);
        let edge2_stops =
            protects & PROTECT_RIGHT == 0 && self.t_edge.is_stopping(edge2_index, &point);
        let edge1_contributing = self.t_edge[edge1_index].is_assigned();
        let edge2_contributing = self.t_edge[edge2_index].is_assigned();

        let rules = self.fill_rules();
        self.t_edge
            .update_winding_at_crossing(edge1_index, edge2_index, &rules);

        let poly_type1 = self.t_edge[edge1_index].poly_type;
        let poly_type2 = self.t_edge[edge2_index].poly_type;
        let e1_wc = effective_wind(rules.own(poly_type1), self.t_edge[edge1_index].wind_cnt);
        let e2_wc = effective_wind(rules.own(poly_type2), self.t_edge[edge2_index].wind_cnt);
        let is_e1_edge = e1_wc == 0 || e1_wc == 1;
        let is_e2_edge = e2_wc == 0 || e2_wc == 1;

        if edge1_contributing && edge2_contributing {
            if edge1_stops
                || edge2_stops
                || !is_e1_edge
                || !is_e2_edge
                || closes_at_crossing(self.clip_type, poly_type1, poly_type2)
            {
                self.add_local_max_poly(edge1_index, edge2_index, point);
            } else {
                self.add_out_pt(edge1_index, point);
                self.add_out_pt(edge2_index, point);
                self.t_edge.swap_sides(edge1_index, edge2_index);
                self.t_edge.swap_poly_indexes(edge1_index, edge2_index);
            }
        } else if edge1_contributing {
            if is_e2_edge {
                self.add_out_pt(edge1_index, point);
                self.t_edge.swap_sides(edge1_index, edge2_index);
                self.t_edge.swap_poly_indexes(edge1_index, edge2_index);
            }
        } else if edge2_contributing {
            if is_e1_edge {
                self.add_out_pt(edge2_index, point);
                self.t_edge.swap_sides(edge1_index, edge2_index);
                self.t_edge.swap_poly_indexes(edge1_index, edge2_index);
            }
        } else if is_e1_edge && is_e2_edge && !edge1_stops && !edge2_stops {
            if poly_type1 != poly_type2 {
                self.add_local_min_poly(edge1_index, edge2_index, point);
            } else if e1_wc == 1 && e2_wc == 1 {
                let e1_wc2 = effective_wind(rules.other(poly_type1), self.t_edge[edge1_index].wind_cnt2);
                let e2_wc2 = effective_wind(rules.other(poly_type2), self.t_edge[edge2_index].wind_cnt2);

                if opens_at_crossing(self.clip_type, poly_type1, e1_wc2, e2_wc2) {
                    self.add_local_min_poly(edge1_index, edge2_index, point);
                }
            } else {
                self.t_edge.swap_sides(edge1_index, edge2_index);
            }
        }

        if edge1_stops != edge2_stops
            && ((edge1_stops && self.t_edge[edge1_index].is_assigned())
                || (edge2_stops && self.t_edge[edge2_index].is_assigned()))
        {
            self.t_edge.swap_sides(edge1_index, edge2_index);
            self.t_edge.swap_poly_indexes(edge1_index, edge2_index);
        }

        for (stops, edge_index) in [(edge1_stops, edge1_index), (edge2_stops, edge2_index)] {
            if !stops {
                continue;
            }

            if self.t_edge[edge_index].is_assigned() {
                return Err(ClipError::ContributingMaxima);
            }

            self.t_edge.delete_from_list(edge_index, true);
        }

        Ok(())
    }

    /// Ends a maximum once nothing separates `edge` from its `pair`.
    fn close_maxima_pair(
        &mut self,
        edge_index: usize,
        pair_index: usize,
        point: Point<i64>,
    ) -> Result<(), ClipError> {
        match (
            self.t_edge[edge_index].is_assigned(),
            self.t_edge[pair_index].is_assigned(),
        ) {
            (false, false) => {
                self.t_edge.delete_from_list(edge_index, true);
                self.t_edge.delete_from_list(pair_index, true);
                Ok(())
            }
            (true, true) => self.intersect_edges(edge_index, pair_index, point, PROTECT_NONE),
            _ => Err(ClipError::MaximaPair),
        }
    }

    fn do_maxima(&mut self, edge_index: usize) -> Result<(), ClipError> {
        let pair_index = self.t_edge.maxima_pair_ex(edge_index);
        let point = self.t_edge[edge_index].top;

        if pair_index == UNASSIGNED {
            if self.t_edge[edge_index].is_assigned() {
                self.add_out_pt(edge_index, point);
            }
            self.t_edge.delete_from_list(edge_index, true);
            return Ok(());
        }

        let mut next_index = self.t_edge[edge_index].next_in_ael;
        while next_index != pair_index {
            if next_index == UNASSIGNED {
                return Err(ClipError::MaximaPair);
            }

            self.intersect_edges(edge_index, next_index, point, PROTECT_BOTH)?;
            self.t_edge.swap_positions_in_list(edge_index, next_index, true);
            next_index = self.t_edge[edge_index].next_in_ael;
        }

        self.close_maxima_pair(edge_index, pair_index, point)
    }

    fn process_horizontals(&mut self) -> Result<(), ClipError> {
        while let Some(horz_index) = self.t_edge.pop_edge_from_sel() {
            self.process_horizontal(horz_index)?;
        }

        Ok(())
    }

    fn process_horizontal(&mut self, horz_edge_index: usize) -> Result<(), ClipError> {
        let mut horz_index = horz_edge_index;
        let (mut dir, mut horz_left, mut horz_right) = self.t_edge.horz_direction(horz_index);

        let mut last_horz_index = horz_index;
        loop {
            let next_index = self.t_edge[last_horz_index].next_in_lml;
            if next_index == UNASSIGNED || !self.t_edge[next_index].is_horizontal() {
                break;
            }
            last_horz_index = next_index;
        }

        let max_pair_index = if self.t_edge[last_horz_index].next_in_lml == UNASSIGNED {
            self.t_edge.maxima_pair(last_horz_index)
        } else {
            UNASSIGNED
        };

        loop {
            let is_last_horz = horz_index == last_horz_index;
            let is_right = dir == Direction::Right;
            let mut curr_index = self.t_edge.get_neighbour(horz_index, is_right);

            while curr_index != UNASSIGNED {
                let curr_x = self.t_edge[curr_index].curr.x;

                if (is_right && curr_x > horz_right) || (!is_right && curr_x < horz_left) {
                    break;
                }

                // edges with a smaller dx leave the horizontal's end on its right
                let next_in_lml = self.t_edge[horz_index].next_in_lml;
                if curr_x == self.t_edge[horz_index].top.x
                    && next_in_lml != UNASSIGNED
                    && self.t_edge[curr_index].dx < self.t_edge[next_in_lml].dx
                {
                    break;
                }

                let point = Point::new(curr_x, self.t_edge[horz_index].curr.y);

                if self.t_edge[horz_index].is_assigned() {
                    self.add_out_pt(horz_index, point);
                }

                if curr_index == max_pair_index && is_last_horz {
                    let top = self.t_edge[horz_index].top;
                    return self.close_maxima_pair(horz_index, max_pair_index, top);
                }

                if is_right {
                    self.intersect_edges(horz_index, curr_index, point, PROTECT_BOTH)?;
                } else {
                    self.intersect_edges(curr_index, horz_index, point, PROTECT_BOTH)?;
                }

                let next_index = self.t_edge.get_neighbour(curr_index, is_right);
                self.t_edge.swap_positions_in_list(horz_index, curr_index, true);
                curr_index = next_index;
            }

            let next_in_lml = self.t_edge[horz_index].next_in_lml;
            if next_in_lml == UNASSIGNED || !self.t_edge[next_in_lml].is_horizontal() {
                break;
            }

            horz_index = self.update_edge_into_ael(horz_index)?;
            if self.t_edge[horz_index].is_assigned() {
                let bot = self.t_edge[horz_index].bot;
                self.add_out_pt(horz_index, bot);
            }

            (dir, horz_left, horz_right) = self.t_edge.horz_direction(horz_index);
        }

        if self.t_edge[horz_index].is_assigned() {
            let top = self.t_edge[horz_index].top;
            self.add_out_pt(horz_index, top);
        }

        if self.t_edge[horz_index].next_in_lml != UNASSIGNED {
            self.update_edge_into_ael(horz_index)?;
        } else {
            self.t_edge.delete_from_list(horz_index, true);
        }

        Ok(())
    }

    fn build_intersect_list(&mut self, top_y: i64) {
        self.t_edge.copy_ael_to_sel();

        let mut edge_index = self.t_edge.active;
        while edge_index != UNASSIGNED {
            let edge = &mut self.t_edge[edge_index];
            edge.curr.x = edge.top_x(top_y);
            edge_index = edge.next_in_ael;
        }

        loop {
            let mut is_modified = false;
            let mut curr_index = self.t_edge.sorted;

            while self.t_edge[curr_index].next_in_sel != UNASSIGNED {
                let next_index = self.t_edge[curr_index].next_in_sel;

                if self.t_edge[curr_index].curr.x > self.t_edge[next_index].curr.x {
                    let mut point = self.t_edge.intersect_point(curr_index, next_index);
                    if point.y < top_y {
                        point = Point::new(self.t_edge[curr_index].top_x(top_y), top_y);
                    }

                    self.intersections.add(curr_index, next_index, point);
                    self.t_edge
                        .swap_positions_in_list(curr_index, next_index, false);
                    is_modified = true;
                } else {
                    curr_index = next_index;
                }
            }

            let prev_index = self.t_edge[curr_index].prev_in_sel;
            if prev_index == UNASSIGNED || !is_modified {
                break;
            }

            // last edge is sorted
            self.t_edge[prev_index].next_in_sel = UNASSIGNED;
        }
    }

    fn edges_adjacent(&self, node_index: usize) -> bool {
        let edge1_index = self.intersections.get_edge1_index(node_index);
        let edge2_index = self.intersections.get_edge2_index(node_index);
        let edge1 = &self.t_edge[edge1_index];

        edge1.next_in_sel == edge2_index || edge1.prev_in_sel == edge2_index
    }

    fn fixup_intersection_order(&mut self) -> bool {
        self.t_edge.copy_ael_to_sel();
        self.intersections.sort();

        let intersect_count = self.intersections.len();
        for i in 0..intersect_count {
            if !self.edges_adjacent(i) {
                let mut j = i + 1;
                while j < intersect_count && !self.edges_adjacent(j) {
                    j += 1;
                }
                if j == intersect_count {
                    return false;
                }
                self.intersections.swap(i, j);
            }

            self.t_edge.swap_positions_in_list(
                self.intersections.get_edge1_index(i),
                self.intersections.get_edge2_index(i),
                false,
            );
        }

        true
    }

    fn process_intersect_list(&mut self) -> Result<(), ClipError> {
        for i in 0..self.intersections.len() {
            let edge1_index = self.intersections.get_edge1_index(i);
            let edge2_index = self.intersections.get_edge2_index(i);
            let point = self.intersections.get_point(i);

            self.intersect_edges(edge1_index, edge2_index, point, PROTECT_BOTH)?;
            self.t_edge
                .swap_positions_in_list(edge1_index, edge2_index, true);
        }

        Ok(())
    }

    fn process_intersections(&mut self, top_y: i64) -> Result<(), ClipError> {
        if self.t_edge.active == UNASSIGNED {
            return Ok(());
        }

        self.build_intersect_list(top_y);

        let result = if self.intersections.is_empty() {
            Ok(())
        } else if self.intersections.len() == 1 || self.fixup_intersection_order() {
            self.process_intersect_list()
        } else {
            Err(ClipError::IntersectionOrder)
        };

        self.t_edge.clear_sel();
        self.intersections.clean();

        result
    }

    fn process_edges_at_top_of_scanbeam(&mut self, top_y: i64) -> Result<(), ClipError> {
        let mut edge_index = self.t_edge.active;

        while edge_index != UNASSIGNED {
            // a maximum paired with a horizontal is closed by the horizontal instead
            let mut is_maxima_edge = self.t_edge.is_maxima(edge_index, top_y);
            if is_maxima_edge {
                let pair_index = self.t_edge.maxima_pair_ex(edge_index);
                is_maxima_edge =
                    pair_index == UNASSIGNED || !self.t_edge[pair_index].is_horizontal();
            }

            if is_maxima_edge {
                let prev_index = self.t_edge[edge_index].prev_in_ael;
                self.do_maxima(edge_index)?;
                edge_index = if prev_index == UNASSIGNED {
                    self.t_edge.active
                } else {
                    self.t_edge[prev_index].next_in_ael
                };
                continue;
            }

            let next_in_lml = self.t_edge[edge_index].next_in_lml;
            if self.t_edge.is_intermediate(edge_index, top_y)
                && self.t_edge[next_in_lml].is_horizontal()
            {
                edge_index = self.update_edge_into_ael(edge_index)?;
                if self.t_edge[edge_index].is_assigned() {
                    let bot = self.t_edge[edge_index].bot;
                    self.add_out_pt(edge_index, bot);
                }
                self.t_edge.add_edge_to_sel(edge_index);
            } else {
                let edge = &mut self.t_edge[edge_index];
                edge.curr = Point::new(edge.top_x(top_y), top_y);
            }

            edge_index = self.t_edge[edge_index].next_in_ael;
        }

        self.process_horizontals()?;

        edge_index = self.t_edge.active;
        while edge_index != UNASSIGNED {
            if self.t_edge.is_intermediate(edge_index, top_y) {
                if self.t_edge[edge_index].is_assigned() {
                    let top = self.t_edge[edge_index].top;
                    self.add_out_pt(edge_index, top);
                }
                edge_index = self.update_edge_into_ael(edge_index)?;
            }
            edge_index = self.t_edge[edge_index].next_in_ael;
        }

        Ok(())
    }
}
