use crate::clipper::constants::UNASSIGNED;
use crate::clipper::contributing::FillRules;
use crate::clipper::enums::{Direction, PolyFillType, PolyType};
use crate::clipper::error::ClipError;
use crate::clipper::t_edge::TEdge;
use crate::geometry::point::Point;

#[cfg(test)]
mod t_edge_tests {
    use super::*;

    fn square(origin: i64, size: i64) -> Vec<Point<i64>> {
        vec![
            Point::new(origin, origin),
            Point::new(origin + size, origin),
            Point::new(origin + size, origin + size),
            Point::new(origin, origin + size),
        ]
    }

    /// Same ingestion walk as the engine; returns every (y, left, right) minimum.
    fn ingest(t_edge: &mut TEdge, path: &[Point<i64>], poly_type: PolyType) -> Vec<(i64, usize, usize)> {
        let mut result = Vec::new();
        let mut edge_index = t_edge.create_path(path, poly_type);
        let mut min_index = UNASSIGNED;

        loop {
            edge_index = t_edge.find_next_loc_min(edge_index);
            if edge_index == min_index {
                break;
            }
            if min_index == UNASSIGNED {
                min_index = edge_index;
            }

            let (y, left, right, is_left_forward) = t_edge.create_local_minima(edge_index);
            result.push((y, left, right));

            let left_end = t_edge.process_bound(left, is_left_forward);
            let right_end = t_edge.process_bound(right, !is_left_forward);
            edge_index = if is_left_forward { left_end } else { right_end };
        }

        result
    }

    #[test]
    fn test_create_path_orients_edges() {
        let mut t_edge = TEdge::new();
        let first = t_edge.create_path(&square(0, 2), PolyType::Subject);

        assert_eq!(first, 0);
        assert_eq!(t_edge.len(), 4);
        assert!(t_edge[0].is_horizontal());
        assert_eq!(t_edge[1].bot, Point::new(2, 2));
        assert_eq!(t_edge[1].top, Point::new(2, 0));
        assert_eq!(t_edge[1].dx, 0.0);
        assert_eq!(t_edge[3].next, 0);
        assert_eq!(t_edge[0].prev, 3);
        assert_eq!(t_edge.create_path(&square(0, 2)[..2], PolyType::Clip), UNASSIGNED);
    }

    #[test]
    fn test_square_has_single_minimum_with_horizontal_right_bound() {
        let mut t_edge = TEdge::new();
        let minima = ingest(&mut t_edge, &square(0, 2), PolyType::Subject);

        assert_eq!(minima, vec![(2, 3, 2)]);
        assert_eq!(t_edge[3].wind_delta, 1);
        assert_eq!(t_edge[2].wind_delta, -1);

        // left bound climbs x = 0 then runs along the top
        assert_eq!(t_edge[3].next_in_lml, 0);
        assert_eq!(t_edge[0].next_in_lml, UNASSIGNED);

        // the bottom horizontal is flipped to start at the minimum vertex
        assert_eq!(t_edge[2].bot, Point::new(0, 2));
        assert_eq!(t_edge[2].top, Point::new(2, 2));
        assert_eq!(t_edge[2].next_in_lml, 1);
        assert_eq!(t_edge[1].next_in_lml, UNASSIGNED);

        assert_eq!(t_edge.maxima_pair(1), 0);
        assert_eq!(t_edge.maxima_pair(0), 1);
        assert_eq!(t_edge.maxima_pair(3), UNASSIGNED);
    }

    #[test]
    fn test_concave_ring_has_two_minima() {
        let mut t_edge = TEdge::new();
        // a "V" notch in the bottom side gives two bottom vertices
        let path = vec![
            Point::new(0, 10),
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(5, 4),
        ];
        let minima = ingest(&mut t_edge, &path, PolyType::Subject);

        assert_eq!(minima.len(), 2);
        assert!(minima.iter().all(|(y, _, _)| *y == 10));
    }

    #[test]
    fn test_ael_insert_swap_delete() {
        let mut t_edge = TEdge::new();
        ingest(&mut t_edge, &square(0, 2), PolyType::Subject);
        t_edge.reset();

        t_edge.insert_edge_into_ael(1, UNASSIGNED);
        t_edge.insert_edge_into_ael(3, UNASSIGNED);

        assert_eq!(t_edge.active, 3);
        assert_eq!(t_edge.get_neighbour(3, true), 1);
        assert_eq!(t_edge.get_neighbour(1, false), 3);

        t_edge.swap_positions_in_list(3, 1, true);
        assert_eq!(t_edge.active, 1);
        assert_eq!(t_edge[1].next_in_ael, 3);
        assert_eq!(t_edge[3].next_in_ael, UNASSIGNED);

        t_edge.delete_from_list(1, true);
        assert_eq!(t_edge.active, 3);
        assert_eq!(t_edge[3].prev_in_ael, UNASSIGNED);

        // deleting twice is a no-op
        t_edge.delete_from_list(1, true);
        assert_eq!(t_edge.active, 3);
    }

    #[test]
    fn test_sel_push_and_pop() {
        let mut t_edge = TEdge::new();
        ingest(&mut t_edge, &square(0, 2), PolyType::Subject);
        t_edge.reset();

        t_edge.add_edge_to_sel(0);
        t_edge.add_edge_to_sel(2);

        assert_eq!(t_edge.pop_edge_from_sel(), Some(2));
        assert_eq!(t_edge.pop_edge_from_sel(), Some(0));
        assert_eq!(t_edge.pop_edge_from_sel(), None);
    }

    #[test]
    fn test_winding_counts_of_nested_squares() {
        let mut t_edge = TEdge::new();
        let outer = ingest(&mut t_edge, &square(0, 10), PolyType::Subject);
        let inner = ingest(&mut t_edge, &square(2, 6), PolyType::Subject);
        let outer_left = outer[0].1;
        let inner_left = inner[0].1;

        for (fill, expected) in [(PolyFillType::NonZero, 2), (PolyFillType::EvenOdd, 0)] {
            let rules = FillRules::new(fill, PolyFillType::EvenOdd);
            t_edge.reset();
            t_edge.insert_edge_into_ael(outer_left, UNASSIGNED);
            t_edge.insert_edge_into_ael(inner_left, UNASSIGNED);
            t_edge.set_winding_count(outer_left, &rules);
            t_edge.set_winding_count(inner_left, &rules);

            assert_eq!(t_edge[outer_left].wind_cnt, 1);
            assert_eq!(t_edge[inner_left].wind_cnt, expected);
            assert_eq!(t_edge[inner_left].wind_cnt2, 0);
        }
    }

    #[test]
    fn test_clip_edges_count_towards_wind_cnt2() {
        let mut t_edge = TEdge::new();
        let subject = ingest(&mut t_edge, &square(0, 10), PolyType::Subject);
        let clip = ingest(&mut t_edge, &square(2, 6), PolyType::Clip);
        let rules = FillRules::new(PolyFillType::EvenOdd, PolyFillType::EvenOdd);

        t_edge.reset();
        t_edge.insert_edge_into_ael(subject[0].1, UNASSIGNED);
        t_edge.insert_edge_into_ael(clip[0].1, UNASSIGNED);
        t_edge.set_winding_count(subject[0].1, &rules);
        t_edge.set_winding_count(clip[0].1, &rules);

        assert_eq!(t_edge[clip[0].1].wind_cnt, 1);
        assert_eq!(t_edge[clip[0].1].wind_cnt2, 1);
    }

    #[test]
    fn test_intersect_point_of_crossing_diagonals() {
        let mut t_edge = TEdge::new();
        let falling = t_edge.create_path(
            &[Point::new(0, 10), Point::new(10, 0), Point::new(20, 10)],
            PolyType::Subject,
        );
        let rising = t_edge.create_path(
            &[Point::new(10, 10), Point::new(0, 0), Point::new(-5, 10)],
            PolyType::Clip,
        );

        assert_eq!(t_edge[falling].dx, -1.0);
        assert_eq!(t_edge[rising].dx, 1.0);
        assert_eq!(t_edge.intersect_point(falling, rising), Point::new(5, 5));
    }

    #[test]
    fn test_top_x_interpolates_and_snaps_to_top() {
        let mut t_edge = TEdge::new();
        let index = t_edge.create_path(
            &[Point::new(0, 10), Point::new(10, 0), Point::new(20, 10)],
            PolyType::Subject,
        );

        assert_eq!(t_edge[index].top_x(10), 0);
        assert_eq!(t_edge[index].top_x(5), 5);
        assert_eq!(t_edge[index].top_x(0), 10);
    }

    #[test]
    fn test_update_edge_into_ael() {
        let mut t_edge = TEdge::new();
        ingest(&mut t_edge, &square(0, 2), PolyType::Subject);
        t_edge.reset();

        t_edge.insert_edge_into_ael(3, UNASSIGNED);
        t_edge.insert_edge_into_ael(1, UNASSIGNED);
        t_edge[3].out_idx = 4;
        t_edge[3].side = Direction::Right;
        t_edge[3].wind_cnt = 1;

        assert_eq!(t_edge.update_edge_into_ael(3), Ok(0));
        assert_eq!(t_edge.active, 0);
        assert_eq!(t_edge[0].next_in_ael, 1);
        assert_eq!(t_edge[1].prev_in_ael, 0);
        assert_eq!(t_edge[0].out_idx, 4);
        assert_eq!(t_edge[0].side, Direction::Right);
        assert_eq!(t_edge[0].wind_cnt, 1);
        assert_eq!(t_edge[0].curr, t_edge[0].bot);
        assert_eq!(t_edge[3].next_in_ael, UNASSIGNED);

        assert_eq!(t_edge.update_edge_into_ael(1), Err(ClipError::UpdateEdge));
    }

    #[test]
    fn test_maxima_and_stopping() {
        let mut t_edge = TEdge::new();
        ingest(&mut t_edge, &square(0, 2), PolyType::Subject);

        assert!(t_edge.is_maxima(1, 0));
        assert!(!t_edge.is_maxima(1, 2));
        assert!(t_edge.is_intermediate(3, 0));
        assert!(t_edge.is_stopping(1, &Point::new(2, 0)));
        assert!(!t_edge.is_stopping(1, &Point::new(2, 1)));
        assert!(!t_edge.is_stopping(3, &Point::new(0, 0)));
    }

    #[test]
    fn test_hole_owner_uses_parity_to_the_left() {
        let mut t_edge = TEdge::new();
        ingest(&mut t_edge, &square(0, 10), PolyType::Subject);
        ingest(&mut t_edge, &square(2, 6), PolyType::Subject);
        t_edge.reset();

        // AEL: 3 (x=0), 7 (x=2), 5 (x=8)
        t_edge.insert_edge_into_ael(3, UNASSIGNED);
        t_edge.insert_edge_into_ael(7, UNASSIGNED);
        t_edge.insert_edge_into_ael(5, UNASSIGNED);

        t_edge[3].out_idx = 0;
        assert_eq!(t_edge.hole_owner(7), 0);

        t_edge[7].out_idx = 0;
        assert_eq!(t_edge.hole_owner(5), UNASSIGNED);

        t_edge[7].out_idx = 1;
        assert_eq!(t_edge.hole_owner(5), 1);
    }

    #[test]
    fn test_horz_direction() {
        let mut t_edge = TEdge::new();
        ingest(&mut t_edge, &square(0, 2), PolyType::Subject);

        assert_eq!(t_edge.horz_direction(2), (Direction::Right, 0, 2));

        t_edge[0].bot.x = 2;
        t_edge[0].top.x = 0;
        assert_eq!(t_edge.horz_direction(0), (Direction::Left, 0, 2));
    }
}
