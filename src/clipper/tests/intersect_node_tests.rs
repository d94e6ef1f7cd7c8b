use crate::clipper::intersect_node::IntersectNode;
use crate::geometry::point::Point;

#[cfg(test)]
mod intersect_node_tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut intersections = IntersectNode::new();
        assert!(intersections.is_empty());

        intersections.add(3, 7, Point::new(10, -20));

        assert_eq!(intersections.len(), 1);
        assert_eq!(intersections.get_edge1_index(0), 3);
        assert_eq!(intersections.get_edge2_index(0), 7);
        assert_eq!(intersections.get_point(0), Point::new(10, -20));
    }

    #[test]
    fn test_sort_follows_sweep_order() {
        let mut intersections = IntersectNode::new();

        intersections.add(0, 1, Point::new(5, 10));
        intersections.add(2, 3, Point::new(1, 30));
        intersections.add(4, 5, Point::new(-2, 10));
        intersections.add(6, 7, Point::new(-2, 10));
        intersections.sort();

        assert_eq!(intersections.get_point(0).y, 30);
        assert_eq!(intersections.get_edge1_index(1), 4);
        // equal points keep their discovery order
        assert_eq!(intersections.get_edge1_index(2), 6);
        assert_eq!(intersections.get_edge1_index(3), 0);
    }

    #[test]
    fn test_swap_and_clean() {
        let mut intersections = IntersectNode::new();

        intersections.add(0, 1, Point::new(0, 0));
        intersections.add(2, 3, Point::new(1, 1));
        intersections.swap(0, 1);

        assert_eq!(intersections.get_edge1_index(0), 2);
        assert_eq!(intersections.get_edge2_index(1), 1);

        intersections.clean();
        assert!(intersections.is_empty());
    }
}
