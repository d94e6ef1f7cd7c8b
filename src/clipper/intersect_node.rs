use crate::geometry::point::Point;

#[derive(Debug, Clone, Copy)]
struct Intersection {
    edge1: usize,
    edge2: usize,
    point: Point<i64>,
}

/// Pending AEL inversions of the current scanbeam.
pub struct IntersectNode {
    nodes: Vec<Intersection>,
}

impl IntersectNode {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, edge1: usize, edge2: usize, point: Point<i64>) {
        self.nodes.push(Intersection {
            edge1,
            edge2,
            point,
        });
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get_edge1_index(&self, index: usize) -> usize {
        self.nodes[index].edge1
    }

    pub fn get_edge2_index(&self, index: usize) -> usize {
        self.nodes[index].edge2
    }

    pub fn get_point(&self, index: usize) -> Point<i64> {
        self.nodes[index].point
    }

    /// Sweep order first (larger y), then left to right.
    pub fn sort(&mut self) {
        self.nodes.sort_by(|a, b| {
            b.point
                .y
                .cmp(&a.point.y)
                .then_with(|| a.point.x.cmp(&b.point.x))
        });
    }

    pub fn swap(&mut self, index1: usize, index2: usize) {
        self.nodes.swap(index1, index2);
    }

    pub fn clean(&mut self) {
        self.nodes.clear();
    }
}
