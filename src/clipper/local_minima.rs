#[derive(Debug, Clone, Copy)]
struct LocalMinimum {
    y: i64,
    left_bound: usize,
    right_bound: usize,
}

/// Minima of every ingested ring in sweep order, with a cursor for the running pass.
pub struct LocalMinima {
    items: Vec<LocalMinimum>,
    current: usize,
}

impl LocalMinima {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
        }
    }

    /// Keeps descending `y`; a minimum equal to existing ones goes after them.
    pub fn insert(&mut self, y: i64, left_bound: usize, right_bound: usize) -> usize {
        let index = self.items.partition_point(|item| item.y >= y);

        self.items.insert(
            index,
            LocalMinimum {
                y,
                left_bound,
                right_bound,
            },
        );

        index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_y(&self, index: usize) -> i64 {
        self.items[index].y
    }

    pub fn get_left_bound(&self, index: usize) -> usize {
        self.items[index].left_bound
    }

    pub fn get_right_bound(&self, index: usize) -> usize {
        self.items[index].right_bound
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.current < self.items.len()
    }

    /// Takes the next minimum when it starts at height `y`.
    pub fn pop_at(&mut self, y: i64) -> Option<(usize, usize)> {
        let item = self.items.get(self.current)?;
        if item.y != y {
            return None;
        }

        self.current += 1;

        Some((item.left_bound, item.right_bound))
    }

    pub fn clean(&mut self) {
        self.items.clear();
        self.current = 0;
    }
}
