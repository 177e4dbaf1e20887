use fractrio_core::IterationResult;

/// Stores per-pixel escape times for a full frame.
///
/// This is the raw output of the renderer before coloring, so a frame can be
/// recolored or exported without re-evaluating.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationBuffer {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub data: Vec<IterationResult>,
}

impl IterationBuffer {
    /// A buffer with every pixel marked interior (`max_iterations`).
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            max_iterations,
            data: vec![IterationResult::new(max_iterations); size],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<IterationResult> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Number of pixels that used the whole step budget.
    pub fn interior_count(&self) -> usize {
        self.data
            .iter()
            .filter(|r| r.is_interior(self.max_iterations))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_all_interior() {
        let buf = IterationBuffer::new(5, 4, 100);
        assert_eq!(buf.data.len(), 20);
        assert_eq!(buf.interior_count(), 20);
        assert_eq!(buf.get(4, 3), Some(IterationResult::new(100)));
        assert_eq!(buf.get(5, 0), None);
    }

    #[test]
    fn get_is_row_major() {
        let mut buf = IterationBuffer::new(3, 2, 10);
        buf.data[3 + 1] = IterationResult::new(7);
        assert_eq!(buf.get(1, 1), Some(IterationResult::new(7)));
        assert_eq!(buf.interior_count(), 5);
    }
}
