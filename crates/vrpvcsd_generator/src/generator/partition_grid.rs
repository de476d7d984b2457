use std::ops::RangeInclusive;

use crate::generator::error::GenerationError;

/// A cell of the [`PartitionGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    row: usize,
    col: usize,
    active: bool,
    cell_size: i32,
}

impl Partition {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inclusive x range, `col * size + 1 ..= (col + 1) * size`.
    pub fn x_range(&self) -> RangeInclusive<i32> {
        Self::axis_range(self.col, self.cell_size)
    }

    /// Inclusive y range, `row * size + 1 ..= (row + 1) * size`.
    pub fn y_range(&self) -> RangeInclusive<i32> {
        Self::axis_range(self.row, self.cell_size)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x_range().contains(&x) && self.y_range().contains(&y)
    }

    fn axis_range(index: usize, cell_size: i32) -> RangeInclusive<i32> {
        let index = index as i32;
        (index * cell_size + 1)..=((index + 1) * cell_size)
    }
}

/// Binary heatmap over the spatial domain. Customers are only placed into
/// active cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionGrid {
    rows: usize,
    cols: usize,
    cell_size: i32,
    active: Vec<bool>,
}

impl PartitionGrid {
    pub fn new(heatmap: &[Vec<bool>], cell_size: i32) -> Result<Self, GenerationError> {
        if cell_size <= 0 {
            return Err(GenerationError::InvalidGrid(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }

        let rows = heatmap.len();
        let cols = heatmap.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(GenerationError::InvalidGrid("heatmap is empty".to_owned()));
        }

        if let Some(row) = heatmap.iter().position(|row| row.len() != cols) {
            return Err(GenerationError::InvalidGrid(format!(
                "row {row} has {} cells, expected {cols}",
                heatmap[row].len()
            )));
        }

        Ok(Self {
            rows,
            cols,
            cell_size,
            active: heatmap.iter().flatten().copied().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&active| active).count()
    }

    /// Every cell, in row-major order.
    pub fn partitions(&self) -> impl Iterator<Item = Partition> + '_ {
        self.active
            .iter()
            .enumerate()
            .map(|(index, &active)| Partition {
                row: index / self.cols,
                col: index % self.cols,
                active,
                cell_size: self.cell_size,
            })
    }
}

impl Default for PartitionGrid {
    /// 5x5 heatmap of 20x20 cells covering a 100x100 domain.
    fn default() -> Self {
        const HEATMAP: [[u8; 5]; 5] = [
            [1, 1, 0, 1, 0],
            [1, 1, 0, 0, 1],
            [1, 0, 1, 1, 0],
            [0, 1, 0, 1, 1],
            [0, 1, 1, 1, 0],
        ];

        Self {
            rows: HEATMAP.len(),
            cols: HEATMAP[0].len(),
            cell_size: 20,
            active: HEATMAP.iter().flatten().map(|&cell| cell == 1).collect(),
        }
    }
}
