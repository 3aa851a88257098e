/// Dynamic-programming table for 0/1 subset-sum with value equal to weight.
///
/// Row `i` holds the best sum reachable with the first `i` items, for every
/// capacity `0..=capacity`. Stored flat, row-major.
pub(crate) struct SumTable {
    width: usize,
    cells: Vec<i64>,
}

impl SumTable {
    /// Fill the table for `amounts`. Callers guarantee every amount is at
    /// least 1 and that the `(amounts.len() + 1) * (capacity + 1)` cells fit one
    /// allocation.
    pub(crate) fn build(amounts: &[i64], capacity: usize) -> Self {
        let width = capacity + 1;
        let rows = amounts.len() + 1;
        let mut cells = vec![0i64; rows * width];

        for (i, &amount) in amounts.iter().enumerate() {
            let (prev_rows, rest) = cells.split_at_mut((i + 1) * width);
            let prev = &prev_rows[i * width..];
            let row = &mut rest[..width];

            for (w, (cell, &skip)) in row.iter_mut().zip(prev).enumerate() {
                // amount >= 1, and w fits i64 because capacity came from an i64
                *cell = if amount <= w as i64 {
                    skip.max(prev[w - amount as usize] + amount)
                } else {
                    skip
                };
            }
        }

        Self { width, cells }
    }

    pub(crate) fn get(&self, row: usize, w: usize) -> i64 {
        self.cells[row * self.width + w]
    }

    pub(crate) fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    pub(crate) fn capacity(&self) -> usize {
        self.width - 1
    }

    /// Best sum using every item at full capacity.
    pub(crate) fn best(&self) -> i64 {
        self.get(self.rows() - 1, self.capacity())
    }
}
