mod backtrace;
mod table;

use std::mem;

use crate::item::Item;
use crate::types::{Solution, SolveError};

use backtrace::backtrace;
use table::SumTable;

/// Find the subset of `items` with the largest sum not exceeding `limit`.
///
/// Exact 0/1 subset-sum by dynamic programming, then a divergence backtrace:
/// walking from the last item down, an item is taken only when its row of the
/// table differs from the previous row at the current capacity. When several
/// subsets reach the optimum this picks the same one every time for the same
/// input order.
///
/// Time and memory are `O(items.len() * limit)`. No cap is applied here; hosts
/// that accept untrusted ceilings should bound them (see
/// [`crate::session::SessionConfig::max_table_cells`]).
///
/// All inputs are validated before any work is done. The whole call fails on
/// the first invalid value.
pub fn solve(items: &[Item], limit: i64) -> Result<Solution, SolveError> {
    if limit < 1 {
        return Err(SolveError::InvalidCeiling(limit));
    }
    if let Some((index, item)) = items.iter().enumerate().find(|(_, item)| item.amount < 1) {
        return Err(SolveError::InvalidItem {
            index,
            amount: item.amount,
        });
    }

    if items.is_empty() {
        return Ok(Solution::empty(limit));
    }

    let too_large = SolveError::TableTooLarge {
        items: items.len(),
        limit,
    };
    let capacity = usize::try_from(limit).map_err(|_| too_large.clone())?;
    // Vec allocations are capped at isize::MAX bytes.
    capacity
        .checked_add(1)
        .and_then(|width| width.checked_mul(items.len() + 1))
        .and_then(|cells| cells.checked_mul(mem::size_of::<i64>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(too_large)?;

    // 1. Table phase
    let amounts: Vec<i64> = items.iter().map(|item| item.amount).collect();
    let table = SumTable::build(&amounts, capacity);
    let achieved_sum = table.best();

    // 2. Backtrace phase
    let mut chosen = backtrace(&table, items);

    // 3. Ordering phase
    // Descending amount; sort_by is stable so ties keep backtrace order.
    chosen.sort_by(|a, b| b.amount.cmp(&a.amount));

    debug_assert!(chosen.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.amount > b.amount || (a.amount == b.amount && a.index > b.index)
    }));
    debug_assert_eq!(chosen.iter().map(|c| c.amount).sum::<i64>(), achieved_sum);
    debug_assert!(achieved_sum <= limit);

    Ok(Solution {
        chosen,
        limit,
        achieved_sum,
        remainder: limit - achieved_sum,
        items_considered: items.len(),
    })
}

/// Number of cells the solver's table needs for a request, or `None` when
/// the count does not fit `u64` or `limit` is not a valid ceiling.
pub fn table_cells(items: usize, limit: i64) -> Option<u64> {
    if limit < 1 {
        return None;
    }
    let rows = u64::try_from(items).ok()?.checked_add(1)?;
    let width = u64::try_from(limit).ok()?.checked_add(1)?;
    rows.checked_mul(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_includes_base_row_and_zero_capacity() {
        assert_eq!(table_cells(0, 1), Some(2));
        assert_eq!(table_cells(3, 9), Some(40));
        assert_eq!(table_cells(3, 0), None);
        assert_eq!(table_cells(usize::MAX, i64::MAX), None);
    }

    #[test]
    fn item_larger_than_ceiling_is_skipped() {
        let items = vec![Item::new("big", 100), Item::new("small", 7)];
        let solution = solve(&items, 50).unwrap();

        assert_eq!(solution.achieved_sum, 7);
        assert_eq!(solution.chosen.len(), 1);
        assert_eq!(solution.chosen[0].index, 1);
    }
}
