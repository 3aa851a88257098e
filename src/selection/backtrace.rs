use crate::item::Item;
use crate::types::ChosenItem;

use super::table::SumTable;

/// Walk the table from the last row to the first. Item `i - 1` is taken
/// exactly when row `i` differs from row `i - 1` at the current capacity.
///
/// Output is in visit order: highest input index first.
pub(crate) fn backtrace(table: &SumTable, items: &[Item]) -> Vec<ChosenItem> {
    debug_assert_eq!(table.rows(), items.len() + 1);

    let mut chosen = Vec::new();
    let mut w = table.capacity();

    for i in (1..table.rows()).rev() {
        if table.get(i, w) != table.get(i - 1, w) {
            let item = &items[i - 1];
            // the row only diverges through the take branch, which needs amount <= w
            debug_assert!(item.amount >= 1 && item.amount as usize <= w);
            chosen.push(ChosenItem {
                index: i - 1,
                label: item.label.clone(),
                amount: item.amount,
            });
            w -= item.amount as usize;
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(items: &[Item]) -> Vec<i64> {
        items.iter().map(|item| item.amount).collect()
    }

    #[test]
    fn equal_amounts_resolve_to_first_item() {
        let items = vec![Item::new("A", 10), Item::new("B", 10)];
        let table = SumTable::build(&amounts(&items), 15);

        let chosen = backtrace(&table, &items);

        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].index, 0);
        assert_eq!(chosen[0].label, "A");
    }

    #[test]
    fn visits_high_indices_first() {
        let items = vec![Item::new("A", 1), Item::new("B", 2), Item::new("C", 3)];
        let table = SumTable::build(&amounts(&items), 6);

        let indices: Vec<usize> = backtrace(&table, &items).iter().map(|c| c.index).collect();

        assert_eq!(indices, vec![2, 1, 0]);
    }
}
