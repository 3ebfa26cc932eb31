//! View-level sorting
//!
//! Sorting never reorders the stored table. It produces a permutation of row
//! indices that the grid reads through.

use std::cmp::Ordering;

use crate::csv::Table;
use crate::util::{compare_text, parse_finite};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Config after a sort request on `column`
    ///
    /// The same column flips direction; a different column starts ascending.
    pub fn next(current: Option<SortConfig>, column: usize) -> Self {
        match current {
            Some(config) if config.column == column => Self {
                column,
                direction: config.direction.toggled(),
            },
            _ => Self::ascending(column),
        }
    }
}

/// Compare two cells: numerically when both parse, else as collated text
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_finite(a), parse_finite(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => compare_text(a, b),
    }
}

/// Row indices of `table` in display order
///
/// The sort is stable, so equal cells keep their stored order.
pub fn sorted_order(table: &Table, config: &SortConfig) -> Vec<usize> {
    let order: Vec<usize> = (0..table.row_count()).collect();
    if config.column >= table.column_count() {
        return order;
    }

    merge_sort(order, &mut |a, b| {
        let ord = compare_cells(table.get(a, config.column), table.get(b, config.column));
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    })
}

// Mixed numeric/text columns make `compare_cells` non-transitive (e.g.
// "3" < "+5" < "+a" < "3"), which `slice::sort_by` may panic on. A plain
// top-down merge sort tolerates any comparator and stays stable.
fn merge_sort<F>(items: Vec<usize>, cmp: &mut F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort(left, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if cmp(right[j], left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[&str]) -> Table {
        Table::new(
            vec!["v".into(), "id".into()],
            values
                .iter()
                .enumerate()
                .map(|(i, v)| vec![v.to_string(), i.to_string()])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_next_toggles_same_column() {
        let first = SortConfig::next(None, 2);
        assert_eq!(first, SortConfig::ascending(2));
        let second = SortConfig::next(Some(first), 2);
        assert_eq!(second.direction, SortDirection::Descending);
        let third = SortConfig::next(Some(second), 2);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_next_resets_on_new_column() {
        let desc = SortConfig {
            column: 1,
            direction: SortDirection::Descending,
        };
        assert_eq!(SortConfig::next(Some(desc), 0), SortConfig::ascending(0));
    }

    #[test]
    fn test_numeric_compare() {
        let t = table(&["10", "9", "-2.5", "100"]);
        let order = sorted_order(&t, &SortConfig::ascending(0));
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_text_compare_is_case_insensitive() {
        let t = table(&["banana", "Apple", "cherry"]);
        let order = sorted_order(&t, &SortConfig::ascending(0));
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_accented_text_sorts_with_base_letter() {
        let t = table(&["zeta", "Émile", "fig"]);
        assert_eq!(sorted_order(&t, &SortConfig::ascending(0)), vec![1, 2, 0]);

        let t = table(&["resumes", "résumé", "resume"]);
        assert_eq!(sorted_order(&t, &SortConfig::ascending(0)), vec![2, 1, 0]);
    }

    #[test]
    fn test_punctuation_sorts_before_letters() {
        let t = table(&["zoe", "~pending", "adam", "(void)"]);
        assert_eq!(sorted_order(&t, &SortConfig::ascending(0)), vec![3, 1, 2, 0]);

        let desc = SortConfig {
            column: 0,
            direction: SortDirection::Descending,
        };
        assert_eq!(sorted_order(&t, &desc), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_descending_reverses() {
        let t = table(&["3", "1", "2"]);
        let config = SortConfig {
            column: 0,
            direction: SortDirection::Descending,
        };
        assert_eq!(sorted_order(&t, &config), vec![0, 2, 1]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let t = table(&["b", "a", "B", "A"]);
        let order = sorted_order(&t, &SortConfig::ascending(0));
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_mixed_column_does_not_panic() {
        let t = table(&["3", "+5", "+a", "", "-", "10", "abc", "2.5"]);
        let order = sorted_order(&t, &SortConfig::ascending(0));
        let mut seen = order.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_column_keeps_order() {
        let t = table(&["b", "a"]);
        assert_eq!(sorted_order(&t, &SortConfig::ascending(9)), vec![0, 1]);
    }
}
