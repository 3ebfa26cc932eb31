//! Grouping and aggregation
//!
//! Sums an amount column per group key and writes each group's total onto the
//! group's last row in a new Total column.

use std::collections::HashMap;

use super::error::Warning;
use super::model::Table;
use crate::util::{compare_text, format_fixed, parse_finite};

/// Which columns to group and sum, and how to label the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSpec {
    /// Clean column index holding the group key
    pub key_column: usize,
    /// Clean column index holding the amount to sum
    pub amount_column: usize,
    /// Header for the appended column
    pub total_header: String,
    /// Reorder rows by the key before grouping
    pub sort_by_key: bool,
}

/// Aggregate for one group of rows
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
    /// Number of rows in the group
    pub rows: usize,
    /// Largest row index in the group; the Total cell goes here
    pub last_row: usize,
}

/// Sort by key (optional), then append the Total column
///
/// Returns the index of the appended column. When the table is too narrow for
/// either index, an empty Total column is still appended and a warning
/// recorded.
pub fn aggregate(table: &mut Table, spec: &AggregationSpec, warnings: &mut Vec<Warning>) -> usize {
    let width = table.column_count();

    if spec.sort_by_key && spec.key_column < width {
        let key = spec.key_column;
        table.sort_rows_by(|a, b| compare_text(a.get(key), b.get(key)));
        warnings.push(Warning::SortedForGrouping {
            column: table.headers()[key].clone(),
        });
    }

    let mut totals = vec![String::new(); table.row_count()];

    if width <= spec.key_column.max(spec.amount_column) {
        tracing::warn!(
            width,
            key = spec.key_column,
            amount = spec.amount_column,
            "too few columns to aggregate"
        );
        warnings.push(Warning::InsufficientColumnsForAggregation);
        table.push_column(spec.total_header.clone(), totals);
        return width;
    }

    let groups = group_totals(table, spec.key_column, spec.amount_column);
    for group in &groups {
        totals[group.last_row] = format_fixed(group.total, 2);
    }

    tracing::debug!(groups = groups.len(), "computed group totals");

    warnings.push(Warning::AggregationBasis {
        key: table.headers()[spec.key_column].clone(),
        amount: table.headers()[spec.amount_column].clone(),
    });
    table.push_column(spec.total_header.clone(), totals);
    width
}

/// Compute per-group sums in first-seen group order
///
/// Groups are keyed by the exact cell string. Amounts without a finite
/// numeric prefix count as zero.
pub fn group_totals(table: &Table, key_column: usize, amount_column: usize) -> Vec<GroupTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupTotal> = Vec::new();

    for (row_idx, row) in table.rows().iter().enumerate() {
        let key = row.get(key_column);
        let amount = parse_finite(row.get(amount_column)).unwrap_or(0.0);

        match index.get(key) {
            Some(&g) => {
                let group = &mut groups[g];
                group.total += amount;
                group.rows += 1;
                group.last_row = group.last_row.max(row_idx);
            }
            None => {
                index.insert(key, groups.len());
                groups.push(GroupTotal {
                    key: key.to_string(),
                    total: amount,
                    rows: 1,
                    last_row: row_idx,
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[[&str; 6]]) -> Table {
        let headers = ["Date", "Ref", "Memo", "Name", "Credit", "Debit"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        Table::new(headers, rows).unwrap()
    }

    fn spec(sort_by_key: bool) -> AggregationSpec {
        AggregationSpec {
            key_column: 3,
            amount_column: 5,
            total_header: "Total".into(),
            sort_by_key,
        }
    }

    fn totals(table: &Table) -> Vec<&str> {
        let col = table.column_count() - 1;
        table.rows().iter().map(|r| r.get(col)).collect()
    }

    #[test]
    fn test_total_lands_on_last_row_of_group() {
        let mut t = table(&[
            ["", "", "", "A", "", "10"],
            ["", "", "", "A", "", "5"],
            ["", "", "", "B", "", "3"],
        ]);
        let mut warnings = Vec::new();
        aggregate(&mut t, &spec(false), &mut warnings);

        assert_eq!(t.headers().last().map(|s| s.as_str()), Some("Total"));
        assert_eq!(totals(&t), vec!["", "15.00", "3.00"]);
        assert_eq!(
            warnings,
            vec![Warning::AggregationBasis {
                key: "Name".into(),
                amount: "Debit".into()
            }]
        );
    }

    #[test]
    fn test_scattered_group_without_sort() {
        let mut t = table(&[
            ["", "", "", "A", "", "1.5"],
            ["", "", "", "B", "", "2"],
            ["", "", "", "A", "", "oops"],
            ["", "", "", "B", "", ""],
        ]);
        aggregate(&mut t, &spec(false), &mut Vec::new());
        assert_eq!(totals(&t), vec!["", "", "1.50", "2.00"]);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let mut t = table(&[
            ["1", "", "", "bob", "", "1"],
            ["2", "", "", "Alice", "", "2"],
            ["3", "", "", "alice", "", "3"],
            ["4", "", "", "Bob", "", "4"],
        ]);
        let mut warnings = Vec::new();
        aggregate(&mut t, &spec(true), &mut warnings);

        let order: Vec<&str> = t.rows().iter().map(|r| r.get(0)).collect();
        assert_eq!(order, vec!["2", "3", "1", "4"]);
        assert_eq!(
            warnings[0],
            Warning::SortedForGrouping {
                column: "Name".into()
            }
        );
        // "Alice" and "alice" are distinct groups; totals stay per exact key
        assert_eq!(totals(&t), vec!["2.00", "3.00", "1.00", "4.00"]);
    }

    #[test]
    fn test_sort_collates_accented_keys() {
        let mut t = table(&[
            ["1", "", "", "zoe", "", "1"],
            ["2", "", "", "Émile", "", "2"],
            ["3", "", "", "frank", "", "3"],
            ["4", "", "", "émile", "", "4"],
        ]);
        aggregate(&mut t, &spec(true), &mut Vec::new());

        let keys: Vec<&str> = t.rows().iter().map(|r| r.get(3)).collect();
        assert_eq!(keys, vec!["Émile", "émile", "frank", "zoe"]);
    }

    #[test]
    fn test_sort_places_punctuated_keys_first() {
        let mut t = table(&[
            ["1", "", "", "bank fee", "", "1"],
            ["2", "", "", "~pending", "", "2"],
            ["3", "", "", "(void)", "", "3"],
        ]);
        aggregate(&mut t, &spec(true), &mut Vec::new());

        let keys: Vec<&str> = t.rows().iter().map(|r| r.get(3)).collect();
        assert_eq!(keys, vec!["(void)", "~pending", "bank fee"]);
    }

    #[test]
    fn test_totals_round_halves_away_from_zero() {
        let mut t = table(&[
            ["", "", "", "A", "", "0.125"],
            ["", "", "", "B", "", "2.5e-1"],
            ["", "", "", "C", "", "-0"],
            ["", "", "", "D", "", "-0.625"],
        ]);
        aggregate(&mut t, &spec(false), &mut Vec::new());
        assert_eq!(totals(&t), vec!["0.13", "0.25", "0.00", "-0.63"]);
    }

    #[test]
    fn test_returns_appended_column_index() {
        let mut t = table(&[["", "", "", "A", "", "1"]]);
        let index = aggregate(&mut t, &spec(false), &mut Vec::new());
        assert_eq!(index, 6);
        assert_eq!(t.headers()[index], "Total");
    }

    #[test]
    fn test_insufficient_columns_appends_empty_total() {
        let mut t = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()]],
        )
        .unwrap();
        let mut warnings = Vec::new();
        let index = aggregate(&mut t, &spec(true), &mut warnings);

        assert_eq!(index, 2);
        assert_eq!(t.column_count(), 3);
        assert_eq!(t.get(0, 2), "");
        assert_eq!(warnings, vec![Warning::InsufficientColumnsForAggregation]);
    }

    #[test]
    fn test_group_totals_first_seen_order() {
        let t = table(&[
            ["", "", "", "B", "", "1"],
            ["", "", "", "A", "", "2"],
            ["", "", "", "B", "", "-4"],
        ]);
        let groups = group_totals(&t, 3, 5);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "B");
        assert_eq!(groups[0].total, -3.0);
        assert_eq!(groups[0].rows, 2);
        assert_eq!(groups[0].last_row, 2);
        assert_eq!(groups[1].key, "A");
    }
}
