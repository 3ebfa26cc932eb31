//! Shared helpers for benchmarks

use statement_grid::csv::{process, IngestLayout, Table};
use statement_grid::model::TableStore;

/// Statement text with `rows` data rows spread over `groups` names
#[allow(dead_code)]
pub fn make_statement(rows: usize, groups: usize) -> String {
    let mut text = String::with_capacity(rows * 64);
    for i in 0..10 {
        text.push_str(&format!("Account statement line {}\n", i + 1));
    }
    text.push_str("Id,Date,Ref,Memo,Bank,Name,Branch,Credit,Debit\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{},2024-01-{:02},R{},\"Card payment, ref {}\",X,=\"name{}\",Y,,{}.{:02}\n",
            i,
            i % 28 + 1,
            i,
            i,
            i % groups.max(1),
            i % 500,
            i % 100
        ));
    }
    text
}

/// Processed table with `rows` rows
#[allow(dead_code)]
pub fn make_table(rows: usize) -> Table {
    process(&make_statement(rows, 50), &IngestLayout::default())
        .expect("benchmark statement processes")
        .table
}

#[allow(dead_code)]
pub fn make_store(rows: usize) -> TableStore {
    TableStore::new(make_table(rows), 20)
}
