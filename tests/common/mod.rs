//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::PathBuf;

use statement_grid::config::GridConfig;
use statement_grid::csv::{process, IngestLayout, Table};
use statement_grid::messages::{AppMsg, Msg};
use statement_grid::model::{AppModel, TableStore};
use statement_grid::update::update;

/// Raw header line in the statement layout
pub const RAW_HEADER: &str = "Id,Date,Ref,Memo,Bank,Name,Branch,Credit,Debit";

/// Build statement text: ten preamble lines, the header, then `data`
pub fn statement(data: &[&str]) -> String {
    let mut text = String::new();
    for i in 0..10 {
        text.push_str(&format!("Account statement line {}\n", i + 1));
    }
    text.push_str(RAW_HEADER);
    text.push('\n');
    for line in data {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// A small statement with two groups
pub fn sample_statement() -> String {
    statement(&[
        "1,2024-01-02,R1,Coffee,X,bob,Y,,4.50",
        "2,2024-01-03,R2,Lunch,X,alice,Y,,12",
        "3,2024-01-04,R3,Tea,X,bob,Y,,2.25",
        "4,2024-01-05,R4,Rent,X,carol,Y,,900",
        "5,2024-01-06,R5,Books,X,alice,Y,,30.10",
    ])
}

/// Processed table for `sample_statement`
pub fn sample_table() -> Table {
    process(&sample_statement(), &IngestLayout::default())
        .expect("sample statement processes")
        .table
}

/// Table with `rows` rows and `cols` columns of "r{row}c{col}" cells
pub fn grid_table(rows: usize, cols: usize) -> Table {
    let headers = (0..cols).map(|c| format!("H{}", c)).collect();
    let cells = (0..rows)
        .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
        .collect();
    Table::new(headers, cells).expect("rectangular")
}

pub fn store(table: Table) -> TableStore {
    TableStore::new(table, GridConfig::default().max_history_size)
}

pub fn indices(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

/// Write `content` to a temp file with the given suffix
pub fn temp_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    std::fs::write(file.path(), content).expect("write temp file");
    file
}

/// Model with the sample statement loaded, bypassing the worker thread
pub fn loaded_model() -> AppModel {
    let mut model = AppModel::new(GridConfig::default(), 1000.0, 600.0);
    let path = PathBuf::from("/tmp/sample.csv");
    let content = sample_statement();
    load_into(&mut model, path, content);
    model
}

/// Drive LoadFile-style completion directly: allocate a request and answer it
pub fn load_into(model: &mut AppModel, path: PathBuf, content: String) {
    let request = model.ui.begin_load();
    let size = content.len() as u64;
    update(
        model,
        Msg::App(AppMsg::FileLoaded {
            request,
            path,
            size,
            result: Ok(content),
        }),
    );
}
