//! Line-oriented command scripts
//!
//! One command per line; `#` starts a comment. Most commands become grid or
//! app messages; `window` and `summary` are answered by the host.
//!
//! ```text
//! select-row 3
//! select-row 7 range
//! sort 2
//! delete-rows
//! undo
//! export out.csv
//! ```

use std::fmt;
use std::path::PathBuf;

use statement_grid::messages::{AppMsg, GridMsg, Msg};

/// A parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptAction {
    Send(Msg),
    /// Print the current render window
    PrintWindow,
    /// Print the JSON summary
    PrintSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Parse a whole script, stopping at the first bad line
pub fn parse_script(text: &str) -> Result<Vec<ScriptAction>, ScriptError> {
    let mut actions = Vec::new();
    for (i, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(action)) => actions.push(action),
            Ok(None) => {}
            Err(message) => {
                return Err(ScriptError {
                    line: i + 1,
                    message,
                })
            }
        }
    }
    Ok(actions)
}

/// Parse one line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ScriptAction>, String> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let grid = |msg: GridMsg| Ok(Some(ScriptAction::Send(Msg::Grid(msg))));

    match command {
        "select-row" | "select-col" => {
            let (index, multi, range) = parse_toggle(command, &args)?;
            if command == "select-row" {
                grid(GridMsg::ToggleRow {
                    index,
                    multi,
                    range,
                })
            } else {
                grid(GridMsg::ToggleColumn {
                    index,
                    multi,
                    range,
                })
            }
        }
        "select-all-rows" => no_args(command, &args).and(grid(GridMsg::SelectAllRows)),
        "select-all-cols" => no_args(command, &args).and(grid(GridMsg::SelectAllColumns)),
        "clear-selection" => no_args(command, &args).and(grid(GridMsg::ClearSelection)),
        "sort" => {
            let [column] = exact::<1>(command, &args)?;
            grid(GridMsg::SortBy(parse_index(column)?))
        }
        "clear-sort" => no_args(command, &args).and(grid(GridMsg::ClearSort)),
        "delete-rows" => no_args(command, &args).and(grid(GridMsg::DeleteSelectedRows)),
        "delete-cols" => no_args(command, &args).and(grid(GridMsg::DeleteSelectedColumns)),
        "undo" => no_args(command, &args).and(grid(GridMsg::Undo)),
        "redo" => no_args(command, &args).and(grid(GridMsg::Redo)),
        "scroll" => {
            let [top, left] = exact::<2>(command, &args)?;
            grid(GridMsg::Scroll {
                top: parse_pixels(top)?,
                left: parse_pixels(left)?,
            })
        }
        "resize" => {
            let [width, height] = exact::<2>(command, &args)?;
            Ok(Some(ScriptAction::Send(Msg::App(AppMsg::Resize {
                width: parse_pixels(width)?,
                height: parse_pixels(height)?,
            }))))
        }
        "export" => {
            if args.len() > 1 {
                return Err("export takes at most one path".to_string());
            }
            Ok(Some(ScriptAction::Send(Msg::App(AppMsg::Export {
                path: args.first().map(PathBuf::from),
            }))))
        }
        "window" => no_args(command, &args).map(|_| Some(ScriptAction::PrintWindow)),
        "summary" => no_args(command, &args).map(|_| Some(ScriptAction::PrintSummary)),
        other => Err(format!("unknown command '{}'", other)),
    }
}

fn parse_toggle(command: &str, args: &[&str]) -> Result<(usize, bool, bool), String> {
    let (index, modifier) = match args {
        [index] => (index, None),
        [index, modifier] => (index, Some(*modifier)),
        _ => return Err(format!("{} expects an index and optional multi|range", command)),
    };
    let (multi, range) = match modifier {
        None => (false, false),
        Some("multi") => (true, false),
        Some("range") => (false, true),
        Some(other) => return Err(format!("unknown modifier '{}'", other)),
    };
    Ok((parse_index(index)?, multi, range))
}

fn no_args(command: &str, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(format!("{} takes no arguments", command))
    }
}

fn exact<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args).map_err(|_| format!("{} expects {} argument(s)", command, N))
}

fn parse_index(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("'{}' is not a valid index", value))
}

fn parse_pixels(value: &str) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("'{}' is not a valid pixel value", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(msg: GridMsg) -> Option<ScriptAction> {
        Some(ScriptAction::Send(Msg::Grid(msg)))
    }

    #[test]
    fn test_select_variants() {
        assert_eq!(
            parse_line("select-row 3"),
            Ok(grid(GridMsg::ToggleRow {
                index: 3,
                multi: false,
                range: false
            }))
        );
        assert_eq!(
            parse_line("select-col 1 multi"),
            Ok(grid(GridMsg::ToggleColumn {
                index: 1,
                multi: true,
                range: false
            }))
        );
        assert_eq!(
            parse_line("  select-row 7 range  # extend"),
            Ok(grid(GridMsg::ToggleRow {
                index: 7,
                multi: false,
                range: true
            }))
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# only a comment"), Ok(None));
    }

    #[test]
    fn test_host_actions() {
        assert_eq!(parse_line("window"), Ok(Some(ScriptAction::PrintWindow)));
        assert_eq!(parse_line("summary"), Ok(Some(ScriptAction::PrintSummary)));
    }

    #[test]
    fn test_export_path_optional() {
        assert_eq!(
            parse_line("export"),
            Ok(Some(ScriptAction::Send(Msg::App(AppMsg::Export {
                path: None
            }))))
        );
        assert_eq!(
            parse_line("export out/may.csv"),
            Ok(Some(ScriptAction::Send(Msg::App(AppMsg::Export {
                path: Some(PathBuf::from("out/may.csv"))
            }))))
        );
    }

    #[test]
    fn test_scroll_and_resize() {
        assert_eq!(
            parse_line("scroll 350 0"),
            Ok(grid(GridMsg::Scroll {
                top: 350.0,
                left: 0.0
            }))
        );
        assert!(parse_line("resize 800").is_err());
        assert!(parse_line("scroll NaN 0").is_err());
    }

    #[test]
    fn test_errors() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("undo now").is_err());
        assert!(parse_line("select-row x").is_err());
        assert!(parse_line("select-row 1 sideways").is_err());
        assert!(parse_line("sort").is_err());
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("undo\n\nsort 1\nbogus\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.to_string(), "line 4: unknown command 'bogus'");

        let actions = parse_script("select-row 0\ndelete-rows\nundo\n").unwrap();
        assert_eq!(actions.len(), 3);
    }
}
