use anyhow::{bail, Context, Result};
use clap::Parser;

use statement_grid::config::GridConfig;
use statement_grid::messages::{AppMsg, Msg};
use statement_grid::notify::{BusEvent, NotificationKind};
use statement_grid::report::{JsonSummary, ReportGenerator, ReportInput};

mod cli;
mod runtime;

use cli::{CliArgs, StartupConfig};
use runtime::script::{parse_script, ScriptAction};
use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    statement_grid::tracing::init(args.quiet);

    let startup = args.into_config().map_err(anyhow::Error::msg)?;
    let config = match &startup.config_path {
        Some(path) => GridConfig::load_from(path),
        None => GridConfig::load(),
    };

    let (width, height) = startup.container;
    let mut app = App::new(config, width, height);

    let quiet = startup.quiet;
    app.model_mut().notifications.subscribe(move |event| {
        if let BusEvent::Published(n) = event {
            if !quiet || n.kind == NotificationKind::Error {
                eprintln!("{}", n);
            }
        }
    });

    let result = run(&mut app, &startup);
    app.shutdown();
    result
}

fn run(app: &mut App, startup: &StartupConfig) -> Result<()> {
    app.dispatch(Msg::App(AppMsg::LoadFile(startup.file.clone())));
    app.wait_idle()?;

    let Some(doc) = app.model().document.as_ref() else {
        bail!("Could not load {}", startup.file.display());
    };
    if !startup.quiet {
        for warning in &doc.warnings {
            eprintln!("note: {}", warning);
        }
    }

    if let Some(script_path) = &startup.script {
        let text = std::fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script {}", script_path.display()))?;
        let actions = parse_script(&text)
            .with_context(|| format!("Invalid script {}", script_path.display()))?;

        for action in actions {
            match action {
                ScriptAction::Send(msg) => {
                    app.dispatch(msg);
                    app.wait_idle()?;
                }
                ScriptAction::PrintWindow => print_window(app),
                ScriptAction::PrintSummary => print_summary(app)?,
            }
        }
    }

    if let Some(output) = &startup.output {
        app.dispatch(Msg::App(AppMsg::Export {
            path: Some(output.clone()),
        }));
        app.wait_idle()?;
        if app.model().ui.last_export.as_ref() != Some(output) {
            bail!("Export to {} failed", output.display());
        }
    }

    Ok(())
}

fn print_window(app: &App) {
    let window = app.model().render_window();
    println!(
        "rows {}..{} cols {}..{}",
        window.rows.start, window.rows.end, window.cols.start, window.cols.end
    );
}

fn print_summary(app: &App) -> Result<()> {
    let model = app.model();
    let Some(doc) = model.document.as_ref() else {
        bail!("No statement loaded");
    };
    let input = ReportInput::from_document(doc);
    println!("{}", JsonSummary.generate(&input)?);
    Ok(())
}
