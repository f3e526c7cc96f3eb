use std::path::PathBuf;
use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use tokio::io::BufReader;

use crate::catalog::{self, Catalog};
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output::console::{self, Console};
use crate::output::html::{self, HtmlOptions};
use crate::output::presenter::{SnapshotPresenter, TerminalPresenter};
use crate::output::{self, Labels, OutputFormat, DEFAULT_AVATAR_TEMPLATE};
use crate::session::{self, Session, HELP};

fn print_banner() {
    const BANNER: &str = r#"
                                          __          __
  _________  __  ________________  ____/ /__  _____/ /__
 / ___/ __ \/ / / / ___/ ___/ _ \/ __  / _ \/ ___/ //_/
/ /__/ /_/ / /_/ / /  (__  )  __/ /_/ /  __/ /__/ ,<
\___/\____/\__,_/_/  /____/\___/\__,_/\___/\___/_/|_|
       v0.1.0 - course catalog browser
    "#;
    eprint!("{}", BANNER);
    eprintln!();
}

fn format_opt_value<'a>(v: &'a str, default: &'a str) -> &'a str {
    if v.trim().is_empty() {
        default
    } else {
        v
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    catalog_path: Option<String>,
    location: Option<String>,
    base_path: String,
    output: Option<String>,
    output_format: OutputFormat,
    interactive: bool,
    reveal: usize,
    debounce: Duration,
    columns: usize,
    avatar_template: String,
    labels: Labels,
    force_color: bool,
    no_color: bool,
    verbosity: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let catalog_path = args
        .catalog
        .or(cfg.catalog)
        .map(|p| config::expand_tilde_string(&p));

    let location = args.url.or(cfg.location);

    let base_path = args
        .base_path
        .or(cfg.base_path)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string());
    if base_path.contains('?') || base_path.contains('#') {
        return Err(format!(
            "invalid base-path '{base_path}': must not contain '?' or '#'"
        ));
    }

    let interactive = args.interactive || cfg.interactive.unwrap_or(false);

    let reveal = args.reveal.or(cfg.reveal).unwrap_or(0);
    validation::validate_reveal(reveal)?;

    let debounce_ms = args
        .debounce_ms
        .or(cfg.debounce_ms)
        .unwrap_or(crate::debounce::DEFAULT_QUIESCENCE.as_millis() as u64);
    validation::validate_debounce(debounce_ms)?;

    let columns = args
        .columns
        .or(cfg.columns)
        .unwrap_or(crate::nav::DEFAULT_COLUMNS);
    validation::validate_columns(columns)?;

    let avatar_template = args
        .avatar_template
        .or(cfg.avatar_template)
        .unwrap_or_else(|| DEFAULT_AVATAR_TEMPLATE.to_string());
    validation::validate_avatar_template(&avatar_template)?;

    let output_path = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    if interactive && output_path.is_some() {
        return Err("use either interactive mode or output, not both".to_string());
    }

    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output-format '{raw}': expected text, json or html"))?,
        None => output_path
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    Ok(RunConfig {
        catalog_path,
        location,
        base_path,
        output: output_path,
        output_format,
        interactive,
        reveal,
        debounce: Duration::from_millis(debounce_ms),
        columns,
        avatar_template,
        labels: cfg.labels.unwrap_or_default(),
        force_color: args.color,
        no_color,
        verbosity: args.verbose,
    })
}

fn load_catalog(run: &RunConfig, console: &Console) -> Result<Catalog, String> {
    match run.catalog_path.as_deref() {
        Some(path) => {
            let catalog = catalog::load_catalog(&PathBuf::from(path)).map_err(|e| e.to_string())?;
            console.debug(format!("loaded {} courses from {path}", catalog.len()));
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn render_snapshot(run: &RunConfig, snapshot: &output::Snapshot) -> Vec<u8> {
    match run.output_format {
        OutputFormat::Text => output::render_text(snapshot, &run.labels),
        OutputFormat::Json => output::render_json(snapshot),
        OutputFormat::Html => html::render_page(
            snapshot,
            &HtmlOptions {
                labels: &run.labels,
                avatar_template: &run.avatar_template,
            },
        ),
    }
}

/// Restores the view from the location, applies `reveal` load-more presses
/// and writes the last render once.
fn run_once(run: &RunConfig, catalog: Catalog, console: &Console) -> Result<(), String> {
    let mut builder = Session::builder()
        .catalog(catalog)
        .presenter(SnapshotPresenter::new(run.labels.clone()))
        .base_path(run.base_path.clone())
        .columns(run.columns)
        .labels(run.labels.clone());
    if let Some(location) = run.location.as_deref() {
        builder = builder.location(location);
    }
    let mut session = builder.build().map_err(|e| e.to_string())?;
    session.start();
    for pressed in 0..run.reveal {
        if session.reveal_more().is_none() {
            console.debug(format!("all matches shown after {pressed} load-more presses"));
            break;
        }
    }

    let presenter = session.into_presenter();
    console.debug(format!("{} renders before output", presenter.renders()));
    let snapshot = presenter
        .into_snapshot()
        .ok_or_else(|| "session produced no render".to_string())?;
    let rendered = render_snapshot(run, &snapshot);

    match run.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| format!("failed to write output file '{path}': {e}"))?;
            console.info(format!(
                "wrote {} of {} courses to {path}",
                snapshot.shown, snapshot.total
            ));
        }
        None => {
            print!("{}", String::from_utf8_lossy(&rendered));
        }
    }
    Ok(())
}

async fn run_interactive(run: RunConfig, catalog: Catalog, console: Console) -> Result<(), String> {
    let mut builder = Session::builder()
        .catalog(catalog)
        .presenter(TerminalPresenter::new(run.labels.clone()))
        .base_path(run.base_path.clone())
        .columns(run.columns)
        .labels(run.labels.clone());
    if let Some(location) = run.location.as_deref() {
        builder = builder.location(location);
    }
    let mut session = builder.build().map_err(|e| e.to_string())?;

    console.info(HELP);
    session.start();

    let input = BufReader::new(tokio::io::stdin());
    let summary = session::drive(&mut session, input, run.debounce)
        .await
        .map_err(|e| e.to_string())?;

    console.debug(format!(
        "{} commands read, {} searches applied",
        summary.commands, summary.searches
    ));
    console.kv("Location", session.location());
    Ok(())
}

fn execute(run: RunConfig) -> Result<(), String> {
    console::apply_color_choice(run.force_color, run.no_color);
    let console = Console::new(run.verbosity);

    if run.interactive || run.verbosity > 0 {
        print_banner();
    }

    let catalog = load_catalog(&run, &console)?;
    if catalog.is_empty() {
        console.warn("catalog is empty, every view will show no results");
    }

    if console.verbosity() > 0 {
        console.kv("Catalog", &format!("{} courses", catalog.len()));
        console.kv(
            "Location",
            format_opt_value(run.location.as_deref().unwrap_or_default(), "(none)"),
        );
        console.kv("Base path", &run.base_path);
        console.kv("Debounce", &format!("{}ms", run.debounce.as_millis()));
        console.kv("Columns", &run.columns.to_string());
    }

    if !run.interactive {
        return run_once(&run, catalog, &console);
    }

    // one thread: every state change happens on the event loop
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;
    rt.block_on(run_interactive(run, catalog, console))
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        let path = match args.config.as_deref() {
            Some(p) => config::expand_tilde(p),
            None => config::default_config_path()
                .ok_or_else(|| "cannot locate home directory for config".to_string())?,
        };
        let created = config::ensure_default_config_file(&path)?;
        let console = Console::default();
        if created {
            console.info(format!("wrote default config to {}", path.display()));
        } else {
            console.warn(format!("config already exists at {}", path.display()));
        }
        return Ok(());
    }

    let cfg = match args.config.as_deref() {
        Some(p) => config::load_config(&config::expand_tilde(p), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run_config = build_run_config(args, cfg)?;
    execute(run_config)
}
