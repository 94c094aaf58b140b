mod catalog;
mod reports;
mod scenarios;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use catalog::{CatalogResult, run_catalog};
use reports::AuditReport;
use scenarios::{ScenarioResult, get_scenario, list_scenarios, run_scenario};
use tentaclegrid_game::{DeviceClass, DeviceProfile, EnvironmentSnapshot, HostSignals, ShellView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "tentaclegrid-tester", version)]
#[command(about = "Audit Tentacle Grid device detection, profiles, and the rotate gate")]
struct Args {
    /// Classify a single user agent and print its profile
    #[arg(long)]
    user_agent: Option<String>,

    /// Viewport width used with --user-agent
    #[arg(long, default_value_t = 844.0)]
    width: f64,

    /// Viewport height used with --user-agent
    #[arg(long, default_value_t = 390.0)]
    height: f64,

    /// Device pixel ratio used with --user-agent
    #[arg(long, default_value_t = 2.0)]
    pixel_ratio: f64,

    /// Treat the --user-agent device as held in portrait
    #[arg(long)]
    portrait: bool,

    /// Run the built-in user-agent catalog
    #[arg(long)]
    catalog: bool,

    /// Shell scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    if let Some(user_agent) = args.user_agent.as_deref() {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        write_classification(&mut output_target, &args, user_agent)?;
        output_target.flush_inner()?;
        return Ok(());
    }

    if args.report == ReportFormat::Console && args.output.is_none() {
        announce_banner();
    }

    let start_time = Instant::now();
    let catalog = run_catalog_if_requested(&args);
    let scenario_results = run_scenarios(&expand_scenarios(&args.scenarios))?;

    if catalog.is_empty() && scenario_results.is_empty() {
        eprintln!(
            "⚠️  Nothing to run; pass {}, {}, or {}",
            "--catalog".yellow(),
            "--scenarios".yellow(),
            "--user-agent".yellow()
        );
    }

    let report = AuditReport {
        catalog: &catalog,
        scenarios: &scenario_results,
    };
    write_report(&args, &report, start_time)?;

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🐙 Tentacle Grid Device Auditor".bright_cyan().bold());
    println!("{}", "===============================".cyan());
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn run_catalog_if_requested(args: &Args) -> Vec<CatalogResult> {
    if !args.catalog {
        return Vec::new();
    }
    let results = run_catalog();
    if args.verbose {
        for result in &results {
            log::info!("{} -> {:?}", result.key, result.profile);
        }
    }
    results
}

fn run_scenarios(keys: &[String]) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(scenario) = get_scenario(key) else {
            bail!("unknown scenario: {key} (see --list-scenarios)");
        };
        results.push(run_scenario(&scenario));
    }
    Ok(results)
}

fn classify(args: &Args, user_agent: &str) -> (EnvironmentSnapshot, DeviceProfile) {
    let snapshot = EnvironmentSnapshot::from_signals(&HostSignals {
        user_agent: Some(user_agent.to_string()),
        viewport_width: Some(args.width),
        viewport_height: Some(args.height),
        device_pixel_ratio: Some(args.pixel_ratio),
        portrait: Some(args.portrait),
    });
    (snapshot, DeviceProfile::resolve(&snapshot))
}

fn write_classification<W: Write>(writer: &mut W, args: &Args, user_agent: &str) -> Result<()> {
    let (snapshot, profile) = classify(args, user_agent);
    match args.report {
        ReportFormat::Json => {
            let value = serde_json::json!({
                "snapshot": snapshot,
                "profile": profile,
                "class": DeviceClass::of(&snapshot).label(),
                "view": ShellView::for_profile(&profile).label(),
            });
            writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        ReportFormat::Console | ReportFormat::Markdown => {
            writeln!(writer, "User agent: {user_agent}")?;
            writeln!(writer, "Class: {}", DeviceClass::of(&snapshot).label())?;
            writeln!(
                writer,
                "Mobile: {}  Safari: {}  Portrait: {}",
                snapshot.is_mobile_user_agent, snapshot.is_safari_engine, snapshot.is_portrait
            )?;
            writeln!(
                writer,
                "Grid: {}x{}  Effects: {}  Render scale: {}",
                profile.grid_columns,
                profile.grid_rows,
                profile.max_concurrent_effects,
                profile.render_scale
            )?;
            writeln!(
                writer,
                "View: {}",
                ShellView::for_profile(&profile).label()
            )?;
        }
    }
    Ok(())
}

fn write_report(args: &Args, report: &AuditReport<'_>, start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, report)?,
        ReportFormat::Markdown => reports::generate_markdown_report(&mut output_target, report)?,
        ReportFormat::Console => {
            reports::generate_console_report(&mut output_target, report, start_time.elapsed())?;
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

/// Report sink; stdout unless `--output` names a file.
enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
