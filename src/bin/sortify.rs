//! sortify - Sort import lines, optionally keeping them under their comments
//!
//! Usage:
//!   sortify -f app.js -o app.sorted.js
//!   sortify -f app.js --in-place --mode group
//!   sortify -f app.js --in-place --ask
//!   sortify -d ./src --pattern '**/*.ts' --check
//!   cat app.js | sortify --mode preserve > app.sorted.js

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use sortify::config::{self, SortifyConfig};
use sortify::prompt;
use sortify::reorganizer::{ReorganizeOptions, ReorganizeReport, Reorganizer, SortMode};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Sort imports within each comment block
    Preserve,
    /// Collect all imports into one sorted block at the top
    Group,
}

impl From<ModeArg> for SortMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Preserve => SortMode::Preserve,
            ModeArg::Group => SortMode::Group,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportFormat {
    /// JSON format
    Json,
    /// Human-readable text
    Text,
}

#[derive(ClapParser)]
#[command(
    version,
    about = "Sort import lines in source files",
    long_about = "Sorts import lines with one of two modes:\n\n\
                  - preserve: sort imports within the block of the comment above them;\n  \
                  lines before the first comment are dropped\n\
                  - group: move all imports to one sorted block at the top;\n  \
                  comments and blank lines are dropped\n\n\
                  If no input file is specified, reads from stdin.\n\
                  If no output file is specified, writes to stdout."
)]
struct Cli {
    /// Input file (reads from stdin if not specified)
    #[arg(short, long, value_name = "FILE", conflicts_with = "directory")]
    file: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long, value_name = "OUTPUT", conflicts_with_all = ["in_place", "directory"])]
    output: Option<PathBuf>,

    /// Rewrite the input file
    #[arg(short, long)]
    in_place: bool,

    /// Sort mode (defaults to the config file, then preserve)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Ask whether to preserve comment blocks
    #[arg(long, conflicts_with = "mode")]
    ask: bool,

    /// Sort every matching file in a directory, in place
    #[arg(short, long, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// File pattern for directory mode
    #[arg(long)]
    pattern: Option<String>,

    /// Exit with status 1 if any input would change; write nothing
    #[arg(long)]
    check: bool,

    /// Show what would change without writing
    #[arg(long)]
    dry_run: bool,

    /// Write a report
    #[arg(long, value_name = "REPORT_FILE")]
    report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportFormat,

    /// Config file (defaults to $XDG_CONFIG_HOME/sortify/sortify.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// debug log file
    #[arg(long, value_name = "FILE")]
    debuglogfile: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn init_logger(filter_level: log::LevelFilter, logfile: Option<&Path>) -> Result<()> {
    let mut loggers = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>];
    if let Some(filename) = logfile {
        let file = File::create(filename)
            .with_context(|| format!("failed to create log file {}", filename.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        ) as Box<dyn simplelog::SharedLogger>);
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

fn load_config(args: &Cli) -> Result<SortifyConfig> {
    let loaded = match &args.config {
        Some(path) => Some(config::load_config_from(path)?),
        None => config::load_config()?,
    };
    Ok(match loaded {
        Some(l) => {
            log::debug!("using config {}", l.path.display());
            l.config
        }
        None => SortifyConfig::default(),
    })
}

/// `None` when the user declined to pick a mode.
fn resolve_mode(args: &Cli, config: &SortifyConfig) -> Result<Option<SortMode>> {
    if let Some(mode) = args.mode {
        return Ok(Some(mode.into()));
    }
    if args.ask || config.ask {
        if args.file.is_none() && args.directory.is_none() {
            if args.ask {
                bail!("--ask needs --file or --directory, stdin carries the document");
            }
            log::debug!("not asking for a mode: stdin carries the document");
            return Ok(Some(config.mode_or_default()));
        }
        let stdin = io::stdin();
        let mode = prompt::ask_mode(stdin.lock(), io::stderr())?;
        return Ok(mode);
    }
    Ok(Some(config.mode_or_default()))
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose.log_level_filter(), args.debuglogfile.as_deref())?;

    let config = load_config(&args)?;
    let Some(mode) = resolve_mode(&args, &config)? else {
        log::info!("Sorting canceled by the user.");
        return Ok(());
    };
    log::debug!("sorting with mode {}", mode);

    let reorganizer = Reorganizer::new(ReorganizeOptions::new(mode));

    let ok = match &args.directory {
        Some(dir) => {
            let pattern = args
                .pattern
                .as_deref()
                .unwrap_or_else(|| config.pattern_or_default());
            batch_sort(&reorganizer, dir, pattern, &args)?
        }
        None => sort_single(&reorganizer, &args)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Returns `false` when `--check` found a change.
fn sort_single(reorganizer: &Reorganizer, args: &Cli) -> Result<bool> {
    if args.in_place && args.file.is_none() {
        bail!("--in-place needs --file");
    }

    let (input_content, input_name) = match &args.file {
        Some(path) => (
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            (buffer, "stdin".to_string())
        }
    };

    let result = reorganizer.reorganize(&input_content, &input_name);

    if let Some(report_path) = &args.report {
        write_report(&result.report, report_path, args.report_format)?;
        log::info!("Report written to {}", report_path.display());
    }

    if args.check {
        if result.report.statistics.changed {
            log::warn!("{} would change", input_name);
            return Ok(false);
        }
        log::info!("{} is already sorted", input_name);
        return Ok(true);
    }

    if args.dry_run {
        eprintln!("\n{}", result.report.to_text());
        return Ok(true);
    }

    let target = match (&args.output, &args.file) {
        (Some(output), _) => Some(output.as_path()),
        (None, Some(file)) if args.in_place => Some(file.as_path()),
        _ => None,
    };

    match target {
        Some(path) => {
            if args.in_place && !result.report.statistics.changed {
                log::info!("{} is already sorted", input_name);
                return Ok(true);
            }
            let mut writer = BufWriter::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            );
            writer.write_all(result.content.as_bytes())?;
            writer.flush()?;
            log::info!("Imports sorted successfully! ({})", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            writer.write_all(result.content.as_bytes())?;
            writer.flush()?;
        }
    }

    Ok(true)
}

/// Returns `false` if any file failed, or `--check` found a change.
fn batch_sort(reorganizer: &Reorganizer, dir: &Path, pattern: &str, args: &Cli) -> Result<bool> {
    let start_time = Instant::now();
    let mut failed = 0;
    let mut changed = 0;
    let mut reports = Vec::new();

    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.display().to_string()),
        pattern
    );
    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid pattern {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => entries.push(path),
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read {}: {}", e.path().display(), e.error());
                failed += 1;
            }
        }
    }

    if entries.is_empty() && failed == 0 {
        log::warn!("no files match {}", pattern);
    }

    for path in &entries {
        let input_content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to read {}: {}", path.display(), e);
                failed += 1;
                continue;
            }
        };

        let result = reorganizer.reorganize(&input_content, &path.display().to_string());

        if result.report.statistics.changed {
            changed += 1;
            if args.check {
                log::warn!("{} would change", path.display());
            } else if !args.dry_run {
                if let Err(e) = fs::write(path, &result.content) {
                    log::error!("Failed to write {}: {}", path.display(), e);
                    failed += 1;
                    reports.push(result.report);
                    continue;
                }
                log::info!("Imports sorted successfully! ({})", path.display());
            }
        }

        if args.dry_run {
            for dropped in &result.report.dropped {
                log::info!("  {}: {}", path.display(), dropped);
            }
        }
        reports.push(result.report);
    }

    let duration = start_time.elapsed();

    eprintln!("\nSort Summary");
    eprintln!("============");
    eprintln!("Files processed: {}", entries.len());
    eprintln!("Changed:         {}", changed);
    eprintln!("Failed:          {}", failed);
    eprintln!("Duration:        {:?}", duration);
    if args.dry_run || args.check {
        eprintln!("\n(No files were written)");
    }

    if let Some(report_path) = &args.report {
        let batch_report = BatchReport {
            directory: dir.display().to_string(),
            mode: reorganizer.mode(),
            files_processed: entries.len(),
            files_changed: changed,
            files_failed: failed,
            duration_ms: duration.as_millis() as u64,
            files: reports,
        };
        let content = match args.report_format {
            ReportFormat::Json => serde_json::to_string_pretty(&batch_report)?,
            ReportFormat::Text => format_batch_report_text(&batch_report),
        };
        fs::write(report_path, content)
            .with_context(|| format!("failed to write {}", report_path.display()))?;
        log::info!("Report written to {}", report_path.display());
    }

    Ok(failed == 0 && !(args.check && changed > 0))
}

fn write_report(report: &ReorganizeReport, path: &Path, format: ReportFormat) -> Result<()> {
    let content = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Text => report.to_text(),
    };
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[derive(serde::Serialize)]
struct BatchReport {
    directory: String,
    mode: SortMode,
    files_processed: usize,
    files_changed: usize,
    files_failed: usize,
    duration_ms: u64,
    files: Vec<ReorganizeReport>,
}

fn format_batch_report_text(report: &BatchReport) -> String {
    let mut output = String::new();

    output.push_str("Batch Sort Report\n");
    output.push_str("=================\n");
    output.push_str(&format!("Directory: {}\n", report.directory));
    output.push_str(&format!("Mode:      {}\n", report.mode));
    output.push_str(&format!("Duration:  {}ms\n\n", report.duration_ms));

    output.push_str("Summary\n");
    output.push_str("-------\n");
    output.push_str(&format!("Files processed:  {}\n", report.files_processed));
    output.push_str(&format!("Changed:          {}\n", report.files_changed));
    output.push_str(&format!("Failed:           {}\n\n", report.files_failed));

    output.push_str("Files\n");
    output.push_str("-----\n");
    for file in &report.files {
        let status_icon = if file.statistics.changed { "✎" } else { "✓" };
        output.push_str(&format!(
            "{} {} ({} imports, {} dropped)\n",
            status_icon,
            file.input_file,
            file.statistics.import_lines,
            file.dropped.len()
        ));
    }

    output
}
