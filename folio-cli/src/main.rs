use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the project list, optionally filtered by category.
    Projects(ProjectsArgs),
    /// Sample an ambient shape field at a point in time.
    Field(FieldArgs),
    /// Replay a pointer script through the cursor and print one frame per line.
    Trace(TraceArgs),
    /// Print the effective motion config.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ProjectsArgs {
    /// Category id: all, web or backend.
    #[arg(long, default_value = "all")]
    category: String,
}

#[derive(Parser, Debug)]
struct FieldArgs {
    /// Preset name: hero, skills or projects.
    #[arg(long, default_value = "hero")]
    preset: String,

    /// Generation seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Sample time in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Container width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Container height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input pointer script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulation frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seconds to keep simulating after the last step.
    #[arg(long, default_value_t = 1.0)]
    tail: f64,

    /// Motion config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Validate and print this config instead of the defaults.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(serde::Deserialize, Debug)]
struct TraceScript {
    viewport: folio::Size,
    steps: Vec<TraceStep>,
}

#[derive(serde::Deserialize, Debug)]
struct TraceStep {
    at: f64,
    event: folio::HostEvent,
}

#[derive(serde::Serialize)]
struct TraceLine {
    frame: u64,
    time: f64,
    cursor: Option<folio::CursorFrame>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Projects(args) => cmd_projects(args),
        Command::Field(args) => cmd_field(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("serialize output")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_projects(args: ProjectsArgs) -> anyhow::Result<()> {
    let category: folio::Category = args
        .category
        .parse()
        .with_context(|| format!("parse category '{}'", args.category))?;
    let projects = folio::filter_projects(&folio::PROJECTS, category);
    tracing::info!(category = %category, count = projects.len(), "filtered projects");
    print_json(&projects)
}

fn cmd_field(args: FieldArgs) -> anyhow::Result<()> {
    let spec = folio::FieldSpec::preset(&args.preset)
        .with_context(|| format!("load field preset '{}'", args.preset))?;
    let field = folio::AmbientField::generate(spec, args.seed)?;
    let frame = field.sample(args.at, folio::Size::new(args.width, args.height));
    print_json(&frame)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => folio::MotionConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => folio::MotionConfig::default(),
    };
    let script = read_script(&args.in_path)?;
    let fps = folio::Fps::new(args.fps, 1)?;
    anyhow::ensure!(
        args.tail.is_finite() && args.tail >= 0.0,
        "--tail must be a non-negative number of seconds"
    );

    let end = script.steps.last().map_or(0.0, |s| s.at) + args.tail;
    let frames = fps.secs_to_frames_floor(end) + 1;
    let dt = fps.frame_duration_secs();

    let hub = folio::EventHub::new();
    let mut overlay = folio::CursorOverlay::mount(&hub, &cfg, script.viewport);
    let mut steps = script.steps.iter().peekable();

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    for frame in 0..frames {
        let time = fps.frames_to_secs(frame);
        while let Some(step) = steps.next_if(|s| s.at <= time) {
            hub.dispatch(&step.event);
        }
        let line = TraceLine {
            frame,
            time,
            cursor: overlay.tick(dt),
        };
        serde_json::to_writer(&mut out, &line).context("serialize trace frame")?;
        writeln!(out)?;
    }
    out.flush()?;

    eprintln!("traced {frames} frames from {}", args.in_path.display());
    Ok(())
}

fn read_script(path: &std::path::Path) -> anyhow::Result<TraceScript> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open pointer script '{}'", path.display()))?;
    let script: TraceScript = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parse pointer script '{}'", path.display()))?;

    anyhow::ensure!(
        script.viewport.width > 0.0 && script.viewport.height > 0.0,
        "pointer script viewport must be non-empty"
    );
    let mut last = 0.0;
    for (i, step) in script.steps.iter().enumerate() {
        anyhow::ensure!(
            step.at.is_finite() && step.at >= last,
            "pointer script step {i} is out of order (at = {})",
            step.at
        );
        last = step.at;
    }
    Ok(script)
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = match &args.in_path {
        Some(path) => folio::MotionConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => folio::MotionConfig::default(),
    };
    print_json(&cfg)
}
