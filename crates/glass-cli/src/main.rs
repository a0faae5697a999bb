//! Glass dial CLI - inspect, render and animate the budget dial.

#![allow(clippy::needless_pass_by_value)]

use clap::{Args, Parser, Subcommand};
use glass_core::{Color, FrameClock, RecordingCanvas, Rect, Size, SvgRenderer, Widget};
use glass_dial::{BudgetDial, BudgetSnapshot, DialConfig, DialGeometry, Mode};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "glass-dial")]
#[command(about = "Preview the dual-ring budget dial")]
#[command(version)]
struct Cli {
    /// Dial config file (.toml, .yaml or .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print ring states, sentiment and geometry as JSON
    Inspect {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// Paint the settled dial to an SVG file
    Render {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Output file
        #[arg(short, long, default_value = "dial.svg")]
        output: PathBuf,

        /// Store name curved along the bottom
        #[arg(long)]
        store: Option<String>,

        /// Store name colour as hex
        #[arg(long)]
        store_color: Option<String>,

        /// Background colour as hex
        #[arg(long)]
        background: Option<String>,
    },

    /// Print one JSON line per frame of a transition
    Animate {
        #[command(flatten)]
        snapshot: SnapshotArgs,

        /// Mode before the transition
        #[arg(long, default_value = "planning")]
        from_mode: Mode,

        /// Mode after the transition
        #[arg(long, default_value = "shopping")]
        to_mode: Mode,

        /// Spent total before the transition (defaults to --spent)
        #[arg(long)]
        from_spent: Option<f64>,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
    },
}

#[derive(Args)]
struct SnapshotArgs {
    /// Spending ceiling (0 means no budget)
    #[arg(short, long, default_value = "0")]
    budget: f64,

    /// Estimated cost of all items
    #[arg(short, long, default_value = "0")]
    planned: f64,

    /// Cost of checked-off items
    #[arg(short, long, default_value = "0")]
    spent: f64,

    /// List mode (planning, shopping, completed, archived)
    #[arg(short, long, default_value = "planning")]
    mode: Mode,

    /// Currency symbol, overriding the config
    #[arg(long)]
    currency: Option<String>,
}

impl SnapshotArgs {
    fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot::new(self.budget, self.planned, self.spent, self.mode)
    }
}

#[derive(Serialize)]
struct FrameLine {
    frame: u64,
    t_ms: f64,
    #[serde(flatten)]
    values: glass_dial::AnimatedFrame,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Inspect { snapshot } => inspect(config, &snapshot),
        Commands::Render {
            snapshot,
            output,
            store,
            store_color,
            background,
        } => render(
            config,
            &snapshot,
            &output,
            store,
            store_color.as_deref(),
            background.as_deref(),
        ),
        Commands::Animate {
            snapshot,
            from_mode,
            to_mode,
            from_spent,
            fps,
        } => animate(config, &snapshot, from_mode, to_mode, from_spent, fps),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<DialConfig> {
    let Some(path) = path else {
        return Ok(DialConfig::default());
    };
    Ok(DialConfig::load(path)?)
}

fn build_dial(mut config: DialConfig, args: &SnapshotArgs) -> CliResult<BudgetDial> {
    if let Some(currency) = &args.currency {
        config.currency.clone_from(currency);
    }
    let size = config.size;
    let mut dial = BudgetDial::from_config(config, args.snapshot())?;
    dial.layout(Rect::from_size(Size::square(size)));
    Ok(dial)
}

fn inspect(config: DialConfig, args: &SnapshotArgs) -> CliResult<()> {
    let geometry = DialGeometry::new(config.size, config.stroke_width);
    let mut dial = build_dial(config, args)?;
    dial.mount();
    settle(&mut dial);

    let report = serde_json::json!({
        "snapshot": dial.snapshot(),
        "readout": dial.readout(),
        "labels": {
            "primary": dial.primary_label(),
            "secondary": dial.secondary_label(),
        },
        "geometry": geometry,
        "text_radius": geometry.text_radius(),
        "rings": dial.ring_layout(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn render(
    config: DialConfig,
    args: &SnapshotArgs,
    output: &Path,
    store: Option<String>,
    store_color: Option<&str>,
    background: Option<&str>,
) -> CliResult<()> {
    let size = config.size;
    let mut dial = build_dial(config, args)?;
    if let Some(name) = store {
        dial = dial.store_name(name);
    }
    if let Some(hex) = store_color {
        dial = dial.store_color(Color::from_hex(hex)?);
    }
    dial.mount();
    settle(&mut dial);

    let mut canvas = RecordingCanvas::new();
    dial.paint(&mut canvas);

    let mut renderer = SvgRenderer::new(Size::square(size));
    if let Some(hex) = background {
        renderer = renderer.with_background(Color::from_hex(hex)?);
    }
    fs::write(output, renderer.render(canvas.commands()))?;

    tracing::info!(
        path = %output.display(),
        commands = canvas.command_count(),
        "rendered dial"
    );
    println!("Wrote {}", output.display());
    Ok(())
}

fn animate(
    config: DialConfig,
    args: &SnapshotArgs,
    from_mode: Mode,
    to_mode: Mode,
    from_spent: Option<f64>,
    fps: u32,
) -> CliResult<()> {
    let fps = fps.max(1);
    let target = BudgetSnapshot {
        mode: to_mode,
        ..args.snapshot()
    };
    let start = BudgetSnapshot {
        mode: from_mode,
        spent: from_spent.unwrap_or(args.spent),
        ..args.snapshot()
    };

    let mut dial = build_dial(config, args)?;
    dial.set_snapshot(start);
    dial.mount();
    settle(&mut dial);
    dial.set_snapshot(target);

    let frame_us = 1_000_000 / u64::from(fps);
    let mut clock = FrameClock::new();
    let mut now_us = 0;
    while dial.is_animating() {
        let Some(values) = dial.tick(clock.frame(now_us)) else {
            break;
        };
        let line = FrameLine {
            frame: clock.total_frames() - 1,
            t_ms: now_us as f64 / 1000.0,
            values,
        };
        println!("{}", serde_json::to_string(&line)?);
        now_us += frame_us;
    }
    tracing::info!(frames = clock.total_frames(), "transition complete");
    Ok(())
}

/// Run every in-flight transition to completion.
fn settle(dial: &mut BudgetDial) {
    while dial.is_animating() {
        dial.tick(1.0);
    }
}
