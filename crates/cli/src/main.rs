use anyhow::{Context, Result};
use circumgeom::api::{draw_triangles, CircumCfg, CircumEngine, ReplayToken, TriangleCfg};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod frames;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "circumgeom-cli")]
#[command(about = "Batch circumcenters and circumradii for triangle tables")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute circles for a table with columns x0,y0,x1,y1,x2,y2 (CSV or Parquet)
    Run(RunArgs),
    /// Write a random triangle table in the `run` input format
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Emit {
    Center,
    Radius,
    Circle,
}

#[derive(Args, Debug, Serialize)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = Emit::Circle)]
    emit: Emit,
    /// Evaluate large batches on the rayon pool (needs the `rayon` feature)
    #[arg(long)]
    parallel: bool,
    #[arg(long, default_value_t = CircumCfg::default().par_min_batch)]
    par_min_batch: usize,
}

#[derive(Args, Debug, Serialize)]
struct SampleArgs {
    #[arg(long)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, default_value_t = 1.0)]
    half_width: f64,
    /// Minimum doubled triangle area; 0 keeps collinear draws
    #[arg(long, default_value_t = 1e-6)]
    min_area: f64,
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run(args) => run(&args),
        Action::Sample(args) => sample(&args),
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), emit = ?args.emit, "run");
    let df = frames::read(&args.input)?;
    let tris = frames::triangles(&df)
        .with_context(|| format!("reading triangles from {}", args.input.display()))?;
    let engine = CircumEngine::new(CircumCfg {
        parallel: args.parallel,
        par_min_batch: args.par_min_batch,
    });

    let mut out = match args.emit {
        Emit::Center => {
            let centers = engine.center_stacked(&tris)?;
            report_non_finite(centers.rows().into_iter().map(|c| c[0].is_finite() && c[1].is_finite()));
            frames::circles_frame(Some(&centers), None)?
        }
        Emit::Radius => {
            let radii = engine.radius_stacked(&tris)?;
            report_non_finite(radii.iter().map(|r| r.is_finite()));
            frames::circles_frame(None, Some(&radii))?
        }
        Emit::Circle => {
            let circles = engine.circle_stacked(&tris)?;
            report_non_finite(circles.radii.iter().map(|r| r.is_finite()));
            frames::circles_frame(Some(&circles.centers), Some(&circles.radii))?
        }
    };
    tracing::info!(rows = out.height(), cols = out.width(), "computed");
    frames::write(&args.out, &mut out)?;
    record(&args.out, "run", args)
}

/// Collinear input rows come back non-finite; count them rather than fail.
fn report_non_finite(finite: impl Iterator<Item = bool>) {
    let non_finite = finite.filter(|ok| !ok).count();
    if non_finite > 0 {
        tracing::warn!(non_finite, "degenerate triangles produced non-finite rows");
    }
}

fn sample(args: &SampleArgs) -> Result<()> {
    tracing::info!(n = args.n, seed = args.seed, index = args.index, out = %args.out.display(), "sample");
    let cfg = TriangleCfg {
        count: args.n,
        half_width: args.half_width,
        min_twice_area: args.min_area,
        ..TriangleCfg::default()
    };
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let tris = draw_triangles(cfg, tok).with_context(|| {
        format!(
            "cannot sample in half-width {} box with doubled area >= {} after {} attempts",
            cfg.half_width, cfg.min_twice_area, cfg.max_attempts
        )
    })?;
    let mut df = frames::triangles_frame(&tris)?;
    frames::write(&args.out, &mut df)?;
    record(&args.out, "sample", args)
}

fn record<T: Serialize>(out: &Path, command: &'static str, params: &T) -> Result<()> {
    let payload = Payload::new(command, serde_json::to_value(params)?);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
