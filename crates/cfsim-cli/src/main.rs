use std::{fs, io, path::{Path, PathBuf}, process::ExitCode};

use anyhow::{anyhow, bail, Context, Result};
use cfsim_core::{sample_rng, SimConfig};
use cfsim_judge::{
    arange, estimate, grid_search, predict, read_empirical, write_grid, write_predictions, EstimatorConfig,
};
use cfsim_noise::{Condition, NoiseParams};
use cfsim_trial::{load_trials, run_ground_truth, run_ground_truth_with, run_removed_with, Trial};
use cfsim_viz::{FrameObserver, FrameRecorder};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cfsim", version, about = "Counterfactual and hypothetical gate simulations")]
struct Opts {
    /// JSON file with scene settings (speed multiplier, ball size, cause/target names, ...)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Overrides the speed multiplier from --config
    #[arg(long, global = true)]
    speed_multiplier: Option<f64>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Ground-truth event log of one trial (or all) as JSON
    Actual {
        #[arg(long)]
        trials: PathBuf,
        #[arg(long)]
        trial: Option<u32>,
    },
    /// Judgment for one trial and one condition
    Judge {
        #[arg(long)]
        trials: PathBuf,
        #[arg(long)]
        trial: u32,
        #[arg(long)]
        condition: Condition,
        #[command(flatten)]
        noise: NoiseArgs,
        #[command(flatten)]
        est: EstArgs,
    },
    /// Judgments for every trial in both conditions
    Predict {
        #[arg(long)]
        trials: PathBuf,
        /// Only the first N trials (practice trials usually come last)
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        noise: NoiseArgs,
        #[command(flatten)]
        est: EstArgs,
        /// Write predictions as CSV instead of printing JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Loss over a grid of noise parameters
    Grid {
        #[arg(long)]
        trials: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        /// CSV with human_hp and human_cf columns (percent)
        #[arg(long)]
        empirical: PathBuf,
        #[arg(long, num_args = 3, value_names = ["START", "STOP", "STEP"], default_values_t = [0.0, 1.3, 0.1])]
        ball_range: Vec<f64>,
        #[arg(long, num_args = 3, value_names = ["START", "STOP", "STEP"], default_values_t = [0.0, 275.0, 25.0])]
        actuator_range: Vec<f64>,
        #[command(flatten)]
        est: EstArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Per-step body positions of one run as JSONL
    Frames {
        #[arg(long)]
        trials: PathBuf,
        #[arg(long)]
        trial: u32,
        /// Replay with the cause removed under this condition instead of the ground truth
        #[arg(long)]
        removed: Option<Condition>,
        #[command(flatten)]
        noise: NoiseArgs,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Keep every Nth frame
        #[arg(long, default_value_t = 1)]
        every: u32,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
struct NoiseArgs {
    /// Per-step heading noise, degrees
    #[arg(long, default_value_t = 0.6)]
    ball_noise: f64,
    /// Actuator timing spread, steps
    #[arg(long, default_value_t = 175.0)]
    actuator_noise: f64,
}

impl NoiseArgs {
    fn params(&self) -> NoiseParams { NoiseParams::new(self.ball_noise, self.actuator_noise) }
}

#[derive(Args, Debug)]
struct EstArgs {
    #[arg(long, default_value_t = 100)]
    samples: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    parallel: bool,
}

impl EstArgs {
    fn config(&self) -> EstimatorConfig {
        EstimatorConfig { num_samples: self.samples, seed: self.seed, parallel: self.parallel }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn sim_config(opts: &Opts) -> Result<SimConfig> {
    let mut cfg = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(m) = opts.speed_multiplier { cfg.speed_multiplier = m; }
    cfg.validate()?;
    Ok(cfg)
}

fn load(path: &Path, limit: Option<usize>) -> Result<Vec<Trial>> {
    let mut trials = load_trials(path)?;
    if let Some(n) = limit { trials.truncate(n); }
    if trials.is_empty() { bail!("{} holds no trials", path.display()); }
    Ok(trials)
}

fn pick(trials: &[Trial], index: u32) -> Result<&Trial> {
    trials.iter().find(|t| t.trial == index).ok_or_else(|| anyhow!("no trial with index {index}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(io::stdout().lock(), value)?;
    println!();
    Ok(())
}

fn run() -> Result<()> {
    let opts = Opts::parse();
    let sim = sim_config(&opts)?;

    match &opts.cmd {
        Cmd::Actual { trials, trial } => {
            let trials = load(trials, None)?;
            let selected: Vec<&Trial> = match trial {
                Some(i) => vec![pick(&trials, *i)?],
                None => trials.iter().collect(),
            };
            let truths = selected.iter().map(|t| run_ground_truth(t, &sim)).collect::<Result<Vec<_>, _>>()?;
            print_json(&truths)
        }
        Cmd::Judge { trials, trial, condition, noise, est } => {
            let trials = load(trials, None)?;
            let j = estimate(pick(&trials, *trial)?, &sim, *condition, &noise.params(), &est.config())?;
            print_json(&j)
        }
        Cmd::Predict { trials, limit, noise, est, out } => {
            let trials = load(trials, *limit)?;
            let preds = predict(&trials, &sim, &noise.params(), &est.config())?;
            match out {
                Some(path) => {
                    write_predictions(path, &preds)?;
                    info!(rows = preds.len(), path = %path.display(), "predictions written");
                    Ok(())
                }
                None => print_json(&preds),
            }
        }
        Cmd::Grid { trials, limit, empirical, ball_range, actuator_range, est, out } => {
            let trials = load(trials, *limit)?;
            let human = read_empirical(empirical)?;
            let balls = arange(ball_range[0], ball_range[1], ball_range[2]);
            let actuators = arange(actuator_range[0], actuator_range[1], actuator_range[2]);
            if balls.is_empty() || actuators.is_empty() { bail!("empty parameter range"); }
            let rows = grid_search(&trials, &human, &balls, &actuators, &sim, &est.config())?;
            write_grid(out, &rows)?;
            if let Some(best) = rows.iter().min_by(|a, b| a.loss.total_cmp(&b.loss)) {
                info!(ball_noise = best.ball_noise, actuator_noise = best.actuator_noise, loss = best.loss, "best grid point");
            }
            Ok(())
        }
        Cmd::Frames { trials, trial, removed, noise, seed, every, out } => {
            let trials = load(trials, None)?;
            let trial = pick(&trials, *trial)?;
            let mut rec = FrameRecorder::new().every(*every);
            match removed {
                None => {
                    run_ground_truth_with(trial, &sim, Some(&mut rec as &mut dyn FrameObserver))?;
                }
                Some(cond) => {
                    let truth = run_ground_truth(trial, &sim)?;
                    let mut rng = sample_rng(*seed, 0);
                    let r = run_removed_with(trial, &sim, *cond, &noise.params(), &truth, &mut rng, Some(&mut rec as &mut dyn FrameObserver))?;
                    info!(outcome = r.outcome, plan = ?r.plan, "removed run");
                }
            }
            rec.write_jsonl(out)?;
            info!(frames = rec.len(), path = %out.display(), "frames written");
            Ok(())
        }
    }
}
