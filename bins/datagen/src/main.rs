use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use hamiltonians::lanczos::ground_state;
use hamiltonians::Family;
use spinops::{Correlators, Spin, SpinOperators};
use sweep::grid::{cartesian, singles};
use sweep::{read_thetas, run_family, runtime, ParameterPoint, SweepConfig, SweepError};

/// Ground-state spin-correlation tables for 1D spin chains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chain length N
    #[arg(long, default_value_t = 8)]
    n: usize,

    /// Worker pool size (capped at half the hardware parallelism when
    /// oversubscribed)
    #[arg(long, default_value_t = 4)]
    workers: usize,

    /// Comma-separated Hamiltonian families to generate
    #[arg(long, default_value = "H1,H2,H3")]
    families: String,

    /// Spin magnitude ("1" or "1/2")
    #[arg(long, default_value = "1")]
    spin: String,

    /// Output directory
    #[arg(long, default_value = "data")]
    out: PathBuf,

    /// Theta list for H3, one float per line
    #[arg(long, default_value = "data/thetas.dat")]
    thetas: PathBuf,

    /// Upper bound of the H1 Jz and D grids (4.0 exclusive, or 4.1 to
    /// include the 4.0 endpoint)
    #[arg(long, default_value_t = 4.0)]
    h1_max: f64,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let spin = Spin::parse(&args.spin)?;
    let families = parse_families(&args.families)?;

    let mut cfg = SweepConfig::default();
    cfg.chain_length = args.n;
    cfg.workers = args.workers;
    cfg.h1_jz.stop = args.h1_max;
    cfg.h1_d.stop = args.h1_max;

    let ops = SpinOperators::new(spin);
    let corr = Correlators::new(cfg.chain_length, &ops)?;

    let mut seconds = [-1.0f64; 3];
    for (k, family) in Family::ALL.into_iter().enumerate() {
        if !families.contains(&family) {
            continue;
        }

        let points = match family {
            Family::H1 => cartesian(&cfg.h1_jz.values(), &cfg.h1_d.values()),
            Family::H2 => cartesian(&cfg.h2_anisotropy.values(), &cfg.h2_alternation.values()),
            Family::H3 => match read_thetas(&args.thetas) {
                Ok(thetas) => singles(&thetas, -1.0),
                Err(err) => {
                    // A missing or malformed theta list aborts H3 only.
                    eprintln!("skipping H3: {}", err);
                    continue;
                }
            },
        };

        // An I/O failure aborts this family only; the others still run and
        // the runtime log still records the skip as -1.
        match generate_family(family, &points, &cfg, &ops, &corr, &args.out) {
            Ok(secs) => seconds[k] = secs,
            Err(err) => eprintln!("skipping {}: {}", family.label(), err),
        }
    }

    runtime::append_runtime(
        &args.out.join("DataRuntime.dat"),
        cfg.chain_length,
        cfg.workers,
        seconds,
    )?;

    let total: f64 = seconds.iter().filter(|s| **s >= 0.0).sum();
    println!("Data generated in {:.3} s", total);
    Ok(())
}

fn generate_family(
    family: Family,
    points: &[ParameterPoint],
    cfg: &SweepConfig,
    ops: &SpinOperators,
    corr: &Correlators,
    out: &Path,
) -> Result<f64, SweepError> {
    let dir = out.join(family.label());
    fs::create_dir_all(&dir)?;
    let out_path = dir.join(format!("N={}.csv", cfg.chain_length));

    let pb = ProgressBar::new(points.len() as u64).with_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    pb.set_message(format!("Solving {} correlations", family.label()));

    let solve = |p: &ParameterPoint| {
        let h = family.hamiltonian(cfg.chain_length, ops, p.outer, p.inner);
        ground_state(&h).map(|gs| gs.vector)
    };
    let secs = run_family(family, points, corr, cfg.workers, solve, &out_path, || {
        pb.inc(1)
    })?;
    pb.finish();
    Ok(secs)
}

fn parse_families(input: &str) -> Result<Vec<Family>, Box<dyn Error>> {
    let mut families = Vec::new();
    for label in input.split(',') {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        match Family::parse(label) {
            Some(f) => families.push(f),
            None => return Err(format!("unknown Hamiltonian family '{}'", label).into()),
        }
    }
    if families.is_empty() {
        return Err("no Hamiltonian families selected".into());
    }
    Ok(families)
}
