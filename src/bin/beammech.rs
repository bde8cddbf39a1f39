//! Solve a beam problem from a JSON file
//!
//! Usage: `beammech <problem.json> [output.txt]`

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use beammech::prelude::*;

fn run(problem_path: &str, output: Option<&str>) -> Result<()> {
    let problem = Problem::from_path(problem_path)
        .with_context(|| format!("failed to read problem from {}", problem_path))?;
    log::info!(
        "Loaded {} mm beam with {} load(s) and {} patient(s)",
        problem.length,
        problem.loads.len(),
        problem.patients.len()
    );

    let results = problem.solve().context("analysis failed")?;

    match results.reactions {
        Reactions::Simple {
            positions: (s1, s2),
            forces: (r1, r2),
        } => {
            println!("Reaction @ {} mm: {:.3} N", s1, r1);
            println!("Reaction @ {} mm: {:.3} N", s2, r2);
        }
        Reactions::Clamped { force, moment } => {
            println!("Clamp reaction force: {:.3} N", force);
            println!("Clamp reaction moment: {:.3} N·mm", moment);
        }
    }

    let summary = results.summary();
    println!(
        "Max deflection: {:.4} mm @ {} mm",
        summary.max_deflection, summary.max_deflection_at
    );
    println!(
        "Max moment:     {:.1} N·mm @ {} mm",
        summary.max_moment, summary.max_moment_at
    );
    println!(
        "Max shear:      {:.3} N @ {} mm",
        summary.max_shear, summary.max_shear_at
    );
    println!(
        "Max strain:     {:.6e} @ {} mm",
        summary.max_strain, summary.max_strain_at
    );

    if let Some(path) = output {
        results
            .save(path)
            .with_context(|| format!("failed to write results to {}", path))?;
        log::info!("Results written to {}", path);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: beammech <problem.json> [output.txt]");
        return ExitCode::from(2);
    }

    match run(&args[1], args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
