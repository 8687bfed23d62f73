// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `serve`   — loads the artifact and serves the web form
//   2. `predict` — loads the artifact and scores one record
//
// Both load the model before doing anything else: an unusable
// artifact aborts startup instead of failing on first use.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PredictArgs, ServeArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "stress-predictor",
    version = "0.1.0",
    about = "Predict a student's stress level from lifestyle and academic inputs."
)]
pub struct Cli {
    /// The subcommand to run (serve or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Serve(args)   => self.run_serve(args),
            Commands::Predict(args) => self.run_predict(args),
        }
    }

    /// Handles the `serve` subcommand.
    fn run_serve(&self, args: &ServeArgs) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;
        use crate::web;

        tracing::info!("Loading model artifact from '{}'", args.model_path);

        // Fail fast: no artifact, no server
        let use_case = PredictUseCase::load(&args.model_path)?;
        web::serve(args.into(), use_case)
    }

    /// Handles the `predict` subcommand.
    /// Scores one record built from the flags and prints the result.
    fn run_predict(&self, args: &PredictArgs) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;
        use crate::domain::record::StudentRecord;

        let use_case = PredictUseCase::load(&args.model_path)?;
        let record   = StudentRecord::from(args);

        let prediction = use_case.execute(&record)?;

        println!("\nPredicted Stress Level: {:.2}", prediction.score);
        println!("{}", prediction.tier.interpretation());
        println!("\n{}", prediction.tier.tips_title());
        for tip in prediction.tier.tips() {
            println!("  - {tip}");
        }
        Ok(())
    }
}
