#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;
mod web;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stress_predictor=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
