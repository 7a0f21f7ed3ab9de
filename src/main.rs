#![forbid(unsafe_code)]

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::{MeshFormat, Overrides, ShellConfig, load_config_from_path};

#[derive(Parser, Debug)]
#[command(name = "cubeshell")]
#[command(about = "Extract the outer surface of dense FEA elements as a mesh", long_about = None)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node coordinate table (x,y,z per row)
    #[arg(long)]
    nodes: Option<PathBuf>,

    /// Element connectivity table (8 node ids per row)
    #[arg(long)]
    connectivity: Option<PathBuf>,

    /// Element density table (one value per row)
    #[arg(long)]
    density: Option<PathBuf>,

    /// Keep elements whose density exceeds this value
    #[arg(short, long)]
    threshold: Option<f64>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    format: Option<MeshFormat>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => ShellConfig::default(),
    };
    cfg.apply(Overrides {
        nodes: args.nodes,
        connectivity: args.connectivity,
        density: args.density,
        threshold: args.threshold,
        output: args.output,
        format: args.format,
    });

    let summary = pipeline::run(&cfg)?;
    log::info!("{summary}");
    Ok(())
}
