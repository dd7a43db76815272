mod cli;
mod output;
mod progress;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use cli::Cli;
use utils::{AvailableBackground, AvailableIntegrator, AvailableScene, Dimensions};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 6)]
    /// Number of reflection / refraction bounces allowed for each primary ray
    depth: u32,

    #[arg(short, long, value_enum, default_value_t)]
    integrator: AvailableIntegrator,

    #[arg(short, long, value_enum, default_value_t)]
    background: AvailableBackground,

    #[arg(short, long, default_value = "output/render.png")]
    /// Where to save the 8 bit image
    output: PathBuf,

    #[arg(long)]
    /// Also save the image as 32 bit floats, e.g. `output/render.exr`
    hdr: Option<PathBuf>,

    #[arg(long)]
    /// Do not print the progress bar
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}
