//! `irtplot` binary: opens the 4PL explorer window.

use std::path::PathBuf;

use clap::Parser;

use irtplot::data::state::ViewState;
use irtplot::render::RenderPipeline;
use irtplot::{run_explorer, ExplorerConfig};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the initial render payload as JSON and exit
    #[arg(long, default_value_t = false)]
    dump_payload: bool,

    /// Start with the information curve hidden
    #[arg(long, default_value_t = false)]
    hide_information: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            ExplorerConfig::from_json_file(path)?
        }
        None => ExplorerConfig::default(),
    };

    if args.dump_payload {
        let state = ViewState {
            show_information: !args.hide_information,
            ..ViewState::default()
        };
        let pipeline = RenderPipeline::with_config((), (), &config);
        println!("{}", serde_json::to_string_pretty(&pipeline.payload(&state))?);
        return Ok(());
    }

    run_explorer(config, !args.hide_information)?;
    Ok(())
}
