use std::path::PathBuf;

use clap::{ArgAction, Parser};
use drawpad::Config;

#[derive(Parser, Debug)]
#[command(name = "drawpad")]
#[command(version, about = "Freehand drawing pad configuration tool")]
struct Cli {
    /// Write the documented default config to ~/.config/drawpad/config.toml
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "show_config")]
    init_config: bool,

    /// Print the resolved pad configuration as TOML
    #[arg(long, action = ArgAction::SetTrue)]
    show_config: bool,

    /// Read the config from this file instead of the default location
    #[arg(long, value_name = "PATH", requires = "show_config")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
    } else if cli.show_config {
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        log::debug!("Resolved {} palette colors", config.pad.palette().len());
        print!("{}", config.to_toml()?);
    } else {
        // No flags: show usage
        println!("drawpad: Freehand drawing pad configuration tool");
        println!();
        println!("Usage:");
        println!("  drawpad --init-config              Write the default config file");
        println!("  drawpad --show-config              Print the resolved configuration");
        println!("  drawpad --show-config --config F   Print the configuration read from F");
        println!("  drawpad --help                     Show help");
        println!();
        println!("Config file: ~/.config/drawpad/config.toml");
        println!("Schema:      dump_config_schema > drawpad.schema.json");
    }

    Ok(())
}
