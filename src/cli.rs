// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-viewport")]
#[command(about = "3D viewport camera controller demo", long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
