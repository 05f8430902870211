#[macro_use] extern crate log;

use std::io;
use std::process;

use clap::Parser;
use siege_kernel::{Config, Format};

#[derive(Parser, Debug)]
#[command(name = "gaussian")]
#[command(about = "Print the normalized 5x5 Gaussian blur kernel for a sigma")]
struct Cli {
    /// Standard deviation of the Gaussian
    #[arg(short, long, env = "SIEGE_KERNEL_SIGMA", default_value_t = 15.0,
          allow_negative_numbers = true)]
    sigma: f64,

    /// Output format: text, rust, glsl, grid or json
    #[arg(short, long, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config {
        sigma: cli.sigma,
        format: cli.format,
    };
    debug!("Config:\n{:?}", config);

    let stdout = io::stdout();
    if let Err(e) = config.run(&mut stdout.lock()) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
