// Planet Browser - Main Entry Point
use std::io::{self, BufRead, Write};

use clap::Parser;
use planet_browser::ui::terminal::{self, Command};
use planet_browser::verbosity::init_logging;
use planet_browser::{CONFIG_FILE, MemorySurface, PlanetClient, Viewer, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "planet_browser", about = "Browse the solar system bodies API from the terminal")]
struct Cli {
    /// Configuration file, created with defaults when missing
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Override the API base URL from the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Log every API call to the configured log file
    #[arg(long)]
    api_log: bool,

    /// Print the loaded list and exit instead of reading commands
    #[arg(long)]
    once: bool,

    /// Increase output (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ViewerConfig::load_or_create(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;
    config.print_summary();

    let mut client = PlanetClient::new(config.api.clone(), &config.logging)?;
    if cli.api_log {
        client.set_api_logging(true);
    }
    let mut viewer = Viewer::new(MemorySurface::new(), config.display.clone())?;

    println!("🚀 Loading the solar system...");
    viewer.start(&client).await;
    print!("{}", terminal::render_page(&viewer));

    if cli.once {
        return Ok(());
    }

    println!("{}", terminal::HELP);
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Some(note) = terminal::execute(&mut viewer, &command) {
                    println!("{}", note);
                }
                if command != Command::Help {
                    print!("{}", terminal::render_page(&viewer));
                }
            }
            Err(message) => println!("⚠️  {}", message),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
