//! Contact Book - Main entry point
//!
//! Runs the interactive assistant: reads one command per line, prints the
//! reply, and keeps going until `exit`, `close`, Ctrl-C or Ctrl-D.

use anyhow::Result;
use contact_book::assistant::{Assistant, AssistantPrompt, Reply, Today, FAREWELL};
use contact_book::Config;
use reedline::{Reedline, Signal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not up yet; the level itself comes from config
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so the transcript on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let today = config.today.map_or(Today::Local, Today::Fixed);
    let mut assistant = Assistant::new().with_today(today);

    let prompt = AssistantPrompt::new(config.prompt.clone());
    let mut line_editor = Reedline::create();

    println!("{}", config.greeting);

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => match assistant.handle_line(&line) {
                Reply::Message(message) => println!("{}", message),
                Reply::Exit(message) => {
                    println!("{}", message);
                    break;
                }
                Reply::Nothing => {}
            },
            // Ctrl-C and Ctrl-D
            Ok(_) => {
                println!("{}", FAREWELL);
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e.into());
            }
        }
    }

    info!(
        contacts = assistant.directory().len(),
        "Contact Book session finished"
    );
    Ok(())
}
