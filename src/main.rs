use std::fs::File;
use std::io::{self, Read};

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use kitty_reader::Provider;
use kitty_reader::core::config::{self, CliOverrides, ReaderConfig};
use kitty_reader::core::state::App;
use kitty_reader::inference::build_provider;
use kitty_reader::tui;

#[derive(Parser)]
#[command(
    name = "kitty-reader",
    version,
    about = "Read a story one syllable at a time"
)]
struct Args {
    /// Syllabification provider to use (overrides config and env)
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Print the syllabified text and exit instead of starting the reader
    #[arg(long)]
    print: bool,

    /// Text to start with (with --print: text to process; stdin if omitted)
    text: Option<String>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to kitty-reader.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("kitty-reader.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        ReaderConfig::default()
    });
    let cli = CliOverrides {
        provider: args.provider,
        initial_text: args.text.clone(),
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Kitty Reader starting up with provider: {:?}",
        resolved.provider
    );

    let provider = build_provider(&resolved).map_err(io::Error::other)?;

    if args.print {
        let text = match args.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let words = provider.process(&text).await.map_err(io::Error::other)?;
        let line: Vec<&str> = words.iter().map(|w| w.display_text.as_str()).collect();
        println!("{}", line.join(" "));
        return Ok(());
    }

    tui::run(App::from_config(provider, &resolved))
}
