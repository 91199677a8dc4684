use cardex::run_with_config_path;
use clap::Parser;
use dotenv::dotenv;

/// Cardex - contact extraction service backed by a chat-completion API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Load config, init logging and serve
    run_with_config_path(&args.config).await
}
