use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Retirement savings estimator with a local web UI"
)]
struct Cli {
    #[arg(long, default_value_t = 8080, help = "Port for the HTTP UI and API")]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = nestegg::api::run_http_server(cli.port).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
