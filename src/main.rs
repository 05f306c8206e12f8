use clap::Parser;
use tracing_subscriber::EnvFilter;

use dungest::{app::App, config::Args};

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Log to a file so records never land in the middle of the map
    let appender = tracing_appender::rolling::never(&args.log_dir, "dungest.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    let stdin = std::io::stdin();
    let mut app = App::new(
        stdin.lock(),
        std::io::stdout(),
        args.cave_params(),
        !args.no_color,
    );

    let seed = match args.seed {
        Some(seed) => seed,
        None => app.ask_seed()?,
    };
    app.run(seed)
}
