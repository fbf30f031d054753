use clap::Parser;
use period_host::cli::Cli;
use period_host::run_detection;
use tracing_subscriber::filter::EnvFilter;

fn main() {
    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.run_config();

    let output = run_detection(&config).and_then(|report| report.render(cli.format));

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
