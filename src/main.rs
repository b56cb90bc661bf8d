use color_eyre::Result;

use hey::cli::{parse_args, run_cli_command};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hey=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = parse_args(std::env::args());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_cli_command(command))
}
