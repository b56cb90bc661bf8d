//! Command-line interface for hey.
//!
//! ```ignore
//! use hey::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command).await?;
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::{list_nfts, publish, render_view, Draft, Session};
pub use version::{print_version, VERSION};

use color_eyre::eyre::{bail, Result};

/// Run a parsed command to completion.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            print_version();
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Invalid(message) => bail!("{}\n\n{}", message, USAGE),
        CliCommand::Nfts { all } => {
            let session = Session::from_env()?;
            list_nfts(&session, all).await
        }
        CliCommand::Post { content } => submit(Draft::Post(content)).await,
        CliCommand::Comment {
            publication_id,
            content,
        } => {
            submit(Draft::Comment {
                on: publication_id,
                content,
            })
            .await
        }
        CliCommand::Quote {
            publication_id,
            content,
        } => {
            submit(Draft::Quote {
                on: publication_id,
                content,
            })
            .await
        }
    }
}

async fn submit(draft: Draft) -> Result<()> {
    let session = Session::from_env()?;
    let receipt = publish(&session, draft).await?;
    println!(
        "{} created: {}",
        receipt.kind.label(),
        receipt.result.reference().unwrap_or(receipt.content_uri.as_str())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_command_reports_usage() {
        let err = run_cli_command(CliCommand::Invalid("unknown command: x".into()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("hey post <text>"));
    }

    #[tokio::test]
    async fn test_version_and_help_succeed() {
        assert!(run_cli_command(CliCommand::Version).await.is_ok());
        assert!(run_cli_command(CliCommand::Help).await.is_ok());
    }
}
