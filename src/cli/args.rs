//! Command-line argument parsing.

pub const USAGE: &str = "\
Usage:
  hey post <text>
  hey comment <publication-id> <text>
  hey quote <publication-id> <text>
  hey nfts [--all]
  hey --version";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    Post { content: String },
    Comment { publication_id: String, content: String },
    Quote { publication_id: String, content: String },
    /// List the signed-in profile's NFTs; `all` walks every page
    Nfts { all: bool },
    /// Arguments that do not form a command
    Invalid(String),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use hey::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hey".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => return CliCommand::Help,
    };

    match command {
        "post" => match rest {
            [] => CliCommand::Invalid("post needs the text to publish".to_string()),
            words => CliCommand::Post {
                content: words.join(" "),
            },
        },
        "comment" | "quote" => match rest {
            [id, words @ ..] if !words.is_empty() => {
                let publication_id = id.clone();
                let content = words.join(" ");
                if command == "comment" {
                    CliCommand::Comment {
                        publication_id,
                        content,
                    }
                } else {
                    CliCommand::Quote {
                        publication_id,
                        content,
                    }
                }
            }
            _ => CliCommand::Invalid(format!("{} needs a publication id and text", command)),
        },
        "nfts" => match rest {
            [] => CliCommand::Nfts { all: false },
            [flag] if flag == "--all" => CliCommand::Nfts { all: true },
            _ => CliCommand::Invalid("nfts only accepts --all".to_string()),
        },
        other => CliCommand::Invalid(format!("unknown command: {}", other)),
    }
}
