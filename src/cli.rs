use clap::Parser;
use serde::Serialize;

fn is_false(b: &bool) -> bool {
    !b
}

#[derive(Debug, Parser, Serialize)]
pub struct Cli {
    /// Address of the remote leaderboard document
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard_url: Option<String>,
    /// Whether to bypass the response cache entirely
    #[arg(long)]
    #[serde(skip_serializing_if = "is_false")]
    pub no_cache: bool,
}
