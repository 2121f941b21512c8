use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repodigest")]
#[command(about = "Multilingual monthly activity reports for a set of git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Reference date (YYYY-MM-DD, RFC3339, or 'N days ago'); defaults to today"
    )]
    pub date: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Read activity from a JSON snapshot instead of the configured repositories"
    )]
    pub feed: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every language and publish them, unless nothing happened
    Publish {
        #[arg(long, help = "Print the documents instead of writing them")]
        debug: bool,

        #[arg(long, help = "Site checkout to write posts into (overrides config)")]
        output: Option<PathBuf>,

        #[arg(long = "lang", help = "Restrict to these language codes (overrides config)")]
        languages: Vec<String>,
    },
    /// Render one language to stdout
    Preview {
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// List the supported languages
    Languages,
    /// Print the activity feed as JSON, usable with --feed
    Snapshot,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Publish { debug, output, languages } => {
                crate::publish::exec(&self.common, debug, output, languages)
            }
            Commands::Preview { lang } => crate::publish::preview(&self.common, &lang),
            Commands::Languages => crate::publish::list_languages(),
            Commands::Snapshot => crate::snapshot::exec(&self.common),
        }
    }
}
