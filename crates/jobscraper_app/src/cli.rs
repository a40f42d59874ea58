use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "jobscraper", about = "Job board scraping dashboard", version)]
pub struct Cli {
    /// File holding the saved-template collection.
    #[arg(long, global = true, default_value = "job_scraper_templates.json")]
    pub templates_file: PathBuf,

    /// Directory exported files are written to.
    #[arg(long, global = true, default_value = "downloads")]
    pub output_dir: PathBuf,

    /// Mirror the log to the terminal as well as scraper.log.
    #[arg(long, global = true)]
    pub log_terminal: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a scrape with the given configuration.
    Run(RunArgs),
    /// Manage saved templates.
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },
    /// List the known job-board sites.
    Sources,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Job board search URL; templated from the filters when omitted.
    #[arg(long)]
    pub url: Option<String>,

    /// Job title filter.
    #[arg(long)]
    pub job_title: Option<String>,

    /// Location filter.
    #[arg(long)]
    pub location: Option<String>,

    /// Source site id (see `sources`).
    #[arg(long)]
    pub source: Option<String>,

    /// Apply a saved template (by id or name) before the other flags.
    #[arg(long)]
    pub template: Option<String>,

    /// Save the configuration under this name after the run.
    #[arg(long)]
    pub save_as: Option<String>,

    /// Export the results in this format; may be given more than once.
    #[arg(long = "export", value_enum)]
    pub exports: Vec<ExportArg>,
}

#[derive(Debug, Subcommand)]
pub enum TemplatesAction {
    /// List all saved templates.
    List,
    /// Delete a saved template by id.
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Csv,
    Word,
}

impl From<ExportArg> for jobscraper_core::ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Csv => Self::Csv,
            ExportArg::Word => Self::Word,
        }
    }
}
