use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "funtl")]
#[command(about = "Fun translations (Yoda, Pirate, Minion, ...) from the command line")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads from --file or stdin if not provided)
    pub text: Option<String>,

    /// Translation style (e.g., yoda, pirate, minion)
    #[arg(short = 's', long)]
    pub style: Option<String>,

    /// Read the text to translate from a file
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<String>,

    /// API base URL (overrides FUNTL_BASE_URL and the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Do not save the translation to history
    #[arg(short = 'n', long)]
    pub no_history: bool,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print diagnostic detail on failures
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List translation styles, or show one
    Styles {
        #[command(subcommand)]
        command: Option<StylesCommand>,
    },
    /// Show, delete or clear past translations
    History {
        #[command(subcommand)]
        command: Option<HistoryCommand>,
    },
    /// Configure funtl defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum StylesCommand {
    /// Show details of a style
    Show {
        /// Style id or name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Delete a single entry by id
    Delete {
        /// Entry id as shown by `funtl history`
        id: String,
    },
    /// Delete all entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
