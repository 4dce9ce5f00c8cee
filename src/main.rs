use clap::Parser;

use funtl::cli::commands::{configure, history, styles, translate};
use funtl::cli::{Args, Command, HistoryCommand, StylesCommand};
use funtl::output::{self, OutputConfig};
use funtl::translation::TranslateError;
use funtl::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(
        args.quiet,
        args.verbose,
        args.no_color,
    ));

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        let code = e
            .downcast_ref::<TranslateError>()
            .map_or(exitcode::SOFTWARE, TranslateError::exit_code);
        std::process::exit(code);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Styles { command }) => match command {
            Some(StylesCommand::Show { name }) => styles::show_style(&name),
            None => styles::list_styles(),
        },
        Some(Command::History { command }) => match command {
            Some(HistoryCommand::Delete { id }) => history::delete_entry(&id),
            Some(HistoryCommand::Clear { yes }) => history::clear_history(yes),
            None => history::list_history(),
        },
        Some(Command::Configure { show }) => {
            if show {
                configure::show_configure()
            } else {
                configure::run_configure()
            }
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                style: args.style,
                base_url: args.base_url,
                no_history: args.no_history,
            };
            translate::run_translate(options).await
        }
    }
}
