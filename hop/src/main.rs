mod aliases;
mod error;
mod resolve;

use std::process::ExitCode;

use aliases::AliasTable;
use clap::{CommandFactory, Parser};
use directories::UserDirs;
use error::HopError;
use owo_colors::{OwoColorize, Stream};
use resolve::resolve;
use tracing::debug;

/// Open a directory or URL by its short alias.
#[derive(Parser)]
#[command(name = "hop", about, version)]
struct Cli {
    /// Alias to open. See --list for the known ones.
    alias: Option<String>,

    /// Print every alias with its target and exit.
    #[arg(long, short)]
    list: bool,

    /// Open a directory alias in a new terminal tab instead of the file manager.
    #[arg(long, short)]
    tab: bool,
}

fn print_aliases(table: &AliasTable) {
    for (alias, target) in table.iter() {
        println!(
            "{}: {}",
            alias.if_supports_color(Stream::Stdout, |a| a.yellow()),
            target
        );
    }
}

fn run(cli: Cli, table: &AliasTable) -> Result<(), HopError> {
    if cli.list {
        print_aliases(table);
        return Ok(());
    }

    let alias = cli.alias.ok_or_else(|| {
        HopError::Usage(format!(
            "no alias given\n\n{}\n\nRun with --list to see the known aliases.",
            Cli::command().render_usage()
        ))
    })?;

    let home = UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    let action = resolve(table, &alias, cli.tab, home.as_deref())?;

    let platform = hop_launch::for_host()?;
    debug!(platform = platform.platform(), ?action, "dispatching");
    hop_launch::launch(action.command(platform.as_ref()))?;

    Ok(())
}

fn main() -> ExitCode {
    hop_launch::init_logging("HOP_LOG");
    let cli = Cli::parse();

    match AliasTable::builtin().and_then(|table| run(cli, &table)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{} {}",
                "error:".if_supports_color(Stream::Stderr, |t| t.red()),
                e
            );
            ExitCode::from(e.exit_code())
        }
    }
}
