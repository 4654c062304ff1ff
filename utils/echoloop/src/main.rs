mod reply;

use std::{ffi::OsStr, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use directories::UserDirs;
use reply::Reply;
use rustyline::{error::ReadlineError, Editor};
use tracing::{debug, warn};

/// Read lines, echo them back, stop on `exit`.
#[derive(Parser)]
#[command(name = "echoloop", about, version)]
struct Args {
    /// Don't load or save ~/.echoloop_history.
    #[arg(long)]
    no_history: bool,
}

fn history_path() -> Option<PathBuf> {
    let ud = UserDirs::new()?;
    let mut history_path = PathBuf::from(ud.home_dir());
    history_path.push(".echoloop_history");
    Some(history_path)
}

struct EchoLoop {
    editor: Editor<()>,
    history_path: Option<PathBuf>,
}

impl EchoLoop {
    fn new(args: &Args) -> Result<Self> {
        let config = rustyline::Config::builder()
            .max_history_size(100)
            .auto_add_history(true)
            .history_ignore_space(true)
            .history_ignore_dups(true)
            .build();
        let mut editor = Editor::<()>::with_config(config)?;

        let history_path = if args.no_history {
            None
        } else {
            history_path()
        };
        if let Some(path) = &history_path {
            if let Err(e) = editor.load_history(path) {
                debug!(path = %path.display(), error = %e, "no history loaded");
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "couldn't save history");
            }
        }
    }

    fn run(&mut self) -> Result<()> {
        println!("Enter something (type 'exit' to quit):");

        loop {
            let input_line = match self.editor.readline("> ") {
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(e) => {
                    self.save_history();
                    anyhow::bail!("error reading input: {}", e);
                }
                Ok(line) => line,
            };

            match Reply::parse(&input_line) {
                Reply::Exit => {
                    println!("Goodbye!");
                    break;
                }
                Reply::Echo { input, open } => {
                    println!("You entered: {}", input);
                    if let Some(target) = open {
                        open_best_effort(target);
                    }
                }
            }
        }

        self.save_history();
        Ok(())
    }
}

/// Start the default handler for `target`. Failures are logged and otherwise ignored.
fn open_best_effort(target: &str) {
    let launched = hop_launch::for_host()
        .and_then(|platform| hop_launch::launch(platform.open_default(OsStr::new(target))));
    if let Err(e) = launched {
        warn!(open_target = target, error = %e, "open failed");
    }
}

fn main() -> ExitCode {
    hop_launch::init_logging("ECHOLOOP_LOG");
    let args = Args::parse();

    match EchoLoop::new(&args).and_then(|mut echo| echo.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
