//! Interactive session on top of [`Session`].

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use typed_list::config::ReplConfig;
use typed_list::{Flow, Session, TlistConfig};

use crate::report;

const HISTORY_FILE: &str = ".tlist_history";

/// Run the session: with a line editor on a terminal, line by line otherwise.
pub fn run(config: &TlistConfig) -> anyhow::Result<()> {
    let mut session = Session::new(&config.display);
    if atty::is(atty::Stream::Stdin) {
        interactive(&mut session, &config.repl)
    } else {
        piped(&mut session)
    }
}

fn interactive(session: &mut Session, repl: &ReplConfig) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("failed to initialize line editor")?;
    let history = if repl.history() { history_path() } else { None };
    if let Some(path) = &history {
        if let Err(err) = editor.load_history(path) {
            debug!(path = %path.display(), %err, "no history loaded");
        }
    }

    println!("tlist {} (type `help` for commands)", env!("CARGO_PKG_VERSION"));
    loop {
        match editor.readline(repl.prompt()) {
            Ok(line) => {
                editor.add_history_entry(line.as_str())?;
                let stdout = io::stdout();
                match session.execute(&line, &mut stdout.lock()) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(err) => report::error(&anyhow::Error::from(err)),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read line"),
        }
    }

    if let Some(path) = &history {
        if let Err(err) = editor.save_history(path) {
            warn!(path = %path.display(), %err, "failed to save history");
        }
    }
    Ok(())
}

fn piped(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        match session
            .execute(&line, &mut out)
            .with_context(|| format!("line {}", index + 1))?
        {
            Flow::Continue => {}
            Flow::Exit => break,
        }
    }
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    simple_home_dir::home_dir().map(|home| home.join(HISTORY_FILE))
}
