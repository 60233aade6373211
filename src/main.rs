use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use std::io;
use thiserror::Error;

mod cli;
#[cfg(feature = "gui")]
mod gui;
mod libshindan;

use crate::libshindan::session::QuizSession;
use crate::libshindan::shitsumon::QuestionBank;

#[cfg(feature = "cli")]
#[derive(Debug, PartialEq)]
enum Choice {
    Yes,
    No,
    Restart,
    Quit,
    DontKnow,
}

#[derive(Parser, Debug)]
#[command(name = "浮気診断 (Uwakishindan)")]
#[command(version, about, long_about = None)]
struct Args {
    /// Answer every question up front, e.g. `nynynnnnnnnynny`
    #[arg(short, long, value_name = "YN")]
    answers: Option<String>,
    /// Print the result as JSON instead of the coloured report
    #[arg(short, long, default_value = "false")]
    json: bool,
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

#[cfg(feature = "cli")]
impl Choice {
    fn from_str(input: &str) -> Choice {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Choice::Yes,
            "n" | "no" => Choice::No,
            "r" => Choice::Restart,
            "q" => Choice::Quit,
            _ => Choice::DontKnow,
        }
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error("questionnaire error: {0}")]
    Shindan(#[from] libshindan::Error),
    #[error("bad answer script: {0}")]
    BadScript(String),
    #[error("cannot read or write the terminal")]
    Io(#[from] io::Error),
    #[error("cannot encode result")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "gui")]
    #[error("cannot open window")]
    Gui(#[from] eframe::Error),
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let bank = QuestionBank::builtin();
    debug!(
        "[Setup] {} questions, total weight {}.",
        bank.count(),
        bank.total_weight()
    );
    let mut session = QuizSession::new(bank);

    if gui_ignores_json(&args) {
        warn!("[Setup] --json is ignored by the GUI; combine it with --answers instead.");
    }

    if let Some(script) = args.answers {
        debug!("[Setup] Running answer script {:?}", script);
        return cli::run_script(&mut session, &script, args.json, &mut io::stdout());
    }

    run(session, args.json)
}

/// The window has no JSON output, so `--json` only takes effect with
/// `--answers` in a GUI build.
fn gui_ignores_json(args: &Args) -> bool {
    cfg!(feature = "gui") && args.json && args.answers.is_none()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "gui")] {
        fn run(session: QuizSession, _json: bool) -> Result<(), Error> {
            debug!("[Setup] Starting GUI.");
            gui::init_gui(session)
        }
    } else if #[cfg(feature = "cli")] {
        fn run(mut session: QuizSession, json: bool) -> Result<(), Error> {
            debug!("[Setup] Starting CLI.");
            cli::cli_loop(&mut session, io::stdin().lock(), &mut io::stdout(), json)
        }
    } else {
        compile_error!("enable the `cli` or `gui` feature");
    }
}
