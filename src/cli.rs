use crate::libshindan::hantei::Verdict;
use crate::libshindan::session::QuizSession;
#[cfg(feature = "cli")]
use crate::Choice;
use crate::Error;
use colored::Colorize;
#[cfg(feature = "cli")]
use log::debug;
use log::warn;
#[cfg(feature = "cli")]
use std::io::BufRead;
use std::io::Write;

#[cfg(feature = "cli")]
const BAR_WIDTH: usize = 20;

#[cfg(feature = "cli")]
pub fn cli_loop<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    out: &mut W,
    json: bool,
) -> Result<(), Error> {
    writeln!(out, "{}", "==========> 💔 Is He Cheating? <==========".magenta())?;
    writeln!(out, "{}", "Answer honestly...".dimmed())?;

    loop {
        if let Some(verdict) = session.verdict() {
            if json {
                return print_json(&verdict, out);
            }
            print_report(&verdict, out)?;
            write!(out, "{} ", "r to start over, q to quit:".cyan())?;
            out.flush()?;
            match read_choice(&mut input)? {
                Choice::Restart => {
                    session.reset();
                    writeln!(out)?;
                    continue;
                }
                Choice::Quit => return Ok(()),
                other => {
                    debug!("[CLI] Ignoring {:?} on the result screen.", other);
                    writeln!(out, "{}", "Please answer r or q.".bright_red())?;
                    continue;
                }
            }
        }

        print_question(session, out)?;
        write!(
            out,
            "{} ",
            "Answer (y/n, r to start over, q to quit):".cyan()
        )?;
        out.flush()?;

        let choice = read_choice(&mut input)?;
        debug!("[CLI] choice: {:?}", choice);
        match choice {
            Choice::Yes => {
                session.submit_answer(true)?;
            }
            Choice::No => {
                session.submit_answer(false)?;
            }
            Choice::Restart => {
                writeln!(out, "{}", "Starting over!".cyan())?;
                session.reset();
            }
            Choice::Quit => {
                writeln!(out, "{}", "Quitting Early!".cyan())?;
                return Ok(());
            }
            Choice::DontKnow => {
                writeln!(out, "{}", "Please answer y or n.".bright_red())?;
            }
        }
    }
}

/// Answers every question from a string of `y`/`n` characters, then prints the
/// result.
pub fn run_script<W: Write>(
    session: &mut QuizSession,
    script: &str,
    json: bool,
    out: &mut W,
) -> Result<(), Error> {
    let answers = parse_script(script, session.bank().count())?;
    for answer in answers {
        session.submit_answer(answer)?;
    }

    match session.verdict() {
        Some(verdict) if json => print_json(&verdict, out),
        Some(verdict) => print_report(&verdict, out),
        None => Err(Error::BadScript(format!(
            "session still open after {} answers",
            session.answered_count()
        ))),
    }
}

fn parse_script(script: &str, question_count: usize) -> Result<Vec<bool>, Error> {
    let answers = script
        .chars()
        .enumerate()
        .map(|(idx, c)| match c.to_ascii_lowercase() {
            'y' => Ok(true),
            'n' => Ok(false),
            other => {
                warn!("[CLI] Bad character {:?} in answer script.", other);
                Err(Error::BadScript(format!(
                    "expected `y` or `n` at position {}, found {:?}",
                    idx + 1,
                    other
                )))
            }
        })
        .collect::<Result<Vec<bool>, Error>>()?;

    if answers.len() != question_count {
        return Err(Error::BadScript(format!(
            "expected {} answers, found {}",
            question_count,
            answers.len()
        )));
    }
    Ok(answers)
}

#[cfg(feature = "cli")]
fn read_choice<R: BufRead>(input: &mut R) -> Result<Choice, Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("[CLI] Input closed.");
        return Ok(Choice::Quit);
    }
    Ok(Choice::from_str(&line))
}

#[cfg(feature = "cli")]
fn progress_bar(fraction: f32) -> String {
    let filled = ((fraction * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        (fraction * 100.0).round() as u32
    )
}

#[cfg(feature = "cli")]
fn print_question<W: Write>(session: &QuizSession, out: &mut W) -> Result<(), Error> {
    let question = session.bank().at(session.current_index())?;
    let leading = format!(
        "Question {} of {}",
        session.question_number(),
        session.bank().count()
    );

    writeln!(out)?;
    writeln!(out, "{}", progress_bar(session.progress_fraction()).magenta())?;
    writeln!(out, "{}", leading.dimmed())?;
    writeln!(out, "{}", question.text.black().bold().on_white())?;
    Ok(())
}

fn print_report<W: Write>(verdict: &Verdict, out: &mut W) -> Result<(), Error> {
    let info = verdict.info();
    let (r, g, b) = info.accent;
    let headline = if info.alarming {
        info.message.bright_red().bold()
    } else {
        info.message.bright_green().bold()
    };

    writeln!(out)?;
    writeln!(out, "{}", info.emoji)?;
    writeln!(out, "{}", headline)?;
    writeln!(
        out,
        "{} {}",
        "Suspicion Score:".dimmed(),
        format!("{}%", verdict.score).truecolor(r, g, b).bold()
    )?;
    writeln!(out, "{}", info.advice)?;
    Ok(())
}

fn print_json<W: Write>(verdict: &Verdict, out: &mut W) -> Result<(), Error> {
    serde_json::to_writer(&mut *out, verdict)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    #[cfg(feature = "cli")]
    use crate::libshindan::hantei::Band;
    use crate::libshindan::session::Phase;
    #[cfg(feature = "cli")]
    use std::io::Cursor;

    #[cfg(feature = "cli")]
    fn run(input: &str, json: bool) -> (QuizSession, String) {
        let mut session = QuizSession::default();
        let mut out = Vec::new();
        cli_loop(&mut session, Cursor::new(input), &mut out, json).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_script() {
        assert_eq!(parse_script("yNn", 3).unwrap(), vec![true, false, false]);
        assert!(matches!(parse_script("yn", 3), Err(Error::BadScript(_))));
        assert!(matches!(parse_script("yxn", 3), Err(Error::BadScript(_))));
        assert!(matches!(parse_script("", 1), Err(Error::BadScript(_))));
    }

    #[test]
    fn test_run_script_json() {
        let mut session = QuizSession::default();
        let mut out = Vec::new();
        run_script(&mut session, "nynynynnnnnynny", true, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"score\":43,\"band\":\"moderate\"}\n"
        );
        assert_eq!(session.phase(), Phase::Complete);
    }

    #[test]
    fn test_run_script_report() {
        let mut session = QuizSession::default();
        let mut out = Vec::new();
        run_script(&mut session, &"y".repeat(15), false, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Major Red Flags"));
        assert!(out.contains("100%"));
    }

    #[test]
    fn test_run_script_rejects_short_script() {
        let mut session = QuizSession::default();
        let mut out = Vec::new();
        assert!(run_script(&mut session, "yyy", false, &mut out).is_err());
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_loop_all_no() {
        let input = "n\n".repeat(15) + "q\n";
        let (session, out) = run(&input, false);
        assert_eq!(session.verdict().map(|v| v.band), Some(Band::Low));
        assert!(out.contains("Question 1 of 15"));
        assert!(out.contains("Question 15 of 15"));
        assert!(out.contains("Probably Okay"));
        assert!(out.contains("0%"));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_loop_reprompts_on_unknown_input() {
        let (session, out) = run("maybe\ny\nq\n", false);
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.answer_for(1), Some(true));
        assert!(out.contains("Please answer y or n."));
        assert!(out.contains("Quitting Early!"));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_loop_restart_mid_quiz() {
        let (session, _) = run("y\ny\nr\nn\nq\n", false);
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.answer_for(1), Some(false));
        assert_eq!(session.answer_for(2), None);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_loop_restart_after_result() {
        let input = "y\n".repeat(15) + "r\n" + "n\nq\n";
        let (session, out) = run(&input, false);
        assert!(out.contains("Major Red Flags"));
        assert_eq!(session.phase(), Phase::Answering);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_loop_json_and_eof() {
        let (_, out) = run(&"y\n".repeat(15), true);
        assert!(out.ends_with("{\"score\":100,\"band\":\"severe\"}\n"));

        let (session, _) = run("y\n", false);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0), format!("[{}]   0%", "░".repeat(20)));
        assert_eq!(progress_bar(1.0), format!("[{}] 100%", "█".repeat(20)));
        assert!(progress_bar(0.5).ends_with(" 50%"));
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_loop_result_screen_rejects_other_input() {
        let input = "n\n".repeat(15) + "y\n" + "q\n";
        let (session, out) = run(&input, false);
        assert!(out.contains("Please answer r or q."));
        assert_eq!(out.matches("Probably Okay").count(), 2);
        assert_eq!(session.answered_count(), 15);
    }
}
