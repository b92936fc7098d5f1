/// Interactive prompt — asks for the input file and an optional export.
///
/// Reads answers line by line from any `BufRead` so tests can script a
/// session. End of input is treated the same as typing `quit`.
use filmsleuth_core::report::DEFAULT_EXPORT_FILE;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Typed at the file-name prompt to leave without analysing anything.
pub const QUIT_COMMAND: &str = "quit";

const BANNER: &str = "Movie Rating Analyzer";
const BANNER_RULE: usize = 35;
const FILENAME_QUESTION: &str = "Enter the movies file name (or 'quit' to exit): ";

/// What to analyse, and where to export the report (if anywhere).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub input: PathBuf,
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Run(RunRequest),
    Quit,
}

/// Run the prompt dialogue once.
pub fn prompt_for_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<PromptOutcome> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{}", "=".repeat(BANNER_RULE))?;

    let filename = loop {
        let Some(answer) = ask(input, out, FILENAME_QUESTION)? else {
            return Ok(PromptOutcome::Quit);
        };
        if answer.eq_ignore_ascii_case(QUIT_COMMAND) {
            writeln!(out, "Goodbye!")?;
            return Ok(PromptOutcome::Quit);
        }
        if !answer.is_empty() {
            break answer;
        }
        writeln!(out, "Please enter a valid filename.")?;
    };

    let wants_export = ask(input, out, "Export analysis to file? (y/N): ")?
        .map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
        .unwrap_or(false);

    let export = if wants_export {
        let answer = ask(
            input,
            out,
            &format!("Enter output filename (default: {DEFAULT_EXPORT_FILE}): "),
        )?
        .unwrap_or_default();
        if answer.is_empty() {
            Some(PathBuf::from(DEFAULT_EXPORT_FILE))
        } else {
            Some(PathBuf::from(answer))
        }
    } else {
        None
    };

    Ok(PromptOutcome::Run(RunRequest {
        input: PathBuf::from(filename),
        export,
    }))
}

/// Print `question` and read one trimmed answer. `None` at end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
