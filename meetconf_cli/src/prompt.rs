use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use meetconf_app_backend::{import::is_supported_input_path, LoadError};
use meetconf_entities::prelude::Participant;

pub const INPUT_PROMPT: &str = "What is the path to the input file?
For example, if the file with the class preferences is called student_prefs.csv and is in the \
directory you are running this from, type student_prefs.csv (without quotation marks).
";

pub const INVALID_PATH_PROMPT: &str =
    "Sorry, didn't get that. Please type in the name of a .csv or .tsv file and press return.
";

pub const UNREADABLE_PROMPT: &str = "
I can't read that. Make sure the input file has columns titled Name, Year, First Choice, \
Second Choice and Third Choice.

Type the input file name again:
";

fn ask<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<PathBuf, anyhow::Error>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("No input file given");
    }
    Ok(PathBuf::from(line.trim()))
}

/// Asks for an input file until one loads.
///
/// Paths without a supported extension and files that cannot be read are
/// asked for again. A file that reads fine but contains an invalid
/// participant ends the prompt with an error.
pub fn prompt_for_participants<R, W, L>(
    input: &mut R,
    output: &mut W,
    initial_path: Option<PathBuf>,
    mut load: L,
) -> Result<(PathBuf, Vec<Participant>), anyhow::Error>
where
    R: BufRead,
    W: Write,
    L: FnMut(&Path) -> Result<Vec<Participant>, LoadError>,
{
    let mut path = match initial_path {
        Some(path) => path,
        None => ask(input, output, INPUT_PROMPT)?,
    };

    loop {
        if !is_supported_input_path(&path) {
            path = ask(input, output, INVALID_PATH_PROMPT)?;
            continue;
        }

        match load(&path) {
            Ok(participants) => return Ok((path, participants)),
            Err(LoadError::Import(e)) => {
                tracing::warn!("Could not load {}: {}", path.display(), e);
                path = ask(input, output, UNREADABLE_PROMPT)?;
            }
            Err(e @ LoadError::Participant(_)) => return Err(e.into()),
        }
    }
}
