use crate::runtime::{
    error,
    interpreter::{CodeManagement, session::Session},
};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// The message printed once for every input line that failed.
pub const FAILURE_MESSAGE: &str = "operation failed";

/// Where the REPL gets its input from.  Returning `None` ends the session.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> error::Result<Option<String>>;
}

/// Reads lines from any buffered reader, printing the prompt to stdout first.
pub struct StdinLines<R: BufRead> {
    reader: R,
}

impl StdinLines<io::StdinLock<'static>> {
    pub fn new() -> Self {
        StdinLines {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> StdinLines<R> {
    pub fn from_reader(reader: R) -> Self {
        StdinLines { reader }
    }
}

impl<R: BufRead> LineSource for StdinLines<R> {
    fn read_line(&mut self, prompt: &str) -> error::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", prompt)?;
        stdout.flush()?;

        // Bad UTF-8 becomes replacement characters, the line then fails like any unknown word.
        let mut buffer = Vec::new();

        match self.reader.read_until(b'\n', &mut buffer)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&buffer).into_owned())),
        }
    }
}

/// Read and evaluate lines until the source runs dry.  A failing line prints the generic failure
/// message, the stack keeps whatever the line did before it failed.
///
/// A definition still open when the input ends is discarded.
pub fn run_repl<W: Write>(
    session: &mut Session<W>,
    source: &mut dyn LineSource,
    prompt: &str,
) -> error::Result<()> {
    while let Some(line) = source.read_line(prompt)? {
        if let Err(error) = session.evaluate_line(&line) {
            debug!("Line failed: {}", error);
            writeln!(session.output_mut(), "{}", FAILURE_MESSAGE)?;
        }

        session.output_mut().flush()?;
    }

    let _ = session.discard_pending();
    info!("End of input.");

    Ok(())
}
