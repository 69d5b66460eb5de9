use clap::Parser;
use log::info;
use mforth::{
    repl::{StdinLines, run_repl},
    runtime::{
        error,
        interpreter::{CodeManagement, WordManagement, session::Session},
    },
};
use std::{fs::read_to_string, path::PathBuf};

/// A minimal interactive Forth: an integer stack, a word dictionary and colon definitions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source files to evaluate, line by line, before anything else.
    scripts: Vec<PathBuf>,

    /// Prompt printed before each line of REPL input.
    #[arg(long, env = "MFORTH_PROMPT", default_value = "goforth>")]
    prompt: String,

    /// Enter the REPL after the scripts have run.
    #[arg(short, long)]
    interactive: bool,

    /// Print the words in the dictionary and exit.
    #[arg(long)]
    words: bool,
}

fn main() -> error::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let mut session = Session::new();

    if args.words {
        print!("{}", session.dictionary());
        return Ok(());
    }

    // Scripts run first, any failure ends the program with the script's location.
    for script in args.scripts.iter() {
        let path = script.to_string_lossy();
        let source = read_to_string(script)?;

        info!("Processing {}.", path);
        session.process_source(&path, &source)?;
    }

    if args.scripts.is_empty() || args.interactive {
        let mut input = StdinLines::new();
        run_repl(&mut session, &mut input, &args.prompt)?;
    }

    Ok(())
}
