use std::collections::VecDeque;
use std::io::Cursor;

use mforth::lang::compilation::CompilerState;
use mforth::repl::{FAILURE_MESSAGE, LineSource, StdinLines, run_repl};
use mforth::runtime::error::{self, ScriptError};
use mforth::runtime::interpreter::session::Session;
use mforth::runtime::interpreter::{CodeManagement, Interpreter, InterpreterStack, WordManagement};

// Feeds canned lines to the REPL and remembers every prompt it was asked to show.
struct ScriptedLines {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    fn new(lines: &[&str]) -> Self {
        ScriptedLines {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> error::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

fn run(lines: &[&str]) -> (Session<Vec<u8>>, String) {
    let mut session = Session::with_output(Vec::new());
    let mut source = ScriptedLines::new(lines);

    run_repl(&mut session, &mut source, "goforth>").unwrap();

    let output = String::from_utf8(session.output().clone()).unwrap();
    (session, output)
}

#[test]
fn prints_values_and_failures() {
    let (_, output) = run(&["1 2 + .", "foo", "5 ."]);

    assert_eq!(output, format!("3\n{}\n5\n", FAILURE_MESSAGE));
}

#[test]
fn one_failure_message_per_line() {
    let (_, output) = run(&["foo bar baz", "+ + +"]);

    assert_eq!(output, format!("{0}\n{0}\n", FAILURE_MESSAGE));
}

#[test]
fn failed_line_keeps_earlier_work() {
    let (session, output) = run(&["1 0 / 5 .", "drop-me"]);

    assert_eq!(output, format!("{0}\n{0}\n", FAILURE_MESSAGE));
    assert_eq!(session.stack().as_slice(), &[1, 0]);
}

#[test]
fn prompts_before_every_read() {
    let mut session = Session::with_output(Vec::new());
    let mut source = ScriptedLines::new(&["1", "2"]);

    run_repl(&mut session, &mut source, "ok>").unwrap();

    // Two lines plus the read that found the end of input.
    assert_eq!(source.prompts, vec!["ok>", "ok>", "ok>"]);
}

#[test]
fn definitions_carry_across_lines() {
    let (session, output) = run(&[": square", "dup *", ";", "7 square ."]);

    assert_eq!(output, "49\n");
    assert!(session.stack().is_empty());
}

#[test]
fn open_definition_is_dropped_at_end_of_input() {
    let (session, output) = run(&[": unfinished 1 2"]);

    assert!(output.is_empty());
    assert_eq!(session.compiler_state(), CompilerState::Idle);
    assert!(session.find_word("unfinished").is_none());
}

#[test]
fn reads_from_a_buffered_reader() {
    let mut session = Session::with_output(Vec::new());
    let mut source = StdinLines::from_reader(Cursor::new("2 3 * .\n4 .\n"));

    run_repl(&mut session, &mut source, "test>").unwrap();

    assert_eq!(session.output(), b"6\n4\n");
}

#[test]
fn invalid_utf8_fails_only_its_own_line() {
    let mut session = Session::with_output(Vec::new());
    let mut source = StdinLines::from_reader(Cursor::new(&b"1 .\n\xff\n2 .\n"[..]));

    run_repl(&mut session, &mut source, "test>").unwrap();

    let output = String::from_utf8(session.output().clone()).unwrap();
    assert_eq!(output, format!("1\n{}\n2\n", FAILURE_MESSAGE));
}

#[test]
fn reset_returns_to_the_standard_library() {
    let mut session = Session::with_output(Vec::new());
    session.evaluate_line(": dup 99 ; 1 2 : open 3").unwrap();

    session.reset();

    assert!(session.stack().is_empty());
    assert_eq!(session.compiler_state(), CompilerState::Idle);
    assert!(session.find_word("open").is_none());

    session.evaluate_line("4 dup").unwrap();
    assert_eq!(session.stack().as_slice(), &[4, 4]);
}

#[test]
fn process_source_runs_every_line() {
    let mut session = Session::with_output(Vec::new());
    let source = ": cube\n  dup dup * *\n;\n\n3 cube .\n";

    session.process_source("cube.f", source).unwrap();

    assert_eq!(session.output(), b"27\n");
}

#[test]
fn process_source_reports_the_failing_line() {
    let mut session = Session::with_output(Vec::new());
    let result = session.process_source("broken.f", "1 2 +\n3 nope\n4");

    match result {
        Err(ScriptError::Script { path, line, error }) => {
            assert_eq!(path, "broken.f");
            assert_eq!(line, 2);
            assert!(matches!(*error, ScriptError::UnresolvedToken(ref t) if t == "nope"));
        }
        other => panic!("unexpected result {:?}", other),
    }

    assert_eq!(session.stack().as_slice(), &[3, 3]);
}

#[test]
fn process_source_drops_an_unterminated_definition() {
    let mut session = Session::with_output(Vec::new());
    session.process_source("open.f", ": half 2 /").unwrap();

    assert_eq!(session.compiler_state(), CompilerState::Idle);
    assert!(session.find_word("half").is_none());
}

#[test]
fn dictionary_listing() {
    let session = Session::with_output(Vec::new());
    let listing = session.dictionary().to_string();

    assert!(!session.dictionary().is_empty());
    assert_eq!(session.dictionary().len(), 12);
    assert!(listing.starts_with("12 words defined."));
    assert!(listing.contains("swap"));
    assert!(listing.contains("native"));
}
