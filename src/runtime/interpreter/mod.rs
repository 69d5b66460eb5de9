use crate::{
    lang::{compilation::CompilerState, tokenizing::Token},
    runtime::{
        data_structures::{
            dictionary::{Dictionary, WordInfo, WordType},
            stack::Stack,
        },
        error,
    },
};
use std::rc::Rc;

pub mod session;

/// A unit of behaviour that runs against the interpreter.  It either completes its effect and
/// returns `Ok`, or fails without finishing it.
///
/// Handlers are shared through `Rc` so that a compiled word and the dictionary can hold the same
/// handler, and so that replacing a dictionary entry leaves earlier compiled words untouched.
pub trait WordHandler {
    fn call(&self, interpreter: &mut dyn Interpreter) -> error::Result<()>;

    /// How many compiled words deep a call to this handler can go.  Primitives are 0.
    fn nesting_depth(&self) -> usize {
        0
    }
}

/// Signature of the Rust functions that implement native words.
pub type NativeFn = fn(&mut dyn Interpreter) -> error::Result<()>;

/// A primitive word implemented in Rust.
pub struct NativeWord {
    handler: NativeFn,
}

impl NativeWord {
    pub fn new(handler: NativeFn) -> NativeWord {
        NativeWord { handler }
    }
}

impl WordHandler for NativeWord {
    fn call(&self, interpreter: &mut dyn Interpreter) -> error::Result<()> {
        (self.handler)(interpreter)
    }
}

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The Rust function implementing the word.  A simple description of the word.  As well
/// as the word's stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        use std::rc::Rc;
        use $crate::runtime::{
            data_structures::dictionary::WordType,
            interpreter::{NativeFn, NativeWord},
        };

        $interpreter.add_word(
            $name.to_string(),
            Rc::new(NativeWord::new($function as NativeFn)),
            $description.to_string(),
            $signature.to_string(),
            WordType::Native,
        );
    }};
}

/// Trait for managing the interpreter's data stack.  Intended to be called by word handlers.
pub trait InterpreterStack {
    /// Use to examine the full data stack.
    fn stack(&self) -> &Stack;

    /// Mutable access to the data stack.  The stack's own operations keep it unchanged on failure.
    fn stack_mut(&mut self) -> &mut Stack;

    /// Push a value onto the stack.  This can not fail.
    fn push(&mut self, value: i64) {
        self.stack_mut().push(value);
    }
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// Add a word to the dictionary, replacing any existing word with the same name.
    fn add_word(
        &mut self,
        name: String,
        handler: Rc<dyn WordHandler>,
        description: String,
        signature: String,
        word_type: WordType,
    );

    /// Find a word in the interpreter's dictionary by its exact name.
    fn find_word(&self, word: &str) -> Option<&WordInfo>;

    /// Find and execute a word by name.  If the word is not found an unresolved token error is
    /// returned.
    fn execute_word_named(&mut self, word: &str) -> error::Result<()>;

    /// The current word dictionary.
    fn dictionary(&self) -> &Dictionary;
}

/// Trait for feeding source code into the interpreter.
pub trait CodeManagement {
    /// Where the word definition state machine currently stands.
    fn compiler_state(&self) -> CompilerState;

    /// Evaluate tokens left to right, stopping at the first one that fails.  Work done by the
    /// tokens before the failure is kept.
    fn evaluate(&mut self, tokens: &[Token]) -> error::Result<()>;

    /// Tokenize and evaluate a single line of input.
    fn evaluate_line(&mut self, line: &str) -> error::Result<()>;

    /// Evaluate a multi-line source, one line at a time.  The path is used to report where a
    /// failure happened.
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>;
}

/// Core interpreter trait, bringing the stack, word and code management together with the
/// interpreter's output.
pub trait Interpreter: InterpreterStack + WordManagement + CodeManagement {
    /// Write a value to the interpreter's output on its own line.
    fn print_value(&mut self, value: i64) -> error::Result<()>;

    /// Clear the stack, drop any open definition and forget every word defined since the standard
    /// library was installed.
    fn reset(&mut self);
}
