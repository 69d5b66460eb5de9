use crate::runtime::{
    error::{self, ScriptError},
    interpreter::{Interpreter, WordHandler},
};
use log::trace;
use std::{mem, rc::Rc};

/// The deepest chain of compiled words a definition may create.  Calling and dropping a compiled
/// word both recurse once per level, so this keeps them well inside a thread's native stack.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// Where the word definition state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompilerState {
    /// No definition is open, tokens are executed immediately.
    Idle,

    /// A `:` was seen, the next token becomes the new word's name.
    AwaitingName,

    /// The name is known, tokens are resolved and appended to the body.
    Accumulating,
}

/// A word being built between `:` and `;`.
#[derive(Default)]
pub struct PendingDefinition {
    /// The name of the word, filled in by the first token after `:`.
    pub name: Option<String>,

    /// The resolved handlers that make up the body, in order.
    pub body: Vec<Rc<dyn WordHandler>>,
}

/// Pushes a literal that was found in a word body.
pub struct PushLiteral(pub i64);

impl WordHandler for PushLiteral {
    fn call(&self, interpreter: &mut dyn Interpreter) -> error::Result<()> {
        interpreter.push(self.0);
        Ok(())
    }
}

/// A word compiled from a colon definition.  Every reference in the body was resolved when the
/// word was compiled, later changes to the dictionary do not affect it.
///
/// Execution recurses through nested compiled words, see `MAX_NESTING_DEPTH`.
pub struct ScriptFunction {
    /// The name of the word.
    name: String,

    /// The handlers run in order when the word executes.
    body: Vec<Rc<dyn WordHandler>>,

    /// One more than the deepest handler in the body.
    depth: usize,
}

impl ScriptFunction {
    /// Create the new ScriptFunction handler.
    pub fn new(name: String, body: Vec<Rc<dyn WordHandler>>) -> ScriptFunction {
        let depth = 1 + body
            .iter()
            .map(|handler| handler.nesting_depth())
            .max()
            .unwrap_or(0);

        ScriptFunction { name, body, depth }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Run the body in sequence.  The first failure stops the word, whatever ran before it stays done.
impl WordHandler for ScriptFunction {
    fn call(&self, interpreter: &mut dyn Interpreter) -> error::Result<()> {
        trace!("Executing {}.", self.name);

        for handler in self.body.iter() {
            handler.call(interpreter)?;
        }

        Ok(())
    }

    fn nesting_depth(&self) -> usize {
        self.depth
    }
}

/// The word definition state machine.  Holds at most one pending definition.
#[derive(Default)]
pub struct Compiler {
    pending: Option<PendingDefinition>,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler { pending: None }
    }

    pub fn state(&self) -> CompilerState {
        match &self.pending {
            None => CompilerState::Idle,
            Some(PendingDefinition { name: None, .. }) => CompilerState::AwaitingName,
            Some(PendingDefinition { name: Some(_), .. }) => CompilerState::Accumulating,
        }
    }

    /// Open a new definition.  An already open definition is replaced and handed back.
    pub fn begin(&mut self) -> Option<PendingDefinition> {
        mem::replace(&mut self.pending, Some(PendingDefinition::default()))
    }

    /// Record the name of the open definition.  Any text is accepted.
    pub fn set_name(&mut self, name: &str) {
        if let Some(pending) = self.pending.as_mut() {
            pending.name = Some(name.to_string());
        }
    }

    /// Append a resolved handler to the body of the open definition.
    pub fn append(&mut self, handler: Rc<dyn WordHandler>) {
        if let Some(pending) = self.pending.as_mut() {
            pending.body.push(handler);
        }
    }

    /// Throw away the open definition, if any, without installing it.
    pub fn discard(&mut self) -> Option<PendingDefinition> {
        self.pending.take()
    }

    /// Close the open definition and build its word.  The compiler is idle afterwards, whatever
    /// the outcome.
    pub fn finish(&mut self) -> error::Result<ScriptFunction> {
        let word = match self.pending.take() {
            None => return Err(ScriptError::DefinitionNotOpen),
            Some(PendingDefinition { name: None, .. }) => return Err(ScriptError::MissingWordName),
            Some(PendingDefinition {
                name: Some(name),
                body,
            }) => ScriptFunction::new(name, body),
        };

        if word.depth > MAX_NESTING_DEPTH {
            return Err(ScriptError::NestingTooDeep {
                name: word.name,
                depth: word.depth,
                limit: MAX_NESTING_DEPTH,
            });
        }

        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_the_states() {
        let mut compiler = Compiler::new();
        assert_eq!(compiler.state(), CompilerState::Idle);

        assert!(compiler.begin().is_none());
        assert_eq!(compiler.state(), CompilerState::AwaitingName);

        compiler.set_name("five");
        assert_eq!(compiler.state(), CompilerState::Accumulating);

        compiler.append(Rc::new(PushLiteral(5)));
        let word = compiler.finish().unwrap();

        assert_eq!(word.name(), "five");
        assert_eq!(word.len(), 1);
        assert_eq!(compiler.state(), CompilerState::Idle);
    }

    #[test]
    fn begin_replaces_an_open_definition() {
        let mut compiler = Compiler::new();
        compiler.begin();
        compiler.set_name("old");
        compiler.append(Rc::new(PushLiteral(1)));

        let replaced = compiler.begin().unwrap();

        assert_eq!(replaced.name.as_deref(), Some("old"));
        assert_eq!(replaced.body.len(), 1);
        assert_eq!(compiler.state(), CompilerState::AwaitingName);
    }

    #[test]
    fn finish_without_a_definition_fails() {
        let mut compiler = Compiler::new();
        assert!(matches!(
            compiler.finish(),
            Err(ScriptError::DefinitionNotOpen)
        ));
    }

    #[test]
    fn finish_without_a_name_fails_and_goes_idle() {
        let mut compiler = Compiler::new();
        compiler.begin();

        assert!(matches!(compiler.finish(), Err(ScriptError::MissingWordName)));
        assert_eq!(compiler.state(), CompilerState::Idle);
    }

    #[test]
    fn an_empty_body_is_allowed() {
        let mut compiler = Compiler::new();
        compiler.begin();
        compiler.set_name("nothing");

        assert!(compiler.finish().unwrap().is_empty());
    }

    #[test]
    fn depth_counts_nested_compiled_words() {
        let inner: Rc<dyn WordHandler> =
            Rc::new(ScriptFunction::new("inner".to_string(), vec![Rc::new(PushLiteral(1))]));
        let outer = ScriptFunction::new("outer".to_string(), vec![Rc::new(PushLiteral(2)), inner]);

        assert_eq!(PushLiteral(3).nesting_depth(), 0);
        assert_eq!(outer.nesting_depth(), 2);
    }

    #[test]
    fn finish_rejects_words_nested_too_deep() {
        let mut deepest: Rc<dyn WordHandler> = Rc::new(ScriptFunction::new("n".to_string(), vec![]));

        while deepest.nesting_depth() < MAX_NESTING_DEPTH {
            deepest = Rc::new(ScriptFunction::new("n".to_string(), vec![deepest]));
        }

        let mut compiler = Compiler::new();
        compiler.begin();
        compiler.set_name("n");
        compiler.append(deepest);

        assert!(matches!(
            compiler.finish(),
            Err(ScriptError::NestingTooDeep { depth, limit: MAX_NESTING_DEPTH, .. })
                if depth == MAX_NESTING_DEPTH + 1
        ));
        assert_eq!(compiler.state(), CompilerState::Idle);
    }

    #[test]
    fn discard_drops_the_definition() {
        let mut compiler = Compiler::new();
        assert!(compiler.discard().is_none());

        compiler.begin();
        compiler.set_name("gone");
        assert!(compiler.discard().is_some());
        assert_eq!(compiler.state(), CompilerState::Idle);
    }
}
