use std::{ io::{ self,
                 Stdout,
                 Write },
           rc::Rc };
use log::{ debug,
           trace,
           warn };
use crate::{ lang::{ compilation::{ Compiler,
                                    CompilerState,
                                    PendingDefinition,
                                    PushLiteral },
                     tokenizing::{ parse_literal,
                                   tokenize_from_source,
                                   Token } },
             runtime::{ built_ins::{ base_words::register_base_words,
                                     io_words::register_io_words },
                        data_structures::{ contextual_data::ContextualData,
                                           dictionary::{ Dictionary,
                                                         WordInfo,
                                                         WordType },
                                           stack::Stack },
                        error::{ self,
                                 ScriptError },
                        interpreter::{ CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       WordHandler,
                                       WordManagement } } };



/// One interpreter session: the data stack, the word dictionary and the state of any word
/// definition in progress.  Everything lives for as long as the session does, nothing is global.
///
/// Values printed by `.` are written to `output`.
pub struct Session<W: Write = Stdout>
{
    /// The data stack used by the interpreter.
    stack: Stack,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// The word definition state machine.
    compiler: Compiler,

    /// Where printed values go.
    output: W
}


impl Session<Stdout>
{
    /// Create a session seeded with the standard library that prints to stdout.
    pub fn new() -> Self
    {
        Session::with_output(io::stdout())
    }
}


impl Default for Session<Stdout>
{
    fn default() -> Self
    {
        Self::new()
    }
}


impl<W: Write> Session<W>
{
    /// Create a session seeded with the standard library, printing to the given writer.
    ///
    /// A context is marked once the standard library is in place so that reset can return to it.
    pub fn with_output(output: W) -> Self
    {
        let mut session = Session
            {
                stack: Stack::new(),
                dictionary: Dictionary::new(),
                compiler: Compiler::new(),
                output
            };

        register_base_words(&mut session);
        register_io_words(&mut session);

        session.dictionary.mark_context();

        debug!("Session started with {} words.", session.dictionary.len());
        session
    }

    /// The writer printed values are sent to.
    pub fn output(&self) -> &W
    {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W
    {
        &mut self.output
    }

    /// Consume the session and hand back its writer.
    pub fn into_output(self) -> W
    {
        self.output
    }

    /// Throw away an open definition without installing it.
    pub fn discard_pending(&mut self) -> Option<PendingDefinition>
    {
        let discarded = self.compiler.discard();

        if let Some(pending) = &discarded
        {
            warn!("Discarding unfinished definition of {}.", pending_name(pending));
        }

        discarded
    }

    /// Process a single token, either feeding it to the open definition or running it.
    fn evaluate_token(&mut self, token: &Token) -> error::Result<()>
    {
        // The token right after `:` is always the name, even if it is one of the markers.
        if let CompilerState::AwaitingName = self.compiler.state()
        {
            trace!("Naming new word {}.", token);
            self.compiler.set_name(token.text());
            return Ok(());
        }

        match token
        {
            Token::StartDefinition =>
                {
                    if let Some(replaced) = self.compiler.begin()
                    {
                        warn!("Definition of {} replaced by a new definition.",
                              pending_name(&replaced));
                    }

                    Ok(())
                },

            Token::EndDefinition => self.install_definition(),

            Token::Word(text) =>
                {
                    if let CompilerState::Accumulating = self.compiler.state()
                    {
                        self.compile_token(text)
                    }
                    else
                    {
                        self.interpret_token(text)
                    }
                }
        }
    }

    /// Resolve a body token right now, binding it to the handler the dictionary holds today.
    fn compile_token(&mut self, text: &str) -> error::Result<()>
    {
        match self.resolve(text)
        {
            Some(handler) =>
                {
                    self.compiler.append(handler);
                    Ok(())
                },

            None =>
                {
                    let _ = self.discard_pending();
                    Err(ScriptError::UnresolvedToken(text.to_string()))
                }
        }
    }

    /// Run a word, or push a literal, against the stack.
    fn interpret_token(&mut self, text: &str) -> error::Result<()>
    {
        if let Some(word) = self.dictionary.try_get(text)
        {
            let handler = word.handler.clone();
            return handler.call(self);
        }

        match parse_literal(text)
        {
            Some(value) =>
                {
                    self.stack.push(value);
                    Ok(())
                },

            None => Err(ScriptError::UnresolvedToken(text.to_string()))
        }
    }

    /// Close the open definition and add the new word to the dictionary.
    fn install_definition(&mut self) -> error::Result<()>
    {
        let word = self.compiler.finish()?;
        let name = word.name().to_string();

        debug!("Defined word {} with {} operation(s).", name, word.len());

        self.add_word(name,
                      Rc::new(word),
                      "User defined word.".to_string(),
                      String::new(),
                      WordType::Scripted);
        Ok(())
    }

    /// Dictionary entries win over literals, so a word named `1` shadows the number.
    fn resolve(&self, text: &str) -> Option<Rc<dyn WordHandler>>
    {
        if let Some(word) = self.dictionary.try_get(text)
        {
            return Some(word.handler.clone());
        }

        parse_literal(text).map(|value| Rc::new(PushLiteral(value)) as Rc<dyn WordHandler>)
    }
}


fn pending_name(pending: &PendingDefinition) -> &str
{
    pending.name.as_deref().unwrap_or("<unnamed>")
}


impl<W: Write> InterpreterStack for Session<W>
{
    fn stack(&self) -> &Stack
    {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut Stack
    {
        &mut self.stack
    }
}


impl<W: Write> WordManagement for Session<W>
{
    fn add_word(&mut self,
                name: String,
                handler: Rc<dyn WordHandler>,
                description: String,
                signature: String,
                word_type: WordType)
    {
        let info = WordInfo
            {
                name: name.clone(),
                word_type,
                description,
                signature,
                handler
            };

        self.dictionary.insert(name, info);
    }

    fn find_word(&self, word: &str) -> Option<&WordInfo>
    {
        self.dictionary.try_get(word)
    }

    fn execute_word_named(&mut self, word: &str) -> error::Result<()>
    {
        let handler = match self.dictionary.try_get(word)
            {
                Some(info) => info.handler.clone(),
                None => return Err(ScriptError::UnresolvedToken(word.to_string()))
            };

        handler.call(self)
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }
}


impl<W: Write> CodeManagement for Session<W>
{
    fn compiler_state(&self) -> CompilerState
    {
        self.compiler.state()
    }

    fn evaluate(&mut self, tokens: &[Token]) -> error::Result<()>
    {
        for token in tokens
        {
            if let Err(error) = self.evaluate_token(token)
            {
                debug!("Token {} failed: {}  Stack: {}", token, error, self.stack);
                return Err(error);
            }
        }

        Ok(())
    }

    fn evaluate_line(&mut self, line: &str) -> error::Result<()>
    {
        let tokens = tokenize_from_source(line);
        self.evaluate(&tokens)
    }

    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>
    {
        for (index, line) in source.lines().enumerate()
        {
            if let Err(error) = self.evaluate_line(line)
            {
                return Err(ScriptError::in_script(path, index + 1, error));
            }
        }

        if self.discard_pending().is_some()
        {
            warn!("{} ended inside a word definition.", path);
        }

        Ok(())
    }
}


impl<W: Write> Interpreter for Session<W>
{
    fn print_value(&mut self, value: i64) -> error::Result<()>
    {
        writeln!(self.output, "{}", value)?;
        Ok(())
    }

    fn reset(&mut self)
    {
        let _ = self.discard_pending();
        self.stack.clear();

        // Drop every word defined since the standard library, then mark again for the next reset.
        self.dictionary.release_context();
        self.dictionary.mark_context();
    }
}
