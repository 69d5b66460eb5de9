use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Is the second value greater than the top value?  True is -1 and false is 0.
///
/// Signature: `a b -- flag`
fn word_greater_than(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().greater_than()
}

/// Is the second value less than the top value?
///
/// Signature: `a b -- flag`
fn word_less_than(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().less_than()
}

/// Are the top two values equal?
///
/// Signature: `a b -- flag`
fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().equal_to()
}

/// Bitwise and of the top two values.  Also works as logical and on flags.
///
/// Signature: `a b -- result`
fn word_and(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().and()
}

/// Bitwise or of the top two values.
///
/// Signature: `a b -- result`
fn word_or(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().or()
}

/// Register the comparison and bit logic words.
pub fn register_math_logic_and_bit_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ">",
        word_greater_than,
        "Is the second value greater than the top value?",
        "a b -- flag"
    );

    add_native_word!(
        interpreter,
        "<",
        word_less_than,
        "Is the second value less than the top value?",
        "a b -- flag"
    );

    add_native_word!(
        interpreter,
        "=",
        word_equal,
        "Are the top two values equal?",
        "a b -- flag"
    );

    add_native_word!(
        interpreter,
        "and",
        word_and,
        "Bitwise and of the top two values.",
        "a b -- result"
    );

    add_native_word!(
        interpreter,
        "or",
        word_or,
        "Bitwise or of the top two values.",
        "a b -- result"
    );
}
