use crate::add_native_word;
use crate::runtime::error;
use crate::runtime::interpreter::Interpreter;

/// Add the top two values, wrapping on overflow.
///
/// Signature: `a b -- a+b`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().add()
}

/// Subtract the top value from the one below it.
///
/// Signature: `a b -- a-b`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().subtract()
}

/// Signature: `a b -- a*b`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().multiply()
}

/// Divide, truncating toward zero.  Fails on a zero divisor.
///
/// Signature: `a b -- a/b`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.stack_mut().divide()
}

pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "+", word_add,
        "Add the top two values.",
        "a b -- a+b");

    add_native_word!(interpreter, "-", word_subtract,
        "Subtract the top value from the one beneath it.",
        "a b -- a-b");

    add_native_word!(interpreter, "*", word_multiply,
        "Multiply the top two values.",
        "a b -- a*b");

    add_native_word!(interpreter, "/", word_divide,
        "Divide the second value by the top value, truncating toward zero.",
        "a b -- a/b");
}
