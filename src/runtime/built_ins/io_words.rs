use crate::{ add_native_word,
             runtime::{ error,
                        interpreter::Interpreter } };



/// Pop the top value and print it on its own line.  The value is only removed once it has been
/// written.
///
/// Signature: `value -- `
fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let value = interpreter.stack().peek()?;

    interpreter.print_value(value)?;
    let _ = interpreter.stack_mut().pop()?;

    Ok(())
}



/// Register the I/O words with the given interpreter.
pub fn register_io_words(interpreter: &mut dyn Interpreter)
{
    add_native_word!(interpreter, ".", word_print,
        "Pop and print the top value of the stack.",
        "value -- ");
}
