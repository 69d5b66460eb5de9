/// Addition, subtraction, multiplication and division.
mod simple_arithmetic_words;

/// Words that manipulate the data stack.
mod stack_words;

/// Words that work with comparisons and bit logic.
mod math_logic_and_bit_words;

use crate::runtime::{
    built_ins::base_words::{
        math_logic_and_bit_words::register_math_logic_and_bit_words,
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_stack_words(interpreter);
    register_simple_arithmetic_words(interpreter);
    register_math_logic_and_bit_words(interpreter);
}
