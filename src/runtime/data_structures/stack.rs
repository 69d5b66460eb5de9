use crate::runtime::error::{self, ScriptError};
use std::fmt::{self, Display, Formatter};

/// Forth encodes a true flag with every bit set.
pub const TRUE_FLAG: i64 = -1;

/// And false with none of them.
pub const FALSE_FLAG: i64 = 0;

/// Convert a Rust boolean into a Forth flag.
pub fn to_flag(value: bool) -> i64 {
    if value { TRUE_FLAG } else { FALSE_FLAG }
}

/// The data stack of 64-bit integers managed by the interpreter.  The last item of the underlying
/// vector is the top of the stack.
///
/// Every operation checks its operands before touching the stack, so a failed operation always
/// leaves the stack exactly as it found it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<i64>,
}

impl Stack {
    /// Create a new empty stack.
    pub fn new() -> Stack {
        Stack { items: Vec::new() }
    }

    /// Push a value onto the top of the stack.  This can not fail.
    pub fn push(&mut self, value: i64) {
        self.items.push(value);
    }

    /// The number of values currently on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// View the stack from bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }

    /// Drop every value on the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read the top value without removing it.
    pub fn peek(&self) -> error::Result<i64> {
        self.require(1)?;
        Ok(self.items[self.items.len() - 1])
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> error::Result<i64> {
        self.items.pop().ok_or(ScriptError::StackUnderflow {
            needed: 1,
            available: 0,
        })
    }

    /// Replace the top two values `a b` with `op(a, b)`.
    pub fn binary_op(&mut self, op: fn(i64, i64) -> i64) -> error::Result<()> {
        self.require(2)?;

        let size = self.items.len();
        self.items[size - 2] = op(self.items[size - 2], self.items[size - 1]);
        self.items.truncate(size - 1);

        Ok(())
    }

    /// Signature: `a b -- a+b`
    pub fn add(&mut self) -> error::Result<()> {
        self.binary_op(i64::wrapping_add)
    }

    /// Signature: `a b -- a-b`
    pub fn subtract(&mut self) -> error::Result<()> {
        self.binary_op(i64::wrapping_sub)
    }

    /// Signature: `a b -- a*b`
    pub fn multiply(&mut self) -> error::Result<()> {
        self.binary_op(i64::wrapping_mul)
    }

    /// Integer division truncating toward zero.  A zero divisor fails before anything is removed.
    ///
    /// Signature: `a b -- a/b`
    pub fn divide(&mut self) -> error::Result<()> {
        self.require(2)?;

        if self.items[self.items.len() - 1] == 0 {
            return Err(ScriptError::DivisionByZero);
        }

        self.binary_op(i64::wrapping_div)
    }

    /// Signature: `a b -- flag`
    pub fn greater_than(&mut self) -> error::Result<()> {
        self.binary_op(|a, b| to_flag(a > b))
    }

    /// Signature: `a b -- flag`
    pub fn less_than(&mut self) -> error::Result<()> {
        self.binary_op(|a, b| to_flag(a < b))
    }

    /// Signature: `a b -- flag`
    pub fn equal_to(&mut self) -> error::Result<()> {
        self.binary_op(|a, b| to_flag(a == b))
    }

    /// Bitwise and.
    pub fn and(&mut self) -> error::Result<()> {
        self.binary_op(|a, b| a & b)
    }

    /// Bitwise or.
    pub fn or(&mut self) -> error::Result<()> {
        self.binary_op(|a, b| a | b)
    }

    /// Signature: `a -- a a`
    pub fn duplicate(&mut self) -> error::Result<()> {
        let value = self.peek()?;
        self.items.push(value);

        Ok(())
    }

    /// Signature: `a b -- b a`
    pub fn swap(&mut self) -> error::Result<()> {
        self.require(2)?;

        let size = self.items.len();
        self.items.swap(size - 2, size - 1);

        Ok(())
    }

    /// Fail with an underflow error unless at least `needed` values are present.
    fn require(&self, needed: usize) -> error::Result<()> {
        let available = self.items.len();

        if available < needed {
            return Err(ScriptError::StackUnderflow { needed, available });
        }

        Ok(())
    }
}

impl From<Vec<i64>> for Stack {
    fn from(items: Vec<i64>) -> Self {
        Stack { items }
    }
}

/// Render the stack bottom to top, the way `.s` prints it in most Forths.
impl Display for Stack {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<{}>", self.items.len())?;

        for item in self.items.iter() {
            write!(f, " {}", item)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(items: &[i64]) -> Stack {
        Stack::from(items.to_vec())
    }

    #[test]
    fn binary_ops_use_the_top_as_the_right_operand() {
        let mut s = stack(&[10, 3]);
        s.subtract().unwrap();
        assert_eq!(s.as_slice(), &[7]);

        let mut s = stack(&[3, 4]);
        s.greater_than().unwrap();
        assert_eq!(s.as_slice(), &[FALSE_FLAG]);

        let mut s = stack(&[3, 4]);
        s.less_than().unwrap();
        assert_eq!(s.as_slice(), &[TRUE_FLAG]);
    }

    #[test]
    fn arithmetic_wraps() {
        let mut s = stack(&[i64::MAX, 1]);
        s.add().unwrap();
        assert_eq!(s.as_slice(), &[i64::MIN]);

        let mut s = stack(&[i64::MIN, -1]);
        s.divide().unwrap();
        assert_eq!(s.as_slice(), &[i64::MIN]);
    }

    #[test]
    fn division_truncates_toward_zero() {
        let mut s = stack(&[-7, 2]);
        s.divide().unwrap();
        assert_eq!(s.as_slice(), &[-3]);
    }

    #[test]
    fn divide_by_zero_leaves_the_stack_alone() {
        let mut s = stack(&[1, 0]);
        assert!(matches!(s.divide(), Err(ScriptError::DivisionByZero)));
        assert_eq!(s.as_slice(), &[1, 0]);
    }

    #[test]
    fn underflow_leaves_the_stack_alone() {
        let mut s = stack(&[5]);

        for op in [Stack::add, Stack::divide, Stack::swap, Stack::or] {
            let result = op(&mut s);
            assert!(matches!(
                result,
                Err(ScriptError::StackUnderflow {
                    needed: 2,
                    available: 1
                })
            ));
            assert_eq!(s.as_slice(), &[5]);
        }

        let mut empty = Stack::new();
        assert!(empty.duplicate().is_err());
        assert!(empty.pop().is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn dup_and_swap() {
        let mut s = stack(&[5]);
        s.duplicate().unwrap();
        assert_eq!(s.as_slice(), &[5, 5]);

        let mut s = stack(&[1, 2]);
        s.swap().unwrap();
        assert_eq!(s.as_slice(), &[2, 1]);
    }

    #[test]
    fn display_lists_bottom_to_top() {
        assert_eq!(stack(&[1, -2, 3]).to_string(), "<3> 1 -2 3");
        assert_eq!(Stack::new().to_string(), "<0>");
    }
}
