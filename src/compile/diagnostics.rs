//! Non-fatal diagnostics raised while compiling a notation string.

/// A syntax problem found in a notation string.
///
/// Diagnostics are never fatal: the malformed group contributes nothing to
/// the compiled output and the rest of the input still compiles, so callers
/// never need to special-case "compilation impossible".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// An operator appeared where a number was expected.
    #[error("expected a number before or after a symbol")]
    MissingNumber,
    /// A binary operator with nothing emitted to its left.
    #[error("missing left operand at start of input")]
    MissingLeftOperandAtStart,
    /// A binary operator whose left neighbor is not a number.
    #[error("missing left operand")]
    MissingLeftOperand,
    /// A binary operator at the end of the input.
    #[error("missing right operand at end of input")]
    MissingRightOperandAtEnd,
    /// A binary operator whose right neighbor is not a number.
    #[error("missing right operand")]
    MissingRightOperand,
    /// A range with equal endpoints, e.g. `5-5`.
    #[error("range from {value} to {value} is empty, use a comma instead")]
    SelfRange { value: u32 },
    /// A character outside the notation alphabet.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),
    /// A digit run too large for a frame number.
    #[error("number too large for a frame number")]
    NumberOverflow,
    /// A literal frame 0; frame numbers are 1-based.
    #[error("frame number 0 is out of range, frame numbers start at 1")]
    ZeroFrame,
}
