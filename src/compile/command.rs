//! Intermediate command form for the notation compiler.

/// A single tokenized element of a notation string.
///
/// Commands are transient: the tokenizer produces them, the two expansion
/// passes consume them, and none survive into the compiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FrameCommand {
    /// A literal frame number, emitted `times` times.
    Number { value: u32, times: u32 },
    /// The `x` repeat multiplier.
    Extender,
    /// The `-` (or `t`, "to") range marker.
    Range,
    /// The `,` group separator.
    Separator,
}
