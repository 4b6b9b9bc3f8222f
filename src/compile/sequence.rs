//! Compiled frame sequences.

use std::fmt;

use super::diagnostics::Diagnostic;
use super::{expand, tokenizer};

/// Compile a notation string into a concrete frame list.
///
/// The input is trimmed as a whole; an empty or whitespace-only string
/// compiles to an empty sequence with no diagnostics. Compilation never
/// fails outright: syntax problems are collected as [`Diagnostic`]s (and
/// reported through `log::warn!`), the offending group contributes nothing,
/// and the rest of the input still compiles.
pub fn compile(notation: &str) -> CompiledSequence {
    let mut diagnostics = Vec::new();
    let source = notation.trim();

    let frames = if source.is_empty() {
        Vec::new()
    } else {
        let commands = tokenizer::tokenize(source, &mut diagnostics);
        let commands = expand::resolve_extenders(commands, &mut diagnostics);
        expand::expand_ranges(commands, &mut diagnostics)
    };

    for diagnostic in &diagnostics {
        log::warn!("frame notation {source:?}: {diagnostic}");
    }

    CompiledSequence { frames, diagnostics }
}

/// The immutable result of compiling a notation string.
///
/// The frame list is the literal playback order: 1-based frame numbers,
/// duplicates and repeats preserved. A sequence is recompiled wholesale
/// when its source notation changes and is never mutated in place, so any
/// number of playback states can read one sequence at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledSequence {
    frames: Vec<u32>,
    diagnostics: Vec<Diagnostic>,
}

impl CompiledSequence {
    /// Build a sequence from an explicit frame list, bypassing notation.
    ///
    /// Zero entries are dropped with a [`Diagnostic::ZeroFrame`] to keep
    /// the 1-based frame-number invariant.
    pub fn from_frames(frames: impl IntoIterator<Item = u32>) -> Self {
        let mut diagnostics = Vec::new();
        let frames = frames
            .into_iter()
            .filter(|&f| {
                if f == 0 {
                    diagnostics.push(Diagnostic::ZeroFrame);
                }
                f > 0
            })
            .collect();
        Self {
            frames,
            diagnostics,
        }
    }

    /// The compiled frames in playback order.
    #[inline]
    pub fn frames(&self) -> &[u32] {
        &self.frames
    }

    /// Number of frames in a single playthrough.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence has no frames at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame number at a 1-based list position.
    pub fn frame_at(&self, position: u32) -> Option<u32> {
        let index = (position as usize).checked_sub(1)?;
        self.frames.get(index).copied()
    }

    /// Diagnostics raised while compiling.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Renders the interpreted frame list, e.g. `2,3,3,2,1`.
impl fmt::Display for CompiledSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}
