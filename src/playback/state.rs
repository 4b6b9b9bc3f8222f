//! The frame-by-frame playback state machine.

use rand::Rng;

use crate::compile::CompiledSequence;
use crate::schema::SequenceConfig;

use super::listener::SequenceListener;

/// Where a playback session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Frames remain; advancing keeps yielding.
    Playing,
    /// The final loop finished. Terminal: build a new state to play again.
    Stopped,
}

/// One playback session over a compiled frame sequence.
///
/// A state is built per animation start. It resolves the from/to window and
/// play count once, through the caller's RNG, then walks the window one
/// position per external tick until the play count is exhausted. It borrows
/// the sequence immutably, so any number of concurrent sessions can share
/// one compiled sequence; dropping a state at any point is the cancellation
/// path and needs no cleanup.
///
/// Frame numbers and window positions are 1-based everywhere a caller sees
/// them. The frame *number* returned from advancing is the value stored in
/// the compiled list, which the host maps to a visual resource.
pub struct PlaybackState<'a> {
    sequence: &'a CompiledSequence,
    config: &'a SequenceConfig,
    /// Resolved window start, a 1-based position into the compiled list.
    from: u32,
    /// Resolved window end position, inclusive.
    to: u32,
    /// Resolved loop count; 0 loops forever.
    play_count: u32,
    /// Current 1-based position within the compiled list.
    position: u32,
    /// Current loop, counted from 1.
    loop_index: u32,
    phase: PlaybackPhase,
}

impl<'a> PlaybackState<'a> {
    /// Start a playback session.
    ///
    /// Resolves the window and play count through `rng`; the resolved
    /// values hold for the life of the session. Emits `sequence_started`
    /// and `loop_started` before returning, so the first frame is already
    /// current; with an empty sequence the session instead stops
    /// immediately, emitting `sequence_started` then `sequence_stopped`.
    pub fn new<L: SequenceListener>(
        sequence: &'a CompiledSequence,
        config: &'a SequenceConfig,
        rng: &mut impl Rng,
        listener: &mut L,
    ) -> Self {
        let len = sequence.len() as u32;
        let (from, to) = if len == 0 {
            (1, 0)
        } else {
            let from = match &config.from_frame {
                Some(range) => range.resolve(rng).clamp(1, len),
                None => 1,
            };
            let to = match &config.to_frame {
                Some(range) => range.resolve(rng).clamp(from, len),
                None => len,
            };
            (from, to)
        };
        let play_count = config.play_count.resolve(rng);

        let mut state = Self {
            sequence,
            config,
            from,
            to,
            play_count,
            position: from,
            loop_index: 1,
            phase: PlaybackPhase::Playing,
        };

        listener.sequence_started(&state);
        if sequence.is_empty() {
            state.phase = PlaybackPhase::Stopped;
            listener.sequence_stopped(&state);
        } else {
            listener.loop_started(&state);
        }
        state
    }

    /// Advance one frame.
    ///
    /// Returns the frame number now current, or `None` once the sequence
    /// has stopped. Ticks inside a loop emit no notifications; the tick
    /// that wraps from the window end back to its start closes one loop
    /// and opens the next (`loop_stopped`, `loop_started`), and the tick
    /// that finds no loops left emits `sequence_stopped` and is terminal.
    pub fn advance_frame<L: SequenceListener>(&mut self, listener: &mut L) -> Option<u32> {
        if self.phase == PlaybackPhase::Stopped {
            log::error!("advance_frame called on a stopped playback state");
            return None;
        }
        if self.position < self.to {
            self.position += 1;
            return self.current_frame();
        }
        self.wrap_or_stop(listener)
    }

    /// Advance at sequence granularity.
    ///
    /// Abandons the rest of the current loop, as if the window end had been
    /// reached: either the next loop starts (returning its first frame) or
    /// the sequence stops.
    pub fn advance_sequence<L: SequenceListener>(&mut self, listener: &mut L) -> Option<u32> {
        if self.phase == PlaybackPhase::Stopped {
            log::error!("advance_sequence called on a stopped playback state");
            return None;
        }
        self.wrap_or_stop(listener)
    }

    fn wrap_or_stop<L: SequenceListener>(&mut self, listener: &mut L) -> Option<u32> {
        listener.loop_stopped(self);
        if self.play_count == 0 || self.loop_index < self.play_count {
            self.loop_index += 1;
            self.position = self.from;
            listener.loop_started(self);
            self.current_frame()
        } else {
            self.phase = PlaybackPhase::Stopped;
            listener.sequence_stopped(self);
            None
        }
    }

    /// The frame number at the current position, `None` once stopped.
    pub fn current_frame(&self) -> Option<u32> {
        if self.phase == PlaybackPhase::Stopped {
            return None;
        }
        self.sequence.frame_at(self.position)
    }

    /// Current 1-based position within the compiled list.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// The resolved window as 1-based `(from, to)` positions, inclusive.
    #[inline]
    pub fn window(&self) -> (u32, u32) {
        (self.from, self.to)
    }

    /// Current loop, counted from 1.
    #[inline]
    pub fn loop_index(&self) -> u32 {
        self.loop_index
    }

    /// The resolved play count; 0 loops forever.
    #[inline]
    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Whether the session has reached its terminal state.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.phase == PlaybackPhase::Stopped
    }

    /// The compiled sequence this session walks.
    #[inline]
    pub fn sequence(&self) -> &CompiledSequence {
        self.sequence
    }

    /// The configuration this session was built from; listeners reach the
    /// sequence name and pre-sequence actions through this.
    #[inline]
    pub fn config(&self) -> &SequenceConfig {
        self.config
    }
}
