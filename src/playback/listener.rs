//! Playback event notifications.

use super::state::PlaybackState;

/// Receives notifications from a [`PlaybackState`].
///
/// All methods default to no-ops; hosts implement the ones they care about
/// (gameplay triggers on loop boundaries, cleanup when the sequence stops).
/// Each call hands back the playback state so the handler can read the
/// current loop index, resolved bounds, and configuration.
pub trait SequenceListener {
    /// The sequence began playing. Fired exactly once, at construction.
    fn sequence_started(&mut self, _state: &PlaybackState<'_>) {}

    /// The sequence finished its final loop. Fired exactly once.
    fn sequence_stopped(&mut self, _state: &PlaybackState<'_>) {}

    /// A playthrough of the window began.
    fn loop_started(&mut self, _state: &PlaybackState<'_>) {}

    /// A playthrough of the window ended.
    fn loop_stopped(&mut self, _state: &PlaybackState<'_>) {}
}

/// The no-op listener, for hosts that only poll the advance results.
impl SequenceListener for () {}
