//! Frame-sequence notation and playback for sprite-sheet animation.
//!
//! This crate provides the engine-independent core of a raster animation
//! system: a compact notation describing frame orders (`"1-3x2-1"`) that
//! compiles to a concrete frame list, and a tick-driven state machine that
//! plays the compiled result back with randomized windows and loop counts.
//! The host owns rendering and timing; this crate only decides which
//! 1-based frame number is current on each tick.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: configuration types the host persists (notation string,
//!   play-count and window ranges)
//! - `compile`: the notation compiler (tokenize, resolve multipliers,
//!   expand ranges, flatten)
//! - `playback`: the per-session playback state machine
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use frameseq::{PlaybackState, SequenceConfig};
//!
//! // Compile once, at configuration time.
//! let config = SequenceConfig {
//!     frames: "1-3x2-1".to_string(),
//!     ..SequenceConfig::default()
//! };
//! let sequence = config.compile();
//! assert_eq!(sequence.frames(), &[2, 3, 3, 2, 1]);
//!
//! // One playback state per animation start.
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut state = PlaybackState::new(&sequence, &config, &mut rng, &mut ());
//! assert_eq!(state.current_frame(), Some(2));
//! while let Some(frame) = state.advance_frame(&mut ()) {
//!     // hand `frame` to the renderer
//!     let _ = frame;
//! }
//! ```

pub mod compile;
pub mod playback;
pub mod schema;

// Re-export commonly used types
pub use compile::{CompiledSequence, Diagnostic, compile};
pub use playback::{PlaybackPhase, PlaybackState, SequenceListener};
pub use schema::{ConfigError, FrameRange, SequenceConfig};
