//! Configuration types for frame sequences.

use serde::{Deserialize, Serialize};

use crate::compile::{self, CompiledSequence};

use super::FrameRange;

fn default_play_count() -> FrameRange {
    FrameRange::fixed(1)
}

/// The persisted description of one frame sequence.
///
/// This is what a host stores per animation: the notation string plus the
/// ranged playback parameters. The from/to window and play count are
/// [`FrameRange`]s so each playback session can draw its own values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Optional display name for the sequence.
    #[serde(default)]
    pub name: String,
    /// The frame notation, e.g. `"1-3x2-1"`.
    #[serde(default)]
    pub frames: String,
    /// Count of playthroughs, or "loops", of the sequence. A resolved
    /// count of 0 loops forever.
    #[serde(default = "default_play_count")]
    pub play_count: FrameRange,
    /// Window start as a 1-based position into the compiled list.
    /// `None` plays from the first frame.
    #[serde(default)]
    pub from_frame: Option<FrameRange>,
    /// Window end as a 1-based position into the compiled list.
    /// `None` plays through the last frame.
    #[serde(default)]
    pub to_frame: Option<FrameRange>,
    /// Host-defined action ids to fire when the sequence starts.
    #[serde(default)]
    pub pre_sequence_actions: Vec<i32>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            frames: String::new(),
            play_count: default_play_count(),
            from_frame: None,
            to_frame: None,
            pre_sequence_actions: Vec::new(),
        }
    }
}

impl SequenceConfig {
    /// Correct out-of-band values in place.
    ///
    /// An untouched play count of `{0, 0}` is raised to a minimum of 1 (an
    /// intentional infinite loop keeps a non-zero maximum, e.g. `{0, 3}`);
    /// a customized window is pulled into 1-based positions, with the
    /// to-frame minimum raised to the from-frame maximum.
    pub fn normalize(&mut self) {
        if self.play_count.min_value == 0 && self.play_count.max_value == 0 {
            self.play_count.min_value = 1;
        }
        if let Some(from) = &mut self.from_frame {
            from.min_value = from.min_value.max(1);
        }
        let from_max = self.from_frame.as_ref().map(|r| r.max_value);
        if let (Some(from_max), Some(to)) = (from_max, &mut self.to_frame) {
            to.min_value = to.min_value.max(from_max);
        }
    }

    /// Check the configuration for contradictions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(from), Some(to)) = (&self.from_frame, &self.to_frame) {
            if to.max_value < from.min_value {
                return Err(ConfigError::InvertedWindow {
                    from_min: from.min_value,
                    to_max: to.max_value,
                });
            }
        }
        Ok(())
    }

    /// Compile the notation string into its frame list.
    pub fn compile(&self) -> CompiledSequence {
        compile::compile(&self.frames)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("to-frame window (max {to_max}) ends before from-frame window (min {from_min}) begins")]
    InvertedWindow { from_min: u32, to_max: u32 },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_default_plays_once() {
        let config = SequenceConfig::default();
        assert_eq!(config.play_count, FrameRange::fixed(1));
        assert!(config.from_frame.is_none());
        assert!(config.to_frame.is_none());
    }

    #[test]
    fn test_normalize_corrects_untouched_play_count() {
        let mut config = SequenceConfig {
            play_count: FrameRange::new(0, 0),
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.play_count.min_value, 1);

        // An explicit 0..=3 survives, so 0 (loop forever) stays drawable.
        let mut config = SequenceConfig {
            play_count: FrameRange::new(0, 3),
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.play_count.min_value, 0);
    }

    #[test]
    fn test_normalize_pulls_window_into_position_space() {
        let mut config = SequenceConfig {
            from_frame: Some(FrameRange::new(0, 4)),
            to_frame: Some(FrameRange::new(2, 8)),
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.from_frame.unwrap().min_value, 1);
        // to-frame can never start before the from-frame window ends.
        assert_eq!(config.to_frame.unwrap().min_value, 4);
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let config = SequenceConfig {
            from_frame: Some(FrameRange::new(6, 8)),
            to_frame: Some(FrameRange::new(1, 2)),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedWindow { from_min: 6, to_max: 2 })
        ));
    }

    #[test]
    fn test_compile_forwards_notation() {
        let config = SequenceConfig {
            frames: "1-3x2-1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.compile().frames(), &[2, 3, 3, 2, 1]);
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("walk.json");

        let config = SequenceConfig {
            name: "walk cycle".to_string(),
            frames: "1-6,5-2".to_string(),
            play_count: FrameRange::new(2, 4),
            from_frame: None,
            to_frame: None,
            pre_sequence_actions: vec![3, 11],
        };

        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded: SequenceConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(loaded.name, config.name);
        assert_eq!(loaded.frames, config.frames);
        assert_eq!(loaded.play_count, config.play_count);
        assert_eq!(loaded.pre_sequence_actions, config.pre_sequence_actions);
    }

    #[test]
    fn test_minimal_json_fills_defaults() {
        let loaded: SequenceConfig = serde_json::from_str(r#"{"frames": "1-4"}"#).unwrap();
        assert_eq!(loaded.frames, "1-4");
        assert_eq!(loaded.play_count, FrameRange::fixed(1));
        assert!(loaded.from_frame.is_none());
        assert!(loaded.pre_sequence_actions.is_empty());
    }
}
