//! frameseq CLI - compile a sequence configuration and trace its playback.

use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use frameseq::{FrameRange, PlaybackState, SequenceConfig, SequenceListener};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [ticks] [seed]", args[0]);
        eprintln!();
        eprintln!("Compile a frame-sequence configuration and print a playback trace.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to sequence configuration file");
        eprintln!("  ticks        Maximum ticks to trace (default: 100)");
        eprintln!("  seed         RNG seed for range resolution (default: 0)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let mut config: SequenceConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    config.normalize();
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    let sequence = config.compile();

    println!("Frame Sequence");
    println!("==============");
    if !config.name.is_empty() {
        println!("Name: {}", config.name);
    }
    println!("Notation: {:?}", config.frames);
    println!("Compiled: {}", sequence);
    println!("Frame count: {}", sequence.len());
    for diagnostic in sequence.diagnostics() {
        println!("Warning: {}", diagnostic);
    }
    println!();
    println!("Playback (seed {}):", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut listener = TraceListener;
    let mut state = PlaybackState::new(&sequence, &config, &mut rng, &mut listener);

    if let Some(frame) = state.current_frame() {
        println!("tick {:>4}: frame {}", 0, frame);
    }
    for tick in 1..=ticks {
        match state.advance_frame(&mut listener) {
            Some(frame) => println!("tick {:>4}: frame {}", tick, frame),
            None => break,
        }
    }
    if !state.is_stopped() {
        println!("(still playing after {} ticks)", ticks);
    }
}

struct TraceListener;

impl SequenceListener for TraceListener {
    fn sequence_started(&mut self, state: &PlaybackState<'_>) {
        let (from, to) = state.window();
        match state.play_count() {
            0 => println!("  -- sequence started: window {}-{}, looping forever", from, to),
            k => println!("  -- sequence started: window {}-{}, {} plays", from, to, k),
        }
    }

    fn sequence_stopped(&mut self, _state: &PlaybackState<'_>) {
        println!("  -- sequence stopped");
    }

    fn loop_started(&mut self, state: &PlaybackState<'_>) {
        println!("  -- loop {} started", state.loop_index());
    }

    fn loop_stopped(&mut self, state: &PlaybackState<'_>) {
        println!("  -- loop {} stopped", state.loop_index());
    }
}

fn print_example_config() {
    let config = SequenceConfig {
        name: "walk cycle".to_string(),
        frames: "1-3x2-1".to_string(),
        play_count: FrameRange::new(2, 4),
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
