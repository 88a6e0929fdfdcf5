//! Gyroglyph CLI - Render a message to an animated GIF puzzle.

use std::fs;
use std::path::PathBuf;

use gyroglyph::{
    animation::{Composer, GifRecorder},
    schema::PuzzleConfig,
};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [OPTIONS] MESSAGE [OUTPUT.gif]", program);
    eprintln!();
    eprintln!("Encode MESSAGE as an animated rotating-glyph GIF.");
    eprintln!();
    eprintln!("MESSAGE must be non-empty, its length a multiple of 8, and use");
    eprintln!("only characters from the fixed alphabet: {}", gyroglyph::ALPHABET);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE  Load rendering parameters from a JSON file");
    eprintln!("  --debug        Draw the debug overlay (circle, index, bits)");
    eprintln!("  --example      Print the default configuration as JSON and exit");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = PuzzleConfig::default();
    let mut debug = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--example" => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&PuzzleConfig::default())
                        .unwrap_or_else(|e| e.to_string())
                );
                return;
            }
            "--debug" => debug = true,
            "--config" => {
                i += 1;
                let path = args.get(i).map(PathBuf::from).unwrap_or_else(|| usage(&args[0]));
                let config_str = fs::read_to_string(&path).unwrap_or_else(|e| {
                    eprintln!("Error reading config file: {}", e);
                    std::process::exit(1);
                });
                config = serde_json::from_str(&config_str).unwrap_or_else(|e| {
                    eprintln!("Error parsing config: {}", e);
                    std::process::exit(1);
                });
            }
            flag if flag.starts_with("--") => usage(&args[0]),
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }
    config.debug = config.debug || debug;

    if positional.is_empty() || positional.len() > 2 {
        usage(&args[0]);
    }
    let message = &positional[0];
    let output = PathBuf::from(
        positional
            .get(1)
            .map(String::as_str)
            .unwrap_or("puzzle.gif"),
    );

    let composer = Composer::new(config.clone()).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    // Compose fully before touching the output path, so invalid input
    // never leaves a partial file behind.
    let frames = composer.compose(message).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let mut recorder = GifRecorder::new(&output, config.frame_duration_ms).unwrap_or_else(|e| {
        eprintln!("Error creating output file: {}", e);
        std::process::exit(1);
    });
    for frame in &frames {
        recorder.record_frame(frame).unwrap_or_else(|e| {
            eprintln!("Error writing frame: {}", e);
            std::process::exit(1);
        });
    }
    let stats = recorder.finalize();

    println!(
        "Wrote {} ({}, {} ms/frame, looping)",
        output.display(),
        stats,
        config.frame_duration_ms
    );
}
