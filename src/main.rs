//! Headless demo host
//!
//! Pumps the game loop at 60 Hz for a few seconds with a scripted drag,
//! printing the snapshot it would hand to a renderer. Useful for smoke
//! testing the core without any display.

use std::thread;
use std::time::Duration;

use popcatch::consts::REFERENCE_DT;
use popcatch::{Game, Tuning};

fn main() -> Result<(), popcatch::GameError> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);

    // Reference portrait viewport
    let mut game = Game::new(750.0, 1334.0, Tuning::default(), seed)?;
    game.start()?;

    let snapshot = game.snapshot()?;
    let catcher = snapshot.catcher_pos;
    game.on_input_start(catcher.x, catcher.y)?;

    let frames = 600; // 10 seconds
    for frame in 0..frames {
        // Sweep the catcher back and forth under the spawn column
        let t = frame as f32 * REFERENCE_DT;
        game.on_input_move(catcher.x + 2.0 * (t * 1.5).sin(), catcher.y)?;
        game.tick()?;

        if frame % 60 == 0 {
            let snapshot = game.snapshot()?;
            println!(
                "t={t:4.1}s  score={:<4}  live={}",
                snapshot.score,
                snapshot.objects.len()
            );
        }
        thread::sleep(Duration::from_secs_f32(REFERENCE_DT));
    }

    game.on_input_end()?;
    let last = game.snapshot()?;
    println!("final score: {}", last.score);
    game.dispose();
    Ok(())
}
