//! Pattern 8: Facade
//! Example: Home theater facade hiding four subsystems behind two calls
//!
//! Run with: cargo run --bin pattern_08_facade

use colored::Colorize;

// ============================================================================
// Milestone 1: The subsystems
// ============================================================================

// Four unrelated subsystems, each with its own tiny surface. None of them
// can fail, so the facade carries no error path.

pub struct Amplifier;

impl Amplifier {
    pub fn on(&self) -> String {
        "Amplifier on".to_string()
    }

    pub fn set_volume(&self, level: u8) -> String {
        format!("Amplifier volume set to {level}")
    }

    pub fn off(&self) -> String {
        "Amplifier off".to_string()
    }
}

pub struct StreamingPlayer;

impl StreamingPlayer {
    pub fn on(&self) -> String {
        "Streaming player on".to_string()
    }

    pub fn play(&self, title: &str) -> String {
        format!("Playing \"{title}\"")
    }

    pub fn stop(&self) -> String {
        "Playback stopped".to_string()
    }

    pub fn off(&self) -> String {
        "Streaming player off".to_string()
    }
}

pub struct Projector;

impl Projector {
    pub fn on(&self) -> String {
        "Projector on".to_string()
    }

    pub fn wide_screen_mode(&self) -> String {
        "Projector in widescreen mode".to_string()
    }

    pub fn off(&self) -> String {
        "Projector off".to_string()
    }
}

pub struct TheaterLights;

impl TheaterLights {
    pub fn dim(&self, level: u8) -> String {
        format!("Lights dimmed to {level}%")
    }

    pub fn on(&self) -> String {
        "Lights on".to_string()
    }
}

// ============================================================================
// Milestone 2: The facade
// ============================================================================

/// Owns all four subsystems and exposes two coarse operations, each a fixed
/// sequence of subsystem calls in a fixed order.
pub struct HomeTheaterFacade {
    amplifier: Amplifier,
    player: StreamingPlayer,
    projector: Projector,
    lights: TheaterLights,
}

impl HomeTheaterFacade {
    pub fn new() -> Self {
        Self {
            amplifier: Amplifier,
            player: StreamingPlayer,
            projector: Projector,
            lights: TheaterLights,
        }
    }

    pub fn watch_movie(&self, title: &str) -> Vec<String> {
        vec![
            self.lights.dim(10),
            self.projector.on(),
            self.projector.wide_screen_mode(),
            self.amplifier.on(),
            self.amplifier.set_volume(5),
            self.player.on(),
            self.player.play(title),
        ]
    }

    pub fn end_movie(&self) -> Vec<String> {
        vec![
            self.player.stop(),
            self.player.off(),
            self.amplifier.off(),
            self.projector.off(),
            self.lights.on(),
        ]
    }
}

impl Default for HomeTheaterFacade {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    println!("=== Facade Pattern: Home Theater ===\n");

    let theater = HomeTheaterFacade::new();

    println!("{}", "watch_movie(\"The Matrix\"):".bold());
    for step in theater.watch_movie("The Matrix") {
        println!("  {step}");
    }

    println!("\n{}", "end_movie():".bold());
    for step in theater.end_movie() {
        println!("  {step}");
    }

    println!("\n=== Key Points ===");
    println!("- One call replaces seven subsystem calls in the right order");
    println!("- The subsystems stay independent and directly usable");
}
