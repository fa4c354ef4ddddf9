//! Pattern 6: Singleton
//! Example: Process-wide configuration with exactly-once initialization
//!
//! Run with: cargo run --bin pattern_06_singleton

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::thread;

// ============================================================================
// Milestone 1: The singleton and its accessor
// ============================================================================

static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct AppConfig {
    pub app_name: String,
    pub max_connections: u32,
}

impl AppConfig {
    fn load() -> Self {
        // Visible construction side effect, so tests can prove load()
        // ran exactly once.
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Self {
            app_name: "pattern-catalogue".to_string(),
            max_connections: 32,
        }
    }

    /// Every call returns the same instance. OnceLock::get_or_init blocks
    /// racing first callers until one winner has finished constructing, so
    /// the naive check-then-set race is impossible here.
    pub fn instance() -> &'static AppConfig {
        CONFIG.get_or_init(AppConfig::load)
    }

    pub fn construction_count() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

fn main() {
    println!("=== Singleton Pattern: App Config ===\n");

    // Race eight threads at the accessor before anyone has initialized it.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let config = AppConfig::instance();
                (i, config as *const AppConfig as usize)
            })
        })
        .collect();

    let addresses: Vec<(usize, usize)> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    for (thread_id, addr) in &addresses {
        println!("thread {thread_id} saw instance at {addr:#x}");
    }

    let first = addresses[0].1;
    println!(
        "\nAll threads saw the same instance: {}",
        addresses.iter().all(|(_, addr)| *addr == first)
    );
    println!("Constructions: {}", AppConfig::construction_count());

    let config = AppConfig::instance();
    println!(
        "\n{} allows {} connections",
        config.app_name, config.max_connections
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_returns_the_same_instance() {
        let a = AppConfig::instance() as *const AppConfig;
        let b = AppConfig::instance() as *const AppConfig;
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_construction_happens_exactly_once_under_contention() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| AppConfig::instance() as *const AppConfig as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(AppConfig::construction_count(), 1);
    }

    #[test]
    fn test_fields_survive_repeated_access() {
        assert_eq!(AppConfig::instance().app_name, "pattern-catalogue");
        assert_eq!(AppConfig::instance().max_connections, 32);
        assert_eq!(AppConfig::construction_count(), 1);
    }
}
