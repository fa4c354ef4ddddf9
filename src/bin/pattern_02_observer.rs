//! Pattern 2: Observer
//! Example: Weather station broadcasting readings to display subscribers
//!
//! Run with: cargo run --bin pattern_02_observer

use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Milestone 1: The reading snapshot and the observer contract
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
}

pub trait Observer {
    fn update(&self, reading: WeatherReading);
}

// ============================================================================
// Milestone 2: The broadcast subject
// ============================================================================

/// Maintains an insertion-ordered subscriber list. Subscribing appends with
/// no duplicate check: subscribing the same observer twice means it is
/// notified twice per reading. Unsubscribing removes the first entry that is
/// the same allocation (`Rc::ptr_eq`); unsubscribing something that was
/// never subscribed is a no-op.
pub struct WeatherStation {
    subscribers: Vec<Rc<dyn Observer>>,
    last_reading: Option<WeatherReading>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            last_reading: None,
        }
    }

    pub fn subscribe(&mut self, observer: Rc<dyn Observer>) {
        self.subscribers.push(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Rc<dyn Observer>) {
        if let Some(pos) = self
            .subscribers
            .iter()
            .position(|s| Rc::ptr_eq(s, observer))
        {
            self.subscribers.remove(pos);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn last_reading(&self) -> Option<WeatherReading> {
        self.last_reading
    }

    /// Stores the reading and notifies every current subscriber, in
    /// subscription order, with the identical snapshot. The list is cloned
    /// before the loop, so a subscriber that (un)subscribes during
    /// notification changes only the next broadcast, never this one.
    pub fn set_reading(&mut self, reading: WeatherReading) {
        self.last_reading = Some(reading);
        let snapshot: Vec<Rc<dyn Observer>> = self.subscribers.clone();
        for subscriber in snapshot {
            subscriber.update(reading);
        }
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Milestone 3: Display subscribers
// ============================================================================

struct CurrentConditionsDisplay {
    label: String,
}

impl Observer for CurrentConditionsDisplay {
    fn update(&self, reading: WeatherReading) {
        println!(
            "  [{}] {:.1} C, {:.0}% humidity, {:.0} hPa",
            self.label, reading.temperature_c, reading.humidity_pct, reading.pressure_hpa
        );
    }
}

struct StatisticsDisplay {
    temperatures: RefCell<Vec<f64>>,
}

impl StatisticsDisplay {
    fn new() -> Self {
        Self {
            temperatures: RefCell::new(Vec::new()),
        }
    }

    fn report(&self) -> Option<(f64, f64, f64)> {
        let temps = self.temperatures.borrow();
        if temps.is_empty() {
            return None;
        }
        let min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let avg = temps.iter().sum::<f64>() / temps.len() as f64;
        Some((min, max, avg))
    }
}

impl Observer for StatisticsDisplay {
    fn update(&self, reading: WeatherReading) {
        self.temperatures.borrow_mut().push(reading.temperature_c);
    }
}

fn simulated_reading(rng: &mut impl Rng) -> WeatherReading {
    WeatherReading {
        temperature_c: rng.gen_range(-5.0..30.0),
        humidity_pct: rng.gen_range(20.0..95.0),
        pressure_hpa: rng.gen_range(980.0..1040.0),
    }
}

fn main() {
    println!("=== Observer Pattern: Weather Station ===\n");

    let mut station = WeatherStation::new();

    let lobby: Rc<dyn Observer> = Rc::new(CurrentConditionsDisplay {
        label: "lobby".to_string(),
    });
    let rooftop: Rc<dyn Observer> = Rc::new(CurrentConditionsDisplay {
        label: "rooftop".to_string(),
    });
    let stats = Rc::new(StatisticsDisplay::new());

    station.subscribe(Rc::clone(&lobby));
    station.subscribe(Rc::clone(&rooftop));
    station.subscribe(Rc::clone(&stats) as Rc<dyn Observer>);

    let mut rng = rand::thread_rng();
    for i in 1..=3 {
        println!("Reading {i}:");
        station.set_reading(simulated_reading(&mut rng));
    }

    println!("\n=== After Unsubscribing the Rooftop Display ===");
    station.unsubscribe(&rooftop);
    println!("Reading 4:");
    station.set_reading(simulated_reading(&mut rng));

    if let Some((min, max, avg)) = stats.report() {
        println!("\nTemperature stats: min {min:.1} C, max {max:.1} C, avg {avg:.1} C");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every snapshot it receives, so tests can assert on call
    /// counts, payloads, and ordering across probes.
    struct Probe {
        log: Rc<RefCell<Vec<(usize, WeatherReading)>>>,
        id: usize,
    }

    impl Observer for Probe {
        fn update(&self, reading: WeatherReading) {
            self.log.borrow_mut().push((self.id, reading));
        }
    }

    fn reading(temperature_c: f64) -> WeatherReading {
        WeatherReading {
            temperature_c,
            humidity_pct: 50.0,
            pressure_hpa: 1013.0,
        }
    }

    fn probes(n: usize) -> (Rc<RefCell<Vec<(usize, WeatherReading)>>>, Vec<Rc<dyn Observer>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let observers = (0..n)
            .map(|id| {
                Rc::new(Probe {
                    log: Rc::clone(&log),
                    id,
                }) as Rc<dyn Observer>
            })
            .collect();
        (log, observers)
    }

    #[test]
    fn test_every_subscriber_notified_once_in_order() {
        let (log, observers) = probes(3);
        let mut station = WeatherStation::new();
        for obs in &observers {
            station.subscribe(Rc::clone(obs));
        }

        station.set_reading(reading(21.5));

        let entries = log.borrow();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(entries.iter().all(|(_, r)| *r == reading(21.5)));
    }

    #[test]
    fn test_unsubscribed_observer_receives_nothing() {
        let (log, observers) = probes(2);
        let mut station = WeatherStation::new();
        station.subscribe(Rc::clone(&observers[0]));
        station.subscribe(Rc::clone(&observers[1]));

        station.unsubscribe(&observers[0]);
        station.set_reading(reading(5.0));

        let entries = log.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, 1);
    }

    #[test]
    fn test_double_subscription_yields_double_notification() {
        let (log, observers) = probes(1);
        let mut station = WeatherStation::new();
        station.subscribe(Rc::clone(&observers[0]));
        station.subscribe(Rc::clone(&observers[0]));

        station.set_reading(reading(-2.0));
        assert_eq!(log.borrow().len(), 2);

        // Unsubscribing removes one entry at a time.
        station.unsubscribe(&observers[0]);
        assert_eq!(station.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribing_a_stranger_is_a_noop() {
        let (_, observers) = probes(2);
        let mut station = WeatherStation::new();
        station.subscribe(Rc::clone(&observers[0]));

        station.unsubscribe(&observers[1]);
        assert_eq!(station.subscriber_count(), 1);
    }

    #[test]
    fn test_last_reading_is_stored() {
        let mut station = WeatherStation::new();
        assert_eq!(station.last_reading(), None);
        station.set_reading(reading(12.0));
        assert_eq!(station.last_reading(), Some(reading(12.0)));
    }

    #[test]
    fn test_statistics_display_accumulates() {
        let stats = Rc::new(StatisticsDisplay::new());
        let mut station = WeatherStation::new();
        station.subscribe(Rc::clone(&stats) as Rc<dyn Observer>);

        station.set_reading(reading(10.0));
        station.set_reading(reading(20.0));

        assert_eq!(stats.report(), Some((10.0, 20.0, 15.0)));
    }
}
