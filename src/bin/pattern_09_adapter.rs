//! Pattern 9: Adapter
//! Example: Legacy payment gateway behind a modern processor contract
//!
//! Run with: cargo run --bin pattern_09_adapter

use std::cell::Cell;

// ============================================================================
// Milestone 1: The target contract and its native variant
// ============================================================================

pub trait PaymentProcessor {
    fn pay(&self, amount_cents: u64) -> String;
}

pub struct CardProcessor;

impl PaymentProcessor for CardProcessor {
    fn pay(&self, amount_cents: u64) -> String {
        format!("Charged {} cents to card", amount_cents)
    }
}

// ============================================================================
// Milestone 2: The legacy surface we cannot change
// ============================================================================

/// Incompatible on both axes: it wants dollars as a float and a caller
/// supplied reference string.
pub struct LegacyGateway;

impl LegacyGateway {
    pub fn submit(&self, dollars: f64, reference: &str) -> String {
        format!("LEGACY OK ref={reference} amount=${dollars:.2}")
    }
}

// ============================================================================
// Milestone 3: The adapter
// ============================================================================

/// Wraps a LegacyGateway and speaks PaymentProcessor: converts cents to
/// dollars and mints the reference the legacy side insists on.
pub struct GatewayAdapter {
    gateway: LegacyGateway,
    next_reference: Cell<u32>,
}

impl GatewayAdapter {
    pub fn new(gateway: LegacyGateway) -> Self {
        Self {
            gateway,
            next_reference: Cell::new(1),
        }
    }
}

impl PaymentProcessor for GatewayAdapter {
    fn pay(&self, amount_cents: u64) -> String {
        let seq = self.next_reference.get();
        self.next_reference.set(seq + 1);
        let reference = format!("PAY-{seq:04}");
        self.gateway.submit(amount_cents as f64 / 100.0, &reference)
    }
}

// ============================================================================
// Milestone 4: A checkout client that only sees the contract
// ============================================================================

pub struct Checkout {
    processor: Box<dyn PaymentProcessor>,
}

impl Checkout {
    pub fn new(processor: Box<dyn PaymentProcessor>) -> Self {
        Self { processor }
    }

    pub fn set_processor(&mut self, processor: Box<dyn PaymentProcessor>) {
        self.processor = processor;
    }

    pub fn charge(&self, amount_cents: u64) -> String {
        self.processor.pay(amount_cents)
    }
}

fn main() {
    println!("=== Adapter Pattern: Payment Gateways ===\n");

    let mut checkout = Checkout::new(Box::new(CardProcessor));
    println!("card:    {}", checkout.charge(2599));

    checkout.set_processor(Box::new(GatewayAdapter::new(LegacyGateway)));
    println!("legacy:  {}", checkout.charge(2599));
    println!("legacy:  {}", checkout.charge(100));

    println!("\n=== Key Points ===");
    println!("- Checkout never learns which processor it holds");
    println!("- The adapter owns every unit and format conversion");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_processor_satisfies_the_contract() {
        assert_eq!(CardProcessor.pay(2599), "Charged 2599 cents to card");
    }

    #[test]
    fn test_adapter_converts_cents_to_dollars() {
        let adapter = GatewayAdapter::new(LegacyGateway);
        assert_eq!(adapter.pay(2599), "LEGACY OK ref=PAY-0001 amount=$25.99");
    }

    #[test]
    fn test_adapter_mints_sequential_references() {
        let adapter = GatewayAdapter::new(LegacyGateway);
        assert!(adapter.pay(100).contains("ref=PAY-0001"));
        assert!(adapter.pay(100).contains("ref=PAY-0002"));
        assert!(adapter.pay(100).contains("ref=PAY-0003"));
    }

    #[test]
    fn test_whole_dollar_amounts_format_cleanly() {
        let adapter = GatewayAdapter::new(LegacyGateway);
        assert_eq!(adapter.pay(100), "LEGACY OK ref=PAY-0001 amount=$1.00");
    }

    #[test]
    fn test_checkout_swaps_processors_at_runtime() {
        let mut checkout = Checkout::new(Box::new(CardProcessor));
        assert_eq!(checkout.charge(500), "Charged 500 cents to card");

        checkout.set_processor(Box::new(GatewayAdapter::new(LegacyGateway)));
        assert_eq!(checkout.charge(500), "LEGACY OK ref=PAY-0001 amount=$5.00");
    }
}
