//! Pattern 1: Strategy
//! Example: Shopping cart with swappable discount policies
//!
//! Run with: cargo run --bin pattern_01_strategy

use colored::Colorize;

// ============================================================================
// Milestone 1: The discount contract
// ============================================================================

pub trait DiscountStrategy {
    fn name(&self) -> &str;

    /// Transforms a price into the price after discount.
    fn apply(&self, price: f64) -> f64;
}

// ============================================================================
// Milestone 2: Concrete strategies
// ============================================================================

pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn name(&self) -> &str {
        "none"
    }

    fn apply(&self, price: f64) -> f64 {
        price
    }
}

pub struct FlatDiscount {
    amount: f64,
}

impl FlatDiscount {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl DiscountStrategy for FlatDiscount {
    fn name(&self) -> &str {
        "flat"
    }

    fn apply(&self, price: f64) -> f64 {
        price - self.amount
    }
}

pub struct PercentageDiscount {
    rate: f64,
}

impl PercentageDiscount {
    // Rate is a fraction, e.g. 0.10 for 10% off. Negative rates are
    // accepted and behave as a surcharge.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn name(&self) -> &str {
        "percentage"
    }

    fn apply(&self, price: f64) -> f64 {
        price * (1.0 - self.rate)
    }
}

// ============================================================================
// Milestone 3: The cart context
// ============================================================================

pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// Holds exactly one active strategy and delegates every total() to it.
/// Swapping the strategy takes effect on the very next call; nothing is
/// cached.
pub struct Cart {
    items: Vec<LineItem>,
    strategy: Box<dyn DiscountStrategy>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            strategy: Box::new(NoDiscount),
        }
    }

    pub fn add_item(&mut self, name: impl Into<String>, unit_price: f64, quantity: u32) {
        self.items.push(LineItem {
            name: name.into(),
            unit_price,
            quantity,
        });
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.unit_price * f64::from(item.quantity))
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.strategy.apply(self.subtotal())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

fn print_totals(cart: &Cart) {
    println!(
        "  strategy: {:<12} subtotal: {:>8.2}  total: {}",
        cart.strategy_name().cyan(),
        cart.subtotal(),
        format!("{:.2}", cart.total()).green().bold()
    );
}

fn main() {
    println!("=== Strategy Pattern: Discount Policies ===\n");

    let mut cart = Cart::new();
    cart.add_item("Keyboard", 80.0, 1);
    cart.add_item("Mouse", 20.0, 2);

    for item in cart.items() {
        println!(
            "  {} x{} @ {:.2}",
            item.name, item.quantity, item.unit_price
        );
    }
    println!();
    print_totals(&cart);

    println!("\n=== Swapping Strategies at Runtime ===");
    cart.set_strategy(Box::new(FlatDiscount::new(15.0)));
    print_totals(&cart);

    cart.set_strategy(Box::new(PercentageDiscount::new(0.10)));
    print_totals(&cart);

    cart.set_strategy(Box::new(NoDiscount));
    print_totals(&cart);

    println!("\n=== Key Points ===");
    println!("- The cart never names a concrete strategy type");
    println!("- set_strategy() swaps behavior; the next total() reflects it");
    println!("- Each strategy is pure over its own configuration");
}
