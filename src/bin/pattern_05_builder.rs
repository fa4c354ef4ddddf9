//! Pattern 5: Builder
//! Example: Consuming fluent builder for a pizza order
//!
//! Run with: cargo run --bin pattern_05_builder

// ============================================================================
// Milestone 1: The product
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    pub size: String,
    pub crust: String,
    pub toppings: Vec<String>,
    pub sauce: String,
}

impl Pizza {
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::new()
    }

    pub fn describe(&self) -> String {
        let toppings = if self.toppings.is_empty() {
            "no toppings".to_string()
        } else {
            self.toppings.join(", ")
        };
        format!(
            "{} pizza on {} crust with {} and {} sauce",
            self.size, self.crust, toppings, self.sauce
        )
    }
}

// ============================================================================
// Milestone 2: The consuming builder
// ============================================================================

/// Each setter consumes `self`, touches only its own field, and returns the
/// builder for chaining; build() consumes the builder and produces the
/// product. Setter order never matters.
pub struct PizzaBuilder {
    size: String,
    crust: String,
    toppings: Vec<String>,
    sauce: String,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self {
            size: "Medium".to_string(),
            crust: "Classic".to_string(),
            toppings: Vec::new(),
            sauce: "Tomato".to_string(),
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn crust(mut self, crust: impl Into<String>) -> Self {
        self.crust = crust.into();
        self
    }

    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    pub fn sauce(mut self, sauce: impl Into<String>) -> Self {
        self.sauce = sauce.into();
        self
    }

    pub fn build(self) -> Pizza {
        Pizza {
            size: self.size,
            crust: self.crust,
            toppings: self.toppings,
            sauce: self.sauce,
        }
    }
}

impl Default for PizzaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    println!("=== Builder Pattern: Pizza Orders ===\n");

    let custom = Pizza::builder()
        .size("Large")
        .crust("Thin")
        .topping("Cheese")
        .topping("Pepperoni")
        .sauce("Spicy")
        .build();
    println!("Custom order: {}", custom.describe());

    let plain = Pizza::builder().build();
    println!("House default: {}", plain.describe());

    println!("\n=== Setter Order Does Not Matter ===");
    let reordered = Pizza::builder()
        .sauce("Spicy")
        .topping("Cheese")
        .crust("Thin")
        .topping("Pepperoni")
        .size("Large")
        .build();
    println!("Reordered build equals custom order: {}", reordered == custom);
}
