//! Pattern 7: Decorator
//! Example: Coffee with add-on layers that wrap an inner beverage
//!
//! Run with: cargo run --bin pattern_07_decorator

// ============================================================================
// Milestone 1: The beverage contract and the base variant
// ============================================================================

pub trait Beverage {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

pub struct PlainCoffee;

impl Beverage for PlainCoffee {
    fn cost(&self) -> f64 {
        100.0
    }

    fn description(&self) -> String {
        "Plain Coffee".to_string()
    }
}

// ============================================================================
// Milestone 2: Wrapping layers
// ============================================================================

// Each layer stores its inner beverage explicitly and calls through it.
// No base class, no inheritance: composition is the whole mechanism.

pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn wrap(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Milk {
    fn cost(&self) -> f64 {
        self.inner.cost() + 50.0
    }

    fn description(&self) -> String {
        format!("{} Milk", self.inner.description())
    }
}

pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub fn wrap(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Sugar {
    fn cost(&self) -> f64 {
        self.inner.cost() + 20.0
    }

    fn description(&self) -> String {
        format!("{} Sugar", self.inner.description())
    }
}

fn serve(beverage: &dyn Beverage) {
    println!("  {:<28} {:>6.2}", beverage.description(), beverage.cost());
}

fn main() {
    println!("=== Decorator Pattern: Coffee Add-ons ===\n");

    let plain = PlainCoffee;
    serve(&plain);

    let with_milk = Milk::wrap(Box::new(PlainCoffee));
    serve(&with_milk);

    let with_both = Sugar::wrap(Box::new(Milk::wrap(Box::new(PlainCoffee))));
    serve(&with_both);

    println!("\n=== Wrap Order ===");
    let milk_outside = Milk::wrap(Box::new(Sugar::wrap(Box::new(PlainCoffee))));
    serve(&milk_outside);
    println!("\nCost is the sum of all layers, so it ignores wrap order.");
    println!("Description follows nesting order exactly.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_beverage() {
        assert_eq!(PlainCoffee.cost(), 100.0);
        assert_eq!(PlainCoffee.description(), "Plain Coffee");
    }

    #[test]
    fn test_single_layer() {
        let beverage = Milk::wrap(Box::new(PlainCoffee));
        assert_eq!(beverage.cost(), 150.0);
        assert_eq!(beverage.description(), "Plain Coffee Milk");
    }

    #[test]
    fn test_cost_is_commutative_over_wrap_order() {
        let sugar_outside = Sugar::wrap(Box::new(Milk::wrap(Box::new(PlainCoffee))));
        let milk_outside = Milk::wrap(Box::new(Sugar::wrap(Box::new(PlainCoffee))));
        assert_eq!(sugar_outside.cost(), 170.0);
        assert_eq!(milk_outside.cost(), 170.0);
    }

    #[test]
    fn test_description_follows_nesting_order() {
        let sugar_outside = Sugar::wrap(Box::new(Milk::wrap(Box::new(PlainCoffee))));
        assert_eq!(sugar_outside.description(), "Plain Coffee Milk Sugar");

        let milk_outside = Milk::wrap(Box::new(Sugar::wrap(Box::new(PlainCoffee))));
        assert_eq!(milk_outside.description(), "Plain Coffee Sugar Milk");
    }

    #[test]
    fn test_layers_stack_arbitrarily_deep() {
        let double_milk = Milk::wrap(Box::new(Milk::wrap(Box::new(PlainCoffee))));
        assert_eq!(double_milk.cost(), 200.0);
        assert_eq!(double_milk.description(), "Plain Coffee Milk Milk");
    }
}
