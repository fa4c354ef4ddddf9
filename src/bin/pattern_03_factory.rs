//! Pattern 3: Factory Method
//! Example: Shape factory selecting a variant from a string discriminator
//!
//! Run with: cargo run --bin pattern_03_factory

use thiserror::Error;

// ============================================================================
// Milestone 1: The shape contract and its variants
// ============================================================================

pub trait Shape {
    fn draw(&self) -> String;
}

impl std::fmt::Debug for dyn Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Shape")
    }
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self) -> String {
        "Drawing circle.".to_string()
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self) -> String {
        "Drawing square.".to_string()
    }
}

pub struct Triangle;

impl Shape for Triangle {
    fn draw(&self) -> String {
        "Drawing triangle.".to_string()
    }
}

// ============================================================================
// Milestone 2: The permissive factory
// ============================================================================

pub struct ShapeFactory;

impl ShapeFactory {
    /// Returns a freshly constructed shape for the given kind,
    /// case-insensitively. An unrecognized kind silently falls back to a
    /// circle; callers that want to hear about typos use try_create().
    pub fn create(kind: &str) -> Box<dyn Shape> {
        match kind.to_ascii_lowercase().as_str() {
            "square" => Box::new(Square),
            "triangle" => Box::new(Triangle),
            _ => Box::new(Circle),
        }
    }
}

// ============================================================================
// Milestone 3: The checked factory
// ============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("unknown shape kind: '{0}'")]
    UnknownKind(String),
}

impl ShapeFactory {
    pub fn try_create(kind: &str) -> Result<Box<dyn Shape>, ShapeError> {
        match kind.to_ascii_lowercase().as_str() {
            "circle" => Ok(Box::new(Circle)),
            "square" => Ok(Box::new(Square)),
            "triangle" => Ok(Box::new(Triangle)),
            _ => Err(ShapeError::UnknownKind(kind.to_string())),
        }
    }
}

fn main() {
    println!("=== Factory Pattern: Shapes ===\n");

    for kind in ["Circle", "Square", "Triangle"] {
        let shape = ShapeFactory::create(kind);
        println!("create({kind:>10}) -> {}", shape.draw());
    }

    println!("\n=== Unknown Discriminators ===");
    let shape = ShapeFactory::create("hexagon");
    println!("create(   hexagon) -> {} (silent fallback)", shape.draw());

    match ShapeFactory::try_create("hexagon") {
        Ok(shape) => println!("try_create(hexagon) -> {}", shape.draw()),
        Err(err) => println!("try_create(hexagon) -> error: {err}"),
    }

    println!("\n=== Key Points ===");
    println!("- Callers receive Box<dyn Shape>, never a concrete type");
    println!("- Every call constructs a fresh instance; nothing is pooled");
    println!("- create() keeps the permissive fallback; try_create() rejects typos");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Milestone 2 Tests
    #[test]
    fn test_known_discriminators() {
        assert_eq!(ShapeFactory::create("Circle").draw(), "Drawing circle.");
        assert_eq!(ShapeFactory::create("Square").draw(), "Drawing square.");
        assert_eq!(ShapeFactory::create("Triangle").draw(), "Drawing triangle.");
    }

    #[test]
    fn test_discriminator_is_case_insensitive() {
        assert_eq!(ShapeFactory::create("SQUARE").draw(), "Drawing square.");
        assert_eq!(ShapeFactory::create("tRiAnGlE").draw(), "Drawing triangle.");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_circle() {
        assert_eq!(ShapeFactory::create("hexagon").draw(), "Drawing circle.");
        assert_eq!(ShapeFactory::create("").draw(), "Drawing circle.");
    }

    // Milestone 3 Tests
    #[test]
    fn test_try_create_accepts_known_kinds() {
        let shape = ShapeFactory::try_create("circle").unwrap();
        assert_eq!(shape.draw(), "Drawing circle.");
    }

    #[test]
    fn test_try_create_rejects_unknown_kinds() {
        let err = ShapeFactory::try_create("hexagon").unwrap_err();
        assert_eq!(err, ShapeError::UnknownKind("hexagon".to_string()));
        assert_eq!(err.to_string(), "unknown shape kind: 'hexagon'");
    }
}
