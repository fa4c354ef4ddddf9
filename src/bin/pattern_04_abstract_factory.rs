//! Pattern 4: Abstract Factory
//! Example: Themed widget families behind one factory contract
//!
//! Run with: cargo run --bin pattern_04_abstract_factory

// ============================================================================
// Milestone 1: Two independent widget contracts
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
}

pub trait TextInput {
    fn render(&self) -> String;
}

// ============================================================================
// Milestone 2: Light and dark widget families
// ============================================================================

struct LightButton;

impl Button for LightButton {
    fn render(&self) -> String {
        "[ Light Button ]".to_string()
    }
}

struct DarkButton;

impl Button for DarkButton {
    fn render(&self) -> String {
        "[ Dark Button ]".to_string()
    }
}

struct LightTextInput;

impl TextInput for LightTextInput {
    fn render(&self) -> String {
        "< light text input >".to_string()
    }
}

struct DarkTextInput;

impl TextInput for DarkTextInput {
    fn render(&self) -> String {
        "< dark text input >".to_string()
    }
}

// ============================================================================
// Milestone 3: The factory contract and its concrete factories
// ============================================================================

/// One factory per theme. The concrete factory chosen at construction time
/// is the only discriminator: every widget it hands out belongs to the same
/// family.
pub trait WidgetFactory {
    fn theme(&self) -> &str;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_text_input(&self) -> Box<dyn TextInput>;
}

pub struct LightThemeFactory;

impl WidgetFactory for LightThemeFactory {
    fn theme(&self) -> &str {
        "light"
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_text_input(&self) -> Box<dyn TextInput> {
        Box::new(LightTextInput)
    }
}

pub struct DarkThemeFactory;

impl WidgetFactory for DarkThemeFactory {
    fn theme(&self) -> &str {
        "dark"
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_text_input(&self) -> Box<dyn TextInput> {
        Box::new(DarkTextInput)
    }
}

// ============================================================================
// Milestone 4: A client that only sees the contracts
// ============================================================================

pub struct SettingsForm {
    factory: Box<dyn WidgetFactory>,
}

impl SettingsForm {
    pub fn new(factory: Box<dyn WidgetFactory>) -> Self {
        Self { factory }
    }

    pub fn render(&self) -> Vec<String> {
        vec![
            format!("Settings ({} theme)", self.factory.theme()),
            self.factory.create_text_input().render(),
            self.factory.create_button().render(),
        ]
    }
}

fn main() {
    println!("=== Abstract Factory Pattern: Themed Widgets ===\n");

    for factory in [
        Box::new(LightThemeFactory) as Box<dyn WidgetFactory>,
        Box::new(DarkThemeFactory),
    ] {
        let form = SettingsForm::new(factory);
        for line in form.render() {
            println!("  {line}");
        }
        println!();
    }

    println!("=== Key Points ===");
    println!("- SettingsForm never names a concrete widget or factory type");
    println!("- Picking a factory picks a whole consistent family");
}
