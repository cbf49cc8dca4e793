//! Presentation seam.
//!
//! The engine never touches a page directly. It talks to a [`Renderer`],
//! which owns indicators, messages, regions and transient effects.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Tags applied to a field to mark failure or success.
///
/// They are opaque to the engine; a renderer typically maps them to CSS
/// classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    pub error: String,
    pub success: String,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            error: "error".to_string(),
            success: "success".to_string(),
        }
    }
}

/// UI regions toggled by the success transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Container,
    Form,
    SuccessMessage,
}

/// Reveal transition style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Blind,
}

/// Transition speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Fast,
}

/// Fire-and-forget visual effects. They never change validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Shake the field's container after an error.
    Shake { field: String, duration_ms: u64 },
    /// Reveal a region with a transition.
    Reveal {
        region: Region,
        transition: Transition,
        speed: Speed,
    },
}

/// Personalized text shown once the form is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
}

impl Greeting {
    /// Link target of the return button.
    pub const RETURN_HREF: &'static str = "index.html";

    /// Creates a greeting for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the main heading, e.g. `Hi Al`.
    pub fn heading(&self) -> String {
        format!("Hi {}", self.name)
    }

    /// Returns the line shown under the heading.
    pub fn subheading(&self) -> &'static str {
        "Thank You for Signing Up!"
    }
}

/// External renderer driven by the validator and the controller.
pub trait Renderer {
    /// Adds an indicator tag to a field. Adding a present tag is a no-op.
    fn add_indicator(&mut self, field: &Field, tag: &str);

    /// Removes an indicator tag from a field.
    fn remove_indicator(&mut self, field: &Field, tag: &str);

    /// Replaces the message shown under a field.
    fn set_message(&mut self, field: &Field, text: &str);

    /// Hides a region.
    fn hide(&mut self, region: Region);

    /// Shows a region.
    fn show(&mut self, region: Region);

    /// Fills the success region with the greeting.
    fn set_success_message(&mut self, greeting: &Greeting);

    /// Plays a transient effect.
    fn effect(&mut self, _effect: Effect) {}
}

/// Display state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDisplay {
    pub indicators: BTreeSet<String>,
    pub message: String,
}

impl FieldDisplay {
    /// Returns whether the field carries `tag`.
    pub fn has(&self, tag: &str) -> bool {
        self.indicators.contains(tag)
    }

    /// Returns whether nothing is shown for this field.
    pub fn is_clean(&self) -> bool {
        self.indicators.is_empty() && self.message.is_empty()
    }
}

/// Headless renderer keeping everything in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    fields: BTreeMap<String, FieldDisplay>,
    hidden: BTreeSet<Region>,
    greeting: Option<Greeting>,
    effects: Vec<Effect>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Creates a state showing the form with no indicators.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            hidden: BTreeSet::from([Region::SuccessMessage]),
            greeting: None,
            effects: Vec::new(),
        }
    }

    /// Returns the display of a field; untouched fields read as clean.
    pub fn field(&self, id: &str) -> FieldDisplay {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    /// Returns the message shown under a field.
    pub fn message(&self, id: &str) -> String {
        self.field(id).message
    }

    /// Returns whether a field carries `tag`.
    pub fn has_indicator(&self, id: &str, tag: &str) -> bool {
        self.fields.get(id).is_some_and(|f| f.has(tag))
    }

    /// Returns whether no field shows an indicator or a message.
    pub fn is_clean(&self) -> bool {
        self.fields.values().all(FieldDisplay::is_clean)
    }

    /// Returns whether a region is visible.
    pub fn is_visible(&self, region: Region) -> bool {
        !self.hidden.contains(&region)
    }

    /// Returns the greeting, once the form has been accepted.
    pub fn greeting(&self) -> Option<&Greeting> {
        self.greeting.as_ref()
    }

    /// Returns every effect played so far, oldest first.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    fn entry(&mut self, field: &Field) -> &mut FieldDisplay {
        self.fields.entry(field.id().to_string()).or_default()
    }
}

impl Renderer for DisplayState {
    fn add_indicator(&mut self, field: &Field, tag: &str) {
        self.entry(field).indicators.insert(tag.to_string());
    }

    fn remove_indicator(&mut self, field: &Field, tag: &str) {
        self.entry(field).indicators.remove(tag);
    }

    fn set_message(&mut self, field: &Field, text: &str) {
        self.entry(field).message = text.to_string();
    }

    fn hide(&mut self, region: Region) {
        self.hidden.insert(region);
    }

    fn show(&mut self, region: Region) {
        self.hidden.remove(&region);
    }

    fn set_success_message(&mut self, greeting: &Greeting) {
        self.greeting = Some(greeting.clone());
        self.hidden.remove(&Region::SuccessMessage);
    }

    fn effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}
