mod context;
mod definitions;
mod preview;
mod substitute;
pub mod scanner;

use std::borrow::Cow;
use std::collections::HashMap;

pub use context::{DefaultsOnly, ValueProvider, WithDefaults};
pub use definitions::{same_names, sync, VariableDefinition};
pub use preview::{render_preview, Segment};
pub use scanner::{extract_variables, unique_names, VariableReference};
pub use substitute::substitute;

/// Main entry point for the stencil template engine.
///
/// Owns one prompt's editing state: the template text, the definition list
/// kept in sync with it, and the runtime values filled in so far. All the
/// work happens in the pure functions this crate exports; this struct is the
/// caller-side copy of their arguments, mutated by plain assignment between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct Stencil {
    template: String,
    definitions: Vec<VariableDefinition>,
    values: HashMap<String, String>,
}

impl Stencil {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from template text alone; definitions get blank metadata.
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let definitions = sync(&[], &template);
        Self {
            template,
            definitions,
            values: HashMap::new(),
        }
    }

    /// Load a saved prompt. The stored definition list is re-synced against
    /// the stored text, so entries that went stale between saves are
    /// reconciled on the way in.
    pub fn with_definitions(
        template: impl Into<String>,
        definitions: Vec<VariableDefinition>,
    ) -> Self {
        let template = template.into();
        let definitions = sync(&definitions, &template);
        Self {
            template,
            definitions,
            values: HashMap::new(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn definitions(&self) -> &[VariableDefinition] {
        &self.definitions
    }

    /// Replace the template text and re-sync the definition list.
    ///
    /// The new list is committed only when [`same_names`] says it differs
    /// from the held one, and the return value tells the caller whether a
    /// store/update cycle is needed. A pure reorder of variable names counts
    /// as a change.
    pub fn set_template(&mut self, template: impl Into<String>) -> bool {
        self.template = template.into();
        let next = sync(&self.definitions, &self.template);
        if same_names(&next, &self.definitions) {
            return false;
        }
        self.definitions = next;
        true
    }

    /// Set the description of a known variable. Returns `false` when the
    /// name is not in the definition list.
    pub fn set_description(&mut self, name: &str, description: impl Into<String>) -> bool {
        match self.definitions.iter_mut().find(|def| def.name == name) {
            Some(def) => {
                def.description = Some(description.into());
                true
            }
            None => false,
        }
    }

    /// Set the default value of a known variable. Returns `false` when the
    /// name is not in the definition list.
    pub fn set_default_value(&mut self, name: &str, default_value: impl Into<String>) -> bool {
        match self.definitions.iter_mut().find(|def| def.name == name) {
            Some(def) => {
                def.default_value = Some(default_value.into());
                true
            }
            None => false,
        }
    }

    /// Fill in a runtime value for one variable.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    /// Highlighted preview with runtime values merged over defaults.
    pub fn preview(&self) -> Vec<Segment<'_>> {
        render_preview(
            &self.template,
            &WithDefaults::new(&self.values, &self.definitions),
        )
    }

    /// Highlighted preview for authoring, before any runtime values exist:
    /// defaults only.
    pub fn authoring_preview(&self) -> Vec<Segment<'_>> {
        render_preview(&self.template, &DefaultsOnly::new(&self.definitions))
    }

    /// Final copy-ready text, runtime values merged over defaults. Unfilled
    /// placeholders survive unchanged.
    pub fn render(&self) -> Cow<'_, str> {
        substitute(
            &self.template,
            &WithDefaults::new(&self.values, &self.definitions),
        )
    }
}
