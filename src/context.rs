use std::collections::HashMap;

use crate::definitions::VariableDefinition;

/// A source of variable values during preview and substitution.
///
/// The engine never reads stored values directly: it asks for the
/// [`resolved`](ValueProvider::resolved) form, where an empty string counts
/// as unresolved the same as an absent entry. That single rule is what keeps
/// preview segments and substitution output in agreement about which
/// placeholders survive.
pub trait ValueProvider {
    /// The value stored for `name`, before the empty-string rule applies.
    fn raw_value(&self, name: &str) -> Option<&str>;

    /// The value a `{{name}}` placeholder actually resolves to: non-empty,
    /// or nothing. Unresolved placeholders keep their text in the output.
    fn resolved(&self, name: &str) -> Option<&str> {
        self.raw_value(name).filter(|v| !v.is_empty())
    }
}

impl ValueProvider for HashMap<String, String> {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ValueProvider for HashMap<&str, &str> {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Resolution for viewing a saved prompt: the explicit value when non-empty,
/// else the definition's default value when non-empty.
pub struct WithDefaults<'a, P: ValueProvider + ?Sized> {
    values: &'a P,
    definitions: &'a [VariableDefinition],
}

impl<'a, P: ValueProvider + ?Sized> WithDefaults<'a, P> {
    pub fn new(values: &'a P, definitions: &'a [VariableDefinition]) -> Self {
        Self {
            values,
            definitions,
        }
    }
}

impl<'a, P: ValueProvider + ?Sized> ValueProvider for WithDefaults<'a, P> {
    fn raw_value(&self, name: &str) -> Option<&str> {
        self.values
            .resolved(name)
            .or_else(|| default_value(self.definitions, name))
    }
}

/// Resolution for authoring, before any runtime values exist: default
/// values only.
pub struct DefaultsOnly<'a> {
    definitions: &'a [VariableDefinition],
}

impl<'a> DefaultsOnly<'a> {
    pub fn new(definitions: &'a [VariableDefinition]) -> Self {
        Self { definitions }
    }
}

impl<'a> ValueProvider for DefaultsOnly<'a> {
    fn raw_value(&self, name: &str) -> Option<&str> {
        default_value(self.definitions, name)
    }
}

fn default_value<'a>(definitions: &'a [VariableDefinition], name: &str) -> Option<&'a str> {
    definitions
        .iter()
        .find(|def| def.name == name)
        .and_then(|def| def.default_value.as_deref())
        .filter(|v| !v.is_empty())
}
