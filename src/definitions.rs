use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scanner::unique_names;

/// Per-variable metadata persisted alongside a prompt record.
///
/// The list order is the order of first appearance in the template; names
/// are unique within a list and compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VariableDefinition {
    pub name: String,
    pub description: Option<String>,
    pub default_value: Option<String>,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            default_value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

/// Reconcile a stored definition list against the names currently present
/// in a template.
///
/// Surviving names keep their metadata, new names get blank metadata, and
/// definitions for names no longer present are dropped. The result is fully
/// recomputed on every call and ordered by first appearance, so
/// `sync(&sync(d, t), t) == sync(d, t)`.
pub fn sync(existing: &[VariableDefinition], template: &str) -> Vec<VariableDefinition> {
    let lookup: HashMap<&str, &VariableDefinition> = existing
        .iter()
        .map(|def| (def.name.as_str(), def))
        .collect();

    unique_names(template)
        .into_iter()
        .map(|name| match lookup.get(name) {
            Some(def) => (*def).clone(),
            None => VariableDefinition::new(name),
        })
        .collect()
}

/// Same length and same names at the same positions.
///
/// This is the caller's redundant-update guard: hold on to the old list when
/// it compares equal, commit the new one otherwise. A pure reorder of names
/// compares unequal and must be committed.
pub fn same_names(a: &[VariableDefinition], b: &[VariableDefinition]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.name == y.name)
}
