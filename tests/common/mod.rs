use std::collections::HashMap;
use stencil::VariableDefinition;

#[allow(dead_code)]
pub fn def(name: &str) -> VariableDefinition {
    VariableDefinition::new(name)
}

#[allow(dead_code)]
pub fn def_with_default(name: &str, default_value: &str) -> VariableDefinition {
    VariableDefinition::new(name).with_default_value(default_value)
}

#[allow(dead_code)]
pub fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
