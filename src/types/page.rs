use std::collections::HashMap;

/// Minimal model of the page's form inputs, keyed by selector.
///
/// Values can only be set on registered fields; writing to an unregistered
/// selector is a silent no-op, mirroring a lookup that finds no element.
#[derive(Debug, Default)]
pub struct FormState {
    fields: HashMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Registers a field under `selector` with an empty value.
    pub fn register(&mut self, selector: &str) {
        self.fields.entry(selector.to_string()).or_default();
    }

    /// Current value of the field, or `None` if the selector is not registered.
    pub fn value(&self, selector: &str) -> Option<&str> {
        self.fields.get(selector).map(String::as_str)
    }

    /// Sets the field's value. Returns false (and changes nothing) when the
    /// selector is not registered.
    pub fn set_value(&mut self, selector: &str, value: &str) -> bool {
        match self.fields.get_mut(selector) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }
}
