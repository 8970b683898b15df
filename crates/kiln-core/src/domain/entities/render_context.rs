//! Variables handed to the renderer, and the blueprint kinds that get
//! built-in defaults.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Key under which the blueprint name is always available.
pub const NAME_KEY: &str = "Name";

/// Key-value context for rendering a blueprint.
///
/// Layers are applied with [`RenderContext::merge`]; a later layer always
/// overrides an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderContext {
    values: BTreeMap<String, Value>,
}

impl RenderContext {
    /// Context seeded with the blueprint name.
    pub fn new(blueprint_name: impl Into<String>) -> Self {
        let mut ctx = Self::default();
        ctx.set(NAME_KEY, blueprint_name.into());
        ctx
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn merge<I, K>(&mut self, layer: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in layer {
            self.values.insert(key.into(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String form of a value, as substituted into files.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.values.get(key).map(display_value)
    }

    /// Absent, or present with an empty string form.
    pub fn is_missing(&self, key: &str) -> bool {
        self.get_str(key).is_none_or(|v| v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Substitute `{{Key}}` and `{{ .Key }}` placeholders.
    ///
    /// Placeholders naming an unknown key are left as they are.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            let Some(len) = rest[start + 2..].find("}}") else {
                break;
            };
            let end = start + 2 + len + 2;
            let key = rest[start + 2..end - 2].trim();
            let key = key.strip_prefix('.').unwrap_or(key);

            out.push_str(&rest[..start]);
            match self.get_str(key) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&rest[start..end]),
            }
            rest = &rest[end..];
        }

        out.push_str(rest);
        out
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Values used for recognised blueprint kinds when nothing else sets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintDefaults {
    pub router: String,
    pub db: String,
}

impl Default for BlueprintDefaults {
    fn default() -> Self {
        Self {
            router: "servemux".into(),
            db: "sqlite-native".into(),
        }
    }
}

/// Blueprints with built-in defaults and interactive prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlueprintKind {
    ApiService,
}

impl BlueprintKind {
    pub fn recognize(name: &str) -> Option<Self> {
        match name {
            "api-service" => Some(Self::ApiService),
            _ => None,
        }
    }

    pub fn defaults(&self, defaults: &BlueprintDefaults) -> Vec<(&'static str, Value)> {
        match self {
            Self::ApiService => vec![
                ("Router", Value::from(defaults.router.clone())),
                ("DB", Value::from(defaults.db.clone())),
            ],
        }
    }

    /// Keys asked for interactively when still missing.
    pub fn prompt_keys(&self) -> &'static [&'static str] {
        match self {
            Self::ApiService => &["Module", "Router", "DB"],
        }
    }
}
