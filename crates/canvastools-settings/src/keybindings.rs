//! Keyboard shortcut bindings.
//!
//! Accelerators are normalized before lookup so `"shift+ctrl+d"` and
//! `"Ctrl+Shift+D"` name the same binding.

use std::collections::BTreeMap;
use std::fmt;

use canvastools_core::ConfigError;
use serde::{Deserialize, Serialize};

/// Editor command a key binding triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorAction {
    DeleteSelected,
    SelectNext,
    UnselectAll,
    CancelEdit,
    CompleteEdit,
    ToggleFreeze,
    ToggleVisibility,
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteSelected => write!(f, "DeleteSelected"),
            Self::SelectNext => write!(f, "SelectNext"),
            Self::UnselectAll => write!(f, "UnselectAll"),
            Self::CancelEdit => write!(f, "CancelEdit"),
            Self::CompleteEdit => write!(f, "CompleteEdit"),
            Self::ToggleFreeze => write!(f, "ToggleFreeze"),
            Self::ToggleVisibility => write!(f, "ToggleVisibility"),
        }
    }
}

/// One accelerator to action entry, as stored in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub accelerator: String,
    pub action: EditorAction,
}

impl KeyBinding {
    pub fn new(accelerator: impl Into<String>, action: EditorAction) -> Self {
        Self {
            accelerator: accelerator.into(),
            action,
        }
    }
}

/// Default shortcuts
pub fn default_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("Delete", EditorAction::DeleteSelected),
        KeyBinding::new("Backspace", EditorAction::DeleteSelected),
        KeyBinding::new("Tab", EditorAction::SelectNext),
        KeyBinding::new("Ctrl+Shift+A", EditorAction::UnselectAll),
        KeyBinding::new("Escape", EditorAction::CancelEdit),
        KeyBinding::new("Enter", EditorAction::CompleteEdit),
        KeyBinding::new("Ctrl+F", EditorAction::ToggleFreeze),
        KeyBinding::new("Ctrl+H", EditorAction::ToggleVisibility),
    ]
}

const MODIFIER_ORDER: [&str; 4] = ["Ctrl", "Alt", "Shift", "Meta"];

/// Normalizes an accelerator to `Ctrl+Alt+Shift+Meta+Key` form.
///
/// Modifier names are case-insensitive (`control`, `cmd` and `super`
/// are accepted as aliases). Single-character keys are upper-cased; named
/// keys are capitalized.
///
/// # Errors
///
/// `ConfigError::InvalidAccelerator` when there is no key, more than one
/// non-modifier key, or an empty segment.
pub fn normalize_accelerator(accelerator: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidAccelerator(accelerator.to_string());

    let mut modifiers = [false; 4];
    let mut key: Option<String> = None;

    for part in accelerator.split('+').map(str::trim) {
        if part.is_empty() {
            return Err(invalid());
        }
        let slot = match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(0),
            "alt" | "option" => Some(1),
            "shift" => Some(2),
            "meta" | "super" | "cmd" => Some(3),
            _ => None,
        };
        match slot {
            Some(i) => modifiers[i] = true,
            None if key.is_none() => key = Some(normalize_key(part)),
            None => return Err(invalid()),
        }
    }

    let key = key.ok_or_else(invalid)?;
    let mut parts: Vec<&str> = MODIFIER_ORDER
        .iter()
        .zip(modifiers)
        .filter(|(_, held)| *held)
        .map(|(name, _)| *name)
        .collect();
    parts.push(&key);
    Ok(parts.join("+"))
}

fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if chars.as_str().is_empty() => first.to_uppercase().collect(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Accelerator to action lookup table.
#[derive(Debug, Clone, Default)]
pub struct KeyBindingRegistry {
    bindings: BTreeMap<String, EditorAction>,
}

impl KeyBindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the default shortcuts.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for binding in default_bindings() {
            if let Err(e) = registry.register(&binding.accelerator, binding.action) {
                tracing::warn!("Skipping default key binding: {}", e);
            }
        }
        registry
    }

    /// Builds a registry from configured bindings, failing on the first
    /// invalid or colliding accelerator.
    pub fn from_bindings(bindings: &[KeyBinding]) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for binding in bindings {
            registry.register(&binding.accelerator, binding.action)?;
        }
        Ok(registry)
    }

    /// Binds `accelerator` to `action`.
    ///
    /// # Errors
    ///
    /// `ConfigError::DuplicateBinding` if the accelerator is already bound;
    /// the registry is left unchanged.
    pub fn register(&mut self, accelerator: &str, action: EditorAction) -> Result<(), ConfigError> {
        let normalized = normalize_accelerator(accelerator)?;
        if let Some(existing) = self.bindings.get(&normalized) {
            return Err(ConfigError::DuplicateBinding {
                accelerator: normalized,
                existing: existing.to_string(),
            });
        }
        tracing::debug!("Bound {} to {}", normalized, action);
        self.bindings.insert(normalized, action);
        Ok(())
    }

    pub fn unregister(&mut self, accelerator: &str) -> Option<EditorAction> {
        let normalized = normalize_accelerator(accelerator).ok()?;
        self.bindings.remove(&normalized)
    }

    /// Action bound to `accelerator`, if any. Unparseable input resolves to
    /// nothing.
    pub fn resolve(&self, accelerator: &str) -> Option<EditorAction> {
        let normalized = normalize_accelerator(accelerator).ok()?;
        self.bindings.get(&normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings sorted by accelerator.
    pub fn to_bindings(&self) -> Vec<KeyBinding> {
        self.bindings
            .iter()
            .map(|(accelerator, action)| KeyBinding::new(accelerator.clone(), *action))
            .collect()
    }
}
