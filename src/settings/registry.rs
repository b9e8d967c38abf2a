//! Settings registry
//! Resolves option names and applies typed values

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::RecorderSettings;

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Name resolution (exact name, alias, or unique prefix)
/// - Value parsing and application
#[derive(Clone, Copy)]
pub struct SettingsRegistry {
    /// Static array of setting descriptors
    settings: &'static [SettingDescriptor],
}

impl SettingsRegistry {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    pub fn descriptors(&self) -> &'static [SettingDescriptor] {
        self.settings
    }

    /// Resolve an option name to its descriptor
    ///
    /// Exact names and aliases win; otherwise a prefix must match exactly
    /// one canonical name.
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor, SettingError> {
        let name = name.trim();
        if let Some(desc) = self
            .settings
            .iter()
            .find(|d| d.name == name || d.aliases.iter().any(|alias| *alias == name))
        {
            return Ok(desc);
        }

        let matches: Vec<&'static SettingDescriptor> = self
            .settings
            .iter()
            .filter(|d| !name.is_empty() && d.name.starts_with(name))
            .collect();
        match matches.as_slice() {
            [desc] => Ok(*desc),
            [] => Err(SettingError::UnknownOption(name.to_string())),
            many => {
                let names: Vec<&str> = many.iter().map(|d| d.name).collect();
                Err(SettingError::UnknownOption(format!(
                    "{name} (ambiguous: {})",
                    names.join(", ")
                )))
            }
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        let value = value.trim();
        match ty {
            SettingType::Boolean => match value.to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Integer { min, max } => {
                let val = value.parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
        }
    }

    /// Apply a setting by name with string value
    ///
    /// Flow:
    /// 1. Resolve option name (aliases, prefixes)
    /// 2. Parse string value to `SettingValue` using `SettingType`
    /// 3. Call setter function with typed value
    pub fn apply(
        &self,
        name: &str,
        value: &str,
        settings: &mut RecorderSettings,
    ) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;
        let typed_value = Self::parse_value(&desc.ty, value)?;
        (desc.set)(settings, typed_value)
    }

    /// Apply a valueless assignment: `debug` sets a boolean, `nodebug` clears it
    pub fn apply_flag(&self, name: &str, settings: &mut RecorderSettings) -> Result<(), SettingError> {
        let (desc, on) = match self.resolve(name) {
            Ok(desc) => (desc, true),
            Err(err) => match name.strip_prefix("no") {
                Some(stripped) => (self.resolve(stripped).map_err(|_| err)?, false),
                None => return Err(err),
            },
        };

        if !desc.is_boolean() {
            return Err(SettingError::ParseError(format!(
                "Option '{}' needs a value",
                desc.name
            )));
        }
        (desc.set)(settings, SettingValue::Bool(on))
    }
}
