//! Settings definitions
//! Declarative list of every recorder option

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use super::RecorderSettings;

// Setter functions for each setting

fn set_enabled(settings: &mut RecorderSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.enabled = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_debug(settings: &mut RecorderSettings, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            settings.debug = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_max_count(
    settings: &mut RecorderSettings,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        // 0 lifts the limit
        SettingValue::Integer(n) => {
            settings.max_count = (n > 0).then_some(n);
            Ok(())
        }
        _ => Err(SettingError::ValidationError(
            "Expected integer".to_string(),
        )),
    }
}

pub const RECORDER_SETTINGS: &[SettingDescriptor] = &[
    SettingDescriptor {
        name: "enabled",
        aliases: &["mc"],
        ty: SettingType::Boolean,
        set: set_enabled,
    },
    SettingDescriptor {
        name: "debug",
        aliases: &["mcdebug"],
        ty: SettingType::Boolean,
        set: set_debug,
    },
    SettingDescriptor {
        name: "max_count",
        aliases: &["mcmax"],
        ty: SettingType::Integer {
            min: None,
            max: None,
        },
        set: set_max_count,
    },
];

/// Registry over every recorder option
#[must_use]
pub fn create_settings_registry() -> SettingsRegistry {
    SettingsRegistry::new(RECORDER_SETTINGS)
}
