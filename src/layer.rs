//! Layer - One Gender Presentation Option
//!
//! A [`Layer`] holds the display and pronoun rules for a single
//! presentation option in a selection UI. Optional flags are tri-state:
//! unset, `true` or `false`, and unset survives serialization.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LayerCakeError, Result};
use crate::validate::{
    as_object, check_finite, deny_unknown, field_path, optional_bool, require_bool, require_number,
};

/// Wire names accepted in a layer object
const LAYER_FIELDS: &[&str] = &["presentation", "usesPronoun", "bigenderOption", "preference"];

/// Placeholder for an inactive layer slot.
pub const UNUSED: Layer = Layer {
    presentation: Some(false),
    uses_pronoun: false,
    bigender_option: Some(false),
    preference: 0.0,
};

/// Display and pronoun rules for one gender presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Layer {
    /// Whether this layer is shown at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation: Option<bool>,

    /// Whether this presentation is tied to a pronoun category
    pub uses_pronoun: bool,

    /// Whether this layer may be combined with another in dual-presentation mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigender_option: Option<bool>,

    /// Ordering weight; any finite value, no bounds
    pub preference: f64,
}

impl Layer {
    /// Create a layer with both optional flags unset
    ///
    /// # Errors
    /// Returns a validation error if `preference` is NaN or infinite.
    pub fn new(uses_pronoun: bool, preference: f64) -> Result<Self> {
        check_finite(preference, "preference")?;
        Ok(Self {
            presentation: None,
            uses_pronoun,
            bigender_option: None,
            preference,
        })
    }

    /// Copy of the [`UNUSED`] sentinel
    pub fn unused() -> Self {
        UNUSED
    }

    pub fn with_presentation(mut self, presentation: bool) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn with_bigender_option(mut self, bigender_option: bool) -> Self {
        self.bigender_option = Some(bigender_option);
        self
    }

    /// Build a layer from an untyped JSON value
    ///
    /// # Errors
    /// Returns a validation error if the value is not an object, if
    /// `usesPronoun` or `preference` is missing, if a field has the wrong
    /// type, or if an unknown key is present.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, "")
    }

    /// Same as [`Layer::from_value`], reporting field paths under `parent`
    pub(crate) fn from_value_at(value: &Value, parent: &str) -> Result<Self> {
        let obj = as_object(value, parent)?;
        deny_unknown(obj, LAYER_FIELDS, parent)?;

        let layer = Self {
            presentation: optional_bool(obj, "presentation", parent)?,
            uses_pronoun: require_bool(obj, "usesPronoun", parent)?,
            bigender_option: optional_bool(obj, "bigenderOption", parent)?,
            preference: require_number(obj, "preference", parent)?,
        };
        let name = if parent.is_empty() { "<root>" } else { parent };
        debug!("validated layer {}: {:?}", name, layer);
        Ok(layer)
    }

    /// Re-check a typed layer; public fields can be set to a non-finite preference
    pub fn validate(&self) -> Result<()> {
        self.validate_at("")
    }

    pub(crate) fn validate_at(&self, parent: &str) -> Result<()> {
        check_finite(self.preference, &field_path(parent, "preference"))
    }

    /// Whether this layer equals the [`UNUSED`] sentinel
    pub fn is_unused(&self) -> bool {
        *self == UNUSED
    }
}

/// Deserialization goes through [`Layer::from_value`].
impl TryFrom<Value> for Layer {
    type Error = LayerCakeError;

    fn try_from(value: Value) -> Result<Self> {
        Layer::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_unused_literal_values() {
        assert!(!UNUSED.uses_pronoun);
        assert_eq!(UNUSED.presentation, Some(false));
        assert_eq!(UNUSED.preference, 0.0);
        assert_eq!(UNUSED.bigender_option, Some(false));
        assert!(Layer::unused().is_unused());
    }

    #[test]
    fn test_new_leaves_optional_unset() {
        let layer = Layer::new(true, 1.0).unwrap();
        assert_eq!(layer.presentation, None);
        assert_eq!(layer.bigender_option, None);
        assert!(!layer.is_unused());
    }

    #[test]
    fn test_new_rejects_non_finite_preference() {
        assert!(Layer::new(true, f64::NAN).unwrap_err().is_validation());
        assert!(Layer::new(true, f64::INFINITY).unwrap_err().is_validation());
    }

    #[test]
    fn test_from_value_required_only() {
        let layer = Layer::from_value(&json!({ "usesPronoun": true, "preference": 2 })).unwrap();
        assert!(layer.uses_pronoun);
        assert_relative_eq!(layer.preference, 2.0);
        assert_eq!(layer.presentation, None);
        assert_eq!(layer.bigender_option, None);
    }

    #[test]
    fn test_from_value_missing_uses_pronoun() {
        let err = Layer::from_value(&json!({ "preference": 1 })).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("usesPronoun"));
    }

    #[test]
    fn test_from_value_missing_preference() {
        let err = Layer::from_value(&json!({ "usesPronoun": false })).unwrap_err();
        assert!(err.to_string().contains("preference"));
    }

    #[test]
    fn test_from_value_wrong_types() {
        assert!(Layer::from_value(&json!({ "usesPronoun": 1, "preference": 1 })).is_err());
        assert!(Layer::from_value(&json!({ "usesPronoun": true, "preference": "1" })).is_err());
        assert!(Layer::from_value(&json!({
            "usesPronoun": true,
            "preference": 1,
            "presentation": "no"
        }))
        .is_err());
        assert!(Layer::from_value(&json!([true, 1])).is_err());
    }

    #[test]
    fn test_preference_has_no_bounds() {
        for preference in [-3.0, 0.0, 0.25, 1e9] {
            let value = json!({ "usesPronoun": true, "preference": preference });
            let layer = Layer::from_value(&value).unwrap();
            assert_relative_eq!(layer.preference, preference);
        }
    }

    #[test]
    fn test_serde_deserialize_is_validated() {
        let err = serde_json::from_str::<Layer>(r#"{"preference":1}"#).unwrap_err();
        assert!(err.is_data());
        assert!(err
            .to_string()
            .contains("Validation failed for 'usesPronoun': missing required field"));

        let err = serde_json::from_str::<Layer>(
            r#"{"usesPronoun":true,"preference":1,"extra":true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Validation failed for 'extra'"));

        let json = r#"{"usesPronoun":false,"preference":-2}"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.presentation, None);
        assert_relative_eq!(layer.preference, -2.0);
    }

    #[test]
    fn test_serialize_skips_unset() {
        let layer = Layer::new(true, 1.5).unwrap().with_presentation(true);
        let value = serde_json::to_value(layer).unwrap();
        assert_eq!(value, json!({ "presentation": true, "usesPronoun": true, "preference": 1.5 }));
    }

    #[test]
    fn test_serialize_unused() {
        let value = serde_json::to_value(UNUSED).unwrap();
        assert_eq!(
            value,
            json!({
                "presentation": false,
                "usesPronoun": false,
                "bigenderOption": false,
                "preference": 0.0
            })
        );
    }
}
