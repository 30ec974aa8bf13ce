//! LayerCake - The Four Fixed Presentation Layers
//!
//! A [`LayerCake`] always carries exactly one [`Layer`] per [`Category`].
//! The four slots are plain struct fields, so a partial cake cannot be
//! represented and a fifth category cannot be added.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LayerCakeError, Result};
use crate::layer::{Layer, UNUSED};
use crate::validate::{as_object, deny_unknown, optional_bool, require};

/// Fixed gender presentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Male,
    Female,
    NonBinary,
    Agender,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 4] = [
        Category::Male,
        Category::Female,
        Category::NonBinary,
        Category::Agender,
    ];

    /// Key used for this category in cake documents
    pub fn wire_name(self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::NonBinary => "nonBinary",
            Category::Agender => "agender",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.wire_name())
    }
}

impl FromStr for Category {
    type Err = LayerCakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "male" => Ok(Category::Male),
            "female" => Ok(Category::Female),
            "nonBinary" | "non-binary" | "non_binary" => Ok(Category::NonBinary),
            "agender" => Ok(Category::Agender),
            other => Err(LayerCakeError::validation(
                "category",
                format!("unknown category '{}'", other),
            )),
        }
    }
}

/// Aggregate-level keys accepted besides the four categories
const AGGREGATE_FIELDS: &[&str] = &["usesOtherPronouns", "usesAnyPronouns"];

/// The four presentation layers plus aggregate pronoun-mode flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct LayerCake {
    pub male: Layer,
    pub female: Layer,
    pub non_binary: Layer,
    pub agender: Layer,

    /// Whether an "other pronouns" mode is offered beyond the four layers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_other_pronouns: Option<bool>,

    /// Whether an "any pronouns" mode is offered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_any_pronouns: Option<bool>,
}

impl LayerCake {
    /// Create a cake from four layers, aggregate flags unset
    ///
    /// # Errors
    /// Returns a validation error naming the first invalid slot.
    pub fn new(male: Layer, female: Layer, non_binary: Layer, agender: Layer) -> Result<Self> {
        let cake = Self {
            male,
            female,
            non_binary,
            agender,
            uses_other_pronouns: None,
            uses_any_pronouns: None,
        };
        cake.validate()?;
        Ok(cake)
    }

    /// Cake with every slot set to [`UNUSED`]
    pub fn unused() -> Self {
        Self {
            male: UNUSED,
            female: UNUSED,
            non_binary: UNUSED,
            agender: UNUSED,
            uses_other_pronouns: None,
            uses_any_pronouns: None,
        }
    }

    pub fn with_other_pronouns(mut self, uses_other_pronouns: bool) -> Self {
        self.uses_other_pronouns = Some(uses_other_pronouns);
        self
    }

    pub fn with_any_pronouns(mut self, uses_any_pronouns: bool) -> Self {
        self.uses_any_pronouns = Some(uses_any_pronouns);
        self
    }

    /// Build a cake from an untyped JSON value
    ///
    /// # Errors
    /// Returns a validation error if any of `male`, `female`, `nonBinary`
    /// or `agender` is missing or invalid, if an aggregate flag is not a
    /// boolean, or if an unknown key is present.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = as_object(value, "")?;

        let allowed: Vec<&str> = Category::ALL
            .iter()
            .map(|c| c.wire_name())
            .chain(AGGREGATE_FIELDS.iter().copied())
            .collect();
        deny_unknown(obj, &allowed, "")?;

        let slot = |category: Category| -> Result<Layer> {
            let name = category.wire_name();
            Layer::from_value_at(require(obj, name, "")?, name)
        };

        let cake = Self {
            male: slot(Category::Male)?,
            female: slot(Category::Female)?,
            non_binary: slot(Category::NonBinary)?,
            agender: slot(Category::Agender)?,
            uses_other_pronouns: optional_bool(obj, "usesOtherPronouns", "")?,
            uses_any_pronouns: optional_bool(obj, "usesAnyPronouns", "")?,
        };
        debug!(
            "validated cake with {} active layer(s)",
            cake.active_categories().count()
        );
        Ok(cake)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Pretty-printed JSON document
    ///
    /// # Errors
    /// Returns a validation error if a slot holds a non-finite preference,
    /// which JSON would otherwise silently encode as `null`.
    pub fn to_json_string(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every slot
    pub fn validate(&self) -> Result<()> {
        for (category, layer) in self.layers() {
            layer.validate_at(category.wire_name())?;
        }
        Ok(())
    }

    pub fn layer(&self, category: Category) -> &Layer {
        match category {
            Category::Male => &self.male,
            Category::Female => &self.female,
            Category::NonBinary => &self.non_binary,
            Category::Agender => &self.agender,
        }
    }

    pub fn layer_mut(&mut self, category: Category) -> &mut Layer {
        match category {
            Category::Male => &mut self.male,
            Category::Female => &mut self.female,
            Category::NonBinary => &mut self.non_binary,
            Category::Agender => &mut self.agender,
        }
    }

    /// Layers in category order
    pub fn layers(&self) -> impl Iterator<Item = (Category, &Layer)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.layer(c)))
    }

    /// Categories whose layer is not the [`UNUSED`] sentinel
    pub fn active_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.layers()
            .filter(|(_, layer)| !layer.is_unused())
            .map(|(c, _)| c)
    }
}

/// Deserialization goes through [`LayerCake::from_value`].
impl TryFrom<Value> for LayerCake {
    type Error = LayerCakeError;

    fn try_from(value: Value) -> Result<Self> {
        LayerCake::from_value(&value)
    }
}
