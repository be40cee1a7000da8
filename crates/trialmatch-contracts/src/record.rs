//! Patient and trial records.
//!
//! Both records are immutable once loaded. Deserialization is forgiving:
//! a missing or `null` field becomes its empty value (empty text, empty
//! list, age 0) so one sparse record never rejects a whole data set.

use serde::{Deserialize, Deserializer, Serialize};

/// A clinical trial with free-text eligibility criteria.
///
/// The criteria strings are not structured in any way; the evaluator reads
/// them as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    /// Registry identifier, e.g. "NCT001".
    #[serde(rename = "nctId", alias = "id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Human-readable trial title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Text describing who may enroll. Also carries the age window, if any.
    #[serde(
        alias = "inclusionCriteria",
        default,
        deserialize_with = "null_as_default"
    )]
    pub inclusion_criteria: String,
    /// Text describing who is disqualified.
    #[serde(
        alias = "exclusionCriteria",
        default,
        deserialize_with = "null_as_default"
    )]
    pub exclusion_criteria: String,
}

impl Trial {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        inclusion_criteria: impl Into<String>,
        exclusion_criteria: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            inclusion_criteria: inclusion_criteria.into(),
            exclusion_criteria: exclusion_criteria.into(),
        }
    }
}

/// A patient as seen by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Age in whole years. A record without an age reads as 0, so it falls
    /// inside "below" windows and outside "above" and "between" windows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    /// Recorded but not used by any eligibility check.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    /// Diagnosed condition names, e.g. "diabetes".
    #[serde(default, deserialize_with = "null_as_default")]
    pub conditions: Vec<String>,
    /// Current medication names, e.g. "Metformin".
    #[serde(default, deserialize_with = "null_as_default")]
    pub medications: Vec<String>,
}

impl Patient {
    pub fn new(id: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            age,
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications = medications.into_iter().map(Into::into).collect();
        self
    }
}

/// Deserialize `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
