//! Raw form input as submitted by the inspection front-end
//!
//! Every field is optional and loosely typed. Nothing here validates; the
//! composer decides what survives into the transfer object.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A scalar form value: text inputs, numeric inputs and toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormScalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FormScalar {
    /// Only the empty string counts as empty; `false` and `0` are values
    pub fn is_empty(&self) -> bool {
        matches!(self, FormScalar::Text(s) if s.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormScalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FormScalar {
    fn from(s: &str) -> Self {
        FormScalar::Text(s.to_string())
    }
}

impl From<String> for FormScalar {
    fn from(s: String) -> Self {
        FormScalar::Text(s)
    }
}

impl From<bool> for FormScalar {
    fn from(b: bool) -> Self {
        FormScalar::Bool(b)
    }
}

impl From<i64> for FormScalar {
    fn from(n: i64) -> Self {
        FormScalar::Number(n.into())
    }
}

/// Any of the shapes a date picker or text field can hand over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Free text, e.g. `15/03/2024` or `2024-03-15`
    Text(String),
    /// Milliseconds since the Unix epoch
    Timestamp(f64),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::DateTime(dt)
    }
}

/// Reads an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Top-level form state for one submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFormValues {
    pub inspection_date: Option<DateInput>,
    pub procedure_number: Option<FormScalar>,
    /// Selected inspectors; entries may be numbers, numeric strings or junk
    #[serde(deserialize_with = "null_as_default")]
    pub user_ids: Vec<Value>,
    pub applicant_type: Option<String>,
    pub individual_request: Option<RawIndividualRequest>,
    pub legal_entity_request: Option<RawLegalEntityRequest>,
    pub district: Option<FormScalar>,
    pub exact_address: Option<FormScalar>,
    pub dependency: Option<String>,
    pub mayor_office: Option<RawMayorOffice>,
    pub constructions: Option<RawConstructions>,
    pub zmt_concession: Option<RawZmtConcession>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIndividualRequest {
    pub first_name: Option<FormScalar>,
    pub last_name1: Option<FormScalar>,
    pub last_name2: Option<FormScalar>,
    pub physical_id: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLegalEntityRequest {
    pub company_name: Option<FormScalar>,
    pub legal_id: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMayorOffice {
    pub procedure_type: Option<FormScalar>,
    pub observations: Option<FormScalar>,
}

/// Constructions section: a procedure tag plus the fields of every procedure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConstructions {
    pub procedure: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub data: RawConstructionData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConstructionData {
    // Uso de suelo
    pub requested_use: Option<FormScalar>,
    pub matches_location: Option<FormScalar>,
    pub is_recommended: Option<FormScalar>,
    pub observations: Option<FormScalar>,
    // Antigüedad / inspección general
    pub property_number: Option<FormScalar>,
    pub estimated_antiquity: Option<FormScalar>,
    // Anulación de PC
    pub contract_number: Option<FormScalar>,
    pub pc_number: Option<FormScalar>,
    pub built: Option<FormScalar>,
    // Recibido de obra
    pub visited_at: Option<DateInput>,
    pub status: Option<FormScalar>,
}

/// Maritime-terrestrial zone concession section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawZmtConcession {
    pub file_number: Option<FormScalar>,
    pub concession_type: Option<FormScalar>,
    pub granted_at: Option<DateInput>,
    pub expires_at: Option<DateInput>,
    pub observations: Option<FormScalar>,
    #[serde(deserialize_with = "null_as_default")]
    pub parcels: Vec<RawParcel>,
}

/// One parcel row; yes/no questions come back as `"si"` / `"no"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParcel {
    pub plan_type: Option<FormScalar>,
    pub plan_number: Option<FormScalar>,
    pub area: Option<FormScalar>,
    pub mojon_type: Option<FormScalar>,
    pub plan_complies: Option<FormScalar>,
    pub respects_boundary: Option<FormScalar>,
    pub anchorage_mojones: Option<FormScalar>,
    pub topography: Option<FormScalar>,
    pub topography_other: Option<FormScalar>,
    /// Comma-separated list, e.g. `"wood, metal"`
    pub fence_types: Option<FormScalar>,
    pub fences_invade_public: Option<FormScalar>,
    pub road_has_public_access: Option<FormScalar>,
    pub road_description: Option<FormScalar>,
    pub road_limitations: Option<FormScalar>,
    pub road_matches_plan: Option<FormScalar>,
    pub right_of_way_width: Option<FormScalar>,
}
