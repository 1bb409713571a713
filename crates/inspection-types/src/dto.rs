//! Inspection transfer object handed to the records backend
//!
//! Field names are part of the backend contract. Applicant and dependency
//! fragments are enums flattened into the top level, so at most one of each
//! can ever be present.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::catalog::ApplicantType;
use crate::form::FormScalar;

/// A calendar-valid date rendered as `yyyy-mm-dd`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `None` when the triple is not a real calendar day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub district: Option<FormScalar>,
    pub exact_address: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualRequest {
    pub first_name: Option<FormScalar>,
    pub last_name1: Option<FormScalar>,
    pub last_name2: Option<FormScalar>,
    pub physical_id: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntityRequest {
    pub company_name: Option<FormScalar>,
    pub legal_id: Option<FormScalar>,
}

/// Requester details, keyed by applicant variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicantFragment {
    IndividualRequest(IndividualRequest),
    LegalEntityRequest(LegalEntityRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MayorOfficeFragment {
    pub procedure_type: Option<FormScalar>,
    pub observations: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandUseFragment {
    pub requested_use: Option<FormScalar>,
    pub matches_location: Option<FormScalar>,
    pub is_recommended: Option<FormScalar>,
    pub observations: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntiquityFragment {
    pub property_number: Option<FormScalar>,
    pub estimated_antiquity: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PcCancellationFragment {
    pub contract_number: Option<FormScalar>,
    pub pc_number: Option<FormScalar>,
    pub built: Option<FormScalar>,
    pub observations: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInspectionFragment {
    pub property_number: Option<FormScalar>,
    pub observations: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkReceiptFragment {
    pub visit_date: Option<CanonicalDate>,
    pub state: Option<FormScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcessionFragment {
    pub file_number: Option<FormScalar>,
    pub concession_type: Option<FormScalar>,
    pub granted_at: Option<CanonicalDate>,
    pub expires_at: Option<CanonicalDate>,
    pub observations: Option<FormScalar>,
    pub parcels: Vec<Parcel>,
}

/// Normalized parcel row of a concession
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub plan_type: Option<FormScalar>,
    pub plan_number: Option<FormScalar>,
    pub area: Option<Number>,
    pub mojon_type: Option<FormScalar>,
    pub plan_complies: bool,
    pub respects_boundary: bool,
    pub anchorage_mojones: Option<FormScalar>,
    pub topography: Option<FormScalar>,
    pub topography_other: Option<FormScalar>,
    pub fence_types: Vec<String>,
    pub fences_invade_public: bool,
    pub road_has_public_access: bool,
    pub road_description: Option<FormScalar>,
    pub road_limitations: Option<FormScalar>,
    pub road_matches_plan: bool,
    pub right_of_way_width: Option<FormScalar>,
}

/// Office-specific payload; Constructions contributes one of five
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyFragment {
    MayorOffice(MayorOfficeFragment),
    LandUse(LandUseFragment),
    Antiquity(AntiquityFragment),
    PcCancellation(PcCancellationFragment),
    GeneralInspection(GeneralInspectionFragment),
    WorkReceipt(WorkReceiptFragment),
    Concession(ConcessionFragment),
}

impl DependencyFragment {
    /// Key the fragment occupies in the serialized object
    pub fn key(&self) -> &'static str {
        match self {
            DependencyFragment::MayorOffice(_) => "mayorOffice",
            DependencyFragment::LandUse(_) => "landUse",
            DependencyFragment::Antiquity(_) => "antiquity",
            DependencyFragment::PcCancellation(_) => "pcCancellation",
            DependencyFragment::GeneralInspection(_) => "generalInspection",
            DependencyFragment::WorkReceipt(_) => "workReceipt",
            DependencyFragment::Concession(_) => "concession",
        }
    }
}

/// The composed inspection, before empty-value pruning
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDto {
    pub inspection_date: Option<CanonicalDate>,
    pub procedure_number: Option<FormScalar>,
    pub applicant_type: ApplicantType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inspector_ids: Vec<Number>,
    pub location: Location,
    #[serde(flatten)]
    pub applicant: Option<ApplicantFragment>,
    #[serde(flatten)]
    pub dependency: Option<DependencyFragment>,
}
