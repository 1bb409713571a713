//! Closed enumerations behind the inspection form selectors
//!
//! Dependencies (government offices), construction procedures and applicant
//! types arrive from the form as free text. They are parsed into these enums at
//! the boundary so the composer can branch exhaustively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag kinds that can fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Dependency,
    Procedure,
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagKind::Dependency => write!(f, "dependency"),
            TagKind::Procedure => write!(f, "procedure"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} tag: {value:?}")]
pub struct UnknownTag {
    pub kind: TagKind,
    pub value: String,
}

impl UnknownTag {
    pub fn new(kind: TagKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Government office an inspection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dependency {
    MayorOffice,
    Constructions,
    MaritimeZone,
    Collections,
    Patents,
    EnvironmentalManagement,
    Cadastre,
    LegalServices,
}

impl Dependency {
    pub const ALL: [Dependency; 8] = [
        Dependency::MayorOffice,
        Dependency::Constructions,
        Dependency::MaritimeZone,
        Dependency::Collections,
        Dependency::Patents,
        Dependency::EnvironmentalManagement,
        Dependency::Cadastre,
        Dependency::LegalServices,
    ];

    /// Wire tag sent by the form
    pub fn as_tag(&self) -> &'static str {
        match self {
            Dependency::MayorOffice => "MayorOffice",
            Dependency::Constructions => "Constructions",
            Dependency::MaritimeZone => "MaritimeZone",
            Dependency::Collections => "Collections",
            Dependency::Patents => "Patents",
            Dependency::EnvironmentalManagement => "EnvironmentalManagement",
            Dependency::Cadastre => "Cadastre",
            Dependency::LegalServices => "LegalServices",
        }
    }

    /// Display name of the office
    pub fn label(&self) -> &'static str {
        match self {
            Dependency::MayorOffice => "Alcaldía",
            Dependency::Constructions => "Construcciones",
            Dependency::MaritimeZone => "Zona Marítimo Terrestre",
            Dependency::Collections => "Cobros",
            Dependency::Patents => "Patentes",
            Dependency::EnvironmentalManagement => "Gestión Ambiental",
            Dependency::Cadastre => "Catastro",
            Dependency::LegalServices => "Servicios Jurídicos",
        }
    }

    /// Whether inspections for this office carry an office-specific fragment
    pub fn carries_fragment(&self) -> bool {
        matches!(
            self,
            Dependency::MayorOffice | Dependency::Constructions | Dependency::MaritimeZone
        )
    }
}

impl std::str::FromStr for Dependency {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dependency::ALL
            .into_iter()
            .find(|d| d.as_tag() == s.trim())
            .ok_or_else(|| UnknownTag::new(TagKind::Dependency, s))
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Procedure within the Constructions dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionProcedure {
    #[serde(rename = "UsoSuelo")]
    LandUse,
    #[serde(rename = "Antiguedad")]
    Antiquity,
    #[serde(rename = "AnulacionPC")]
    PcCancellation,
    #[serde(rename = "InspeccionGeneral")]
    GeneralInspection,
    #[serde(rename = "RecibidoObra")]
    WorkReceipt,
}

impl ConstructionProcedure {
    pub const ALL: [ConstructionProcedure; 5] = [
        ConstructionProcedure::LandUse,
        ConstructionProcedure::Antiquity,
        ConstructionProcedure::PcCancellation,
        ConstructionProcedure::GeneralInspection,
        ConstructionProcedure::WorkReceipt,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            ConstructionProcedure::LandUse => "UsoSuelo",
            ConstructionProcedure::Antiquity => "Antiguedad",
            ConstructionProcedure::PcCancellation => "AnulacionPC",
            ConstructionProcedure::GeneralInspection => "InspeccionGeneral",
            ConstructionProcedure::WorkReceipt => "RecibidoObra",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConstructionProcedure::LandUse => "Uso de suelo",
            ConstructionProcedure::Antiquity => "Antigüedad",
            ConstructionProcedure::PcCancellation => "Anulación de PC",
            ConstructionProcedure::GeneralInspection => "Inspección general",
            ConstructionProcedure::WorkReceipt => "Recibido de obra",
        }
    }

    /// Key of the transfer-object fragment this procedure produces
    pub fn fragment_key(&self) -> &'static str {
        match self {
            ConstructionProcedure::LandUse => "landUse",
            ConstructionProcedure::Antiquity => "antiquity",
            ConstructionProcedure::PcCancellation => "pcCancellation",
            ConstructionProcedure::GeneralInspection => "generalInspection",
            ConstructionProcedure::WorkReceipt => "workReceipt",
        }
    }
}

impl std::str::FromStr for ConstructionProcedure {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstructionProcedure::ALL
            .into_iter()
            .find(|p| p.as_tag() == s.trim())
            .ok_or_else(|| UnknownTag::new(TagKind::Procedure, s))
    }
}

impl std::fmt::Display for ConstructionProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Who requested the inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ApplicantType {
    #[default]
    #[serde(rename = "Anonimo")]
    Anonymous,
    #[serde(rename = "Persona Física")]
    Individual,
    #[serde(rename = "Persona Jurídica")]
    LegalEntity,
}

impl ApplicantType {
    pub const ALL: [ApplicantType; 3] = [
        ApplicantType::Anonymous,
        ApplicantType::Individual,
        ApplicantType::LegalEntity,
    ];

    /// Label sent to the backend
    pub fn label(&self) -> &'static str {
        match self {
            ApplicantType::Anonymous => "Anonimo",
            ApplicantType::Individual => "Persona Física",
            ApplicantType::LegalEntity => "Persona Jurídica",
        }
    }

    /// Folded (unaccented, uppercase) spellings that select this variant.
    /// Anonymous is the fallback and has none.
    pub fn accepted_spellings(&self) -> &'static [&'static str] {
        match self {
            ApplicantType::Anonymous => &[],
            ApplicantType::Individual => &["FISICA", "PERSONA FISICA"],
            ApplicantType::LegalEntity => &["JURIDICA", "PERSONA JURIDICA"],
        }
    }

    /// Map an already folded key through the closed table.
    /// Anything outside the table, including the empty key, is anonymous.
    pub fn from_folded(key: &str) -> Self {
        match key {
            "FISICA" | "PERSONA FISICA" => ApplicantType::Individual,
            "JURIDICA" | "PERSONA JURIDICA" => ApplicantType::LegalEntity,
            _ => ApplicantType::Anonymous,
        }
    }
}

impl std::fmt::Display for ApplicantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
