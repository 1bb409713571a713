//! API handlers for the inspection server
//!
//! Provides REST endpoints for:
//! - Form normalization into the records payload
//! - Date previews
//! - Catalog listing for the form selectors

use axum::{extract::rejection::JsonRejection, Json};
use inspection_core::{canonicalize, DtoComposer};
use inspection_types::{
    ApplicantType, CanonicalDate, ConstructionProcedure, DateInput, Dependency, RawFormValues,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::ServerError;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "inspection-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Catalog response
#[derive(Serialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub dependencies: Vec<DependencyInfo>,
    pub procedures: Vec<ProcedureInfo>,
    pub applicant_types: Vec<ApplicantTypeInfo>,
}

#[derive(Serialize)]
pub struct DependencyInfo {
    pub tag: &'static str,
    pub label: &'static str,
    pub carries_fragment: bool,
}

#[derive(Serialize)]
pub struct ProcedureInfo {
    pub tag: &'static str,
    pub label: &'static str,
    /// Payload key the procedure's fragment is written under
    pub fragment_key: &'static str,
}

#[derive(Serialize)]
pub struct ApplicantTypeInfo {
    pub label: &'static str,
    pub accepted_spellings: &'static [&'static str],
}

pub fn catalog() -> CatalogResponse {
    CatalogResponse {
        success: true,
        dependencies: Dependency::ALL
            .iter()
            .map(|d| DependencyInfo {
                tag: d.as_tag(),
                label: d.label(),
                carries_fragment: d.carries_fragment(),
            })
            .collect(),
        procedures: ConstructionProcedure::ALL
            .iter()
            .map(|p| ProcedureInfo {
                tag: p.as_tag(),
                label: p.label(),
                fragment_key: p.fragment_key(),
            })
            .collect(),
        applicant_types: ApplicantType::ALL
            .iter()
            .map(|a| ApplicantTypeInfo {
                label: a.label(),
                accepted_spellings: a.accepted_spellings(),
            })
            .collect(),
    }
}

/// Handler: GET /api/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(catalog())
}

/// Normalize response
#[derive(Serialize)]
pub struct NormalizeResponse {
    pub success: bool,
    pub dto: Map<String, Value>,
}

/// Handler: POST /api/inspections/normalize
///
/// Unknown tags, bad dates and bad ids never fail the request; only a body
/// that is not JSON or does not fit the form shape is rejected.
pub async fn handle_normalize(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<NormalizeResponse>, ServerError> {
    let Json(body) = payload?;
    let raw: RawFormValues = serde_json::from_value(body)?;

    info!(
        "Normalize request: dependency={:?}, applicant_type={:?}",
        raw.dependency, raw.applicant_type
    );

    let dto = DtoComposer::new().compose(&raw);
    debug!("Normalized payload has {} top-level fields", dto.len());

    Ok(Json(NormalizeResponse { success: true, dto }))
}

/// Date preview request body
#[derive(Deserialize, Default)]
pub struct CanonicalizeRequest {
    /// Text date or epoch milliseconds
    #[serde(default)]
    pub value: Option<DateInput>,
}

/// Date preview response; `date` is null when the input is not a valid date
#[derive(Serialize)]
pub struct CanonicalizeResponse {
    pub success: bool,
    pub date: Option<CanonicalDate>,
}

pub fn canonical_date(req: &CanonicalizeRequest) -> CanonicalizeResponse {
    CanonicalizeResponse {
        success: true,
        date: canonicalize(req.value.as_ref()),
    }
}

/// Handler: POST /api/dates/canonicalize
pub async fn handle_canonicalize_date(
    payload: Result<Json<CanonicalizeRequest>, JsonRejection>,
) -> Result<Json<CanonicalizeResponse>, ServerError> {
    let Json(req) = payload?;
    let response = canonical_date(&req);
    debug!("Canonicalized {:?} -> {:?}", req.value, response.date);
    Ok(Json(response))
}
