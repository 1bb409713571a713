//! Assembly of the inspection transfer object
//!
//! [`build_dto`] produces the typed object; [`compose`] serializes and prunes
//! it into the exact payload the records backend accepts.

pub mod applicant;
pub mod concession;
pub mod dependency;

use inspection_types::{InspectionDto, Location, RawFormValues};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::date::canonicalize;
use crate::extractors::numeric::extract_inspector_ids;
use crate::extractors::text::null_if_empty;
use crate::prune::prune_object;

pub use applicant::normalize_applicant_type;

/// Typed, unpruned transfer object for one submission
pub fn build_dto(raw: &RawFormValues) -> InspectionDto {
    let applicant_type = normalize_applicant_type(raw.applicant_type.as_deref());

    InspectionDto {
        inspection_date: canonicalize(raw.inspection_date.as_ref()),
        procedure_number: null_if_empty(raw.procedure_number.as_ref()),
        applicant_type,
        inspector_ids: extract_inspector_ids(&raw.user_ids),
        location: Location {
            district: raw.district.clone(),
            exact_address: raw.exact_address.clone(),
        },
        applicant: applicant::build_applicant(applicant_type, raw),
        dependency: dependency::build_dependency(raw),
    }
}

/// Final payload: the built object with every empty value pruned away.
/// Always an object, `{}` at worst.
pub fn compose(raw: &RawFormValues) -> Map<String, Value> {
    let dto = build_dto(raw);

    debug!(
        applicant = %dto.applicant_type,
        fragment = dto.dependency.as_ref().map(|f| f.key()).unwrap_or("none"),
        inspectors = dto.inspector_ids.len(),
        "Composed inspection payload"
    );

    match serde_json::to_value(&dto) {
        Ok(value) => prune_object(&value),
        Err(err) => {
            warn!("Failed to serialize inspection payload: {}", err);
            Map::new()
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use inspection_types::{RawIndividualRequest, RawLegalEntityRequest};
    use proptest::prelude::*;

    fn applicant_tag() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("FISICA".to_string())),
            Just(Some("Persona Física".to_string())),
            Just(Some("JURIDICA".to_string())),
            Just(Some("persona jurídica".to_string())),
            "[A-Za-z ]{0,12}".prop_map(Some),
        ]
    }

    proptest! {
        /// Property: never both requester fragments, whatever was filled in
        #[test]
        fn applicant_fragments_are_exclusive(
            tag in applicant_tag(),
            first_name in "[A-Za-z]{0,6}",
            company in "[A-Za-z]{0,6}",
        ) {
            let raw = RawFormValues {
                applicant_type: tag,
                individual_request: Some(RawIndividualRequest {
                    first_name: Some(first_name.into()),
                    ..Default::default()
                }),
                legal_entity_request: Some(RawLegalEntityRequest {
                    company_name: Some(company.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };
            let payload = compose(&raw);
            prop_assert!(
                !(payload.contains_key("individualRequest")
                    && payload.contains_key("legalEntityRequest"))
            );
        }

        /// Property: at most one office fragment for any dependency/procedure pair
        #[test]
        fn dependency_fragments_are_exclusive(
            dependency in "[A-Za-z]{0,14}",
            procedure in prop_oneof![
                Just("UsoSuelo".to_string()),
                Just("Antiguedad".to_string()),
                Just("AnulacionPC".to_string()),
                Just("InspeccionGeneral".to_string()),
                Just("RecibidoObra".to_string()),
                "[A-Za-z]{0,10}",
            ],
        ) {
            let raw: RawFormValues = serde_json::from_value(serde_json::json!({
                "dependency": dependency,
                "mayorOffice": { "procedureType": "x" },
                "constructions": {
                    "procedure": procedure,
                    "data": {
                        "requestedUse": "x", "propertyNumber": "x", "contractNumber": "x",
                        "observations": "x", "status": "x"
                    }
                },
                "zmtConcession": { "fileNumber": "x" }
            })).unwrap();

            let payload = compose(&raw);
            let present = [
                "mayorOffice", "landUse", "antiquity", "pcCancellation",
                "generalInspection", "workReceipt", "concession",
            ]
            .iter()
            .filter(|key| payload.contains_key(**key))
            .count();
            prop_assert!(present <= 1);
        }
    }
}
