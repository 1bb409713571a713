//! Applicant discriminant and requester fragment

use inspection_types::{
    ApplicantFragment, ApplicantType, IndividualRequest, LegalEntityRequest, RawFormValues,
};

use crate::extractors::text::{fold_diacritics, null_if_empty};

/// Trim, strip accents and uppercase the selector value, then map it through
/// the closed applicant table. Missing or unknown values are anonymous.
pub fn normalize_applicant_type(raw: Option<&str>) -> ApplicantType {
    let key = fold_diacritics(raw.unwrap_or_default().trim()).to_uppercase();
    ApplicantType::from_folded(&key)
}

/// Requester details for the selected applicant variant, if supplied
pub fn build_applicant(
    applicant_type: ApplicantType,
    raw: &RawFormValues,
) -> Option<ApplicantFragment> {
    match applicant_type {
        ApplicantType::Individual => raw.individual_request.as_ref().map(|person| {
            ApplicantFragment::IndividualRequest(IndividualRequest {
                first_name: null_if_empty(person.first_name.as_ref()),
                last_name1: null_if_empty(person.last_name1.as_ref()),
                last_name2: null_if_empty(person.last_name2.as_ref()),
                physical_id: null_if_empty(person.physical_id.as_ref()),
            })
        }),
        ApplicantType::LegalEntity => raw.legal_entity_request.as_ref().map(|company| {
            ApplicantFragment::LegalEntityRequest(LegalEntityRequest {
                company_name: null_if_empty(company.company_name.as_ref()),
                legal_id: null_if_empty(company.legal_id.as_ref()),
            })
        }),
        ApplicantType::Anonymous => None,
    }
}
