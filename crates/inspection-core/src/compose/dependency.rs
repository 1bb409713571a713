//! Office-specific fragment selection
//!
//! The dependency tag picks the fragment; for Constructions the procedure tag
//! picks again. Tags that do not parse mean no fragment.

use inspection_types::{
    AntiquityFragment, ConstructionProcedure, Dependency, DependencyFragment,
    GeneralInspectionFragment, LandUseFragment, MayorOfficeFragment, PcCancellationFragment,
    RawConstructionData, RawConstructions, RawFormValues, RawMayorOffice, WorkReceiptFragment,
};
use tracing::debug;

use super::concession::build_concession;
use crate::date::canonicalize;
use crate::extractors::text::null_if_empty;

pub fn build_dependency(raw: &RawFormValues) -> Option<DependencyFragment> {
    let tag = raw.dependency.as_deref()?;
    let dependency = match tag.parse::<Dependency>() {
        Ok(dependency) => dependency,
        Err(err) => {
            debug!("{}; omitting dependency fragment", err);
            return None;
        }
    };

    match dependency {
        Dependency::MayorOffice => Some(mayor_office(
            raw.mayor_office.as_ref().unwrap_or(&RawMayorOffice::default()),
        )),
        Dependency::Constructions => {
            constructions(raw.constructions.as_ref().unwrap_or(&RawConstructions::default()))
        }
        Dependency::MaritimeZone => Some(DependencyFragment::Concession(build_concession(
            raw.zmt_concession.as_ref().unwrap_or(&Default::default()),
        ))),
        Dependency::Collections
        | Dependency::Patents
        | Dependency::EnvironmentalManagement
        | Dependency::Cadastre
        | Dependency::LegalServices => None,
    }
}

fn mayor_office(section: &RawMayorOffice) -> DependencyFragment {
    DependencyFragment::MayorOffice(MayorOfficeFragment {
        procedure_type: null_if_empty(section.procedure_type.as_ref()),
        observations: null_if_empty(section.observations.as_ref()),
    })
}

fn constructions(section: &RawConstructions) -> Option<DependencyFragment> {
    let procedure = match section.procedure.as_deref()?.parse::<ConstructionProcedure>() {
        Ok(procedure) => procedure,
        Err(err) => {
            debug!("{}; omitting constructions fragment", err);
            return None;
        }
    };
    Some(construction_fragment(procedure, &section.data))
}

/// Build the fragment for one construction procedure from the shared data block
pub fn construction_fragment(
    procedure: ConstructionProcedure,
    data: &RawConstructionData,
) -> DependencyFragment {
    match procedure {
        ConstructionProcedure::LandUse => DependencyFragment::LandUse(LandUseFragment {
            requested_use: null_if_empty(data.requested_use.as_ref()),
            matches_location: null_if_empty(data.matches_location.as_ref()),
            is_recommended: null_if_empty(data.is_recommended.as_ref()),
            observations: null_if_empty(data.observations.as_ref()),
        }),
        ConstructionProcedure::Antiquity => DependencyFragment::Antiquity(AntiquityFragment {
            property_number: null_if_empty(data.property_number.as_ref()),
            estimated_antiquity: null_if_empty(data.estimated_antiquity.as_ref()),
        }),
        ConstructionProcedure::PcCancellation => {
            DependencyFragment::PcCancellation(PcCancellationFragment {
                contract_number: null_if_empty(data.contract_number.as_ref()),
                pc_number: null_if_empty(data.pc_number.as_ref()),
                built: null_if_empty(data.built.as_ref()),
                observations: null_if_empty(data.observations.as_ref()),
            })
        }
        ConstructionProcedure::GeneralInspection => {
            DependencyFragment::GeneralInspection(GeneralInspectionFragment {
                property_number: null_if_empty(data.property_number.as_ref()),
                observations: null_if_empty(data.observations.as_ref()),
            })
        }
        ConstructionProcedure::WorkReceipt => {
            DependencyFragment::WorkReceipt(WorkReceiptFragment {
                visit_date: canonicalize(data.visited_at.as_ref()),
                state: null_if_empty(data.status.as_ref()),
            })
        }
    }
}
