pub mod catalog;
pub mod dto;
pub mod form;

pub use catalog::{ApplicantType, ConstructionProcedure, Dependency, TagKind, UnknownTag};
pub use dto::{
    AntiquityFragment, ApplicantFragment, CanonicalDate, ConcessionFragment, DependencyFragment,
    GeneralInspectionFragment, IndividualRequest, InspectionDto, LandUseFragment,
    LegalEntityRequest, Location, MayorOfficeFragment, Parcel, PcCancellationFragment,
    WorkReceiptFragment,
};
pub use form::{
    DateInput, FormScalar, RawConstructionData, RawConstructions, RawFormValues,
    RawIndividualRequest, RawLegalEntityRequest, RawMayorOffice, RawParcel, RawZmtConcession,
};
