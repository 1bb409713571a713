//! Maritime-terrestrial zone concession and its parcel rows

use inspection_types::{ConcessionFragment, Parcel, RawParcel, RawZmtConcession};

use crate::date::canonicalize;
use crate::extractors::numeric::coerce_area;
use crate::extractors::text::{is_affirmative, null_if_empty, split_list};

pub fn build_concession(section: &RawZmtConcession) -> ConcessionFragment {
    ConcessionFragment {
        file_number: null_if_empty(section.file_number.as_ref()),
        concession_type: null_if_empty(section.concession_type.as_ref()),
        granted_at: canonicalize(section.granted_at.as_ref()),
        expires_at: canonicalize(section.expires_at.as_ref()),
        observations: null_if_empty(section.observations.as_ref()),
        parcels: section.parcels.iter().map(normalize_parcel).collect(),
    }
}

/// Element-wise coercion of one parcel row: numeric area, `"si"` flags and a
/// split fence list
pub fn normalize_parcel(raw: &RawParcel) -> Parcel {
    Parcel {
        plan_type: null_if_empty(raw.plan_type.as_ref()),
        plan_number: null_if_empty(raw.plan_number.as_ref()),
        area: coerce_area(raw.area.as_ref()),
        mojon_type: null_if_empty(raw.mojon_type.as_ref()),
        plan_complies: is_affirmative(raw.plan_complies.as_ref()),
        respects_boundary: is_affirmative(raw.respects_boundary.as_ref()),
        anchorage_mojones: null_if_empty(raw.anchorage_mojones.as_ref()),
        topography: null_if_empty(raw.topography.as_ref()),
        topography_other: null_if_empty(raw.topography_other.as_ref()),
        fence_types: split_list(raw.fence_types.as_ref()),
        fences_invade_public: is_affirmative(raw.fences_invade_public.as_ref()),
        road_has_public_access: is_affirmative(raw.road_has_public_access.as_ref()),
        road_description: null_if_empty(raw.road_description.as_ref()),
        road_limitations: null_if_empty(raw.road_limitations.as_ref()),
        road_matches_plan: is_affirmative(raw.road_matches_plan.as_ref()),
        right_of_way_width: null_if_empty(raw.right_of_way_width.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspection_types::{CanonicalDate, DateInput, FormScalar};
    use pretty_assertions::assert_eq;
    use serde_json::Number;

    #[test]
    fn test_parcel_coercions() {
        let raw = RawParcel {
            plan_type: Some("Catastrado".into()),
            area: Some("350.5".into()),
            plan_complies: Some("si".into()),
            respects_boundary: Some("no".into()),
            fence_types: Some("wood, metal".into()),
            road_matches_plan: Some(FormScalar::Bool(true)),
            ..Default::default()
        };

        assert_eq!(
            normalize_parcel(&raw),
            Parcel {
                plan_type: Some("Catastrado".into()),
                area: Number::from_f64(350.5),
                plan_complies: true,
                fence_types: vec!["wood".to_string(), "metal".to_string()],
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_parcel_has_false_flags_and_no_fences() {
        let parcel = normalize_parcel(&RawParcel::default());
        assert!(!parcel.plan_complies);
        assert!(!parcel.respects_boundary);
        assert!(!parcel.fences_invade_public);
        assert!(!parcel.road_has_public_access);
        assert!(!parcel.road_matches_plan);
        assert!(parcel.fence_types.is_empty());
        assert_eq!(parcel.area, None);
    }

    #[test]
    fn test_concession_dates_and_parcel_order() {
        let section = RawZmtConcession {
            file_number: Some("ZMT-2019-044".into()),
            granted_at: Some(DateInput::from("01/07/2019")),
            expires_at: Some(DateInput::from("2039-06-31")),
            parcels: vec![
                RawParcel {
                    plan_number: Some("G-1".into()),
                    ..Default::default()
                },
                RawParcel {
                    plan_number: Some("G-2".into()),
                    area: Some(FormScalar::from(120i64)),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let concession = build_concession(&section);
        assert_eq!(concession.granted_at, CanonicalDate::from_ymd(2019, 7, 1));
        assert_eq!(concession.expires_at, None);
        assert_eq!(concession.parcels.len(), 2);
        assert_eq!(concession.parcels[0].plan_number, Some("G-1".into()));
        assert_eq!(concession.parcels[1].area, Some(Number::from(120i64)));
    }
}
