//! Properties of the shipped model artifacts
//!
//! These tests load `artifacts/columns.json` and the exported model from the
//! repository root and check the encoder and link generator over every
//! location and house type the form can offer.

use homescout_core::columns::ColumnLayout;
use homescout_core::encoder::{encode, encode_parts};
use homescout_core::listings::generate_links;
use homescout_core::models::{HouseType, PropertyQuery};
use homescout_core::Predictor;
use proptest::prelude::*;
use std::path::PathBuf;

fn artifact(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../artifacts").join(name)
}

fn layout() -> ColumnLayout {
    ColumnLayout::load(artifact("columns.json")).expect("shipped columns.json should load")
}

fn predictor() -> Predictor {
    Predictor::load(artifact("pune_house_price_model.json"), artifact("columns.json"))
        .expect("shipped artifacts should agree")
}

#[test]
fn test_shipped_artifacts_agree() {
    let layout = layout();
    assert_eq!(layout.len(), 37);
    assert_eq!(layout.locations().len(), 30);
    assert!(layout.is_known_location("Wakad"));

    // Remainder columns are alphabetical
    let categories = &layout.columns()[2..];
    let mut sorted = categories.to_vec();
    sorted.sort();
    assert_eq!(categories, sorted.as_slice());
}

#[test]
fn test_wakad_apartment_example() {
    let layout = layout();
    let query = PropertyQuery::new("Wakad", HouseType::Apartment, 1000, 2);
    let vector = encode(&layout, &query).unwrap();

    let wakad = layout.index_of("wakad").unwrap();
    let apartment = layout.index_of("apartment").unwrap();

    for (slot, value) in vector.as_slice().iter().enumerate() {
        let expected = match slot {
            0 => 1000.0,
            1 => 2.0,
            s if s == wakad || s == apartment => 1.0,
            _ => 0.0,
        };
        assert_eq!(*value, expected, "slot {}", slot);
    }
}

#[test]
fn test_prices_are_ordered_sensibly() {
    let predictor = predictor();
    let price = |location: &str, house_type: HouseType, area: u32, bhk: u32| {
        predictor
            .predict(&PropertyQuery::new(location, house_type, area, bhk))
            .unwrap()
            .estimate
            .rupees()
    };

    assert!(price("Koregaon Park", HouseType::Apartment, 1000, 2) > price("Moshi", HouseType::Apartment, 1000, 2));
    assert!(price("Baner", HouseType::Villa, 2000, 3) > price("Baner", HouseType::Apartment, 2000, 3));
    assert!(price("Wakad", HouseType::Apartment, 1500, 2) > price("Wakad", HouseType::Apartment, 1000, 2));
}

fn house_type_strategy() -> impl Strategy<Value = HouseType> {
    prop::sample::select(HouseType::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_encoding_sets_exactly_two_one_hot_slots(
        location_idx in 0usize..30,
        house_type in house_type_strategy(),
        area in 300u32..=5000,
        bhk in 1u32..=5,
    ) {
        let layout = layout();
        let location = layout.locations()[location_idx].clone();
        let vector = encode(&layout, &PropertyQuery::new(location.clone(), house_type, area, bhk)).unwrap();

        prop_assert_eq!(vector.len(), layout.len());
        prop_assert_eq!(vector.get(0), Some(f64::from(area)));
        prop_assert_eq!(vector.get(1), Some(f64::from(bhk)));

        let hot: Vec<usize> = vector.as_slice()[2..]
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 1.0)
            .map(|(i, _)| i + 2)
            .collect();
        prop_assert_eq!(hot.len(), 2);
        prop_assert!(hot.contains(&layout.index_of(&location).unwrap()));
        prop_assert!(hot.contains(&layout.index_of(house_type.column_name()).unwrap()));
        prop_assert!(vector.as_slice()[2..].iter().all(|v| *v == 0.0 || *v == 1.0));
    }

    #[test]
    fn prop_encoding_ignores_case(location_idx in 0usize..30, house_type in house_type_strategy()) {
        let layout = layout();
        let location = &layout.locations()[location_idx];

        let lower = encode_parts(&layout, location, house_type.column_name(), 1000, 2).unwrap();
        let upper = encode_parts(
            &layout,
            &location.to_uppercase(),
            &house_type.display_name().to_uppercase(),
            1000,
            2,
        )
        .unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn prop_links_are_five_in_stable_order(location in "[A-Za-z]{1,12}( [A-Za-z]{1,12})?", bhk in 1u32..=5) {
        let first = generate_links(&location, bhk);
        let second = generate_links(&location, bhk);

        prop_assert_eq!(first.len(), 5);
        prop_assert_eq!(&first, &second);

        let slug = location.to_lowercase().replace(' ', "-");
        for link in &first {
            prop_assert!(link.url.contains(&slug), "{} missing {}", link.url, slug);
        }
        // PropertyWala has no bedroom filter
        for link in &first[..4] {
            prop_assert!(link.url.contains(&bhk.to_string()));
        }
    }
}
