use anyhow::Result;
use dialoguer::{Input, Select};
use homescout_core::columns::ColumnLayout;
use homescout_core::insights::title_case;
use homescout_core::models::{PropertyQuery, AREA_RANGE, BHK_RANGE};

/// Interactive property form
pub fn interactive_predict(layout: &ColumnLayout) -> Result<PropertyQuery> {
    println!("\n🏠 Pune House Price Estimate\n");

    let locations: Vec<String> = layout.locations().iter().map(|l| title_case(l)).collect();
    let location_idx = Select::new()
        .with_prompt("Location")
        .items(&locations)
        .default(0)
        .interact()?;

    let house_types = layout.house_types();
    let house_type_labels: Vec<&str> = house_types.iter().map(|ht| ht.display_name()).collect();
    let house_type_idx = Select::new()
        .with_prompt("House type")
        .items(&house_type_labels)
        .default(0)
        .interact()?;

    let area_sqft: u32 = Input::new()
        .with_prompt(format!("Area in sqft ({}-{})", AREA_RANGE.start(), AREA_RANGE.end()))
        .default(1000)
        .validate_with(|value: &u32| -> std::result::Result<(), String> {
            if AREA_RANGE.contains(value) {
                Ok(())
            } else {
                Err(format!("Enter a value between {} and {}", AREA_RANGE.start(), AREA_RANGE.end()))
            }
        })
        .interact_text()?;

    let bhk_options: Vec<String> = BHK_RANGE.map(|n| format!("{} BHK", n)).collect();
    let bhk_idx = Select::new()
        .with_prompt("Bedrooms")
        .items(&bhk_options)
        .default(1)
        .interact()?;
    let bhk = BHK_RANGE.start() + bhk_idx as u32;

    Ok(PropertyQuery::new(
        locations[location_idx].as_str(),
        house_types[house_type_idx],
        area_sqft,
        bhk,
    ))
}
