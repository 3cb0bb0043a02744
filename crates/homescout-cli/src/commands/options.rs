use crate::output::OutputWriter;
use crate::output_types::{OptionsOutput, RangeOutput};
use anyhow::Result;
use homescout_core::columns::ColumnLayout;
use homescout_core::config::LayeredConfig;
use homescout_core::insights::title_case;
use homescout_core::models::{AREA_RANGE, BHK_RANGE};

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let layout = ColumnLayout::load(&config.columns_path.value)?;

    let options = OptionsOutput {
        locations: layout.locations().iter().map(|l| title_case(l)).collect(),
        house_types: layout
            .house_types()
            .iter()
            .map(|ht| ht.display_name().to_string())
            .collect(),
        area_sqft: RangeOutput {
            min: *AREA_RANGE.start(),
            max: *AREA_RANGE.end(),
        },
        bhk: RangeOutput {
            min: *BHK_RANGE.start(),
            max: *BHK_RANGE.end(),
        },
    };

    if output.is_json() {
        return output.result(options);
    }

    output.section(format!("Locations ({})", options.locations.len()));
    for chunk in options.locations.chunks(4) {
        println!("  {}", chunk.join(", "));
    }

    output.section("House Types");
    for house_type in &options.house_types {
        println!("  {}", house_type);
    }

    output.section("Ranges");
    output.kv("Area (sqft)", format!("{} - {}", options.area_sqft.min, options.area_sqft.max));
    output.kv("BHK", format!("{} - {}", options.bhk.min, options.bhk.max));
    Ok(())
}
