use crate::cli::ListingsArgs;
use crate::output::OutputWriter;
use crate::output_types::ListingRow;
use anyhow::{bail, Result};
use homescout_core::listings::generate_links;
use homescout_core::models::BHK_RANGE;

pub fn execute(args: ListingsArgs, output: &OutputWriter) -> Result<()> {
    if args.location.trim().is_empty() {
        bail!("Location cannot be empty");
    }
    if !BHK_RANGE.contains(&args.bhk) {
        bail!("BHK must be between {} and {}", BHK_RANGE.start(), BHK_RANGE.end());
    }

    let links = generate_links(&args.location, args.bhk);

    if output.is_json() {
        return output.result(links);
    }

    output.section(format!("Listings for {} BHK in {}", args.bhk, args.location.trim()));
    output.table(links.iter().map(ListingRow::from).collect());
    Ok(())
}
