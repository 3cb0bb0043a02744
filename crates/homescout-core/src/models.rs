pub mod listing;
pub mod price;
pub mod query;
pub mod search;

pub use listing::ListingLink;
pub use price::{PriceEstimate, LAKH};
pub use query::{HouseType, PropertyQuery, AREA_RANGE, BHK_RANGE};
pub use search::{SearchId, SearchLogEntry, SearchRecord};
