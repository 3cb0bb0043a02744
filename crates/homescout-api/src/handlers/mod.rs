mod health;
mod insights;
mod listings;
mod options;
mod predict;

pub use health::health_check;
pub use insights::{get_insights, list_searches};
pub use listings::get_listings;
pub use options::get_options;
pub use predict::handle_predict;
