use serde::{Deserialize, Serialize};

/// Outbound search link to a third-party listing site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLink {
    pub site_name: String,
    pub url: String,
    /// Caption shown under the site name, e.g. "Search for 2 BHK in Wakad"
    pub caption: String,
}
