//! Outbound search links to third-party listing sites
//!
//! Links are built by templating only. Nothing here fetches or checks them.

use url::form_urlencoded;

use crate::models::ListingLink;

/// Values substituted into a provider's URL template
#[derive(Debug, Clone)]
pub struct SearchTerms {
    /// Lower-cased, hyphenated and percent-encoded location
    pub slug: String,
    pub bhk: u32,
}

impl SearchTerms {
    pub fn new(location: &str, bhk: u32) -> Self {
        Self {
            slug: location_slug(location),
            bhk,
        }
    }
}

/// One listing site and how to build its search URL
#[derive(Clone, Copy)]
pub struct ListingProvider {
    pub name: &'static str,
    pub build_url: fn(&SearchTerms) -> String,
}

impl std::fmt::Debug for ListingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingProvider").field("name", &self.name).finish()
    }
}

/// Listing sites, in display order
pub const PROVIDERS: [ListingProvider; 5] = [
    ListingProvider {
        name: "99acres",
        build_url: |t| {
            format!(
                "https://www.99acres.com/property-for-sale-in-{}-pune-ffid?bedroom={}",
                t.slug, t.bhk
            )
        },
    },
    ListingProvider {
        name: "MagicBricks",
        build_url: |t| {
            format!(
                "https://www.magicbricks.com/property-for-sale/residential-real-estate?bedroom={}&cityName=Pune&localityName={}",
                t.bhk, t.slug
            )
        },
    },
    ListingProvider {
        name: "Housing.com",
        build_url: |t| format!("https://housing.com/in/buy/pune/{}?BHK={}", t.slug, t.bhk),
    },
    ListingProvider {
        name: "NoBroker",
        build_url: |t| {
            format!(
                "https://www.nobroker.in/property/sale/pune/multiple?search_type=city&city=pune&locality={}&type={}_BHK",
                t.slug, t.bhk
            )
        },
    },
    ListingProvider {
        name: "PropertyWala",
        build_url: |t| {
            format!("https://www.propertywala.com/properties/for-sale/in-{}-pune", t.slug)
        },
    },
];

/// Builds listing links from a provider table
#[derive(Debug, Clone)]
pub struct LinkGenerator {
    providers: Vec<ListingProvider>,
}

impl Default for LinkGenerator {
    fn default() -> Self {
        Self::new(PROVIDERS.to_vec())
    }
}

impl LinkGenerator {
    pub fn new(providers: Vec<ListingProvider>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[ListingProvider] {
        &self.providers
    }

    /// One link per provider, in provider order
    pub fn generate(&self, location: &str, bhk: u32) -> Vec<ListingLink> {
        let terms = SearchTerms::new(location, bhk);
        let caption = format!("Search for {} BHK in {}", bhk, location.trim());

        self.providers
            .iter()
            .map(|provider| ListingLink {
                site_name: provider.name.to_string(),
                url: (provider.build_url)(&terms),
                caption: caption.clone(),
            })
            .collect()
    }
}

/// Links for the default providers
pub fn generate_links(location: &str, bhk: u32) -> Vec<ListingLink> {
    LinkGenerator::default().generate(location, bhk)
}

/// "Koregaon Park" -> "koregaon-park"
pub fn location_slug(location: &str) -> String {
    let hyphenated = location
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    form_urlencoded::byte_serialize(hyphenated.as_bytes()).collect()
}
