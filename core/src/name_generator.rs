//! Deterministic worker, subcontractor and region names for demo rosters.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::DemoRng;

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically
    pub fn generate_full_name(rng: &mut DemoRng) -> String {
        let first_name = Self::pick(rng, Self::first_names());
        let last_name = Self::pick(rng, Self::last_names());
        format!("{} {}", first_name, last_name)
    }

    /// Generate a trade business name for a subcontractor
    pub fn generate_subcontractor_name(rng: &mut DemoRng) -> String {
        // Format: "Prefix Trade Suffix" or "LastName Trade Suffix"
        let trade = Self::pick(rng, Self::trades());
        let suffix = Self::pick(rng, Self::business_suffixes());
        if rng.chance(0.5) {
            format!("{} {} {}", Self::pick(rng, Self::business_prefixes()), trade, suffix)
        } else {
            format!("{} {} {}", Self::pick(rng, Self::last_names()), trade, suffix)
        }
    }

    /// Pick a region/state tag
    pub fn generate_region(rng: &mut DemoRng) -> &'static str {
        Self::pick(rng, Self::regions())
    }

    pub fn regions() -> &'static [&'static str] {
        &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"]
    }

    fn pick(rng: &mut DemoRng, names: &'static [&'static str]) -> &'static str {
        rng.pick(names).copied().unwrap_or("")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Daniel", "Matthew",
            "Anthony", "Andrew", "Joshua", "Kevin", "Ryan", "Jacob", "Nathan", "Adam",
            "Noah", "Ethan", "Liam", "Jack", "Oliver", "Lucas", "Samuel", "Zara",
            "Mary", "Jennifer", "Linda", "Elizabeth", "Sarah", "Jessica", "Emily", "Amanda",
            "Rebecca", "Laura", "Chloe", "Hannah", "Grace", "Olivia", "Charlotte", "Mia",
            "Ava", "Isla", "Ruby", "Priya", "Mei", "Aisha", "Sofia", "Leah",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Johnson", "White",
            "Martin", "Anderson", "Thompson", "Nguyen", "Thomas", "Walker", "Harris", "Lee",
            "Ryan", "Robinson", "Kelly", "King", "Davis", "Wright", "Evans", "Roberts",
            "Green", "Hall", "Wood", "Jackson", "Clarke", "Patel", "Chen", "Singh",
            "Murphy", "Mitchell", "Campbell", "Young", "Edwards", "Hughes", "Turner", "Walsh",
        ]
    }

    fn business_prefixes() -> &'static [&'static str] {
        &[
            "Premier", "Reliable", "Trusted", "Precision", "Metro", "Coastal",
            "Valley", "Central", "United", "Prime", "Southern", "Northside",
        ]
    }

    fn trades() -> &'static [&'static str] {
        &[
            "Plumbing", "Electrical", "Air Conditioning", "Roofing", "Fencing",
            "Landscaping", "Pest Control", "Solar", "Glazing", "Tiling",
        ]
    }

    fn business_suffixes() -> &'static [&'static str] {
        &["Pty Ltd", "Services", "Group", "Co", "Contracting", "Solutions"]
    }
}
