//! Static lookup tables for Kenya's generation mix
//!
//! All tables are immutable and built once at startup (`MixTables::kenya`),
//! then handed to the normalizer by reference.

/// Raw API source code to display name
#[derive(Debug, Clone, Copy)]
pub struct SourceMapping {
    entries: &'static [(&'static str, &'static str)],
}

/// Baseline mix used whenever live data is unavailable: display name to
/// percentage share, in presentation order
#[derive(Debug, Clone, Copy)]
pub struct FallbackTable {
    entries: &'static [(&'static str, f64)],
}

/// Display names counted towards the renewable share
#[derive(Debug, Clone, Copy)]
pub struct RenewableSet {
    names: &'static [&'static str],
}

/// Everything the normalizer needs besides the fetch result
#[derive(Debug, Clone, Copy)]
pub struct MixTables {
    pub source_names: SourceMapping,
    pub fallback: FallbackTable,
    pub renewables: RenewableSet,
    /// Nameplate capacity the fallback percentages are scaled against
    pub assumed_total_capacity_mw: f64,
}

/// Kenya's installed capacity used to turn fallback shares into MW
pub const ASSUMED_TOTAL_CAPACITY_MW: f64 = 2800.0;

const SOURCE_NAMES: &[(&str, &str)] = &[
    ("hydro", "Hydro"),
    ("geothermal", "Geothermal"),
    ("oil", "Thermal (Oil)"),
    ("gas", "Natural Gas"),
    ("wind", "Wind"),
    ("solar", "Solar"),
    ("biomass", "Biomass"),
    ("battery", "Battery Storage"),
    ("coal", "Coal"),
    ("nuclear", "Nuclear"),
    ("unknown", "Other"),
];

// Based on recent KPLC / Ministry of Energy reports; sums to 100
const KENYA_ENERGY_MIX: &[(&str, f64)] = &[
    ("Hydro", 36.2),
    ("Geothermal", 31.1),
    ("Thermal (Oil/Gas)", 12.7),
    ("Wind", 8.9),
    ("Solar", 6.8),
    ("Biomass", 2.1),
    ("Battery Storage", 1.2),
    ("Imports", 1.0),
];

const RENEWABLE_SOURCES: &[&str] = &["Hydro", "Geothermal", "Wind", "Solar", "Biomass"];

impl SourceMapping {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Display name for a raw code; unmapped codes are title-cased
    pub fn display_name(&self, code: &str) -> String {
        self.entries
            .iter()
            .find(|(raw, _)| *raw == code)
            .map(|(_, name)| (*name).to_string())
            .unwrap_or_else(|| title_case(code))
    }
}

impl FallbackTable {
    pub const fn new(entries: &'static [(&'static str, f64)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|(_, pct)| pct).sum()
    }
}

impl RenewableSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn contains(&self, source: &str) -> bool {
        self.names.contains(&source)
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

impl MixTables {
    pub const fn kenya() -> Self {
        Self {
            source_names: SourceMapping::new(SOURCE_NAMES),
            fallback: FallbackTable::new(KENYA_ENERGY_MIX),
            renewables: RenewableSet::new(RENEWABLE_SOURCES),
            assumed_total_capacity_mw: ASSUMED_TOTAL_CAPACITY_MW,
        }
    }
}

impl Default for MixTables {
    fn default() -> Self {
        Self::kenya()
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
/// ("tidal" -> "Tidal", "hydro discharge" -> "Hydro Discharge")
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
