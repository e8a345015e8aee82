//! Static background data shown around the live mix
//!
//! Illustrative, hand-maintained figures for Kenya's power sector. None of
//! this is fetched; it is served as-is next to the snapshot.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelinePoint {
    pub year: u16,
    pub renewable_pct: f64,
    pub capacity_mw: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegionComparison {
    pub region: &'static str,
    pub renewable_share_pct: f64,
    pub access_rate_pct: f64,
}

/// Installed base and context for one technology
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourceProfile {
    pub source: &'static str,
    pub capacity: &'static str,
    pub key_plants: &'static str,
    pub challenge: &'static str,
    pub advantage: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourceColor {
    pub source: &'static str,
    pub color: &'static str,
}

/// One bullet of the sector overview
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectorNote {
    pub topic: &'static str,
    pub note: &'static str,
}

/// Body of `GET /api/insights`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Insights {
    pub key_facts: &'static [&'static str],
    pub sector_overview: &'static [SectorNote],
    pub timeline: &'static [TimelinePoint],
    pub regional_comparison: &'static [RegionComparison],
    pub source_profiles: &'static [SourceProfile],
    pub future_projects: &'static [&'static str],
    pub palette: &'static [SourceColor],
}

pub const KEY_FACTS: &[&str] = &[
    "Over 90% of Kenya's electricity comes from renewable sources",
    "World's 8th largest geothermal producer",
    "Abundant hydro resources from rivers and dams",
    "Rapidly growing solar sector with excellent solar irradiation",
    "Strong wind resources, especially around Lake Turkana",
    "Target: 100% renewable electricity by 2030",
];

pub const RENEWABLE_TIMELINE: &[TimelinePoint] = &[
    TimelinePoint {
        year: 2014,
        renewable_pct: 68.0,
        capacity_mw: 2000.0,
    },
    TimelinePoint {
        year: 2016,
        renewable_pct: 75.0,
        capacity_mw: 2300.0,
    },
    TimelinePoint {
        year: 2018,
        renewable_pct: 83.0,
        capacity_mw: 2700.0,
    },
    TimelinePoint {
        year: 2020,
        renewable_pct: 87.0,
        capacity_mw: 2900.0,
    },
    TimelinePoint {
        year: 2022,
        renewable_pct: 92.0,
        capacity_mw: 3100.0,
    },
    TimelinePoint {
        year: 2024,
        renewable_pct: 95.0,
        capacity_mw: 3300.0,
    },
];

pub const REGIONAL_COMPARISON: &[RegionComparison] = &[
    RegionComparison {
        region: "Kenya",
        renewable_share_pct: 92.0,
        access_rate_pct: 75.0,
    },
    RegionComparison {
        region: "East Africa Avg",
        renewable_share_pct: 65.0,
        access_rate_pct: 45.0,
    },
    RegionComparison {
        region: "Sub-Saharan Africa",
        renewable_share_pct: 45.0,
        access_rate_pct: 48.0,
    },
    RegionComparison {
        region: "Global Average",
        renewable_share_pct: 29.0,
        access_rate_pct: 90.0,
    },
];

pub const SOURCE_PROFILES: &[SourceProfile] = &[
    SourceProfile {
        source: "Hydro",
        capacity: "826 MW",
        key_plants: "Seven Forks Cascade, Turkwel, Sondu Miriu",
        challenge: "Seasonal rainfall dependency",
        advantage: "Reliable baseload power",
    },
    SourceProfile {
        source: "Geothermal",
        capacity: "863 MW",
        key_plants: "Olkaria I-VI, Eburru",
        challenge: "High upfront investment",
        advantage: "24/7 reliable clean energy",
    },
    SourceProfile {
        source: "Wind",
        capacity: "436 MW",
        key_plants: "Lake Turkana Wind Power (310 MW)",
        challenge: "Transmission to population centers",
        advantage: "Excellent wind speeds (8-11 m/s)",
    },
    SourceProfile {
        source: "Solar",
        capacity: "173 MW",
        key_plants: "Garissa Solar (50 MW), Eldosol (40 MW)",
        challenge: "Grid stability and storage",
        advantage: "Abundant sunshine year-round",
    },
];

pub const SECTOR_OVERVIEW: &[SectorNote] = &[
    SectorNote {
        topic: "Geothermal Energy",
        note: "The Rift Valley contains some of the world's best geothermal resources",
    },
    SectorNote {
        topic: "Hydro Power",
        note: "Multiple dam systems provide consistent clean energy",
    },
    SectorNote {
        topic: "Wind Power",
        note: "Lake Turkana hosts Africa's largest wind farm (310 MW)",
    },
    SectorNote {
        topic: "Solar Potential",
        note: "Excellent solar irradiation levels across the country",
    },
];

pub const FUTURE_PROJECTS: &[&str] = &[
    "Additional geothermal plants in the Rift Valley",
    "More wind farms in northern Kenya",
    "Distributed solar systems and mini-grids",
    "Regional power trading with neighboring countries",
];

pub const SOURCE_PALETTE: &[SourceColor] = &[
    SourceColor {
        source: "Hydro",
        color: "#1f77b4",
    },
    SourceColor {
        source: "Geothermal",
        color: "#ff7f0e",
    },
    SourceColor {
        source: "Thermal (Oil/Gas)",
        color: "#d62728",
    },
    SourceColor {
        source: "Thermal (Oil)",
        color: "#d62728",
    },
    SourceColor {
        source: "Natural Gas",
        color: "#ff6b6b",
    },
    SourceColor {
        source: "Wind",
        color: "#2ca02c",
    },
    SourceColor {
        source: "Solar",
        color: "#ffbb33",
    },
    SourceColor {
        source: "Biomass",
        color: "#8c564b",
    },
    SourceColor {
        source: "Battery Storage",
        color: "#9467bd",
    },
    SourceColor {
        source: "Imports",
        color: "#17becf",
    },
    SourceColor {
        source: "Other",
        color: "#bcbd22",
    },
];

pub fn insights() -> Insights {
    Insights {
        key_facts: KEY_FACTS,
        sector_overview: SECTOR_OVERVIEW,
        timeline: RENEWABLE_TIMELINE,
        regional_comparison: REGIONAL_COMPARISON,
        source_profiles: SOURCE_PROFILES,
        future_projects: FUTURE_PROJECTS,
        palette: SOURCE_PALETTE,
    }
}

/// Chart colour for a display name, if one is assigned
pub fn color_for(source: &str) -> Option<&'static str> {
    SOURCE_PALETTE
        .iter()
        .find(|c| c.source == source)
        .map(|c| c.color)
}
