//! Static name tables
//!
//! World Bank publishes countries under official names ("Korea, Rep.",
//! "Viet Nam") that few people type. Two fixed tables bridge the gap:
//! aliases map colloquial input to canonical names for lookup, and display
//! names map canonical names to what a reader expects to see.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Colloquial name → canonical name, both lowercase
///
/// Registration order matters when two entries share an alias: the first one
/// wins (see [`NameIndex::build`](crate::NameIndex::build)).
pub static ALIASES: &[(&str, &str)] = &[
    // United States
    ("us", "united states"),
    ("usa", "united states"),
    ("america", "united states"),
    ("united states of america", "united states"),
    // United Kingdom
    ("uk", "united kingdom"),
    ("britain", "united kingdom"),
    ("great britain", "united kingdom"),
    ("england", "united kingdom"),
    // Korea
    ("south korea", "korea, rep."),
    ("korea", "korea, rep."),
    // Netherlands
    ("the netherlands", "netherlands"),
    ("holland", "netherlands"),
    // Renamed or commonly shortened
    ("ivory coast", "cote d'ivoire"),
    ("burma", "myanmar"),
    ("east timor", "timor-leste"),
    ("cape verde", "cabo verde"),
    ("swaziland", "eswatini"),
    ("democratic republic of the congo", "congo, dem. rep."),
    ("drc", "congo, dem. rep."),
    ("dr congo", "congo, dem. rep."),
    ("congo-kinshasa", "congo, dem. rep."),
    ("republic of the congo", "congo, rep."),
    ("congo", "congo, rep."),
    ("congo-brazzaville", "congo, rep."),
    ("russia", "russian federation"),
    ("vietnam", "viet nam"),
    ("iran", "iran, islamic rep."),
    ("syria", "syrian arab republic"),
    ("venezuela", "venezuela, rb"),
    ("egypt", "egypt, arab rep."),
    ("laos", "lao pdr"),
    ("slovakia", "slovak republic"),
    ("czechia", "czech republic"),
    ("turkey", "turkiye"),
    ("uae", "united arab emirates"),
    ("hong kong", "hong kong sar, china"),
    ("gambia", "gambia, the"),
    ("bahamas", "bahamas, the"),
    ("kyrgyzstan", "kyrgyz republic"),
    ("saint lucia", "st. lucia"),
    ("saint kitts and nevis", "st. kitts and nevis"),
    ("saint vincent and the grenadines", "st. vincent and the grenadines"),
    ("micronesia", "micronesia, fed. sts."),
];

// Official statistical-body name -> common display name
static DISPLAY_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("Hong Kong SAR, China", "Hong Kong"),
        ("Viet Nam", "Vietnam"),
        ("Korea, Rep.", "South Korea"),
        ("Korea, Dem. People's Rep.", "North Korea"),
        ("Iran, Islamic Rep.", "Iran"),
        ("Egypt, Arab Rep.", "Egypt"),
        ("Yemen, Rep.", "Yemen"),
        ("Syrian Arab Republic", "Syria"),
        ("Venezuela, RB", "Venezuela"),
        ("Russian Federation", "Russia"),
        ("Czech Republic", "Czechia"),
        ("Slovak Republic", "Slovakia"),
        ("Lao PDR", "Laos"),
        ("Kyrgyz Republic", "Kyrgyzstan"),
        ("Turkiye", "Turkey"),
        ("Gambia, The", "Gambia"),
        ("Bahamas, The", "Bahamas"),
        ("Congo, Rep.", "Congo"),
        ("Congo, Dem. Rep.", "DR Congo"),
        ("Micronesia, Fed. Sts.", "Micronesia"),
        ("St. Lucia", "Saint Lucia"),
        ("St. Kitts and Nevis", "Saint Kitts and Nevis"),
        ("St. Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ];
    pairs.iter().copied().collect()
});

/// Common name for a canonical name, or the canonical name itself
///
/// Matching is exact (case-sensitive), since canonical names come straight
/// from the dataset.
pub fn display_name(canonical: &str) -> &str {
    DISPLAY_NAMES.get(canonical).copied().unwrap_or(canonical)
}
