//! Host-dependent site flavor

/// Which of the two sibling sites a request is for
///
/// Only the page copy changes; lookups and comparisons are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteMode {
    /// biggerthancali.* and anything unrecognized
    #[default]
    Bigger,
    /// Hosts containing the "smaller" marker
    Smaller,
}

impl SiteMode {
    /// Pick the mode for a `Host` header value
    ///
    /// Matching is case-insensitive; an empty marker never matches.
    pub fn from_host(host: &str, smaller_marker: &str) -> Self {
        if !smaller_marker.is_empty()
            && host
                .to_ascii_lowercase()
                .contains(&smaller_marker.to_ascii_lowercase())
        {
            SiteMode::Smaller
        } else {
            SiteMode::Bigger
        }
    }

    /// Site name shown in titles and headings
    pub fn site_name(&self) -> &'static str {
        match self {
            SiteMode::Bigger => "Bigger Than Cali",
            SiteMode::Smaller => "Smaller Than Cali",
        }
    }
}
