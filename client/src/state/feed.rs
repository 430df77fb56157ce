//! Feed page tab and filter state.
//!
//! DESIGN
//! ======
//! Purely presentational. Nothing here queries data; the feed list renders
//! empty whatever the filters say.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

pub const MIN_RADIUS_KM: u32 = 1;
pub const MAX_RADIUS_KM: u32 = 50;
pub const DEFAULT_RADIUS_KM: u32 = 5;

/// Feed ordering / scope tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedTab {
    #[default]
    Latest,
    Nearby,
    Following,
}

impl FeedTab {
    pub const ALL: [Self; 3] = [Self::Latest, Self::Nearby, Self::Following];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Nearby => "Nearby",
            Self::Following => "Following",
        }
    }
}

/// Filter panel values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedFilters {
    pub radius_km: u32,
    pub tags: Vec<String>,
    pub keywords: String,
}

impl Default for FeedFilters {
    fn default() -> Self {
        Self { radius_km: DEFAULT_RADIUS_KM, tags: Vec::new(), keywords: String::new() }
    }
}

impl FeedFilters {
    /// `true` when any filter differs from its default.
    #[must_use]
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    pub tab: FeedTab,
    pub filters_open: bool,
    pub filters: FeedFilters,
}

impl FeedState {
    pub fn select_tab(&mut self, tab: FeedTab) {
        self.tab = tab;
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    pub fn set_radius(&mut self, radius_km: u32) {
        self.filters.radius_km = radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
    }

    /// Add a tag. Blank and duplicate tags are ignored. Returns `true` if added.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim().trim_start_matches('#').trim().to_lowercase();
        if tag.is_empty() || self.filters.tags.contains(&tag) {
            return false;
        }
        self.filters.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.filters.tags.retain(|t| t != tag);
    }

    pub fn set_keywords(&mut self, keywords: &str) {
        self.filters.keywords = keywords.trim().to_owned();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FeedFilters::default();
    }
}

/// Parse a radius typed into a range/number input, clamped to the allowed
/// range. Unparseable input yields `None`.
#[must_use]
pub fn parse_radius(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = value.round().clamp(f64::from(MIN_RADIUS_KM), f64::from(MAX_RADIUS_KM)) as u32;
    Some(rounded)
}
