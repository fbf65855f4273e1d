use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Per-channel review counts, keys in first-seen order. Serialized as a
/// JSON object so the key order of the original API is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelBreakdown {
    entries: Vec<(String, u64)>,
}

impl ChannelBreakdown {
    pub fn bump(&mut self, channel: &str) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(name, _)| name == channel) {
            *count += 1;
        } else {
            self.entries.push((channel.to_string(), 1));
        }
    }

    pub fn get(&self, channel: &str) -> u64 {
        self.entries
            .iter()
            .find(|(name, _)| name == channel)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ChannelBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// Rollup for a single listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyStats {
    pub total_reviews: u64,
    pub average_rating: f64,
    pub approved: u64,
}

/// Per-listing rollups, keys in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPerformance {
    entries: Vec<(String, PropertyStats)>,
}

impl PropertyPerformance {
    /// Stats slot for a listing, inserted zeroed on first sight.
    pub fn entry_mut(&mut self, listing: &str) -> &mut PropertyStats {
        if let Some(idx) = self.entries.iter().position(|(name, _)| name == listing) {
            return &mut self.entries[idx].1;
        }
        self.entries.push((listing.to_string(), PropertyStats::default()));
        let last = self.entries.len() - 1;
        &mut self.entries[last].1
    }

    pub fn get(&self, listing: &str) -> Option<&PropertyStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == listing)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PropertyPerformance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stats) in &self.entries {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Summary statistics over a store snapshot.
///
/// `rating_distribution` always carries all five keys 1..=5, zeroed when
/// empty. A review whose rounded rating falls outside 1..=5 (e.g. 0 from
/// an empty category list) is counted in `total_reviews` but does not
/// appear in the distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_reviews: u64,
    pub average_rating: f64,
    pub approved_reviews: u64,
    pub pending_reviews: u64,
    pub rating_distribution: BTreeMap<u8, u64>,
    pub channel_breakdown: ChannelBreakdown,
    pub property_performance: PropertyPerformance,
}

impl Analytics {
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            approved_reviews: 0,
            pending_reviews: 0,
            rating_distribution: (1..=5).map(|bucket| (bucket, 0)).collect(),
            channel_breakdown: ChannelBreakdown::default(),
            property_performance: PropertyPerformance::default(),
        }
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_breakdown_preserves_first_seen_order() {
        let mut breakdown = ChannelBreakdown::default();
        breakdown.bump("Airbnb");
        breakdown.bump("Booking.com");
        breakdown.bump("Airbnb");
        let keys: Vec<&str> = breakdown.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["Airbnb", "Booking.com"]);
        assert_eq!(breakdown.get("Airbnb"), 2);
        assert_eq!(breakdown.get("Expedia"), 0);

        let json = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(json, r#"{"Airbnb":2,"Booking.com":1}"#);
    }

    #[test]
    fn empty_analytics_has_zeroed_buckets() {
        let analytics = Analytics::empty();
        assert_eq!(analytics.rating_distribution.len(), 5);
        assert_eq!(analytics.rating_distribution[&5], 0);
        assert_eq!(analytics.average_rating, 0.0);
    }

    #[test]
    fn property_performance_serializes_as_object() {
        let mut perf = PropertyPerformance::default();
        let stats = perf.entry_mut("Studio E1");
        stats.total_reviews = 2;
        stats.average_rating = 4.5;
        stats.approved = 1;
        let json = serde_json::to_value(&perf).unwrap();
        assert_eq!(json["Studio E1"]["totalReviews"], 2);
        assert_eq!(json["Studio E1"]["averageRating"], 4.5);
    }
}
