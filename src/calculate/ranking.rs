//! Per-map brawler ranking.
//!
//! The pipeline for one map:
//! 1. keep the map's records (exact, case-sensitive match)
//! 2. one record per brawler: the one with the highest pick rate
//! 3. rank by pick rate, highest first, ties in input order
//! 4. split off the top `top_size` entries
//! 5. filter the rest by brawler type
//! 6. sort the rest alphabetically or by pick rate
//!
//! The top set never depends on the type filter or sort mode.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collate::locale_compare;
use crate::loader::TypeIndex;
use crate::models::{BrawlerStatRecord, BrawlerType};

/// Number of brawlers shown in the top set.
pub const DEFAULT_TOP_SIZE: usize = 15;

/// How the remaining (non-top) brawlers are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Pick rate, highest first
    #[default]
    Pick,
    /// Brawler name, alphabetical
    Alpha,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pick" => Ok(SortMode::Pick),
            "alpha" => Ok(SortMode::Alpha),
            other => Err(format!(
                "unknown sort mode '{}' (expected 'pick' or 'alpha')",
                other
            )),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Pick => write!(f, "pick"),
            SortMode::Alpha => write!(f, "alpha"),
        }
    }
}

/// Type restriction applied to the remaining brawlers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(BrawlerType),
}

impl TypeFilter {
    /// Whether `brawler` passes the filter. Brawlers without a known
    /// type only pass `All`.
    pub fn admits(&self, types: &TypeIndex, brawler: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => types.get(brawler) == Some(wanted),
        }
    }
}

impl From<&str> for TypeFilter {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            TypeFilter::Only(BrawlerType::new(s))
        }
    }
}

impl From<String> for TypeFilter {
    fn from(s: String) -> Self {
        TypeFilter::from(s.as_str())
    }
}

impl From<TypeFilter> for String {
    fn from(f: TypeFilter) -> Self {
        f.to_string()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Only(t) => write!(f, "{}", t),
        }
    }
}

/// What to rank: the map plus the user's list controls.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingQuery {
    pub map: String,
    pub filter: TypeFilter,
    pub sort: SortMode,
    pub top_size: usize,
}

impl RankingQuery {
    pub fn new(map: impl Into<String>) -> Self {
        Self {
            map: map.into(),
            filter: TypeFilter::All,
            sort: SortMode::Pick,
            top_size: DEFAULT_TOP_SIZE,
        }
    }

    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_top_size(mut self, top_size: usize) -> Self {
        self.top_size = top_size;
        self
    }
}

/// A brawler's kept record, with its resolved type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBrawler {
    pub brawler: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub brawler_type: Option<BrawlerType>,
}

impl RankedBrawler {
    pub fn from_record(record: &BrawlerStatRecord, types: &TypeIndex) -> Self {
        Self {
            brawler: record.brawler.clone(),
            pick_rate: record.pick_rate,
            win_rate: record.win_rate,
            brawler_type: types.get(&record.brawler).cloned(),
        }
    }
}

/// Ranking result for one map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedView {
    pub map: String,
    pub top: Vec<RankedBrawler>,
    pub remaining: Vec<RankedBrawler>,
}

/// Descending pick rate. `-0.0` and `0.0` compare equal so ties keep
/// their input order; rates are validated finite at load.
fn by_pick_rate_desc(a: &BrawlerStatRecord, b: &BrawlerStatRecord) -> Ordering {
    b.pick_rate
        .partial_cmp(&a.pick_rate)
        .unwrap_or(Ordering::Equal)
}

/// Records measured on `map`.
pub fn filter_by_map<'a>(stats: &'a [BrawlerStatRecord], map: &str) -> Vec<&'a BrawlerStatRecord> {
    stats.iter().filter(|r| r.map == map).collect()
}

/// One record per brawler name: the one with the strictly highest pick rate.
///
/// Ties keep the earlier record. Brawlers come out in first-seen order.
pub fn dedup_by_max_pick_rate<'a, I>(records: I) -> Vec<&'a BrawlerStatRecord>
where
    I: IntoIterator<Item = &'a BrawlerStatRecord>,
{
    let mut slot_of: HashMap<&'a str, usize> = HashMap::new();
    let mut kept: Vec<&'a BrawlerStatRecord> = Vec::new();

    for record in records {
        match slot_of.get(record.brawler.as_str()) {
            Some(&slot) => {
                if record.pick_rate > kept[slot].pick_rate {
                    kept[slot] = record;
                }
            }
            None => {
                slot_of.insert(record.brawler.as_str(), kept.len());
                kept.push(record);
            }
        }
    }

    kept
}

/// Stable sort by pick rate, highest first.
pub fn rank_by_pick_rate(mut records: Vec<&BrawlerStatRecord>) -> Vec<&BrawlerStatRecord> {
    records.sort_by(|a, b| by_pick_rate_desc(a, b));
    records
}

/// Split a ranked list into the first `top_size` entries and the rest.
pub fn partition_top<T>(mut ranked: Vec<T>, top_size: usize) -> (Vec<T>, Vec<T>) {
    let remaining = ranked.split_off(top_size.min(ranked.len()));
    (ranked, remaining)
}

/// Keep the records whose brawler passes `filter`.
pub fn filter_by_type<'a>(
    records: Vec<&'a BrawlerStatRecord>,
    filter: &TypeFilter,
    types: &TypeIndex,
) -> Vec<&'a BrawlerStatRecord> {
    records
        .into_iter()
        .filter(|r| filter.admits(types, &r.brawler))
        .collect()
}

/// Reorder records in place for display. Both orders are stable.
pub fn sort_records(records: &mut [&BrawlerStatRecord], sort: SortMode) {
    match sort {
        SortMode::Alpha => records.sort_by(|a, b| locale_compare(&a.brawler, &b.brawler)),
        SortMode::Pick => records.sort_by(|a, b| by_pick_rate_desc(a, b)),
    }
}

/// Run the full ranking pipeline for one map.
pub fn rank_map(stats: &[BrawlerStatRecord], types: &TypeIndex, query: &RankingQuery) -> RankedView {
    let on_map = filter_by_map(stats, &query.map);
    let ranked = rank_by_pick_rate(dedup_by_max_pick_rate(on_map));
    let (top, remaining) = partition_top(ranked, query.top_size);

    let mut remaining = filter_by_type(remaining, &query.filter, types);
    sort_records(&mut remaining, query.sort);

    RankedView {
        map: query.map.clone(),
        top: top
            .into_iter()
            .map(|r| RankedBrawler::from_record(r, types))
            .collect(),
        remaining: remaining
            .into_iter()
            .map(|r| RankedBrawler::from_record(r, types))
            .collect(),
    }
}

/// Every record of `map`, without dedup, highest pick rate first.
pub fn map_overview(stats: &[BrawlerStatRecord], types: &TypeIndex, map: &str) -> Vec<RankedBrawler> {
    rank_by_pick_rate(filter_by_map(stats, map))
        .into_iter()
        .map(|r| RankedBrawler::from_record(r, types))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BrawlerTypeEntry;
    use pretty_assertions::assert_eq;

    fn rec(brawler: &str, map: &str, pick: f64, win: f64) -> BrawlerStatRecord {
        BrawlerStatRecord::new(brawler, map, pick, win)
    }

    fn names(list: &[RankedBrawler]) -> Vec<&str> {
        list.iter().map(|b| b.brawler.as_str()).collect()
    }

    fn types() -> TypeIndex {
        TypeIndex::from_entries(&[
            BrawlerTypeEntry::new("Bull", "Tank"),
            BrawlerTypeEntry::new("El Primo", "tank"),
            BrawlerTypeEntry::new("piper", "Sniper"),
            BrawlerTypeEntry::new("Brock", "Sniper"),
            BrawlerTypeEntry::new("Mortis", "Assassin"),
        ])
    }

    /// Twenty distinct brawlers on map "M" with pick rates 0.20, 0.19, ...
    fn twenty_brawlers() -> Vec<BrawlerStatRecord> {
        (0..20)
            .map(|i| rec(&format!("B{:02}", i), "M", 0.20 - i as f64 * 0.01, 0.5))
            .collect()
    }

    #[test]
    fn test_signed_zero_pick_rates_tie() {
        let json = br#"[
            {"Brawler": "A", "Map": "M", "Pick Rate": -0.0, "Win Rate": 0.5},
            {"Brawler": "B", "Map": "M", "Pick Rate": 0.0, "Win Rate": 0.5},
            {"Brawler": "C", "Map": "M", "Pick Rate": -0.0, "Win Rate": 0.5}
        ]"#;
        let stats = crate::loader::parse_stats(json).unwrap();
        assert_eq!(stats.len(), 3);

        let view = rank_map(&stats, &TypeIndex::default(), &RankingQuery::new("M").with_top_size(2));
        assert_eq!(names(&view.top), vec!["A", "B"]);
        assert_eq!(names(&view.remaining), vec!["C"]);

        let mut records: Vec<&BrawlerStatRecord> = stats.iter().rev().collect();
        sort_records(&mut records, SortMode::Pick);
        let sorted: Vec<&str> = records.iter().map(|r| r.brawler.as_str()).collect();
        assert_eq!(sorted, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_dedup_scenario() {
        let stats = vec![
            rec("A", "M", 0.5, 0.3),
            rec("A", "M", 0.7, 0.2),
            rec("B", "M", 0.6, 0.4),
        ];
        let view = rank_map(&stats, &TypeIndex::default(), &RankingQuery::new("M").with_top_size(1));

        assert_eq!(names(&view.top), vec!["A"]);
        assert_eq!(names(&view.remaining), vec!["B"]);
        assert_eq!(view.top[0].pick_rate, 0.7);
        assert_eq!(view.top[0].win_rate, 0.2);
        assert_eq!(view.remaining[0].win_rate, 0.4);
    }

    #[test]
    fn test_dedup_keeps_max_and_first_on_tie() {
        let stats = vec![
            rec("A", "M", 0.3, 0.1),
            rec("A", "M", 0.3, 0.9),
            rec("A", "M", 0.2, 0.5),
        ];
        let kept = dedup_by_max_pick_rate(&stats);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].win_rate, 0.1);
    }

    #[test]
    fn test_dedup_is_exact_name_match() {
        let stats = vec![rec("Bull", "M", 0.3, 0.5), rec("bull", "M", 0.4, 0.5)];
        assert_eq!(dedup_by_max_pick_rate(&stats).len(), 2);
    }

    #[test]
    fn test_filter_by_map_case_sensitive() {
        let stats = vec![rec("A", "gem_grab_X", 0.3, 0.5), rec("B", "Gem_Grab_X", 0.3, 0.5)];
        let on_map = filter_by_map(&stats, "gem_grab_X");
        assert_eq!(on_map.len(), 1);
        assert_eq!(on_map[0].brawler, "A");
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let stats = vec![
            rec("C", "M", 0.1, 0.5),
            rec("A", "M", 0.3, 0.5),
            rec("B", "M", 0.3, 0.5),
        ];
        let ranked = rank_by_pick_rate(stats.iter().collect());
        let order: Vec<&str> = ranked.iter().map(|r| r.brawler.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_top_size_is_min_of_cap_and_distinct() {
        let stats = twenty_brawlers();
        let view = rank_map(&stats, &TypeIndex::default(), &RankingQuery::new("M"));
        assert_eq!(view.top.len(), 15);
        assert_eq!(view.remaining.len(), 5);

        let few: Vec<BrawlerStatRecord> = stats.into_iter().take(4).collect();
        let view = rank_map(&few, &TypeIndex::default(), &RankingQuery::new("M"));
        assert_eq!(view.top.len(), 4);
        assert!(view.remaining.is_empty());
    }

    #[test]
    fn test_partition_is_exact() {
        let mut stats = twenty_brawlers();
        // Duplicate rows for some brawlers on the same map
        stats.push(rec("B03", "M", 0.01, 0.5));
        stats.push(rec("B18", "M", 0.50, 0.5));
        stats.push(rec("Other", "N", 0.99, 0.5));

        let view = rank_map(&stats, &TypeIndex::default(), &RankingQuery::new("M"));
        let mut all: Vec<&str> = names(&view.top);
        all.extend(names(&view.remaining));
        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(all.len(), 20);
        assert_eq!(sorted.len(), 20);
        assert!(!all.contains(&"Other"));
        // B18's second row raised it to the top
        assert_eq!(view.top[0].brawler, "B18");
        assert_eq!(view.top[0].pick_rate, 0.50);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let mut stats = twenty_brawlers();
        stats.push(rec("Tie1", "M", 0.05, 0.5));
        stats.push(rec("Tie2", "M", 0.05, 0.5));
        let query = RankingQuery::new("M").with_sort(SortMode::Alpha);

        let first = rank_map(&stats, &types(), &query);
        let second = rank_map(&stats, &types(), &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_type_filter_on_remaining_only() {
        let stats = vec![
            rec("Bull", "M", 0.9, 0.5),
            rec("Piper", "M", 0.5, 0.5),
            rec("El Primo", "M", 0.4, 0.5),
            rec("Mortis", "M", 0.3, 0.5),
            rec("Brock", "M", 0.2, 0.5),
            rec("Unknown", "M", 0.1, 0.5),
        ];
        let query = RankingQuery::new("M")
            .with_top_size(1)
            .with_filter(TypeFilter::from("TANK"));
        let view = rank_map(&stats, &types(), &query);

        // Bull is a tank but sits in the top set, which is never filtered
        assert_eq!(names(&view.top), vec!["Bull"]);
        assert_eq!(names(&view.remaining), vec!["El Primo"]);
        for b in &view.remaining {
            assert_eq!(b.brawler_type.as_ref().map(|t| t.as_str()), Some("tank"));
        }
    }

    #[test]
    fn test_type_filter_resolves_case_insensitively() {
        let stats = vec![rec("Top", "M", 0.9, 0.5), rec("PIPER", "M", 0.5, 0.5)];
        let query = RankingQuery::new("M")
            .with_top_size(1)
            .with_filter(TypeFilter::from("sniper"));
        let view = rank_map(&stats, &types(), &query);
        assert_eq!(names(&view.remaining), vec!["PIPER"]);
    }

    #[test]
    fn test_type_filter_no_match_is_empty() {
        let stats = vec![
            rec("Top", "M", 0.9, 0.5),
            rec("Piper", "M", 0.5, 0.5),
            rec("Mortis", "M", 0.3, 0.5),
        ];
        let query = RankingQuery::new("M")
            .with_top_size(1)
            .with_filter(TypeFilter::from("tank"));
        let view = rank_map(&stats, &types(), &query);
        assert!(view.remaining.is_empty());
        assert_eq!(view.top.len(), 1);
    }

    #[test]
    fn test_untyped_brawler_excluded_by_specific_filter() {
        let types = types();
        assert!(TypeFilter::All.admits(&types, "Nobody"));
        assert!(!TypeFilter::from("tank").admits(&types, "Nobody"));
    }

    #[test]
    fn test_alpha_sort_does_not_touch_top() {
        let stats = vec![
            rec("Zed", "M", 0.9, 0.5),
            rec("Yan", "M", 0.8, 0.5),
            rec("crow", "M", 0.3, 0.5),
            rec("Bea", "M", 0.2, 0.5),
            rec("Amber", "M", 0.1, 0.5),
        ];
        let query = RankingQuery::new("M")
            .with_top_size(2)
            .with_sort(SortMode::Alpha);
        let view = rank_map(&stats, &TypeIndex::default(), &query);

        assert_eq!(names(&view.top), vec!["Zed", "Yan"]);
        assert_eq!(names(&view.remaining), vec!["Amber", "Bea", "crow"]);
    }

    #[test]
    fn test_pick_sort_non_increasing() {
        let stats = twenty_brawlers();
        let view = rank_map(&stats, &TypeIndex::default(), &RankingQuery::new("M").with_top_size(3));
        assert!(view
            .remaining
            .windows(2)
            .all(|w| w[0].pick_rate >= w[1].pick_rate));
    }

    #[test]
    fn test_unknown_map_is_empty() {
        let view = rank_map(&twenty_brawlers(), &TypeIndex::default(), &RankingQuery::new("nope"));
        assert!(view.top.is_empty());
        assert!(view.remaining.is_empty());
    }

    #[test]
    fn test_map_overview_keeps_duplicates() {
        let stats = vec![
            rec("A", "M", 0.5, 0.3),
            rec("A", "M", 0.7, 0.2),
            rec("B", "M", 0.6, 0.4),
            rec("C", "N", 0.9, 0.4),
        ];
        let overview = map_overview(&stats, &TypeIndex::default(), "M");
        let picks: Vec<f64> = overview.iter().map(|b| b.pick_rate).collect();
        assert_eq!(picks, vec![0.7, 0.6, 0.5]);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("pick".parse::<SortMode>(), Ok(SortMode::Pick));
        assert_eq!("ALPHA".parse::<SortMode>(), Ok(SortMode::Alpha));
        assert!("rating".parse::<SortMode>().is_err());
        assert_eq!(SortMode::default(), SortMode::Pick);
    }

    #[test]
    fn test_type_filter_parse_and_serde() {
        assert_eq!(TypeFilter::from("All"), TypeFilter::All);
        assert_eq!(
            TypeFilter::from("Sniper"),
            TypeFilter::Only(BrawlerType::new("sniper"))
        );

        let f: TypeFilter = serde_json::from_str("\"Tank\"").unwrap();
        assert_eq!(serde_json::to_string(&f).unwrap(), "\"tank\"");
        let all: TypeFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, TypeFilter::All);
    }
}
