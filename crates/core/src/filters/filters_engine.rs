//! Pure filtering and sorting over fetched campaign lists.
//!
//! The engine holds no state: callers re-derive the rendered list from the
//! fetched campaigns, the current criteria, and the sort order on every
//! render.

use std::cmp::Ordering;

use crate::campaigns::Campaign;
use crate::filters::{FilterCriteria, SortOrder};

/// Whether a single campaign satisfies every active criterion.
pub fn matches(campaign: &Campaign, criteria: &FilterCriteria) -> bool {
    if let Some(min) = criteria.budget_min {
        // NaN budgets fail any set bound.
        if !campaign.planned_budget.ge(&min) {
            return false;
        }
    }
    if let Some(max) = criteria.budget_max {
        if !campaign.planned_budget.le(&max) {
            return false;
        }
    }
    if !criteria.channels.is_empty()
        && !criteria.channels.iter().all(|c| campaign.has_channel(c))
    {
        return false;
    }
    if let Some(start) = criteria.start_date {
        if campaign.start_date < start {
            return false;
        }
    }
    if let Some(end) = criteria.end_date {
        if campaign.end_date > end {
            return false;
        }
    }
    true
}

/// The sublist of campaigns satisfying every active criterion, in input
/// order. With empty criteria this is the input itself.
pub fn apply(campaigns: &[Campaign], criteria: &FilterCriteria) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| matches(c, criteria))
        .cloned()
        .collect()
}

/// Sorts by planned budget. The sort is stable: campaigns with equal budgets
/// keep their fetch order in either direction.
pub fn sort_by_planned_budget(mut campaigns: Vec<Campaign>, order: SortOrder) -> Vec<Campaign> {
    campaigns.sort_by(|a, b| {
        let by_budget = a
            .planned_budget
            .partial_cmp(&b.planned_budget)
            .unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Asc => by_budget,
            SortOrder::Desc => by_budget.reverse(),
        }
    });
    campaigns
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;
    use crate::constants::KNOWN_CHANNELS;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn campaign(id: &str, budget: f64, channels: &[&str], start: &str, end: &str) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: format!("campaign {id}"),
            channels: channels.iter().map(|c| c.to_string()).collect(),
            start_date: date(start),
            end_date: date(end),
            planned_budget: budget,
            spent_budget: 0.0,
        }
    }

    fn sample() -> Vec<Campaign> {
        vec![
            campaign("a", 500.0, &["TV"], "2024-01-01", "2024-03-31"),
            campaign("b", 1500.0, &["TV", "Radio"], "2024-02-01", "2024-04-30"),
            campaign("c", 1000.0, &["Social Media"], "2024-05-01", "2024-06-30"),
            campaign("d", 1500.0, &["Radio"], "2024-03-01", "2024-05-31"),
        ]
    }

    fn ids(campaigns: &[Campaign]) -> Vec<&str> {
        campaigns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_passes_everything() {
        let all = sample();
        assert_eq!(apply(&all, &FilterCriteria::default()), all);
    }

    #[test]
    fn budget_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            budget_min: Some(1000.0),
            budget_max: Some(1500.0),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&sample(), &criteria)), vec!["b", "c", "d"]);
    }

    #[test]
    fn nan_budget_fails_any_set_bound() {
        let broken = campaign("x", f64::NAN, &["TV"], "2024-01-01", "2024-12-31");
        let unbounded = FilterCriteria::default();
        assert!(matches(&broken, &unbounded));

        let bounded = FilterCriteria {
            budget_min: Some(0.0),
            ..FilterCriteria::default()
        };
        assert!(!matches(&broken, &bounded));
    }

    #[test]
    fn multi_channel_selection_narrows() {
        let one = FilterCriteria {
            channels: vec!["TV".to_string()],
            ..FilterCriteria::default()
        };
        let two = FilterCriteria {
            channels: vec!["TV".to_string(), "Radio".to_string()],
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&sample(), &one)), vec!["a", "b"]);
        // Intersection semantics: both channels required.
        assert_eq!(ids(&apply(&sample(), &two)), vec!["b"]);
    }

    #[test]
    fn date_bounds_constrain_start_and_end() {
        let criteria = FilterCriteria {
            start_date: Some(date("2024-02-01")),
            end_date: Some(date("2024-05-31")),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&apply(&sample(), &criteria)), vec!["b", "d"]);
    }

    #[test]
    fn sort_is_stable_for_equal_budgets() {
        let sorted = sort_by_planned_budget(sample(), SortOrder::Asc);
        assert_eq!(ids(&sorted), vec!["a", "c", "b", "d"]);

        // Descending keeps the b-before-d tie order too.
        let sorted = sort_by_planned_budget(sample(), SortOrder::Desc);
        assert_eq!(ids(&sorted), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn toggle_flips_direction() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    // Property tests over generated lists and criteria.

    fn channels_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(
            prop::sample::select(KNOWN_CHANNELS.to_vec()).prop_map(String::from),
            0..KNOWN_CHANNELS.len(),
        )
    }

    fn campaign_strategy() -> impl Strategy<Value = Campaign> {
        (
            0u32..1000,
            0u32..20,
            channels_strategy(),
            0i64..365,
            0i64..365,
        )
            .prop_map(|(id, budget, channels, start, end)| {
                let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                Campaign {
                    id: format!("c-{id}"),
                    name: format!("campaign {id}"),
                    channels,
                    start_date: base + chrono::Duration::days(start),
                    end_date: base + chrono::Duration::days(end),
                    // Coarse buckets so that ties actually occur.
                    planned_budget: f64::from(budget) * 100.0,
                    spent_budget: 0.0,
                }
            })
    }

    fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
        (
            channels_strategy(),
            proptest::option::of(0u32..20),
            proptest::option::of(0u32..20),
            proptest::option::of(0i64..365),
            proptest::option::of(0i64..365),
        )
            .prop_map(|(channels, min, max, start, end)| {
                let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                FilterCriteria {
                    channels,
                    budget_min: min.map(|b| f64::from(b) * 100.0),
                    budget_max: max.map(|b| f64::from(b) * 100.0),
                    start_date: start.map(|d| base + chrono::Duration::days(d)),
                    end_date: end.map(|d| base + chrono::Duration::days(d)),
                }
            })
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent_and_a_sublist(
            campaigns in proptest::collection::vec(campaign_strategy(), 0..30),
            criteria in criteria_strategy(),
        ) {
            let once = apply(&campaigns, &criteria);
            prop_assert!(once.iter().all(|c| matches(c, &criteria)));
            prop_assert!(once.len() <= campaigns.len());
            prop_assert_eq!(apply(&once, &criteria), once.clone());
        }

        #[test]
        fn selecting_more_channels_never_broadens(
            campaigns in proptest::collection::vec(campaign_strategy(), 0..30),
            criteria in criteria_strategy(),
            extra in prop::sample::select(KNOWN_CHANNELS.to_vec()),
        ) {
            let mut stricter = criteria.clone();
            stricter.channels.push(extra.to_string());

            let broad = apply(&campaigns, &criteria);
            let narrow = apply(&campaigns, &stricter);
            prop_assert!(narrow.iter().all(|c| broad.contains(c)));
        }

        #[test]
        fn sort_is_a_stable_permutation(
            campaigns in proptest::collection::vec(campaign_strategy(), 0..30),
        ) {
            // Relabel ids so position lookups below are unambiguous.
            let campaigns: Vec<Campaign> = campaigns
                .into_iter()
                .enumerate()
                .map(|(i, mut c)| {
                    c.id = format!("c-{i}");
                    c
                })
                .collect();
            let sorted = sort_by_planned_budget(campaigns.clone(), SortOrder::Asc);
            prop_assert_eq!(sorted.len(), campaigns.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].planned_budget <= pair[1].planned_budget);
            }

            // Equal budgets keep their original relative order.
            for pair in sorted.windows(2) {
                if pair[0].planned_budget == pair[1].planned_budget {
                    let first = campaigns.iter().position(|c| c.id == pair[0].id).unwrap();
                    let second = campaigns.iter().position(|c| c.id == pair[1].id).unwrap();
                    prop_assert!(first < second);
                }
            }
        }
    }
}
