//! Synthetic insight generation.
//!
//! [`generate`] is pure: the random source and the reference date are
//! parameters, so a seeded `ChaCha20Rng` reproduces a batch exactly.
//! [`refresh`] is the persistence step that swaps the generated batch in for
//! the whole stored set.
//!
//! Score policy: `trend_score` is continuous in `[50, 95]` and
//! `growth_forecast` continuous in `[-5, 10]`, both rounded to 2 dp. Dates are
//! a random day 1..=30 days before the reference date.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::catalog::{ACTIVITIES, CLASSIFICATION_CODES, LOCATIONS, code_for_activity};
use crate::entities::Insight;
use crate::enums::Category;
use crate::errors::StoreError;
use crate::ranking::{composite_index, round2};
use crate::store::InsightStore;

/// Range `trend_score` is drawn from.
pub const TREND_SCORE_RANGE: RangeInclusive<f64> = 50.0..=95.0;

/// Range `growth_forecast` is drawn from (percent per month).
pub const GROWTH_FORECAST_RANGE: RangeInclusive<f64> = -5.0..=10.0;

/// How far back an insight's date may fall, in days.
pub const DATE_LOOKBACK_DAYS: RangeInclusive<u64> = 1..=30;

/// The viewer's declared business, used to bias the head of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preference<'a> {
    pub activity: Option<&'a str>,
    pub classification_code: Option<&'a str>,
}

impl<'a> Preference<'a> {
    /// Build a preference, treating empty strings as absent.
    #[must_use]
    pub fn new(activity: Option<&'a str>, classification_code: Option<&'a str>) -> Self {
        Self {
            activity: activity.filter(|s| !s.is_empty()),
            classification_code: classification_code.filter(|s| !s.is_empty()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.activity.is_none() && self.classification_code.is_none()
    }
}

/// Number of leading records that carry the viewer's preference.
#[must_use]
pub const fn priority_len(count: usize) -> usize {
    count / 3
}

/// Generate `count` insights dated relative to `today`.
///
/// The first [`priority_len`] records use the preferred activity and code when
/// given. A missing preferred code falls back to the catalog code for the
/// activity, then to a random code. All other records draw their activity
/// uniformly from the catalog.
pub fn generate<R: Rng>(
    count: usize,
    preference: &Preference<'_>,
    rng: &mut R,
    today: NaiveDate,
) -> Vec<Insight> {
    let prefix = priority_len(count);
    let mut insights = Vec::with_capacity(count);

    for i in 0..count {
        let prioritized = i < prefix;

        let activity = match preference.activity {
            Some(activity) if prioritized => activity.to_string(),
            _ => (*pick(&ACTIVITIES, rng)).to_string(),
        };

        let classification_code = match preference.classification_code {
            Some(code) if prioritized => code.to_string(),
            _ => code_for_activity(&activity)
                .unwrap_or_else(|| *pick(&CLASSIFICATION_CODES, rng))
                .to_string(),
        };

        let category = *pick(&Category::ALL, rng);
        let location = (*pick(&LOCATIONS, rng)).to_string();
        let trend_score = round2(rng.random_range(TREND_SCORE_RANGE));
        let growth_forecast = round2(rng.random_range(GROWTH_FORECAST_RANGE));
        let days_ago = rng.random_range(DATE_LOOKBACK_DAYS);
        let date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);

        let headline = headline(category, &classification_code, &location, growth_forecast);

        insights.push(Insight {
            headline,
            activity,
            classification_code,
            category,
            location,
            trend_score,
            growth_forecast,
            composite_index: composite_index(trend_score, growth_forecast),
            date,
        });
    }

    insights
}

/// Generate a batch and replace the entire stored set with it.
///
/// The store is responsible for making the replacement atomic.
///
/// # Errors
///
/// Returns `StoreError` if the store rejects the replacement. The previously
/// stored set is left untouched in that case.
pub async fn refresh<S, R>(
    store: &S,
    count: usize,
    preference: &Preference<'_>,
    rng: &mut R,
    today: NaiveDate,
) -> Result<Vec<Insight>, StoreError>
where
    S: InsightStore + ?Sized,
    R: Rng,
{
    let batch = generate(count, preference, rng, today);
    store.replace_all(&batch).await?;
    tracing::info!(
        count = batch.len(),
        prioritized = if preference.is_empty() { 0 } else { priority_len(count) },
        "insight set replaced"
    );
    Ok(batch)
}

/// Render the headline for a record.
#[must_use]
pub fn headline(category: Category, code: &str, location: &str, growth: f64) -> String {
    match category {
        Category::DemandTrend => {
            format!("Demand surge for HSN {code} products, forecast {growth:+.1}% month on month.")
        }
        Category::SupplyRisk => {
            format!("Raw material price spike puts HSN {code} supply under pressure in {location}.")
        }
        Category::Policy => {
            format!("Policy changes stabilize input prices in the {location} region for HSN {code}.")
        }
        Category::Innovation => format!(
            "Innovation cluster opens in {location}, offering collaboration opportunities for HSN {code}."
        ),
    }
}

/// Uniform choice from a non-empty catalog slice.
fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use rstest::rstest;

    use super::*;
    use crate::catalog::is_known_activity;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(42)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn same_seed_same_batch() {
        let pref = Preference::new(Some("Rubber Goods"), Some("4016"));
        let a = generate(20, &pref, &mut rng(), today());
        let b = generate(20, &pref, &mut rng(), today());
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(0, &Preference::default(), &mut rng(), today()).is_empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 0)]
    #[case(3, 1)]
    #[case(20, 6)]
    #[case(25, 8)]
    fn priority_prefix_is_floor_third(#[case] count: usize, #[case] expected: usize) {
        assert_eq!(priority_len(count), expected);
    }

    #[test]
    fn preferred_code_overrides_mapping_on_prefix_only() {
        let pref = Preference::new(Some("Textile & Apparel"), Some("9999"));
        let batch = generate(30, &pref, &mut rng(), today());
        for insight in &batch[..10] {
            assert_eq!(insight.activity, "Textile & Apparel");
            assert_eq!(insight.classification_code, "9999");
        }
        for insight in &batch[10..] {
            assert_eq!(
                Some(insight.classification_code.as_str()),
                code_for_activity(&insight.activity)
            );
        }
    }

    #[test]
    fn missing_preferred_code_falls_back_to_mapping() {
        let pref = Preference::new(Some("Pharmaceuticals"), None);
        let batch = generate(9, &pref, &mut rng(), today());
        for insight in &batch[..3] {
            assert_eq!(insight.classification_code, "3004");
        }
    }

    #[test]
    fn unknown_preferred_activity_gets_a_catalog_code() {
        let pref = Preference::new(Some("Handicrafts"), None);
        let batch = generate(9, &pref, &mut rng(), today());
        for insight in &batch[..3] {
            assert_eq!(insight.activity, "Handicrafts");
            assert!(CLASSIFICATION_CODES.contains(&insight.classification_code.as_str()));
        }
        assert!(batch[3..].iter().all(|i| is_known_activity(&i.activity)));
    }

    #[test]
    fn code_only_preference_keeps_random_activity() {
        let pref = Preference::new(None, Some("1234"));
        let batch = generate(6, &pref, &mut rng(), today());
        assert_eq!(batch[0].classification_code, "1234");
        assert_eq!(batch[1].classification_code, "1234");
        assert!(is_known_activity(&batch[0].activity));
    }

    #[test]
    fn empty_strings_are_no_preference() {
        let pref = Preference::new(Some(""), Some(""));
        assert!(pref.is_empty());
    }

    #[test]
    fn values_stay_in_range() {
        let batch = generate(200, &Preference::default(), &mut rng(), today());
        for insight in &batch {
            assert!(TREND_SCORE_RANGE.contains(&insight.trend_score));
            assert!(GROWTH_FORECAST_RANGE.contains(&insight.growth_forecast));
            assert!(LOCATIONS.contains(&insight.location.as_str()));
            assert!(!insight.headline.is_empty());
            let age = (today() - insight.date).num_days();
            assert!((1..=30).contains(&age), "date {} is {age} days old", insight.date);
            assert_eq!(
                insight.composite_index,
                composite_index(insight.trend_score, insight.growth_forecast)
            );
        }
    }

    #[test]
    fn headline_mentions_code() {
        for category in Category::ALL {
            let text = headline(category, "8542", "Pune", 3.25);
            assert!(text.contains("HSN 8542"), "{text}");
        }
        assert!(headline(Category::DemandTrend, "8542", "Pune", -1.24).contains("-1.2%"));
        assert!(headline(Category::SupplyRisk, "8542", "Pune", 0.0).contains("Pune"));
    }
}
