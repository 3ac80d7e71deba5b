//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, Utc};
use schemars::schema_for;
use pulse_core::entities::*;
use pulse_core::enums::Category;
use pulse_core::ranking::{ActivityTrend, DashboardStats, RankedInsight};
use pulse_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_insight() -> Insight {
    Insight {
        headline: "Demand surge for HSN 6101 products, forecast +4.2% month on month.".into(),
        activity: "Textile & Apparel".into(),
        classification_code: "6101".into(),
        category: Category::DemandTrend,
        location: "Surat".into(),
        trend_score: 81.37,
        growth_forecast: 4.18,
        composite_index: 69.5,
        date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
    }
}

roundtrip_and_validate!(insight_roundtrip, Insight, sample_insight());

fn sample_user() -> User {
    User {
        key: "test@user.com".into(),
        password_hash: "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08".into(),
        name: "Test User".into(),
        enterprise_name: "TestCorp MSME Garments Co.".into(),
        activity: "Textile & Apparel".into(),
        classification_code: "6101".into(),
        created_at: Utc::now(),
    }
}

#[test]
fn user_serialization_drops_password_hash() {
    let user = sample_user();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["key"], "test@user.com");

    let recovered: User = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(recovered.password_hash, "");
    assert_eq!(
        User {
            password_hash: String::new(),
            ..user
        },
        recovered
    );

    let schema = serde_json::to_value(schema_for!(User)).unwrap();
    assert!(schema["properties"].get("password_hash").is_none());
    assert!(validate_against_schema(&schema, &json).is_empty());
}

roundtrip_and_validate!(
    directory_entry_roundtrip,
    DirectoryEntry,
    DirectoryEntry {
        enterprise_name: "Acme Polymers Pvt Ltd".into(),
        district: "Thane".into(),
        activity: "Rubber Goods".into(),
        classification_code: "4016".into(),
    }
);

roundtrip_and_validate!(
    dashboard_view_roundtrip,
    DashboardView,
    DashboardView {
        viewer_activity: Some("Textile & Apparel".into()),
        stats: DashboardStats {
            mean_index: 83.4,
            total_records: 1,
            trend_by_activity: vec![ActivityTrend {
                activity: "Textile & Apparel".into(),
                mean_trend_score: 81.37,
                records: 1,
            }],
        },
        rankings: vec![RankedInsight {
            rank: 1,
            index: 83.4,
            relevance: 1.2,
            insight: sample_insight(),
        }],
    }
);

roundtrip_and_validate!(
    generate_response_roundtrip,
    GenerateResponse,
    GenerateResponse {
        generated: 21,
        prioritized: 7,
        preferred_activity: Some("Electronics Manufacturing".into()),
        preferred_code: Some("8542".into()),
        seed: 42,
    }
);

roundtrip_and_validate!(
    search_results_roundtrip,
    SearchResultsResponse,
    SearchResultsResponse {
        query: "acme".into(),
        results: vec![],
        total_results: 0,
    }
);

roundtrip_and_validate!(
    users_count_roundtrip,
    UsersCountResponse,
    UsersCountResponse { total_users: 2 }
);

#[test]
fn category_serializes_snake_case() {
    let json = serde_json::to_value(sample_insight()).unwrap();
    assert_eq!(json["category"], "demand_trend");
    assert_eq!(json["date"], "2026-09-30");
}

#[test]
fn profile_omits_password_hash() {
    let user = User {
        key: "demo@marketpulse.com".into(),
        password_hash: "secret-hash".into(),
        name: "Demo User".into(),
        enterprise_name: "Demo Electronics Ltd.".into(),
        activity: "Electronics Manufacturing".into(),
        classification_code: "8542".into(),
        created_at: Utc::now(),
    };
    let json = serde_json::to_string(&UserProfile::from(&user)).unwrap();
    assert!(!json.contains("secret-hash"));
    assert!(json.contains("Demo Electronics Ltd."));
}
