//! Integration tests for the request boundary.
//!
//! Pure computation; no fixtures needed.

use chrono::NaiveDate;
use cosmic_rs::*;
use serde_json::Value;

fn seeded(seed: u64) -> MatchService {
    MatchService::new(ServiceConfig {
        seed: Some(seed),
        reference_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..ServiceConfig::default()
    })
}

fn call(svc: &MatchService, endpoint: Endpoint, body: &str) -> (u16, Value) {
    let (status, text) = svc.handle_request(endpoint, body);
    (status, serde_json::from_str(&text).expect("response is JSON"))
}

// ---------------------------------------------------------------------------
// Compatibility endpoint
// ---------------------------------------------------------------------------

#[test]
fn compatibility_returns_full_score() {
    let (status, v) = call(
        &seeded(1),
        Endpoint::Compatibility,
        r#"{"userSign":"Leo","partnerSign":"Aries"}"#,
    );
    assert_eq!(status, 200);
    assert_eq!(v["success"], true);
    let data = &v["data"];
    for key in [
        "overall",
        "sunSign",
        "moonSign",
        "risingSign",
        "venusSign",
        "marsSign",
        "communication",
        "emotional",
        "physical",
        "spiritual",
    ] {
        let n = data[key].as_f64().expect(key);
        assert!((0.0..=100.0).contains(&n), "{key} = {n}");
    }
    // base 90, so overall stays on the percent scale
    assert!(data["overall"].as_f64().unwrap() >= 84.0);
    assert_eq!(data["advice"].as_array().unwrap().len(), 2);
}

#[test]
fn compatibility_missing_sign_is_400() {
    let (status, v) = call(&seeded(1), Endpoint::Compatibility, r#"{"userSign":"Leo"}"#);
    assert_eq!(status, 400);
    assert_eq!(v["success"], false);
    assert_eq!(v["error"], "partnerSign is required");
    assert!(v.get("data").is_none());
}

#[test]
fn compatibility_unknown_sign_depends_on_policy() {
    let body = r#"{"userSign":"Ophiuchus","partnerSign":"Leo"}"#;
    let (status, v) = call(&seeded(1), Endpoint::Compatibility, body);
    assert_eq!(status, 400);
    assert_eq!(v["error"], "Invalid zodiac sign: Ophiuchus");

    let neutral = MatchService::new(ServiceConfig {
        seed: Some(1),
        unknown_sign_policy: UnknownSignPolicy::Neutral,
        ..ServiceConfig::default()
    });
    let (status, v) = call(&neutral, Endpoint::Compatibility, body);
    assert_eq!(status, 200);
    assert!(v["data"]["overall"].as_f64().unwrap() < 60.0);
}

#[test]
fn seeded_service_is_repeatable() {
    let body = r#"{"userSign":"Scorpio","partnerSign":"Taurus"}"#;
    let a = seeded(9).handle_request(Endpoint::Detailed, body);
    let b = seeded(9).handle_request(Endpoint::Detailed, body);
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Sign, detailed, Kundli, profile match
// ---------------------------------------------------------------------------

#[test]
fn sign_fixtures() {
    let svc = seeded(1);
    let (_, v) = call(&svc, Endpoint::Sign, r#"{"birthDate":"1995-07-10"}"#);
    assert_eq!(v["data"]["sign"], "Cancer");
    let (_, v) = call(&svc, Endpoint::Sign, r#"{"birthDate":"1990-01-01T08:00:00Z"}"#);
    assert_eq!(v["data"]["sign"], "Capricorn");
    assert_eq!(v["data"]["info"]["dateRange"], "December 22 - January 19");
}

#[test]
fn sign_bad_date_is_400() {
    let (status, v) = call(&seeded(1), Endpoint::Sign, r#"{"birthDate":"07/10/1995"}"#);
    assert_eq!(status, 400);
    assert_eq!(v["error"], "Invalid birth date: 07/10/1995");
}

#[test]
fn detailed_accepts_optional_times() {
    let (status, v) = call(
        &seeded(3),
        Endpoint::Detailed,
        r#"{"userSign":"gemini","partnerSign":"LIBRA","userBirthTime":"06:30"}"#,
    );
    assert_eq!(status, 200);
    let data = &v["data"];
    assert!(data["detailedAnalysis"]["love"].is_string());
    assert_eq!(data["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(data["elementCompatibility"], 85.0);
}

#[test]
fn kundli_aries_cancer_regression() {
    let body = r#"{"userSign":"Aries","partnerSign":"Cancer","userBirthTime":"10:30","partnerBirthTime":"14:45"}"#;
    let (status, v) = call(&seeded(5), Endpoint::Kundli, body);
    assert_eq!(status, 200);
    let data = &v["data"];
    assert_eq!(data["mangalDosha"], false);
    let guna = data["guna"].as_f64().unwrap();
    let sum: f64 = data["detailedScores"]
        .as_object()
        .unwrap()
        .values()
        .map(|x| x.as_f64().unwrap())
        .sum();
    assert_eq!(guna, sum);
}

#[test]
fn kundli_without_times_is_400() {
    let (status, v) = call(
        &seeded(5),
        Endpoint::Kundli,
        r#"{"userSign":"Aries","partnerSign":"Cancer"}"#,
    );
    assert_eq!(status, 400);
    assert_eq!(v["error"], "userBirthTime is required");
}

#[test]
fn profile_match_resolves_signs() {
    let (status, v) = call(
        &seeded(2),
        Endpoint::ProfileMatch,
        r#"{"userBirthDate":"1995-07-10","partnerBirthDate":"1990-01-01"}"#,
    );
    assert_eq!(status, 200);
    assert_eq!(v["data"]["userSign"], "Cancer");
    assert_eq!(v["data"]["partnerSign"], "Capricorn");
    assert!(v["data"]["compatibility"]["overall"].is_number());
}

#[test]
fn profile_match_rejects_future_date() {
    let (status, v) = call(
        &seeded(2),
        Endpoint::ProfileMatch,
        r#"{"userBirthDate":"2030-01-01","partnerBirthDate":"1990-01-01"}"#,
    );
    assert_eq!(status, 400);
    assert_eq!(v["error"], "birth date cannot be in the future");
}

#[test]
fn config_feeds_service() {
    let cfg = CosmicConfig::from_lookup(|key| match key {
        "COSMIC_SEED" => Some("11".to_string()),
        "COSMIC_UNKNOWN_SIGN" => Some("neutral".to_string()),
        _ => None,
    })
    .unwrap();
    let svc = MatchService::new(ServiceConfig::from(&cfg));
    assert_eq!(svc.config().seed, Some(11));
    assert_eq!(svc.config().unknown_sign_policy, UnknownSignPolicy::Neutral);
}
