use clap::Parser;
use std::io::Write;

use super::*;

#[test]
fn parses_score_command() {
    let cli = Cli::try_parse_from(["dealer-cli", "score", "great service"])
        .expect("expected valid cli args");
    assert!(!cli.keyword_only);
    assert!(matches!(
        cli.command,
        Commands::Score { ref text } if text == "great service"
    ));
}

#[test]
fn parses_tag_command_with_keyword_only() {
    let cli = Cli::try_parse_from(["dealer-cli", "tag", "reviews.json", "--keyword-only"])
        .expect("expected valid cli args");
    assert!(cli.keyword_only);
    assert!(matches!(
        cli.command,
        Commands::Tag { ref file } if file.to_str() == Some("reviews.json")
    ));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["dealer-cli"]).is_err());
}

#[tokio::test]
async fn score_text_renders_result_json() {
    let analyzer = dealer_sentiment::Analyzer::keyword_only();
    let out = commands::score_text(&analyzer, "The car was fine.")
        .await
        .expect("score");
    let json: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(json["sentiment"], "neutral");
    assert_eq!(json["score"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn tag_file_labels_each_review() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        file,
        r#"[
            {{"id": "r1", "dealership": 1, "name": "John Smith", "purchase": true,
              "review": "Fantastic services and very friendly staff!",
              "purchase_date": "2023-10-15", "car_make": "Toyota",
              "car_model": "Camry", "car_year": 2023}},
            {{"_id": "r2", "review": "Rude staff and overpriced vehicles."}}
        ]"#
    )
    .expect("write");

    let analyzer = dealer_sentiment::Analyzer::keyword_only();
    let out = commands::tag_file(&analyzer, file.path())
        .await
        .expect("tag");
    let json: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(json[0]["sentiment"], "positive");
    assert_eq!(json[0]["name"], "John Smith");
    assert_eq!(json[1]["sentiment"], "negative");
    assert_eq!(json[1]["id"], "r2");
    assert_eq!(json[1]["name"], "Anonymous");
}

#[tokio::test]
async fn tag_file_rejects_non_array() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(file, r#"{{"review": "great"}}"#).expect("write");

    let analyzer = dealer_sentiment::Analyzer::keyword_only();
    let err = commands::tag_file(&analyzer, file.path())
        .await
        .expect_err("object is not an array");
    assert!(err.to_string().contains("not a JSON array"), "got {err:#}");
}

fn half_configured() -> dealer_core::AppConfig {
    dealer_core::AppConfig {
        bind_addr: "127.0.0.1:5000".parse().expect("addr"),
        log_level: "info".to_string(),
        nlu_api_key: Some("k".to_string()),
        nlu_url: None,
        nlu_version: "2022-04-07".to_string(),
        nlu_timeout_secs: 10,
    }
}

#[tokio::test]
async fn keyword_only_ignores_half_configured_nlu() {
    let analyzer = commands::build_analyzer(&half_configured(), true)
        .expect("keyword-only must not need NLU settings");
    assert_eq!(analyzer.provider_name(), "keyword");

    let out = commands::score_text(&analyzer, "great service")
        .await
        .expect("score");
    let json: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(json["sentiment"], "positive");
    assert_eq!(json["score"].as_f64(), Some(1.0));
}

#[test]
fn half_configured_nlu_fails_without_keyword_only() {
    let err = commands::build_analyzer(&half_configured(), false)
        .expect_err("lone API key is a config error");
    assert!(err.to_string().contains("IBM_NLU_URL"), "got {err:#}");
}

#[test]
fn help_is_handled_by_the_parser() {
    let err = Cli::try_parse_from(["dealer-cli", "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[tokio::test]
async fn tag_file_skips_bad_records_and_tags_the_rest() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        file,
        r#"[
            {{"id": "r1", "review": "Fantastic services and very friendly staff!"}},
            {{"id": "r2", "review": "Great", "car_year": ""}},
            {{"id": "r3", "name": "No text at all"}},
            {{"id": "r4", "review": "Rude staff", "car_year": "soon"}}
        ]"#
    )
    .expect("write");

    let analyzer = dealer_sentiment::Analyzer::keyword_only();
    let out = commands::tag_file(&analyzer, file.path())
        .await
        .expect("tag");
    let json: serde_json::Value = serde_json::from_str(&out).expect("json");
    let tagged = json.as_array().expect("array");

    assert_eq!(tagged.len(), 2, "got {json}");
    assert_eq!(tagged[0]["id"], "r1");
    assert_eq!(tagged[0]["sentiment"], "positive");
    assert_eq!(tagged[1]["id"], "r2");
    assert_eq!(tagged[1]["sentiment"], "positive");
    assert!(tagged[1]["car_year"].is_null());
}
