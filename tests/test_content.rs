//! Tests for body production

mod common;

use chrono::NaiveDate;
use common::{FALLBACK_PAGE, fixture_dir, site_config};
use webworker::http::content::{Body, NOT_FOUND_FRAGMENT, is_file, load_body};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn test_text_body_substitutes_tags() {
    let dir = fixture_dir("content-text");
    let cfg = site_config(&dir);
    std::fs::write(
        cfg.static_files.root.join("index.html"),
        "<cs371date>|<cs371server>|<cs371serverx",
    )
    .unwrap();

    let body = load_body("/index.html", &cfg.static_files, day()).await.unwrap();
    match body {
        Body::Text(text) => assert_eq!(
            text,
            "10/19/2026|Tony's super cool and functional server>|Tony's super cool and functional serverx"
        ),
        other => panic!("expected text body, got {}", other.kind()),
    }
}

#[tokio::test]
async fn test_binary_body_is_untouched() {
    let dir = fixture_dir("content-binary");
    let cfg = site_config(&dir);
    let data = b"\x00<cs371date>\xff".to_vec();
    std::fs::write(cfg.static_files.root.join("x.gif"), &data).unwrap();

    let body = load_body("/x.gif", &cfg.static_files, day()).await.unwrap();
    assert_eq!(body.kind(), "binary");
    assert_eq!(body.into_bytes().as_ref(), data.as_slice());
}

#[tokio::test]
async fn test_not_found_body() {
    let dir = fixture_dir("content-404");
    let cfg = site_config(&dir);

    let body = load_body("/missing", &cfg.static_files, day()).await.unwrap();
    assert_eq!(body.kind(), "not_found");
    assert_eq!(
        body.into_bytes().as_ref(),
        format!("{NOT_FOUND_FRAGMENT}{FALLBACK_PAGE}").as_bytes()
    );
}

#[tokio::test]
async fn test_directory_is_not_a_file() {
    let dir = fixture_dir("content-dir");
    let cfg = site_config(&dir);
    std::fs::create_dir_all(cfg.static_files.root.join("sub.html")).unwrap();

    assert!(!is_file(&cfg.static_files.root.join("sub.html")).await);
    let body = load_body("/sub.html", &cfg.static_files, day()).await.unwrap();
    assert_eq!(body.kind(), "not_found");
}

#[tokio::test]
async fn test_missing_binary_is_error() {
    let dir = fixture_dir("content-missing-binary");
    let cfg = site_config(&dir);

    assert!(load_body("/none.jpeg", &cfg.static_files, day()).await.is_err());
}
