use searchlight_core::ingest;
use searchlight_core::dates::parse_date;
use searchlight_core::{
    DataProvider, DateRange, ProviderMode, SearchlightError, StaticProvider,
};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("Failed to write fixture");
    path
}

#[test]
fn test_csv_search_rows_with_blank_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "gsc.csv",
        "page,clicks,impressions,ctr,position\n\
         https://s.com/pricing/, 20 ,2000,0.01,8\n\
         https://s.com/blog,9,300,,\n",
    );

    let rows = ingest::load_search_stats(&path).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].page, "https://s.com/pricing/");
    assert_eq!(rows[0].clicks, 20);
    assert_eq!(rows[0].position, Some(8.0));
    assert_eq!(rows[1].ctr, None);
    assert_eq!(rows[1].position, None);
}

#[test]
fn test_blank_counter_cells_read_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "gsc.csv",
        "page,clicks,impressions,ctr,position
/a,,1500,0.01,8
",
    );

    let rows = ingest::load_search_stats(&path).unwrap();

    assert_eq!(rows[0].clicks, 0);
    assert_eq!(rows[0].impressions, 1500);
    assert_eq!(rows[0].position, Some(8.0));
}

#[test]
fn test_blank_engagement_cells_read_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "ga4.csv",
        "pagePath,sessions,engagedSessions,averageSessionDuration,conversions
/guide,200,,,
",
    );

    let rows = ingest::load_engagement_stats(&path).unwrap();

    assert_eq!(rows[0].sessions, 200);
    assert_eq!(rows[0].engaged_sessions, 0);
    assert_eq!(rows[0].average_session_duration, 0.0);
    assert_eq!(rows[0].conversions, 0);
}

#[test]
fn test_missing_counter_columns_default_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "ga4.csv", "pagePath,sessions\n/guide,200\n");

    let rows = ingest::load_engagement_stats(&path).unwrap();

    assert_eq!(rows[0].page_path, "/guide");
    assert_eq!(rows[0].sessions, 200);
    assert_eq!(rows[0].engaged_sessions, 0);
    assert_eq!(rows[0].average_session_duration, 0.0);
}

#[test]
fn test_json_extension_is_read_as_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "daily.JSON",
        r#"[{"page":"/a","date":"2024-01-01","clicks":3,"impressions":40}]"#,
    );

    let rows = ingest::load_page_daily(&path).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-01-01");
    assert_eq!(rows[0].impressions, 40);
}

#[test]
fn test_bad_csv_row_names_the_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bad.csv", "date,value\n2024-01-01,1\n2024-01-02,lots\n");

    match ingest::load_daily_values(&path) {
        Err(SearchlightError::Validation(msg)) => assert!(msg.starts_with("Row 2:"), "{}", msg),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ingest::load_search_stats(dir.path().join("nope.csv"));
    assert!(matches!(result, Err(SearchlightError::Io(_))));
}

#[tokio::test]
async fn test_fixture_file_feeds_static_provider() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "fixtures.json",
        r#"{
            "topPages": [
                {"page": "/a", "impressions": 10},
                {"page": "/b", "impressions": 90}
            ],
            "siteMetrics": {
                "totalSessions": 7,
                "totalEngagedSessions": 3,
                "averageSessionDuration": 12.5,
                "totalConversions": 1,
                "bounceRate": 0.4
            }
        }"#,
    );

    let provider = StaticProvider::load_from_file(&path).unwrap();
    let range = DateRange::new(
        parse_date("2024-01-01").unwrap(),
        parse_date("2024-01-28").unwrap(),
    );

    assert_eq!(provider.mode(), ProviderMode::Mock);
    let top = provider.top_pages(&range, 1).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].page, "/b");
    assert!(provider.pages_aggregate(&range).await.unwrap().is_empty());
    assert_eq!(provider.site_metrics(&range).await.unwrap().total_sessions, 7);
}
