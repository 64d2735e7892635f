//! Integration tests for the scraper
//!
//! These tests use wiremock to serve a small registry and drive the real HTTP
//! fetcher through full listing and detail cycles end-to-end.

use shadow_fleet_scraper::checkpoint::{load_listing, CheckpointStore};
use shadow_fleet_scraper::config::Config;
use shadow_fleet_scraper::crawler::{Coordinator, HttpFetcher, RunOptions};
use shadow_fleet_scraper::VesselRecord;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PATH: &str = "/en/transport/shadow-fleet";

/// Creates a test configuration pointed at the mock server
fn create_test_config(origin: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.site.origin = origin.to_string();
    config.site.max_pages = 5;
    config.http.timeout_secs = 5;
    config.politeness.page_delay_ms = 0;
    config.politeness.detail_delay_ms = 0;
    config.output.checkpoint_path = dir
        .path()
        .join("shadow_fleet.json")
        .display()
        .to_string();
    config.output.listing_path = dir.path().join("vessel_list.json").display().to_string();
    config
}

fn coordinator(config: Config) -> Coordinator<HttpFetcher> {
    Coordinator::new(config).expect("Failed to create coordinator")
}

fn listing_page(ids: &[u32]) -> String {
    let mut body = String::from(r#"<html><body><a href="/en/transport/shadow-fleet">All</a>"#);
    for id in ids {
        body.push_str(&format!(
            r#"<a href="/en/transport/shadow-fleet/{id}"><div class="vessel-details">VESSEL {id}</div></a>"#
        ));
    }
    body.push_str(r#"<a href="/en/transport/shadow-fleet?page=2">Next</a></body></html>"#);
    body
}

fn detail_page(id: u32) -> String {
    format!(
        r#"<html><body>
<img src="/uploads/vessels/{id}.jpg">
<dt>Vessel name</dt><dd>VESSEL {id}</dd>
<dt>IMO</dt><dd>{imo}</dd>
<dt>Flag (Current)</dt><dd>Gabon</dd>
<dt>MMSI</dt><dd>62600{id}</dd>
<dt>Vessel Type</dt><dd>Crude Oil Tanker</dd>
<dt>Length</dt><dd>244 m</dd>
<h2>Justification</h2>
<p>On February 24, 2025, the European Union imposed sanctions on the vessel.</p>
<h2>Web Resources</h2>
</body></html>"#,
        id = id,
        imo = 9_100_000 + id
    )
}

async fn mount_listing_page(server: &MockServer, page: u32, ids: &[u32]) {
    let mock = Mock::given(method("GET")).and(path(LISTING_PATH));
    let mock = if page == 1 {
        mock
    } else {
        mock.and(query_param("page", page.to_string()))
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_string(listing_page(ids)))
        .mount(server)
        .await;
}

async fn mount_detail_page(server: &MockServer, id: u32) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", LISTING_PATH, id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(id)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scrape_writes_checkpoint() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    // Paginated mocks go first so the bare listing mock does not shadow them
    mount_listing_page(&mock_server, 2, &[3]).await;
    mount_listing_page(&mock_server, 3, &[3]).await;
    mount_listing_page(&mock_server, 1, &[1, 2]).await;
    for id in 1..=3 {
        mount_detail_page(&mock_server, id).await;
    }

    let coordinator = coordinator(create_test_config(&base_url, &dir));
    let report = coordinator.run(&RunOptions::default()).await.unwrap();

    assert_eq!(report.listed, 3);
    assert_eq!(report.new_vessels, 3);
    assert_eq!(report.total_vessels, 3);
    assert!(report.failed_urls.is_empty());

    let records = CheckpointStore::new(dir.path().join("shadow_fleet.json"))
        .load()
        .unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.url, format!("{}{}/1", base_url, LISTING_PATH));
    assert_eq!(first.vessel_name, "VESSEL 1");
    assert_eq!(first.imo, "9100001");
    assert_eq!(first.mmsi, "626001");
    assert_eq!(first.flag, "Gabon");
    assert_eq!(first.vessel_type, "Crude Oil Tanker");
    assert_eq!(
        first.vessel_photo_url,
        format!("{}/uploads/vessels/1.jpg", base_url)
    );
    assert_eq!(
        first.sanctions,
        vec!["On February 24, 2025, the European Union imposed sanctions on the vessel."]
    );
}

#[tokio::test]
async fn test_resume_skips_scraped_vessels() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_listing_page(&mock_server, 2, &[1, 2]).await;
    mount_listing_page(&mock_server, 1, &[1, 2]).await;

    // Vessel 1 is already in the checkpoint and must not be requested
    Mock::given(method("GET"))
        .and(path(format!("{}/1", LISTING_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(1)))
        .expect(0)
        .mount(&mock_server)
        .await;
    mount_detail_page(&mock_server, 2).await;

    let store = CheckpointStore::new(dir.path().join("shadow_fleet.json"));
    let existing = VesselRecord {
        url: format!("{}{}/1", base_url, LISTING_PATH),
        vessel_name: "VESSEL 1".to_string(),
        ..Default::default()
    };
    store.save(&[existing.clone()]).unwrap();

    let coordinator = coordinator(create_test_config(&base_url, &dir));
    let report = coordinator.run(&RunOptions::default()).await.unwrap();

    assert_eq!(report.previously_scraped, 1);
    assert_eq!(report.new_vessels, 1);

    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], existing);
    assert_eq!(records[1].imo, "9100002");
}

#[tokio::test]
async fn test_server_error_marks_vessel_failed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_listing_page(&mock_server, 2, &[1, 2, 3]).await;
    mount_listing_page(&mock_server, 1, &[1, 2, 3]).await;
    mount_detail_page(&mock_server, 1).await;
    Mock::given(method("GET"))
        .and(path(format!("{}/2", LISTING_PATH)))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_detail_page(&mock_server, 3).await;

    let coordinator = coordinator(create_test_config(&base_url, &dir));
    let report = coordinator.run(&RunOptions::default()).await.unwrap();

    assert_eq!(report.new_vessels, 2);
    assert_eq!(
        report.failed_urls,
        vec![format!("{}{}/2", base_url, LISTING_PATH)]
    );

    let imos: Vec<_> = coordinator
        .store()
        .load()
        .unwrap()
        .into_iter()
        .map(|r| r.imo)
        .collect();
    assert_eq!(imos, vec!["9100001", "9100003"]);
}

#[tokio::test]
async fn test_listing_error_stops_pagination() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[9])))
        .expect(0)
        .mount(&mock_server)
        .await;
    mount_listing_page(&mock_server, 1, &[1, 2]).await;

    let coordinator = coordinator(create_test_config(&base_url, &dir));
    let listings = coordinator.enumerate().await;

    let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_requests_carry_configured_user_agent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    let config = create_test_config(&base_url, &dir);
    Mock::given(method("GET"))
        .and(path(format!("{}/42", LISTING_PATH)))
        .and(header("user-agent", config.http.user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let coordinator = coordinator(config);
    let record = coordinator
        .scrape_one(&format!("{}{}/42", base_url, LISTING_PATH))
        .await
        .unwrap();

    assert_eq!(record.vessel_name, "VESSEL 42");
}

#[tokio::test]
async fn test_list_only_exports_listing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_listing_page(&mock_server, 2, &[5, 6]).await;
    mount_listing_page(&mock_server, 1, &[5, 6]).await;

    let coordinator = coordinator(create_test_config(&base_url, &dir));
    let exported = coordinator.export_listing().await.unwrap();

    let saved = load_listing(&dir.path().join("vessel_list.json"))
        .unwrap()
        .unwrap();
    assert_eq!(saved, exported);
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[1].preview.as_deref(), Some("VESSEL 6"));
}
