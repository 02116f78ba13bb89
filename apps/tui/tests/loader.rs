use httpmock::prelude::*;
use url::Url;

use labdata_tui::app::App;
use labdata_tui::data::remote::CatalogClient;
use labdata_tui::domain::Lang;
use labdata_tui::locale::site_fields;

fn client(server: &MockServer) -> CatalogClient {
    let base = Url::parse(&server.url("/")).unwrap();
    CatalogClient::new(base)
}

fn site_body() -> serde_json::Value {
    serde_json::json!({
        "site_title_en": "Sleep Lab Databases",
        "site_title": "睡眠实验室数据库",
        "owner": "Sleep Lab",
        "contact_email": "sleep-data@example.edu"
    })
}

fn datasets_body() -> serde_json::Value {
    serde_json::json!([
        {
            "slug": "cohort-2019",
            "title": "2019 Cohort",
            "summary": "Baseline actigraphy recordings",
            "variables": [
                {"name": "age", "label": "Age", "type": "integer", "unit": "years", "missing": 0.4}
            ]
        },
        {"slug": "diaries", "title": "Sleep Diaries", "summary": "Two-week diaries"}
    ])
}

#[tokio::test]
async fn loads_both_resources_concurrently_and_joins_them() {
    let server = MockServer::start();
    let site_mock = server.mock(|when, then| {
        when.method(GET).path("/data/site.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(site_body());
    });
    let datasets_mock = server.mock(|when, then| {
        when.method(GET).path("/data/datasets-en.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(datasets_body());
    });

    let snapshot = client(&server).load_snapshot(Lang::En).await.unwrap();

    site_mock.assert();
    datasets_mock.assert();

    assert_eq!(snapshot.datasets.len(), 2);
    assert_eq!(snapshot.datasets[0].slug, "cohort-2019");
    assert_eq!(snapshot.datasets[0].variables.len(), 1);
    assert!(snapshot.datasets[1].variables.is_empty());
    assert_eq!(
        snapshot.site.resolve(&site_fields(Lang::En).title),
        "Sleep Lab Databases"
    );
    assert_eq!(
        snapshot.site.resolve(&site_fields(Lang::Zh).title),
        "睡眠实验室数据库"
    );
}

#[tokio::test]
async fn the_language_selects_the_dataset_resource() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/site.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(site_body());
    });
    let zh_mock = server.mock(|when, then| {
        when.method(GET).path("/data/datasets.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(datasets_body());
    });

    let snapshot = client(&server).load_snapshot(Lang::Zh).await.unwrap();

    zh_mock.assert();
    assert_eq!(snapshot.datasets.len(), 2);
}

#[tokio::test]
async fn a_missing_dataset_resource_fails_the_whole_join() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/site.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(site_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/data/datasets-en.json");
        then.status(404);
    });

    let result = client(&server).load_snapshot(Lang::En).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn a_failed_site_fetch_degrades_the_app_to_one_notice() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/site.json");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/data/datasets-en.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(datasets_body());
    });

    let mut app = App::new(Lang::En);
    app.load_catalog(&client(&server)).await;

    // Nothing is rendered or wired afterwards; only the generic notice is set.
    assert_eq!(
        app.load_error.as_deref(),
        Some("Failed to load the catalog. Please try again later.")
    );
    assert!(app.snapshot.is_none());
    assert!(app.datasets().is_empty());
    assert!(app.visible_datasets.is_empty());
}

#[tokio::test]
async fn a_successful_load_wires_the_catalog_and_the_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/site.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(site_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/data/datasets-en.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(datasets_body());
    });

    let mut app = App::new(Lang::En);
    app.load_catalog(&client(&server)).await;

    assert!(app.load_error.is_none());
    assert_eq!(app.visible_datasets, vec![0, 1]);
    // One checkbox slot per dataset, joined by slug at composition time.
    assert_eq!(app.request.checked.len(), 2);

    app.request.checked[0] = true;
    app.request.agree = true;
    app.submit_request();
    let uri = app.composed.unwrap();
    assert!(uri.starts_with("mailto:sleep-data%40example.edu?subject="));
    assert!(uri.contains("cohort-2019"));
}
