//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use asset_mapper::config::Config;
use asset_mapper::crawler::{Coordinator, Skip};
use asset_mapper::output::{render_report, CrawlStatistics};
use asset_mapper::CrawlReport;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page that must be requested exactly once
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts a redirect to `location`
async fn mount_redirect(server: &MockServer, page_path: &str, location: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(302).insert_header("location", location))
        .expect(1)
        .mount(server)
        .await;
}

/// Crawls a mock server from its root with the default configuration
async fn crawl_server(seed: &str) -> CrawlReport {
    let mut coordinator =
        Coordinator::new(&Config::default(), seed).expect("Failed to create coordinator");
    coordinator.run().await
}

fn host_of(base_url: &str) -> String {
    base_url.trim_start_matches("http://").to_string()
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let host = host_of(&base_url);

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head>
            <link rel="stylesheet" href="/css/site.css">
            <link rel="preconnect" href="https://fonts.example.com">
            </head><body>
            <a href="docs/intro.html">Intro</a>
            <a href="{base}/about">About</a>
            <a href="https://gocardless.com/404">External</a>
            <a href="mailto:someone@example.com">Mail</a>
            <img src="//{host}/img/logo.png">
            </body></html>"#,
            base = base_url,
            host = host
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/docs/intro.html",
        r#"<html><body>
            <a href="../about">About again</a>
            <a href="./next.html">Next</a>
            <script src="app.js"></script>
            </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/about",
        r#"<html><body><img src="/img/logo.png"><img src="/img/logo.png"></body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/docs/next.html",
        "<html><body><p>The end</p></body></html>".to_string(),
    )
    .await;

    let report = crawl_server(&base_url).await;

    assert_eq!(
        report.urls(),
        vec![
            format!("{}/", base_url),
            format!("{}/docs/intro.html", base_url),
            format!("{}/about", base_url),
            format!("{}/docs/next.html", base_url),
        ]
    );
    assert!(report.skipped.is_empty());

    let index = report.page(&format!("{}/", base_url)).unwrap();
    assert_eq!(
        index.assets,
        vec![
            format!("{}/css/site.css", base_url),
            format!("{}/img/logo.png", base_url),
        ]
    );

    let intro = report
        .page(&format!("{}/docs/intro.html", base_url))
        .unwrap();
    assert_eq!(intro.assets, vec![format!("{}/docs/app.js", base_url)]);

    let about = report.page(&format!("{}/about", base_url)).unwrap();
    assert_eq!(about.assets.len(), 2);

    let next = report
        .page(&format!("{}/docs/next.html", base_url))
        .unwrap();
    assert!(next.assets.is_empty());
}

#[tokio::test]
async fn test_seed_without_trailing_slash() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/">home</a></body></html>"#.to_string(),
    )
    .await;

    // Pass the seed without scheme and without trailing slash
    let report = crawl_server(&host_of(&base_url)).await;

    assert_eq!(report.urls(), vec![format!("{}/", base_url)]);
}

#[tokio::test]
async fn test_redirect_within_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/old">Old</a><a href="/list">List</a></body></html>"#.to_string(),
    )
    .await;
    mount_redirect(&mock_server, "/old", &format!("{}/new", base_url)).await;
    mount_page(
        &mock_server,
        "/new",
        r#"<html><head><link rel="icon" href="favicon.ico"></head></html>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/list",
        r#"<html><body><a href="/new">New</a></body></html>"#.to_string(),
    )
    .await;

    let report = crawl_server(&base_url).await;

    assert_eq!(
        report.urls(),
        vec![
            format!("{}/", base_url),
            format!("{}/new", base_url),
            format!("{}/list", base_url),
        ]
    );
    assert_eq!(
        report.page(&format!("{}/new", base_url)).unwrap().assets,
        vec![format!("{}/favicon.ico", base_url)]
    );
}

#[tokio::test]
async fn test_redirect_out_of_scope_is_skipped() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/go">Go</a></body></html>"#.to_string(),
    )
    .await;
    mount_redirect(
        &mock_server,
        "/go",
        &format!("{}/elsewhere", other_server.uri()),
    )
    .await;
    mount_page(
        &other_server,
        "/elsewhere",
        r#"<html><body><a href="/deeper">Deeper</a><img src="/x.png"></body></html>"#.to_string(),
    )
    .await;

    let report = crawl_server(&base_url).await;

    assert_eq!(report.urls(), vec![format!("{}/", base_url)]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].url, format!("{}/go", base_url));
    match &report.skipped[0].reason {
        Skip::OutOfScopeRedirect { final_url } => {
            assert_eq!(final_url, &format!("{}/elsewhere", other_server.uri()));
        }
        other => panic!("expected out-of-scope redirect, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_status_pages_are_processed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/missing">Missing</a></body></html>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"<html><head><link rel="stylesheet" href="/404.css"></head></html>"#)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = crawl_server(&base_url).await;

    assert_eq!(report.pages.len(), 2);
    assert_eq!(
        report.page(&format!("{}/missing", base_url)).unwrap().assets,
        vec![format!("{}/404.css", base_url)]
    );
}

#[tokio::test]
async fn test_unreachable_seed_produces_empty_report() {
    // Nothing listens on port 1
    let report = crawl_server("http://127.0.0.1:1/").await;

    assert!(report.pages.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(report.skipped[0].reason, Skip::FetchFailure(_)));
    assert_eq!(render_report(&report.pages).unwrap(), "[]");
}

#[tokio::test]
async fn test_report_json_and_statistics() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><script src="/a.js"></script></head><body><a href="/b">B</a></body></html>"#
            .to_string(),
    )
    .await;
    mount_page(&mock_server, "/b", "<html></html>".to_string()).await;

    let report = crawl_server(&base_url).await;

    let json = render_report(&report.pages).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "url": format!("{}/", base_url), "assets": [format!("{}/a.js", base_url)] },
            { "url": format!("{}/b", base_url), "assets": [] },
        ])
    );
    assert!(json.contains("\n  {\n    \"url\""));

    let stats = CrawlStatistics::from_report(&report);
    assert_eq!(stats.pages_processed, 2);
    assert_eq!(stats.pages_recorded, 2);
    assert_eq!(stats.total_assets, 1);
}

#[tokio::test]
async fn test_max_pages_from_config() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/a">A</a><a href="/b">B</a></body></html>"#.to_string(),
    )
    .await;

    let mut config = Config::default();
    config.crawler.max_pages = 1;

    let mut coordinator = Coordinator::new(&config, &base_url).unwrap();
    let report = coordinator.run().await;

    assert_eq!(report.urls(), vec![format!("{}/", base_url)]);
    assert_eq!(coordinator.frontier().len(), 2);
}

#[tokio::test]
async fn test_mixed_case_seed_host() {
    let mock_server = MockServer::start().await;
    let port = mock_server.address().port();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/about">About</a><img src="/logo.png"></body></html>"#.to_string(),
    )
    .await;
    mount_page(&mock_server, "/about", "<html></html>".to_string()).await;

    let report = crawl_server(&format!("http://LocalHost:{}", port)).await;

    assert!(report.skipped.is_empty(), "skipped: {:?}", report.skipped);
    assert_eq!(
        report.urls(),
        vec![
            format!("http://localhost:{}/", port),
            format!("http://localhost:{}/about", port),
        ]
    );
    assert_eq!(
        report.pages[0].assets,
        vec![format!("http://localhost:{}/logo.png", port)]
    );
}
