// Crawl orchestrator tests.

use super::*;
use std::sync::Mutex;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOCAL_PATTERN: &str = r"^http://127\.0\.0\.1:\d+/app/\d+(/.*)?$";

const PAGE: &str = r#"<html><body>
    <div class="apphub_AppName">Test Game</div>
    <div class="game_purchase_price price">$4.99</div>
</body></html>"#;

fn orchestrator(workers: usize) -> CrawlOrchestrator {
    let config = Config {
        interval_secs: 0,
        offset_secs: 0,
        url_pattern: LOCAL_PATTERN.to_string(),
        workers,
        ..Default::default()
    };
    CrawlOrchestrator::from_config(&config, Arc::new(ProcessingStats::new())).unwrap()
}

async fn serve_page(server: &MockServer, app_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(app_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_empty_batch_is_an_error() {
    let result = orchestrator(1).crawl(&[]).await;
    assert_eq!(result.unwrap_err(), ScrapeError::EmptyBatch);
}

#[tokio::test]
async fn test_crawl_invalid_url_is_skipped() {
    let crawler = orchestrator(1);
    let batch = crawler
        .crawl(&["not-a-product-url".to_string()])
        .await
        .unwrap();
    assert!(batch.products.is_empty());
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].reason, SkipReason::InvalidUrl);
    assert!(!batch.cancelled);
    assert_eq!(crawler.stats().get_skip_count(SkipReason::InvalidUrl), 1);
}

#[tokio::test]
async fn test_crawl_keeps_input_order_with_one_worker() {
    let server = MockServer::start().await;
    serve_page(&server, "/app/10/First/", &PAGE.replace("Test Game", "First")).await;
    serve_page(&server, "/app/20/Second/", &PAGE.replace("Test Game", "Second")).await;

    let urls = vec![
        format!("{}/app/10/First/", server.uri()),
        format!("{}/app/20/Second/", server.uri()),
    ];
    let batch = orchestrator(1).crawl(&urls).await.unwrap();

    let names: Vec<_> = batch.products.iter().map(|p| p.app_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(batch.products[0].id, 10);
    assert_eq!(batch.products[1].price.to_string(), "4.99");
}

#[tokio::test]
async fn test_crawl_sends_age_gate_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/30/Gated/"))
        .and(header("cookie", "birthtime=568022401; mature_content=1"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let urls = vec![format!("{}/app/30/Gated/", server.uri())];
    let batch = orchestrator(1).crawl(&urls).await.unwrap();
    assert_eq!(batch.products.len(), 1);
}

#[tokio::test]
async fn test_crawl_http_error_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/40/Gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    serve_page(&server, "/app/41/Here/", PAGE).await;

    let urls = vec![
        format!("{}/app/40/Gone/", server.uri()),
        format!("{}/app/41/Here/", server.uri()),
    ];
    let crawler = orchestrator(1);
    let batch = crawler.crawl(&urls).await.unwrap();

    assert_eq!(batch.products.len(), 1);
    assert_eq!(batch.products[0].id, 41);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].reason, SkipReason::HttpStatus);
    assert!(batch.skipped[0].detail.contains("404"));
    assert_eq!(crawler.stats().accumulated(), 1);
}

#[tokio::test]
async fn test_crawl_empty_page_is_skipped() {
    let server = MockServer::start().await;
    serve_page(&server, "/app/50/Blank/", "<html><body>   </body></html>").await;

    let urls = vec![format!("{}/app/50/Blank/", server.uri())];
    let batch = orchestrator(1).crawl(&urls).await.unwrap();
    assert!(batch.products.is_empty());
    assert_eq!(batch.skipped[0].reason, SkipReason::EmptyDocument);
}

#[tokio::test]
async fn test_crawl_slow_page_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/60/Slow/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let crawler = orchestrator(1).with_url_timeout(Duration::from_millis(200));
    let urls = vec![format!("{}/app/60/Slow/", server.uri())];
    let batch = crawler.crawl(&urls).await.unwrap();
    assert_eq!(batch.skipped[0].reason, SkipReason::Timeout);
}

#[tokio::test]
async fn test_crawl_reports_skips_to_callback() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let crawler = orchestrator(1).with_skip_callback(Arc::new(move |skipped: &SkippedUrl| {
        sink.lock().unwrap().push(skipped.url.clone());
    }));

    let urls = vec!["bad-one".to_string(), "bad-two".to_string()];
    let batch = crawler.crawl(&urls).await.unwrap();
    assert_eq!(batch.skipped.len(), 2);
    assert_eq!(*seen.lock().unwrap(), vec!["bad-one", "bad-two"]);
}

#[tokio::test]
async fn test_crawl_with_workers_collects_everything() {
    let server = MockServer::start().await;
    let mut urls = Vec::new();
    for id in 1..=5 {
        let app_path = format!("/app/{id}/Game/");
        serve_page(&server, &app_path, PAGE).await;
        urls.push(format!("{}{}", server.uri(), app_path));
    }

    let batch = orchestrator(3).crawl(&urls).await.unwrap();
    let mut ids: Vec<_> = batch.products.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_crawl_cancelled_returns_partial_batch() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let crawler = orchestrator(1).with_cancellation(cancel);

    let batch = crawler
        .crawl(&["https://store.steampowered.com/app/1/".to_string()])
        .await
        .unwrap();
    assert!(batch.cancelled);
    assert!(batch.products.is_empty());
}

#[tokio::test]
async fn test_crawl_cancel_interrupts_politeness_wait() {
    let server = MockServer::start().await;
    serve_page(&server, "/app/70/A/", PAGE).await;
    serve_page(&server, "/app/71/B/", PAGE).await;

    let cancel = CancellationToken::new();
    let config = Config {
        interval_secs: 60,
        offset_secs: 0,
        url_pattern: LOCAL_PATTERN.to_string(),
        ..Default::default()
    };
    let crawler = CrawlOrchestrator::from_config(&config, Arc::new(ProcessingStats::new()))
        .unwrap()
        .with_cancellation(cancel.clone());

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.cancel();
    });

    let urls = vec![
        format!("{}/app/70/A/", server.uri()),
        format!("{}/app/71/B/", server.uri()),
    ];
    let batch = tokio::time::timeout(Duration::from_secs(5), crawler.crawl(&urls))
        .await
        .expect("cancellation should stop the 60s politeness wait")
        .unwrap();
    assert!(batch.cancelled);
    assert_eq!(batch.products.len(), 1);
    assert_eq!(batch.products[0].id, 70);
}

#[test]
fn test_with_workers_clamps_to_one() {
    assert_eq!(orchestrator(0).workers, 1);
}
