use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use storefront_core::{GridStatus, LoadState, StoreConfig};
use storefront_prerender::{HttpSource, prerender};

const WIDGET_CATALOG: &str = r#"{"products":[{"id":1,"name":"Widget","description":"A widget","price":"$9","image":"w.png","payhipLink":"https://payhip.com/b/abc123"}]}"#;

const MIXED_CATALOG: &str = r#"{"products":[
    {"id":1,"name":"Ebook","price":"$5","image":"e.png"},
    {"id":2,"name":"Course","price":"$49","image":"c.png","payhipLink":"https://example.com/course"},
    {"id":3,"name":"Preset","price":"$12","image":"p.png","payhipLink":"https://payhip.com/b/Pr3s"}
]}"#;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = Router::new()
            .route("/products.json", get(|| async { WIDGET_CATALOG }))
            .route("/mixed.json", get(|| async { MIXED_CATALOG }))
            .route("/empty.json", get(|| async { r#"{"products":[]}"# }))
            .route("/malformed.json", get(|| async { r#"{"products": [{"name": "#}))
            .route(
                "/broken.json",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn source(&self) -> HttpSource {
        HttpSource::new(Some(self.base_url.clone()))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn config_for(path: &str) -> StoreConfig {
    StoreConfig {
        products_file: path.to_string(),
        ..StoreConfig::default()
    }
}

#[tokio::test]
async fn renders_widget_product_end_to_end() {
    let server = TestServer::spawn().await;

    let out = prerender(&server.source(), config_for("products.json")).await;

    assert_eq!(out.state, LoadState::Ready);
    assert_eq!(out.card_count, 1);
    assert!(out.html.contains(r#"<h3 class="product-name">Widget</h3>"#));
    assert!(out.html.contains(r#"<div class="product-price">$9</div>"#));
    assert!(out.html.contains(r#"data-product="abc123""#));
    assert!(out.html.contains("product-card fade-in"));
}

#[tokio::test]
async fn renders_each_affordance_kind_in_order() {
    let server = TestServer::spawn().await;

    let out = prerender(&server.source(), config_for("mixed.json")).await;

    assert_eq!(out.card_count, 3);
    let ebook = out.html.find("Ebook").unwrap();
    let course = out.html.find("Course").unwrap();
    let preset = out.html.find("Preset").unwrap();
    assert!(ebook < course && course < preset);

    assert!(out.html.contains("Coming Soon"));
    assert!(out.html.contains(r#"<a href="https://example.com/course" target="_blank""#));
    assert!(out.html.contains(r#"data-product="Pr3s""#));
    assert!(out.html.contains("transition-delay: 200ms"));
}

#[tokio::test]
async fn empty_catalog_renders_nothing_and_no_error() {
    let server = TestServer::spawn().await;

    let out = prerender(&server.source(), config_for("empty.json")).await;

    assert_eq!(out.state, LoadState::Ready);
    assert_eq!(out.card_count, 0);
    assert_eq!(out.html, "");
}

#[tokio::test]
async fn server_error_shows_error_indicator() {
    let server = TestServer::spawn().await;

    let out = prerender(&server.source(), config_for("broken.json")).await;

    assert_eq!(out.state, LoadState::Unavailable);
    assert_eq!(out.card_count, 0);
    assert!(out.html.contains(GridStatus::Unavailable.message()));
}

#[tokio::test]
async fn malformed_document_shows_error_indicator() {
    let server = TestServer::spawn().await;

    let out = prerender(&server.source(), config_for("malformed.json")).await;

    assert_eq!(out.state, LoadState::Unavailable);
    assert!(out.html.contains(GridStatus::Unavailable.message()));
}

#[tokio::test]
async fn missing_document_shows_error_indicator() {
    let server = TestServer::spawn().await;

    let out = prerender(&server.source(), config_for("nowhere.json")).await;

    assert_eq!(out.state, LoadState::Unavailable);
}

#[tokio::test]
async fn unreachable_host_shows_error_indicator() {
    // Bind then drop to get a port nobody is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpSource::new(Some(format!("http://{addr}")));
    let out = prerender(&source, config_for("products.json")).await;

    assert_eq!(out.state, LoadState::Unavailable);
    assert_eq!(out.card_count, 0);
}
