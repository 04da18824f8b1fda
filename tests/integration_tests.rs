use aiseo_dash::core::view::{BrandPicker, MetricsPanel, ModuleExplorer, ViewState};
use aiseo_dash::{ConfigProvider, DataService, DataSource, SelectionStore};
use httpmock::prelude::*;

struct FixtureConfig {
    base_url: String,
}

impl ConfigProvider for FixtureConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn brands_path(&self) -> &str {
        "/data/brands.json"
    }

    fn metrics_path(&self) -> &str {
        "/data/dashboard-metrics.json"
    }

    fn modules_path(&self) -> &str {
        "/data/audit-modules.json"
    }
}

fn service_for(server: &MockServer) -> DataService<FixtureConfig> {
    DataService::new(FixtureConfig {
        base_url: server.base_url(),
    })
}

fn brands_fixture() -> serde_json::Value {
    serde_json::json!([
        {"id": "acme", "name": "Acme", "domain": "acme.com",
         "industry": "retail", "lastAuditDate": "2025-01-01"},
        {"id": "globex", "name": "Globex", "domain": "globex.io",
         "industry": "software", "lastAuditDate": "2024-12-12"}
    ])
}

fn metrics_fixture() -> serde_json::Value {
    serde_json::json!({
        "acme": {
            "aiVisibilityScore": {"value": 82.0, "maxValue": 100.0, "trend": "up", "changePercentage": 4.2},
            "trustScore": {"value": 67.0, "maxValue": 100.0, "trend": "stable"},
            "keywordCoverage": {"value": 48.0, "maxValue": 100.0, "trend": "down", "changePercentage": 2.0},
            "lastAuditTimestamp": "2025-01-15T10:30:00Z"
        }
    })
}

fn modules_fixture() -> serde_json::Value {
    serde_json::json!({
        "acme": [
            {"id": "brand-visibility", "name": "Brand Visibility",
             "score": {"value": 82.0, "maxValue": 100.0, "trend": "up", "changePercentage": 4.2},
             "insights": [
                 {"id": "i1", "type": "positive", "title": "Strong recall",
                  "description": "Brand is cited in most category queries"}
             ],
             "issues": [
                 {"id": "is1", "severity": "High", "title": "Thin citations",
                  "description": "Few authoritative sources", "impact": "Lower trust weighting"}
             ],
             "recommendations": [
                 {"id": "r1", "priority": "high", "title": "Publish FAQ",
                  "description": "Add structured answers", "expectedImpact": "+5 visibility",
                  "effort": "medium"}
             ]},
            {"id": "trust-authority", "name": "Trust & Authority",
             "score": {"value": 67.0, "maxValue": 100.0},
             "insights": [], "issues": [], "recommendations": []}
        ],
        "globex": []
    })
}

fn mount_fixtures(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/data/brands.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(brands_fixture());
    });
    server.mock(|when, then| {
        when.method(GET).path("/data/dashboard-metrics.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(metrics_fixture());
    });
    server.mock(|when, then| {
        when.method(GET).path("/data/audit-modules.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(modules_fixture());
    });
}

#[tokio::test]
async fn test_full_dashboard_load_flow() {
    let server = MockServer::start();
    mount_fixtures(&server);
    let service = service_for(&server);
    let store = SelectionStore::new();

    // Brand list loads and the first brand becomes the active selection.
    let mut picker = BrandPicker::new();
    picker.refresh(&service, &store).await;
    assert_eq!(picker.state().data().unwrap().len(), 2);
    let selected = store.selected_brand().unwrap();
    assert_eq!(selected.id, "acme");

    // Metrics and modules load concurrently for the active brand.
    let mut metrics_panel = MetricsPanel::new();
    let mut explorer = ModuleExplorer::new();
    tokio::join!(
        metrics_panel.refresh(&service, &selected.id),
        explorer.refresh(&service, &store, &selected.id),
    );

    let metrics = metrics_panel.state().data().unwrap();
    assert_eq!(metrics.ai_visibility_score.value, 82.0);
    assert_eq!(metrics.trust_score.value, 67.0);
    assert_eq!(metrics.keyword_coverage.value, 48.0);

    let modules = explorer.state().data().unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(store.selected_module_id().as_deref(), Some("brand-visibility"));

    let detail = explorer.selected_module(&store).unwrap();
    assert_eq!(detail.score.value, 82.0);
    assert_eq!(detail.insights.len(), 1);
    assert_eq!(detail.issues.len(), 1);
    assert_eq!(detail.recommendations.len(), 1);
}

#[tokio::test]
async fn test_repeated_brand_load_keeps_selection() {
    let server = MockServer::start();
    mount_fixtures(&server);
    let service = service_for(&server);
    let store = SelectionStore::new();
    let mut picker = BrandPicker::new();

    picker.refresh(&service, &store).await;
    assert_eq!(store.selected_brand().unwrap().id, "acme");

    // A second successful load with an existing selection must not re-fire
    // auto-selection.
    store.set_selected_brand(Some(picker.state().data().unwrap()[1].clone()));
    picker.refresh(&service, &store).await;
    assert_eq!(store.selected_brand().unwrap().id, "globex");
}

#[tokio::test]
async fn test_brand_with_zero_modules_shows_empty_state() {
    let server = MockServer::start();
    mount_fixtures(&server);
    let service = service_for(&server);
    let store = SelectionStore::new();
    let mut explorer = ModuleExplorer::new();

    explorer.refresh(&service, &store, "globex").await;

    assert_eq!(explorer.state(), &ViewState::Empty);
    assert_eq!(store.selected_module_id(), None);
}

#[tokio::test]
async fn test_missing_brands_resource_reports_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/brands.json");
        then.status(404);
    });
    let service = service_for(&server);
    let store = SelectionStore::new();
    let mut picker = BrandPicker::new();

    picker.refresh(&service, &store).await;

    assert_eq!(
        picker.state().error(),
        Some("Resource not found: /data/brands.json")
    );
    assert_eq!(store.selected_brand(), None);
}

#[tokio::test]
async fn test_unknown_brand_modules_report_descriptive_error() {
    let server = MockServer::start();
    mount_fixtures(&server);
    let service = service_for(&server);
    let store = SelectionStore::new();
    let mut explorer = ModuleExplorer::new();

    explorer.refresh(&service, &store, "initech").await;

    assert_eq!(
        explorer.state().error(),
        Some("No audit modules found for brand: initech")
    );
}

#[tokio::test]
async fn test_out_of_order_responses_keep_the_newer_request() {
    let server = MockServer::start();
    mount_fixtures(&server);
    let service = service_for(&server);
    let store = SelectionStore::new();
    let mut explorer = ModuleExplorer::new();

    // The user switches from acme to globex while acme's fetch is in
    // flight; acme's response arrives last but must be discarded.
    let acme_token = explorer.begin();
    let acme_result = service.fetch_audit_modules("acme").await;
    let globex_token = explorer.begin();
    let globex_result = service.fetch_audit_modules("globex").await;

    assert!(explorer.apply(globex_token, globex_result, &store));
    assert!(!explorer.apply(acme_token, acme_result, &store));

    assert_eq!(explorer.state(), &ViewState::Empty);
    assert_eq!(store.selected_module_id(), None);
}

#[tokio::test]
async fn test_store_subscribers_see_the_auto_selection() {
    let server = MockServer::start();
    mount_fixtures(&server);
    let service = service_for(&server);
    let store = SelectionStore::new();
    let mut rx = store.subscribe();

    let mut picker = BrandPicker::new();
    picker.refresh(&service, &store).await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().brand.as_ref().unwrap().id, "acme");
}

#[tokio::test]
async fn test_metrics_envelope_for_unknown_brand() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/dashboard-metrics.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });
    let service = service_for(&server);

    let result = service.fetch_dashboard_metrics("acme").await;

    assert_eq!(result.data(), None);
    assert_eq!(result.error(), Some("No metrics found for brand: acme"));
    assert!(!result.is_loading());
}
