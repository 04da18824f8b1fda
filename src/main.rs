use aiseo_dash::core::view::{BrandPicker, MetricsPanel, ModuleExplorer, ViewState};
use aiseo_dash::domain::model::{AuditModule, DashboardMetrics, Score, Trend};
use aiseo_dash::domain::modules::display_rank;
use aiseo_dash::utils::logger;
use aiseo_dash::utils::validation::Validate;
use aiseo_dash::{CliConfig, ConfigProvider, DataService, FileConfig, SelectionStore};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting aiseo-dash CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code_for(&e));
    }

    let brand = config.brand.clone();
    let module = config.module.clone();
    let config_path = config.config.clone();

    let outcome = match config_path {
        Some(path) => match FileConfig::from_file(&path) {
            Ok(file_config) => {
                tracing::info!("Using config file: {}", path);
                run(file_config, brand.as_deref(), module.as_deref()).await
            }
            Err(e) => {
                tracing::error!("❌ Could not load config file {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(exit_code_for(&e));
            }
        },
        None => run(config, brand.as_deref(), module.as_deref()).await,
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn exit_code_for(e: &aiseo_dash::DashError) -> i32 {
    use aiseo_dash::utils::error::ErrorSeverity;
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

async fn run<C: ConfigProvider>(
    provider: C,
    brand_arg: Option<&str>,
    module_arg: Option<&str>,
) -> anyhow::Result<()> {
    let service = DataService::new(provider);
    let store = SelectionStore::new();

    let mut picker = BrandPicker::new();
    picker.refresh(&service, &store).await;

    let brands = match picker.state() {
        ViewState::Ready(brands) => brands.clone(),
        ViewState::Failed(message) => anyhow::bail!("Unable to load brands: {}", message),
        ViewState::Empty | ViewState::Loading => anyhow::bail!("No brands available"),
    };

    if let Some(wanted) = brand_arg {
        match brands.iter().find(|b| b.id == wanted) {
            Some(found) => store.set_selected_brand(Some(found.clone())),
            None => tracing::warn!("Unknown brand '{}', keeping default selection", wanted),
        }
    }

    let Some(selected) = store.selected_brand() else {
        anyhow::bail!("No brand selected");
    };

    println!("Brands:");
    for brand in &brands {
        let marker = if brand.id == selected.id { "▸" } else { " " };
        println!(
            "  {} {}  ({}, {}, last audited {})",
            marker, brand.name, brand.domain, brand.industry, brand.last_audit_date
        );
    }
    println!();

    // Independent fetches, in flight simultaneously; each panel keeps its
    // own loading/error state.
    let mut metrics_panel = MetricsPanel::new();
    let mut explorer = ModuleExplorer::new();
    tokio::join!(
        metrics_panel.refresh(&service, &selected.id),
        explorer.refresh(&service, &store, &selected.id),
    );

    println!("== {} — AI-SEO audit ==", selected.name);
    render_metrics(metrics_panel.state());
    println!();

    if let Some(wanted) = module_arg {
        let known = explorer
            .state()
            .data()
            .map(|modules| modules.iter().any(|m| m.id == wanted))
            .unwrap_or(false);
        if known {
            store.set_selected_module_id(Some(wanted.to_string()));
        } else {
            tracing::warn!("Unknown module '{}', keeping default selection", wanted);
        }
    }

    render_modules(&explorer, &store);
    Ok(())
}

fn render_metrics(state: &ViewState<DashboardMetrics>) {
    match state {
        ViewState::Loading => println!("  (metrics still loading)"),
        ViewState::Failed(message) => {
            println!("  ⚠ Metrics unavailable: {}", message);
            // Render zeroed placeholders so the layout stays stable.
            let fallback = DashboardMetrics::fallback();
            render_score_cards(&fallback, true);
        }
        ViewState::Empty => println!("  No metrics recorded"),
        ViewState::Ready(metrics) => {
            if let Err(e) = metrics.validate() {
                tracing::warn!("Metrics out of range: {}", e);
            }
            render_score_cards(metrics, false);
            println!(
                "  Last audited: {}",
                metrics.last_audit_timestamp.format("%Y-%m-%d %H:%M UTC")
            );
        }
    }
}

fn render_score_cards(metrics: &DashboardMetrics, placeholder: bool) {
    let suffix = if placeholder { " (placeholder)" } else { "" };
    render_score("AI Visibility", &metrics.ai_visibility_score, suffix);
    render_score("Trust Score", &metrics.trust_score, suffix);
    render_score("Keyword Coverage", &metrics.keyword_coverage, suffix);
}

fn render_score(title: &str, score: &Score, suffix: &str) {
    let trend = match (score.trend, score.change_percentage) {
        (Some(trend), Some(change)) => {
            let arrow = match trend {
                Trend::Up => "↑",
                Trend::Down => "↓",
                Trend::Stable => "→",
            };
            format!("  {} {:.1}%", arrow, change.abs())
        }
        _ => String::new(),
    };
    println!(
        "  {:<18} {:>5.1}/{:<5.1} [{}]{}{}",
        title,
        score.value,
        score.max_value,
        score.band().label(),
        trend,
        suffix
    );
}

fn render_modules(explorer: &ModuleExplorer, store: &SelectionStore) {
    match explorer.state() {
        ViewState::Loading => println!("  (modules still loading)"),
        ViewState::Failed(message) => println!("  ⚠ Audit modules unavailable: {}", message),
        ViewState::Empty => println!("  No audit modules available for this brand"),
        ViewState::Ready(modules) => {
            let mut ordered: Vec<&AuditModule> = modules.iter().collect();
            ordered.sort_by_key(|m| (display_rank(&m.id), m.name.clone()));

            let selected_id = store.selected_module_id();
            println!("Audit modules:");
            for module in &ordered {
                let marker = if selected_id.as_deref() == Some(module.id.as_str()) {
                    "▸"
                } else {
                    " "
                };
                println!(
                    "  {} {:<24} {:>5.1}/{:<5.1} [{}]",
                    marker,
                    module.name,
                    module.score.value,
                    module.score.max_value,
                    module.score.band().label()
                );
            }

            if let Some(module) = explorer.selected_module(store) {
                println!();
                render_module_detail(module);
            }
        }
    }
}

fn render_module_detail(module: &AuditModule) {
    println!("-- {} --", module.name);
    if let Some(text) = module.summary.as_deref().or(module.description.as_deref()) {
        println!("{}", text);
    }

    if !module.insights.is_empty() {
        println!("Insights:");
        for insight in &module.insights {
            println!("  [{:?}] {} — {}", insight.kind, insight.title, insight.description);
        }
    }

    if !module.issues.is_empty() {
        println!("Issues:");
        for issue in module.issues_by_severity() {
            println!(
                "  [{}] {} — {} (impact: {})",
                issue.severity, issue.title, issue.description, issue.impact
            );
        }
    }

    if !module.recommendations.is_empty() {
        println!("Recommendations:");
        for rec in &module.recommendations {
            println!(
                "  [{:?}/{:?} effort] {} — {} (expected: {})",
                rec.priority, rec.effort, rec.title, rec.description, rec.expected_impact
            );
        }
    }
}
