use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use product_grader::config::AppConfig;
use product_grader::error::AppError;
use product_grader::extractor::PlaceholderExtractor;
use product_grader::grading::{AssessmentResult, Dimension, GradingEngine, ProductAttributes};
use product_grader::reports::{report_router, InMemoryReportRepository, ReportService};
use product_grader::telemetry;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Product Grader",
    about = "Grade products and serve transparency reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Grade a product described on the command line
    Grade(GradeArgs),
    /// Extract attributes for a listing URL and grade them
    Assess(AssessArgs),
    /// Grade every product in a CSV file (url,brand,price,materials,garment_type)
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct GradeArgs {
    /// Brand name as listed
    #[arg(long)]
    brand: String,
    /// Price in the platform's base currency
    #[arg(long)]
    price: Option<f64>,
    /// Comma separated materials, e.g. "organic cotton, elastane"
    #[arg(long, default_value = "")]
    materials: String,
    /// Garment type (informational)
    #[arg(long, default_value = "")]
    garment_type: String,
    /// Listing URL recorded with the product
    #[arg(long, default_value = "")]
    url: String,
    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Listing URL to extract and grade
    #[arg(long)]
    url: String,
    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file with a header row
    #[arg(long)]
    csv: PathBuf,
    /// Print one JSON assessment per line
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => run_server(config, args).await,
        Command::Grade(args) => run_grade(&config, args),
        Command::Assess(args) => run_assess(&config, args).await,
        Command::Batch(args) => run_batch(&config, args),
    }
}

async fn run_server(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(ReportService::new(
        Arc::new(InMemoryReportRepository::default()),
        Arc::new(PlaceholderExtractor::default()),
        config.grading.tiers.clone(),
    ));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(report_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        tier_source = ?config.grading.tier_source,
        "product grader ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_grade(config: &AppConfig, args: GradeArgs) -> Result<(), AppError> {
    let GradeArgs {
        brand,
        price,
        materials,
        garment_type,
        url,
        json,
    } = args;

    let engine = GradingEngine::new(config.grading.tiers.clone());
    let attributes = ProductAttributes {
        url,
        brand,
        price,
        materials,
        garment_type,
    };
    let assessment = engine.grade(&attributes);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_assessment(&attributes.url, &assessment);
    }
    Ok(())
}

async fn run_assess(config: &AppConfig, args: AssessArgs) -> Result<(), AppError> {
    let service = ReportService::new(
        Arc::new(InMemoryReportRepository::default()),
        Arc::new(PlaceholderExtractor::default()),
        config.grading.tiers.clone(),
    );
    let assessed = service.assess_url(&args.url).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessed)?);
    } else {
        println!("Attributes are placeholder values; listing extraction is not wired up yet.");
        println!("Report: {}", assessed.report.id);
        render_assessment(&assessed.report.url, &assessed.assessment);
    }
    Ok(())
}

fn run_batch(config: &AppConfig, args: BatchArgs) -> Result<(), AppError> {
    let engine = GradingEngine::new(config.grading.tiers.clone());
    let mut reader = csv::Reader::from_path(&args.csv)?;

    let mut graded = 0usize;
    for row in reader.deserialize::<ProductAttributes>() {
        let attributes = row?;
        let assessment = engine.grade(&attributes);
        if args.json {
            println!("{}", serde_json::to_string(&assessment)?);
        } else {
            println!(
                "{} | {} | overall {} ({}) | Q {} C {} D {} E {}",
                attributes.url,
                attributes.brand,
                assessment.overall.score,
                assessment.overall.grade,
                assessment.quality.grade,
                assessment.construction.grade,
                assessment.durability.grade,
                assessment.ethics.grade,
            );
        }
        graded += 1;
    }

    info!(path = %args.csv.display(), graded, "batch grading complete");
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_assessment(url: &str, assessment: &AssessmentResult) {
    println!("Product assessment");
    if !url.is_empty() {
        println!("Listing: {url}");
    }
    println!("Brand: {}", assessment.brand);
    if assessment.materials.is_empty() {
        println!("Materials: not listed");
    } else {
        println!("Materials: {}", assessment.materials);
    }

    println!("\nDimensions");
    for dimension in Dimension::ALL {
        let entry = assessment.dimension(dimension);
        println!(
            "- {}: {} ({}) {}",
            dimension, entry.score, entry.grade, entry.explanation
        );
    }

    println!(
        "\nOverall: {} ({}) {}",
        assessment.overall.score, assessment.overall.grade, assessment.overall.explanation
    );

    if !assessment.components.is_empty() {
        println!("\nAdjustments");
        for component in &assessment.components {
            println!(
                "- {}: {:+} ({})",
                component.dimension, component.delta, component.note
            );
        }
    }
}
