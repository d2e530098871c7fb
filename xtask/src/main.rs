use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use orders_core::contract::{ApiGatewayRequest, Order, ORDER_ID_PATH_PARAMETER};
use serde_json::Value;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "orders_lambda";
const LAMBDA_BIN: &str = "orders_handler";
const DIST_DIR: &str = "dist";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the orders lambda workspace",
    long_about = "A unified CLI for CI checks, Lambda packaging, and local\n\
                  API Gateway sample events in the orders lambda workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build the handler binary and package it as a Lambda `bootstrap` zip
    ServerlessPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
    /// Print an API Gateway proxy event for local invocation
    SampleEvent {
        #[arg(value_enum)]
        kind: SampleEventKind,
        /// Order identifier used in the path or body
        #[arg(long, env = "SAMPLE_ORDER_ID", default_value = "20221")]
        order_id: String,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy only
    Lint,
    /// Unit and integration tests
    Test,
    /// Lint + test
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleEventKind {
    /// POST /orders
    Create,
    /// GET /orders/{orderId}
    FetchOne,
    /// GET /orders
    FetchAll,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_serverless_lambda(target: &str, profile: BuildProfile) {
    if let Some(false) = rust_target_installed(target) {
        eprintln!(
            "required rust target `{target}` is not installed; run `rustup target add {target}` first"
        );
        exit(1);
    }

    step("Build orders lambda binary");

    let mut cargo_args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--target",
        target,
        "--bin",
        LAMBDA_BIN,
    ];
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package lambda zip artifact");
    let binary_path = Path::new("target")
        .join(target)
        .join(profile.dir_name())
        .join(LAMBDA_BIN);
    let zip_path = Path::new(DIST_DIR).join(format!("{LAMBDA_BIN}.zip"));

    if let Err(error) = write_bootstrap_zip(&binary_path, &zip_path) {
        eprintln!(
            "failed to package '{}' into '{}': {error}",
            binary_path.display(),
            zip_path.display()
        );
        exit(1);
    }

    eprintln!("\nPackaged artifact:\n- {}", zip_path.display());
}

/// `None` when rustup is unavailable; the build then reports missing targets itself.
fn rust_target_installed(target: &str) -> Option<bool> {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;

    Some(target_listed(&String::from_utf8_lossy(&output.stdout), target))
}

fn target_listed(installed: &str, target: &str) -> bool {
    installed.lines().any(|line| line.trim() == target)
}

/// Lambda's custom runtime expects an executable named `bootstrap` at the zip root.
fn write_bootstrap_zip(binary_path: &Path, zip_path: &Path) -> zip::result::ZipResult<()> {
    let binary = fs::read(binary_path)?;
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)?;
    zip.write_all(&binary)?;
    zip.finish()?;
    Ok(())
}

fn sample_event(kind: SampleEventKind, order_id: &str) -> ApiGatewayRequest {
    match kind {
        SampleEventKind::Create => {
            let order = Order {
                order_id: order_id.to_string(),
                customer_name: "Siri".to_string(),
                product: "Lunch Box".to_string(),
                quantity: 1,
                status: "CREATED".to_string(),
                created_at: String::new(),
            };
            ApiGatewayRequest {
                http_method: "POST".to_string(),
                path_parameters: None,
                body: Some(Value::String(
                    serde_json::to_string(&order).expect("sample order should serialize"),
                )),
            }
        }
        SampleEventKind::FetchOne => ApiGatewayRequest {
            http_method: "GET".to_string(),
            path_parameters: Some(BTreeMap::from([(
                ORDER_ID_PATH_PARAMETER.to_string(),
                order_id.to_string(),
            )])),
            body: None,
        },
        SampleEventKind::FetchAll => ApiGatewayRequest {
            http_method: "GET".to_string(),
            path_parameters: None,
            body: None,
        },
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test orders_core");
    run_cargo(&["test", "-p", "orders_core"]);

    step("Test orders_lambda");
    run_cargo(&["test", "-p", LAMBDA_PACKAGE]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage { target, profile } => {
            package_serverless_lambda(&target, profile);
        }
        Commands::SampleEvent { kind, order_id } => {
            let event = sample_event(kind, &order_id);
            println!(
                "{}",
                serde_json::to_string_pretty(&event).expect("sample event should serialize")
            );
        }
    }
}
