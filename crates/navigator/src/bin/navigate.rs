//! Runs a query through the navigator and prints the decision as JSON.
//!
//! Usage:
//!   `cargo run --bin navigate -- [--config <dir>] <query...>`
//!   `cargo run --bin navigate -- sanitize <text...>`
//!
//! Log level comes from `NAVIGATOR_LOG` (default `info`).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use navigator::config::load_or_create_config;
use navigator::session::{NavigationRequest, Navigator};
use navigator::{NavigatorConfig, Orchestrator, PathRegistry, ProductCatalog, SanitizeOptions};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct CollectingNavigator {
    requests: Mutex<Vec<NavigationRequest>>,
}

impl Navigator for CollectingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NAVIGATOR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut config_dir: Option<PathBuf> = None;
    if args.first().map(String::as_str) == Some("--config") && args.len() >= 2 {
        config_dir = Some(PathBuf::from(args[1].clone()));
        args.drain(..2);
    }

    let config = match config_dir {
        Some(dir) => match load_or_create_config(&dir) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        },
        None => NavigatorConfig::default(),
    };

    let mut orchestrator = Orchestrator::new(
        Arc::new(PathRegistry::default_site()),
        ProductCatalog::new(),
        config,
    );

    if args.first().map(String::as_str) == Some("sanitize") {
        let text = args[1..].join(" ");
        let sanitized = orchestrator
            .sanitizer()
            .sanitize(&text, SanitizeOptions::default());
        println!("{sanitized}");
        return;
    }

    let query = args.join(" ");
    let navigator = CollectingNavigator::default();
    let accepted = orchestrator.process_input(&query, &navigator);

    let navigation: Vec<_> = navigator
        .requests
        .lock()
        .map(|requests| {
            requests
                .iter()
                .map(|r| json!({ "href": r.target.href(), "delay_ms": r.delay.as_millis() as u64 }))
                .collect()
        })
        .unwrap_or_default();

    let state = orchestrator.state();
    let output = json!({
        "accepted": accepted,
        "outcome": state.last_outcome,
        "match": state.match_result,
        "notice": state.notice,
        "suggestions": state.suggestions,
        "navigation": navigation,
    });
    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(error) => eprintln!("failed to render output: {error}"),
    }
}
