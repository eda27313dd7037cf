//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `audit_stdin <domain> [--online] < page.html`
//!
//! With `--online` the site checks run through the reqwest fetcher; there is
//! no markup validator. Diagnostics go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read};

use rs_seo_audit::{analyze, analyze_online, score, AnalyzeOptions, FactSet, RateTable, ReqwestFetcher, ScoreBreakdown};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    facts: FactSet,
    score: ScoreBreakdown,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(domain) = args.next() else {
        eprintln!("usage: audit_stdin <domain> [--online] < page.html");
        std::process::exit(2);
    };
    let online = args.any(|a| a == "--online");

    // Read HTML from stdin
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }
    let html = rs_seo_audit::encoding::transcode_to_utf8(&html);

    let options = AnalyzeOptions::default();
    let facts = if online {
        match ReqwestFetcher::new(options.request_timeout) {
            Ok(fetcher) => analyze_online(&html, &domain, &options, &fetcher, None).await,
            Err(e) => {
                eprintln!("HTTP client unavailable ({e}), continuing offline");
                analyze(&html, &domain, &options)
            }
        }
    } else {
        analyze(&html, &domain, &options)
    };

    let score = match score(&facts, &RateTable::default()) {
        Ok(score) => score,
        Err(e) => {
            eprintln!("Scoring failed: {e}");
            std::process::exit(1);
        }
    };

    let output = Output { facts, score };
    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
