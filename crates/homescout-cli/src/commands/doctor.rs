use crate::cli::DoctorArgs;
use crate::config::load_predictor;
use crate::output::OutputWriter;
use crate::storage::connect_postgres;
use anyhow::Result;
use console::style;
use homescout_core::config::{redact_password, ConfigSource, LayeredConfig};
use homescout_store::ports::SearchLogStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Check {
    name: &'static str,
    passed: bool,
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

impl Check {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self { name, passed: true, detail: detail.into(), hint: None }
    }

    fn fail(name: &'static str, detail: impl Into<String>, hint: &'static str) -> Self {
        Self { name, passed: false, detail: detail.into(), hint: Some(hint) }
    }
}

pub async fn execute(args: DoctorArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut checks = Vec::new();

    // Artifacts
    for (name, path) in [
        ("Model file", &config.model_path.value),
        ("Columns file", &config.columns_path.value),
    ] {
        if path.is_file() {
            checks.push(Check::pass(name, path.display().to_string()));
        } else {
            checks.push(Check::fail(
                name,
                format!("{} not found", path.display()),
                "Pass --model/--columns or set HOMESCOUT_MODEL_PATH/HOMESCOUT_COLUMNS_PATH",
            ));
        }
    }

    match load_predictor(config) {
        Ok(predictor) => {
            let layout = predictor.layout();
            checks.push(Check::pass(
                "Price model",
                format!("{} features, {} locations", layout.len(), layout.locations().len()),
            ));
        }
        Err(e) => checks.push(Check::fail(
            "Price model",
            format!("{:#}", e),
            "Make sure the model width matches the column list",
        )),
    }

    // Database
    match config.database_url.value.as_deref() {
        None => checks.push(Check::fail(
            "DATABASE_URL",
            "not set, search history is kept in memory only",
            "export DATABASE_URL=\"postgresql://localhost/homescout\"",
        )),
        Some(url) => {
            let detail = if args.verbose {
                redact_password(url)
            } else {
                "set".to_string()
            };
            checks.push(Check::pass("DATABASE_URL", detail));

            match connect_postgres(Some(url)).await {
                Ok(store) => {
                    checks.push(Check::pass("PostgreSQL", "connected"));
                    match store.has_schema().await {
                        Ok(true) => {
                            let count = store.count().await.map(|n| n.to_string()).unwrap_or_else(|e| e.to_string());
                            checks.push(Check::pass("searches table", format!("{} rows", count)));
                        }
                        Ok(false) => checks.push(Check::fail(
                            "searches table",
                            "missing",
                            "Run: homescout db init",
                        )),
                        Err(e) => checks.push(Check::fail("searches table", e.to_string(), "Run: homescout db init")),
                    }
                }
                Err(e) => checks.push(Check::fail(
                    "PostgreSQL",
                    format!("{:#}", e).lines().next().unwrap_or_default().to_string(),
                    "Ensure PostgreSQL is running and DATABASE_URL is correct",
                )),
            }
        }
    }

    if output.is_json() {
        return output.result(&checks);
    }

    println!("\n{}", style("HomeScout Health Check").bold().underlined());
    println!("{}", style("═".repeat(60)).dim());

    for check in &checks {
        let mark = if check.passed { style("✓").green() } else { style("✗").red() };
        println!("{} {}: {}", mark, check.name, check.detail);
        if let Some(hint) = check.hint {
            println!("  → {}", hint);
        }
    }

    if args.verbose {
        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", style("─".repeat(60)).dim());
        let map = config.to_inspection_map();
        let mut keys: Vec<_> = map.keys().collect();
        keys.sort();
        for key in keys {
            let (value, source) = &map[key];
            let source = match source {
                ConfigSource::Default => "default",
                ConfigSource::File => "file",
                ConfigSource::Environment => "env",
                ConfigSource::Cli => "cli",
            };
            println!("  {} = {} ({})", key, value, style(source).dim());
        }
    }

    let passed = checks.iter().filter(|c| c.passed).count();
    println!();
    println!("{} / {} checks passed", passed, checks.len());
    Ok(())
}
