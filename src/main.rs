/*
 * ==========================================================================
 * PURRCALC - Arithmetic with Claws!
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * 
 * License:
 * This file is part of the PURRCALC expression evaluator project.
 * 
 * PURRCALC is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;

use purrcalc::diagnostics::DiagnosticPrinter;
use purrcalc::evaluate_with_diagnostics;

mod config;

use config::{Cli, Config, OutputFormat};

/// Machine-readable summary printed by `--json`.
#[derive(Debug, Serialize)]
struct Report<'a> {
    expression: &'a str,
    result: f64,
    iterations: u64,
    elapsed_ms: f64,
}

fn main() -> Result<ExitCode> {
    let config = Config::from(Cli::parse());

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = config.log_level {
        logger.filter_level(level);
    }
    logger.init();

    info!("purrcalc v{} starting", env!("CARGO_PKG_VERSION"));

    run(&config)
}

fn run(config: &Config) -> Result<ExitCode> {
    let expression = config.expression.as_str();
    let started = Instant::now();

    // The first pass reports diagnostics; the benchmark loop stays quiet.
    let first = first_pass(expression, config.strict, &mut io::stderr().lock())
        .context("failed to write diagnostics")?;

    let Some(mut result) = first else {
        return Ok(ExitCode::FAILURE);
    };

    for _ in 1..config.iterations {
        result = evaluate_with_diagnostics(expression).value;
    }

    let elapsed = started.elapsed();
    debug!(
        "{} evaluations of {:?} took {:?}",
        config.iterations, expression, elapsed
    );

    match config.output {
        OutputFormat::Plain { precision } => {
            println!("{:.*}", precision, result);
        }
        OutputFormat::Json => {
            let report = Report {
                expression,
                result,
                iterations: config.iterations,
                elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            };
            let json = serde_json::to_string(&report).context("failed to encode report")?;
            println!("{}", json);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Evaluates `expression` once and writes each diagnostic to `out` exactly
/// once. In strict mode only the first is written and `None` is returned.
fn first_pass(expression: &str, strict: bool, out: &mut impl Write) -> io::Result<Option<f64>> {
    let evaluation = evaluate_with_diagnostics(expression);
    let printer = DiagnosticPrinter::new(expression);

    if strict {
        if let Some(error) = evaluation.diagnostics.first() {
            printer.write(out, error)?;
            return Ok(None);
        }
    }

    for error in &evaluation.diagnostics {
        printer.write(out, error)?;
    }

    Ok(Some(evaluation.value))
}
