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

use clap::{Parser, ValueEnum};

/// Benchmark an arithmetic expression and print its value.
#[derive(Debug, Parser)]
#[command(
    name = "purrcalc",
    version,
    about = "Evaluate an arithmetic expression, repeatedly, and print the result",
    after_help = r#"Examples:
  purrcalc "2+3*4"                 # 14.00000
  purrcalc -n 1 -p 2 "sqrt(2)"     # 1.41
  purrcalc --json "0x1F + 5!"      # machine-readable report
  purrcalc -- "-2^2"               # expressions starting with '-' go after --
"#
)]
pub struct Cli {
    /// Expression to evaluate
    pub expression: String,

    /// Number of evaluations to run
    #[arg(
        short = 'n',
        long,
        env = "PURRCALC_ITERATIONS",
        default_value_t = 100_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub iterations: u64,

    /// Decimals printed after the point
    #[arg(short, long, default_value_t = 5)]
    pub precision: usize,

    /// Print a JSON report instead of the bare value
    #[arg(long)]
    pub json: bool,

    /// Fail on the first parse error instead of treating it as 0
    #[arg(long)]
    pub strict: bool,

    /// Log level; when omitted, `RUST_LOG` decides (default: warn)
    #[arg(long, value_enum, env = "PURRCALC_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How the output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain { precision: usize },
    Json,
}

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub expression: String,
    pub iterations: u64,
    pub output: OutputFormat,
    pub strict: bool,
    /// Explicit level from the command line. `None` leaves `RUST_LOG` in
    /// charge.
    pub log_level: Option<log::LevelFilter>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let output = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain {
                precision: cli.precision,
            }
        };

        Self {
            expression: cli.expression,
            iterations: cli.iterations,
            output,
            strict: cli.strict,
            log_level: cli.log_level.map(Into::into),
        }
    }
}
