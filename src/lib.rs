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

//! Arithmetic expression evaluator.
//!
//! ```
//! use purrcalc::evaluate;
//!
//! assert_eq!(evaluate("2+3*4"), 14.0);
//! assert_eq!(evaluate("0x1F + 0o17 + 0b101"), 51.0);
//! assert_eq!(evaluate("5!"), 120.0);
//! ```
//!
//! Pipeline:
//! ```text
//! Source Text → Lexer (one token at a time) → Parser (evaluates as it goes) → f64
//! ```

pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod prototypes;
pub mod span;

pub use error::CalcError;
pub use parser::{evaluate, evaluate_with_diagnostics, try_evaluate, Evaluation, MAX_DEPTH};
