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

/// Core parser orchestration:
/// - Owns the `Parser` struct (lookahead, lexer, diagnostics)
/// - Exposes the `evaluate` family of entry points
pub mod parser;

/// Grammar levels, evaluated in place:
/// - expr → term → factor → unary → power
pub mod expressions;

/// Shared parser helpers:
/// - token advancing
/// - lookahead checks
/// - error recording
pub mod helpers;

/// Re-export the public entry points so callers can use
/// `crate::parser::evaluate(...)`.
pub use parser::{evaluate, evaluate_with_diagnostics, try_evaluate, Evaluation, Parser, MAX_DEPTH};
