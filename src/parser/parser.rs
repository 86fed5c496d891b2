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

use log::debug;

use crate::diagnostics::DiagnosticPrinter;
use crate::error::CalcError;
use crate::lexer::lexer::Lexer;
use crate::lexer::token::Spanned;

/// The recursive-descent parser/evaluator.
///
/// This structure is the whole parse context of one evaluation:
/// - The lexer, which owns the cursor into the source
/// - The current lookahead token
/// - The diagnostics collected so far
///
/// There is no global state. Every call to [`evaluate`] builds its own
/// `Parser`, so independent evaluations can run concurrently.
///
/// The grammar itself lives in `expressions.rs` and the token plumbing in
/// `helpers.rs`, both as additional `impl Parser` blocks.
pub struct Parser<'src> {
    /// On-demand token source.
    pub(crate) lexer: Lexer<'src>,

    /// The first token not yet consumed by any grammar procedure.
    pub(crate) current: Spanned,

    /// Recovered parse errors, in source order.
    pub(crate) diagnostics: Vec<CalcError>,

    /// How many `(` groups and function arguments enclose the lookahead.
    pub(crate) depth: usize,
}

/// Deepest nesting of parentheses and function arguments accepted. Anything
/// deeper is reported and counts as `0.0` instead of exhausting the stack.
pub const MAX_DEPTH: usize = 256;

/// The outcome of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value. Subtrees that failed to parse contribute `0.0`.
    pub value: f64,

    /// Every parse error encountered, in the order they were raised.
    pub diagnostics: Vec<CalcError>,
}

impl Evaluation {
    /// `true` if the expression parsed without a single error.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Evaluates `expression` and returns its value.
///
/// Parse errors never abort evaluation: each is printed to stderr as a
/// diagnostic, the offending piece counts as `0.0`, and parsing continues.
/// The printer is the only error channel; the log only sees `debug!`.
///
/// # Example
/// ```
/// assert_eq!(purrcalc::evaluate("2+3*4"), 14.0);
/// assert_eq!(purrcalc::evaluate("2^2^3"), 64.0);
/// ```
pub fn evaluate(expression: &str) -> f64 {
    let evaluation = evaluate_with_diagnostics(expression);

    if !evaluation.is_clean() {
        let printer = DiagnosticPrinter::new(expression);
        for error in &evaluation.diagnostics {
            debug!("{} in {:?}", error, expression);
            printer.print(error);
        }
    }

    evaluation.value
}

/// Evaluates `expression`, returning the diagnostics instead of printing
/// them.
pub fn evaluate_with_diagnostics(expression: &str) -> Evaluation {
    let mut parser = Parser::new(expression);
    let value = parser.parse();

    Evaluation {
        value,
        diagnostics: parser.diagnostics,
    }
}

/// Strict evaluation: the first parse error is returned as `Err` rather than
/// being recovered to `0.0`.
///
/// # Example
/// ```
/// assert!(purrcalc::try_evaluate("2*foo").is_err());
/// assert_eq!(purrcalc::try_evaluate("0b101").ok(), Some(5.0));
/// ```
pub fn try_evaluate(expression: &str) -> Result<f64, CalcError> {
    let evaluation = evaluate_with_diagnostics(expression);

    match evaluation.diagnostics.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(evaluation.value),
    }
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` with the first token already loaded
    /// as lookahead.
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();

        Self {
            lexer,
            current,
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    /// Parses and evaluates one expression.
    ///
    /// Tokens left over after the outermost expression are ignored.
    pub fn parse(&mut self) -> f64 {
        let value = self.expr();

        if !self.at_end() {
            debug!(
                "ignoring trailing input from byte {} in {:?}",
                self.current.span.offset,
                self.lexer.source()
            );
        }

        value
    }

    /// Parse errors recorded so far.
    pub fn diagnostics(&self) -> &[CalcError] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_expression_has_no_diagnostics() {
        let evaluation = evaluate_with_diagnostics("1+2");
        assert_eq!(evaluation.value, 3.0);
        assert!(evaluation.is_clean());
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let evaluation = evaluate_with_diagnostics("2 3");
        assert_eq!(evaluation.value, 2.0);
        assert!(evaluation.is_clean());

        assert_eq!(evaluate("(1+2))*5"), 3.0);
    }

    #[test]
    fn try_evaluate_reports_the_first_error() {
        let err = try_evaluate("foo+bar").unwrap_err();
        assert_eq!(err.code, "E_REFERENCE");
        assert!(err.message.contains("foo"));
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let source = format!("{}7{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let evaluation = evaluate_with_diagnostics(&source);
        assert_eq!(evaluation.value, 7.0);
        assert!(evaluation.is_clean());
    }

    #[test]
    fn nesting_past_the_limit_is_one_error() {
        let depth = MAX_DEPTH + 1;
        let source = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
        let evaluation = evaluate_with_diagnostics(&source);
        assert_eq!(evaluation.value, 0.0);
        assert_eq!(evaluation.diagnostics.len(), 1);
        assert_eq!(evaluation.diagnostics[0].code, "E_SYNTAX");
    }

    #[test]
    fn chained_function_names_count_as_nesting() {
        let source = "sin ".repeat(MAX_DEPTH * 4) + "1";
        let evaluation = evaluate_with_diagnostics(&source);
        assert_eq!(evaluation.diagnostics.len(), 1);
        assert!(evaluation.diagnostics[0].message.contains("nested too deeply"));
    }

    #[test]
    fn parser_exposes_its_diagnostics() {
        let mut parser = Parser::new("1+");
        assert_eq!(parser.parse(), 1.0);
        assert_eq!(parser.diagnostics().len(), 1);
    }
}
