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

use thiserror::Error;

use crate::prototypes::constants::constant_names;
use crate::prototypes::math::function_names;
use crate::span::Span;

/// A recoverable parse error raised by the `power` grammar rule.
///
/// The evaluator never aborts on one of these: the offending subtree
/// evaluates to `0.0` and parsing carries on. The error is collected so the
/// caller can print it (see [`crate::diagnostics::DiagnosticPrinter`]) or,
/// through [`crate::try_evaluate`], treat it as fatal.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("error[{code}]: {message}")]
pub struct CalcError {
    /// Stable error code (`E_SYNTAX`, `E_REFERENCE`)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Location of the offending token
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl CalcError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// A token that cannot start an operand (`)`, `*`, end of input, ...).
    pub fn unexpected_token(found: impl std::fmt::Display, span: Span) -> Self {
        Self::new("E_SYNTAX", format!("parse error: unexpected {}", found), span)
            .with_help("expected a number, a name, or '('")
    }

    /// Parentheses or function calls nested past `limit` levels.
    pub fn nested_too_deeply(limit: usize, span: Span) -> Self {
        Self::new("E_SYNTAX", "parse error: expression nested too deeply", span)
            .with_help(format!("at most {} levels of '(' or function calls are allowed", limit))
    }

    /// A word that is neither a constant nor a function.
    pub fn unknown_identifier(name: &str, span: Span) -> Self {
        Self::new(
            "E_REFERENCE",
            format!("parse error: unknown name '{}'", name),
            span,
        )
        .with_help(format!(
            "known constants: {}; known functions: {}",
            constant_names().join(", "),
            function_names().join(", ")
        ))
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_code_and_message() {
        let err = CalcError::unknown_identifier("foo", Span::new(0, 3));
        assert_eq!(err.to_string(), "error[E_REFERENCE]: parse error: unknown name 'foo'");
        let help = err.help.unwrap_or_default();
        assert!(help.contains("e, pi"));
        assert!(help.contains("sqrt"));
    }

    #[test]
    fn nesting_error_names_the_limit() {
        let err = CalcError::nested_too_deeply(256, Span::new(0, 1));
        assert_eq!(err.code, "E_SYNTAX");
        assert!(err.help.unwrap_or_default().contains("256"));
    }

    #[test]
    fn unexpected_token_is_a_syntax_error() {
        let err = CalcError::unexpected_token("')'", Span::new(4, 1));
        assert_eq!(err.code, "E_SYNTAX");
        assert_eq!(err.span, Span::new(4, 1));
    }
}
