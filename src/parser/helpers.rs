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

use crate::error::CalcError;
use crate::lexer::token::{Spanned, Token};
use crate::parser::parser::{Parser, MAX_DEPTH};
use crate::span::Span;

impl Parser<'_> {
    /// Replaces the lookahead with the next token and returns the one that
    /// was consumed.
    pub(crate) fn advance(&mut self) -> Spanned {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Checks the lookahead without consuming it.
    pub(crate) fn check(&self, token: &Token) -> bool {
        self.current.token == *token
    }

    /// Consumes the lookahead if it is `token`.
    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the lookahead whatever it is, where the grammar expects
    /// `expected` (the `(` after a function name, or a closing `)`).
    ///
    /// The token is not verified. A mismatch is only logged, so inputs such
    /// as `sin+1` keep evaluating the way they always have.
    pub(crate) fn skip_expected(&mut self, expected: &Token) {
        let skipped = self.advance();

        if skipped.token != *expected {
            debug!(
                "expected {} at byte {}, skipped {} instead",
                expected, skipped.span.offset, skipped.token
            );
        }
    }

    /// Returns true if the lookahead is end of input.
    pub(crate) fn at_end(&self) -> bool {
        self.check(&Token::End)
    }

    /// Parses a nested `expr` (inside `(` or a function argument), or
    /// reports the one that would push past [`MAX_DEPTH`].
    pub(crate) fn nested_expr(&mut self, span: Span) -> f64 {
        if self.depth >= MAX_DEPTH {
            return self.report(CalcError::nested_too_deeply(MAX_DEPTH, span));
        }

        self.depth += 1;
        let value = self.expr();
        self.depth -= 1;
        value
    }

    /// Records a recovered parse error. The caller substitutes `0.0` for
    /// the failed operand.
    pub(crate) fn report(&mut self, error: CalcError) -> f64 {
        debug!("{}", error);
        self.diagnostics.push(error);
        0.0
    }
}
