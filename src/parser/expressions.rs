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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire expression grammar**, evaluated while
 * it is recognized. No tree is built: every procedure returns the `f64`
 * value of the text it consumed.
 *
 * Precedence, lowest to highest:
 *
 *   expr → term → factor → unary → power
 *
 *   expr    := term (('+' | '-') term)*
 *   term    := factor (('*' | '/') factor)*
 *   factor  := ('-')* unary ('!')*
 *   unary   := power ('^' power)*
 *   power   := Number | Identifier | Identifier '(' expr ')' | '(' expr ')'
 *
 * Two rules differ from textbook arithmetic and are kept on purpose:
 *  - `^` groups to the left: 2^2^3 is (2^2)^3 = 64
 *  - leading minus wraps the whole power chain: -2^2 is -(2^2) = -4
 *
 * ==========================================================================
 */

use log::trace;

use crate::error::CalcError;
use crate::lexer::token::Token;
use crate::parser::parser::Parser;
use crate::prototypes::math::math_factorial;
use crate::prototypes::{resolve, Symbol};

impl Parser<'_> {
    /// expr → term ( ( "+" | "-" ) term )*
    pub(crate) fn expr(&mut self) -> f64 {
        let mut value = self.term();

        loop {
            if self.match_token(&Token::Plus) {
                value += self.term();
            } else if self.match_token(&Token::Minus) {
                value -= self.term();
            } else {
                break;
            }
        }

        value
    }

    /// term → factor ( ( "*" | "/" ) factor )*
    fn term(&mut self) -> f64 {
        let mut value = self.factor();

        loop {
            if self.match_token(&Token::Star) {
                value *= self.factor();
            } else if self.match_token(&Token::Slash) {
                value /= self.factor();
            } else {
                break;
            }
        }

        value
    }

    /// factor → ( "-" )* unary ( "!" )*
    ///
    /// The sign is applied before any factorial, so `-1!` is `(-1)!` = 1.
    fn factor(&mut self) -> f64 {
        let mut negate = false;

        while self.match_token(&Token::Minus) {
            negate = !negate;
        }

        let mut value = self.unary();

        if negate {
            value = -value;
        }

        while self.match_token(&Token::Bang) {
            value = math_factorial(value);
        }

        value
    }

    /// unary → power ( "^" power )*
    ///
    /// Left-associative: each new exponent applies to the running result.
    fn unary(&mut self) -> f64 {
        let mut value = self.power();

        while self.match_token(&Token::Caret) {
            value = value.powf(self.power());
        }

        value
    }

    /// power → NUMBER | IDENT | IDENT "(" expr ")" | "(" expr ")"
    ///
    /// Anything else is a parse error worth `0.0`. An unknown name is
    /// consumed; an unexpected symbol is left for the enclosing level.
    fn power(&mut self) -> f64 {
        match self.current.token.clone() {
            Token::Number(value) => {
                self.advance();
                value
            }

            Token::LParen => {
                let span = self.current.span;
                self.advance();
                let value = self.nested_expr(span);
                self.skip_expected(&Token::RParen);
                value
            }

            Token::Identifier(name) => {
                let span = self.current.span;

                match resolve(&name) {
                    Some(Symbol::Constant(value)) => {
                        self.advance();
                        value
                    }

                    Some(Symbol::Function(function)) => {
                        self.advance();
                        self.skip_expected(&Token::LParen);
                        let argument = self.nested_expr(span);
                        self.skip_expected(&Token::RParen);
                        trace!("{}({})", name, argument);
                        function(argument)
                    }

                    None => {
                        self.advance();
                        self.report(CalcError::unknown_identifier(&name, span))
                    }
                }
            }

            other => {
                let span = self.current.span;
                self.report(CalcError::unexpected_token(other, span))
            }
        }
    }
}
