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

use std::fmt;

use crate::span::Span;

/// A lexical token of the expression language.
///
/// # Pipeline Role
/// ```text
/// Source Text → Lexer → Token → Parser (evaluates in place)
/// ```
///
/// Tokens are transient. The parser holds exactly one of them (the
/// lookahead) and replaces it every time it advances.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// End-of-input marker. Returned again on every call once the source is
    /// exhausted.
    End,

    /// A numeric literal, already converted.
    ///
    /// Includes:
    /// - Decimal values: `42`, `3.14`, `2e3`
    /// - Octal values: `0o17`
    /// - Hexadecimal values: `0x1F`
    /// - Binary values: `0b101`
    Number(f64),

    /// A run of ASCII letters, kept verbatim. Resolution against the
    /// constant and function tables happens in the parser.
    Identifier(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Bang,
    LParen,
    RParen,
}

impl Token {
    /// Maps a punctuation character to its token.
    pub fn from_symbol(ch: char) -> Option<Token> {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '!' => Token::Bang,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return None,
        };
        Some(token)
    }
}

impl fmt::Display for Token {
    /// Formats a token for diagnostics: what the user wrote, not the
    /// internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::End => write!(f, "end of input"),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Identifier(name) => write!(f, "'{}'", name),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Caret => write!(f, "'^'"),
            Token::Bang => write!(f, "'!'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}
