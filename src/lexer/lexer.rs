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

use log::trace;

use crate::lexer::numbers::scan_number;
use crate::lexer::token::{Spanned, Token};
use crate::span::Span;

/// Produces the next token at or after `cursor`, together with the cursor
/// just past it.
///
/// # Behavior
/// - Numbers are tried first (octal, hexadecimal, binary, decimal)
/// - A run of ASCII letters becomes an `Identifier`
/// - `+ - * / ^ ! ( )` map to their punctuation tokens
/// - Anything else, whitespace included, is skipped one character at a time
/// - Past the end, `Token::End` is returned and the cursor stays put
///
/// The cursor never moves backwards.
pub fn next_token(source: &str, cursor: usize) -> (Spanned, usize) {
    let bytes = source.as_bytes();
    let mut current = cursor;

    while current < bytes.len() {
        let start = current;

        if let Some((value, end)) = scan_number(bytes, start) {
            return (spanned(Token::Number(value), start, end), end);
        }

        let byte = bytes[start];

        if byte.is_ascii_alphabetic() {
            let end = start
                + bytes[start..]
                    .iter()
                    .take_while(|b| b.is_ascii_alphabetic())
                    .count();
            let name = source[start..end].to_string();
            return (spanned(Token::Identifier(name), start, end), end);
        }

        if let Some(token) = Token::from_symbol(byte as char) {
            return (spanned(token, start, start + 1), start + 1);
        }

        // Unrecognized: drop the whole (possibly multi-byte) character.
        let width = source[start..].chars().next().map_or(1, char::len_utf8);
        trace!("skipping {:?} at byte {}", &source[start..start + width], start);
        current += width;
    }

    (
        Spanned {
            token: Token::End,
            span: Span::end_of(source),
        },
        bytes.len().max(cursor),
    )
}

fn spanned(token: Token, start: usize, end: usize) -> Spanned {
    Spanned {
        token,
        span: Span::new(start, end - start),
    }
}

/// On-demand tokenizer over a borrowed expression.
///
/// The lexer never materializes a token list. It owns only a byte cursor
/// into the source; each call to [`Lexer::next_token`] scans exactly one
/// token and moves the cursor past it.
pub struct Lexer<'src> {
    source: &'src str,
    current: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self { source, current: 0 }
    }

    /// Scans and returns the next token, advancing the cursor.
    pub fn next_token(&mut self) -> Spanned {
        let (spanned, next) = next_token(self.source, self.current);
        trace!("token {:?} at {:?}", spanned.token, spanned.span);
        self.current = next;
        spanned
    }

    /// Current byte offset into the source.
    pub fn position(&self) -> usize {
        self.current
    }

    /// The text being scanned.
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned;

    /// Yields tokens up to, but not including, `Token::End`.
    fn next(&mut self) -> Option<Spanned> {
        let spanned = Lexer::next_token(self);
        match spanned.token {
            Token::End => None,
            _ => Some(spanned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Lexer::new(source).map(|s| s.token).collect()
    }

    #[test]
    fn scans_a_full_expression() {
        assert_eq!(
            tokens("2*(sin(pi)+0x10)!"),
            vec![
                Token::Number(2.0),
                Token::Star,
                Token::LParen,
                Token::Identifier("sin".into()),
                Token::LParen,
                Token::Identifier("pi".into()),
                Token::RParen,
                Token::Plus,
                Token::Number(16.0),
                Token::RParen,
                Token::Bang,
            ]
        );
    }

    #[test]
    fn whitespace_and_junk_are_dropped() {
        assert_eq!(
            tokens(" 1 @ + # 2 ,"),
            vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]
        );
    }

    #[test]
    fn multibyte_junk_is_skipped_whole() {
        assert_eq!(tokens("π1"), vec![Token::Number(1.0)]);
    }

    #[test]
    fn identifiers_stop_at_digits_and_underscores() {
        assert_eq!(
            tokens("ab1_cd"),
            vec![
                Token::Identifier("ab".into()),
                Token::Number(1.0),
                Token::Identifier("cd".into()),
            ]
        );
    }

    #[test]
    fn exponent_sign_becomes_separate_tokens() {
        assert_eq!(
            tokens("1e-5"),
            vec![Token::Number(1.0), Token::Minus, Token::Number(5.0)]
        );
    }

    #[test]
    fn end_repeats_and_cursor_holds() {
        let mut lexer = Lexer::new("7");
        assert_eq!(lexer.next_token().token, Token::Number(7.0));
        assert_eq!(lexer.next_token().token, Token::End);
        assert_eq!(lexer.next_token().token, Token::End);
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn spans_cover_the_lexeme() {
        let (first, cursor) = next_token("  0b11+x", 0);
        assert_eq!(first.token, Token::Number(3.0));
        assert_eq!(first.span, Span::new(2, 4));
        assert_eq!(cursor, 6);

        let (second, cursor) = next_token("  0b11+x", cursor);
        assert_eq!(second.token, Token::Plus);
        assert_eq!(cursor, 7);
    }

    #[test]
    fn empty_input_is_immediately_end() {
        let (spanned, cursor) = next_token("", 0);
        assert_eq!(spanned.token, Token::End);
        assert_eq!(cursor, 0);
    }
}
