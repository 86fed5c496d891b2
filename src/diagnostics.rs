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

use crate::error::CalcError;

/// Renders compiler-style diagnostics for parse errors.
///
/// This printer:
/// - Formats the error header with its stable code
/// - Displays the expression text
/// - Highlights the offending characters with carets (`^`)
/// - Optionally shows a help line
///
/// Output is written to any `io::Write`, so the same rendering backs both
/// stderr reporting and tests.
pub struct DiagnosticPrinter<'src> {
    /// The expression the errors refer to.
    source: &'src str,
}

impl<'src> DiagnosticPrinter<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Prints a formatted diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_REFERENCE]: parse error: unknown name 'foo'
    ///    |
    ///    | 2*foo+1
    ///    |   ^^^
    /// help: known constants: e, pi; known functions: abs, acos, ...
    /// ```
    pub fn print(&self, error: &CalcError) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        // Nothing sensible to do if stderr is gone.
        let _ = self.write(&mut handle, error);
    }

    /// Writes the diagnostic for `error` into `out`.
    pub fn write(&self, out: &mut impl Write, error: &CalcError) -> io::Result<()> {
        writeln!(out, "{}", error)?;
        writeln!(out, "   |")?;
        writeln!(out, "   | {}", self.source)?;

        let column = error.span.column(self.source);
        let width = self
            .source
            .get(error.span.offset..error.span.offset + error.span.len)
            .map(|s| s.chars().count())
            .unwrap_or(0)
            .max(1);

        writeln!(out, "   | {}{}", " ".repeat(column), "^".repeat(width))?;

        if let Some(help) = &error.help {
            writeln!(out, "help: {}", help)?;
        }

        Ok(())
    }

    /// Renders the diagnostic into a `String`.
    pub fn render(&self, error: &CalcError) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write(&mut buf, error);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn caret_underlines_the_offending_name() {
        let source = "2*foo+1";
        let err = CalcError::unknown_identifier("foo", Span::new(2, 3));
        let rendered = DiagnosticPrinter::new(source).render(&err);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[E_REFERENCE]: parse error: unknown name 'foo'");
        assert_eq!(lines[2], "   | 2*foo+1");
        assert_eq!(lines[3], "   |   ^^^");
        assert!(lines[4].starts_with("help:"));
    }

    #[test]
    fn end_of_input_gets_a_single_caret() {
        let source = "1+";
        let err = CalcError::unexpected_token("end of input", Span::end_of(source));
        let rendered = DiagnosticPrinter::new(source).render(&err);
        assert!(rendered.contains("   |   ^\n"));
    }
}
