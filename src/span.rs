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

/// A byte range inside the expression text.
///
/// Spans never influence evaluation. They exist so diagnostics can point a
/// caret at the exact characters that caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub offset: usize,

    /// Length in bytes. Zero for the end-of-input marker.
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// The (zero-length) span just past the last character of `source`.
    pub fn end_of(source: &str) -> Self {
        Self::new(source.len(), 0)
    }

    /// Character column of this span within `source`, counted from zero.
    ///
    /// Offsets are bytes; the caret renderer needs characters, so multi-byte
    /// input before the span is collapsed to one column per char.
    pub fn column(&self, source: &str) -> usize {
        let end = self.offset.min(source.len());
        source
            .char_indices()
            .take_while(|(i, _)| *i < end)
            .count()
    }
}
