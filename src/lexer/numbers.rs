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
 * Numeric literal scanners.
 *
 * Recognition order, first match wins:
 *
 *   octal (0o17) → hexadecimal (0x1F) → binary (0b101) → decimal
 *
 * Every scanner works on raw bytes starting at the cursor and returns the
 * converted value together with the byte offset just past the literal, or
 * `None` so the next scanner can try.
 *
 * ==========================================================================
 */

/// Tries every numeric literal form at `start`.
pub fn scan_number(bytes: &[u8], start: usize) -> Option<(f64, usize)> {
    scan_prefixed(bytes, start, b'o', 8)
        .or_else(|| scan_prefixed(bytes, start, b'x', 16))
        .or_else(|| scan_prefixed(bytes, start, b'b', 2))
        .or_else(|| scan_decimal(bytes, start))
}

/// Scans `0<marker>` followed by one or more digits of `radix`.
///
/// The value is accumulated in `f64`, so very long literals round instead
/// of overflowing.
fn scan_prefixed(bytes: &[u8], start: usize, marker: u8, radix: u32) -> Option<(f64, usize)> {
    if bytes.get(start) != Some(&b'0') || bytes.get(start + 1) != Some(&marker) {
        return None;
    }

    let mut end = start + 2;
    let mut value = 0.0_f64;

    while let Some(digit) = bytes.get(end).and_then(|b| (*b as char).to_digit(radix)) {
        value = value * f64::from(radix) + f64::from(digit);
        end += 1;
    }

    if end == start + 2 {
        return None;
    }

    Some((value, end))
}

/// Scans a decimal run: digits plus at most one `.` and at most one `e`,
/// in any position.
///
/// The run must open with a digit, or with a `.` directly followed by a
/// digit. A sign is never part of the run, so `1e-5` stops before the `-`.
fn scan_decimal(bytes: &[u8], start: usize) -> Option<(f64, usize)> {
    let opens = match bytes.get(start) {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'.') => bytes.get(start + 1).is_some_and(|b| b.is_ascii_digit()),
        _ => false,
    };

    if !opens {
        return None;
    }

    let mut end = start;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            b'e' if !seen_exp => seen_exp = true,
            _ => break,
        }
        end += 1;
    }

    // The run is pure ASCII, so slicing the bytes back into a str is safe.
    let text = std::str::from_utf8(&bytes[start..end]).ok()?;
    Some((convert_decimal(text), end))
}

/// Converts the longest convertible prefix of `text`, the way C's `strtod`
/// does. `"1e"` becomes `1.0`, `"2.5e.1"` becomes `2.5`.
pub fn convert_decimal(text: &str) -> f64 {
    (1..=text.len())
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .unwrap_or(0.0)
}
