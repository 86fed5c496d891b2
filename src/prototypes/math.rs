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

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A native unary math operation.
pub type MathFn = fn(f64) -> f64;

/// The function table, keyed by lowercase name.
static FUNCTIONS: Lazy<HashMap<&'static str, MathFn>> = Lazy::new(create_function_table);

/// Builds the table of every function an expression may call.
///
/// Each entry takes exactly one `f64` and returns one `f64`. Most map
/// straight onto `f64` methods; the C-library specials (`erf`, `gamma`,
/// `rint`, ...) come from `libm`.
fn create_function_table() -> HashMap<&'static str, MathFn> {
    let mut math: HashMap<&'static str, MathFn> = HashMap::new();

    // ---------------------------------------------------------------------
    // Trigonometric
    // ---------------------------------------------------------------------

    math.insert("acos", f64::acos);
    math.insert("asin", f64::asin);
    math.insert("atan", f64::atan);
    math.insert("cos", f64::cos);
    math.insert("sin", f64::sin);
    math.insert("tan", f64::tan);

    // ---------------------------------------------------------------------
    // Hyperbolic
    // ---------------------------------------------------------------------

    math.insert("cosh", f64::cosh);
    math.insert("sinh", f64::sinh);
    math.insert("tanh", f64::tanh);
    math.insert("acosh", f64::acosh);
    math.insert("asinh", f64::asinh);
    math.insert("atanh", f64::atanh);

    // ---------------------------------------------------------------------
    // Exponential, logarithmic & roots
    // ---------------------------------------------------------------------

    math.insert("exp", f64::exp);
    math.insert("ln", f64::ln);
    math.insert("sqrt", f64::sqrt);
    math.insert("cbrt", libm::cbrt);

    // ---------------------------------------------------------------------
    // Rounding & magnitude
    // ---------------------------------------------------------------------

    math.insert("ceil", f64::ceil);
    math.insert("abs", f64::abs);
    math.insert("floor", f64::floor);
    math.insert("rint", libm::rint);
    math.insert("significand", math_significand);

    // ---------------------------------------------------------------------
    // Special functions
    // ---------------------------------------------------------------------

    math.insert("erf", libm::erf);
    math.insert("erfc", libm::erfc);
    math.insert("lgamma", libm::lgamma);
    // `gamma` is the true Γ(x) (C's `tgamma`), not the glibc `gamma`
    // alias of `lgamma`: gamma(5) is 24, lgamma(5) is ln 24.
    math.insert("gamma", libm::tgamma);

    // ---------------------------------------------------------------------
    // Randomness
    // ---------------------------------------------------------------------

    math.insert("rand", math_rand);

    math
}

/// Looks up a function by name, ignoring ASCII case.
pub fn lookup_function(name: &str) -> Option<MathFn> {
    FUNCTIONS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Every function name, sorted. Listed in unknown-name diagnostics.
pub fn function_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FUNCTIONS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Native implementation of `significand(x)`.
///
/// Returns the mantissa of `x` scaled into `[1, 2)`, i.e. `x * 2^-ilogb(x)`.
/// Zero, infinities and NaN come back unchanged.
///
/// # Example
/// ```text
/// significand(10)  → 1.25
/// significand(-8)  → -1
/// ```
pub fn math_significand(x: f64) -> f64 {
    // frexp yields a mantissa in [0.5, 1).
    let (mantissa, _) = libm::frexp(x);
    mantissa * 2.0
}

/// Factorial as applied by the postfix `!` operator.
///
/// The operand is floored first. Anything at or below zero is treated as the
/// base case and yields `1`; anything above `170` (where `n!` no longer fits
/// in an `f64`) yields `0`.
///
/// # Example
/// ```text
/// 5!    → 120
/// 3.9!  → 6
/// -1!   → 1
/// 171!  → 0
/// ```
pub fn math_factorial(x: f64) -> f64 {
    let n = x.floor();

    if n > 170.0 {
        return 0.0;
    }

    if n <= 0.0 {
        return 1.0;
    }

    // NaN falls through both guards; `as` saturates it to 0, the empty product.
    (2..=n as u32).map(f64::from).product()
}

/// Native implementation of `rand(x)`.
///
/// Returns a pseudo-random number uniformly distributed in `[0, x)`.
/// Suitable for non-cryptographic randomness only.
pub fn math_rand(x: f64) -> f64 {
    rand::random::<f64>() * x
}
