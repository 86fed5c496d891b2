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

/// The constant table, keyed by lowercase name.
///
/// Built on first use and never mutated afterwards, so every evaluation on
/// every thread reads the same map without locking.
static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(create_constant_table);

fn create_constant_table() -> HashMap<&'static str, f64> {
    let mut constants = HashMap::new();

    // 2.71828182845904523536
    constants.insert("e", std::f64::consts::E);

    // 3.14159265358979323846
    constants.insert("pi", std::f64::consts::PI);

    constants
}

/// Looks up a constant by name, ignoring ASCII case.
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Every constant name, sorted.
pub fn constant_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CONSTANTS.keys().copied().collect();
    names.sort_unstable();
    names
}
