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

/// Named constants (`e`, `pi`).
pub mod constants;

/// Native single-argument math functions (`sin`, `sqrt`, `gamma`, `rand`, ...).
pub mod math;

pub use constants::lookup_constant;
pub use math::{lookup_function, MathFn};

/// What a word in the expression refers to.
#[derive(Debug, Clone, Copy)]
pub enum Symbol {
    Constant(f64),
    Function(MathFn),
}

/// Resolves `name` case-insensitively, constants first.
pub fn resolve(name: &str) -> Option<Symbol> {
    lookup_constant(name)
        .map(Symbol::Constant)
        .or_else(|| lookup_function(name).map(Symbol::Function))
}
