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
use std::thread;

use purrcalc::{evaluate, evaluate_with_diagnostics, try_evaluate, MAX_DEPTH};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn precedence() {
    assert_eq!(evaluate("2+3*4"), 14.0);
    assert_eq!(evaluate("2*3+4"), 10.0);
    assert_eq!(evaluate("(2+3)*4"), 20.0);
    assert_eq!(evaluate("7-2*3"), 1.0);
}

#[test]
fn exponentiation_groups_left_to_right() {
    assert_eq!(evaluate("2^2^3"), 64.0);
    assert_eq!(evaluate("2^3^2"), 64.0);
    assert_eq!(evaluate("2^(2^3)"), 256.0);
}

#[test]
fn factorial() {
    assert_eq!(evaluate("5!"), 120.0);
    assert_eq!(evaluate("0!"), 1.0);
    assert_eq!(evaluate("-1!"), 1.0);
    assert_eq!(evaluate("4.7!"), 24.0);
    assert_eq!(evaluate("171!"), 0.0);
}

#[test]
fn functions() {
    assert_eq!(evaluate("sqrt(16)"), 4.0);
    assert_eq!(evaluate("sin(0)"), 0.0);
    assert_eq!(evaluate("floor(2.7) + ceil(2.2)"), 5.0);
    assert_close(evaluate("cos(pi)"), -1.0);
    assert_close(evaluate("ln(e^2)"), 2.0);
    assert_close(evaluate("gamma(4)"), 6.0);
    assert_close(evaluate("exp(0) + significand(12)"), 2.5);
}

#[test]
fn names_are_case_insensitive() {
    assert_eq!(evaluate("SQRT(16)"), 4.0);
    assert_eq!(evaluate("Pi"), std::f64::consts::PI);
}

#[test]
fn numeric_bases() {
    assert_eq!(evaluate("0x1F"), 31.0);
    assert_eq!(evaluate("0o17"), 15.0);
    assert_eq!(evaluate("0b101"), 5.0);
    assert_eq!(evaluate("0xff - 0b11111111"), 0.0);
}

#[test]
fn unary_minus() {
    assert_eq!(evaluate("--3"), 3.0);
    assert_eq!(evaluate("-2^2"), -4.0);
    assert_eq!(evaluate("3--2"), 5.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate("  1 +\t2 *\n3 "), 7.0);
}

#[test]
fn malformed_input_yields_zero_with_a_diagnostic() {
    assert_eq!(evaluate("@"), 0.0);

    let evaluation = evaluate_with_diagnostics("@");
    assert_eq!(evaluation.value, 0.0);
    assert_eq!(evaluation.diagnostics.len(), 1);

    let evaluation = evaluate_with_diagnostics("");
    assert_eq!(evaluation.value, 0.0);
    assert!(!evaluation.is_clean());
}

#[test]
fn runaway_nesting_is_an_error_not_a_crash() {
    let source = "(".repeat(100_000) + "1";
    let evaluation = evaluate_with_diagnostics(&source);
    assert_eq!(evaluation.value, 0.0);
    assert_eq!(evaluation.diagnostics.len(), 1);
    assert!(try_evaluate(&source).is_err());
}

#[test]
fn deep_but_bounded_nesting_runs_on_a_small_stack() {
    let handle = thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let wide = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
            let chained = "sqrt ".repeat(5000) + "16";
            (
                evaluate_with_diagnostics(&wide),
                evaluate_with_diagnostics(&chained),
            )
        })
        .expect("failed to spawn evaluator thread");

    let (wide, chained) = handle.join().expect("evaluator thread overflowed");
    assert_eq!(wide.value, 0.0);
    assert_eq!(wide.diagnostics.len(), 1);
    assert_eq!(chained.diagnostics.len(), 1);

    let limit = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(try_evaluate(&limit), Ok(1.0));
}

#[test]
fn parsing_continues_after_an_error() {
    let evaluation = evaluate_with_diagnostics("1 + nope * 3 + 4");
    assert_eq!(evaluation.value, 5.0);
    assert_eq!(evaluation.diagnostics.len(), 1);
}

#[test]
fn strict_evaluation_rejects_what_evaluate_recovers() {
    assert_eq!(try_evaluate("2+3*4"), Ok(14.0));
    assert!(try_evaluate("2+").is_err());
    assert!(try_evaluate("zzz").is_err());
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let expression = "sin(1.3)^2 + cosh(0.5)/3 - lgamma(7.5) + 0x10!";
    let first = evaluate(expression).to_bits();
    for _ in 0..100 {
        assert_eq!(evaluate(expression).to_bits(), first);
    }
}

#[test]
fn rand_is_bounded() {
    for _ in 0..200 {
        let value = evaluate("rand(5)");
        assert!((0.0..5.0).contains(&value), "{value} out of range");
    }
}

#[test]
fn evaluations_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let expression = format!("{i}*2+1");
                (0..500).map(|_| evaluate(&expression)).last()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().expect("evaluator thread panicked");
        assert_eq!(value, Some(i as f64 * 2.0 + 1.0));
    }
}
