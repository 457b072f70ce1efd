// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example demonstrating forward chaining through a small parsing pipeline.
//!
//! The same pipeline runs once over well-formed input and once over garbage; the
//! failure short-circuits every later step without any explicit checks in between.

use upshot::Upshot;

fn main() {
    describe(run_pipeline("21"));
    describe(run_pipeline("twenty-one"));
}

/// Parses the input, doubles it, and renders a report line.
fn run_pipeline(input: &str) -> Upshot<String, String> {
    let parsed: Upshot<i32, String> = input
        .parse::<i32>()
        .map_err(|e| format!("{input:?}: {e}"))
        .into();

    parsed.and_then(|x| 2 * x).and_then(|x| format!("doubled to {x}"))
}

/// Prints the terminal state of a pipeline run.
fn describe(outcome: Upshot<String, String>) {
    if outcome.has_value() {
        println!("success: {}", outcome.value());
    } else {
        println!("failure: {}", outcome.error());
    }
}
