// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example producing a stream of log messages cycling through the severity levels.
//!
//! Pass a message count as the first argument (defaults to 7). A malformed count is
//! carried through the pipeline as a failure instead of aborting mid-way.

use std::env;

use logbook::{LogLevel, LogMessage};
use upshot::Upshot;

fn main() {
    let requested: Upshot<usize, String> = match env::args().nth(1) {
        Some(arg) => arg.parse::<usize>().map_err(|e| format!("{arg:?}: {e}")).into(),
        None => Upshot::success(7),
    };

    let messages = requested.and_then(|count| {
        let mut level = LogLevel::Debug;
        let mut messages = Vec::with_capacity(count);
        for i in 0..count {
            messages.push(LogMessage {
                level,
                text: format!("Message #{i}"),
            });
            level = level.next();
        }
        messages
    });

    if messages.is_failure() {
        eprintln!("not a message count: {}", messages.error());
        return;
    }

    let messages = messages.into_value();

    if let Some(first) = messages.first() {
        println!("First message is {}", first.text);
    }

    for msg in &messages {
        println!("{} {}", msg.level, msg.text);
    }
}
