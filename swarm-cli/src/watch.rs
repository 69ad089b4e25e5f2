//! Re-run a scene whenever its file is modified.

use crate::{run_file, RunArgs};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::sync::mpsc;

pub fn watch_file(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(move |res| {
        // The receiver only goes away on shutdown
        let _ = tx.send(res);
    })?;
    watcher.watch(&args.file, RecursiveMode::NonRecursive)?;
    tracing::info!(file = %args.file.display(), "watching scene");

    report(args);

    for event in rx {
        match event {
            Ok(Event {
                kind: EventKind::Modify(_),
                paths,
                ..
            }) => {
                if paths.iter().any(|p| p.ends_with(&args.file) || args.file.ends_with(p)) {
                    println!("--- {} changed", args.file.display());
                    report(args);
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("file watcher error: {}", e);
            }
        }
    }

    Ok(())
}

/// Run once, keeping the watcher alive on bad input
fn report(args: &RunArgs) {
    if let Err(e) = run_file(args) {
        eprintln!("Error: {}", e);
    }
}
