//! Inserts and then removes `1..=N`, checking the tree along the way.
//!
//! Usage: `cargo run --example smoke -- [N] [LEVEL]`

use log::{error, info, LevelFilter};
use rb_ordered_tree::OrderedTree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::ExitCode;

fn initialize_logging(level: LevelFilter) {
    let _ignore = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let count: u32 = args.next().and_then(|n| n.parse().ok()).unwrap_or(256);
    let level = args
        .next()
        .and_then(|l| l.parse().ok())
        .unwrap_or(LevelFilter::Info);
    initialize_logging(level);

    let mut tree = OrderedTree::new();
    for k in 1..=count {
        let _pos = tree.insert(k);
    }
    info!(
        "inserted {} keys, height {}, first {:?}, last {:?}",
        tree.len(),
        tree.height(),
        tree.first(),
        tree.last()
    );

    if !tree.iter().copied().eq(1..=count) {
        error!("in-order walk does not match 1..={count}");
        return ExitCode::FAILURE;
    }

    for k in 1..=count {
        if !tree.remove(&k) {
            error!("key {k} went missing");
            return ExitCode::FAILURE;
        }
    }
    info!("removed all keys, {} left", tree.len());

    if tree.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
