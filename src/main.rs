//! Builds a tree from the command line, deletes some keys from it and prints every traversal.
//!
//! With no arguments this inserts `50 30 20 40 70 60 80`, deletes `20 30 50` and prints:
//!
//! ```text
//! In-order traversal:
//! 40 60 70 80
//! Pre-order traversal:
//! 60 40 70 80
//! ...
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use simple_logger::SimpleLogger;

use bst::{Order, Tree};

/// Walk a binary search tree in every order.
#[derive(Parser)]
#[command(name = "bst", version, about)]
struct Cli {
    /// Keys to insert, in insertion order.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [50, 30, 20, 40, 70, 60, 80]
    )]
    insert: Vec<i32>,

    /// Keys to delete once everything has been inserted.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [20, 30, 50]
    )]
    delete: Vec<i32>,

    /// Only print the recursive traversals.
    #[arg(long)]
    recursive: bool,

    /// Log every insert and delete.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")?;

    let mut tree = Tree::new();
    for &key in &cli.insert {
        if tree.insert(key) {
            debug!("inserted {}", key);
        } else {
            debug!("{} is already in the tree", key);
        }
    }
    info!("built tree of {} keys, height {}", tree.len(), tree.height());

    for key in &cli.delete {
        if tree.delete(key) {
            debug!("deleted {}", key);
        } else {
            debug!("{} is not in the tree", key);
        }
    }
    info!(
        "{} keys left, height {}, {} leaves",
        tree.len(),
        tree.height(),
        tree.leaf_count()
    );

    tree.validate().context("tree is no longer a search tree")?;

    for order in Order::ALL {
        println!("{}", header(order, true));
        println!("{}", render(&tree, order, true));
    }

    if !cli.recursive {
        for order in [Order::InOrder, Order::PreOrder, Order::PostOrder] {
            println!("{}", header(order, false));
            println!("{}", render(&tree, order, false));
        }
    }

    Ok(())
}

fn header(order: Order, recursive: bool) -> String {
    if recursive {
        format!("{} traversal:", order)
    } else {
        format!("{} traversal (Iterative):", order)
    }
}

/// Joins the keys of one traversal with single spaces.
fn render(tree: &Tree<i32>, order: Order, recursive: bool) -> String {
    let mut keys = Vec::with_capacity(tree.len());
    let push = |key: &i32| keys.push(key.to_string());
    if recursive {
        tree.traverse_recursive(order, push);
    } else {
        tree.traverse(order, push);
    }

    keys.join(" ")
}
