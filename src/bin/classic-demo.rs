//! classic-demo
//!
//! Walks through each container with a fixed script and logs the results.
//!
//! # Usage
//!
//! ```bash
//! # Scripted walkthrough of the lists, the tree and the round-robin queue
//! RUST_LOG=info cargo run --features demo --bin classic-demo
//!
//! # Interactive parenthesis checker (type q to quit)
//! cargo run --features demo --bin classic-demo -- parens
//! ```

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classic_structures::list::{DoublyLinkedList, SinglyLinkedList};
use classic_structures::queue::RoundRobinQueue;
use classic_structures::stack::check;
use classic_structures::tree::BinarySearchTree;

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classic_demo=info,classic_structures=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(std::env::args().nth(1).as_deref())
}

/// Dispatches on the first command-line argument.
fn run(command: Option<&str>) -> io::Result<()> {
    match command {
        Some("parens") => check_parentheses_interactively(),
        Some(other) => {
            tracing::error!(command = other, "unknown command; expected `parens` or nothing");
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown command `{other}`"),
            ))
        }
        None => {
            run_linked_lists();
            run_binary_search_tree();
            run_round_robin();
            Ok(())
        }
    }
}

fn run_linked_lists() {
    let mut list = DoublyLinkedList::new();
    list.insert_head(5);
    list.insert_tail(3);
    log_rejected(list.insert_after(6, &5));
    list.insert_head(9);
    log_rejected(list.insert_after(8, &5));
    list.insert_tail(4);
    tracing::info!(%list, "doubly-linked list after inserts");

    list.delete_head();
    list.delete_value(&6);
    list.delete_value(&3);
    tracing::info!(%list, "doubly-linked list after deletes");

    list.delete_tail();
    tracing::info!(%list, "doubly-linked list after delete_tail");

    let mut singly: SinglyLinkedList<i32> = [5, 8].into_iter().collect();
    log_rejected(singly.insert_after(6, &5));
    let removed = singly.delete_after(&6);
    tracing::info!(list = %singly, ?removed, "singly-linked list");
}

fn run_binary_search_tree() {
    let mut tree = BinarySearchTree::new();
    for value in [7, 9, 3, 3, 5, 11, 8] {
        if !tree.insert(value) {
            tracing::info!(value, "duplicate discarded");
        }
    }
    tracing::info!(%tree, height = tree.height(), "binary search tree in order");
}

fn run_round_robin() {
    let queue: RoundRobinQueue<&str> = [
        ("Jasper", 3),
        ("Penelope", 1),
        ("Maverick", 4),
        ("Lincoln", 2),
    ]
    .into_iter()
    .collect();

    for (index, entry) in queue.iter().enumerate() {
        match queue.time_to_completion_at(index) {
            Ok(steps) => tracing::info!(name = *entry.identity(), steps, "time to completion"),
            Err(error) => tracing::warn!(%error, "query failed"),
        }
    }
}

fn log_rejected<E: std::error::Error>(result: Result<(), E>) {
    if let Err(error) = result {
        tracing::warn!(%error, "insert rejected");
    }
}

fn check_parentheses_interactively() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "What is your string (type q to quit)?: ")?;
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line == "q" {
            writeln!(stdout, "Thank you for using the program.")?;
            break;
        }
        writeln!(stdout, "{}\n", check(&line))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unknown_command_is_an_error() {
        let error = run(Some("bogus")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
        assert!(error.to_string().contains("bogus"));
    }

    #[rstest]
    fn test_scripted_walkthrough_succeeds() {
        assert!(run(None).is_ok());
    }
}
