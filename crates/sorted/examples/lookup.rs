//! Looks up values in a fixed sorted array with both binary search variants.
//!
//! # Usage
//!
//! ```text
//! cargo run --example lookup
//! cargo run --example lookup -- 17 125 4
//! ```

use std::error::Error;

use minsearch_sorted::{binary_search_iterative, binary_search_recursive};

const DATA: [i64; 10] = [1, 4, 5, 7, 12, 16, 17, 25, 37, 42];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let targets: Vec<i64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<i64>())
        .collect::<Result<_, _>>()?;
    let targets = if targets.is_empty() {
        vec![17, 125]
    } else {
        targets
    };

    let high = DATA.len() - 1;
    println!("data: {DATA:?}");
    for target in targets {
        let recursive = binary_search_recursive(&DATA, &target, 0, high)?;
        let iterative = binary_search_iterative(&DATA, &target, 0, high)?;
        println!(
            "{target:>5}: recursive {}, iterative {}",
            describe(recursive),
            describe(iterative)
        );
    }

    Ok(())
}

fn describe(found: Option<usize>) -> String {
    found.map_or_else(|| "not found".to_string(), |index| format!("index {index}"))
}
