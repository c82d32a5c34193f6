use std::error::Error;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use dsa::prelude::*;

/// Runs the sorting, searching and stack demos.
#[derive(Debug, Parser)]
#[command(name = "dsa", version, about)]
struct Cli {
    /// Log stack overflow/underflow and radix sort passes.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    demo: Demo,
}

#[derive(Debug, Subcommand)]
enum Demo {
    /// Sort integers with one comparison sort, or all of them.
    Sort {
        /// Algorithm name, e.g. `quick` or `bubble-recursive`.
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Sort non-negative integers with LSD radix sort.
    Radix { values: Vec<u64> },
    /// Binary search for a target, iteratively and recursively.
    Search {
        #[arg(allow_negative_numbers = true)]
        target: i64,
        /// Sorted before searching.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Bounded, array-backed stack.
    Stack {
        #[arg(short, long, default_value_t = dsa::collections::array_stack::DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// Unbounded, linked stack.
    LinkedStack,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    match cli.demo {
        Demo::Sort { algorithm, values } => sort_demo(algorithm, values),
        Demo::Radix { values } => radix_demo(values),
        Demo::Search { target, values } => search_demo(target, values),
        Demo::Stack { capacity } => array_stack_demo(capacity),
        Demo::LinkedStack => linked_stack_demo()?,
    }

    Ok(())
}

/// Radix sort logs its passes at `trace`, stack misuse at `debug` and `warn`.
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    }
}

fn sort_demo(algorithm: Option<Algorithm>, values: Vec<i64>) {
    let input = if values.is_empty() {
        vec![40, 20, 50, 60, 30, 10]
    } else {
        values
    };

    let algorithms = match algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };

    println!("input: {input:?}");
    for algorithm in algorithms {
        let mut arr = input.clone();
        algorithm.sort(&mut arr);
        println!("{:>20}: {arr:?}", algorithm.name());
    }
}

fn radix_demo(values: Vec<u64>) {
    let mut arr = if values.is_empty() {
        vec![170, 45, 75, 90, 802, 24, 2, 66]
    } else {
        values
    };

    println!("input: {arr:?}");
    radix_sort(&mut arr);
    println!("radix: {arr:?}");
}

fn search_demo(target: i64, values: Vec<i64>) {
    let mut arr = if values.is_empty() {
        (1..=10).collect()
    } else {
        values
    };
    quick_sort(&mut arr);

    let show = |found: Option<usize>| match found {
        Some(idx) => format!("found at index {idx}"),
        None => String::from("not found"),
    };

    println!("array: {arr:?}");
    println!("target {target} {} (iterative)", show(binary_search(&arr, &target)));
    println!(
        "target {target} {} (recursive)",
        show(binary_search_recursive(&arr, &target))
    );
}

fn array_stack_demo(capacity: usize) {
    let mut stack = ArrayStack::with_capacity(capacity);

    for value in [10, 20, 30, 40, 50] {
        match stack.push(value) {
            Ok(()) => println!("{value} pushed to stack"),
            Err(err) => println!("cannot push {value}: {err}"),
        }
    }
    print_stack(&stack);

    for _ in 0..2 {
        match stack.pop() {
            Some(value) => println!("popped {value}"),
            None => println!("stack underflow"),
        }
    }
    print_stack(&stack);

    for value in [60, 70] {
        if let Err(err) = stack.push(value) {
            println!("cannot push {value}: {err}");
        }
    }
    print_stack(&stack);
    println!("empty: {}, full: {}", stack.is_empty(), stack.is_full());
}

fn linked_stack_demo() -> Result<(), StackError> {
    let mut stack = stack![10 => 20 => 30 => 40 => 50]?;
    print_stack(&stack);

    stack.pop();
    stack.pop();
    print_stack(&stack);

    for value in [20, 100] {
        match stack.search(&value) {
            Some(pos) => println!("{value} found at position {pos} from top"),
            None => println!("{value} not found in stack"),
        }
    }

    for value in [60, 70, 80] {
        stack.push(value)?;
    }
    print_stack(&stack);

    while let Some(value) = stack.pop() {
        println!("popped {value}");
    }
    println!("pop on empty stack: {:?}", stack.pop());

    for value in [100, 200, 300] {
        stack.push(value)?;
    }
    print_stack(&stack);

    stack.clear();
    print_stack(&stack);

    Ok(())
}

fn print_stack<S>(stack: &S)
where
    S: Stack<i32> + std::fmt::Display,
{
    println!(
        "stack (top to bottom): {stack}, size: {}, top: {:?}",
        stack.len(),
        stack.peek()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_radix_pass_logging() {
        assert!(log::Level::Trace <= log_level(true));
        assert!(log::Level::Debug <= log_level(true));
    }

    #[test]
    fn test_quiet_keeps_overflow_warnings() {
        assert!(log::Level::Warn <= log_level(false));
        assert!(log::Level::Debug > log_level(false));
    }

    #[test]
    fn test_verbose_flag_parses() {
        let cli = Cli::try_parse_from(["dsa", "--verbose", "radix", "3", "1"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.demo, Demo::Radix { ref values } if values == &[3, 1]));
    }
}
