//! Example demonstrating line reading and classification.
//!
//! This example shows how to:
//! - Read a plain-text file as ordered lines
//! - Classify each line as an integer, a float, or plain text
//! - Load the lines into a character grid and report its dimensions
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scan_file -- path/to/input.txt
//! ```
//!
//! Enable debug logging from the reader:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example scan_file -- path/to/input.txt
//! ```

use std::{env, process};

use quadrille_core::Grid;
use quadrille_text::{is_float_str, is_int_str, read_lines};

fn main() {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: scan_file <PATH>");
        process::exit(2);
    };

    let lines = match read_lines(&path) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let ints = lines.iter().filter(|line| is_int_str(line)).count();
    let floats = lines.iter().filter(|line| is_float_str(line)).count();

    println!("Lines: {}", lines.len());
    println!("Integer lines: {ints}");
    println!("Float lines: {floats} (integers are also valid floats)");

    let grid = Grid::from_rows(lines.iter().map(|line| line.chars().collect()).collect());
    let (rows, cols) = grid.dims();
    println!("As a character grid: {rows} rows x {cols} columns (from the first row)");
}
