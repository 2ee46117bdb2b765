//! Generate EXAMPLES.md from the equation templates.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-examples
//! ```
//!
//! The generated file is written to `algebra_core/EXAMPLES.md`.

use std::fs;
use std::path::Path;

use algebra_core::equations::generate_examples_markdown;

fn main() {
    println!("Generating EXAMPLES.md...");

    let markdown = generate_examples_markdown();

    // Relative to workspace root
    let output_path = Path::new("algebra_core/EXAMPLES.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
