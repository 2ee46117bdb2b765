//! # Example Catalog
//!
//! Ready-made example sets for overview pages, plus a markdown reference of
//! one worked example per category and tier.
//!
//! ## Usage
//!
//! ```rust
//! use algebra_core::equations::{example_equations, EquationType};
//!
//! let examples = example_equations();
//! assert_eq!(examples.len(), EquationType::ALL.len());
//! ```

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::model::{Difficulty, Equation, EquationType};
use super::{generate, generate_with};

/// Seed for the reference document so regenerating it is reproducible
const EXAMPLES_SEED: u64 = 2024;

/// The basic-tier example of every category.
pub fn example_equations() -> BTreeMap<EquationType, Equation> {
    EquationType::ALL
        .iter()
        .map(|&equation_type| (equation_type, generate(equation_type, Difficulty::Basic)))
        .collect()
}

/// Equations to show for one category and tier. Currently a single fresh
/// equation.
pub fn equations_for_type(equation_type: EquationType, difficulty: Difficulty) -> Vec<Equation> {
    vec![generate(equation_type, difficulty)]
}

/// Render every category × tier as a worked-examples reference.
///
/// ```rust
/// use algebra_core::equations::generate_examples_markdown;
///
/// let markdown = generate_examples_markdown();
/// assert!(markdown.contains("## Radical Equations"));
/// assert!(markdown.contains("### Advanced"));
/// ```
pub fn generate_examples_markdown() -> String {
    let mut rng = StdRng::seed_from_u64(EXAMPLES_SEED);
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Equilab Worked Examples

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-examples`

One example per category and difficulty tier. Basic tiers are parametric,
so the numbers below are just one sample; higher tiers are fixed or
semi-fixed templates.

---

"#,
    );

    let mut total = 0usize;
    for equation_type in EquationType::ALL {
        output.push_str(&format!("## {}\n\n", equation_type.display_name()));
        output.push_str(&format!("{}\n\n", equation_type.description()));

        for difficulty in Difficulty::ALL {
            let equation = generate_with(&mut rng, equation_type, difficulty);
            total += 1;

            output.push_str(&format!("### {}\n\n", difficulty.display_name()));
            output.push_str(&format!("{}\n\n", equation.text()));
            output.push_str(&format!("$$\n{}\n$$\n\n", equation.latex()));
            output.push_str(&format!("**Solution:** {}\n\n", equation.solution()));

            output.push_str("| # | Step | Result | Why |\n");
            output.push_str("|---|------|--------|-----|\n");
            for step in equation.steps() {
                output.push_str(&format!(
                    "| {} | {} | `{}` | {} |\n",
                    step.step_number,
                    step.instruction,
                    escape_table_cell(&step.latex),
                    escape_table_cell(&step.explanation)
                ));
            }
            output.push('\n');
            output.push_str(&format!("{}\n\n", equation.explanation()));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Examples:** {}\n- **Categories:** {}\n",
        total,
        EquationType::ALL.len()
    ));

    output
}

/// Pipes end a markdown table cell; newlines end the row.
fn escape_table_cell(s: &str) -> String {
    s.replace('|', r"\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_equations_are_basic() {
        let examples = example_equations();
        for (equation_type, equation) in &examples {
            assert_eq!(equation.equation_type(), *equation_type);
            assert_eq!(equation.difficulty(), Difficulty::Basic);
        }
    }

    #[test]
    fn test_equations_for_type() {
        let list = equations_for_type(EquationType::Quadratic, Difficulty::Intermediate);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].equation_type(), EquationType::Quadratic);
        assert_eq!(list[0].difficulty(), Difficulty::Intermediate);
    }

    #[test]
    fn test_markdown_covers_everything() {
        let markdown = generate_examples_markdown();
        for equation_type in EquationType::ALL {
            assert!(markdown.contains(equation_type.display_name()));
        }
        assert_eq!(markdown.matches("### Intermediate").count(), 5);
        assert!(markdown.contains("- **Examples:** 15"));
        assert!(markdown.contains("extraneous root"));
    }

    #[test]
    fn test_markdown_is_reproducible() {
        assert_eq!(generate_examples_markdown(), generate_examples_markdown());
    }

    #[test]
    fn test_escape_table_cell() {
        assert_eq!(escape_table_cell("|x| = 2"), r"\|x\| = 2");
    }
}
