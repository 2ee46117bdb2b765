//! # Equation Generators
//!
//! Template generators for every equation category, plus the record types
//! they produce. Each generator takes a random source and a difficulty tier
//! and returns a fresh, fully populated [`Equation`].
//!
//! ## Modules
//!
//! - [`model`] - `Equation`, `EquationStep`, `Solution`, categories and tiers
//! - [`polynomial`] - linear, backward-built quadratic, fixed cubic
//! - [`fractional`] - unknowns in denominators
//! - [`radical`] - unknowns under square roots
//! - [`quadratic`] - factoring, quadratic formula, substitution system
//! - [`word_problem`] - narrative problems
//! - [`catalog`] - example sets and the worked-examples reference
//! - [`latex`] - number and polynomial formatting
//!
//! ## Tiers
//!
//! Basic generators are fully parametric. Higher tiers use fixed or
//! semi-fixed templates: writing a correct step-by-step derivation for
//! arbitrary parameters at that complexity is outside what a template
//! system does.
//!
//! ## Example
//!
//! ```rust
//! use algebra_core::equations::{generate, Difficulty, EquationType};
//!
//! let eq = generate(EquationType::Polynomial, Difficulty::Basic);
//! assert!(!eq.steps().is_empty());
//! assert_eq!(eq.steps()[0].step_number, 1);
//! ```

pub mod catalog;
pub mod fractional;
pub mod latex;
pub mod model;
pub mod polynomial;
pub mod quadratic;
pub mod radical;
pub mod word_problem;

use log::debug;
use rand::Rng;

pub use catalog::{equations_for_type, example_equations, generate_examples_markdown};
pub use fractional::generate_fractional;
pub use model::{Difficulty, Equation, EquationStep, EquationType, Solution};
pub use polynomial::generate_polynomial;
pub use quadratic::generate_quadratic;
pub use radical::generate_radical;
pub use word_problem::generate_word_problem;

/// Generate an equation using the thread-local random source.
pub fn generate(equation_type: EquationType, difficulty: Difficulty) -> Equation {
    generate_with(&mut rand::thread_rng(), equation_type, difficulty)
}

/// Generate an equation from an explicit random source.
///
/// ```rust
/// use algebra_core::equations::{generate_with, Difficulty, EquationType};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let a = generate_with(&mut rng, EquationType::Fractional, Difficulty::Basic);
/// let mut rng = StdRng::seed_from_u64(42);
/// let b = generate_with(&mut rng, EquationType::Fractional, Difficulty::Basic);
/// assert_eq!(a.latex(), b.latex());
/// ```
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, equation_type: EquationType, difficulty: Difficulty) -> Equation {
    let equation = match equation_type {
        EquationType::Polynomial => generate_polynomial(rng, difficulty),
        EquationType::Fractional => generate_fractional(rng, difficulty),
        EquationType::Radical => generate_radical(rng, difficulty),
        EquationType::Quadratic => generate_quadratic(rng, difficulty),
        EquationType::WordProblem => generate_word_problem(rng, difficulty),
    };
    debug!("generated {} ({} steps): {}", equation.id(), equation.steps().len(), equation.latex());
    equation
}

/// Uniform integer in `[min, max]`, inclusive.
pub(crate) fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}
