//! # algebra_core - Algebra Practice Engine
//!
//! `algebra_core` is the logic behind Equilab: it generates practice
//! equations with worked, step-by-step solutions and checks learners'
//! answers. Front ends (the CLI, a web page, a tutor bot) call into it and
//! render what it returns.
//!
//! ## Design Philosophy
//!
//! - **Stateless generation**: every call builds a fresh, immutable equation
//! - **Injectable randomness**: generators take any `rand::Rng`
//! - **Forgiving checking**: answers are arithmetic, compared with a tolerance
//! - **JSON-First**: all records implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use algebra_core::{check_solution, generate, Difficulty, EquationType};
//!
//! let eq = generate(EquationType::Radical, Difficulty::Basic);
//! println!("{}", eq.latex());
//! assert!(check_solution("13", eq.solution()));
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - equation records and the template generators
//! - [`checker`] - answer evaluation and comparison
//! - [`session`] - attempt, hint, walkthrough and session state
//! - [`settings`] - persisted learner configuration
//! - [`errors`] - structured error types

pub mod checker;
pub mod equations;
pub mod errors;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use checker::{check_solution, AnswerChecker, ExpressionEvaluator, MevalEvaluator};
pub use equations::{generate, generate_with, Difficulty, Equation, EquationStep, EquationType, Solution};
pub use errors::{AlgebraError, AlgebraResult};
pub use session::{Feedback, PracticeSession, QuestionAttempt, SessionMode, StepWalkthrough};
pub use settings::{load_settings, save_settings, Settings};
