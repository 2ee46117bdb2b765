//! # Equation Records
//!
//! The data handed from the generators to whatever renders a problem:
//! the statement, its canonical solution, and the worked steps.
//!
//! ## Structure
//!
//! ```text
//! Equation
//! ├── id, equation_type, difficulty
//! ├── text / latex (same statement, prose vs. pure markup)
//! ├── solution: Solution (Single | Multiple | Coordinates)
//! ├── steps: Vec<EquationStep> (numbered 1..=n, never empty)
//! └── explanation
//! ```
//!
//! Equations are immutable once built. Asking for "a new problem" always
//! means generating a fresh record.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::latex::format_number;
use crate::errors::AlgebraError;

// ============================================================================
// Equation Categories
// ============================================================================

/// The five families of equations the engine can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquationType {
    /// Linear and polynomial equations in one unknown
    Polynomial,
    /// Equations with the unknown in a denominator
    Fractional,
    /// Equations with the unknown under a square root
    Radical,
    /// Quadratics and quadratic systems
    Quadratic,
    /// Narrative problems that reduce to an equation
    WordProblem,
}

impl EquationType {
    /// Every category, in menu order
    pub const ALL: [EquationType; 5] = [
        EquationType::Polynomial,
        EquationType::Fractional,
        EquationType::Radical,
        EquationType::Quadratic,
        EquationType::WordProblem,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationType::Polynomial => "Polynomial Equations",
            EquationType::Fractional => "Fractional Equations",
            EquationType::Radical => "Radical Equations",
            EquationType::Quadratic => "Quadratic Equations",
            EquationType::WordProblem => "Word Problems",
        }
    }

    /// One-line summary shown next to the category
    pub fn description(&self) -> &'static str {
        match self {
            EquationType::Polynomial => "Isolate the unknown, or factor when the degree is higher",
            EquationType::Fractional => "Clear denominators, then watch for values that make them zero",
            EquationType::Radical => "Square away the root and verify every candidate",
            EquationType::Quadratic => "Factor, use the quadratic formula, or substitute",
            EquationType::WordProblem => "Choose an unknown, write the equation, interpret the answer",
        }
    }

    /// Short tag used in equation ids
    pub fn tag(&self) -> &'static str {
        match self {
            EquationType::Polynomial => "poly",
            EquationType::Fractional => "frac",
            EquationType::Radical => "rad",
            EquationType::Quadratic => "quad",
            EquationType::WordProblem => "word",
        }
    }

    /// Name as it appears in JSON
    pub fn wire_name(&self) -> &'static str {
        match self {
            EquationType::Polynomial => "polynomial",
            EquationType::Fractional => "fractional",
            EquationType::Radical => "radical",
            EquationType::Quadratic => "quadratic",
            EquationType::WordProblem => "wordProblem",
        }
    }
}

impl fmt::Display for EquationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for EquationType {
    type Err = AlgebraError;

    /// Accepts the wire name, the id tag, or snake/kebab variants
    /// (`wordProblem`, `word`, `word_problem`, `word-problem`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "polynomial" | "poly" => Ok(EquationType::Polynomial),
            "fractional" | "frac" => Ok(EquationType::Fractional),
            "radical" | "rad" => Ok(EquationType::Radical),
            "quadratic" | "quad" => Ok(EquationType::Quadratic),
            "wordproblem" | "word" => Ok(EquationType::WordProblem),
            _ => Err(AlgebraError::unknown_category(s)),
        }
    }
}

// ============================================================================
// Difficulty
// ============================================================================

/// Difficulty tier. Controls both the parameter ranges and whether a
/// generator is fully parametric or works from a fixed template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Basic, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Name as it appears in JSON and equation ids
    pub fn tag(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Difficulty {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "easy" => Ok(Difficulty::Basic),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            _ => Err(AlgebraError::unknown_difficulty(s)),
        }
    }
}

// ============================================================================
// Solution
// ============================================================================

/// The canonical answer to an equation.
///
/// The variants carry different grading rules (see
/// [`AnswerChecker`](crate::checker::AnswerChecker)):
///
/// - `Single`: the answer must equal the value
/// - `Multiple`: the answer may equal any of the roots
/// - `Coordinates`: the answer must be the `(x, y)` pair, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Solution {
    Single(f64),
    Multiple(Vec<f64>),
    Coordinates { x: f64, y: f64 },
}

impl Solution {
    /// All numeric values carried by the solution, in order
    pub fn values(&self) -> Vec<f64> {
        match self {
            Solution::Single(v) => vec![*v],
            Solution::Multiple(vs) => vs.clone(),
            Solution::Coordinates { x, y } => vec![*x, *y],
        }
    }

    /// Collapse a list of roots: one distinct root becomes `Single`.
    pub fn from_roots(roots: Vec<f64>) -> Self {
        let mut distinct: Vec<f64> = Vec::with_capacity(roots.len());
        for root in roots {
            if !distinct.iter().any(|seen| (seen - root).abs() < 1e-9) {
                distinct.push(root);
            }
        }
        if distinct.len() == 1 {
            Solution::Single(distinct[0])
        } else {
            Solution::Multiple(distinct)
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Single(v) => f.write_str(&format_number(*v)),
            Solution::Multiple(vs) => {
                let parts: Vec<String> = vs.iter().map(|v| format_number(*v)).collect();
                f.write_str(&parts.join(" or "))
            }
            Solution::Coordinates { x, y } => {
                write!(f, "({}, {})", format_number(*x), format_number(*y))
            }
        }
    }
}

// ============================================================================
// Steps
// ============================================================================

/// One labelled transformation in a worked solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationStep {
    /// 1-based position in the derivation
    pub step_number: u32,
    /// Short imperative label ("Move the constant term")
    pub instruction: String,
    /// State of the equation after this step
    pub latex: String,
    /// Why the transformation is allowed
    pub explanation: String,
}

/// Ordered list of steps under construction. Step numbers come from
/// position, so a finished derivation is always numbered 1..=n.
#[derive(Debug, Clone, Default)]
pub(crate) struct Derivation {
    steps: Vec<EquationStep>,
}

impl Derivation {
    pub(crate) fn new() -> Self {
        Derivation { steps: Vec::new() }
    }

    pub(crate) fn step(
        mut self,
        instruction: impl Into<String>,
        latex: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(EquationStep {
            step_number,
            instruction: instruction.into(),
            latex: latex.into(),
            explanation: explanation.into(),
        });
        self
    }
}

// ============================================================================
// Equation
// ============================================================================

/// A generated practice problem with its worked solution.
///
/// Deserialized records are validated: steps must be non-empty and numbered
/// 1..=n.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEquation")]
pub struct Equation {
    id: String,
    #[serde(rename = "type")]
    equation_type: EquationType,
    text: String,
    latex: String,
    solution: Solution,
    steps: Vec<EquationStep>,
    explanation: String,
    difficulty: Difficulty,
}

impl Equation {
    pub(crate) fn new(
        equation_type: EquationType,
        difficulty: Difficulty,
        text: impl Into<String>,
        latex: impl Into<String>,
        solution: Solution,
        derivation: Derivation,
        explanation: impl Into<String>,
    ) -> Self {
        debug_assert!(!derivation.steps.is_empty(), "equation without steps");
        Equation {
            id: new_id(equation_type, difficulty),
            equation_type,
            text: text.into(),
            latex: latex.into(),
            solution,
            steps: derivation.steps,
            explanation: explanation.into(),
            difficulty,
        }
    }

    /// Opaque id: `<category>-<tier>-<unix millis>-<random suffix>`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn equation_type(&self) -> EquationType {
        self.equation_type
    }

    /// Statement as prose (word problems) or prefixed formula
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Statement as pure LaTeX markup
    pub fn latex(&self) -> &str {
        &self.latex
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn steps(&self) -> &[EquationStep] {
        &self.steps
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Wire form of [`Equation`] before validation.
#[derive(Deserialize)]
struct RawEquation {
    id: String,
    #[serde(rename = "type")]
    equation_type: EquationType,
    text: String,
    latex: String,
    solution: Solution,
    steps: Vec<EquationStep>,
    explanation: String,
    difficulty: Difficulty,
}

impl TryFrom<RawEquation> for Equation {
    type Error = AlgebraError;

    fn try_from(raw: RawEquation) -> Result<Self, Self::Error> {
        if raw.steps.is_empty() {
            return Err(AlgebraError::invalid_input("steps", raw.id, "an equation needs at least one step"));
        }
        if let Some((i, step)) = raw
            .steps
            .iter()
            .enumerate()
            .find(|(i, step)| step.step_number as usize != i + 1)
        {
            return Err(AlgebraError::invalid_input(
                "steps",
                step.step_number.to_string(),
                format!("step at position {} must be numbered {}", i + 1, i + 1),
            ));
        }

        Ok(Equation {
            id: raw.id,
            equation_type: raw.equation_type,
            text: raw.text,
            latex: raw.latex,
            solution: raw.solution,
            steps: raw.steps,
            explanation: raw.explanation,
            difficulty: raw.difficulty,
        })
    }
}

fn new_id(equation_type: EquationType, difficulty: Difficulty) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}-{}",
        equation_type.tag(),
        difficulty.tag(),
        Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_equation() -> Equation {
        Equation::new(
            EquationType::Radical,
            Difficulty::Basic,
            "Solve: x = 1",
            "x = 1",
            Solution::Single(1.0),
            Derivation::new()
                .step("Read", "x = 1", "Already solved")
                .step("Answer", "x = 1", "Nothing to do"),
            "Trivial",
        )
    }

    #[test]
    fn test_derivation_numbers_steps() {
        let eq = sample_equation();
        let numbers: Vec<u32> = eq.steps().iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_id_format() {
        let eq = sample_equation();
        assert!(eq.id().starts_with("rad-basic-"), "id = {}", eq.id());
        assert_ne!(eq.id(), sample_equation().id());
    }

    #[test]
    fn test_equation_type_parsing() {
        assert_eq!("wordProblem".parse::<EquationType>().unwrap(), EquationType::WordProblem);
        assert_eq!("word-problem".parse::<EquationType>().unwrap(), EquationType::WordProblem);
        assert_eq!("FRAC".parse::<EquationType>().unwrap(), EquationType::Fractional);
        assert!("cubic".parse::<EquationType>().is_err());
        assert_eq!("Advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serialization_names() {
        let eq = sample_equation();
        let json = serde_json::to_string(&eq).unwrap();
        assert!(json.contains("\"type\":\"radical\""));
        assert!(json.contains("\"difficulty\":\"basic\""));
        assert!(json.contains("\"stepNumber\":1"));
        assert!(json.contains("\"kind\":\"single\""));

        let wp = serde_json::to_string(&EquationType::WordProblem).unwrap();
        assert_eq!(wp, "\"wordProblem\"");
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let eq = sample_equation();
        let json = serde_json::to_string(&eq).unwrap();
        let back: Equation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eq);
    }

    #[test]
    fn test_deserialize_rejects_empty_steps() {
        let mut value = serde_json::to_value(sample_equation()).unwrap();
        value["steps"] = serde_json::json!([]);
        let err = serde_json::from_value::<Equation>(value).unwrap_err();
        assert!(err.to_string().contains("at least one step"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_gapped_step_numbers() {
        let mut value = serde_json::to_value(sample_equation()).unwrap();
        value["steps"][1]["stepNumber"] = serde_json::json!(3);
        assert!(serde_json::from_value::<Equation>(value).is_err());
    }

    #[test]
    fn test_difficulty_default() {
        assert_eq!(Difficulty::default(), Difficulty::Basic);
    }

    #[test]
    fn test_solution_display() {
        assert_eq!(Solution::Single(13.0).to_string(), "13");
        assert_eq!(Solution::Multiple(vec![3.0, -0.5]).to_string(), "3 or -0.5");
        assert_eq!(Solution::Coordinates { x: 2.0, y: 3.0 }.to_string(), "(2, 3)");
    }

    #[test]
    fn test_solution_from_roots() {
        assert_eq!(Solution::from_roots(vec![2.0, 2.0]), Solution::Single(2.0));
        assert_eq!(Solution::from_roots(vec![2.0, -1.0]), Solution::Multiple(vec![2.0, -1.0]));
    }
}
