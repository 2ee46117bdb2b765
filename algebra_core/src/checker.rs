//! # Answer Checker
//!
//! Decides whether a free-text answer matches an equation's [`Solution`].
//! Answers may be written as arithmetic (`"3/2"`, `"-0.5"`, `"(1+2)*4"`);
//! the text is evaluated to a number and compared within an absolute
//! tolerance.
//!
//! Unparseable text is simply wrong: wrong-format and wrong-value answers
//! look the same to the caller.
//!
//! ## Example
//!
//! ```rust
//! use algebra_core::checker::check_solution;
//! use algebra_core::equations::Solution;
//!
//! assert!(check_solution("3/2", &Solution::Single(1.5)));
//! assert!(check_solution("-2", &Solution::Multiple(vec![-2.0, -3.0])));
//! assert!(!check_solution("abc", &Solution::Single(5.0)));
//! ```

use log::trace;
use once_cell::sync::Lazy;

use crate::equations::Solution;
use crate::errors::{AlgebraError, AlgebraResult};

/// Default absolute tolerance for numeric comparison
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Turns answer text into a number. Implementations must not keep state
/// between evaluations.
pub trait ExpressionEvaluator {
    fn evaluate(&self, expression: &str) -> AlgebraResult<f64>;
}

/// Evaluator backed by the `meval` expression parser.
///
/// Supports integers, decimals, unary minus, `+ - * / ^`, parentheses and
/// common functions such as `sqrt`. The typographic operators `×`, `÷` and
/// `−` are accepted as their ASCII equivalents.
#[derive(Debug, Clone, Copy, Default)]
pub struct MevalEvaluator;

impl ExpressionEvaluator for MevalEvaluator {
    fn evaluate(&self, expression: &str) -> AlgebraResult<f64> {
        let cleaned = expression
            .replace('\u{d7}', "*")
            .replace('\u{f7}', "/")
            .replace('\u{2212}', "-");

        let value = meval::eval_str(&cleaned).map_err(|e| AlgebraError::parse_error(expression, e.to_string()))?;

        if !value.is_finite() {
            return Err(AlgebraError::parse_error(expression, "value is not a finite number"));
        }
        Ok(value)
    }
}

/// Compares answers against solutions using an evaluator and a tolerance.
#[derive(Debug, Clone)]
pub struct AnswerChecker<E = MevalEvaluator> {
    evaluator: E,
    tolerance: f64,
}

impl AnswerChecker<MevalEvaluator> {
    /// Checker with the default evaluator and tolerance
    pub fn new() -> Self {
        Self::with_evaluator(MevalEvaluator)
    }
}

impl Default for AnswerChecker<MevalEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExpressionEvaluator> AnswerChecker<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        AnswerChecker {
            evaluator,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Override the tolerance. Non-positive or non-finite values are ignored.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_finite() && tolerance > 0.0 {
            self.tolerance = tolerance;
        }
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check an answer against a solution.
    ///
    /// - `Single`: the value must match
    /// - `Multiple`: any root matches
    /// - `Coordinates`: the answer must be a pair `x, y` (parentheses
    ///   optional) matching in order
    pub fn check(&self, answer: &str, solution: &Solution) -> bool {
        let correct = match solution {
            Solution::Single(expected) => self.value_of(answer).is_some_and(|v| self.matches(v, *expected)),
            Solution::Multiple(expected) => self
                .value_of(answer)
                .is_some_and(|v| expected.iter().any(|e| self.matches(v, *e))),
            Solution::Coordinates { x, y } => match split_pair(answer) {
                Some((first, second)) => {
                    let first = self.value_of(first);
                    let second = self.value_of(second);
                    matches!((first, second), (Some(a), Some(b)) if self.matches(a, *x) && self.matches(b, *y))
                }
                None => {
                    trace!("'{}' is not an (x, y) pair", answer);
                    false
                }
            },
        };
        trace!("check '{}' against {} -> {}", answer, solution, correct);
        correct
    }

    fn value_of(&self, text: &str) -> Option<f64> {
        match self.evaluator.evaluate(text.trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                trace!("{}", e);
                None
            }
        }
    }

    fn matches(&self, value: f64, expected: f64) -> bool {
        (value - expected).abs() < self.tolerance
    }
}

static DEFAULT_CHECKER: Lazy<AnswerChecker> = Lazy::new(AnswerChecker::new);

/// Check an answer with the shared default checker (meval, tolerance 0.001).
///
/// Callers are expected to reject blank input before calling; blank text is
/// reported as incorrect.
pub fn check_solution(answer: &str, solution: &Solution) -> bool {
    DEFAULT_CHECKER.check(answer, solution)
}

/// Split `"(2, 3)"` or `"2, 3"` into its two components. Commas nested
/// inside parentheses (function arguments) do not count.
fn split_pair(answer: &str) -> Option<(&str, &str)> {
    let mut text = answer.trim();
    if text.starts_with('(') && text.ends_with(')') && closing_paren(text) == Some(text.len() - 1) {
        text = &text[1..text.len() - 1];
    }

    let mut depth = 0i32;
    let mut split_at = None;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                if split_at.is_some() {
                    return None;
                }
                split_at = Some(i);
            }
            _ => {}
        }
    }

    let i = split_at?;
    let (first, second) = (text[..i].trim(), text[i + 1..].trim());
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}

/// Byte index of the parenthesis closing the one at index 0.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalent_representations() {
        let solution = Solution::Single(1.5);
        assert!(check_solution("1.5", &solution));
        assert!(check_solution("3/2", &solution));
        assert!(check_solution(" 6 / 4 ", &solution));
        assert!(check_solution("(1 + 2) / 2", &solution));
    }

    #[test]
    fn test_malformed_input_is_incorrect() {
        let solution = Solution::Single(5.0);
        assert!(!check_solution("abc", &solution));
        assert!(!check_solution("5+", &solution));
        assert!(!check_solution("", &solution));
        assert!(!check_solution("1/0", &solution));
    }

    #[test]
    fn test_tolerance_boundary() {
        let solution = Solution::Single(2.0);
        assert!(check_solution("2.0009", &solution));
        assert!(!check_solution("2.002", &solution));
        assert!(check_solution("-0.5", &Solution::Single(-0.5)));
    }

    #[test]
    fn test_multiple_values() {
        let solution = Solution::Multiple(vec![-2.0, -3.0]);
        assert!(check_solution("-2", &solution));
        assert!(check_solution("-3", &solution));
        assert!(!check_solution("5", &solution));
    }

    #[test]
    fn test_coordinates() {
        let solution = Solution::Coordinates { x: 2.0, y: 3.0 };
        assert!(check_solution("(2, 3)", &solution));
        assert!(check_solution("2,3", &solution));
        assert!(check_solution("(4/2, 9/3)", &solution));
        assert!(!check_solution("(3, 2)", &solution));
        assert!(!check_solution("2", &solution));
        assert!(!check_solution("(2, 3, 4)", &solution));
        assert!(!check_solution("(2, )", &solution));
    }

    #[test]
    fn test_typographic_operators() {
        assert!(check_solution("\u{2212}4", &Solution::Single(-4.0)));
        assert!(check_solution("3\u{f7}2", &Solution::Single(1.5)));
        assert!(check_solution("2\u{d7}3", &Solution::Single(6.0)));
    }

    #[test]
    fn test_custom_tolerance() {
        let loose = AnswerChecker::new().with_tolerance(0.1);
        assert!(loose.check("3.14", &Solution::Single(3.2)));
        assert!(!AnswerChecker::new().check("3.14", &Solution::Single(3.2)));
        assert_eq!(AnswerChecker::new().with_tolerance(-1.0).tolerance(), DEFAULT_TOLERANCE);
    }

    struct FixedEvaluator(f64);

    impl ExpressionEvaluator for FixedEvaluator {
        fn evaluate(&self, _expression: &str) -> AlgebraResult<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_injected_evaluator() {
        let checker = AnswerChecker::with_evaluator(FixedEvaluator(7.0));
        assert!(checker.check("anything", &Solution::Single(7.0)));
        assert!(!checker.check("anything", &Solution::Single(8.0)));
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("(1, 2)"), Some(("1", "2")));
        assert_eq!(split_pair("(1+1)*2, 3"), Some(("(1+1)*2", "3")));
        assert_eq!(split_pair("(1)"), None);
        assert_eq!(split_pair("(1), (2)"), Some(("(1)", "(2)")));
    }
}
