//! # Quadratic Equations
//!
//! Fixed templates, one per solving technique:
//!
//! - **Basic**: factoring `x² + 5x + 6 = 0`
//! - **Intermediate**: the quadratic formula on `2x² - 5x - 3 = 0`
//! - **Advanced**: substitution in the system `x + y = 5, xy = 6, x < y`
//!
//! Without the ordering condition the system has two solution pairs. Both
//! the prose and the LaTeX state it, so [`Solution::Coordinates`] holds the
//! only pair that solves it.

use rand::Rng;

use super::model::{Derivation, Difficulty, Equation, EquationType, Solution};

/// Generate a quadratic equation for the given tier. Every tier is fixed.
pub fn generate_quadratic<R: Rng + ?Sized>(_rng: &mut R, difficulty: Difficulty) -> Equation {
    match difficulty {
        Difficulty::Basic => factoring(),
        Difficulty::Intermediate => quadratic_formula(),
        Difficulty::Advanced => substitution_system(),
    }
}

fn factoring() -> Equation {
    let latex = "x^2 + 5x + 6 = 0";

    let steps = Derivation::new()
        .step("Choose factoring", latex, "The coefficients are small integers, so try factoring.")
        .step(
            "List factor pairs of 6",
            r"6 = 1 \times 6 = 2 \times 3",
            "We need two numbers that multiply to 6.",
        )
        .step("Pick the pair that sums to 5", r"2 + 3 = 5", "2 and 3 also add to the middle coefficient.")
        .step("Factor", r"(x+2)(x+3) = 0", "Write the quadratic as a product of two linear factors.")
        .step(
            "Apply the zero product property",
            r"x + 2 = 0 \text{ or } x + 3 = 0",
            "A product is zero only if one of its factors is zero.",
        )
        .step("Solve", r"x = -2 \text{ or } x = -3", "Solve each linear equation.");

    Equation::new(
        EquationType::Quadratic,
        Difficulty::Basic,
        format!("Solve: {}", latex),
        latex,
        Solution::Multiple(vec![-2.0, -3.0]),
        steps,
        "A basic quadratic equation solved by factoring.",
    )
}

fn quadratic_formula() -> Equation {
    let latex = "2x^2 - 5x - 3 = 0";

    let steps = Derivation::new()
        .step(
            "Use the quadratic formula",
            r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}",
            "Here a = 2, b = -5, c = -3.",
        )
        .step(
            "Substitute the coefficients",
            r"x = \frac{5 \pm \sqrt{25 + 24}}{4}",
            "-b = 5, b\u{b2} = 25, and -4ac = 24.",
        )
        .step("Compute the discriminant", r"\Delta = 25 + 24 = 49", "Add under the root.")
        .step("Take the square root", r"\sqrt{49} = 7", "49 is a perfect square.")
        .step("Substitute the root", r"x = \frac{5 \pm 7}{4}", "Put the square root back into the formula.")
        .step(
            "Split the two cases",
            r"x = \frac{5 + 7}{4} \text{ or } x = \frac{5 - 7}{4}",
            "Evaluate the plus and minus cases separately.",
        )
        .step("State both roots", r"x = 3 \text{ or } x = -0.5", "Simplify each fraction.");

    Equation::new(
        EquationType::Quadratic,
        Difficulty::Intermediate,
        format!("Solve: {}", latex),
        latex,
        Solution::Multiple(vec![3.0, -0.5]),
        steps,
        "An intermediate quadratic equation solved with the quadratic formula.",
    )
}

fn substitution_system() -> Equation {
    let latex = r"\begin{cases} x + y = 5 \\ xy = 6 \\ x < y \end{cases}";

    let steps = Derivation::new()
        .step(
            "Solve the first equation for y",
            r"y = 5 - x",
            "Express y in terms of x so it can be substituted.",
        )
        .step("Substitute into the second equation", r"x(5 - x) = 6", "Replace y in xy = 6.")
        .step("Expand", r"5x - x^2 = 6", "Multiply out the left side.")
        .step("Rearrange", r"x^2 - 5x + 6 = 0", "Move every term to one side in standard form.")
        .step("Factor", r"(x-2)(x-3) = 0", "-2 and -3 multiply to 6 and add to -5.")
        .step("Solve for x", r"x = 2 \text{ or } x = 3", "Apply the zero product property.")
        .step(
            "Solve for y",
            r"x = 2 \Rightarrow y = 3, \quad x = 3 \Rightarrow y = 2",
            "Substitute each x back into y = 5 - x.",
        )
        .step(
            "State the solutions",
            r"(x, y) = (2, 3) \text{ or } (x, y) = (3, 2)",
            "Only (2, 3) satisfies x < y.",
        );

    Equation::new(
        EquationType::Quadratic,
        Difficulty::Advanced,
        "Solve the system x + y = 5, xy = 6 with x < y. Give the solution as (x, y).",
        latex,
        Solution::Coordinates { x: 2.0, y: 3.0 },
        steps,
        "An advanced system: substitute one equation into the other to get a single quadratic.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_solution;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_basic_roots() {
        let eq = factoring();
        for x in eq.solution().values() {
            assert!(approx_eq(x * x + 5.0 * x + 6.0, 0.0));
        }
        assert!(check_solution("-2", eq.solution()));
        assert!(check_solution("-3", eq.solution()));
        assert!(!check_solution("5", eq.solution()));
    }

    #[test]
    fn test_intermediate_roots() {
        let eq = quadratic_formula();
        for x in eq.solution().values() {
            assert!(approx_eq(2.0 * x * x - 5.0 * x - 3.0, 0.0));
        }
        assert!(check_solution("-1/2", eq.solution()));
    }

    #[test]
    fn test_system_pair() {
        let eq = substitution_system();
        match eq.solution() {
            Solution::Coordinates { x, y } => {
                assert!(approx_eq(x + y, 5.0));
                assert!(approx_eq(x * y, 6.0));
                assert!(x < y);
            }
            other => panic!("expected coordinates, got {:?}", other),
        }
        assert!(check_solution("(2, 3)", eq.solution()));
        assert!(!check_solution("2", eq.solution()));
    }

    #[test]
    fn test_system_statement_orders_the_pair() {
        let eq = substitution_system();
        // (3, 2) solves the first two equations but not the ordering condition
        assert!(eq.latex().contains("x < y"));
        assert!(eq.text().contains("x < y"));
        assert!(!check_solution("(3, 2)", eq.solution()));
    }
}
