//! # Radical Equations
//!
//! All three tiers are fixed templates:
//!
//! - **Basic**: `√(x+3) = 4`
//! - **Intermediate**: `√(x-2) + √(x+2) = 4`, squared twice
//! - **Advanced**: `√(2x+7) = x+2`, where squaring introduces the
//!   extraneous root x = -3 and verification throws it out
//!
//! Grading always uses the stored solution, never the candidates listed in
//! the worked steps.

use rand::Rng;

use super::model::{Derivation, Difficulty, Equation, EquationType, Solution};

/// Generate a radical equation for the given tier. The random source is
/// accepted for a uniform generator signature; every tier is fixed.
pub fn generate_radical<R: Rng + ?Sized>(_rng: &mut R, difficulty: Difficulty) -> Equation {
    match difficulty {
        Difficulty::Basic => single_radical(),
        Difficulty::Intermediate => sum_of_radicals(),
        Difficulty::Advanced => extraneous_root(),
    }
}

fn single_radical() -> Equation {
    let latex = r"\sqrt{x+3} = 4";

    let steps = Derivation::new()
        .step(
            "Square both sides",
            r"(\sqrt{x+3})^2 = 4^2",
            "Squaring removes the square root.",
        )
        .step("Simplify", r"x + 3 = 16", "The root and the square cancel on the left.")
        .step("Isolate x", r"x = 16 - 3", "Subtract 3 from both sides.")
        .step("State the result", r"x = 13", "Carry out the subtraction.")
        .step(
            "Verify",
            r"\sqrt{13+3} = \sqrt{16} = 4",
            "Substituting x = 13 into the original equation confirms the answer.",
        );

    Equation::new(
        EquationType::Radical,
        Difficulty::Basic,
        format!("Solve: {}", latex),
        latex,
        Solution::Single(13.0),
        steps,
        "A basic radical equation: square both sides to remove the root, solve, and check the answer.",
    )
}

fn sum_of_radicals() -> Equation {
    let latex = r"\sqrt{x-2} + \sqrt{x+2} = 4";

    let steps = Derivation::new()
        .step(
            "Isolate one radical",
            r"\sqrt{x-2} = 4 - \sqrt{x+2}",
            "Move one square root to the right-hand side.",
        )
        .step(
            "Square both sides",
            r"x - 2 = 16 - 8\sqrt{x+2} + (x + 2)",
            "Expand the right side as (4 - \u{221a}(x+2))\u{b2}.",
        )
        .step(
            "Collect terms",
            r"8\sqrt{x+2} = 20",
            "The x terms cancel; move the remaining radical left and the constants right.",
        )
        .step(
            "Isolate the remaining radical",
            r"\sqrt{x+2} = \frac{5}{2}",
            "Divide both sides by 8.",
        )
        .step("Square again", r"x + 2 = \frac{25}{4}", "Squaring removes the last root.")
        .step(
            "Solve for x",
            r"x = \frac{17}{4} = 4.25",
            "Subtract 2 from both sides.",
        )
        .step(
            "Verify",
            r"\sqrt{4.25-2} + \sqrt{4.25+2} = \sqrt{2.25} + \sqrt{6.25} = 1.5 + 2.5 = 4",
            "Substituting x = 4.25 into the original equation confirms the answer.",
        );

    Equation::new(
        EquationType::Radical,
        Difficulty::Intermediate,
        format!("Solve: {}", latex),
        latex,
        Solution::Single(4.25),
        steps,
        "An intermediate radical equation: isolate one root, square, isolate the other root, square again, and verify.",
    )
}

fn extraneous_root() -> Equation {
    let latex = r"\sqrt{2x+7} = x+2";

    let steps = Derivation::new()
        .step(
            "Square both sides",
            r"(\sqrt{2x+7})^2 = (x+2)^2",
            "Squaring removes the root, but it can also introduce extra solutions.",
        )
        .step("Expand", r"2x + 7 = x^2 + 4x + 4", "Expand the square on the right.")
        .step(
            "Move all terms to one side",
            r"x^2 + 2x - 3 = 0",
            "Write the quadratic in standard form.",
        )
        .step("Factor", r"(x+3)(x-1) = 0", "-3 and 1 multiply to -3 and add to 2.")
        .step(
            "List the candidates",
            r"x = -3 \text{ or } x = 1",
            "Each factor gives a candidate; both must be checked.",
        )
        .step(
            "Verify x = 1",
            r"\sqrt{2(1)+7} = \sqrt{9} = 3 = 1 + 2",
            "Both sides agree, so x = 1 is a solution.",
        )
        .step(
            "Verify x = -3",
            r"\sqrt{2(-3)+7} = \sqrt{1} = 1 \neq -3 + 2 = -1",
            "The sides disagree: x = -3 is an extraneous root introduced by squaring.",
        )
        .step("State the result", r"x = 1", "Discard the extraneous root.");

    Equation::new(
        EquationType::Radical,
        Difficulty::Advanced,
        format!("Solve: {}", latex),
        latex,
        Solution::Single(1.0),
        steps,
        "An advanced radical equation: squaring can add roots that do not satisfy the original equation, so every candidate must be verified.",
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
    fn test_basic() {
        let x = single_radical().solution().values()[0];
        assert!(approx_eq((x + 3.0).sqrt(), 4.0));
    }

    #[test]
    fn test_sum_of_radicals() {
        let eq = sum_of_radicals();
        let x = eq.solution().values()[0];
        assert!(approx_eq((x - 2.0).sqrt() + (x + 2.0).sqrt(), 4.0), "x = {}", x);
        assert!(check_solution("17/4", eq.solution()));
    }

    #[test]
    fn test_extraneous_root_is_not_accepted() {
        let eq = extraneous_root();
        let x = eq.solution().values()[0];
        assert!(approx_eq((2.0 * x + 7.0).sqrt(), x + 2.0));
        // -3 satisfies the squared equation but not the original
        assert!(!approx_eq((2.0 * -3.0 + 7.0_f64).sqrt(), -3.0 + 2.0));
        assert!(check_solution("1", eq.solution()));
        assert!(!check_solution("-3", eq.solution()));
    }

    #[test]
    fn test_every_tier_is_fixed() {
        let mut rng = rand::thread_rng();
        for difficulty in Difficulty::ALL {
            let first = generate_radical(&mut rng, difficulty);
            let second = generate_radical(&mut rng, difficulty);
            assert_eq!(first.latex(), second.latex());
            assert_eq!(first.steps(), second.steps());
        }
    }
}
