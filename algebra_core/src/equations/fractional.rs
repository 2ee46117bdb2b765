//! # Fractional Equations
//!
//! - **Basic**: `a/(x+b) = c` with a∈[1,10], b∈[1,5], c∈[1,5]
//! - **Intermediate**: `a/(x+b) + c/(x+d) = e`, built backward from an
//!   integer root so the stored solution always follows from the statement
//! - **Advanced**: a fixed equation whose denominators factor over `x² - 9`
//!
//! `c` in the basic tier is never zero, which keeps `x = a/c - b` defined.

use log::debug;
use rand::Rng;

use super::latex::{exact_sqrt, polynomial, Fraction};
use super::model::{Derivation, Difficulty, Equation, EquationType, Solution};
use super::random_int;

/// Generate a fractional equation for the given tier.
pub fn generate_fractional<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Equation {
    match difficulty {
        Difficulty::Basic => single_fraction(rng),
        Difficulty::Intermediate => two_fractions(rng),
        Difficulty::Advanced => fixed_factored_denominator(),
    }
}

fn single_fraction<R: Rng + ?Sized>(rng: &mut R) -> Equation {
    let a = random_int(rng, 1, 10);
    let b = random_int(rng, 1, 5);
    let c = random_int(rng, 1, 5);
    debug!("fractional/basic: a={} b={} c={}", a, b, c);

    let cb = c * b;
    let x = Fraction::new(a - cb, c);
    let denom = polynomial(&[(1, "x"), (b, "")]);
    let cx = polynomial(&[(c, "x")]);
    let latex = format!(r"\frac{{{}}}{{{}}} = {}", a, denom, c);

    let steps = Derivation::new()
        .step(
            format!("Multiply both sides by ({})", denom),
            format!(r"\frac{{{a}}}{{{d}}} \cdot ({d}) = {c} \cdot ({d})", a = a, d = denom, c = c),
            "Multiplying by the denominator removes the unknown from the bottom of the fraction.",
        )
        .step(
            "Simplify the left side",
            format!("{} = {}({})", a, c, denom),
            format!("The ({}) factors cancel, leaving {}.", denom, a),
        )
        .step(
            "Expand the right side",
            format!("{} = {}", a, polynomial(&[(c, "x"), (cb, "")])),
            "Distribute the multiplication over the parentheses.",
        )
        .step(
            "Move the constant",
            format!("{} - {} = {}", a, cb, cx),
            format!("Subtract {} from both sides.", cb),
        )
        .step(
            "Divide by the coefficient",
            format!(r"x = \frac{{{} - {}}}{{{}}}", a, cb, c),
            format!("Divide both sides by {}, the coefficient of x.", c),
        )
        .step(
            "State the result",
            format!("x = {}", x.to_latex_with_decimal()),
            "Simplify to get the value of x.",
        );

    Equation::new(
        EquationType::Fractional,
        Difficulty::Basic,
        format!("Solve: {}", latex),
        latex,
        Solution::Single(x.value()),
        steps,
        "A basic fractional equation: multiply through by the denominator, then solve the linear equation that remains.",
    )
}

/// Pick the root first: with `a = k1(r+b)` and `c = k2(r+d)` each fraction
/// evaluates to an integer at `x = r`, and `e = k1 + k2`.
fn two_fractions<R: Rng + ?Sized>(rng: &mut R) -> Equation {
    let r = random_int(rng, 1, 4);
    let b = random_int(rng, 1, 5);
    let mut d = random_int(rng, 1, 5);
    if d == b {
        d = if b == 5 { 1 } else { b + 1 };
    }
    let k1 = random_int(rng, 1, 3);
    let k2 = random_int(rng, 1, 3);
    let a = k1 * (r + b);
    let c = k2 * (r + d);
    let e = k1 + k2;
    debug!("fractional/intermediate: r={} a={} b={} c={} d={} e={}", r, a, b, c, d, e);

    // a(x+d) + c(x+b) = e(x+b)(x+d)  =>  qa x² + qb x + qc = 0
    let qa = e;
    let qb = e * (b + d) - a - c;
    let qc = e * b * d - a * d - c * b;
    let other = Fraction::new(qc, qa * r);
    let other_valid = other != Fraction::integer(-b) && other != Fraction::integer(-d);

    let xb = polynomial(&[(1, "x"), (b, "")]);
    let xd = polynomial(&[(1, "x"), (d, "")]);
    let latex = format!(r"\frac{{{}}}{{{}}} + \frac{{{}}}{{{}}} = {}", a, xb, c, xd, e);

    let discriminant = qb * qb - 4 * qa * qc;
    let root = exact_sqrt(discriminant).unwrap_or(0);
    let candidates = if discriminant == 0 {
        format!("x = {}", r)
    } else {
        format!(r"x = {} \text{{ or }} x = {}", r, other.to_latex())
    };

    let (check_explanation, roots, result) = if discriminant == 0 || other == Fraction::integer(r) {
        (
            format!("x = {} does not make either denominator zero, so it is valid.", r),
            vec![r as f64],
            format!("x = {}", r),
        )
    } else if other_valid {
        (
            format!(
                "Neither x = {} nor x = {} makes a denominator zero, so both are solutions.",
                r, other
            ),
            vec![r as f64, other.value()],
            format!(r"x = {} \text{{ or }} x = {}", r, other.to_latex()),
        )
    } else {
        (
            format!(
                "x = {} would make a denominator zero, so it is rejected; only x = {} remains.",
                other, r
            ),
            vec![r as f64],
            format!("x = {}", r),
        )
    };

    let steps = Derivation::new()
        .step(
            "Find the common denominator",
            format!(r"\text{{LCD}} = ({})({})", xb, xd),
            "The denominators are different, so multiply them to get a common denominator.",
        )
        .step(
            "Clear the denominators",
            format!("{}({}) + {}({}) = {}({})({})", a, xd, c, xb, e, xb, xd),
            "Multiply every term by the common denominator.",
        )
        .step(
            "Expand both sides",
            format!(
                "{} = {}",
                polynomial(&[(a + c, "x"), (a * d + c * b, "")]),
                polynomial(&[(e, "x^2"), (e * (b + d), "x"), (e * b * d, "")])
            ),
            "Multiply out the products and collect like terms on each side.",
        )
        .step(
            "Move everything to one side",
            format!("{} = 0", polynomial(&[(qa, "x^2"), (qb, "x"), (qc, "")])),
            "Bring all terms to the right-hand side and write the quadratic in standard form.",
        )
        .step(
            "Solve the quadratic",
            format!(
                r"x = \frac{{{} \pm \sqrt{{{}}}}}{{{}}} \;\Rightarrow\; {}",
                -qb,
                discriminant,
                2 * qa,
                candidates
            ),
            format!("The discriminant is {} = {}^2, so the roots are rational.", discriminant, root),
        )
        .step(
            "Check the denominators",
            format!(r"{} \neq 0, \quad {} \neq 0", xb, xd),
            check_explanation,
        )
        .step("State the result", result, "Only values that keep every denominator non-zero are solutions.");

    Equation::new(
        EquationType::Fractional,
        Difficulty::Intermediate,
        format!("Solve: {}", latex),
        latex,
        Solution::from_roots(roots),
        steps,
        "An intermediate fractional equation: clear both denominators, solve the resulting quadratic, and reject any value that makes a denominator zero.",
    )
}

fn fixed_factored_denominator() -> Equation {
    let latex = r"\frac{2x}{x^2-9} + \frac{1}{x-3} = \frac{2}{x+3}";

    let steps = Derivation::new()
        .step(
            "Factor the denominator",
            r"x^2 - 9 = (x-3)(x+3)",
            "The first denominator is a difference of squares.",
        )
        .step(
            "Note the restrictions",
            r"x \neq 3, \quad x \neq -3",
            "These values would make a denominator zero.",
        )
        .step(
            "Multiply by the common denominator",
            r"2x + (x+3) = 2(x-3)",
            "Multiply every term by (x-3)(x+3).",
        )
        .step(
            "Expand",
            r"2x + x + 3 = 2x - 6",
            "Remove the parentheses.",
        )
        .step(
            "Combine like terms",
            r"3x + 3 = 2x - 6",
            "Add the x terms on the left.",
        )
        .step(
            "Isolate x",
            r"3x - 2x = -6 - 3",
            "Move the x terms left and the constants right.",
        )
        .step("Simplify", r"x = -9", "Carry out both subtractions.")
        .step(
            "Check the restrictions",
            r"\frac{-18}{72} + \frac{1}{-12} = -\frac{1}{3} = \frac{2}{-6}",
            "x = -9 is neither 3 nor -3, and substituting it balances the equation.",
        );

    Equation::new(
        EquationType::Fractional,
        Difficulty::Advanced,
        format!("Solve: {}", latex),
        latex,
        Solution::Single(-9.0),
        steps,
        "An advanced fractional equation: factor the denominators, clear them, solve, and confirm the answer is not excluded.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    /// Numbers inside `\frac{..}{x + ..}` and after the final '='.
    fn frac_params(latex: &str) -> Vec<f64> {
        latex
            .split(|ch: char| !(ch.is_ascii_digit()))
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_basic_solution_satisfies_equation() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let eq = generate_fractional(&mut rng, Difficulty::Basic);
            let p = frac_params(eq.latex());
            let (a, b, c) = (p[0], p[1], p[2]);
            let x = eq.solution().values()[0];
            assert!(approx_eq(a / (x + b), c), "{} with x = {}", eq.latex(), x);
            assert_eq!(eq.steps().len(), 6);
        }
    }

    #[test]
    fn test_intermediate_solution_satisfies_equation() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..300 {
            let eq = generate_fractional(&mut rng, Difficulty::Intermediate);
            let p = frac_params(eq.latex());
            let (a, b, c, d, e) = (p[0], p[1], p[2], p[3], p[4]);
            assert!(b != d, "denominators should differ: {}", eq.latex());
            for x in eq.solution().values() {
                assert!((x + b).abs() > 1e-9 && (x + d).abs() > 1e-9);
                let lhs = a / (x + b) + c / (x + d);
                assert!(approx_eq(lhs, e), "{} with x = {}", eq.latex(), x);
            }
            assert_eq!(eq.steps().len(), 7);
        }
    }

    #[test]
    fn test_advanced_solution_satisfies_equation() {
        let eq = fixed_factored_denominator();
        let x = eq.solution().values()[0];
        let lhs = 2.0 * x / (x * x - 9.0) + 1.0 / (x - 3.0);
        let rhs = 2.0 / (x + 3.0);
        assert!(approx_eq(lhs, rhs));
    }
}
