//! # Polynomial Equations
//!
//! - **Basic**: `ax + b = c` with a∈[1,10], b∈[1,20], c∈[1,30]
//! - **Intermediate**: `ax² + bx + c = 0` built backward from an integer root
//! - **Advanced**: a fixed cubic solved by the rational root test
//!
//! The basic tier is fully parametric. The intermediate tier samples its
//! coefficients but always has rational roots, so the discriminant is a
//! perfect square and the quadratic-formula steps stay exact.

use log::debug;
use rand::Rng;

use super::latex::{exact_sqrt, paren_if_negative, polynomial, Fraction};
use super::model::{Derivation, Difficulty, Equation, EquationType, Solution};
use super::random_int;

/// Generate a polynomial equation for the given tier.
pub fn generate_polynomial<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Equation {
    match difficulty {
        Difficulty::Basic => linear(rng),
        Difficulty::Intermediate => quadratic_from_root(rng),
        Difficulty::Advanced => fixed_cubic(),
    }
}

fn linear<R: Rng + ?Sized>(rng: &mut R) -> Equation {
    let a = random_int(rng, 1, 10);
    let b = random_int(rng, 1, 20);
    let c = random_int(rng, 1, 30);
    debug!("polynomial/basic: a={} b={} c={}", a, b, c);

    let rhs = c - b;
    let x = Fraction::new(rhs, a);
    let ax = polynomial(&[(a, "x")]);
    let latex = format!("{} = {}", polynomial(&[(a, "x"), (b, "")]), c);

    let steps = Derivation::new()
        .step(
            "Move the constant term",
            format!("{} = {} - {}", ax, c, b),
            format!("Subtract {} from both sides so only the x term stays on the left.", b),
        )
        .step(
            "Simplify the right side",
            format!("{} = {}", ax, rhs),
            "Work out the subtraction on the right.",
        )
        .step(
            "Divide by the coefficient",
            format!(r"x = \frac{{{}}}{{{}}}", rhs, a),
            format!("Divide both sides by {}, the coefficient of x.", a),
        )
        .step(
            "State the result",
            format!("x = {}", x.to_latex_with_decimal()),
            "Simplify the fraction to get the value of x.",
        );

    Equation::new(
        EquationType::Polynomial,
        Difficulty::Basic,
        format!("Solve: {}", latex),
        latex,
        Solution::Single(x.value()),
        steps,
        "A basic linear equation: move the constant across, then divide by the coefficient of x.",
    )
}

/// Choose a root `r` and coefficients `b`, `c`, then solve `a r² + b r + c = 0`
/// for `a`. When that `a` is not a non-zero integer, use `(x - r)² = 0`.
fn quadratic_from_root<R: Rng + ?Sized>(rng: &mut R) -> Equation {
    let mut r = random_int(rng, 1, 5);
    if rng.gen_bool(0.5) {
        r = -r;
    }
    let mut b = random_int(rng, -10, 10);
    let mut c = random_int(rng, -10, 10);

    let numerator = -(b * r + c);
    let a = if numerator % (r * r) == 0 && numerator != 0 {
        numerator / (r * r)
    } else {
        b = -2 * r;
        c = r * r;
        1
    };
    debug!("polynomial/intermediate: r={} a={} b={} c={}", r, a, b, c);

    // Product of the roots is c/a
    let other = Fraction::new(c, a * r);
    let discriminant = b * b - 4 * a * c;
    let root = exact_sqrt(discriminant).unwrap_or(0);

    let poly = polynomial(&[(a, "x^2"), (b, "x"), (c, "")]);
    let latex = format!("{} = 0", poly);

    let result = if discriminant == 0 {
        format!("x = {}", r)
    } else {
        let x1 = Fraction::new(-b + root, 2 * a);
        let x2 = Fraction::new(-b - root, 2 * a);
        format!(r"x_1 = {}, \quad x_2 = {}", x1.to_latex(), x2.to_latex())
    };

    let steps = Derivation::new()
        .step(
            "Identify the coefficients",
            latex.clone(),
            format!("The equation is in standard form with a = {}, b = {}, c = {}.", a, b, c),
        )
        .step(
            "Compute the discriminant",
            format!(
                r"\Delta = b^2 - 4ac = {}^2 - 4 \cdot {} \cdot {} = {}",
                paren_if_negative(b),
                paren_if_negative(a),
                paren_if_negative(c),
                discriminant
            ),
            "The discriminant tells us how many real roots there are.",
        )
        .step(
            "Take the square root",
            format!(r"\sqrt{{\Delta}} = \sqrt{{{}}} = {}", discriminant, root),
            if discriminant == 0 {
                "A zero discriminant means one repeated root."
            } else {
                "A perfect square discriminant means both roots are rational."
            },
        )
        .step(
            "Apply the quadratic formula",
            format!(
                r"x = \frac{{-b \pm \sqrt{{\Delta}}}}{{2a}} = \frac{{{} \pm {}}}{{{}}}",
                -b,
                root,
                2 * a
            ),
            "Substitute the coefficients and the square root of the discriminant.",
        )
        .step(
            "Find the roots",
            result,
            "Evaluate the plus and minus cases separately.",
        );

    Equation::new(
        EquationType::Polynomial,
        Difficulty::Intermediate,
        format!("Solve: {}", latex),
        latex,
        Solution::from_roots(vec![r as f64, other.value()]),
        steps,
        "An intermediate polynomial equation: a quadratic solved with the discriminant and the quadratic formula.",
    )
}

/// Same content every call; only the id changes.
fn fixed_cubic() -> Equation {
    let latex = "2x^3 - 3x^2 - 12x + 20 = 0";

    let steps = Derivation::new()
        .step(
            "List rational candidates",
            r"x \in \left\{\pm 1, \pm 2, \pm 4, \pm 5, \pm 10, \pm 20, \pm \tfrac{1}{2}, \pm \tfrac{5}{2}\right\}",
            "By the rational root test, any rational root is a factor of 20 divided by a factor of 2.",
        )
        .step(
            "Test x = 2",
            r"2(2)^3 - 3(2)^2 - 12(2) + 20 = 16 - 12 - 24 + 20 = 0",
            "x = 2 makes the polynomial zero, so (x - 2) is a factor.",
        )
        .step(
            "Divide out the factor",
            r"(x - 2)(2x^2 + x - 10) = 0",
            "Synthetic division by (x - 2) leaves a quadratic.",
        )
        .step(
            "Factor the quadratic",
            r"(x - 2)(x - 2)(2x + 5) = 0",
            "2x^2 + x - 10 splits as (x - 2)(2x + 5).",
        )
        .step(
            "Apply the zero product property",
            r"(x - 2)^2 = 0 \text{ or } 2x + 5 = 0",
            "A product is zero only if one of its factors is zero.",
        )
        .step(
            "State the result",
            r"x = 2 \text{ (double root) or } x = -\frac{5}{2}",
            "x = 2 appears twice, and the linear factor gives x = -2.5.",
        );

    Equation::new(
        EquationType::Polynomial,
        Difficulty::Advanced,
        format!("Solve: {}", latex),
        latex,
        Solution::Multiple(vec![2.0, -2.5]),
        steps,
        "An advanced polynomial equation: find one root with the rational root test, then factor what remains.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_solution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    /// Pull the integer coefficients back out of "ax + b = c".
    fn linear_params(latex: &str) -> (f64, f64, f64) {
        let (lhs, c) = latex.split_once(" = ").unwrap();
        let (ax, b) = lhs.split_once(" + ").unwrap();
        let a = ax.trim_end_matches('x');
        let a = if a.is_empty() { 1.0 } else { a.parse().unwrap() };
        (a, b.parse().unwrap(), c.parse().unwrap())
    }

    #[test]
    fn test_basic_solution_satisfies_equation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let eq = generate_polynomial(&mut rng, Difficulty::Basic);
            let (a, b, c) = linear_params(eq.latex());
            let x = match eq.solution() {
                Solution::Single(x) => *x,
                other => panic!("unexpected solution {:?}", other),
            };
            assert!(approx_eq(a * x + b, c), "{} with x = {}", eq.latex(), x);
            assert!(check_solution(&x.to_string(), eq.solution()));
            assert_eq!(eq.steps().len(), 4);
        }
    }

    #[test]
    fn test_basic_varies() {
        let mut rng = rand::thread_rng();
        let first = generate_polynomial(&mut rng, Difficulty::Basic);
        let varied = (0..50)
            .map(|_| generate_polynomial(&mut rng, Difficulty::Basic))
            .any(|eq| eq.latex() != first.latex());
        assert!(varied, "50 basic polynomials were identical");
    }

    #[test]
    fn test_intermediate_roots_satisfy_quadratic() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let eq = generate_polynomial(&mut rng, Difficulty::Intermediate);
            let step = &eq.steps()[0];
            // "a = 2, b = -3, c = 1."
            let coefs: Vec<f64> = step
                .explanation
                .trim_end_matches('.')
                .split("with ")
                .nth(1)
                .unwrap()
                .split(", ")
                .map(|part| part.split(" = ").nth(1).unwrap().parse().unwrap())
                .collect();
            let (a, b, c) = (coefs[0], coefs[1], coefs[2]);
            assert!(a != 0.0);
            for x in eq.solution().values() {
                assert!(approx_eq(a * x * x + b * x + c, 0.0), "{} with x = {}", eq.latex(), x);
            }
        }
    }

    #[test]
    fn test_advanced_is_fixed() {
        let mut rng = rand::thread_rng();
        let first = generate_polynomial(&mut rng, Difficulty::Advanced);
        for _ in 0..10 {
            let eq = generate_polynomial(&mut rng, Difficulty::Advanced);
            assert_eq!(eq.latex(), first.latex());
            assert_eq!(eq.solution(), first.solution());
        }
    }

    #[test]
    fn test_advanced_roots_satisfy_cubic() {
        let eq = fixed_cubic();
        for x in eq.solution().values() {
            let value = 2.0 * x.powi(3) - 3.0 * x.powi(2) - 12.0 * x + 20.0;
            assert!(approx_eq(value, 0.0), "f({}) = {}", x, value);
        }
    }
}
