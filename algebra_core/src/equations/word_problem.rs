//! # Word Problems
//!
//! Fixed narrative templates: an age ratio (basic), a pursuit problem
//! (intermediate) and a border-area problem whose quadratic has a negative
//! root that has to be discarded (advanced).

use rand::Rng;

use super::model::{Derivation, Difficulty, Equation, EquationType, Solution};

/// Generate a word problem for the given tier. Every tier is fixed.
pub fn generate_word_problem<R: Rng + ?Sized>(_rng: &mut R, difficulty: Difficulty) -> Equation {
    match difficulty {
        Difficulty::Basic => age_ratio(),
        Difficulty::Intermediate => pursuit(),
        Difficulty::Advanced => pool_border(),
    }
}

fn age_ratio() -> Equation {
    let steps = Derivation::new()
        .step(
            "Choose the unknown",
            r"\text{Let Lily's age be } x \text{, so Sam's age is } 5x",
            "Sam is five times as old as Lily, so both ages can be written with one unknown.",
        )
        .step("Write the equation", r"x + 5x = 36", "Their ages add up to 36.")
        .step("Combine like terms", r"6x = 36", "x + 5x = 6x.")
        .step("Divide by 6", r"x = 6", "Divide both sides by the coefficient of x.")
        .step("Check", r"6 + 5 \cdot 6 = 6 + 30 = 36", "The ages add up to 36 as required.")
        .step(
            "Answer the question",
            r"\text{Lily is 6 and Sam is 30}",
            "Lily is 6 years old; Sam is 5 \u{d7} 6 = 30.",
        );

    Equation::new(
        EquationType::WordProblem,
        Difficulty::Basic,
        "Sam is 5 times as old as Lily, and together their ages add up to 36 years. How old is Lily?",
        r"x + 5x = 36",
        Solution::Single(6.0),
        steps,
        "A basic word problem: choose an unknown, translate the sentence into an equation, and solve it.",
    )
}

fn pursuit() -> Equation {
    let steps = Derivation::new()
        .step(
            "Choose the unknown",
            r"\text{Let the motorcycle need } t \text{ hours to catch up}",
            "Measure time from the moment the motorcycle leaves.",
        )
        .step(
            "Analyse the travel times",
            r"\text{car: } (2 + t) \text{ h}, \quad \text{motorcycle: } t \text{ h}",
            "The car has a two-hour head start.",
        )
        .step(
            "Write the equation",
            r"60 \cdot (2 + t) = 80 \cdot t",
            "When the motorcycle catches up, both have covered the same distance.",
        )
        .step("Expand", r"120 + 60t = 80t", "Multiply out the left side.")
        .step("Collect the t terms", r"120 = 80t - 60t", "Move the t terms to the right.")
        .step("Combine like terms", r"120 = 20t", "80t - 60t = 20t.")
        .step("Solve", r"t = \frac{120}{20} = 6", "Divide both sides by 20.");

    Equation::new(
        EquationType::WordProblem,
        Difficulty::Intermediate,
        "A car leaves town A at 60 km/h. Two hours later a motorcycle leaves from the same place in the same direction at 80 km/h. How many hours does the motorcycle need to catch up with the car?",
        r"60 \cdot (2 + t) = 80 \cdot t",
        Solution::Single(6.0),
        steps,
        "An intermediate word problem: equal distances give the equation, with the head start built into the car's travel time.",
    )
}

fn pool_border() -> Equation {
    let latex = r"(12+2x)(8+2x) - 12 \cdot 8 = 12 \cdot 8";

    let steps = Derivation::new()
        .step(
            "Choose the unknown",
            r"\text{Let the walkway be } x \text{ metres wide}",
            "The walkway has the same width on every side.",
        )
        .step(
            "Analyse the geometry",
            r"\text{outer length: } (12 + 2x) \text{ m}, \quad \text{outer width: } (8 + 2x) \text{ m}",
            "The walkway adds x on both ends of each side.",
        )
        .step(
            "Write the equation",
            latex,
            "Walkway area = outer area - pool area, and it must equal the pool area.",
        )
        .step("Rearrange", r"(12+2x)(8+2x) = 2 \cdot 12 \cdot 8", "Add the pool area to both sides.")
        .step("Expand the left side", r"96 + 16x + 24x + 4x^2 = 192", "Multiply out the product.")
        .step("Combine like terms", r"96 + 40x + 4x^2 = 192", "16x + 24x = 40x.")
        .step("Move all terms to one side", r"4x^2 + 40x + 96 - 192 = 0", "Subtract 192 from both sides.")
        .step("Simplify", r"4x^2 + 40x - 96 = 0", "Combine the constants.")
        .step("Divide by 4", r"x^2 + 10x - 24 = 0", "Divide every term by 4 to simplify the coefficients.")
        .step("Factor", r"(x+12)(x-2) = 0", "12 and -2 multiply to -24 and add to 10.")
        .step("Solve", r"x = -12 \text{ or } x = 2", "Apply the zero product property.")
        .step("Discard the negative root", r"x = 2", "A width cannot be negative, so x = -12 is rejected.");

    Equation::new(
        EquationType::WordProblem,
        Difficulty::Advanced,
        "A rectangular pool is 12 m long and 8 m wide. A walkway of equal width is built around it so that the walkway's area equals the pool's area. How wide is the walkway?",
        latex,
        Solution::Single(2.0),
        steps,
        "An advanced word problem: the geometry leads to a quadratic, and the root with no physical meaning is discarded.",
    )
}
