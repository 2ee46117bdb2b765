//! # LaTeX Formatting Helpers
//!
//! Small helpers for rendering the numbers and polynomials that generators
//! splice into equation statements and step markup.
//!
//! ```rust
//! use algebra_core::equations::latex::{polynomial, Fraction};
//!
//! assert_eq!(polynomial(&[(1, "x^2"), (-4, "x"), (4, "")]), "x^2 - 4x + 4");
//! assert_eq!(Fraction::new(6, -4).to_latex(), r"-\frac{3}{2}");
//! ```

use std::fmt;

/// Format a float for display: integers without a decimal point, everything
/// else rounded to four places with trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // Avoid printing "-0"
        return format!("{}", value as i64);
    }
    let rounded = format!("{:.4}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a sum of integer-coefficient terms, e.g. `[(2, "x"), (-3, "")]`
/// becomes `2x - 3`. Zero terms are skipped and unit coefficients on
/// variable terms are elided.
pub fn polynomial(terms: &[(i64, &str)]) -> String {
    let mut out = String::new();

    for &(coef, var) in terms {
        if coef == 0 {
            continue;
        }
        let magnitude = coef.unsigned_abs();
        let body = if var.is_empty() {
            magnitude.to_string()
        } else if magnitude == 1 {
            var.to_string()
        } else {
            format!("{}{}", magnitude, var)
        };

        if out.is_empty() {
            if coef < 0 {
                out.push('-');
            }
            out.push_str(&body);
        } else {
            out.push_str(if coef < 0 { " - " } else { " + " });
            out.push_str(&body);
        }
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// Parenthesize negative integers so they can follow an operator.
pub fn paren_if_negative(value: i64) -> String {
    if value < 0 {
        format!("({})", value)
    } else {
        value.to_string()
    }
}

/// Greatest common divisor (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Integer square root when `n` is a perfect square.
pub fn exact_sqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let root = (n as f64).sqrt().round() as i64;
    (root * root == n).then_some(root)
}

/// A reduced rational number with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Create a reduced fraction. `den` must be non-zero; every caller
    /// passes a coefficient drawn from a range that excludes zero.
    pub fn new(num: i64, den: i64) -> Self {
        debug_assert!(den != 0, "fraction with zero denominator");
        let g = gcd(num, den).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Fraction {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    /// Whole number
    pub fn integer(value: i64) -> Self {
        Fraction { num: value, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// `7`, `-\frac{3}{2}`
    pub fn to_latex(&self) -> String {
        if self.is_integer() {
            self.num.to_string()
        } else if self.num < 0 {
            format!(r"-\frac{{{}}}{{{}}}", -self.num, self.den)
        } else {
            format!(r"\frac{{{}}}{{{}}}", self.num, self.den)
        }
    }

    /// Exact form followed by a decimal approximation when it is not whole,
    /// e.g. `\frac{7}{3} \approx 2.3333`.
    pub fn to_latex_with_decimal(&self) -> String {
        if self.is_integer() {
            self.to_latex()
        } else {
            let decimal = format_number(self.value());
            let exact = decimal
                .parse::<f64>()
                .map(|shown| (shown - self.value()).abs() < 1e-12)
                .unwrap_or(false);
            format!(
                r"{} {} {}",
                self.to_latex(),
                if exact { "=" } else { r"\approx" },
                decimal
            )
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(13.0), "13");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(7.0 / 3.0), "2.3333");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_polynomial_signs() {
        assert_eq!(polynomial(&[(3, "x"), (5, "")]), "3x + 5");
        assert_eq!(polynomial(&[(-1, "x^2"), (0, "x"), (-7, "")]), "-x^2 - 7");
        assert_eq!(polynomial(&[(0, "x"), (0, "")]), "0");
    }

    #[test]
    fn test_fraction_reduces() {
        let f = Fraction::new(-10, -4);
        assert_eq!(f.numerator(), 5);
        assert_eq!(f.denominator(), 2);
        assert_eq!(f.to_latex(), r"\frac{5}{2}");
        assert_eq!(f.to_string(), "5/2");
        assert!(Fraction::new(12, 4).is_integer());
    }

    #[test]
    fn test_fraction_decimal_suffix() {
        assert_eq!(Fraction::new(3, 2).to_latex_with_decimal(), r"\frac{3}{2} = 1.5");
        assert_eq!(Fraction::new(1, 3).to_latex_with_decimal(), r"\frac{1}{3} \approx 0.3333");
        assert_eq!(Fraction::new(8, 2).to_latex_with_decimal(), "4");
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_sqrt(49), Some(7));
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(50), None);
        assert_eq!(exact_sqrt(-4), None);
    }
}
