//! Diagnostic errors produced by exact arithmetic.

define_errors! {
    ArithmeticErrors {
        ///A fraction was constructed with a denominator of zero, or a fraction was divided by zero.
        ///
        ///During reconstruction this happens when two selected points share an x-coordinate. The
        ///Lagrange basis for a point divides by the product of its differences from every other
        ///point, and a repeated x-coordinate makes one of those differences zero. For example,
        ///
        ///```text
        ///{ "keys": { "n": 2, "k": 2 },
        ///  "1":  { "base": "10", "value": "5" },
        ///  "01": { "base": "10", "value": "5" } }
        ///```
        ///
        ///names the x-coordinate 1 twice.
        A0001: ZeroDenominator

        ///The constant term of the polynomial through the selected points is not an integer.
        ///
        ///The reconstruction is exact and never rounds. A non-integer result means the points are
        ///inconsistent with any polynomial with an integer constant term, or that "k" is not the
        ///number of points the polynomial was meant to be reconstructed from. For example, the
        ///points (1, 1) and (3, 2) lie on the line y = x/2 + 1/2, whose constant term is 1/2.
        A0002: NonIntegerResult
    }
}
