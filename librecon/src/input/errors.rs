//! Diagnostic errors produced while reading an input document.

define_errors! {
    InputErrors {
        ///The input document is not structured as expected. A document is a JSON object with a
        ///"keys" entry declaring the number of points "n" and the number of points to use "k",
        ///and one entry per point, keyed by its decimal x-coordinate:
        ///
        ///```text
        ///{
        ///  "keys": { "n": 4, "k": 3 },
        ///  "1": { "base": "10", "value": "4" },
        ///  "2": { "base": "2", "value": "111" },
        ///  "3": { "base": "10", "value": "12" },
        ///  "6": { "base": "4", "value": "213" }
        ///}
        ///```
        ///
        ///"n" must be a non-negative integer and "k" an integer. A point's "base" may be an
        ///integer or a string holding one, and its "value" is a string of digits in that base.
        R0001: MalformedInput

        ///The number of points in the document differs from the "n" it declares. For example,
        ///
        ///```text
        ///{
        ///  "keys": { "n": 3, "k": 2 },
        ///  "1": { "base": "10", "value": "4" },
        ///  "2": { "base": "10", "value": "7" }
        ///}
        ///```
        ///
        ///declares 3 points but carries 2. A key repeated in the document counts once; its last
        ///occurrence is used.
        R0002: PointCountMismatch

        ///The number of points to reconstruct from, "k", must be at least 1 and at most the
        ///number of points "n". The k points with the smallest x-coordinates are used.
        R0003: InvalidThreshold
    }
}
