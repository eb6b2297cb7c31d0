//! Diagnostic errors produced by the base-N decoder.

define_errors! {
    DecodeErrors {
        ///Point values may be encoded in any base from 2 to 62, inclusive. This error is fired on
        ///a point whose base is outside that range, for example
        ///
        ///```text
        ///"3": { "base": "63", "value": "12" }
        ///```
        ///
        ///Base 62 is the largest base that can be written with the digits "0"-"9", "A"-"Z", and
        ///"a"-"z".
        D0001: UnsupportedBase

        ///A point value contains a character that is not a digit of its base.
        ///
        ///Digits are valued in the order
        ///
        ///```text
        ///0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz
        ///```
        ///
        ///so "A" is 10, "Z" is 35, "a" is 36 and "z" is 61. A digit must be less than the base.
        ///
        ///Digits are case-sensitive. "ff" is not a base-16 number, because "f" is 51; write "FF"
        ///instead. A character that is not in the list at all is read as its uppercase form if
        ///that is a single listed character, so "ı" (dotless i) is read as "I".
        ///
        ///A leading "-" marks a negative value; anywhere else it is an invalid digit.
        D0002: InvalidDigit
    }
}
