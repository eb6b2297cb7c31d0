//! Diagnostics surfaced to users of librecon.
//!
//! Every [Error][crate::Error] maps to a [Diagnostic] carrying a stable code. Codes are registered
//! by the `errors` module of the component that produces them, along with a long-form explanation
//! that applications can show on request.

use crate::Error;
use std::collections::HashMap;

/// A record of a diagnostic code and its explanation.
pub(crate) trait DiagnosticRecord {
    /// The diagnostic code, like "D0002".
    const CODE: &'static str;
    /// A long-form explanation of the diagnostic.
    const EXPLANATION: &'static str;
}

/// A collection of diagnostic records produced by one component.
pub(crate) trait DiagnosticRegistry {
    /// Returns all codes in the registry paired with their explanations.
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

/// Defines a set of diagnostic records and a registry collecting them.
///
/// The doc comment on each record doubles as its explanation.
macro_rules! define_errors {
    ($registry:ident { $($(#[doc = $doc:expr])+ $code:ident: $error:ident)* }) => {
        $(
            $(#[doc = $doc])+
            pub(crate) struct $error;

            impl crate::diagnostics::DiagnosticRecord for $error {
                const CODE: &'static str = stringify!($code);
                const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
            }
        )*

        pub(crate) struct $registry;

        impl crate::diagnostics::DiagnosticRegistry for $registry {
            #[allow(clippy::vec_init_then_push)]
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                use crate::diagnostics::DiagnosticRecord;
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }
    };
}

/// A diagnostic for a failed reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stable code of the diagnostic.
    pub code: &'static str,
    /// One-line description of what went wrong.
    pub title: String,
}

impl Diagnostic {
    /// Returns all diagnostic codes librecon can produce, mapped to their explanations.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
        use crate::decode::errors::DecodeErrors;
        use crate::input::errors::InputErrors;
        use crate::math::errors::ArithmeticErrors;

        let mut codes = HashMap::new();
        codes.extend(InputErrors::codes_with_explanations());
        codes.extend(DecodeErrors::codes_with_explanations());
        codes.extend(ArithmeticErrors::codes_with_explanations());
        codes
    }
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code(),
            title: err.to_string(),
        }
    }
}
