//! User-facing recon diagnostics.
//!
//! The diagnostics module demarshalls [librecon diagnostics][librecon::diagnostics] into a form
//! pleasant for standard error. A diagnostic is always emitted as a single line.

use librecon::diagnostics::Diagnostic;

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Snippet},
};

pub fn emit_recon_diagnostic(diagnostic: &Diagnostic, color: bool) -> String {
    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(&diagnostic.title),
            id: Some(diagnostic.code),
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };
    DisplayList::from(snippet).to_string().trim_end().to_owned()
}
