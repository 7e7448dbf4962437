//! Diagnostic reporting with source locations
//!
//! Rich error messages with source labels via miette. The [`Reporter`]
//! is the append-only sink the inference visitors emit into; the
//! driver decides afterwards whether the unit compiles.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

use crate::common::Span;

/// Source file for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Compiler diagnostic
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CompileError {
    #[error("{message}")]
    #[diagnostic(code(typecheck::mismatch))]
    TypeMismatch {
        message: String,
        #[label("type error here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Undefined variable `{name}`")]
    #[diagnostic(
        code(resolve::undefined_var),
        help("every variable must be declared in a model block before use")
    )]
    UndefinedVariable {
        name: String,
        #[label("not found in this scope")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unknown unit in the type of `{name}`")]
    #[diagnostic(code(unit::unknown), help("check the unit spelling at the declaration"))]
    UnknownUnit {
        name: String,
        #[label("declared with an unparsable unit")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unknown function `{name}`")]
    #[diagnostic(code(resolve::undefined_fn))]
    UnknownFunction {
        name: String,
        #[label("no predefined function with this name")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

/// Error reporter that collects diagnostics
pub struct Reporter {
    source: SourceFile,
    errors: Vec<CompileError>,
}

impl Reporter {
    pub fn new(source: SourceFile) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    pub fn error(&mut self, error: CompileError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Create NamedSource for this file
    pub fn named_source(&self) -> NamedSource<String> {
        self.source.to_named_source()
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// Print all diagnostics
    pub fn emit_all(&self) {
        for error in &self.errors {
            eprintln!("{:?}", miette::Report::new(error.clone()));
        }
    }

    /// Consume and return errors
    pub fn into_errors(self) -> Vec<CompileError> {
        self.errors
    }

    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_collects() {
        let src = SourceFile::new("neuron.nml", "V_m real = true");
        let mut reporter = Reporter::new(src);
        assert!(!reporter.has_errors());

        reporter.error(CompileError::TypeMismatch {
            message: "boom".to_string(),
            span: Span::new(0, 3).into(),
            src: reporter.named_source(),
        });

        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.into_errors().len(), 1);
    }
}
