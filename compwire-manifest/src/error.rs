use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Manifest errors carry the whole source text, so they travel boxed.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text and its display name, shared by every diagnostic built
/// while reading one file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wrap a toml error, keeping its span when toml reports one.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn reserved_word_error(&self, name: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::ReservedWord {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// `first_span` and `second_span` label both definitions.
    pub fn duplicate_component_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateComponent {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    /// `name` is the lazy alias generated for `component`.
    pub fn lazy_alias_collision_error(
        &self,
        name: impl Into<String>,
        component: impl Into<String>,
        component_span: Option<SourceSpan>,
        alias_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::LazyAliasCollision {
            src: self.named_source(),
            component_span,
            alias_span,
            name: name.into(),
            component: component.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a components.toml listing the discovered components"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse components manifest")]
    #[diagnostic(code(compwire::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(compwire::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("duplicate component name '{name}'")]
    #[diagnostic(
        code(compwire::duplicate_component),
        help("component names become exported symbols and must be unique; rename one of them")
    )]
    DuplicateComponent {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("component name '{name}' clashes with the lazy alias of '{component}'")]
    #[diagnostic(
        code(compwire::lazy_alias_collision),
        help("every component is also exported as 'Lazy' + its name; rename '{name}'")
    )]
    LazyAliasCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("'{component}' defined here")]
        component_span: Option<SourceSpan>,
        #[label("clashes with its lazy alias")]
        alias_span: Option<SourceSpan>,
        name: String,
        component: String,
    },

    #[error("'{name}' is a JavaScript reserved word")]
    #[diagnostic(
        code(compwire::reserved_word),
        help("rename '{name}' to something else, e.g. '{name}Component'")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid component name '{name}'")]
    #[diagnostic(
        code(compwire::invalid_identifier),
        help(
            "use only letters, numbers, '_' and '$', starting with a letter, '_' or '$'"
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
    },
}
