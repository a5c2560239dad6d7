use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("{document} is not well-formed XML: {source}")]
    Xml {
        document: String,
        source: roxmltree::Error,
    },

    #[error("{document} included no annotations")]
    EmptyAnnotations { document: String },

    #[error("{document}:{line}: malformed annotation: {reason}")]
    MalformedAnnotation {
        document: String,
        line: u32,
        reason: String,
    },
}

impl AnnotationError {
    /// Identifier of the document that caused the error.
    pub fn document(&self) -> &str {
        match self {
            AnnotationError::Xml { document, .. }
            | AnnotationError::EmptyAnnotations { document }
            | AnnotationError::MalformedAnnotation { document, .. } => document,
        }
    }
}
