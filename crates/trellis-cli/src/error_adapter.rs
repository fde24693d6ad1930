//! Adapter for rendering [`TrellisError`] with miette.
//!
//! Trellis errors carry no source spans, so the adapter contributes an error
//! code and, where one applies, a hint on how to fix the input.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use trellis::{TrellisError, trace::TraceError};

/// Wraps a [`TrellisError`] so it can be rendered by a miette report handler.
pub struct ErrorAdapter<'a>(pub &'a TrellisError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrellisError::Io(_) => "trellis::io",
            TrellisError::Trace(_) => "trellis::trace",
            TrellisError::Grid(_) => "trellis::layout",
            TrellisError::Render(_) => "trellis::render",
            TrellisError::Config(_) => "trellis::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TrellisError::Trace(TraceError::Parse(_)) => {
                "the input must be a JSON object with a `states` array"
            }
            TrellisError::Trace(TraceError::Empty) => "the trace must contain at least one state",
            TrellisError::Trace(TraceError::UnknownSignature(_)) => {
                "set `layout.signature` to a signature present in every state"
            }
            TrellisError::Trace(TraceError::UnknownField(_)) => {
                "every relation in `layout.fields` must be declared in every state"
            }
            TrellisError::Trace(TraceError::LoopbackOutOfRange { .. }) => {
                "the loop-back index counts states from zero"
            }
            TrellisError::Grid(_) => "cell sizes and grid dimensions must be positive",
            TrellisError::Config(_) => "check the TOML configuration file",
            TrellisError::Io(_) | TrellisError::Render(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wraps `err` for reporting.
pub fn to_reportable(err: &TrellisError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
