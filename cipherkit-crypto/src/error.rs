//! Failure reporting for primitive operations.
//!
//! Every primitive failure (context setup, init, update, finalize, random
//! generation) is turned into a [`CryptoFailure`] by [`report`]. The cause is
//! handed over by value at the failing call site, so there is no shared
//! last-error slot to read or clear, and a failure cannot leak into a later
//! operation.

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoFailure>;

/// Upper bound, in bytes, on the rendered cause text.
pub const ERROR_TEXT_LIMIT: usize = 512;

/// Cause text used when a failure has no underlying primitive error.
pub const NO_ERROR: &str = "No error";

/// Step of an operation that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureStage {
    /// Acquiring the digest or cipher context.
    Context,
    /// Initializing the context with algorithm, key and IV.
    Init,
    /// Feeding input into the context.
    Update,
    /// Finalizing output (padding, unpadding, digest extraction).
    Finalize,
    /// Pulling bytes from the secure random source.
    Random,
    /// Caller-supplied input rejected before reaching the primitive.
    Input,
    /// A numeric algorithm selector could not be resolved.
    Selector,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Context => "context",
            Self::Init => "init",
            Self::Update => "update",
            Self::Finalize => "finalize",
            Self::Random => "random",
            Self::Input => "input",
            Self::Selector => "selector",
        };
        f.write_str(name)
    }
}

/// The single failure type of the toolkit.
///
/// The `Display` output is a multi-line diagnostic meant for logs:
/// cause text (or [`NO_ERROR`]), stage, originating function, file and line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[crypto failure] {cause}\nStage: {stage}\nFunction: {origin}\nFile: {file}\nLine: {line}")]
pub struct CryptoFailure {
    stage: FailureStage,
    origin: &'static str,
    file: &'static str,
    line: u32,
    cause: String,
    has_cause: bool,
}

impl CryptoFailure {
    /// Step of the operation that failed.
    pub fn stage(&self) -> FailureStage {
        self.stage
    }

    /// Module-qualified name of the operation that failed.
    pub fn origin(&self) -> &'static str {
        self.origin
    }

    /// Source file of the failing call site.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the failing call site.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Rendered cause text, or [`NO_ERROR`] if there was none.
    pub fn cause_text(&self) -> &str {
        &self.cause
    }

    /// Whether an underlying primitive error was attached.
    pub fn has_cause(&self) -> bool {
        self.has_cause
    }

    /// Full diagnostic string, identical to the `Display` output.
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}

/// Builds a [`CryptoFailure`] for a failing operation.
///
/// `cause` is rendered once and bounded to [`ERROR_TEXT_LIMIT`] bytes. An
/// absent or empty cause is replaced by [`NO_ERROR`].
pub fn report(
    stage: FailureStage,
    origin: &'static str,
    file: &'static str,
    line: u32,
    cause: Option<&dyn fmt::Display>,
) -> CryptoFailure {
    let rendered = cause.map(|c| bounded(c.to_string())).filter(|text| !text.is_empty());
    let has_cause = rendered.is_some();
    let cause = rendered.unwrap_or_else(|| NO_ERROR.to_string());

    debug!("{origin} failed at {stage} stage: {cause}");

    CryptoFailure {
        stage,
        origin,
        file,
        line,
        cause,
        has_cause,
    }
}

fn bounded(mut text: String) -> String {
    if text.len() > ERROR_TEXT_LIMIT {
        let mut end = ERROR_TEXT_LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

/// Reports a failure at the call site: `fail!(stage, "op")` or
/// `fail!(stage, "op", cause)`.
macro_rules! fail {
    ($stage:expr, $op:literal) => {
        $crate::error::report(
            $stage,
            concat!(module_path!(), "::", $op),
            file!(),
            line!(),
            None,
        )
    };
    ($stage:expr, $op:literal, $cause:expr) => {
        $crate::error::report(
            $stage,
            concat!(module_path!(), "::", $op),
            file!(),
            line!(),
            Some(&$cause as &dyn ::std::fmt::Display),
        )
    };
}

pub(crate) use fail;
