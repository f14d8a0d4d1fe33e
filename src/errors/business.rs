// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//! Business error type

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Classification tag carried by every error raised through this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Business,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Business => "BusinessError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application-level failure attributed to the module that raised it.
///
/// The recorded call site is the caller of [`BusinessError::new`] and is
/// the first frame of the trace. Helpers that build errors for their own
/// callers can be marked `#[track_caller]` to push it further up. The full
/// stack above it is kept in [`BusinessError::stack_trace`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BusinessError {
    message: String,
    module_name: String,
    kind: ErrorKind,
    call_site: &'static Location<'static>,
    stack_trace: Arc<Backtrace>,
}

impl BusinessError {
    #[track_caller]
    pub fn new(message: impl Into<String>, module_name: impl Into<String>) -> Self {
        BusinessError {
            message: message.into(),
            module_name: module_name.into(),
            kind: ErrorKind::Business,
            call_site: Location::caller(),
            stack_trace: Arc::new(Backtrace::force_capture()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn call_site(&self) -> &'static Location<'static> {
        self.call_site
    }

    /// Stack captured when the error was created. Frames below
    /// [`BusinessError::call_site`] belong to the capture itself.
    pub fn stack_trace(&self) -> &Backtrace {
        &self.stack_trace
    }
}

/// Finds the first [`BusinessError`] in an error chain, context layers included.
pub fn find_business_error(err: &anyhow::Error) -> Option<&BusinessError> {
    err.chain().find_map(|cause| cause.downcast_ref::<BusinessError>())
}
