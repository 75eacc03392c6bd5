
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("{0}")]
    Buffer(#[from] ringq::Error),
    #[error("assertion failed: {0}")]
    Assertion(String),
    #[error("unable to start the logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::DemoError::Assertion(format!($($arg)+)));
        }
    };
}

/// Runs a fallible buffer operation that is expected to fail with the given error kind,
/// logging the message, and fails the scenario if it succeeded instead
macro_rules! expect_err {
    ($op:expr, $kind:pat) => {
        match $op {
            Err(err @ $kind) => log::info!("rejected as expected: {}", err),
            Err(err) => return Err($crate::error::DemoError::Buffer(err)),
            Ok(_) => return Err($crate::error::DemoError::Assertion(format!("`{}` should have failed", stringify!($op)))),
        }
    };
}
