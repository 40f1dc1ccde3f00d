use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum LoopedListError {
    #[error("Cannot loop an empty sequence")]
    #[diagnostic(
        code(looped_list::empty_sequence),
        help("Provide at least one value to build a looped list from")
    )]
    EmptySequence,

    #[error("Wrong LoopFrom {index} to loop from (sequence has {len} elements)")]
    #[diagnostic(
        code(looped_list::invalid_loop_from),
        help("LoopFrom must be a zero-based index smaller than the sequence length")
    )]
    InvalidLoopFrom { index: usize, len: usize },

    #[error("Wrong LoopTo {index} to loop to (sequence has {len} elements)")]
    #[diagnostic(
        code(looped_list::invalid_loop_to),
        help("LoopTo must be a zero-based index smaller than the sequence length")
    )]
    InvalidLoopTo { index: usize, len: usize },

    #[error("Sequence is already looped")]
    #[diagnostic(
        code(looped_list::already_looped),
        help("Drop the existing looped list before wiring the same nodes again")
    )]
    AlreadyLooped,

    #[error("JSON serialization error")]
    #[diagnostic(
        code(looped_list::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(looped_list::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(looped_list::io_error),
        help("Check that stdout is writable")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(looped_list::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

/// Check that `loop_from` and `loop_to` both address an element of a
/// sequence of length `len`.
///
/// `loop_from` is checked first, so a call where both indices are out of
/// range reports [`LoopedListError::InvalidLoopFrom`].
pub fn check_loop_bounds(len: usize, loop_from: usize, loop_to: usize) -> Result<(), LoopedListError> {
    if len == 0 {
        return Err(LoopedListError::EmptySequence);
    }
    if loop_from >= len {
        return Err(LoopedListError::InvalidLoopFrom {
            index: loop_from,
            len,
        });
    }
    if loop_to >= len {
        return Err(LoopedListError::InvalidLoopTo {
            index: loop_to,
            len,
        });
    }
    Ok(())
}
