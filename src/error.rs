pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced while building problem models from external input.
///
/// The search itself has no error channel: an unsatisfiable or cancelled
/// search is reported through the solver's Boolean result, and contract
/// violations (out-of-range indices, zero-arity constraints) panic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("puzzle must contain {expected} cells, found {found}")]
    PuzzleSize { expected: usize, found: usize },

    #[error("unrecognised character {found:?} at cell {cell}")]
    PuzzleCharacter { cell: usize, found: char },
}
