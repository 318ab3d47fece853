pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by the library.
///
/// Contradictions discovered while solving are not errors: propagation and
/// search report them as an absent solution and the engine backtracks. The
/// only failure a caller must handle through `Result` is a grid string that
/// does not decode to a full board.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid must contain exactly 81 cells, found {found}")]
    MalformedGrid { found: usize },
}
