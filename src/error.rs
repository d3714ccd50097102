use thiserror::Error;

/// Errors that can occur when setting up or driving a round.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("draw pile holds {available} cards but dealing needs {needed}")]
    EmptyDrawPile { needed: usize, available: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("illegal action: {0}")]
    Play(#[from] PlayError),
    #[error("failed to spawn actor thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Rejections a player can act upon. The round is left untouched whenever one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    #[error("not the specified seat's turn")]
    NotYourTurn,
    #[error("card does not match the table")]
    CardNotPlayable,
    #[error("a colour must be chosen before anything else happens")]
    ColorChoicePending,
    #[error("the draw pile is empty")]
    DeckEmpty,
    #[error("no colour choice is pending")]
    IllegalColorChoice,
    #[error("round is already over")]
    RoundOver,
    #[error("only a seat holding exactly one card can declare")]
    NothingToDeclare,
}
