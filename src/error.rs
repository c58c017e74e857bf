use thiserror::Error;

/// Input-integrity failures.
///
/// Every variant is a configuration error in the supplied tournament data and
/// aborts the run before any match is simulated. Model edge cases (tied
/// scores, knockout ties) are defined policies, not errors, and never appear
/// here.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("team {code:?} referenced in exhibition data is not in any group")]
    MissingTeam { code: String },

    #[error("malformed score {raw:?}, expected \"<int>-<int>\"")]
    MalformedScore { raw: String },

    #[error("group {group:?} has {len} teams, expected exactly {expected}")]
    GroupSize {
        group: String,
        len: usize,
        expected: usize,
    },

    #[error("team {code:?} has no exhibition history to derive a base score from")]
    EmptyExhibitionHistory { code: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
