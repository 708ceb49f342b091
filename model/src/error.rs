use thiserror::Error;

/// Everything that can be wrong with a facility instance. All of these are fatal: a facility that
/// fails to load is never partially usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("there must be at least {minimum} entry points, but {found} were given")]
    TooFewEntryPoints { found: usize, minimum: usize },

    #[error("entry point '{0}' is given more than once")]
    DuplicateEntryPoint(String),

    #[error("distance table has {rows} rows but there are {slots} slots")]
    SlotCountMismatch { rows: usize, slots: usize },

    #[error("distance row of slot {slot} has {found} entries, expected {expected}")]
    DistanceRowMismatch {
        slot: usize,
        found: usize,
        expected: usize,
    },

    #[error("position {0} exceeds the range of slot and entry point indices")]
    IndexOutOfRange(usize),

    #[error("unknown size code '{0}' (use S, M or L)")]
    UnknownSizeCode(String),

    #[error("invalid fee schedule: {0}")]
    InvalidFeeSchedule(String),

    #[error("malformed instance: {0}")]
    MalformedInstance(String),
}
