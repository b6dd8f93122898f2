use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("buffer too short: need {need} bytes, got {got}")]
    ShortBuffer { need: usize, got: usize },

    #[error("string region would end at byte {end}, beyond the {max}-byte window")]
    WindowOverflow { end: usize, max: usize },

    #[error("string at {offset}+{length} is outside the {window}-byte window")]
    OutOfWindow {
        offset: usize,
        length: usize,
        window: usize,
    },

    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("time is outside the representable nanosecond range")]
    TimeOutOfRange,

    #[error("duration is outside the representable nanosecond range")]
    DurationOutOfRange,
}
