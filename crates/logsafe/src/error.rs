use thiserror::Error;

/// Failures raised by [`OpaqueValue`](crate::opaque::OpaqueValue)
/// implementations. They are absorbed at the call site — into a sentinel by
/// the serializer, into entry omission by the sanitizing filter — and never
/// reach callers of `dump` or `sanitize`.
#[derive(Debug, Error)]
pub enum Error {
    /// The value could not produce a human-readable text form.
    #[error("no text form: {0}")]
    Repr(String),

    /// The value cannot be duplicated for independent retention.
    #[error("cannot duplicate: {0}")]
    Duplicate(String),
}

pub type Result<T> = core::result::Result<T, Error>;
