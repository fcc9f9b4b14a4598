use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {column} value stored in database: '{value}'")]
    UnknownStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// No free profile serial number was found after repeated attempts.
    #[error("Failed to allocate a unique profile serial number after {0} attempts")]
    SerialNumberExhausted(u32),

    /// A row that was just written could not be read back.
    #[error("{0} missing after write")]
    MissingAfterWrite(&'static str),
}
