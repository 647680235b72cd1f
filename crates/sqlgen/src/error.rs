use thiserror::Error;

/// Errors raised while generating a statement from a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Every column was zero-valued and none was forced or used as a key.
    #[error("Nothing to update in `{table}`: no column survived the zero-value filter")]
    NothingToUpdate { table: String },

    /// The record maps no insertable columns.
    #[error("Nothing to insert into `{table}`: record has no insertable columns")]
    NothingToInsert { table: String },

    /// A key column was requested that the record does not map.
    #[error("Key column `{column}` is not mapped by the record for `{table}`")]
    UnknownKeyColumn { table: String, column: String },

    #[error("Invalid filter joiner `{0}`, expected AND or OR")]
    InvalidJoiner(String),
}
