//! Error types for the certification layer.
//!
//! Only construction-time and hashing-infrastructure failures are errors
//! here. A proof that fails to verify is not an error — `calculate`
//! reports that as `None`.

use thiserror::Error;

use imprint_core::SchemaError;
use imprint_merkle::MerkleError;

/// Error raised by certification operations.
#[derive(Error, Debug)]
pub enum CertError {
    /// The declared schema could not be built from its JSON form.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The underlying Merkle primitive failed.
    #[error(transparent)]
    Merkle(#[from] MerkleError),
}
