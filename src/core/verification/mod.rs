//! Output verification for post-run validation
//!
//! Re-reads every written document and checks its integrity and that no
//! placeholder survived.

pub mod checksum;
pub mod report;
pub mod verify;

pub use report::{VerificationFailure, VerificationFailureKind, VerificationReport};
pub use verify::Verifier;
