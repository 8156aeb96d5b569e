//! Domain logic - pure release rules independent of the external tools

pub mod commit;
pub mod request;
pub mod tag;
pub mod version;

pub use commit::CommitMessage;
pub use request::{BumpRequest, RELEASE_VERSION_ENV};
pub use tag::TagPattern;
pub use version::VersionString;
