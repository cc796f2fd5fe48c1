pub mod companion;
pub mod error;
pub mod generator;

// Re-export commonly used types
pub use companion::{SourceKind, SourcePath};
pub use error::{StubError, StubResult};
pub use generator::{ensure_headers, Report};
