//! Library entry for oreo-cli used by integration tests and embedding.

pub mod commands;
pub mod schema;

// Re-export commands for convenience
pub use commands::*;
pub use schema::Schema;

/// Integer width accepted by the varint commands
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Width {
    /// 16-bit integers (at most 3 bytes on the wire)
    #[value(name = "16")]
    W16,
    /// 32-bit integers (at most 5 bytes on the wire)
    #[value(name = "32")]
    W32,
    /// 64-bit integers (at most 10 bytes on the wire)
    #[value(name = "64")]
    W64,
}
