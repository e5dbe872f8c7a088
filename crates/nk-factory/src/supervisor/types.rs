/// Which pipe a chunk of child output arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// What the supervisor hands to the display sink while a child runs.
///
/// Chunks from one stream arrive in emission order; interleaving between
/// the two streams carries no ordering guarantee.
#[derive(Debug, Clone)]
pub enum SinkEvent {
    Output(StreamKind, String),
    /// Spawn/wait failures, reported in-band. The supervisor itself never
    /// propagates an error past its boundary.
    Error(String),
}

/// Result of a short synchronous probe command.
#[derive(Debug, Clone)]
pub struct CaptureOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}
