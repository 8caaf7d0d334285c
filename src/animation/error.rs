//! Animation domain: failures reported by the parameter bridge.

/// Error kinds raised when the animation graph cannot honour a request.
///
/// None of these are fatal: callers log them and keep running the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The bound graph does not declare the parameter.
    MissingParameter { name: String, owner: String },
    /// The bound graph has no layer with this name.
    MissingLayer { name: String },
    /// No graph is bound, or it was removed while a task was suspended.
    SubsystemUnavailable,
}

impl std::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationError::MissingParameter { name, owner } => {
                write!(f, "Animator parameter '{}' not found on '{}'", name, owner)
            }
            AnimationError::MissingLayer { name } => {
                write!(f, "Animator layer '{}' not found", name)
            }
            AnimationError::SubsystemUnavailable => {
                write!(f, "Animator is missing or was destroyed")
            }
        }
    }
}

impl std::error::Error for AnimationError {}
