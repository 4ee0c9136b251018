use crate::painter::PresentOutcome;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the frame is dropped.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Unrecoverable (out of memory).
    Fatal,
}

impl SurfaceErrorAction {
    #[inline]
    pub fn is_fatal(self) -> bool {
        self == SurfaceErrorAction::Fatal
    }

    /// What a present reports when it hits this error. Every recoverable
    /// error drops the frame.
    #[inline]
    pub fn outcome(self) -> PresentOutcome {
        PresentOutcome::Skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_is_fatal() {
        assert!(SurfaceErrorAction::Fatal.is_fatal());
        assert!(!SurfaceErrorAction::Reconfigured.is_fatal());
        assert!(!SurfaceErrorAction::SkipFrame.is_fatal());
    }

    #[test]
    fn recoverable_errors_skip_the_frame() {
        assert_eq!(SurfaceErrorAction::Reconfigured.outcome(), PresentOutcome::Skipped);
        assert_eq!(SurfaceErrorAction::SkipFrame.outcome(), PresentOutcome::Skipped);
    }
}
