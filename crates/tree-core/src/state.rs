//! Logical scene state shared by every per-frame updater.

/// Two-valued mode driving all animation targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogicalState {
    #[default]
    Scattered,
    Assembled,
}

impl LogicalState {
    /// Progress value every tracker converges to in this state.
    #[inline]
    pub fn target_progress(self) -> f32 {
        match self {
            LogicalState::Scattered => 0.0,
            LogicalState::Assembled => 1.0,
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            LogicalState::Scattered => LogicalState::Assembled,
            LogicalState::Assembled => LogicalState::Scattered,
        }
    }

    #[inline]
    pub fn is_assembled(self) -> bool {
        self == LogicalState::Assembled
    }
}
