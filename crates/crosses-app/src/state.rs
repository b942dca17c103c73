use crosses_core::Position;
use crosses_game::{Progress, Session, SessionError};

// AppState holds the running session. Only `Progress` is persisted; the grid is
// regenerated on every start.
#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub hint: Option<Position>,
    pub last_error: Option<SessionError>,
    dirty: bool,
}

impl AppState {
    /// Starts at `progress`, falling back to [`Progress::INITIAL`] if that
    /// level cannot be generated.
    pub fn new(progress: Progress) -> Result<Self, SessionError> {
        let session = Session::new(progress).or_else(|err| {
            log::error!("failed to start at {progress:?}: {err}");
            Session::new(Progress::INITIAL)
        })?;
        Ok(Self::from_session(session))
    }

    #[must_use]
    pub fn from_session(session: Session) -> Self {
        Self {
            session,
            hint: None,
            last_error: None,
            dirty: false,
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
