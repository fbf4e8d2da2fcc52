//! Session manager - one engine (and one history) per dashboard session
//!
//! Independent client sessions never share a history buffer. Each session
//! gets its own engine at open time and loses it at close time.

use crate::data_source::BoxedReadingSource;
use crate::engine::{DataEngine, EngineConfig};
use crate::error::ConfigError;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Identifier handed out for each opened session
pub type SessionId = Uuid;

/// Owns the engines of all open sessions
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<DataEngine>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a session with a freshly constructed engine
    pub fn open_session(
        &self,
        config: EngineConfig,
        source: BoxedReadingSource,
    ) -> Result<SessionId, ConfigError> {
        let engine = Arc::new(DataEngine::new(config, source)?);
        let id = Uuid::new_v4();
        let count = {
            let mut sessions = self.write();
            sessions.insert(id, engine);
            sessions.len()
        };
        info!("Opened session {} ({} open)", id, count);
        Ok(id)
    }

    /// Engine belonging to a session
    pub fn engine(&self, id: &SessionId) -> Option<Arc<DataEngine>> {
        self.read().get(id).cloned()
    }

    /// Close a session, dropping its engine once no handle remains.
    /// Returns false for unknown ids.
    pub fn close_session(&self, id: &SessionId) -> bool {
        let removed = self.write().remove(id).is_some();
        if removed {
            info!("Closed session {}", id);
        } else {
            debug!("Ignoring close for unknown session {}", id);
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<SessionId, Arc<DataEngine>>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, Arc<DataEngine>>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::FnSource;
    use polar_dash_types::Reading;
    use std::time::Duration;

    fn source() -> BoxedReadingSource {
        Box::new(FnSource::new("test", || Ok(Reading::now(-27.0, 80.0))))
    }

    #[test]
    fn test_sessions_have_independent_histories() {
        let manager = SessionManager::new();
        let config = EngineConfig::new(3, Duration::from_secs(10));
        let a = manager.open_session(config, source()).unwrap();
        let b = manager.open_session(config, source()).unwrap();
        assert_ne!(a, b);
        assert_eq!(manager.session_count(), 2);

        let engine_a = manager.engine(&a).unwrap();
        engine_a.advance_tick();
        engine_a.refresh_and_get().unwrap();

        assert_eq!(engine_a.history().len(), 1);
        assert!(manager.engine(&b).unwrap().history().is_empty());
    }

    #[test]
    fn test_close_session() {
        let manager = SessionManager::new();
        let id = manager
            .open_session(EngineConfig::default(), source())
            .unwrap();

        assert!(manager.close_session(&id));
        assert!(!manager.close_session(&id));
        assert!(manager.engine(&id).is_none());
        assert_eq!(manager.session_count(), 0);
    }

    #[test]
    fn test_open_rejects_bad_config() {
        let manager = SessionManager::new();
        let result = manager.open_session(EngineConfig::new(0, Duration::from_secs(1)), source());
        assert_eq!(result, Err(ConfigError::ZeroCapacity));
        assert_eq!(manager.session_count(), 0);
    }
}
