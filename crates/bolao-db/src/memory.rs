use std::sync::Mutex;

use anyhow::{Result, anyhow};
use bolao_types::models::User;

use crate::store::UserStore;

/// Process-local store. Used as a test double and for throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    current: Mutex<Option<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            current: Mutex::new(None),
        }
    }
}

impl UserStore for MemoryStore {
    fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.lock().map_err(|e| anyhow!("Users lock poisoned: {}", e))?;
        Ok(users.clone())
    }

    fn save_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().map_err(|e| anyhow!("Users lock poisoned: {}", e))?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }

    fn set_current_user(&self, user: &User) -> Result<()> {
        let mut current = self.current.lock().map_err(|e| anyhow!("Session lock poisoned: {}", e))?;
        *current = Some(user.clone());
        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>> {
        let current = self.current.lock().map_err(|e| anyhow!("Session lock poisoned: {}", e))?;
        Ok(current.clone())
    }
}
