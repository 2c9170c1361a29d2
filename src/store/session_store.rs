//! Flat JSON file holding the roster and the recorded rides between runs.

use crate::errors::AppResult;
use crate::models::{RideSession, SessionKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStore {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub sessions: BTreeMap<SessionKey, RideSession>,
}

impl SessionStore {
    /// Load the store from `path`. A missing file is an empty store.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.exists() {
            log::debug!("store {} not found, starting empty", p.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(p)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let store: SessionStore = serde_json::from_str(&content)?;
        log::debug!(
            "loaded store {}: {} members, {} sessions",
            p.display(),
            store.members.len(),
            store.sessions.len()
        );
        Ok(store)
    }

    pub fn save(&self, path: &str) -> AppResult<()> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(p, json)?;
        log::debug!("saved store {}", p.display());
        Ok(())
    }

    /// Replace the roster. Names are trimmed, blanks dropped, and only the
    /// first occurrence of a repeated name is kept.
    pub fn set_members<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.members.clear();
        for name in names {
            self.add_member(name.as_ref());
        }
    }

    /// Append a member if not already in the roster. Returns true if added.
    pub fn add_member(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.is_member(name) {
            return false;
        }
        self.members.push(name.to_string());
        true
    }

    pub fn remove_member(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != name.trim());
        before != self.members.len()
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Insert or overwrite the ride stored under `key`.
    /// Returns the previous ride, if any.
    pub fn upsert(&mut self, key: SessionKey, session: RideSession) -> Option<RideSession> {
        self.sessions.insert(key, session)
    }

    pub fn remove(&mut self, key: &SessionKey) -> bool {
        self.sessions.remove(key).is_some()
    }

    /// Remove every ride recorded on `date`, whatever the slot.
    pub fn remove_date(&mut self, date: NaiveDate) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|k, _| k.date != date);
        before - self.sessions.len()
    }

    /// Rides whose date falls inside the inclusive bounds (all rides if None).
    pub fn sessions_in(
        &self,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> BTreeMap<SessionKey, RideSession> {
        self.sessions
            .iter()
            .filter(|(k, _)| match bounds {
                Some((start, end)) => k.date >= start && k.date <= end,
                None => true,
            })
            .map(|(k, s)| (*k, s.clone()))
            .collect()
    }
}
