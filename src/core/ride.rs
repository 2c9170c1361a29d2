use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{RideSession, SessionKey, TimeSlot};
use crate::store::SessionStore;
use chrono::NaiveDate;

/// Raw values collected by the `ride` command.
#[derive(Debug, Clone, Default)]
pub struct RideInput {
    pub date: Option<NaiveDate>,
    pub slot: Option<TimeSlot>,
    pub attendees: Vec<String>,
    pub guest: bool,
    pub earnings: f64,
    pub driver: Option<String>,
}

/// Validation and saving of a single ride.
///
/// Rejects what the settlement calculator would otherwise silently skip.
pub struct RideLogic;

impl RideLogic {
    /// Check the input against the roster and turn it into a keyed ride.
    pub fn build(
        store: &SessionStore,
        cfg: &Config,
        input: RideInput,
    ) -> AppResult<(SessionKey, RideSession)> {
        let date = input
            .date
            .ok_or_else(|| AppError::InvalidDate("missing date".into()))?;

        if !input.earnings.is_finite() || input.earnings < 0.0 {
            return Err(AppError::InvalidAmount(format!(
                "external earnings must be a non-negative number, got {}",
                input.earnings
            )));
        }

        let mut attendees: Vec<String> = Vec::with_capacity(input.attendees.len() + 1);
        for name in input.attendees {
            let name = name.trim().to_string();
            if name != cfg.guest_label && !store.is_member(&name) {
                return Err(AppError::UnknownMember(name));
            }
            if !attendees.contains(&name) {
                attendees.push(name);
            }
        }

        if input.guest && !attendees.contains(&cfg.guest_label) {
            attendees.push(cfg.guest_label.clone());
        }

        let driver = match input.driver.map(|d| d.trim().to_string()) {
            Some(d) if d.is_empty() => None,
            Some(d) => {
                if !store.is_member(&d) {
                    return Err(AppError::InvalidDriver(format!(
                        "'{d}' is not a regular member"
                    )));
                }
                if !attendees.contains(&d) {
                    return Err(AppError::InvalidDriver(format!(
                        "'{d}' is not among the attendees"
                    )));
                }
                Some(d)
            }
            None => None,
        };

        let key = SessionKey::new(date, input.slot);
        Ok((key, RideSession::new(attendees, input.earnings, driver)))
    }

    /// Validate and store the ride, overwriting any ride with the same key.
    /// Returns the key and whether an existing ride was replaced.
    pub fn apply(
        store: &mut SessionStore,
        cfg: &Config,
        input: RideInput,
    ) -> AppResult<(SessionKey, bool)> {
        let (key, session) = Self::build(store, cfg, input)?;
        let replaced = store.upsert(key, session).is_some();
        log::debug!("ride {key} saved (replaced: {replaced})");
        Ok((key, replaced))
    }
}
