use crate::errors::{AppError, AppResult};
use crate::models::{SessionKey, TimeSlot};
use crate::store::SessionStore;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one ride (slot given) or every ride of the date.
    /// Returns how many rides were removed.
    pub fn apply(
        store: &mut SessionStore,
        date: NaiveDate,
        slot: Option<TimeSlot>,
    ) -> AppResult<usize> {
        let removed = match slot {
            Some(s) => {
                let key = SessionKey::new(date, Some(s));
                usize::from(store.remove(&key))
            }
            None => store.remove_date(date),
        };

        if removed == 0 {
            let target = match slot {
                Some(s) => SessionKey::new(date, Some(s)).to_string(),
                None => date.format("%Y-%m-%d").to_string(),
            };
            return Err(AppError::NoSessionsFor(target));
        }

        Ok(removed)
    }
}
