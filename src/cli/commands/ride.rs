use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ride::{RideInput, RideLogic};
use crate::errors::{AppError, AppResult};
use crate::store::SessionStore;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::split_names;

/// Record or overwrite a ride session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ride {
        date: date_str,
        slot,
        attendees,
        guest,
        earnings,
        driver,
    } = cmd
    {
        let d = if date_str.eq_ignore_ascii_case("today") {
            date::today()
        } else {
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?
        };

        let mut store = SessionStore::open(&cfg.store)?;

        let input = RideInput {
            date: Some(d),
            slot: *slot,
            attendees: split_names(attendees),
            guest: *guest,
            earnings: *earnings,
            driver: driver.clone(),
        };

        let (key, replaced) = RideLogic::apply(&mut store, cfg, input)?;
        store.save(&cfg.store)?;

        if replaced {
            success(format!("Data updated for {key}"));
        } else {
            success(format!("Data saved for {key}"));
        }
    }

    Ok(())
}
