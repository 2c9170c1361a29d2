pub mod ride_session;
pub mod session_key;
pub mod settlement;
pub mod time_slot;

pub use ride_session::RideSession;
pub use session_key::SessionKey;
pub use settlement::{DailyEntry, SessionShare, SettlementReport};
pub use time_slot::TimeSlot;
