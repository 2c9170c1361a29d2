use serde::{Deserialize, Serialize};

/// One recorded ride, as saved by the `ride` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideSession {
    /// Everyone selected for the ride, guest label included.
    pub attendees: Vec<String>,
    /// Money collected from outside the roster for this ride.
    #[serde(default)]
    pub external_earnings: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

impl RideSession {
    pub fn new(attendees: Vec<String>, external_earnings: f64, driver: Option<String>) -> Self {
        Self {
            attendees,
            external_earnings,
            driver,
        }
    }
}
