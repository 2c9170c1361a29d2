use crate::config::Config;
use crate::core::calculator::settlement::compute_weekly_settlement;
use crate::models::SettlementReport;
use crate::store::SessionStore;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Run one settlement pass over the stored rides inside `bounds`.
    pub fn build_settlement(
        store: &SessionStore,
        cfg: &Config,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> SettlementReport {
        let sessions = store.sessions_in(bounds);
        compute_weekly_settlement(&store.members, &sessions, cfg.session_cost)
    }
}
