use super::session_key::SessionKey;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NO_REGULARS_NOTE: &str = "No regular members present";

/// Monetary breakdown of a ride with at least one regular member on board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionShare {
    pub regulars: Vec<String>,
    pub external_earnings: f64,
    pub net_cost: f64,
    pub cost_per_person: f64,
    pub driver: Option<String>,
    pub individual_shares: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DailyEntry {
    NoRegulars { note: &'static str },
    Shared(SessionShare),
}

impl DailyEntry {
    pub fn no_regulars() -> Self {
        DailyEntry::NoRegulars {
            note: NO_REGULARS_NOTE,
        }
    }

    pub fn is_no_regulars(&self) -> bool {
        matches!(self, DailyEntry::NoRegulars { .. })
    }

    pub fn share(&self) -> Option<&SessionShare> {
        match self {
            DailyEntry::Shared(s) => Some(s),
            DailyEntry::NoRegulars { .. } => None,
        }
    }
}

/// The four outputs of one settlement pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettlementReport {
    /// Ordered by session key.
    pub daily_breakdown: Vec<(SessionKey, DailyEntry)>,
    pub weekly_totals: BTreeMap<String, f64>,
    pub driver_earnings: BTreeMap<String, f64>,
    pub settlement: BTreeMap<String, f64>,
}

impl SettlementReport {
    pub fn weekly_total(&self, member: &str) -> f64 {
        self.weekly_totals.get(member).copied().unwrap_or(0.0)
    }

    pub fn driver_earning(&self, member: &str) -> f64 {
        self.driver_earnings.get(member).copied().unwrap_or(0.0)
    }

    pub fn net(&self, member: &str) -> f64 {
        self.settlement.get(member).copied().unwrap_or(0.0)
    }
}
