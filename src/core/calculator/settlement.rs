use crate::models::{DailyEntry, RideSession, SessionKey, SessionShare, SettlementReport};
use std::collections::BTreeMap;

/// Nominal cost of a single ride, used when the config does not override it.
pub const DEFAULT_SESSION_COST: f64 = 375.0;

/// Per-person share of a ride, rounded half-to-even to a whole unit.
pub fn share_per_person(net_cost: f64, regulars: usize) -> f64 {
    (net_cost / regulars as f64).round_ties_even()
}

/// Build the weekly ledger for the given rides.
///
/// Pure: unknown attendees (guest included) and repeated names are skipped,
/// a ride without
/// regulars becomes a marker entry, and a driver is credited with the full
/// unrounded net cost only when they are among the regulars on board.
/// Rounding happens at the per-person share and at the final settlement.
pub fn compute_weekly_settlement(
    regular_members: &[String],
    sessions: &BTreeMap<SessionKey, RideSession>,
    fixed_session_cost: f64,
) -> SettlementReport {
    let mut weekly_totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut driver_earnings: BTreeMap<String, f64> = BTreeMap::new();
    let mut daily_breakdown = Vec::with_capacity(sessions.len());

    for (key, session) in sessions {
        // attendees form a set: a repeated name is counted once
        let mut regulars_today: Vec<String> = Vec::new();
        for a in &session.attendees {
            if regular_members.contains(a) && !regulars_today.contains(a) {
                regulars_today.push(a.clone());
            }
        }

        if regulars_today.is_empty() {
            daily_breakdown.push((*key, DailyEntry::no_regulars()));
            continue;
        }

        let net_cost = fixed_session_cost - session.external_earnings;
        let cost_per_person = share_per_person(net_cost, regulars_today.len());

        for person in &regulars_today {
            *weekly_totals.entry(person.clone()).or_insert(0.0) += cost_per_person;
        }

        if let Some(driver) = &session.driver
            && regulars_today.contains(driver)
        {
            *driver_earnings.entry(driver.clone()).or_insert(0.0) += net_cost;
        }

        let individual_shares = regulars_today
            .iter()
            .map(|p| (p.clone(), cost_per_person))
            .collect();

        daily_breakdown.push((
            *key,
            DailyEntry::Shared(SessionShare {
                regulars: regulars_today,
                external_earnings: session.external_earnings,
                net_cost,
                cost_per_person,
                driver: session.driver.clone(),
                individual_shares,
            }),
        ));
    }

    let settlement = regular_members
        .iter()
        .map(|m| {
            let earned = driver_earnings.get(m).copied().unwrap_or(0.0);
            let owed = weekly_totals.get(m).copied().unwrap_or(0.0);
            (m.clone(), (earned - owed).round_ties_even())
        })
        .collect();

    SettlementReport {
        daily_breakdown,
        weekly_totals,
        driver_earnings,
        settlement,
    }
}
