// src/export/model.rs

use crate::models::{DailyEntry, RideSession, SessionKey, SettlementReport};
use crate::store::SessionStore;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Amount(f64),
    Empty,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn opt_amount(v: Option<f64>) -> Self {
        v.map(Cell::Amount).unwrap_or(Cell::Empty)
    }

    /// Plain text rendering, used for CSV and column widths.
    pub fn as_plain(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Amount(v) => v.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// One logical table: a worksheet in XLSX, a file in CSV.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: &'static str,
    pub slug: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    fn new(name: &'static str, slug: &'static str, headers: Vec<&'static str>) -> Self {
        Self {
            name,
            slug,
            headers,
            rows: Vec::new(),
        }
    }
}

/// Flatten the rides and their settlement into the exported tables.
pub fn build_tables(
    store: &SessionStore,
    sessions: &BTreeMap<SessionKey, RideSession>,
    report: &SettlementReport,
) -> Vec<SheetTable> {
    let mut attendance = SheetTable::new(
        "Attendance",
        "attendance",
        vec!["session", "attendee", "regular"],
    );
    let mut earnings = SheetTable::new(
        "External Earnings",
        "external_earnings",
        vec!["session", "external_earnings"],
    );
    let mut drivers = SheetTable::new("Drivers", "drivers", vec!["session", "driver"]);

    for (key, s) in sessions {
        for a in &s.attendees {
            let regular = if store.is_member(a) { "yes" } else { "no" };
            attendance
                .rows
                .push(vec![Cell::text(key.to_string()), Cell::text(a), Cell::text(regular)]);
        }
        earnings
            .rows
            .push(vec![Cell::text(key.to_string()), Cell::Amount(s.external_earnings)]);
        if let Some(d) = &s.driver {
            drivers
                .rows
                .push(vec![Cell::text(key.to_string()), Cell::text(d)]);
        }
    }

    let mut breakdown = SheetTable::new(
        "Daily Breakdown",
        "daily_breakdown",
        vec![
            "session",
            "regulars",
            "external_earnings",
            "net_cost",
            "cost_per_person",
            "driver",
            "note",
        ],
    );
    for (key, entry) in &report.daily_breakdown {
        let row = match entry {
            DailyEntry::NoRegulars { note } => vec![
                Cell::text(key.to_string()),
                Cell::Empty,
                Cell::opt_amount(sessions.get(key).map(|s| s.external_earnings)),
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::text(*note),
            ],
            DailyEntry::Shared(share) => vec![
                Cell::text(key.to_string()),
                Cell::text(share.regulars.join(", ")),
                Cell::Amount(share.external_earnings),
                Cell::Amount(share.net_cost),
                Cell::Amount(share.cost_per_person),
                Cell::text(share.driver.clone().unwrap_or_default()),
                Cell::Empty,
            ],
        };
        breakdown.rows.push(row);
    }

    let mut totals = SheetTable::new(
        "Weekly Totals",
        "weekly_totals",
        vec!["member", "amount_to_pay"],
    );
    let mut driver_earnings =
        SheetTable::new("Driver Earnings", "driver_earnings", vec!["member", "earnings"]);
    let mut settlements = SheetTable::new("Settlements", "settlements", vec!["member", "net"]);

    for m in &store.members {
        if let Some(v) = report.weekly_totals.get(m) {
            totals.rows.push(vec![Cell::text(m), Cell::Amount(*v)]);
        }
        if let Some(v) = report.driver_earnings.get(m) {
            driver_earnings.rows.push(vec![Cell::text(m), Cell::Amount(*v)]);
        }
        settlements
            .rows
            .push(vec![Cell::text(m), Cell::Amount(report.net(m))]);
    }

    vec![
        attendance,
        earnings,
        drivers,
        breakdown,
        totals,
        driver_earnings,
        settlements,
    ]
}

/// Whole-ledger document written by the JSON exporter.
#[derive(Serialize)]
pub struct LedgerExport<'a> {
    pub session_cost: f64,
    pub members: &'a [String],
    pub sessions: &'a BTreeMap<SessionKey, RideSession>,
    pub daily_breakdown: BTreeMap<String, &'a DailyEntry>,
    pub weekly_totals: &'a BTreeMap<String, f64>,
    pub driver_earnings: &'a BTreeMap<String, f64>,
    pub settlement: &'a BTreeMap<String, f64>,
}

impl<'a> LedgerExport<'a> {
    pub fn new(
        session_cost: f64,
        members: &'a [String],
        sessions: &'a BTreeMap<SessionKey, RideSession>,
        report: &'a SettlementReport,
    ) -> Self {
        Self {
            session_cost,
            members,
            sessions,
            daily_breakdown: report
                .daily_breakdown
                .iter()
                .map(|(k, e)| (k.to_string(), e))
                .collect(),
            weekly_totals: &report.weekly_totals,
            driver_earnings: &report.driver_earnings,
            settlement: &report.settlement,
        }
    }
}
