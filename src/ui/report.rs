//! Terminal rendering of stored rides and settlement results.

use crate::models::{DailyEntry, RideSession, SessionKey, SettlementReport};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, bold, color_for_balance, paint};
use crate::utils::formatting::join_names;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;

pub fn print_sessions(sessions: &BTreeMap<SessionKey, RideSession>, currency: &str) {
    let mut table = Table::new(vec![
        Column::left("Session"),
        Column::left("Attendees"),
        Column::right("External"),
        Column::left("Driver"),
    ]);

    for (key, s) in sessions {
        table.add_row(vec![
            key.to_string(),
            join_names(&s.attendees),
            format_money(s.external_earnings, currency),
            s.driver.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    print!("{}", table.render());
}

/// Print the daily breakdown followed by the three per-member tables.
///
/// Members are listed in roster order.
pub fn print_settlement(report: &SettlementReport, members: &[String], currency: &str) {
    header("Daily Breakdown");

    for (key, entry) in &report.daily_breakdown {
        println!("{}", bold(&key.to_string()));
        match entry {
            DailyEntry::NoRegulars { note } => {
                println!("  {}", paint(note, GREY));
            }
            DailyEntry::Shared(share) => {
                println!("  Regulars       : {}", join_names(&share.regulars));
                println!(
                    "  External       : {}",
                    format_money(share.external_earnings, currency)
                );
                println!(
                    "  Net cost       : {}",
                    format_money(share.net_cost, currency)
                );
                println!(
                    "  Per person     : {}",
                    format_money(share.cost_per_person, currency)
                );
                println!(
                    "  Driver         : {}",
                    share.driver.as_deref().unwrap_or("-")
                );
            }
        }
    }

    header("Weekly Totals");
    let mut totals = Table::new(vec![Column::left("Member"), Column::right("Amount to Pay")]);
    for m in members.iter().filter(|m| report.weekly_totals.contains_key(*m)) {
        totals.add_row(vec![m.clone(), format_money(report.weekly_total(m), currency)]);
    }
    print_or_empty(&totals);

    header("Driver Earnings");
    let mut drivers = Table::new(vec![Column::left("Driver"), Column::right("Earnings")]);
    for m in members.iter().filter(|m| report.driver_earnings.contains_key(*m)) {
        drivers.add_row(vec![m.clone(), format_money(report.driver_earning(m), currency)]);
    }
    print_or_empty(&drivers);

    header("Settlement");
    let mut settle = Table::new(vec![
        Column::left("Member"),
        Column::right("Net"),
        Column::left("Status"),
    ]);
    for m in members {
        let net = report.net(m);
        let status = if net > 0.0 {
            "receives"
        } else if net < 0.0 {
            "pays"
        } else {
            "even"
        };
        let color = color_for_balance(net);
        settle.add_row(vec![
            m.clone(),
            paint(&format_money(net, currency), color),
            paint(status, color),
        ]);
    }
    print_or_empty(&settle);
}

fn print_or_empty(table: &Table) {
    if table.is_empty() {
        println!("{}", paint("(none)", GREY));
    } else {
        print!("{}", table.render());
    }
}
