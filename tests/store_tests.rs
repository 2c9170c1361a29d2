use carpool_ledger::config::Config;
use carpool_ledger::core::del::DeleteLogic;
use carpool_ledger::core::ride::{RideInput, RideLogic};
use carpool_ledger::errors::AppError;
use carpool_ledger::models::{RideSession, SessionKey, TimeSlot};
use carpool_ledger::store::SessionStore;
use carpool_ledger::utils::range::resolve_range;
use chrono::NaiveDate;
use std::env;
use std::fs;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn store_with_roster() -> SessionStore {
    let mut store = SessionStore::default();
    store.set_members(["Asha", "Bilal", "Chen"]);
    store
}

fn input(attendees: &[&str], earnings: f64, driver: Option<&str>) -> RideInput {
    RideInput {
        date: Some(date("2025-09-01")),
        slot: Some(TimeSlot::Morning),
        attendees: attendees.iter().map(|s| s.to_string()).collect(),
        guest: false,
        earnings,
        driver: driver.map(str::to_string),
    }
}

#[test]
fn test_set_members_trims_and_drops_duplicates() {
    let mut store = SessionStore::default();
    store.set_members([" Asha", "Bilal ", "", "Asha", "Chen"]);
    assert_eq!(store.members, vec!["Asha", "Bilal", "Chen"]);

    assert!(!store.add_member("Chen"));
    assert!(store.add_member("Dev"));
    assert!(store.remove_member("Bilal"));
    assert!(!store.remove_member("Bilal"));
    assert_eq!(store.members, vec!["Asha", "Chen", "Dev"]);
}

#[test]
fn test_upsert_overwrites_same_key() {
    let mut store = store_with_roster();
    let k = SessionKey::new(date("2025-09-01"), Some(TimeSlot::Evening));

    assert!(store.upsert(k, RideSession::new(vec!["Asha".into()], 10.0, None)).is_none());
    assert!(store.upsert(k, RideSession::new(vec!["Bilal".into()], 20.0, None)).is_some());

    assert_eq!(store.sessions.len(), 1);
    assert_eq!(store.sessions[&k].attendees, vec!["Bilal"]);
    assert_eq!(store.sessions[&k].external_earnings, 20.0);
}

#[test]
fn test_store_survives_save_and_open() {
    let mut path = env::temp_dir();
    path.push("store_roundtrip_carpool_ledger.json");
    let path = path.to_string_lossy().to_string();
    fs::remove_file(&path).ok();

    let empty = SessionStore::open(&path).expect("missing file opens empty");
    assert_eq!(empty, SessionStore::default());

    let mut store = store_with_roster();
    store.upsert(
        SessionKey::new(date("2025-09-01"), Some(TimeSlot::Morning)),
        RideSession::new(vec!["Asha".into(), "QuickRide Guest".into()], 75.0, Some("Asha".into())),
    );
    store.upsert(
        SessionKey::new(date("2025-09-02"), None),
        RideSession::new(vec!["Chen".into()], 0.0, None),
    );
    store.save(&path).expect("save store");

    let content = fs::read_to_string(&path).expect("read store");
    assert!(content.contains("\"2025-09-01 Morning\""));

    let reopened = SessionStore::open(&path).expect("open store");
    assert_eq!(reopened, store);
}

#[test]
fn test_session_key_parsing() {
    let k: SessionKey = "2025-09-01 Evening".parse().expect("slot key");
    assert_eq!(k, SessionKey::new(date("2025-09-01"), Some(TimeSlot::Evening)));
    assert_eq!(k.to_string(), "2025-09-01 Evening");

    let k: SessionKey = "2025-09-01".parse().expect("date-only key");
    assert_eq!(k.slot, None);

    assert!("2025-13-01".parse::<SessionKey>().is_err());
    assert!("2025-09-01 Night".parse::<SessionKey>().is_err());
    // only the stored label spelling is a valid key
    assert!("2025-09-01 evening".parse::<SessionKey>().is_err());
    assert!("2025-09-01 m".parse::<SessionKey>().is_err());
}

#[test]
fn test_store_rejects_non_canonical_session_keys() {
    let mut path = env::temp_dir();
    path.push("store_alias_keys_carpool_ledger.json");
    let path = path.to_string_lossy().to_string();

    let content = r#"{
  "members": ["Asha"],
  "sessions": {
    "2025-09-01 m": { "attendees": ["Asha"], "external_earnings": 0.0 },
    "2025-09-01 Morning": { "attendees": ["Asha"], "external_earnings": 50.0 }
  }
}"#;
    fs::write(&path, content).expect("write store");

    let err = SessionStore::open(&path).expect_err("alias key must not load");
    assert!(matches!(err, AppError::Store(_)));
}

#[test]
fn test_ride_form_accepts_guest_and_deduplicates() {
    let store = store_with_roster();
    let cfg = Config::default();
    let mut ride = input(&["Asha", "Bilal", "Asha", "QuickRide Guest"], 75.0, Some("Bilal"));
    ride.guest = true;

    let (k, session) = RideLogic::build(&store, &cfg, ride).expect("valid ride");

    assert_eq!(k.to_string(), "2025-09-01 Morning");
    assert_eq!(session.attendees, vec!["Asha", "Bilal", "QuickRide Guest"]);
    assert_eq!(session.driver.as_deref(), Some("Bilal"));
}

#[test]
fn test_ride_form_rejects_bad_input() {
    let store = store_with_roster();
    let cfg = Config::default();

    let err = RideLogic::build(&store, &cfg, input(&["Asha"], -5.0, None)).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));

    let err = RideLogic::build(&store, &cfg, input(&["Asha"], f64::NAN, None)).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));

    let err = RideLogic::build(&store, &cfg, input(&["Asha", "Zed"], 0.0, None)).unwrap_err();
    assert!(matches!(err, AppError::UnknownMember(name) if name == "Zed"));

    let err =
        RideLogic::build(&store, &cfg, input(&["Asha"], 0.0, Some("QuickRide Guest"))).unwrap_err();
    assert!(matches!(err, AppError::InvalidDriver(_)));

    let err = RideLogic::build(&store, &cfg, input(&["Asha"], 0.0, Some("Chen"))).unwrap_err();
    assert!(matches!(err, AppError::InvalidDriver(_)));
}

#[test]
fn test_delete_by_slot_and_by_date() {
    let mut store = store_with_roster();
    let d = date("2025-09-01");
    store.upsert(SessionKey::new(d, Some(TimeSlot::Morning)), RideSession::default());
    store.upsert(SessionKey::new(d, Some(TimeSlot::Evening)), RideSession::default());
    store.upsert(SessionKey::new(date("2025-09-02"), None), RideSession::default());

    assert_eq!(DeleteLogic::apply(&mut store, d, Some(TimeSlot::Morning)).unwrap(), 1);
    assert!(matches!(
        DeleteLogic::apply(&mut store, d, Some(TimeSlot::Morning)),
        Err(AppError::NoSessionsFor(_))
    ));
    assert_eq!(DeleteLogic::apply(&mut store, d, None).unwrap(), 1);
    assert_eq!(store.sessions.len(), 1);
}

#[test]
fn test_range_selects_sessions() {
    let mut store = store_with_roster();
    for d in ["2025-08-31", "2025-09-01", "2025-09-07", "2025-09-08"] {
        store.upsert(SessionKey::new(date(d), None), RideSession::default());
    }

    let week = resolve_range(Some("2025-09-01:2025-09-07")).unwrap();
    assert_eq!(store.sessions_in(week).len(), 2);

    let month = resolve_range(Some("2025-09")).unwrap();
    assert_eq!(month, Some((date("2025-09-01"), date("2025-09-30"))));
    assert_eq!(store.sessions_in(month).len(), 3);

    assert_eq!(resolve_range(Some("all")).unwrap(), None);
    assert_eq!(store.sessions_in(None).len(), 4);

    assert_eq!(
        resolve_range(Some("2024-02")).unwrap(),
        Some((date("2024-02-01"), date("2024-02-29")))
    );
    assert!(resolve_range(Some("2025-09:2025-09-07")).is_err());
    assert!(resolve_range(Some("2025-09-07:2025-09-01")).is_err());
}
