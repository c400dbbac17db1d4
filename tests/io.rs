#![forbid(unsafe_code)]
use brevets::{build_schedule, io, Brevet, BrevetDistance, TimeOptions};
use chrono::{FixedOffset, TimeZone};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_controls_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("controls.csv");
    fs::write(
        &path,
        "distance_km,name\n0,Départ\n60km,Ferme\n120.5\n200,Arrivée\n",
    )
    .unwrap();

    let controls = io::import_controls_csv(&path).unwrap();
    assert_eq!(controls.len(), 4);
    assert_eq!(controls[0].name.as_deref(), Some("Départ"));
    assert_eq!(controls[1].distance_km, 60.0);
    assert_eq!(controls[2].name, None);
    assert_eq!(controls[2].distance_km, 120.5);
}

#[test]
fn import_controls_rejects_bad_distance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("controls.csv");
    fs::write(&path, "distance_km,name\nloin,Col\n").unwrap();
    assert!(io::import_controls_csv(&path).is_err());
}

#[test]
fn parse_inline_controls() {
    let controls = io::parse_controls_list("0, 60,120km,,200").unwrap();
    let distances: Vec<f64> = controls.iter().map(|c| c.distance_km).collect();
    assert_eq!(distances, vec![0.0, 60.0, 120.0, 200.0]);
    assert!(io::parse_controls_list(" , ").is_err());
    assert!(io::parse_controls_list("0,x").is_err());
}

#[test]
fn parse_start_variants() {
    let with_offset = io::parse_start("2025-06-01T07:00:00+02:00").unwrap();
    assert_eq!(with_offset.offset().local_minus_utc(), 2 * 3600);

    let naive = io::parse_start("2025-06-01 05:00").unwrap();
    assert_eq!(naive.offset().local_minus_utc(), 0);
    assert_eq!(naive, with_offset);

    assert!(io::parse_start("demain matin").is_err());
}

#[test]
fn schedule_csv_output() {
    let start = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 1, 6, 0, 0)
        .unwrap();
    let brevet = Brevet::new(BrevetDistance::Km300, start);
    let controls = io::parse_controls_list("0,300").unwrap();
    let schedule = build_schedule(&brevet, &controls, TimeOptions::default()).unwrap();

    let mut out = Vec::new();
    io::write_schedule_csv(&mut out, &schedule).unwrap();
    let text = String::from_utf8(out).unwrap();
    insta::assert_snapshot!(text.trim_end(), @r"
    name,distance_km,open,close
    ,0,2025-06-01T06:00:00+00:00,2025-06-01T07:00:00+00:00
    ,300,2025-06-01T15:00:00+00:00,2025-06-02T02:00:00+00:00
    ");
}
