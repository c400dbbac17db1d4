use crate::model::{parse_km, Control};
use crate::schedule::Schedule;
use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::Path;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Heure de départ : RFC3339 avec décalage, ou date/heure sans fuseau lue en UTC.
pub fn parse_start(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .with_context(|| format!("invalid start time: {raw}"))?;
    let utc = FixedOffset::east_opt(0).context("invalid UTC offset")?;
    Ok(utc.from_utc_datetime(&naive))
}

/// Liste en ligne : `"0,60,120.5,200km"`
pub fn parse_controls_list(raw: &str) -> anyhow::Result<Vec<Control>> {
    let controls = raw
        .split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            parse_km(chunk)
                .map(Control::new)
                .with_context(|| format!("invalid control distance: {chunk}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if controls.is_empty() {
        bail!("no control distance given");
    }
    Ok(controls)
}

/// Import de contrôles depuis CSV: header `distance_km[,name]`
pub fn import_controls_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Control>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing distance_km")?.trim();
        if raw.is_empty() {
            bail!("invalid control row (empty distance)");
        }
        let distance_km =
            parse_km(raw).with_context(|| format!("invalid control distance: {raw}"))?;
        let control = match rec.get(1).map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => Control::named(name, distance_km),
            None => Control::new(distance_km),
        };
        out.push(control);
    }
    if out.is_empty() {
        bail!("no control found in {}", path.display());
    }
    Ok(out)
}

/// Export CSV des fenêtres: header `name,distance_km,open,close` (RFC3339)
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["name", "distance_km", "open", "close"])?;
    for win in &schedule.windows {
        let distance = win.control.distance_km.to_string();
        let open = win.open.to_rfc3339();
        let close = win.close.to_rfc3339();
        w.write_record([
            win.control.name.as_deref().unwrap_or(""),
            distance.as_str(),
            open.as_str(),
            close.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du tableau (jolie mise en forme)
pub fn schedule_to_json(schedule: &Schedule) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}
