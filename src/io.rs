use crate::engine::Schedule;
use crate::model::{Candidate, Horizon, Plan, Roster};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Import de candidats depuis CSV: header `handle,display_name[,blackouts]`
pub fn import_candidates_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Candidate>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let handle = rec.get(0).context("missing handle")?.trim();
        let display = rec.get(1).context("missing display_name")?.trim();
        if handle.is_empty() || display.is_empty() {
            bail!("invalid candidate row (empty)");
        }
        let mut candidate = Candidate::new(handle.to_string(), display.to_string());
        if let Some(ranges) = rec.get(2) {
            let ranges = ranges.trim();
            if !ranges.is_empty() {
                candidate.blackout = parse_blackouts(ranges)
                    .with_context(|| format!("invalid blackouts value for handle {handle}"))?;
            }
        }
        out.push(candidate);
    }
    Ok(out)
}

fn parse_blackouts(raw: &str) -> anyhow::Result<BTreeSet<NaiveDate>> {
    let mut out = BTreeSet::new();
    for chunk in raw.split(';').filter(|chunk| !chunk.trim().is_empty()) {
        parse_blackout_chunk(chunk.trim(), &mut out)?;
    }
    Ok(out)
}

fn parse_blackout_chunk(chunk: &str, out: &mut BTreeSet<NaiveDate>) -> anyhow::Result<()> {
    if let Some((start_raw, end_raw)) = chunk.split_once("..").or_else(|| chunk.split_once('/')) {
        let start = parse_date(start_raw.trim())?;
        let end = parse_date(end_raw.trim())?;
        if end < start {
            bail!("blackout range end before start: {chunk}");
        }
        let mut current = start;
        while current <= end {
            out.insert(current);
            current = current.succ_opt().context("date overflow")?;
        }
    } else {
        out.insert(parse_date(chunk)?);
    }
    Ok(())
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Import de l'horizon: header `date`, une date `%Y-%m-%d` par ligne.
pub fn import_horizon_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Horizon> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut dates = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw = rec.get(0).context("missing date")?.trim();
        dates.push(parse_date(raw)?);
    }
    Horizon::new(dates).map_err(anyhow::Error::msg)
}

/// Export JSON du plan (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &Plan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV d'un planning: header `slot,date,handle`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    roster: &Roster,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["slot", "date", "handle"])?;
    let mut slot_buf = itoa::Buffer::new();
    for (slot, entry) in schedule.entries.iter().enumerate() {
        let handle = roster
            .find_by_id(&entry.candidate)
            .map(|c| c.handle.as_str())
            .unwrap_or("");
        let date = entry.date.format("%Y-%m-%d").to_string();
        w.write_record([slot_buf.format(slot), date.as_str(), handle])?;
    }
    w.flush()?;
    Ok(())
}
