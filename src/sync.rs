use crate::engine::Schedule;
use crate::model::{CandidateId, Horizon, Roster};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Source d'affectations existantes sur d'autres plannings (autre équipe,
/// autre rotation...). Permet de customiser la provenance (fichier, API).
pub trait ConflictSource {
    /// Dates déjà occupées pour ce candidat sur l'horizon donné.
    fn busy_dates(
        &self,
        candidate: &CandidateId,
        horizon: &Horizon,
    ) -> anyhow::Result<BTreeSet<NaiveDate>>;
}

/// Fusionne les dates occupées dans les blackouts du roster, avant toute
/// construction de graphe. L'évitement inter-plannings se réduit entièrement
/// à ce pré-filtre ; la recherche n'en sait rien.
pub fn merge_conflicts(
    roster: &mut Roster,
    source: &dyn ConflictSource,
    horizon: &Horizon,
) -> anyhow::Result<()> {
    for candidate in &mut roster.candidates {
        let busy = source.busy_dates(&candidate.id, horizon)?;
        candidate.blackout.extend(busy);
    }
    Ok(())
}

/// Plannings déjà publiés, utilisés comme source de conflits.
#[derive(Debug, Clone, Default)]
pub struct PlannedSchedules {
    schedules: Vec<Schedule>,
}

impl PlannedSchedules {
    pub fn new(schedules: Vec<Schedule>) -> Self {
        Self { schedules }
    }

    pub fn push(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }
}

impl ConflictSource for PlannedSchedules {
    fn busy_dates(
        &self,
        candidate: &CandidateId,
        horizon: &Horizon,
    ) -> anyhow::Result<BTreeSet<NaiveDate>> {
        Ok(self
            .schedules
            .iter()
            .flat_map(|schedule| schedule.entries.iter())
            .filter(|entry| &entry.candidate == candidate && horizon.contains(entry.date))
            .map(|entry| entry.date)
            .collect())
    }
}
