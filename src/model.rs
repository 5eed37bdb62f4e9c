use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::engine::Schedule;

/// Identifiant fort pour Candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Candidat (membre du roulement)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub handle: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub blackout: BTreeSet<NaiveDate>,
}

impl Candidate {
    pub fn new<H: Into<String>, D: Into<String>>(handle: H, display_name: D) -> Self {
        Self {
            id: CandidateId::random(),
            handle: handle.into(),
            display_name: display_name.into(),
            blackout: BTreeSet::new(),
        }
    }

    /// Marque une date indisponible (idempotent).
    pub fn block(&mut self, date: NaiveDate) {
        self.blackout.insert(date);
    }

    /// Prédicat pur : le candidat peut-il prendre cette date ?
    /// Les conflits externes sont déjà fusionnés dans `blackout` (voir `sync`).
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !self.blackout.contains(&date)
    }
}

/// Séquence ordonnée de slots (dates strictement croissantes).
/// La position dans la séquence est l'indice de slot (base 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    dates: Vec<NaiveDate>,
}

impl Horizon {
    /// Valide l'ordre strictement croissant.
    pub fn new(dates: Vec<NaiveDate>) -> Result<Self, String> {
        if dates.windows(2).any(|w| w[1] <= w[0]) {
            return Err("horizon dates must be strictly increasing".to_string());
        }
        Ok(Self { dates })
    }

    /// Horizon quotidien sur [start, end] inclus.
    pub fn span(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if end < start {
            return Err("horizon end must not be before start".to_string());
        }
        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            dates.push(current);
            current = current
                .succ_opt()
                .ok_or_else(|| "date overflow".to_string())?;
        }
        Ok(Self { dates })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
    pub fn date(&self, slot: usize) -> NaiveDate {
        self.dates[slot]
    }
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }
}

/// Roster complet ; l'ordre des candidats est l'ordre de départage fixe
/// utilisé par toute la recherche.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub candidates: Vec<Candidate>,
}

impl Roster {
    pub fn find_by_handle<'a>(&'a self, handle: &str) -> Option<&'a Candidate> {
        self.candidates.iter().find(|c| c.handle == handle)
    }
    pub fn find_by_id<'a>(&'a self, id: &CandidateId) -> Option<&'a Candidate> {
        self.candidates.iter().find(|c| &c.id == id)
    }
    pub fn find_mut_by_handle(&mut self, handle: &str) -> Option<&mut Candidate> {
        self.candidates.iter_mut().find(|c| c.handle == handle)
    }
}

/// Document persisté : roster + horizon + dernier planning calculé.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Plan {
    pub roster: Roster,
    #[serde(default)]
    pub horizon: Horizon,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}
