use crate::model::CandidateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options de résolution
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Garde tous les enfants passant la borne, au lieu du seul surcoût
    /// minimal local. Plus lent, optimalité prouvée.
    pub exhaustive: bool,
    /// Budget d'expansions ; `None` = illimité.
    pub max_steps: Option<u64>,
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    Config(&'static str),
    #[error("no eligible candidate for slot {index} ({date})")]
    Infeasible { index: usize, date: NaiveDate },
    #[error("search budget exhausted after {steps} expansions")]
    BudgetExceeded { steps: u64 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Une affectation datée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub candidate: CandidateId,
}

/// Planning complet : une affectation par slot, ordre croissant de dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schedule {
    pub entries: Vec<Assignment>,
}

impl Schedule {
    pub fn candidate_for(&self, date: NaiveDate) -> Option<&CandidateId> {
        self.entries
            .iter()
            .find(|e| e.date == date)
            .map(|e| &e.candidate)
    }
}

/// Résultat d'une résolution : tous les plannings à égalité au coût minimal.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Plannings liés au minimum, dans l'ordre déterministe d'exploration.
    pub schedules: Vec<Schedule>,
    /// Coût commun des plannings retournés (≥ nombre de slots).
    pub cost: u64,
    /// Nombre d'expansions effectuées par la recherche.
    pub expanded: u64,
    /// Nombre de nœuds de graphe construits (≤ candidats × slots).
    pub nodes: usize,
}

impl Outcome {
    /// Sélection par défaut parmi les égalités : le premier, donc celui
    /// suivant l'ordre fixe des candidats.
    pub fn preferred(&self) -> &Schedule {
        &self.schedules[0]
    }
}
