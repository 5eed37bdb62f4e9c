mod graph;
mod overlay;
mod search;
mod types;

pub use types::{Assignment, Outcome, Schedule, SolveError, SolveOptions};

use crate::model::{Candidate, Horizon, Roster};
use graph::AssignmentGraph;

/// Planner : encapsule un roster et un horizon en cours de construction,
/// et résout le roulement par graphe mémoïsé + branch-and-bound.
#[derive(Debug, Default)]
pub struct Planner {
    roster: Roster,
    horizon: Horizon,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
            horizon: Horizon::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn horizon(&self) -> &Horizon {
        &self.horizon
    }

    pub fn add_candidates(&mut self, candidates: Vec<Candidate>) {
        self.roster.candidates.extend(candidates);
    }

    pub fn set_horizon(&mut self, horizon: Horizon) {
        self.horizon = horizon;
    }

    /// Résout le roulement complet : valide les entrées, construit le graphe
    /// partagé, lance la recherche, et matérialise tous les plannings à
    /// égalité au coût minimal. Tout l'état de recherche est local à l'appel ;
    /// jamais de planning partiel en cas d'échec.
    pub fn solve(&self, opts: SolveOptions) -> Result<Outcome, SolveError> {
        validate(&self.roster, &self.horizon)?;

        let graph = AssignmentGraph::build(&self.roster, &self.horizon)?;
        let found = search::run(&graph, opts)?;

        let schedules = found
            .assignments
            .iter()
            .map(|candidates| Schedule {
                entries: candidates
                    .iter()
                    .zip(self.horizon.dates())
                    .map(|(&candidate, &date)| Assignment {
                        date,
                        candidate: self.roster.candidates[candidate].id.clone(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Outcome {
            schedules,
            cost: found.cost,
            expanded: found.expanded,
            nodes: graph.node_count(),
        })
    }
}

/// Vérifications fatales avant tout travail de graphe.
fn validate(roster: &Roster, horizon: &Horizon) -> Result<(), SolveError> {
    if roster.candidates.is_empty() {
        return Err(SolveError::Config("roster cannot be empty"));
    }
    if roster.candidates.iter().any(|c| c.handle.trim().is_empty()) {
        return Err(SolveError::Config("candidate handle cannot be empty"));
    }
    for (i, candidate) in roster.candidates.iter().enumerate() {
        if roster.candidates[..i].iter().any(|c| c.handle == candidate.handle) {
            return Err(SolveError::Config("duplicate candidate handle"));
        }
    }
    if horizon.is_empty() {
        return Err(SolveError::Config("horizon cannot be empty"));
    }
    // Un document désérialisé peut contourner `Horizon::new`.
    if horizon.dates().windows(2).any(|w| w[1] <= w[0]) {
        return Err(SolveError::Config("horizon dates must be strictly increasing"));
    }
    Ok(())
}
