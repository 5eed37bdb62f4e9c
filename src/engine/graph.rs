use super::types::SolveError;
use crate::model::{Horizon, Roster};

/// « Ce candidat affecté à ce slot. » Les enfants pointent vers les nœuds
/// du slot suivant, dans l'ordre fixe des candidats.
#[derive(Debug)]
pub(super) struct GraphNode {
    pub slot: usize,
    pub candidate: usize,
    pub leaf: bool,
    pub children: Vec<usize>,
}

/// Graphe d'affectation partagé : une arène de nœuds indexée par
/// (slot, candidat). Un même sous-arbre n'est construit qu'une fois, quel
/// que soit le nombre de chemins qui l'atteignent — au plus
/// candidats × slots nœuds au total.
#[derive(Debug)]
pub(super) struct AssignmentGraph {
    num_candidates: usize,
    num_slots: usize,
    nodes: Vec<GraphNode>,
    index: Vec<Option<usize>>,
}

impl AssignmentGraph {
    /// Construit le graphe par liste de travail explicite, du dernier slot
    /// vers le premier : les enfants d'un nœud sont déjà matérialisés quand
    /// on le crée. Pas de récursion native, l'horizon peut compter des
    /// milliers de slots.
    pub(super) fn build(roster: &Roster, horizon: &Horizon) -> Result<Self, SolveError> {
        let n = roster.candidates.len();
        let m = horizon.len();

        // L'éligibilité par slot ne dépend pas du chemin : le premier slot
        // sans candidat disponible est exactement la première profondeur
        // inatteignable.
        for (index, &date) in horizon.dates().iter().enumerate() {
            if !roster.candidates.iter().any(|c| c.is_available(date)) {
                return Err(SolveError::Infeasible { index, date });
            }
        }

        let mut graph = Self {
            num_candidates: n,
            num_slots: m,
            nodes: Vec::new(),
            index: vec![None; n * m],
        };

        for slot in (0..m).rev() {
            let date = horizon.date(slot);
            let leaf = slot + 1 == m;
            for (candidate, member) in roster.candidates.iter().enumerate() {
                if !member.is_available(date) {
                    continue;
                }
                let children = if leaf {
                    Vec::new()
                } else {
                    (0..n).filter_map(|next| graph.lookup(slot + 1, next)).collect()
                };
                let id = graph.nodes.len();
                graph.nodes.push(GraphNode {
                    slot,
                    candidate,
                    leaf,
                    children,
                });
                graph.index[slot * n + candidate] = Some(id);
            }
        }

        Ok(graph)
    }

    fn lookup(&self, slot: usize, candidate: usize) -> Option<usize> {
        self.index[slot * self.num_candidates + candidate]
    }

    pub(super) fn node(&self, id: usize) -> &GraphNode {
        &self.nodes[id]
    }

    /// Racines (slot 0), dans l'ordre fixe des candidats.
    pub(super) fn roots(&self) -> Vec<usize> {
        (0..self.num_candidates)
            .filter_map(|candidate| self.lookup(0, candidate))
            .collect()
    }

    pub(super) fn num_candidates(&self) -> usize {
        self.num_candidates
    }

    pub(super) fn num_slots(&self) -> usize {
        self.num_slots
    }

    pub(super) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
