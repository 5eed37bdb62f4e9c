#![forbid(unsafe_code)]
//! Roulement — bibliothèque de planification de roulements équitables (sans BD).
//!
//! - Graphe d'affectation mémoïsé : un seul nœud par couple (slot, candidat),
//!   quel que soit le nombre de chemins qui l'atteignent.
//! - Surcoût d'équité porté par chemin (jamais mémoïsé avec le graphe).
//! - Recherche branch-and-bound déterministe, tous les plannings à égalité
//!   au coût minimal sont retournés.
//! - Stockage fichiers (JSON/CSV) ; dates civiles `%Y-%m-%d`.

pub mod engine;
pub mod io;
pub mod model;
pub mod storage;
pub mod sync;

pub use engine::{Assignment, Outcome, Planner, Schedule, SolveError, SolveOptions};
pub use model::{Candidate, CandidateId, Horizon, Plan, Roster};
pub use storage::{JsonStorage, Storage};
pub use sync::{merge_conflicts, ConflictSource, PlannedSchedules};
