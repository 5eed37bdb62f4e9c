use super::graph::AssignmentGraph;
use super::overlay::{PathNode, Visibility};
use super::types::{SolveError, SolveOptions};
use anyhow::anyhow;

/// Sortie brute de la recherche : un vecteur candidat-par-slot pour chaque
/// planning à égalité au coût minimal.
pub(super) struct SearchOutcome {
    pub assignments: Vec<Vec<usize>>,
    pub cost: u64,
    pub expanded: u64,
}

/// Branch-and-bound sur une frontière LIFO explicite.
///
/// Déterminisme : les racines et les enfants sont empilés en ordre inverse
/// des candidats, donc dépilés dans l'ordre fixe du roster. Les égalités ne
/// sont jamais départagées autrement.
pub(super) fn run(
    graph: &AssignmentGraph,
    opts: SolveOptions,
) -> Result<SearchOutcome, SolveError> {
    let num_slots = graph.num_slots() as u64;
    // Plancher théorique : surcoût unitaire à chaque slot.
    let floor = num_slots;

    let mut arena: Vec<PathNode> = Vec::new();
    let mut frontier: Vec<usize> = Vec::new();
    let mut goals: Vec<usize> = Vec::new();
    let mut lowest = u64::MAX;
    let mut expanded = 0u64;

    for &root in graph.roots().iter().rev() {
        let candidate = graph.node(root).candidate;
        arena.push(PathNode {
            // L'affectation racine elle-même coûte 1.
            cost: 1,
            node: root,
            parent: None,
            visibility: Visibility::seed(graph.num_candidates(), candidate),
        });
        frontier.push(arena.len() - 1);
    }

    // (id de nœud graphe, surcoût, coût cumulé) des enfants retenus
    let mut survivors: Vec<(usize, u64, u64)> = Vec::new();

    while let Some(current) = frontier.pop() {
        expanded += 1;
        if let Some(budget) = opts.max_steps {
            if expanded > budget {
                return Err(SolveError::BudgetExceeded { steps: expanded });
            }
        }

        let cost = arena[current].cost;
        let node = graph.node(arena[current].node);

        if node.leaf {
            if cost < lowest {
                lowest = cost;
                goals.clear();
                goals.push(current);
            } else if cost == lowest {
                goals.push(current);
            }
            if lowest == floor {
                // Aucune solution ne peut coûter moins : arrêt immédiat.
                break;
            }
            continue;
        }

        survivors.clear();
        let mut best_increment = u64::MAX;
        for &child_id in &node.children {
            let child = graph.node(child_id);
            let increment = arena[current].visibility.price(child.candidate);
            let child_cost = cost + increment;
            // Borne admissible : chaque slot restant coûte au moins 1.
            let remaining = num_slots - (child.slot as u64 + 1);
            if child_cost + remaining >= lowest {
                continue;
            }
            best_increment = best_increment.min(increment);
            survivors.push((child_id, increment, child_cost));
        }
        if !opts.exhaustive {
            // Resserrement glouton documenté : seuls les enfants au surcoût
            // local minimal restent en lice.
            survivors.retain(|&(_, increment, _)| increment == best_increment);
        }

        for &(child_id, _, child_cost) in survivors.iter().rev() {
            let child = graph.node(child_id);
            let visibility = arena[current].visibility.after(child.candidate);
            arena.push(PathNode {
                cost: child_cost,
                node: child_id,
                parent: Some(current),
                visibility,
            });
            frontier.push(arena.len() - 1);
        }
    }

    if goals.is_empty() {
        // Impossible après la passe de faisabilité du graphe ; jamais de
        // résultat vide silencieux.
        return Err(SolveError::Other(anyhow!(
            "frontier exhausted without reaching any leaf"
        )));
    }

    let assignments = goals
        .iter()
        .map(|&goal| extract(graph, &arena, goal))
        .collect();

    Ok(SearchOutcome {
        assignments,
        cost: lowest,
        expanded,
    })
}

/// Remonte les liens parents de la feuille à la racine puis renverse :
/// un indice de candidat par slot, en ordre croissant de slots.
fn extract(graph: &AssignmentGraph, arena: &[PathNode], goal: usize) -> Vec<usize> {
    let mut path = Vec::with_capacity(graph.num_slots());
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        let entry = &arena[index];
        path.push(graph.node(entry.node).candidate);
        cursor = entry.parent;
    }
    path.reverse();
    path
}
