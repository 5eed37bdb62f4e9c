/// Compteur de refroidissement par candidat, indexé par l'indice de candidat
/// (l'ensemble est fermé pendant une résolution). Plus la valeur est haute,
/// plus le candidat a servi récemment, plus le réutiliser coûte cher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Visibility(Vec<u32>);

impl Visibility {
    /// État à la racine : tout le monde à 0 sauf le candidat racine,
    /// qui vient d'être servi.
    pub(super) fn seed(num_candidates: usize, root: usize) -> Self {
        let mut values = vec![0u32; num_candidates];
        values[root] = num_candidates as u32;
        Self(values)
    }

    /// Surcoût d'affecter ce candidat maintenant : au moins 1 (le plancher),
    /// jusqu'à numCandidates juste après un service.
    pub(super) fn price(&self, candidate: usize) -> u64 {
        u64::from(self.0[candidate].max(1))
    }

    /// Un slot passe : tout le monde décrémente (plancher 0), l'élu repart
    /// à numCandidates. Refroidissement de longueur numCandidates.
    pub(super) fn after(&self, chosen: usize) -> Self {
        let mut next: Vec<u32> = self.0.iter().map(|v| v.saturating_sub(1)).collect();
        next[chosen] = next.len() as u32;
        Self(next)
    }
}

/// Préfixe de chemin exploré. Jamais mémoïsé : un même nœud de graphe
/// atteint par deux historiques différents donne deux `PathNode` de coûts
/// différents. Les liens `parent` forment des listes de chemins non
/// partagées dans l'arène de la recherche.
#[derive(Debug)]
pub(super) struct PathNode {
    pub cost: u64,
    /// Nœud de graphe porté par ce préfixe.
    pub node: usize,
    /// Indice du parent dans l'arène de recherche.
    pub parent: Option<usize>,
    pub visibility: Visibility,
}
