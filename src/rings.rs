use crate::excavate::ExcavatedGraph;

pub const MIN_RING_SIZE: usize = 3;
pub const MAX_RING_SIZE: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct RingInfo {
    ring_block: Vec<usize>,
    rings: Vec<Vec<usize>>,
}

impl RingInfo {
    pub(crate) fn small_rings(graph: &ExcavatedGraph) -> Self {
        let ring_block = mark_ring_blocks(&graph.atom_adj, &graph.active);
        let mut rings: Vec<Vec<usize>> = Vec::new();

        let mut path = Vec::with_capacity(MAX_RING_SIZE);
        let mut cursor = Vec::with_capacity(MAX_RING_SIZE);
        for size in MIN_RING_SIZE..=MAX_RING_SIZE {
            for start in 0..ring_block.len() {
                if ring_block[start] == 0 {
                    continue;
                }
                find_rings_from(
                    &graph.atom_adj,
                    &ring_block,
                    start,
                    size,
                    &mut path,
                    &mut cursor,
                    &mut rings,
                );
            }
        }

        Self { ring_block, rings }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[Vec<usize>] {
        &self.rings
    }

    /// Ring block id of `atom`; 0 for acyclic atoms.
    pub fn ring_block(&self, atom: usize) -> usize {
        self.ring_block.get(atom).copied().unwrap_or(0)
    }

    pub fn num_ring_blocks(&self) -> usize {
        self.ring_block.iter().copied().max().unwrap_or(0)
    }

    pub fn is_ring_atom(&self, atom: usize) -> bool {
        self.rings.iter().any(|ring| ring.contains(&atom))
    }

    pub fn smallest_ring_size(&self, atom: usize) -> Option<usize> {
        self.rings
            .iter()
            .filter(|ring| ring.contains(&atom))
            .map(|ring| ring.len())
            .min()
    }
}

fn mark_ring_blocks(atom_adj: &[Vec<usize>], active: &[bool]) -> Vec<usize> {
    const NOT_ON_PATH: usize = usize::MAX;

    let na = atom_adj.len();
    let mut block = vec![0usize; na];
    let mut visited: Vec<bool> = active.iter().map(|&a| !a).collect();
    let mut path: Vec<usize> = Vec::with_capacity(na);
    let mut path_pos = vec![NOT_ON_PATH; na];
    let mut next_id = 0usize;
    let mut merged: Vec<usize> = Vec::new();

    loop {
        let current = match path.last() {
            None => match visited.iter().position(|&v| !v) {
                Some(start) => start,
                None => break,
            },
            Some(&last) => match atom_adj[last].iter().copied().find(|&nb| !visited[nb]) {
                Some(nb) => nb,
                None => {
                    path.pop();
                    path_pos[last] = NOT_ON_PATH;
                    continue;
                }
            },
        };

        let back = path.last().copied();
        for &join in &atom_adj[current] {
            if Some(join) == back || !visited[join] || path_pos[join] == NOT_ON_PATH {
                continue;
            }
            let members = &path[path_pos[join]..];

            merged.clear();
            for &atom in members.iter().chain(std::iter::once(&current)) {
                if block[atom] != 0 && !merged.contains(&block[atom]) {
                    merged.push(block[atom]);
                }
            }
            let id = match merged.iter().copied().min() {
                Some(id) => id,
                None => {
                    next_id += 1;
                    next_id
                }
            };
            if merged.len() > 1 {
                for b in block.iter_mut() {
                    if *b != 0 && merged.contains(b) {
                        *b = id;
                    }
                }
            }
            for &atom in members {
                block[atom] = id;
            }
            block[current] = id;
        }

        visited[current] = true;
        path_pos[current] = path.len();
        path.push(current);
    }

    let mut renumber = vec![0usize; next_id + 1];
    let mut count = 0;
    for b in block.iter_mut() {
        if *b == 0 {
            continue;
        }
        if renumber[*b] == 0 {
            count += 1;
            renumber[*b] = count;
        }
        *b = renumber[*b];
    }
    block
}

// `cursor[d]` is the next adjacency slot to try at depth `d`.
fn find_rings_from(
    atom_adj: &[Vec<usize>],
    ring_block: &[usize],
    start: usize,
    size: usize,
    path: &mut Vec<usize>,
    cursor: &mut Vec<usize>,
    rings: &mut Vec<Vec<usize>>,
) {
    let rblk = ring_block[start];
    path.clear();
    cursor.clear();
    path.push(start);
    cursor.push(0);

    while let Some(depth) = path.len().checked_sub(1) {
        if path.len() == size {
            consider_ring(atom_adj, path, rings);
            path.pop();
            cursor.pop();
            continue;
        }

        let last = path[depth];
        let slot = cursor[depth];
        let Some(&next) = atom_adj[last].get(slot) else {
            path.pop();
            cursor.pop();
            continue;
        };
        cursor[depth] += 1;

        if ring_block[next] != rblk || path.contains(&next) {
            continue;
        }
        path.push(next);
        cursor.push(0);
    }
}

fn consider_ring(atom_adj: &[Vec<usize>], path: &[usize], rings: &mut Vec<Vec<usize>>) {
    let size = path.len();
    if !atom_adj[path[size - 1]].contains(&path[0]) {
        return;
    }

    for &atom in path {
        let inside = atom_adj[atom].iter().filter(|nb| path.contains(nb)).count();
        if inside != 2 {
            return;
        }
    }

    let ring = canonical_ring(path);
    if rings.iter().any(|r| *r == ring) {
        return;
    }
    rings.push(ring);
}

/// Rotates a ring to start at its lowest atom and walks toward the lower of
/// that atom's two ring neighbors.
fn canonical_ring(path: &[usize]) -> Vec<usize> {
    let size = path.len();
    let first = (0..size).min_by_key(|&i| path[i]).unwrap_or(0);
    let prev = path[(first + size - 1) % size];
    let next = path[(first + 1) % size];
    let flip = prev < next;
    (0..size)
        .map(|n| {
            let idx = if flip {
                (first + size - n) % size
            } else {
                (first + n) % size
            };
            path[idx]
        })
        .collect()
}
