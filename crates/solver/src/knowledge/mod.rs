//! What the agent knows about the cave, and how it learns more.
//!
//! Each cell carries two three-valued facts (pit, wumpus). Visiting a cell
//! adds its percept clauses, and a worklist propagates them to a fixpoint:
//!
//! - no breeze (stench) at a visited cell: no pit (live wumpus) in any neighbour
//! - breeze (stench) with exactly one neighbour not ruled out: that neighbour
//!   holds the hazard
//!
//! Pit facts are monotone. Wumpus facts are re-derived from scratch after an
//! arrow flight, since a kill silences stench that earlier clauses relied on.
mod fact;

pub use fact::{Fact, Hazard, Inference};

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use tracing::{debug, warn};
use wumpus_core::{BeliefMap, CellBelief, PerceptOracle, Percepts, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CellKnowledge {
    visited: bool,
    percepts: Percepts,
    pit: Fact,
    wumpus: Fact,
    /// An arrow crossed this cell, so no live wumpus can be here.
    wumpus_ruled_out: bool,
}

impl CellKnowledge {
    fn fact(&self, hazard: Hazard) -> Fact {
        match hazard {
            Hazard::Pit => self.pit,
            Hazard::Wumpus => self.wumpus,
        }
    }

    fn fact_mut(&mut self, hazard: Hazard) -> &mut Fact {
        match hazard {
            Hazard::Pit => &mut self.pit,
            Hazard::Wumpus => &mut self.wumpus,
        }
    }

    fn is_safe(&self) -> bool {
        self.pit == Fact::Absent && self.wumpus == Fact::Absent
    }

    fn wumpus_baseline(&self) -> Fact {
        if self.visited || self.wumpus_ruled_out {
            Fact::Absent
        } else {
            Fact::Unknown
        }
    }
}

/// FIFO of visited cells whose clauses must be re-evaluated. A cell is queued
/// at most once at a time.
struct Worklist {
    size: usize,
    queue: VecDeque<Position>,
    queued: Vec<bool>,
}

impl Worklist {
    fn new(size: usize) -> Self {
        Self {
            size,
            queue: VecDeque::new(),
            queued: vec![false; size * size],
        }
    }

    fn push(&mut self, position: Position) {
        let index = position.index(self.size);
        if !self.queued[index] {
            self.queued[index] = true;
            self.queue.push_back(position);
        }
    }

    fn pop(&mut self) -> Option<Position> {
        let position = self.queue.pop_front()?;
        self.queued[position.index(self.size)] = false;
        Some(position)
    }
}

/// Per-cell knowledge plus the inference rules that extend it.
///
/// The knowledge base never touches the cave. Percepts arrive through a
/// [`PerceptOracle`], and only for cells the agent has visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeBase {
    size: usize,
    cells: Vec<CellKnowledge>,
}

impl KnowledgeBase {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellKnowledge::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).visited
    }

    /// Percepts last recorded at a visited cell.
    pub fn percepts(&self, position: Position) -> Option<Percepts> {
        let cell = self.cell(position);
        cell.visited.then_some(cell.percepts)
    }

    pub fn fact(&self, position: Position, hazard: Hazard) -> Fact {
        self.cell(position).fact(hazard)
    }

    /// Both hazards are known to be absent.
    pub fn is_safe(&self, position: Position) -> bool {
        self.cell(position).is_safe()
    }

    /// Cells the agent may walk through without risk.
    pub fn is_passable(&self, position: Position) -> bool {
        let cell = self.cell(position);
        cell.visited || cell.is_safe()
    }

    /// Integrates the percepts of a newly entered cell and propagates.
    ///
    /// Returns every fact derived as a consequence, in derivation order.
    pub fn record_visit<O>(&mut self, position: Position, oracle: &O) -> Vec<Inference>
    where
        O: PerceptOracle + ?Sized,
    {
        let percepts = oracle.percepts(position);
        let cell = self.cell_mut(position);
        if cell.pit == Fact::Present || cell.wumpus == Fact::Present {
            warn!(%position, "survived a cell believed to be deadly");
        }
        cell.visited = true;
        cell.percepts = percepts;
        cell.pit = Fact::Absent;
        cell.wumpus = Fact::Absent;

        let mut worklist = Worklist::new(self.size);
        worklist.push(position);
        self.queue_visited_neighbors(position, &mut worklist);

        let mut inferences = Vec::new();
        self.propagate(worklist, &mut inferences);
        debug!(
            %position,
            ?percepts,
            inferences = inferences.len(),
            "integrated visit"
        );
        inferences
    }

    /// Marks cells an arrow flew through as free of live wumpuses.
    ///
    /// Takes effect on the next [`revise_wumpus`](Self::revise_wumpus).
    pub fn rule_out_wumpus(&mut self, cells: &[Position]) {
        for &position in cells {
            self.cell_mut(position).wumpus_ruled_out = true;
        }
    }

    /// Re-derives every wumpus fact from fresh percepts.
    ///
    /// Visited percepts are re-read from `oracle`, wumpus facts return to their
    /// baseline and clauses are propagated again. Only facts that differ from
    /// before the revision are returned. Facts with no deriving clause (arrow
    /// flights) are attributed to `observer`.
    pub fn revise_wumpus<O>(&mut self, oracle: &O, observer: Position) -> Vec<Inference>
    where
        O: PerceptOracle + ?Sized,
    {
        let before: Vec<Fact> = self.cells.iter().map(|cell| cell.wumpus).collect();

        let mut worklist = Worklist::new(self.size);
        for position in Position::all(self.size) {
            let index = position.index(self.size);
            let cell = &mut self.cells[index];
            if cell.visited {
                cell.percepts = oracle.percepts(position);
                worklist.push(position);
            }
            cell.wumpus = cell.wumpus_baseline();
        }

        let mut derived = Vec::new();
        self.propagate(worklist, &mut derived);

        let mut revised: Vec<Inference> = derived
            .iter()
            .copied()
            .filter(|inference| inference.hazard == Hazard::Pit)
            .collect();

        for position in Position::all(self.size) {
            let index = position.index(self.size);
            let cell = self.cells[index];
            if cell.wumpus == before[index] || cell.wumpus == Fact::Unknown {
                continue;
            }
            let source = derived
                .iter()
                .find(|inference| inference.cell == position && inference.hazard == Hazard::Wumpus)
                .map_or(observer, |inference| inference.source);
            revised.push(Inference {
                cell: position,
                hazard: Hazard::Wumpus,
                fact: cell.wumpus,
                source,
                now_safe: cell.is_safe(),
            });
        }

        debug!(%observer, revised = revised.len(), "revised wumpus knowledge");
        revised
    }

    /// Refreshes the percept snapshot of a visited cell without propagating.
    pub fn resense<O>(&mut self, position: Position, oracle: &O)
    where
        O: PerceptOracle + ?Sized,
    {
        let percepts = oracle.percepts(position);
        let cell = self.cell_mut(position);
        if cell.visited {
            cell.percepts = percepts;
        }
    }

    /// Number of breeze and stench observations that implicate `position`.
    pub fn risk(&self, position: Position) -> u32 {
        Hazard::ALL
            .into_iter()
            .filter(|&hazard| self.fact(position, hazard) != Fact::Absent)
            .map(|hazard| self.implication(position, hazard))
            .sum()
    }

    /// Number of visited neighbours whose percept for `hazard` includes `position`.
    pub fn implication(&self, position: Position, hazard: Hazard) -> u32 {
        position
            .neighbors(self.size)
            .into_iter()
            .filter(|&neighbor| {
                let cell = self.cell(neighbor);
                cell.visited && cell.percepts.contains(hazard.signal())
            })
            .count() as u32
    }

    pub fn belief(&self, position: Position) -> CellBelief {
        let cell = self.cell(position);
        if cell.visited {
            CellBelief::Visited
        } else if cell.pit == Fact::Present || cell.wumpus == Fact::Present {
            CellBelief::ConfirmedDangerous
        } else if cell.is_safe() {
            CellBelief::Safe
        } else if cell.wumpus != Fact::Absent && self.implication(position, Hazard::Wumpus) > 0 {
            CellBelief::SuspectedWumpus
        } else if cell.pit != Fact::Absent && self.implication(position, Hazard::Pit) > 0 {
            CellBelief::SuspectedPit
        } else {
            CellBelief::Unknown
        }
    }

    /// Unvisited cells adjacent to a visited cell, in row-major order.
    pub fn frontier(&self) -> Vec<Position> {
        Position::all(self.size)
            .filter(|&position| {
                !self.is_visited(position)
                    && position
                        .neighbors(self.size)
                        .into_iter()
                        .any(|neighbor| self.is_visited(neighbor))
            })
            .collect()
    }

    pub fn beliefs(&self) -> BeliefMap {
        BeliefMap::from_fn(self.size, |position| self.belief(position))
    }

    fn propagate(&mut self, mut worklist: Worklist, out: &mut Vec<Inference>) {
        while let Some(position) = worklist.pop() {
            for hazard in Hazard::ALL {
                self.apply_clause(position, hazard, &mut worklist, out);
            }
        }
    }

    fn apply_clause(
        &mut self,
        source: Position,
        hazard: Hazard,
        worklist: &mut Worklist,
        out: &mut Vec<Inference>,
    ) {
        let neighbors = source.neighbors(self.size);
        if !self.cell(source).percepts.contains(hazard.signal()) {
            for neighbor in neighbors {
                self.conclude(neighbor, hazard, Fact::Absent, source, worklist, out);
            }
            return;
        }

        let open: ArrayVec<Position, 4> = neighbors
            .into_iter()
            .filter(|&neighbor| self.fact(neighbor, hazard) != Fact::Absent)
            .collect();
        match open.as_slice() {
            [only] => self.conclude(*only, hazard, Fact::Present, source, worklist, out),
            [] => warn!(%source, ?hazard, "percept with every candidate ruled out"),
            _ => {}
        }
    }

    fn conclude(
        &mut self,
        position: Position,
        hazard: Hazard,
        fact: Fact,
        source: Position,
        worklist: &mut Worklist,
        out: &mut Vec<Inference>,
    ) {
        let current = self.fact(position, hazard);
        if current == fact {
            return;
        }
        if current != Fact::Unknown {
            warn!(%position, ?hazard, ?current, ?fact, "conflicting conclusion ignored");
            return;
        }

        *self.cell_mut(position).fact_mut(hazard) = fact;
        out.push(Inference {
            cell: position,
            hazard,
            fact,
            source,
            now_safe: fact == Fact::Absent && self.is_safe(position),
        });
        self.queue_visited_neighbors(position, worklist);
    }

    fn queue_visited_neighbors(&self, position: Position, worklist: &mut Worklist) {
        for neighbor in position.neighbors(self.size) {
            if self.is_visited(neighbor) {
                worklist.push(neighbor);
            }
        }
    }

    fn cell(&self, position: Position) -> &CellKnowledge {
        &self.cells[self.index(position)]
    }

    fn cell_mut(&mut self, position: Position) -> &mut CellKnowledge {
        let index = self.index(position);
        &mut self.cells[index]
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            position.in_bounds(self.size),
            "position {position} outside {size}x{size} knowledge base",
            size = self.size
        );
        position.index(self.size)
    }
}
