//! Shortest routes over the cells the agent may walk through.
//!
//! The search runs over `(cell, facing)` states because turning costs a step
//! in the transcript. Costs compare lexicographically: fewer moves first, then
//! fewer turns. Ties are broken by insertion order, and neighbours expand in
//! UP, DOWN, LEFT, RIGHT order, so routes are fully deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wumpus_core::{Command, Direction, Position};

use crate::knowledge::KnowledgeBase;

/// Lexicographic route cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost {
    pub moves: u32,
    pub turns: u32,
}

impl Cost {
    pub const ZERO: Self = Self { moves: 0, turns: 0 };

    fn advance(self, turned: bool) -> Self {
        Self {
            moves: self.moves + 1,
            turns: self.turns + u32::from(turned),
        }
    }

    fn turn_if(self, turned: bool) -> Self {
        Self {
            moves: self.moves,
            turns: self.turns + u32::from(turned),
        }
    }
}

type State = (Position, Direction);

#[derive(Clone, Copy, Debug)]
struct Settled {
    cost: Cost,
    previous: Option<State>,
}

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Single-source shortest routes from the agent's current state.
#[derive(Clone, Debug)]
pub struct RouteMap {
    size: usize,
    start: State,
    settled: Vec<Option<Settled>>,
    settle_order: Vec<Option<u32>>,
}

impl RouteMap {
    /// Searches every passable cell reachable from `start` facing `facing`.
    pub fn build(knowledge: &KnowledgeBase, start: Position, facing: Direction) -> Self {
        let size = knowledge.size();
        let mut map = Self {
            size,
            start: (start, facing),
            settled: vec![None; size * size * 4],
            settle_order: vec![None; size * size],
        };

        let mut tentative: Vec<Option<Cost>> = vec![None; size * size * 4];
        let mut heap = BinaryHeap::new();
        let mut inserted = 0u64;
        let mut settled_cells = 0u32;
        heap.push(Reverse((Cost::ZERO, inserted, start, facing, None::<State>)));

        while let Some(Reverse((cost, _, cell, facing, previous))) = heap.pop() {
            let key = map.key(cell, facing);
            if map.settled[key].is_some() {
                continue;
            }
            map.settled[key] = Some(Settled { cost, previous });
            let order = &mut map.settle_order[cell.index(size)];
            if order.is_none() {
                *order = Some(settled_cells);
                settled_cells += 1;
            }

            for direction in Direction::ALL {
                let next = cell.step(direction);
                if !next.in_bounds(size) || !knowledge.is_passable(next) {
                    continue;
                }
                let next_key = map.key(next, direction);
                let next_cost = cost.advance(direction != facing);
                if map.settled[next_key].is_some()
                    || tentative[next_key].is_some_and(|known| known <= next_cost)
                {
                    continue;
                }
                tentative[next_key] = Some(next_cost);
                inserted += 1;
                heap.push(Reverse((
                    next_cost,
                    inserted,
                    next,
                    direction,
                    Some((cell, facing)),
                )));
            }
        }
        map
    }

    pub fn is_reachable(&self, cell: Position) -> bool {
        self.settle_order(cell).is_some()
    }

    /// Rank at which the search first reached `cell`.
    pub fn settle_order(&self, cell: Position) -> Option<u32> {
        cell.in_bounds(self.size)
            .then(|| self.settle_order[cell.index(self.size)])
            .flatten()
    }

    /// Cheapest arrival at `cell` in any facing.
    pub fn cost_to(&self, cell: Position) -> Option<Cost> {
        self.best_arrival(cell).map(|(cost, _)| cost)
    }

    /// Commands that walk the agent to `cell`.
    pub fn commands_to(&self, cell: Position) -> Option<Vec<Command>> {
        let (_, facing) = self.best_arrival(cell)?;
        self.commands_for((cell, facing))
    }

    /// Commands that walk the agent to `cell` and leave it facing `facing`.
    /// The cost includes the final turn.
    pub fn commands_facing(&self, cell: Position, facing: Direction) -> Option<(Cost, Vec<Command>)> {
        let (cost, arrival) = Direction::ALL
            .into_iter()
            .filter_map(|arrival| {
                let settled = self.settled(cell, arrival)?;
                Some((settled.cost.turn_if(arrival != facing), arrival))
            })
            .min_by_key(|&(cost, arrival)| (cost, slot(arrival)))?;

        let mut commands = self.commands_for((cell, arrival))?;
        if arrival != facing {
            commands.push(Command::Turn(facing));
        }
        Some((cost, commands))
    }

    /// Commands that step from a reachable neighbour into `target`, which need
    /// not be passable itself.
    ///
    /// Returns the cost, the settle order of the neighbour used, and the commands.
    pub fn commands_into(&self, target: Position) -> Option<(Cost, u32, Vec<Command>)> {
        let (cost, order, mut commands) = target
            .neighbors(self.size)
            .into_iter()
            .filter_map(|approach| {
                let direction = approach.direction_to(target)?;
                let order = self.settle_order(approach)?;
                let (cost, commands) = self.commands_facing(approach, direction)?;
                Some((cost.advance(false), order, commands))
            })
            .min_by_key(|&(cost, order, _)| (cost, order))?;
        commands.push(Command::MoveForward);
        Some((cost, order, commands))
    }

    fn best_arrival(&self, cell: Position) -> Option<(Cost, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(|facing| Some((self.settled(cell, facing)?.cost, facing)))
            .min_by_key(|&(cost, facing)| (cost, slot(facing)))
    }

    fn commands_for(&self, goal: State) -> Option<Vec<Command>> {
        let mut chain = vec![goal];
        let mut current = goal;
        while let Some(previous) = self.settled(current.0, current.1)?.previous {
            chain.push(previous);
            current = previous;
        }
        if current != self.start {
            return None;
        }
        chain.reverse();

        let mut commands = Vec::new();
        for pair in chain.windows(2) {
            let (_, facing) = pair[0];
            let (_, direction) = pair[1];
            if direction != facing {
                commands.push(Command::Turn(direction));
            }
            commands.push(Command::MoveForward);
        }
        Some(commands)
    }

    fn settled(&self, cell: Position, facing: Direction) -> Option<Settled> {
        if !cell.in_bounds(self.size) {
            return None;
        }
        self.settled[self.key(cell, facing)]
    }

    fn key(&self, cell: Position, facing: Direction) -> usize {
        cell.index(self.size) * 4 + slot(facing)
    }
}
