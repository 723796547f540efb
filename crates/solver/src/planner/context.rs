//! Planning blackboard.
//!
//! The [`PlanContext`] is what every policy node reads and writes. It owns
//! the knowledge base for the duration of one decision and hands it back
//! through [`PlanContext::finish`].

use wumpus_core::{AgentState, Command, GameConfig, Position};

use super::goal::{Goal, Plan};
use super::route::RouteMap;
use crate::knowledge::KnowledgeBase;

pub struct PlanContext {
    knowledge: KnowledgeBase,
    agent: AgentState,
    entry: Position,
    total_gold: u32,
    config: GameConfig,

    /// Routes from the agent's current state, computed on first use.
    routes: Option<RouteMap>,

    /// The plan chosen by the policy. `None` until an action node succeeds.
    plan: Option<Plan>,
}

impl PlanContext {
    pub fn new(
        knowledge: KnowledgeBase,
        agent: AgentState,
        entry: Position,
        total_gold: u32,
        config: GameConfig,
    ) -> Self {
        Self {
            knowledge,
            agent,
            entry,
            total_gold,
            config,
            routes: None,
            plan: None,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn total_gold(&self) -> u32 {
        self.total_gold
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Knowledge together with the routes from the agent's current state.
    pub fn survey(&mut self) -> (&KnowledgeBase, &RouteMap) {
        let routes = self.routes.get_or_insert_with(|| {
            RouteMap::build(&self.knowledge, self.agent.position, self.agent.facing)
        });
        (&self.knowledge, routes)
    }

    pub fn set_plan(&mut self, goal: Goal, commands: Vec<Command>) {
        self.plan = Some(Plan::new(goal, commands));
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Returns the knowledge base and the chosen plan, if any.
    pub fn finish(self) -> (KnowledgeBase, Option<Plan>) {
        (self.knowledge, self.plan)
    }
}
