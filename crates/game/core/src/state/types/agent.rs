use std::fmt;

use super::Position;

/// Unique identifier for an agent. The seeker is always `#0`; pursuers follow
/// in roster order starting at `#1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    pub const SEEKER: Self = Self(0);

    /// Identifier of the pursuer at `roster_index`.
    pub const fn pursuer(roster_index: usize) -> Self {
        Self(roster_index as u32 + 1)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Seeker,
    Pursuer,
}

/// Movement policy evaluated once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    /// Walk toward the first remaining goal.
    GoalSeeking,
    /// Always search toward the seeker.
    AlwaysChase,
    /// Search toward the seeker with the given chance, otherwise step randomly.
    Probabilistic { chase_chance_percent: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub position: Position,
    pub role: Role,
    pub policy: Policy,
    /// Goals collected. Only ever non-zero for the seeker.
    pub score: u32,
}

impl Agent {
    pub fn seeker(position: Position) -> Self {
        Self {
            id: AgentId::SEEKER,
            position,
            role: Role::Seeker,
            policy: Policy::GoalSeeking,
            score: 0,
        }
    }

    pub fn ai_pursuer(roster_index: usize, position: Position) -> Self {
        Self::pursuer(roster_index, position, Policy::AlwaysChase)
    }

    pub fn random_pursuer(roster_index: usize, position: Position, chase_chance_percent: u32) -> Self {
        Self::pursuer(
            roster_index,
            position,
            Policy::Probabilistic {
                chase_chance_percent,
            },
        )
    }

    fn pursuer(roster_index: usize, position: Position, policy: Policy) -> Self {
        Self {
            id: AgentId::pursuer(roster_index),
            position,
            role: Role::Pursuer,
            policy,
            score: 0,
        }
    }

    /// True for the pursuer that always pathfinds toward the seeker.
    pub fn is_ai_controlled(&self) -> bool {
        matches!(self.policy, Policy::AlwaysChase)
    }
}
