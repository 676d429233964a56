//! Registry of benchmarkable actions
//!
//! The playground API exposes a fixed set of write actions under
//! `POST /api/todos/{action}`. The set is closed, so dispatch is an enum
//! rather than a name-to-handler map: an unknown name can only occur at the
//! boundary where a string comes in, never inside the harness.

use serde::{Serialize, Serializer};

/// Which data layer an action exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stack {
    /// Headless-CMS write path.
    Cms,
    /// Direct ORM write path.
    Orm,
}

impl Stack {
    /// Human-readable label used in the comparison table.
    pub fn label(&self) -> &'static str {
        match self {
            Stack::Cms => "PayloadCMS",
            Stack::Orm => "Drizzle ORM",
        }
    }

    /// The benchmarked actions belonging to this stack, in run order.
    pub fn actions(&self) -> &'static [Action] {
        match self {
            Stack::Cms => &[
                Action::CreateTodo,
                Action::GenerateBatch,
                Action::ParallelGenerateBatch,
                Action::SafeParallelGenerateBatch,
            ],
            Stack::Orm => &[
                Action::DrizzleCreateTodo,
                Action::DrizzleBatchInsert,
                Action::DrizzleSafeParallelInsert,
            ],
        }
    }
}

/// A benchmarkable write action.
///
/// Wire names are fixed by the playground API and must match it exactly.
/// The bulk-delete endpoint used for cleanup is deliberately not a variant
/// here; see [`crate::cleanup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    CreateTodo,
    GenerateBatch,
    ParallelGenerateBatch,
    SafeParallelGenerateBatch,
    DrizzleCreateTodo,
    DrizzleBatchInsert,
    DrizzleSafeParallelInsert,
}

impl Action {
    /// All benchmarked actions, CMS group first (the order the run executes).
    pub const ALL: [Action; 7] = [
        Action::CreateTodo,
        Action::GenerateBatch,
        Action::ParallelGenerateBatch,
        Action::SafeParallelGenerateBatch,
        Action::DrizzleCreateTodo,
        Action::DrizzleBatchInsert,
        Action::DrizzleSafeParallelInsert,
    ];

    /// The `{action}` path segment on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Action::CreateTodo => "createTodo",
            Action::GenerateBatch => "generateBatch",
            Action::ParallelGenerateBatch => "parallelGenerateBatch",
            Action::SafeParallelGenerateBatch => "safeParallelGenerateBatch",
            Action::DrizzleCreateTodo => "drizzleCreateTodo",
            Action::DrizzleBatchInsert => "drizzleBatchInsert",
            Action::DrizzleSafeParallelInsert => "drizzleSafeParallelInsert",
        }
    }

    /// Which stack this action exercises.
    pub fn stack(&self) -> Stack {
        match self {
            Action::CreateTodo
            | Action::GenerateBatch
            | Action::ParallelGenerateBatch
            | Action::SafeParallelGenerateBatch => Stack::Cms,
            Action::DrizzleCreateTodo
            | Action::DrizzleBatchInsert
            | Action::DrizzleSafeParallelInsert => Stack::Orm,
        }
    }

    /// Resolve a wire name. Fails closed: unknown names return `None` and
    /// never reach the network.
    pub fn from_wire(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.wire_name() == name)
    }
}

// Serialized as the wire name so JSON/YAML results are keyed the way the
// API spells its actions.
impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
