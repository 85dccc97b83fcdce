//! # behavior-tree-fluent
//!
//! A minimal behavior tree implementation with a fluent builder API.
//!
//!
//! ## Overview
//!
//! A behavior tree is a hierarchical decision structure that drives agent
//! logic through periodic re-evaluation, called a *tick*. Each tick walks
//! the tree from the root and every node answers with one of three
//! statuses ([`Status::Success`], [`Status::Failure`] or
//! [`Status::Running`]), which compose recursively from the leaves up.
//!
//! The crate provides the classic set of composite nodes (sequence,
//! selector, parallel and inverter), a leaf node that wraps a plain
//! closure, and [`BehaviorTreeBuilder`], which assembles a correctly
//! nested tree from a flat chain of calls so that you never wire parent
//! and child references by hand.
//!
//!
//! ## How it looks like
//!
//! You describe the tree as a chain of builder calls. Opening a composite
//! (`sequence`, `selector`, `parallel`, `inverter`) makes it the parent of
//! everything that follows, until the matching [`end`] closes it again,
//! like a closing parenthesis. [`build`] then hands you the finished tree.
//!
//! [`end`]: BehaviorTreeBuilder::end
//! [`build`]: BehaviorTreeBuilder::build
//!
//! ```rust
//! use behavior_tree_fluent::{BehaviorNode, BehaviorTreeBuilder, Status, TimeData};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tree = BehaviorTreeBuilder::new()
//!         .sequence("open the door")?
//!         .condition("door is unlocked", |_| true)?
//!         .do_action("push it open", |_| Status::Success)?
//!         .end()
//!         .build()?;
//!
//!     assert_eq!(tree.tick(&TimeData::new(0.016))?, Status::Success);
//!     Ok(())
//! }
//! ```
//!
//! The host application owns the tick loop. Once per evaluation cycle
//! (typically once per simulation frame) it calls `tick` on the root with
//! a [`TimeData`] carrying the elapsed delta time, and the call recurses
//! synchronously through the whole tree.
//!
//!
//! ## Node types
//!
//! * **Action** ([`ActionNode`], built with `do_action`) wraps a closure
//!   `FnMut(&TimeData) -> Status` and returns whatever the closure
//!   returns. `condition` is sugar for an action whose `bool` result is
//!   mapped to Success/Failure.
//! * **Sequence** ticks children in order and stops at the first child
//!   that does not succeed, returning that status. All children
//!   succeeding means Success; an empty sequence is vacuously Success.
//! * **Selector** is the mirror image, stopping at the first child that
//!   does not fail. All children failing means Failure; an empty selector
//!   is Failure.
//! * **Parallel** ticks *every* child every cycle and then compares the
//!   number of succeeded and failed children against its two thresholds.
//! * **Inverter** swaps Success and Failure of its single child and lets
//!   Running through unchanged.
//!
//!
//! ## How to define your own node
//!
//! Anything that implements [`BehaviorNode`] can take part in a tree.
//! Closures cover most leaves, but a hand-written node can carry its own
//! state. Use [`splice`](BehaviorTreeBuilder::splice) to graft an already
//! constructed node (or a whole prebuilt subtree) into a tree under
//! construction.
//!
//! ```rust
//! use behavior_tree_fluent::{
//!     BehaviorNode, BehaviorTreeBuilder, Status, TickResult, TimeData,
//! };
//!
//! struct CheckBattery {
//!     level: f64,
//! }
//!
//! impl BehaviorNode for CheckBattery {
//!     fn tick(&mut self, _time: &TimeData) -> TickResult {
//!         if self.level > 0.2 {
//!             Ok(Status::Success)
//!         } else {
//!             Ok(Status::Failure)
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = BehaviorTreeBuilder::new()
//!     .sequence("mow")?
//!     .splice(Box::new(CheckBattery { level: 0.8 }))?
//!     .do_action("mow the lawn", |_| Status::Success)?
//!     .end()
//!     .build()?;
//!
//! # assert_eq!(tree.tick(&TimeData::default())?, Status::Success);
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## Ticking and `Running`
//!
//! `Running` is a plain returned value, not a suspended computation. A
//! node that is not done yet simply returns it, and the host calls `tick`
//! again on the next cycle, starting from the root. The tree keeps no
//! resumption state between cycles; whatever progress a leaf needs to
//! remember lives in its own closure.
//!
//! ```rust
//! use behavior_tree_fluent::{BehaviorNode, BehaviorTreeBuilder, Status, TimeData};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut remaining = 3;
//! let mut tree = BehaviorTreeBuilder::new()
//!     .sequence("countdown")?
//!     .do_action("tick down", move |_| {
//!         remaining -= 1;
//!         if remaining == 0 {
//!             Status::Success
//!         } else {
//!             Status::Running
//!         }
//!     })?
//!     .end()
//!     .build()?;
//!
//! let time = TimeData::new(1.0);
//! assert_eq!(tree.tick(&time)?, Status::Running);
//! assert_eq!(tree.tick(&time)?, Status::Running);
//! assert_eq!(tree.tick(&time)?, Status::Success);
//! # Ok(())
//! # }
//! ```
//!
//! Execution is strictly single threaded and synchronous. A long running
//! action blocks the whole tick for as long as it runs; cooperative
//! behavior across cycles is achieved only by returning `Running` and
//! resuming on the next call.
//!
//!
//! ## Errors
//!
//! All errors in this crate are programmer facing construction or use
//! mistakes, never transient failures, and nothing is retried internally.
//! They are ordinary [`Result`]s so both callers and tests can
//! discriminate them by kind; see the [`error`] module. Misusing the
//! builder (a leaf with no parent, building before anything was closed)
//! fails at the exact call that detects it, and ticking an inverter that
//! never received a child fails on every tick.
//!
//!
//! ## Serde
//!
//! With the optional `serde` feature, the plain value types [`Status`]
//! and [`TimeData`] derive `Serialize`/`Deserialize` so hosts can record
//! tick outcomes. Trees themselves are deliberately not serializable.

mod builder;
pub mod error;
mod nodes;

pub use crate::builder::BehaviorTreeBuilder;
pub use crate::nodes::{ActionNode, InverterNode, ParallelNode, SelectorNode, SequenceNode};

use crate::error::TickError;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Success,
    Failure,
    /// The node should keep running in the next tick
    Running,
}

/// Per-tick input carrying the time elapsed since the previous tick.
///
/// It is supplied by the host once per tick and forwarded to every node
/// unchanged; nodes never mutate it.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeData {
    pub delta_time: f64,
}

impl TimeData {
    pub fn new(delta_time: f64) -> Self {
        Self { delta_time }
    }
}

impl Default for TimeData {
    fn default() -> Self {
        Self { delta_time: 1.0 }
    }
}

/// The result of ticking a node.
///
/// The error side is reserved for fatal misuse such as ticking an
/// inverter with no child; see [`error::TickError`].
pub type TickResult = Result<Status, TickError>;

/// A node in a behavior tree.
///
/// This is the only capability a node exposes. There is no reset or
/// abort; composite correctness rests entirely on how each node combines
/// the statuses of its children.
pub trait BehaviorNode {
    fn tick(&mut self, time: &TimeData) -> TickResult;
}

/// Boxed nodes are nodes too, so prebuilt subtrees compose and splice
/// without unwrapping.
impl BehaviorNode for Box<dyn BehaviorNode> {
    fn tick(&mut self, time: &TimeData) -> TickResult {
        (**self).tick(time)
    }
}
