use crate::{
    error::{AddChildError, AddChildResult, TickError},
    BehaviorNode, Status, TickResult, TimeData,
};

/// A leaf node wrapping a user callback; ticking it invokes the callback
/// with the supplied time data and returns its result verbatim.
pub struct ActionNode {
    name: String,
    func: Box<dyn FnMut(&TimeData) -> Status>,
}

impl ActionNode {
    pub fn new(name: impl Into<String>, func: impl FnMut(&TimeData) -> Status + 'static) -> Self {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BehaviorNode for ActionNode {
    fn tick(&mut self, time: &TimeData) -> TickResult {
        Ok((self.func)(time))
    }
}

/// Ticks children in insertion order until one does not succeed, like a
/// short-circuiting logical AND.
pub struct SequenceNode {
    name: String,
    children: Vec<Box<dyn BehaviorNode>>,
}

impl SequenceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![],
        }
    }

    pub fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BehaviorNode for SequenceNode {
    fn tick(&mut self, time: &TimeData) -> TickResult {
        for child in &mut self.children {
            match child.tick(time)? {
                Status::Failure => return Ok(Status::Failure),
                Status::Running => return Ok(Status::Running),
                Status::Success => (),
            }
        }
        Ok(Status::Success)
    }
}

/// Ticks children in insertion order until one does not fail, like a
/// short-circuiting logical OR.
pub struct SelectorNode {
    name: String,
    children: Vec<Box<dyn BehaviorNode>>,
}

impl SelectorNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![],
        }
    }

    pub fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BehaviorNode for SelectorNode {
    fn tick(&mut self, time: &TimeData) -> TickResult {
        for child in &mut self.children {
            match child.tick(time)? {
                Status::Success => return Ok(Status::Success),
                Status::Running => return Ok(Status::Running),
                Status::Failure => (),
            }
        }
        Ok(Status::Failure)
    }
}

/// Ticks every child every cycle and aggregates the outcome against two
/// thresholds.
///
/// Success wins when at least `required_to_succeed` children succeeded
/// this cycle, then Failure when at least `required_to_fail` failed;
/// otherwise the node keeps Running. Children that return Running count
/// toward neither threshold.
pub struct ParallelNode {
    name: String,
    children: Vec<Box<dyn BehaviorNode>>,
    required_to_fail: usize,
    required_to_succeed: usize,
}

impl ParallelNode {
    pub fn new(
        name: impl Into<String>,
        required_to_fail: usize,
        required_to_succeed: usize,
    ) -> Self {
        Self {
            name: name.into(),
            children: vec![],
            required_to_fail,
            required_to_succeed,
        }
    }

    pub fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BehaviorNode for ParallelNode {
    fn tick(&mut self, time: &TimeData) -> TickResult {
        let mut succeeded = 0;
        let mut failed = 0;

        // Every child is ticked every cycle; there is no early exit.
        for child in &mut self.children {
            match child.tick(time)? {
                Status::Success => succeeded += 1,
                Status::Failure => failed += 1,
                Status::Running => (),
            }
        }

        if succeeded > 0 && succeeded >= self.required_to_succeed {
            return Ok(Status::Success);
        }
        if failed > 0 && failed >= self.required_to_fail {
            return Ok(Status::Failure);
        }
        Ok(Status::Running)
    }
}

/// Swaps the Success and Failure of its single child; Running passes
/// through unchanged.
pub struct InverterNode {
    name: String,
    child: Option<Box<dyn BehaviorNode>>,
}

impl InverterNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            child: None,
        }
    }

    pub fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        if self.child.is_none() {
            self.child = Some(child);
            Ok(())
        } else {
            Err(AddChildError::TooManyChildren)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BehaviorNode for InverterNode {
    fn tick(&mut self, time: &TimeData) -> TickResult {
        // The child is checked on every tick, not just the first.
        if let Some(ref mut child) = self.child {
            let res = match child.tick(time)? {
                Status::Running => Status::Running,
                Status::Success => Status::Failure,
                Status::Failure => Status::Success,
            };
            Ok(res)
        } else {
            Err(TickError::ChildMissing)
        }
    }
}
