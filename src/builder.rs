use crate::{
    error::{AddChildError, BuildError},
    nodes::{ActionNode, InverterNode, ParallelNode, SelectorNode, SequenceNode},
    BehaviorNode, Status, TimeData,
};

#[derive(PartialEq, Eq)]
enum NumChildren {
    Finite(usize),
    Infinite,
}

impl PartialOrd for NumChildren {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(match (self, other) {
            (NumChildren::Finite(_), NumChildren::Infinite) => std::cmp::Ordering::Less,
            (NumChildren::Infinite, NumChildren::Finite(_)) => std::cmp::Ordering::Greater,
            (NumChildren::Finite(lhs), NumChildren::Finite(rhs)) => lhs.cmp(rhs),
            (NumChildren::Infinite, NumChildren::Infinite) => return None,
        })
    }
}

enum ScaffoldKind {
    Sequence,
    Selector,
    Parallel {
        required_to_fail: usize,
        required_to_succeed: usize,
    },
    Inverter,
}

impl ScaffoldKind {
    fn max_children(&self) -> NumChildren {
        match self {
            ScaffoldKind::Inverter => NumChildren::Finite(1),
            _ => NumChildren::Infinite,
        }
    }
}

/// A child recorded at attach time. Leaves and spliced subtrees are
/// finished nodes as soon as they are created; composites opened inside
/// this parent are referenced by arena index until the tree is realized.
enum Child {
    Ready(Box<dyn BehaviorNode>),
    Scaffold(usize),
}

/// A composite node under construction in the builder's arena.
struct Scaffold {
    name: String,
    kind: ScaffoldKind,
    children: Vec<Child>,
}

impl Scaffold {
    fn attach(&mut self, child: Child) -> Result<(), AddChildError> {
        if NumChildren::Finite(self.children.len()) < self.kind.max_children() {
            self.children.push(child);
            Ok(())
        } else {
            Err(AddChildError::TooManyChildren)
        }
    }
}

/// Assembles a behavior tree from a flat chain of calls.
///
/// Opening a composite attaches it to the innermost open composite and
/// then makes it the current parent; every node is wired to its parent
/// the moment it is created. [`end`](Self::end) closes the innermost
/// scope, like a matching closing parenthesis, and
/// [`build`](Self::build) returns whatever scope was closed last.
///
/// Internally the builder keeps composites in an index-addressed arena
/// with a stack of the currently open ones, so the tree can stay mutable
/// while parents hold on to their children.
///
/// The builder is transient: it owns the nodes only for the duration of
/// one build session, and `build` transfers the assembled tree to the
/// caller.
#[derive(Default)]
pub struct BehaviorTreeBuilder {
    /// Arena of composite scaffolds; children reference them by index.
    arena: Vec<Scaffold>,
    /// Indices of the currently open scaffolds, innermost last.
    open: Vec<usize>,
    /// The scaffold most recently closed by `end()`.
    last_closed: Option<usize>,
}

impl BehaviorTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an action leaf to the innermost open composite.
    ///
    /// Fails with [`BuildError::UnnestedLeaf`] when no composite is open;
    /// a leaf can never be the root of a tree.
    pub fn do_action(
        mut self,
        name: impl Into<String>,
        func: impl FnMut(&TimeData) -> Status + 'static,
    ) -> Result<Self, BuildError> {
        let node = ActionNode::new(name, func);
        self.attach_to_open(Child::Ready(Box::new(node)), BuildError::UnnestedLeaf)?;
        Ok(self)
    }

    /// Like [`do_action`](Self::do_action), but the callback returns a
    /// `bool` that is mapped to Success or Failure.
    pub fn condition(
        self,
        name: impl Into<String>,
        mut pred: impl FnMut(&TimeData) -> bool + 'static,
    ) -> Result<Self, BuildError> {
        self.do_action(name, move |time| {
            if pred(time) {
                Status::Success
            } else {
                Status::Failure
            }
        })
    }

    /// Attach an already built node as a child of the innermost open
    /// composite.
    ///
    /// Fails with [`BuildError::UnnestedSplice`] when no composite is
    /// open.
    pub fn splice(mut self, subtree: Box<dyn BehaviorNode>) -> Result<Self, BuildError> {
        self.attach_to_open(Child::Ready(subtree), BuildError::UnnestedSplice)?;
        Ok(self)
    }

    /// Open a sequence node.
    pub fn sequence(self, name: impl Into<String>) -> Result<Self, BuildError> {
        self.open_composite(name.into(), ScaffoldKind::Sequence)
    }

    /// Open a selector node.
    pub fn selector(self, name: impl Into<String>) -> Result<Self, BuildError> {
        self.open_composite(name.into(), ScaffoldKind::Selector)
    }

    /// Open a parallel node with the given failure and success
    /// thresholds.
    pub fn parallel(
        self,
        name: impl Into<String>,
        required_to_fail: usize,
        required_to_succeed: usize,
    ) -> Result<Self, BuildError> {
        self.open_composite(
            name.into(),
            ScaffoldKind::Parallel {
                required_to_fail,
                required_to_succeed,
            },
        )
    }

    /// Open an inverter node. It accepts exactly one child; attaching a
    /// second one fails at the attaching call.
    pub fn inverter(self, name: impl Into<String>) -> Result<Self, BuildError> {
        self.open_composite(name.into(), ScaffoldKind::Inverter)
    }

    /// Close the innermost open composite, making it the result that
    /// [`build`](Self::build) will return.
    ///
    /// Unmatched calls are not defended against: ending with nothing open
    /// clears the pending result, which later surfaces as
    /// [`BuildError::NoNodesBuilt`].
    pub fn end(mut self) -> Self {
        self.last_closed = self.open.pop();
        self
    }

    /// Finish the session and return the most recently closed node as the
    /// root of the assembled tree.
    ///
    /// Fails with [`BuildError::NoNodesBuilt`] when no scope was ever
    /// closed. Scopes still open at this point are discarded; the tree
    /// returned is exactly the subtree closed by the last
    /// [`end`](Self::end).
    pub fn build(self) -> Result<Box<dyn BehaviorNode>, BuildError> {
        let root = match self.last_closed {
            Some(index) => index,
            None => return Err(BuildError::NoNodesBuilt),
        };
        let mut slots: Vec<Option<Scaffold>> = self.arena.into_iter().map(Some).collect();
        realize(&mut slots, root)
    }

    fn open_composite(mut self, name: String, kind: ScaffoldKind) -> Result<Self, BuildError> {
        let index = self.arena.len();
        self.arena.push(Scaffold {
            name,
            kind,
            children: vec![],
        });
        if let Some(parent) = self.open.last().copied() {
            self.attach(parent, Child::Scaffold(index))?;
        }
        self.open.push(index);
        Ok(self)
    }

    fn attach_to_open(&mut self, child: Child, unnested: BuildError) -> Result<(), BuildError> {
        let parent = match self.open.last().copied() {
            Some(parent) => parent,
            None => return Err(unnested),
        };
        self.attach(parent, child)
    }

    fn attach(&mut self, parent: usize, child: Child) -> Result<(), BuildError> {
        let scaffold = &mut self.arena[parent];
        scaffold
            .attach(child)
            .map_err(|e| BuildError::AddChild(e, scaffold.name.clone()))
    }
}

/// Recursively turn a scaffold and its attached children into concrete
/// nodes, preserving attach order.
fn realize(
    slots: &mut [Option<Scaffold>],
    index: usize,
) -> Result<Box<dyn BehaviorNode>, BuildError> {
    // Every scaffold is attached to at most one parent, so each index is
    // realized at most once.
    let scaffold = slots[index]
        .take()
        .expect("realized scaffolds are never revisited");
    let Scaffold {
        name,
        kind,
        children,
    } = scaffold;

    match kind {
        ScaffoldKind::Sequence => {
            let mut node = SequenceNode::new(name.clone());
            for child in children {
                let child = realize_child(slots, child)?;
                node.add_child(child)
                    .map_err(|e| BuildError::AddChild(e, name.clone()))?;
            }
            Ok(Box::new(node))
        }
        ScaffoldKind::Selector => {
            let mut node = SelectorNode::new(name.clone());
            for child in children {
                let child = realize_child(slots, child)?;
                node.add_child(child)
                    .map_err(|e| BuildError::AddChild(e, name.clone()))?;
            }
            Ok(Box::new(node))
        }
        ScaffoldKind::Parallel {
            required_to_fail,
            required_to_succeed,
        } => {
            let mut node = ParallelNode::new(name.clone(), required_to_fail, required_to_succeed);
            for child in children {
                let child = realize_child(slots, child)?;
                node.add_child(child)
                    .map_err(|e| BuildError::AddChild(e, name.clone()))?;
            }
            Ok(Box::new(node))
        }
        ScaffoldKind::Inverter => {
            let mut node = InverterNode::new(name.clone());
            for child in children {
                let child = realize_child(slots, child)?;
                node.add_child(child)
                    .map_err(|e| BuildError::AddChild(e, name.clone()))?;
            }
            Ok(Box::new(node))
        }
    }
}

fn realize_child(
    slots: &mut [Option<Scaffold>],
    child: Child,
) -> Result<Box<dyn BehaviorNode>, BuildError> {
    match child {
        Child::Ready(node) => Ok(node),
        Child::Scaffold(index) => realize(slots, index),
    }
}

#[cfg(test)]
mod test;
