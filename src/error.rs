use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
#[non_exhaustive]
pub enum AddChildError {
    TooManyChildren,
}

impl Display for AddChildError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::TooManyChildren => write!(fmt, "Attempted to add more than a single child"),
        }
    }
}

impl std::error::Error for AddChildError {}

pub type AddChildResult = Result<(), AddChildError>;

#[derive(Debug)]
#[non_exhaustive]
pub enum TickError {
    ChildMissing,
}

impl Display for TickError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::ChildMissing => write!(fmt, "An inverter node must have a child to tick"),
        }
    }
}

impl std::error::Error for TickError {}

#[derive(Debug)]
#[non_exhaustive]
pub enum BuildError {
    UnnestedLeaf,
    UnnestedSplice,
    NoNodesBuilt,
    AddChild(AddChildError, String),
}

impl Display for BuildError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::UnnestedLeaf => {
                write!(fmt, "An action node cannot be the root, it needs a parent")
            }
            Self::UnnestedSplice => {
                write!(fmt, "Cannot splice a subtree without a parent to receive it")
            }
            Self::NoNodesBuilt => write!(fmt, "Cannot build a behavior tree with zero nodes"),
            Self::AddChild(e, node) => {
                e.fmt(fmt)?;
                write!(fmt, " to {}", node)
            }
        }
    }
}

impl std::error::Error for BuildError {}
