use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// A recording action callback, so tests can observe which leaves were
/// invoked and in what order.
fn append(
    log: &Rc<RefCell<Vec<&'static str>>>,
    label: &'static str,
    result: Status,
) -> impl FnMut(&TimeData) -> Status + 'static {
    let log = log.clone();
    move |_| {
        log.borrow_mut().push(label);
        result
    }
}

#[test]
fn test_nested_structure() {
    let log = Rc::new(RefCell::new(vec![]));

    let mut tree = BehaviorTreeBuilder::new()
        .sequence("root")
        .unwrap()
        .do_action("first", append(&log, "first", Status::Success))
        .unwrap()
        .selector("choice")
        .unwrap()
        .do_action("skip", append(&log, "skip", Status::Failure))
        .unwrap()
        .do_action("pick", append(&log, "pick", Status::Success))
        .unwrap()
        .end()
        .do_action("last", append(&log, "last", Status::Success))
        .unwrap()
        .end()
        .build()
        .unwrap();

    assert_eq!(tree.tick(&TimeData::default()).unwrap(), Status::Success);

    // The selector sits between the two leaves of the root sequence,
    // where it was opened.
    assert_eq!(*log.borrow(), vec!["first", "skip", "pick", "last"]);
}

#[test]
fn test_unnested_leaf() {
    let result = BehaviorTreeBuilder::new().do_action("orphan", |_| Status::Success);
    assert!(matches!(result, Err(BuildError::UnnestedLeaf)));
}

#[test]
fn test_unnested_splice() {
    let sub = BehaviorTreeBuilder::new()
        .sequence("sub")
        .unwrap()
        .do_action("noop", |_| Status::Success)
        .unwrap()
        .end()
        .build()
        .unwrap();

    let result = BehaviorTreeBuilder::new().splice(sub);
    assert!(matches!(result, Err(BuildError::UnnestedSplice)));
}

#[test]
fn test_build_nothing() {
    assert!(matches!(
        BehaviorTreeBuilder::new().build(),
        Err(BuildError::NoNodesBuilt)
    ));
}

#[test]
fn test_build_without_end() {
    let result = BehaviorTreeBuilder::new()
        .sequence("root")
        .unwrap()
        .do_action("leaf", |_| Status::Success)
        .unwrap()
        .build();
    assert!(matches!(result, Err(BuildError::NoNodesBuilt)));
}

#[test]
fn test_extra_end_clears_result() {
    let result = BehaviorTreeBuilder::new()
        .sequence("root")
        .unwrap()
        .end()
        .end()
        .build();
    assert!(matches!(result, Err(BuildError::NoNodesBuilt)));
}

#[test]
fn test_condition() {
    let mut holds = BehaviorTreeBuilder::new()
        .sequence("root")
        .unwrap()
        .condition("pred", |_| true)
        .unwrap()
        .end()
        .build()
        .unwrap();
    assert_eq!(holds.tick(&TimeData::default()).unwrap(), Status::Success);

    let mut fails = BehaviorTreeBuilder::new()
        .sequence("root")
        .unwrap()
        .condition("pred", |_| false)
        .unwrap()
        .end()
        .build()
        .unwrap();
    assert_eq!(fails.tick(&TimeData::default()).unwrap(), Status::Failure);
}

#[test]
fn test_splice_subtree() {
    let log = Rc::new(RefCell::new(vec![]));

    let sub = BehaviorTreeBuilder::new()
        .sequence("sub")
        .unwrap()
        .do_action("inner", append(&log, "inner", Status::Success))
        .unwrap()
        .end()
        .build()
        .unwrap();

    let mut tree = BehaviorTreeBuilder::new()
        .sequence("main")
        .unwrap()
        .do_action("before", append(&log, "before", Status::Success))
        .unwrap()
        .splice(sub)
        .unwrap()
        .do_action("after", append(&log, "after", Status::Success))
        .unwrap()
        .end()
        .build()
        .unwrap();

    assert_eq!(tree.tick(&TimeData::default()).unwrap(), Status::Success);
    assert_eq!(*log.borrow(), vec!["before", "inner", "after"]);
}

#[test]
fn test_inverter_second_leaf() {
    let result = BehaviorTreeBuilder::new()
        .inverter("inv")
        .unwrap()
        .do_action("first", |_| Status::Success)
        .unwrap()
        .do_action("second", |_| Status::Success);

    match result {
        Err(BuildError::AddChild(AddChildError::TooManyChildren, name)) => {
            assert_eq!(name, "inv")
        }
        _ => panic!("expected the second leaf to be rejected"),
    }
}

#[test]
fn test_inverter_second_composite() {
    let result = BehaviorTreeBuilder::new()
        .inverter("inv")
        .unwrap()
        .sequence("first")
        .unwrap()
        .end()
        .sequence("second");

    assert!(matches!(
        result,
        Err(BuildError::AddChild(AddChildError::TooManyChildren, _))
    ));
}

#[test]
fn test_double_inverter() {
    let mut tree = BehaviorTreeBuilder::new()
        .inverter("outer")
        .unwrap()
        .inverter("inner")
        .unwrap()
        .do_action("yes", |_| Status::Success)
        .unwrap()
        .end()
        .end()
        .build()
        .unwrap();

    assert_eq!(tree.tick(&TimeData::default()).unwrap(), Status::Success);
}

#[test]
fn test_build_with_open_scopes() {
    let log = Rc::new(RefCell::new(vec![]));

    // "outer" is never closed, so building yields the subtree that was
    // closed last, which is "inner".
    let mut tree = BehaviorTreeBuilder::new()
        .selector("outer")
        .unwrap()
        .do_action("stray", append(&log, "stray", Status::Success))
        .unwrap()
        .sequence("inner")
        .unwrap()
        .do_action("kept", append(&log, "kept", Status::Success))
        .unwrap()
        .end()
        .build()
        .unwrap();

    assert_eq!(tree.tick(&TimeData::default()).unwrap(), Status::Success);
    assert_eq!(*log.borrow(), vec!["kept"]);
}

#[test]
fn test_parallel_through_builder() {
    let log = Rc::new(RefCell::new(vec![]));

    let mut tree = BehaviorTreeBuilder::new()
        .parallel("par", 2, 2)
        .unwrap()
        .do_action("wins", append(&log, "wins", Status::Success))
        .unwrap()
        .do_action("loses", append(&log, "loses", Status::Failure))
        .unwrap()
        .end()
        .build()
        .unwrap();

    // Neither threshold is reached, but both children ran.
    assert_eq!(tree.tick(&TimeData::default()).unwrap(), Status::Running);
    assert_eq!(*log.borrow(), vec!["wins", "loses"]);
}
