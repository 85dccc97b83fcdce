use behavior_tree_fluent::{BehaviorNode, BehaviorTreeBuilder, Status, TimeData};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct Guard {
    position: f64,
    goal: f64,
    alerted: bool,
}

fn main() -> anyhow::Result<()> {
    let guard = Rc::new(RefCell::new(Guard {
        position: 0.,
        goal: 10.,
        alerted: false,
    }));

    let watcher = guard.clone();
    let walker = guard.clone();

    let mut tree = BehaviorTreeBuilder::new()
        .selector("patrol")?
        .sequence("respond to noise")?
        .condition("heard something", move |_| watcher.borrow().alerted)?
        .do_action("shout", |_| {
            println!("Who goes there?!");
            Status::Success
        })?
        .end()
        .do_action("walk the wall", move |time| {
            let mut guard = walker.borrow_mut();
            guard.position += 2. * time.delta_time;
            println!("walking... now at {:.1}", guard.position);
            if guard.position < guard.goal {
                Status::Running
            } else {
                Status::Success
            }
        })?
        .end()
        .build()?;

    // Tick at a fixed half-second step until the round is over.
    let frame = TimeData::new(0.5);
    loop {
        match tree.tick(&frame)? {
            Status::Running => (),
            status => {
                println!("patrol finished: {:?}", status);
                break;
            }
        }
    }

    Ok(())
}
