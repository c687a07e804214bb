//! Blob round-trip tests: drive the plan through the public ops API, save
//! it, reload it, and assert the reloaded plan is indistinguishable.

use planner::io::store::Store;
use planner::model::plan::Plan;
use planner::model::task::{DAYS_TOTAL, TaskColor};
use planner::ops::plan_ops;
use pretty_assertions::assert_eq;

fn store_in(dir: &tempfile::TempDir) -> Store {
    Store::new(dir.path().join("tasks.json"))
}

#[test]
fn edited_plan_survives_a_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut plan = Plan::default();
    plan_ops::add_task(&mut plan, "Design", TaskColor::Blue);
    plan_ops::add_task(&mut plan, "Build", TaskColor::Orange);
    plan_ops::add_task(&mut plan, "Ship", TaskColor::Green);

    // Reshape the middle task the way a drag would
    plan_ops::set_start(&mut plan, 1, 12);
    plan_ops::set_duration(&mut plan, 1, 30);
    plan_ops::rename_task(&mut plan, 1, "Build it all");
    plan_ops::remove_task(&mut plan, 2);

    store.save(plan.tasks()).unwrap();
    let reloaded = store.load();

    assert_eq!(reloaded, plan.tasks());
    assert_eq!(reloaded[1].name, "Build it all");
    assert_eq!(reloaded[1].start, 12);
    assert_eq!(reloaded[1].duration, 30);
}

#[test]
fn save_is_a_full_rewrite_not_a_merge() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut plan = Plan::default();
    plan_ops::add_task(&mut plan, "one", TaskColor::Green);
    plan_ops::add_task(&mut plan, "two", TaskColor::Green);
    store.save(plan.tasks()).unwrap();

    plan_ops::remove_task(&mut plan, 0);
    store.save(plan.tasks()).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].name, "two");
}

#[test]
fn clamped_values_stay_in_range_across_reloads() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut plan = Plan::default();
    plan_ops::add_task(&mut plan, "edge", TaskColor::Red);
    plan_ops::set_duration(&mut plan, 0, DAYS_TOTAL * 2);
    plan_ops::set_start(&mut plan, 0, DAYS_TOTAL * 2);
    store.save(plan.tasks()).unwrap();

    let reloaded = store.load();
    assert!(reloaded[0].duration >= 1);
    assert!(reloaded[0].start + reloaded[0].duration <= DAYS_TOTAL);
    assert_eq!(reloaded, plan.tasks());
}
