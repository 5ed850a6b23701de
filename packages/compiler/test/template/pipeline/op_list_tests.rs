use proptest::prelude::*;

use template_compiler::template::pipeline::ir::OpList;

#[test]
fn preserves_push_order() {
    let mut list = OpList::new();
    list.push(1);
    list.push(2);
    list.push(3);
    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(list.into_vec(), vec![1, 2, 3]);
}

#[test]
fn head_of_empty_list_is_none() {
    let list: OpList<i32> = OpList::new();
    assert!(list.head().is_none());
    assert!(list.is_empty());
}

#[test]
fn removing_the_current_op_does_not_skip_its_successor() {
    let mut list = OpList::new();
    list.push(1);
    list.push(2);
    list.push(3);

    let mut visited = Vec::new();
    let mut pos = list.head();
    while let Some(p) = pos {
        let value = *list.get(p);
        visited.push(value);
        if value == 2 {
            list.remove(p);
        }
        pos = list.next_after(p);
    }

    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn removing_the_first_op_moves_the_head() {
    let mut list = OpList::new();
    let a = list.push(1);
    list.push(2);
    list.remove(a);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2]);
    assert_eq!(*list.get(list.head().unwrap()), 2);
}

#[test]
fn removing_the_last_op_moves_the_tail() {
    let mut list = OpList::new();
    list.push(1);
    let b = list.push(2);
    list.remove(b);
    list.push(3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn resume_skips_ops_removed_after_the_cursor_position() {
    let mut list = OpList::new();
    let a = list.push(1);
    let b = list.push(2);
    list.push(3);

    list.remove(a);
    list.remove(b);

    let next = list.next_after(a).unwrap();
    assert_eq!(*list.get(next), 3);
}

#[test]
fn replacing_keeps_the_position_and_the_walk_continues_behind_it() {
    let mut list = OpList::new();
    list.push(1);
    let b = list.push(2);
    list.push(3);

    let mut visited = Vec::new();
    let mut pos = list.head();
    while let Some(p) = pos {
        visited.push(*list.get(p));
        if p == b {
            list.replace(p, 20);
        }
        pos = list.next_after(p);
    }

    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(*list.get(b), 20);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 20, 3]);
}

#[test]
fn ops_inserted_before_the_current_op_are_not_revisited() {
    let mut list = OpList::new();
    list.push(1);
    list.push(2);

    let mut visited = Vec::new();
    let mut pos = list.head();
    while let Some(p) = pos {
        let value = *list.get(p);
        visited.push(value);
        if value == 2 {
            list.insert_before(p, 10);
            list.insert_before(p, 11);
        }
        pos = list.next_after(p);
    }

    assert_eq!(visited, vec![1, 2]);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 10, 11, 2]);
}

// The splice pattern used when one op is lowered into a sequence: insert the
// replacements in front of the original, then delete the original.
#[test]
fn insert_before_then_remove_splices_a_sequence_in_place() {
    let mut list = OpList::new();
    list.push(1);
    let b = list.push(2);
    list.push(3);

    let mut pos = list.head();
    while let Some(p) = pos {
        if p == b {
            list.insert_before(p, 20);
            list.insert_before(p, 21);
            list.remove(p);
        }
        pos = list.next_after(p);
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 20, 21, 3]);
}

#[derive(Debug, Clone)]
enum Action {
    Keep,
    Remove,
    Replace(i32),
    InsertBefore(i32),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Keep),
        Just(Action::Remove),
        (1000..2000i32).prop_map(Action::Replace),
        (2000..3000i32).prop_map(Action::InsertBefore),
    ]
}

proptest! {
    // A walk that edits at the cursor visits every original op exactly once, in
    // order, and leaves the list exactly as the edits describe.
    #[test]
    fn walks_are_stable_under_arbitrary_edits(actions in prop::collection::vec(action(), 0..32)) {
        let mut list = OpList::new();
        for i in 0..actions.len() {
            list.push(i as i32);
        }

        let mut visited = Vec::new();
        let mut pos = list.head();
        while let Some(p) = pos {
            let value = *list.get(p);
            visited.push(value);
            match &actions[value as usize] {
                Action::Keep => {}
                Action::Remove => list.remove(p),
                Action::Replace(x) => list.replace(p, *x),
                Action::InsertBefore(x) => {
                    list.insert_before(p, *x);
                }
            }
            pos = list.next_after(p);
        }

        let expected_visits: Vec<i32> = (0..actions.len() as i32).collect();
        prop_assert_eq!(visited, expected_visits);

        let mut expected: Vec<i32> = Vec::new();
        for (i, action) in actions.iter().enumerate() {
            match action {
                Action::Keep => expected.push(i as i32),
                Action::Remove => {}
                Action::Replace(x) => expected.push(*x),
                Action::InsertBefore(x) => {
                    expected.push(*x);
                    expected.push(i as i32);
                }
            }
        }
        prop_assert_eq!(list.len(), expected.len());
        let actual: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }
}
