//! Document lifecycle and dirty-state integration tests

use std::cell::RefCell;
use std::rc::Rc;

use panedeck_core::{
    CallbackHostNotifier, DocumentFactory, Orientation, PaneId, PaneTree,
};

use crate::common::{ScriptedDoc, ScriptedFactory};

/// The dirty marker follows the document as it moves between panes:
/// resolution happens at notification time, not at subscription time.
#[test]
fn dirty_marker_follows_moved_document() {
    let (buffer, dirty) = ScriptedDoc::with_shared_dirty("a.rs");
    let mut tree = PaneTree::new();
    let id = tree.open_document(Box::new(buffer), None);
    tree.open_document(Box::new(ScriptedDoc::new("b.rs")), None);
    let src = tree.active_pane();
    let dst = tree.split_active_pane(Orientation::Column).unwrap();

    // Move a.rs to the right pane, then the edit notification arrives.
    tree.move_document(src, 0, dst);
    dirty.set(true);
    tree.document_modified_changed(id);

    let labels = tree.tab_labels(dst).unwrap();
    assert!(labels.contains(&"a.rs *".to_owned()), "labels: {labels:?}");
    // The old owner has no marked a.rs.
    let src_labels = tree.tab_labels(src).unwrap();
    assert!(!src_labels.iter().any(|l| l.starts_with("a.rs")));
}

/// Saving the active document strips its marker; a failing save leaves
/// everything untouched.
#[test]
fn save_active_and_failure_paths() {
    let mut tree = PaneTree::new();
    tree.open_document(Box::new(ScriptedDoc::dirty("ok.rs")), None);
    let pane = tree.active_pane();
    assert_eq!(tree.tab_labels(pane).unwrap(), vec!["ok.rs *"]);

    assert!(tree.save_active());
    assert_eq!(tree.tab_labels(pane).unwrap(), vec!["ok.rs"]);

    tree.open_document(Box::new(ScriptedDoc::failing_save("bad.rs")), None);
    assert!(!tree.save_active());
    assert_eq!(
        tree.tab_labels(pane).unwrap(),
        vec!["ok.rs".to_owned(), "bad.rs *".to_owned()]
    );
}

/// `save_all` visits every pane and reports how many documents it saved.
#[test]
fn save_all_across_panes() {
    let mut factory = ScriptedFactory::new();
    let mut tree = PaneTree::new();
    tree.open_document(Box::new(ScriptedDoc::dirty("a.rs")), None);
    let right = tree.split_active_pane(Orientation::Row).unwrap();
    tree.open_document(Box::new(ScriptedDoc::dirty("c.rs")), Some(right));
    tree.open_document(factory.create("clean.rs"), Some(right));

    assert_eq!(tree.save_all(), 2);
    for pane in tree.pane_ids() {
        for label in tree.tab_labels(pane).unwrap() {
            assert!(!label.ends_with(" *"));
        }
    }
}

/// Host notifications arrive after the tree is consistent: the pane count
/// reported can be immediately verified by querying back.
#[test]
fn notifications_observe_consistent_tree() {
    let log: Rc<RefCell<Vec<(String, usize)>>> = Rc::default();
    let (active_log, count_log) = (Rc::clone(&log), Rc::clone(&log));
    let mut tree = PaneTree::with_notifier(Box::new(CallbackHostNotifier::new(
        move |_pane: PaneId| active_log.borrow_mut().push(("active".into(), 0)),
        move |count| count_log.borrow_mut().push(("count".into(), count)),
    )));

    // Opening into the already-active pane publishes nothing; the split
    // publishes the count change before the active change.
    tree.open_document(Box::new(ScriptedDoc::new("a.rs")), None);
    tree.split_active_pane(Orientation::Column);
    let events = log.borrow().clone();
    assert_eq!(
        events
            .iter()
            .map(|(kind, _)| kind.as_str())
            .collect::<Vec<_>>(),
        vec!["count", "active"]
    );
    let counts: Vec<usize> = events
        .iter()
        .filter(|(kind, _)| kind == "count")
        .map(|&(_, c)| c)
        .collect();
    assert_eq!(counts, vec![2]);
    assert_eq!(tree.pane_count(), 2);
}

/// Closing panes one by one always leaves a valid tree, ending with a
/// single empty pane.
#[test]
fn close_everything_leaves_single_empty_pane() {
    let mut factory = ScriptedFactory::new();
    let mut tree = PaneTree::new();
    for path in ["a.rs", "b.rs", "c.rs"] {
        tree.open_document(factory.create(path), None);
    }
    tree.split_active_pane(Orientation::Column);
    tree.split_active_pane(Orientation::Row);
    assert_eq!(tree.pane_count(), 3);

    // Close every document everywhere.
    loop {
        let Some(pane) = tree
            .pane_ids()
            .into_iter()
            .find(|&p| !tree.tab_labels(p).unwrap().is_empty())
        else {
            break;
        };
        assert!(tree.close_document(pane, 0));
    }

    assert_eq!(tree.pane_count(), 1);
    assert_eq!(tree.document_count(), 0);
    assert!(tree.root().is_leaf());
    let pane = tree.active_pane();
    assert_eq!(tree.pane_number(pane), Some(1));
}

/// A duplicate created by splitting starts clean even when its source was
/// dirty, and saves independently.
#[test]
fn split_duplicate_is_independent() {
    let mut tree = PaneTree::new();
    tree.open_document(Box::new(ScriptedDoc::dirty("a.rs")), None);
    let left = tree.active_pane();
    let right = tree.split_active_pane(Orientation::Column).unwrap();

    assert_eq!(tree.tab_labels(left).unwrap(), vec!["a.rs *"]);
    assert_eq!(tree.tab_labels(right).unwrap(), vec!["a.rs"]);

    // Saving the left original does not touch the duplicate.
    tree.set_active(left).unwrap();
    assert!(tree.save_active());
    assert_eq!(tree.tab_labels(left).unwrap(), vec!["a.rs"]);
    assert_eq!(tree.tab_labels(right).unwrap(), vec!["a.rs"]);
}
