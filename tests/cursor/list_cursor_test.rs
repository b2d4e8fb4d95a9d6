/*!
 * Container Cursor Tests
 */

use pretty_assertions::assert_eq;
use sync_lists::{ErrorKind, RawCursor, RawSource, SyncList, SyncReadOnlyList};

#[test]
fn test_list_cursor_yields_elements() {
    let list = SyncList::from(vec![1, 2, 3]);
    let mut cursor = list.cursor();

    let mut seen = Vec::new();
    while cursor.move_next() {
        seen.push(cursor.current().unwrap());
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(
        cursor.current().unwrap_err().kind(),
        ErrorKind::InvalidOperation
    );
}

#[test]
fn test_raw_cursor_yields_same_elements() {
    let list = SyncList::from(vec!["x".to_string(), "y".to_string()]);
    let mut raw = list.raw_cursor();

    assert_eq!(raw.len(), 2);
    let mut seen = Vec::new();
    while raw.move_next() {
        let value = raw.current().unwrap().unwrap();
        seen.push(value.downcast::<String>().unwrap().clone());
    }
    assert_eq!(seen, vec!["x", "y"]);
}

#[test]
fn test_cursor_is_a_snapshot() {
    let list = SyncList::from(vec![1, 2]);
    let mut cursor = list.cursor();

    list.add(3).unwrap();
    list.set(0, 10).unwrap();

    let seen: Vec<i32> = cursor.by_ref().map(Result::unwrap).collect();
    assert_eq!(seen, vec![1, 2]);

    // A fresh cursor observes the mutations
    let fresh: Vec<i32> = list.cursor().map(Result::unwrap).collect();
    assert_eq!(fresh, vec![10, 2, 3]);
}

#[test]
fn test_raw_source_on_container() {
    let list: SyncReadOnlyList<u16> = SyncReadOnlyList::from_items([4, 5]);
    let values: Vec<u16> = list.typed_cursor::<u16>().map(Result::unwrap).collect();
    assert_eq!(values, vec![4, 5]);

    let mut wrong = list.typed_cursor::<u32>();
    assert!(wrong.move_next());
    assert_eq!(wrong.current().unwrap_err().kind(), ErrorKind::InvalidCast);
}

#[test]
fn test_borrowed_iteration() {
    let list = SyncList::from(vec![2, 4, 6]);
    let doubled: Vec<i32> = (&list).into_iter().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![4, 8, 12]);
}
