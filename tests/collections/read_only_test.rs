/*!
 * Synchronized Read-Only List Tests
 */

use std::cell::Cell;
use std::sync::Arc;
use sync_lists::{
    DefaultItem, ErrorKind, ItemFactory, ListConfig, ListError, ListResult, SyncReadOnlyList,
};

thread_local! {
    static NEXT_ID: Cell<usize> = const { Cell::new(0) };
}

/// Element whose default construction hands out sequential ids per thread
#[derive(Debug, PartialEq)]
struct Sequential {
    id: usize,
}

impl Default for Sequential {
    fn default() -> Self {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Self { id }
    }
}

/// Element with no zero-argument construction
#[derive(Debug, PartialEq)]
struct Tagged {
    id: u32,
}

impl Tagged {
    fn new(id: u32) -> Arc<Self> {
        Arc::new(Self { id })
    }
}

/// Factory wrapping the element's own constructor
struct SharedSequential;

impl ItemFactory<Arc<Sequential>> for SharedSequential {
    fn create_new_item(&mut self, _index: usize) -> ListResult<Arc<Sequential>> {
        Ok(Arc::new(Sequential::default()))
    }
}

fn assert_unchanged(list: &SyncReadOnlyList<Arc<Sequential>>, originals: &[Arc<Sequential>]) {
    assert_eq!(list.len(), originals.len());
    for (index, original) in originals.iter().enumerate() {
        assert!(Arc::ptr_eq(&list.get(index).unwrap(), original));
    }
}

#[test]
fn test_constructor_with_len() {
    NEXT_ID.with(|next| next.set(0));
    let list: SyncReadOnlyList<Sequential> = SyncReadOnlyList::with_len(7);

    assert_eq!(list.len(), 7);
    list.with_slice(|items| {
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.id, index);
        }
    });
}

#[test]
fn test_constructor_with_items() {
    let list = SyncReadOnlyList::from_items([Tagged::new(1), Tagged::new(1), Tagged::new(3)]);

    assert_eq!(list.len(), 3);
    let items = list.snapshot();
    assert_eq!(items[0].id, 1);
    assert_eq!(items[1].id, 1);
    assert!(!Arc::ptr_eq(&items[0], &items[1]));
    assert_eq!(items[2].id, 3);
}

#[test]
fn test_constructor_without_constructor() {
    let err = SyncReadOnlyList::<Arc<Tagged>>::with_optional_factory(
        3,
        None::<fn(usize) -> ListResult<Arc<Tagged>>>,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingConstructor);

    let list = SyncReadOnlyList::with_optional_factory(
        2,
        Some(|index: usize| -> ListResult<Arc<Tagged>> { Ok(Tagged::new(index as u32)) }),
    )
    .unwrap();
    assert_eq!(list.get(1).unwrap().id, 1);
}

#[test]
fn test_factory_and_config() {
    let config = ListConfig::default().with_label("fixtures");
    let list: SyncReadOnlyList<u8> =
        SyncReadOnlyList::with_factory_and_config(3, DefaultItem, config).unwrap();
    assert_eq!(list.snapshot(), vec![0, 0, 0]);
    assert_eq!(list.config().label.as_deref(), Some("fixtures"));
}

#[test]
fn test_mutations_not_supported() {
    NEXT_ID.with(|next| next.set(0));
    let list: SyncReadOnlyList<Arc<Sequential>> =
        SyncReadOnlyList::with_factory(7, SharedSequential).unwrap();
    let originals = list.snapshot();
    assert_eq!(originals.last().unwrap().id, 6);

    let extra = || Arc::new(Sequential::default());

    assert_eq!(list.add(extra()).unwrap_err(), ListError::not_supported("add"));
    assert_unchanged(&list, &originals);

    assert_eq!(list.clear().unwrap_err().kind(), ErrorKind::NotSupported);
    assert_unchanged(&list, &originals);

    assert_eq!(list.insert(1, extra()).unwrap_err().kind(), ErrorKind::NotSupported);
    assert_unchanged(&list, &originals);

    let second = list.get(1).unwrap();
    assert_eq!(list.remove(&second).unwrap_err().kind(), ErrorKind::NotSupported);
    assert_unchanged(&list, &originals);

    assert_eq!(list.remove_at(1).unwrap_err().kind(), ErrorKind::NotSupported);
    assert_unchanged(&list, &originals);

    assert_eq!(list.set(1, extra()).unwrap_err().kind(), ErrorKind::NotSupported);
    assert_unchanged(&list, &originals);

    assert_eq!(
        list.add_dyn(Box::new(extra())).unwrap_err().kind(),
        ErrorKind::NotSupported
    );
    assert_unchanged(&list, &originals);
}

#[test]
fn test_mutations_rejected_before_type_check() {
    let list: SyncReadOnlyList<u8> = SyncReadOnlyList::with_len(1);
    let err = list.set_dyn(0, Box::new("not a u8")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotSupported);
}

#[test]
fn test_rejected_write_does_not_take_guard() {
    let list: SyncReadOnlyList<u8> = SyncReadOnlyList::with_len(2);
    let _held = list.sync_root().lock();

    std::thread::scope(|scope| {
        let result = scope.spawn(|| list.add(1)).join().unwrap();
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotSupported);
    });
}

#[test]
fn test_flags() {
    let list: SyncReadOnlyList<u8> = SyncReadOnlyList::with_len(0);
    assert!(list.is_read_only());
    assert!(list.is_fixed_size());
    assert!(list.is_synchronized());
    assert_eq!(list.policy_name(), "read_only");
}
