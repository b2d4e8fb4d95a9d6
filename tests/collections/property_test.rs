/*!
 * Property Tests
 *
 * Random operation sequences applied to a list and to a plain `Vec` model
 */

use proptest::prelude::*;
use sync_lists::{ErrorKind, ListError, NonNullSyncList, SyncList, SyncReadOnlyList};

#[derive(Debug, Clone)]
enum Op {
    Add(i16),
    Insert(usize, i16),
    Set(usize, i16),
    RemoveAt(usize),
    Remove(i16),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Add),
        2 => (0..12usize, any::<i16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0..12usize, any::<i16>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0..12usize).prop_map(Op::RemoveAt),
        2 => (-4i16..4).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Apply `op` to the model, returning the kind of error the list should report
fn apply_model(model: &mut Vec<i16>, op: &Op) -> Option<ErrorKind> {
    match *op {
        Op::Add(v) => model.push(v),
        Op::Insert(i, v) if i <= model.len() => model.insert(i, v),
        Op::Set(i, v) if i < model.len() => model[i] = v,
        Op::RemoveAt(i) if i < model.len() => {
            model.remove(i);
        }
        Op::Remove(v) => {
            if let Some(i) = model.iter().position(|item| *item == v) {
                model.remove(i);
            }
        }
        Op::Clear => model.clear(),
        Op::Insert(..) | Op::Set(..) | Op::RemoveAt(_) => {
            return Some(ErrorKind::ArgumentOutOfRange)
        }
    }
    None
}

fn apply_list(list: &SyncList<i16>, op: &Op) -> Result<(), ListError> {
    match *op {
        Op::Add(v) => list.add(v).map(drop),
        Op::Insert(i, v) => list.insert(i, v),
        Op::Set(i, v) => list.set(i, v),
        Op::RemoveAt(i) => list.remove_at(i).map(drop),
        Op::Remove(v) => list.remove(&v).map(drop),
        Op::Clear => list.clear(),
    }
}

proptest! {
    #[test]
    fn prop_list_matches_vec_model(
        initial in prop::collection::vec(any::<i16>(), 0..8),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let list = SyncList::from_vec(initial.clone()).unwrap();
        let mut model = initial;

        for op in &ops {
            let expected = apply_model(&mut model, op);
            let actual = apply_list(&list, op).err().map(|err| err.kind());
            prop_assert_eq!(actual, expected, "op {:?}", op);
            prop_assert_eq!(list.snapshot(), model.clone());
        }

        prop_assert_eq!(list.len(), model.len());
        for (index, value) in model.iter().enumerate() {
            prop_assert_eq!(list.index_of(value), model.iter().position(|v| v == value));
            prop_assert_eq!(list.get(index).unwrap(), *value);
        }
    }

    #[test]
    fn prop_read_only_rejects_everything(
        initial in prop::collection::vec(any::<i16>(), 0..8),
        ops in prop::collection::vec(op_strategy(), 1..20),
    ) {
        let list = SyncReadOnlyList::from_items(initial.clone());

        for op in &ops {
            let result = match *op {
                Op::Add(v) => list.add(v).map(drop),
                Op::Insert(i, v) => list.insert(i, v),
                Op::Set(i, v) => list.set(i, v),
                Op::RemoveAt(i) => list.remove_at(i).map(drop),
                Op::Remove(v) => list.remove(&v).map(drop),
                Op::Clear => list.clear(),
            };
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::NotSupported);
        }
        prop_assert_eq!(list.snapshot(), initial);
    }

    #[test]
    fn prop_null_source_reports_first_null(
        values in prop::collection::vec(prop::option::of(any::<u8>()), 0..16),
    ) {
        let first_null = values.iter().position(Option::is_none);
        let len = values.len();

        match (NonNullSyncList::from_vec(values), first_null) {
            (Ok(list), None) => prop_assert_eq!(list.len(), len),
            (Err(err), Some(index)) => {
                prop_assert_eq!(err, ListError::out_of_range("source", index, len));
            }
            (Ok(_), Some(index)) => {
                prop_assert!(false, "null at {} was accepted", index);
            }
            (Err(err), None) => {
                prop_assert!(false, "non-null source rejected: {}", err);
            }
        }
    }
}
