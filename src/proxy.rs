//! Lazily materialized list of domain objects.
//!
//! Large collection endpoints (`/v2/cosmetics`, `/v2/shop`, map POIs) return
//! thousands of objects. [`TransformerList`] keeps the raw JSON and builds each
//! typed element the first time it is touched, exactly once.
//!
//! The list is `Send` but not `Sync`: materializing writes into the backing
//! store through a shared reference, so concurrent readers need a lock.

use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use serde_json::Value;

use crate::error::ApiResult;

type Transform<T> = Arc<dyn Fn(&Value) -> ApiResult<T> + Send + Sync>;

struct Slot<T> {
    raw: Value,
    value: OnceCell<T>,
}

/// A sequence of `T` backed by raw JSON values, materialized on access.
pub struct TransformerList<T> {
    slots: Vec<Slot<T>>,
    transform: Transform<T>,
}

impl<T> TransformerList<T> {
    /// Build from raw values and the function turning one into a `T`.
    pub fn new<I, F>(raw: I, transform: F) -> Self
    where
        I: IntoIterator<Item = Value>,
        F: Fn(&Value) -> ApiResult<T> + Send + Sync + 'static,
    {
        Self {
            slots: raw
                .into_iter()
                .map(|raw| Slot {
                    raw,
                    value: OnceCell::new(),
                })
                .collect(),
            transform: Arc::new(transform),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of elements built so far.
    pub fn materialized_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.value.get().is_some()).count()
    }

    /// Element at `index`, building it on first access.
    ///
    /// `None` when out of bounds; `Some(Err(_))` when the raw element is malformed.
    pub fn get(&self, index: usize) -> Option<ApiResult<&T>> {
        self.slots.get(index).map(|slot| self.materialize(slot))
    }

    pub fn first(&self) -> Option<ApiResult<&T>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<ApiResult<&T>> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Elements in `range`, building only those. `None` when out of bounds.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Option<ApiResult<Vec<&T>>> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1)?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len(),
        };
        let slots = self.slots.get(start..end)?;
        Some(slots.iter().map(|slot| self.materialize(slot)).collect())
    }

    /// Iterate in order, building each element as it is reached.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            inner: self.slots.iter(),
        }
    }

    /// Build every remaining element. Idempotent.
    pub fn materialize_all(&self) -> ApiResult<&Self> {
        for slot in &self.slots {
            self.materialize(slot)?;
        }
        Ok(self)
    }

    /// Build everything and collect references.
    pub fn to_vec(&self) -> ApiResult<Vec<&T>> {
        self.iter().collect()
    }

    /// Whether `item` is in the list. Builds every element.
    pub fn contains(&self, item: &T) -> ApiResult<bool>
    where
        T: PartialEq,
    {
        self.materialize_all()?;
        Ok(self.values().any(|value| value == item))
    }

    /// Deep copy of the raw elements.
    pub fn to_raw(&self) -> Vec<Value> {
        self.slots.iter().map(|slot| slot.raw.clone()).collect()
    }

    fn materialize<'a>(&'a self, slot: &'a Slot<T>) -> ApiResult<&'a T> {
        if let Some(value) = slot.value.get() {
            return Ok(value);
        }
        let value = (self.transform)(&slot.raw)?;
        Ok(slot.value.get_or_init(|| value))
    }

    /// Already built values; only complete after `materialize_all`.
    fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| slot.value.get())
    }
}

/// Iterator over a [`TransformerList`].
pub struct Iter<'a, T> {
    list: &'a TransformerList<T>,
    inner: std::slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ApiResult<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| self.list.materialize(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| self.list.materialize(slot))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a TransformerList<T> {
    type Item = ApiResult<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for TransformerList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|slot| Slot {
                    raw: slot.raw.clone(),
                    value: slot.value.clone(),
                })
                .collect(),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<T> fmt::Debug for TransformerList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerList")
            .field("len", &self.len())
            .field("materialized", &self.materialized_count())
            .finish()
    }
}

/// Builds both lists; a list with a malformed element equals nothing.
impl<T: PartialEq> PartialEq for TransformerList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.materialize_all().is_err() || other.materialize_all().is_err() {
            return false;
        }
        self.values().eq(other.values())
    }
}

/// Lexicographic, after building both lists.
impl<T: PartialOrd> PartialOrd for TransformerList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.materialize_all().ok()?;
        other.materialize_all().ok()?;
        self.values().partial_cmp(other.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn counting(len: usize) -> (TransformerList<i64>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let raw = (0..len as i64).map(|n| json!({ "n": n }));
        let list = TransformerList::new(raw, move |value: &Value| {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
            value["n"]
                .as_i64()
                .ok_or_else(|| ApiError::malformed("Number", "n", "expected an integer"))
        });
        (list, calls)
    }

    #[test]
    fn test_index_materializes_once() {
        let (list, calls) = counting(10);

        assert_eq!(*list.get(3).unwrap().unwrap(), 3);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(list.materialized_count(), 1);

        assert_eq!(*list.get(3).unwrap().unwrap(), 3);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn test_iteration_materializes_remaining() {
        let (list, calls) = counting(10);
        list.get(2).unwrap().unwrap();
        list.get(7).unwrap().unwrap();

        let values: Vec<i64> = list.iter().map(|v| *v.unwrap()).collect();
        assert_eq!(values, (0..10).collect::<Vec<_>>());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 10);

        list.iter().for_each(|v| {
            v.unwrap();
        });
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 10);
    }

    #[test]
    fn test_slice_touches_only_range() {
        let (list, calls) = counting(10);
        let slice = list.slice(2..5).unwrap().unwrap();
        assert_eq!(slice, vec![&2, &3, &4]);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 3);

        assert!(list.slice(8..12).is_none());
        assert_eq!(list.slice(..).unwrap().unwrap().len(), 10);
    }

    #[test]
    fn test_reverse_and_step() {
        let (list, _) = counting(6);
        let reversed: Vec<i64> = list.iter().rev().map(|v| *v.unwrap()).collect();
        assert_eq!(reversed, vec![5, 4, 3, 2, 1, 0]);

        let stepped: Vec<i64> = list.iter().step_by(2).map(|v| *v.unwrap()).collect();
        assert_eq!(stepped, vec![0, 2, 4]);
        assert_eq!(list.last().unwrap().unwrap(), &5);
    }

    #[test]
    fn test_contains_builds_everything() {
        let (list, calls) = counting(5);
        assert!(list.contains(&4).unwrap());
        assert!(!list.contains(&9).unwrap());
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 5);
    }

    #[test]
    fn test_materialize_all_is_idempotent() {
        let (list, calls) = counting(4);
        list.materialize_all().unwrap();
        list.materialize_all().unwrap();
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 4);
        assert_eq!(list.materialized_count(), 4);
    }

    #[test]
    fn test_equality_and_ordering() {
        let (a, _) = counting(3);
        let (b, _) = counting(3);
        let (c, _) = counting(4);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));
    }

    #[test]
    fn test_empty_list() {
        let (list, calls) = counting(0);
        assert!(list.is_empty());
        assert!(list.get(0).is_none());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert_eq!(list.iter().count(), 0);
        assert!(!list.contains(&0).unwrap());
        assert_eq!(list.slice(..).unwrap().unwrap().len(), 0);
        assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }

    #[test]
    fn test_malformed_element_surfaces_error() {
        let list = TransformerList::new(vec![json!({"n": 1}), json!({"n": "two"})], |value: &Value| {
            value["n"]
                .as_i64()
                .ok_or_else(|| ApiError::malformed("Number", "n", "expected an integer"))
        });
        assert_eq!(*list.get(0).unwrap().unwrap(), 1);
        assert!(matches!(list.get(1).unwrap(), Err(ApiError::MalformedPayload { field: "n", .. })));
        assert!(list.materialize_all().is_err());
        assert_eq!(list.materialized_count(), 1);
    }

    #[test]
    fn test_raw_copy_is_detached() {
        let (list, _) = counting(2);
        let mut raw = list.to_raw();
        raw[0] = json!({"n": 100});
        assert_eq!(*list.get(0).unwrap().unwrap(), 0);
        assert_eq!(list.to_raw()[0], json!({"n": 0}));
    }
}
