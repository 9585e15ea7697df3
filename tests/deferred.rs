use core::cell::Cell;

use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

use deferred::{defer, Deferred, ProduceMut, ProduceOnce};

struct MoveOnly(Vec<u8>);

struct TakeOnce;

impl ProduceOnce<(MoveOnly,)> for TakeOnce {
    type Output = MoveOnly;

    fn produce_once(self, (value,): (MoveOnly,)) -> MoveOnly {
        value
    }
}

struct Dual;

impl ProduceOnce for Dual {
    type Output = u64;

    fn produce_once(self, (): ()) -> u64 {
        64
    }
}

impl ProduceMut for Dual {
    type Output = u16;

    fn produce_mut(&mut self, _: &mut ()) -> u16 {
        16
    }
}

// The handle cannot be duplicated or conjured up empty.
assert_not_impl_any!(Deferred<fn() -> u8>: Clone, Default);

// Thread safety is exactly that of the captured producer and arguments.
assert_impl_all!(Deferred<fn() -> u8>: Send, Sync);
assert_not_impl_any!(Deferred<fn() -> u8, (*const u8,)>: Send, Sync);

// A once-only producer has no binding path.
assert_not_impl_any!(TakeOnce: ProduceMut<(MoveOnly,)>);

// Each path keeps its own output type.
assert_type_eq_all!(<Dual as ProduceOnce>::Output, u64);
assert_type_eq_all!(<Dual as ProduceMut>::Output, u16);

#[test]
fn a_move_only_argument_reaches_the_producer_intact() {
    let deferred = Deferred::new(TakeOnce, (MoveOnly(vec![1, 2, 3]),));
    let value = deferred.materialize();
    assert_eq!(value.0, [1, 2, 3]);
}

#[test]
fn a_handle_may_be_dropped_without_ever_materializing() {
    let calls = Cell::new(0);
    {
        let _deferred = Deferred::new(
            |label: String| {
                calls.set(calls.get() + 1);
                label
            },
            (String::from("never produced"),),
        );
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn consumption_and_binding_paths_coexist_on_one_handle() {
    let calls = Cell::new(0);
    let mut deferred = defer(|| {
        calls.set(calls.get() + 1);
        5
    });
    assert_eq!(deferred.materialize_mut(), 5);
    assert_eq!(deferred.materialize_mut(), 5);
    assert_eq!(deferred.materialize(), 5);
    assert_eq!(calls.get(), 3);
}

#[test]
fn dual_output_producers_dispatch_by_path() {
    let mut deferred = Deferred::new(Dual, ());
    assert_eq!(deferred.materialize_mut(), 16);
    assert_eq!(deferred.materialize(), 64);
}
