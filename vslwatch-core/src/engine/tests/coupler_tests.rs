use crate::engine::{CallCoupler, Callback, CallbackOutcomes, TransactionStore};
use crate::record::{SessionId, Xid};
use pretty_assertions::assert_eq;

fn store_with(xid: Xid) -> TransactionStore {
    let mut store = TransactionStore::default();
    store.begin(SessionId(1), xid, "1.2.3.4", None);
    store
}

#[test]
fn return_is_stored_under_pending_callback() {
    // Arrange
    let xid = Xid(10);
    let mut store = store_with(xid);
    let mut calls = CallCoupler::default();

    // Act
    calls.call_start(xid, Some(Callback::Recv));
    let resolved = calls.call_return(&mut store, xid, "lookup");

    // Assert
    assert_eq!(resolved, Some(Callback::Recv));
    assert_eq!(store.get(xid).unwrap().callbacks.get(Callback::Recv), "lookup");
    assert_eq!(calls.pending(xid), None);
    assert!(calls.is_empty());
}

#[test]
fn return_without_call_is_discarded() {
    let xid = Xid(10);
    let mut store = store_with(xid);
    let mut calls = CallCoupler::default();

    assert_eq!(calls.call_return(&mut store, xid, "deliver"), None);
    assert_eq!(store.get(xid).unwrap().callbacks, CallbackOutcomes::default());
}

#[test]
fn second_return_after_one_call_is_discarded() {
    let xid = Xid(10);
    let mut store = store_with(xid);
    let mut calls = CallCoupler::default();

    calls.call_start(xid, Some(Callback::Hit));
    calls.call_return(&mut store, xid, "deliver");
    calls.call_return(&mut store, xid, "pass");

    assert_eq!(store.get(xid).unwrap().callbacks.get(Callback::Hit), "deliver");
}

#[test]
fn last_call_wins() {
    // Arrange
    let xid = Xid(10);
    let mut store = store_with(xid);
    let mut calls = CallCoupler::default();

    // Act
    calls.call_start(xid, Some(Callback::Recv));
    calls.call_start(xid, Some(Callback::Hash));
    calls.call_return(&mut store, xid, "hash");

    // Assert
    let callbacks = &store.get(xid).unwrap().callbacks;
    assert_eq!(callbacks.get(Callback::Hash), "hash");
    assert_eq!(callbacks.get(Callback::Recv), "");
}

#[test]
fn untracked_callback_clears_pending_marker() {
    let xid = Xid(10);
    let mut store = store_with(xid);
    let mut calls = CallCoupler::default();

    calls.call_start(xid, Some(Callback::Recv));
    calls.call_start(xid, None);

    assert_eq!(calls.call_return(&mut store, xid, "ok"), None);
    assert_eq!(store.get(xid).unwrap().callbacks.get(Callback::Recv), "");
}

#[test]
fn keys_carry_vcl_prefix() {
    assert_eq!(Callback::Recv.key(), "vcl_recv");
    assert_eq!(Callback::parse("deliver").map(Callback::key), Some("vcl_deliver"));
    assert_eq!(Callback::parse("init"), None);
}
