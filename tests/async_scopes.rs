// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fork/copy semantics of ApplyScopes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use scopelog::scope::ApplyScopes;
use scopelog::{InMemoryWriter, Logger};

fn states(logger: &Logger) -> Vec<String> {
    logger.current_scopes().map(|s| s.to_string()).collect()
}

/// Ready on the second poll; lets a test observe a future between polls.
#[derive(Default)]
struct YieldNow {
    polled: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.polled {
            Poll::Ready(())
        } else {
            self.polled = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

fn noop_waker() -> Waker {
    const VTABLE: RawWakerVTable =
        RawWakerVTable::new(|_| RawWaker::new(std::ptr::null(), &VTABLE), |_| {}, |_| {}, |_| {});
    //safety: the vtable does nothing with the null data pointer
    unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
}

#[test_executors::async_test]
async fn child_sees_the_fork_time_chain() {
    let logger = Arc::new(Logger::new(Arc::new(InMemoryWriter::new())));

    let p = logger.begin_scope("P");
    let child_logger = logger.clone();
    // Fork point: the wrapper snapshots the chain here.
    let child = ApplyScopes::new(async move { states(&child_logger) });

    // Nothing the parent does after the fork reaches the child.
    p.end();
    let q = logger.begin_scope("Q");

    assert_eq!(child.await, ["P"]);
    // The parent's own chain is restored around the child's polls.
    assert_eq!(states(&logger), ["Q"]);
    q.end();
}

#[test_executors::async_test]
async fn explicit_head_forks_from_a_chosen_point() {
    let logger = Arc::new(Logger::new(Arc::new(InMemoryWriter::new())));
    let _outer = logger.begin_scope("outer");

    let snapshot = scopelog::scope::current::head();
    let child_logger = logger.clone();
    let child = ApplyScopes::with_head(snapshot, async move { states(&child_logger) });

    assert_eq!(child.await, ["outer"]);
}

#[test]
fn child_mutations_stay_in_the_wrapper() {
    let logger = Arc::new(Logger::new(Arc::new(InMemoryWriter::new())));
    let _parent = logger.begin_scope("parent");

    let child_logger = logger.clone();
    let mut child = Box::pin(ApplyScopes::new(async move {
        let _step = child_logger.begin_scope("step");
        assert_eq!(states(&child_logger), ["step", "parent"]);
        YieldNow::default().await;
        // The child's push survived its own suspension.
        assert_eq!(states(&child_logger), ["step", "parent"]);
    }));

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    assert!(child.as_mut().poll(&mut cx).is_pending());
    // Suspended mid-scope, yet the parent sees none of it.
    assert_eq!(states(&logger), ["parent"]);

    assert!(child.as_mut().poll(&mut cx).is_ready());
    assert_eq!(states(&logger), ["parent"]);
}

#[test]
fn interleaved_siblings_are_isolated() {
    let logger = Arc::new(Logger::new(Arc::new(InMemoryWriter::new())));
    let _shared = logger.begin_scope("shared");

    let make_child = |name: &'static str| {
        let logger = logger.clone();
        Box::pin(ApplyScopes::new(async move {
            let _own = logger.begin_scope(name);
            YieldNow::default().await;
            assert_eq!(states(&logger), [name, "shared"]);
        }))
    };
    let mut left = make_child("left");
    let mut right = make_child("right");

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    // Alternate polls; each sibling keeps exactly its own branch.
    assert!(left.as_mut().poll(&mut cx).is_pending());
    assert!(right.as_mut().poll(&mut cx).is_pending());
    assert!(left.as_mut().poll(&mut cx).is_ready());
    assert!(right.as_mut().poll(&mut cx).is_ready());

    assert_eq!(states(&logger), ["shared"]);
}
