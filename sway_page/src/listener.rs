// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener subscriptions and their lifecycle.
//!
//! Sections never talk to a windowing system directly. They ask an
//! [`EventHost`] for subscriptions when mounted and hand every
//! [`ListenerId`] back when unmounted. [`ListenerRegistry`] is an in-memory
//! host that hosts can wrap, and that tests use to check that mount and
//! unmount stay balanced.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

bitflags::bitflags! {
    /// Input streams a section can listen to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKind: u8 {
        /// Page scroll.
        const SCROLL       = 0b0000_0001;
        /// Viewport resize.
        const RESIZE       = 0b0000_0010;
        /// Pointer movement anywhere in the window.
        const POINTER_MOVE = 0b0000_0100;
    }
}

/// Handle for one live subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wraps a host-specific raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-specific raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Something that can attach and detach input listeners.
pub trait EventHost {
    /// Attaches a listener for `kind` and returns its handle.
    ///
    /// `kind` names a single stream; hosts may reject combined flags by
    /// treating them as their first set bit.
    fn subscribe(&mut self, kind: ListenerKind) -> ListenerId;

    /// Detaches `id`. Returns `false` if the host did not know the id.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// In-memory [`EventHost`] that tracks live subscriptions.
///
/// ```
/// use sway_page::{EventHost, ListenerKind, ListenerRegistry};
///
/// let mut host = ListenerRegistry::new();
/// let id = host.subscribe(ListenerKind::SCROLL);
/// assert_eq!(host.live_count(), 1);
/// assert!(host.unsubscribe(id));
/// assert!(!host.unsubscribe(id));
/// assert!(host.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    live: HashMap<ListenerId, ListenerKind>,
    next: u64,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of live subscriptions whose kind intersects `kind`.
    #[must_use]
    pub fn live_count_of(&self, kind: ListenerKind) -> usize {
        self.live.values().filter(|k| k.intersects(kind)).count()
    }

    /// Returns `true` if no listener is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Kind of a live subscription.
    #[must_use]
    pub fn kind(&self, id: ListenerId) -> Option<ListenerKind> {
        self.live.get(&id).copied()
    }

    /// Live subscriptions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ListenerId, ListenerKind)> + '_ {
        let mut ids: Vec<_> = self.live.iter().map(|(id, k)| (*id, *k)).collect();
        ids.sort_unstable_by_key(|(id, _)| *id);
        ids.into_iter()
    }
}

impl EventHost for ListenerRegistry {
    fn subscribe(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.live.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.live.remove(&id).is_some()
    }
}

/// Detaches every id in `ids` and returns the ones `host` did not know.
pub(crate) fn detach_all<H: EventHost + ?Sized>(
    host: &mut H,
    ids: &[ListenerId],
) -> Vec<ListenerId> {
    ids.iter().copied().filter(|id| !host.unsubscribe(*id)).collect()
}

/// Returned by `unmount` when the host did not know some of the listeners.
///
/// The mounted value comes back holding only those stray listeners, so it can
/// be unmounted again from the host that actually owns them.
#[derive(Debug)]
pub struct UnmountError<T> {
    mounted: Box<T>,
    stray: Vec<ListenerId>,
}

impl<T> UnmountError<T> {
    pub(crate) fn new(mounted: T, stray: Vec<ListenerId>) -> Self {
        Self {
            mounted: Box::new(mounted),
            stray,
        }
    }

    /// Listeners that are still attached somewhere.
    #[must_use]
    pub fn stray(&self) -> &[ListenerId] {
        &self.stray
    }

    /// The still-mounted value.
    #[must_use]
    pub fn into_inner(self) -> T {
        *self.mounted
    }
}

impl<T> fmt::Display for UnmountError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} listener(s) were not attached to this host",
            self.stray.len()
        )
    }
}

impl<T: fmt::Debug> core::error::Error for UnmountError<T> {}
