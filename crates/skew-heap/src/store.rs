//! Node storage providers.
//!
//! The merge engine never touches nodes directly; it goes through a
//! [`NodeStore`]. Two providers exist:
//!
//! - [`BoxStore`]: every node is its own `Box`. Links are self-contained,
//!   so the store is [`Relocatable`].
//! - [`ArenaStore`]: nodes live in slots of an [`Arena`] owned by the
//!   store. Links are arena handles that only resolve against that arena,
//!   so the store is deliberately not [`Relocatable`].

use std::convert::Infallible;
use std::mem;

use skew_arena::{Arena, ArenaConfig, ArenaError, SlotHandle};

/// One heap element and its two owned subtrees.
pub struct Node<T, L> {
    pub(crate) key: T,
    pub(crate) left: Option<L>,
    pub(crate) right: Option<L>,
}

impl<T, L> Node<T, L> {
    fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The stored key.
    pub fn key(&self) -> &T {
        &self.key
    }
}

/// Storage abstraction the merge engine runs on.
///
/// A `Link` owns the subtree it points to: the engine never duplicates a
/// link, and every link it receives from [`alloc`](Self::alloc) is handed
/// back exactly once through [`dismantle`](Self::dismantle).
pub trait NodeStore<T> {
    /// Owning reference to a node.
    type Link;
    /// Failure raised when a node cannot be allocated.
    type Error;

    /// Allocate a childless node holding `key`.
    fn alloc(&mut self, key: T) -> Result<Self::Link, Self::Error>;

    /// The key stored at `link`.
    fn key<'a>(&'a self, link: &'a Self::Link) -> &'a T;

    /// Detach and return the right subtree of `link`.
    fn take_right(&mut self, link: &mut Self::Link) -> Option<Self::Link>;

    /// Set the right subtree of `link` to `right`, then swap its children.
    fn attach_right_and_skew(&mut self, link: &mut Self::Link, right: Option<Self::Link>);

    /// Free the node at `link`, returning its key and both subtrees.
    fn dismantle(&mut self, link: Self::Link) -> (T, Option<Self::Link>, Option<Self::Link>);
}

/// Capability marker: links stay valid when moved to another store
/// instance of the same type.
///
/// Only heaps over a `Relocatable` store expose operations that transfer
/// a tree into a different heap value without its storage.
pub trait Relocatable {}

// ── Free store ──────────────────────────────────────────────────────

/// Free-store provider: one heap allocation per node.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxStore;

/// Owning link of a [`BoxStore`] node.
pub struct BoxLink<T>(Box<Node<T, BoxLink<T>>>);

impl<T> NodeStore<T> for BoxStore {
    type Link = BoxLink<T>;
    type Error = Infallible;

    fn alloc(&mut self, key: T) -> Result<BoxLink<T>, Infallible> {
        Ok(BoxLink(Box::new(Node::leaf(key))))
    }

    #[inline]
    fn key<'a>(&'a self, link: &'a BoxLink<T>) -> &'a T {
        &link.0.key
    }

    #[inline]
    fn take_right(&mut self, link: &mut BoxLink<T>) -> Option<BoxLink<T>> {
        link.0.right.take()
    }

    #[inline]
    fn attach_right_and_skew(&mut self, link: &mut BoxLink<T>, right: Option<BoxLink<T>>) {
        let node = &mut *link.0;
        node.right = right;
        mem::swap(&mut node.left, &mut node.right);
    }

    fn dismantle(&mut self, link: BoxLink<T>) -> (T, Option<BoxLink<T>>, Option<BoxLink<T>>) {
        let node = *link.0;
        (node.key, node.left, node.right)
    }
}

impl Relocatable for BoxStore {}

// ── Arena store ─────────────────────────────────────────────────────

/// Arena provider: nodes occupy slots of an owned [`Arena`].
///
/// Links are [`SlotHandle`]s into this store's arena. Moving one into
/// another store would leave it pointing at storage the new owner does
/// not control, so this type does not implement [`Relocatable`]; heaps
/// join arena-backed trees through
/// [`ArenaSkewHeap::merge`](crate::ArenaSkewHeap), which moves the
/// donor's blocks along with its nodes.
pub struct ArenaStore<T> {
    pub(crate) arena: Arena<Node<T, SlotHandle>>,
}

impl<T> ArenaStore<T> {
    /// Create a store over a fresh arena.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        Ok(Self {
            arena: Arena::new(config)?,
        })
    }

    /// The backing arena.
    pub fn arena(&self) -> &Arena<Node<T, SlotHandle>> {
        &self.arena
    }
}

impl<T> Default for ArenaStore<T> {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
        }
    }
}

impl<T> NodeStore<T> for ArenaStore<T> {
    type Link = SlotHandle;
    type Error = ArenaError;

    fn alloc(&mut self, key: T) -> Result<SlotHandle, ArenaError> {
        self.arena.create(Node::leaf(key))
    }

    #[inline]
    fn key<'a>(&'a self, link: &'a SlotHandle) -> &'a T {
        &self.arena[*link].key
    }

    #[inline]
    fn take_right(&mut self, link: &mut SlotHandle) -> Option<SlotHandle> {
        self.arena[*link].right.take()
    }

    #[inline]
    fn attach_right_and_skew(&mut self, link: &mut SlotHandle, right: Option<SlotHandle>) {
        let node = &mut self.arena[*link];
        node.right = right;
        mem::swap(&mut node.left, &mut node.right);
    }

    fn dismantle(&mut self, link: SlotHandle) -> (T, Option<SlotHandle>, Option<SlotHandle>) {
        match self.arena.destroy(link) {
            Ok(node) => (node.key, node.left, node.right),
            Err(e) => panic!("heap node {link} not live in its own arena: {e}"),
        }
    }
}
