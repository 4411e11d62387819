//! Chunked typed arena that owns the nodes of a tree.

use std::mem;
use std::ops::{Index, IndexMut};

/// Number of nodes allocated per chunk when a tree grows.
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// Every slot carries a generation that is bumped when the slot is freed, so a handle to a freed
/// object never resolves to an object that later reuses the same slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    chunk_index: usize,
    block_index: usize,
    generation: u32,
}

impl Handle {
    /// Position of the slot if all chunks were laid out contiguously.
    pub fn flat_index(&self, chunk_size: usize) -> usize {
        self.chunk_index * chunk_size + self.block_index
    }
}

enum Block<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next: Option<Handle> },
}

/// A typed arena that allocates objects of a single type in fixed-size chunks.
///
/// Freed slots are threaded onto a free list and handed out again before a new chunk is created,
/// so growing the arena never moves existing objects. All objects are dropped with the arena.
///
/// # Examples
///
/// ```
/// use balanced_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), Some(2));
/// assert_eq!(arena.get(&x), None);
/// ```
pub struct TypedArena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
}

impl<T> TypedArena<T> {
    fn block(&self, handle: &Handle) -> Option<&Block<T>> {
        self.chunks
            .get(handle.chunk_index)
            .and_then(|chunk| chunk.get(handle.block_index))
    }

    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// assert!(arena.is_empty());
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    /// Returns the number of objects per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocates an object in the arena and returns a handle to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;

        match self.head.take() {
            None => {
                if self.chunks.last().map_or(true, |chunk| chunk.len() == self.chunk_size) {
                    self.chunks.push(Vec::with_capacity(self.chunk_size));
                }
                let chunk_index = self.chunks.len() - 1;
                let last_chunk = &mut self.chunks[chunk_index];
                last_chunk.push(Block::Occupied {
                    generation: 0,
                    value,
                });
                Handle {
                    chunk_index,
                    block_index: last_chunk.len() - 1,
                    generation: 0,
                }
            },
            Some(handle) => {
                let slot = &mut self.chunks[handle.chunk_index][handle.block_index];
                let vacant_block = mem::replace(
                    slot,
                    Block::Occupied {
                        generation: handle.generation,
                        value,
                    },
                );
                match vacant_block {
                    Block::Vacant { next, .. } => self.head = next,
                    Block::Occupied { .. } => panic!("Error: free list points at an occupied block."),
                }
                handle
            },
        }
    }

    /// Deallocates an object and returns it. Returns `None` if the handle does not refer to a live
    /// object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), Some(0));
    /// assert_eq!(arena.free(&x), None);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> Option<T> {
        if !self.contains(handle) {
            return None;
        }
        let generation = handle.generation.wrapping_add(1);
        let old_block = mem::replace(
            &mut self.chunks[handle.chunk_index][handle.block_index],
            Block::Vacant {
                generation,
                next: self.head.take(),
            },
        );
        self.head = Some(Handle {
            generation,
            ..*handle
        });
        self.len -= 1;
        match old_block {
            Block::Occupied { value, .. } => Some(value),
            Block::Vacant { .. } => unreachable!(),
        }
    }

    /// Returns `true` if the handle refers to a live object.
    pub fn contains(&self, handle: &Handle) -> bool {
        match self.block(handle) {
            Some(Block::Occupied { generation, .. }) => *generation == handle.generation,
            _ => false,
        }
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if the handle does
    /// not refer to a live object.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        match self.block(handle) {
            Some(Block::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if the handle does
    /// not refer to a live object.
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        let block = self
            .chunks
            .get_mut(handle.chunk_index)
            .and_then(|chunk| chunk.get_mut(handle.block_index));
        match block {
            Some(Block::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            },
            _ => None,
        }
    }

    /// Returns an iterator over the live objects in storage order along with their handles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.chunks
            .iter_mut()
            .enumerate()
            .flat_map(|(chunk_index, chunk)| {
                chunk
                    .iter_mut()
                    .enumerate()
                    .filter_map(move |(block_index, block)| match block {
                        Block::Occupied { generation, value } => Some((
                            Handle {
                                chunk_index,
                                block_index,
                                generation: *generation,
                            },
                            value,
                        )),
                        Block::Vacant { .. } => None,
                    })
            })
    }

    /// Drops every object and releases all chunks.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle does not refer to a live object.")
    }
}
