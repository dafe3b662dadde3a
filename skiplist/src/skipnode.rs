// /////////////////////////////////////////////////////////////////////////////////////////////////
// SkipNode
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// Index of a node inside the `NodeArena`.  `None` marks the end of a level.
pub type Link = Option<usize>;

/// A stored key and value together with its forward links.
///
/// `links[lvl]` is the next node that also reaches level `lvl`.  The node reaches levels
/// `0..=level`, so the vector is always `level + 1` long, and that never changes after the node
/// is created.
#[derive(Clone, Debug)]
pub struct SkipNode<K, V> {
    pub key: K,
    pub value: V,
    pub links: Vec<Link>,
}

impl<K, V> SkipNode<K, V> {
    /// Create a new SkipNode reaching `level`.  Every link starts out at the end of its level.
    pub fn new(key: K, value: V, level: usize) -> Self {
        SkipNode {
            key,
            value,
            links: vec![None; level + 1],
        }
    }

    /// How high the node reaches (0-indexed).
    #[cfg(test)]
    pub fn level(&self) -> usize {
        self.links.len() - 1
    }
}

// /////////////////////////////////////////////////////////////////////////////////////////////////
// NodeArena
// /////////////////////////////////////////////////////////////////////////////////////////////////

/// Slot storage owning every node of one skiplist.
///
/// Indices handed out by `insert` stay valid until `remove` is called on them; freed slots are
/// recycled by later insertions.
#[derive(Clone, Debug)]
pub struct NodeArena<K, V> {
    slots: Vec<Option<SkipNode<K, V>>>,
    free: Vec<usize>,
}

impl<K, V> NodeArena<K, V> {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn insert(&mut self, node: SkipNode<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    pub fn remove(&mut self, idx: usize) -> SkipNode<K, V> {
        let node = self.slots[idx].take().expect("removed a vacant skiplist slot");
        self.free.push(idx);
        node
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &SkipNode<K, V> {
        self.slots[idx].as_ref().expect("dangling skiplist link")
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> &mut SkipNode<K, V> {
        self.slots[idx].as_mut().expect("dangling skiplist link")
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
