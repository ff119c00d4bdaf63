use std::cmp::Ordering;

use rb_intrusive::{Arena, NodeAccessor, NodeIndex, RbTree, Side, TreeCorrupted};

/// An ordered set built on the balancing engine. The set owns key comparison
/// and search; the engine only keeps the shape balanced.
struct SortedSet<T> {
    tree: RbTree<Arena<T>>,
}

type Slot = Option<(NodeIndex, Side)>;

impl<T: Ord> SortedSet<T> {
    fn new() -> Self {
        Self {
            tree: RbTree::default(),
        }
    }

    fn search(&self, value: &T) -> Result<NodeIndex, Slot> {
        let arena = self.tree.accessor();
        let mut slot = None;
        let mut x = self.tree.root();
        while let Some(n) = x {
            let side = match arena.get(n).map(|v| value.cmp(v)) {
                Some(Ordering::Less) => Side::Left,
                Some(Ordering::Greater) => Side::Right,
                _ => return Ok(n),
            };
            slot = Some((n, side));
            x = arena.child(n, side);
        }
        Err(slot)
    }

    fn insert(&mut self, value: T) -> Result<bool, TreeCorrupted<NodeIndex>> {
        let slot = match self.search(&value) {
            Ok(_) => return Ok(false),
            Err(slot) => slot,
        };
        let node = self.tree.accessor_mut().alloc(value);
        match slot {
            None => self.tree.set_root(Some(node)),
            Some((parent, side)) => {
                let arena = self.tree.accessor_mut();
                arena.set_parent(node, Some(parent));
                arena.set_child(parent, side, Some(node));
            }
        }
        self.tree.balance_after_linking(node)?;
        Ok(true)
    }

    fn remove(&mut self, value: &T) -> Result<Option<T>, TreeCorrupted<NodeIndex>> {
        let Ok(node) = self.search(value) else {
            return Ok(None);
        };
        self.tree.unlink(node)?;
        Ok(self.tree.accessor_mut().free(node))
    }

    fn first(&self) -> Option<&T> {
        self.tree.min().and_then(|n| self.tree.accessor().get(n))
    }

    fn last(&self) -> Option<&T> {
        self.tree.max().and_then(|n| self.tree.accessor().get(n))
    }

    fn to_vec(&self) -> Vec<&T> {
        let arena = self.tree.accessor();
        let mut out = Vec::with_capacity(arena.len());
        let mut stack = vec![];
        let mut x = self.tree.root();
        loop {
            while let Some(n) = x {
                stack.push(n);
                x = arena.left(n);
            }
            let Some(n) = stack.pop() else {
                break;
            };
            out.extend(arena.get(n));
            x = arena.right(n);
        }
        out
    }
}

fn main() -> Result<(), TreeCorrupted<NodeIndex>> {
    let mut set = SortedSet::new();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry", "apple"] {
        set.insert(word)?;
    }
    assert_eq!(
        set.to_vec(),
        vec![&"apple", &"banana", &"cherry", &"fig", &"kiwi", &"pear"]
    );
    assert_eq!(set.first(), Some(&"apple"));
    assert_eq!(set.last(), Some(&"pear"));

    assert_eq!(set.remove(&"fig")?, Some("fig"));
    assert_eq!(set.remove(&"fig")?, None);
    assert_eq!(set.tree.check(), Ok(2));

    // the freed slot is handed to the next value
    set.insert("grape")?;
    assert_eq!(set.tree.accessor().len(), 6);
    println!("{:?}", set.to_vec());
    Ok(())
}
