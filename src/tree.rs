//! Multi-ary tree in first-child/next-sibling encoding
//!
//! Nodes live in a `slotmap` arena and are addressed by generational
//! [`TreeKey`]s. Each node links to its parent, its first child and its two
//! neighboring siblings, so a node may carry any number of children.

use slotmap::{new_key_type, SlotMap};
use std::collections::VecDeque;

new_key_type! {
    /// Stable handle to a tree node
    pub struct TreeKey;
}

#[derive(Debug, Clone)]
struct TreeNode<T> {
    item: T,
    parent: Option<TreeKey>,
    first_child: Option<TreeKey>,
    prev: Option<TreeKey>,
    next: Option<TreeKey>,
}

/// A rooted tree with arbitrary branching
///
/// # Example
///
/// ```rust
/// use dary_collections::tree::Tree;
///
/// let mut tree = Tree::new();
/// let root = tree.set_root("/");
/// let home = tree.add_child(root, "home").unwrap();
/// tree.add_child(root, "etc");
/// tree.add_child(home, "user");
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.height(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree<T> {
    nodes: SlotMap<TreeKey, TreeNode<T>>,
    root: Option<TreeKey>,
}

impl<T> Tree<T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree has no root
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Handle of the root node, if any
    pub fn root(&self) -> Option<TreeKey> {
        self.root
    }

    /// Sets the root element, replacing the whole previous tree if one existed
    pub fn set_root(&mut self, item: T) -> TreeKey {
        self.clear();
        let key = self.nodes.insert(TreeNode {
            item,
            parent: None,
            first_child: None,
            prev: None,
            next: None,
        });
        self.root = Some(key);
        key
    }

    /// The element behind `key`, if the key still resolves
    pub fn get(&self, key: TreeKey) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.item)
    }

    /// Mutable access to the element behind `key`
    pub fn get_mut(&mut self, key: TreeKey) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.item)
    }

    /// Replaces the element behind `key`, returning the previous one
    pub fn set(&mut self, key: TreeKey, item: T) -> Option<T> {
        self.nodes
            .get_mut(key)
            .map(|node| std::mem::replace(&mut node.item, item))
    }

    /// Parent of the node at `key`; `None` for the root or a stale key
    pub fn parent(&self, key: TreeKey) -> Option<TreeKey> {
        self.nodes.get(key)?.parent
    }

    /// True when the node exists and has no children
    pub fn is_leaf(&self, key: TreeKey) -> bool {
        self.nodes
            .get(key)
            .is_some_and(|node| node.first_child.is_none())
    }

    /// Appends a child under `parent`, at the end of its child list.
    ///
    /// Returns `None`, without inserting, when `parent` no longer resolves.
    pub fn add_child(&mut self, parent: TreeKey, item: T) -> Option<TreeKey> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let key = self.nodes.insert(TreeNode {
            item,
            parent: Some(parent),
            first_child: None,
            prev: None,
            next: None,
        });
        match self.nodes[parent].first_child {
            None => self.nodes[parent].first_child = Some(key),
            Some(first) => {
                let mut last = first;
                while let Some(next) = self.nodes[last].next {
                    last = next;
                }
                self.nodes[last].next = Some(key);
                self.nodes[key].prev = Some(last);
            }
        }
        Some(key)
    }

    /// Inserts a sibling right after the node at `key`.
    ///
    /// Returns `None`, without inserting, when the key no longer resolves
    /// or names the root (the root has no siblings).
    pub fn add_sibling(&mut self, key: TreeKey, item: T) -> Option<TreeKey> {
        let node = self.nodes.get(key)?;
        let parent = node.parent?;
        let next = node.next;
        let new_key = self.nodes.insert(TreeNode {
            item,
            parent: Some(parent),
            first_child: None,
            prev: Some(key),
            next,
        });
        self.nodes[key].next = Some(new_key);
        if let Some(next) = next {
            self.nodes[next].prev = Some(new_key);
        }
        Some(new_key)
    }

    /// Iterator over the direct children of `key`, in insertion order
    pub fn children(&self, key: TreeKey) -> Children<'_, T> {
        Children {
            tree: self,
            current: self.nodes.get(key).and_then(|node| node.first_child),
        }
    }

    /// Removes the node at `key` together with its whole subtree.
    ///
    /// Returns `false` when the key no longer resolves.
    pub fn remove(&mut self, key: TreeKey) -> bool {
        if !self.nodes.contains_key(key) {
            return false;
        }
        self.detach(key);
        self.remove_subtree(key);
        true
    }

    /// Removes every child subtree of `key`, keeping the node itself.
    ///
    /// Returns `false` when the key no longer resolves.
    pub fn remove_children(&mut self, key: TreeKey) -> bool {
        let Some(node) = self.nodes.get(key) else {
            return false;
        };
        let mut child = node.first_child;
        while let Some(current) = child {
            child = self.nodes[current].next;
            self.remove_subtree(current);
        }
        self.nodes[key].first_child = None;
        true
    }

    /// Height of the tree: 0 when empty, 1 for a lone root
    pub fn height(&self) -> usize {
        match self.root {
            Some(root) => self.height_below(root),
            None => 0,
        }
    }

    /// Iterator over all elements, level by level from the root
    pub fn iter_breadth_first(&self) -> BreadthFirst<'_, T> {
        let mut pending = VecDeque::new();
        if let Some(root) = self.root {
            pending.push_back(root);
        }
        BreadthFirst {
            tree: self,
            pending,
        }
    }

    /// Empties the tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn height_below(&self, key: TreeKey) -> usize {
        let mut tallest_child = 0;
        let mut child = self.nodes[key].first_child;
        while let Some(current) = child {
            tallest_child = tallest_child.max(self.height_below(current));
            child = self.nodes[current].next;
        }
        1 + tallest_child
    }

    /// Unlinks `key` from its parent and siblings, leaving the subtree intact
    fn detach(&mut self, key: TreeKey) {
        let (parent, prev, next) = {
            let node = &self.nodes[key];
            (node.parent, node.prev, node.next)
        };
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => match parent {
                Some(parent) => self.nodes[parent].first_child = next,
                None => self.root = None,
            },
        }
        if let Some(next) = next {
            self.nodes[next].prev = prev;
        }
    }

    /// Frees `key` and every node below it
    fn remove_subtree(&mut self, key: TreeKey) {
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                let mut child = node.first_child;
                while let Some(c) = child {
                    child = self.nodes[c].next;
                    stack.push(c);
                }
            }
        }
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    current: Option<TreeKey>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = TreeKey;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current?;
        self.current = self.tree.nodes[key].next;
        Some(key)
    }
}

/// Level-order iterator over a [`Tree`]
pub struct BreadthFirst<'a, T> {
    tree: &'a Tree<T>,
    pending: VecDeque<TreeKey>,
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.pending.pop_front()?;
        self.pending.extend(self.tree.children(key));
        Some(&self.tree.nodes[key].item)
    }
}
