//! N-ary category tree with a name registry.
//!
//! ## Design
//!
//! - Nodes live in a `Slab`; a node's children are slab keys in insertion order
//! - The registry (`HashMap`) maps a name to the slab key of its node and is
//!   the single source of truth for existence checks (O(1) parent lookup)
//! - Parents are not stored; a node is reachable only by walking from the root
//! - Walks use an explicit stack, so depth is bounded by memory rather than
//!   by the thread stack
//!
//! ## Registry Semantics
//!
//! Adding a name that is already registered creates a fresh node and
//! repoints the registry at it. The earlier node stays linked wherever it
//! was, but can no longer be found by name. Adding under an unknown parent
//! registers the node and then reports [`CategoryError::InvalidParent`]; the
//! node is left unlinked. Both cases produce nodes that [`CategoryTree::orphans`]
//! reports.
//!
//! ## Example
//!
//! ```
//! use stockroom::collections::CategoryTree;
//!
//! let mut tree = CategoryTree::new();
//! tree.add("Comics", None).unwrap();
//! tree.add("Marvel", Some("Comics")).unwrap();
//! tree.add("X-Men", Some("Marvel")).unwrap();
//!
//! assert_eq!(tree.list_subcategories("Comics"), vec!["Comics", "Marvel", "X-Men"]);
//! ```

use std::collections::HashMap;

use slab::Slab;

use crate::error::CategoryError;

/// Slab key of a category node
pub type CategoryId = usize;

/// A category and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    /// Category name (registry key)
    pub name: String,

    /// Child node keys, in insertion order
    pub children: Vec<CategoryId>,
}

impl CategoryNode {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }
}

/// Hierarchical category tree.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    /// Node arena
    nodes: Slab<CategoryNode>,

    /// First node added without a parent
    root: Option<CategoryId>,

    /// Name to node key
    registry: HashMap<String, CategoryId>,
}

impl Default for CategoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTree {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            registry: HashMap::new(),
        }
    }

    /// Number of registered names
    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.registry.is_empty()
    }

    /// Borrow the root node
    pub fn root(&self) -> Option<&CategoryNode> {
        self.root.map(|key| &self.nodes[key])
    }

    /// Borrow a node by the id returned from [`Self::add`]
    ///
    /// # Arguments
    ///
    /// * `id` - Slab key of the node, also found in [`CategoryNode::children`]
    #[inline]
    pub fn node(&self, id: CategoryId) -> Option<&CategoryNode> {
        self.nodes.get(id)
    }

    /// Add a category
    ///
    /// - Without a parent, the first such node becomes the root and later
    ///   ones become children of the root.
    /// - With a parent, the node is appended to that parent's children.
    ///
    /// # Arguments
    ///
    /// * `name` - Category name; re-using a name repoints the registry
    /// * `parent` - Name of an already registered category, if any
    ///
    /// # Errors
    ///
    /// [`CategoryError::InvalidParent`] if `parent` is not registered. The
    /// new node is registered by name anyway but not linked into the tree.
    pub fn add(&mut self, name: &str, parent: Option<&str>) -> Result<CategoryId, CategoryError> {
        // Resolve before registering so a node can never become its own parent
        let parent_key = parent.map(|parent_name| self.registry.get(parent_name).copied());

        let key = self.nodes.insert(CategoryNode::new(name.to_string()));
        self.registry.insert(name.to_string(), key);

        match (parent, parent_key.flatten()) {
            (None, _) => match self.root {
                None => self.root = Some(key),
                Some(root) => self.nodes[root].children.push(key),
            },
            (Some(_), Some(parent_key)) => self.nodes[parent_key].children.push(key),
            (Some(parent_name), None) => {
                return Err(CategoryError::InvalidParent {
                    name: name.to_string(),
                    parent: parent_name.to_string(),
                });
            }
        }

        Ok(key)
    }

    /// Look up a category by name - O(1) average
    pub fn search(&self, name: &str) -> Option<&CategoryNode> {
        self.registry.get(name).map(|&key| &self.nodes[key])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Names of the direct children of a category
    pub fn children(&self, name: &str) -> Option<Vec<&str>> {
        let node = self.search(name)?;
        Some(
            node.children
                .iter()
                .map(|&child| self.nodes[child].name.as_str())
                .collect(),
        )
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Pre-order `(depth, name)` lines starting at the root
    pub fn display(&self) -> Vec<(usize, &str)> {
        self.root
            .map(|root| self.lines_from(root))
            .unwrap_or_default()
    }

    /// Pre-order `(depth, name)` lines starting at a named category
    ///
    /// Depth is relative to that category. Unknown names yield no lines.
    pub fn display_from(&self, name: &str) -> Vec<(usize, &str)> {
        self.registry
            .get(name)
            .map(|&key| self.lines_from(key))
            .unwrap_or_default()
    }

    /// Indented text form of the whole tree
    ///
    /// # Example
    ///
    /// ```
    /// use stockroom::collections::CategoryTree;
    ///
    /// let mut tree = CategoryTree::new();
    /// assert_eq!(tree.render(), "(empty)");
    ///
    /// tree.add("Comics", None).unwrap();
    /// tree.add("Manga", Some("Comics")).unwrap();
    /// assert_eq!(tree.render(), "├─ Comics\n  ├─ Manga");
    /// ```
    pub fn render(&self) -> String {
        let lines = self.display();
        if lines.is_empty() {
            return "(empty)".to_string();
        }

        lines
            .iter()
            .map(|(depth, name)| format!("{}├─ {}", "  ".repeat(*depth), name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The category itself followed by all descendants, in pre-order
    ///
    /// Returns an empty list for unknown names.
    pub fn list_subcategories(&self, name: &str) -> Vec<&str> {
        let Some(&key) = self.registry.get(name) else {
            return Vec::new();
        };

        let mut names = Vec::new();
        self.walk(key, |_, _, node| names.push(node.name.as_str()));
        names
    }

    /// Registered names whose node cannot be reached from the root, sorted
    pub fn orphans(&self) -> Vec<&str> {
        let mut reachable = vec![false; self.nodes.capacity()];
        if let Some(root) = self.root {
            self.walk(root, |key, _, _| reachable[key] = true);
        }

        let mut names: Vec<&str> = self
            .registry
            .iter()
            .filter(|(_, key)| !reachable.get(**key).copied().unwrap_or(false))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    fn lines_from(&self, start: CategoryId) -> Vec<(usize, &str)> {
        let mut lines = Vec::new();
        self.walk(start, |_, depth, node| lines.push((depth, node.name.as_str())));
        lines
    }

    /// Pre-order walk from `start`, calling `visit(key, depth, node)`.
    ///
    /// Children are pushed in reverse so they pop in insertion order.
    fn walk<'a, F>(&'a self, start: CategoryId, mut visit: F)
    where
        F: FnMut(CategoryId, usize, &'a CategoryNode),
    {
        let mut pending: Vec<(CategoryId, usize)> = vec![(start, 0)];
        while let Some((key, depth)) = pending.pop() {
            let node = &self.nodes[key];
            visit(key, depth, node);
            pending.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
