//! View subtree search

/// A node of a host view tree
pub trait ViewNode: Sized {
    fn children(&self) -> &[Self];

    fn children_mut(&mut self) -> &mut [Self];

    fn is_scrollable(&self) -> bool;
}

/// First scrollable node in depth-first pre-order, `root` included
pub fn find_scrollable<N: ViewNode>(root: &N) -> Option<&N> {
    if root.is_scrollable() {
        return Some(root);
    }
    root.children().iter().find_map(find_scrollable)
}

/// Mutable variant of [`find_scrollable`]
pub fn find_scrollable_mut<N: ViewNode>(root: &mut N) -> Option<&mut N> {
    if root.is_scrollable() {
        return Some(root);
    }
    for child in root.children_mut() {
        if let Some(found) = find_scrollable_mut(child) {
            return Some(found);
        }
    }
    None
}
