//! Modal lifecycle: opening tile detail surfaces and closing every active
//! one, reversing any node relocation that escaping a clipping ancestor
//! required.

use crate::model::{GenericContent, LinkKind, TileDescriptor};

/// Seam between the lifecycle state machine and the page it manipulates.
/// The browser implementation lives in `dom::PageHost`; tests drive a toy
/// tree instead.
pub trait ModalHost {
    type Node: Clone;

    /// Opens a URL in a new browsing context.
    fn open_url(&mut self, url: &str);
    /// The modal surface nested inside the clicked tile, if it owns one.
    fn find_custom_surface(&mut self, tile: &Self::Node) -> Option<Self::Node>;
    /// Stable id of the node's current parent, synthesizing and assigning a
    /// token when the parent has none. `None` when the node is parentless.
    fn ensure_parent_id(&mut self, node: &Self::Node) -> Option<String>;
    /// Records `parent_id` on the node itself, then moves it to the
    /// document root so no ancestor can clip or stack below it.
    fn relocate_to_root(&mut self, node: &Self::Node, parent_id: Option<&str>);
    /// Moves the node back under the parent carrying `parent_id` and clears
    /// the recorded marker. Returns false when no such parent exists.
    fn restore(&mut self, node: &Self::Node, parent_id: &str) -> bool;
    fn set_active(&mut self, node: &Self::Node, active: bool);
    fn show_generic(&mut self, content: &GenericContent);
    fn hide_generic(&mut self);
    /// Suspends or resumes background scrolling of the page.
    fn set_scroll_suspended(&mut self, suspended: bool);
}

/// Bookkeeping for one relocated custom modal.
#[derive(Clone, Debug)]
pub struct Relocation<N> {
    pub node: N,
    pub original_parent_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    OpenedUrl,
    CustomShown,
    GenericShown,
}

/// Tracks every surface currently shown: at most one generic modal plus an
/// arbitrary set of relocated custom modals. Callers need not serialize
/// opens; `close_all` unwinds whatever accumulated.
#[derive(Debug, Default)]
pub struct ModalManager<N> {
    generic_open: bool,
    relocations: Vec<Relocation<N>>,
}

impl<N: Clone + PartialEq> ModalManager<N> {
    pub fn new() -> Self {
        Self {
            generic_open: false,
            relocations: Vec::new(),
        }
    }

    pub fn has_active(&self) -> bool {
        self.generic_open || !self.relocations.is_empty()
    }

    /// Handles a tile activation. External links leave modal state
    /// untouched; a `Modal` tile without a discoverable surface falls back
    /// to the generic modal, which only needs a title to succeed.
    pub fn open<H: ModalHost<Node = N>>(
        &mut self,
        host: &mut H,
        tile: &N,
        desc: &TileDescriptor,
    ) -> OpenOutcome {
        if desc.link_kind == LinkKind::External {
            if let Some(url) = desc.target_url.as_deref() {
                host.open_url(url);
                return OpenOutcome::OpenedUrl;
            }
        }
        if desc.link_kind == LinkKind::Modal {
            if let Some(surface) = host.find_custom_surface(tile) {
                // At most one relocation boundary per surface: re-opening an
                // already-relocated modal must not stack a second record.
                if self.relocations.iter().any(|r| r.node == surface) {
                    return OpenOutcome::CustomShown;
                }
                let parent_id = host.ensure_parent_id(&surface);
                host.relocate_to_root(&surface, parent_id.as_deref());
                host.set_active(&surface, true);
                host.set_scroll_suspended(true);
                self.relocations.push(Relocation {
                    node: surface,
                    original_parent_id: parent_id,
                });
                return OpenOutcome::CustomShown;
            }
        }
        host.show_generic(&GenericContent::from_descriptor(desc));
        host.set_scroll_suspended(true);
        self.generic_open = true;
        OpenOutcome::GenericShown
    }

    /// Closes every active modal. A no-op when nothing is open; otherwise
    /// each relocation is reversed (a stale parent id skips that node only)
    /// and scroll suspension is lifted once at the end.
    pub fn close_all<H: ModalHost<Node = N>>(&mut self, host: &mut H) {
        if !self.has_active() {
            return;
        }
        if self.generic_open {
            host.hide_generic();
            self.generic_open = false;
        }
        for rel in self.relocations.drain(..) {
            host.set_active(&rel.node, false);
            if let Some(id) = rel.original_parent_id.as_deref() {
                let _ = host.restore(&rel.node, id);
            }
        }
        host.set_scroll_suspended(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TileCategory;
    use std::collections::{HashMap, HashSet};

    type Node = usize;

    /// Toy document: integer nodes, an id-keyed wrapper map and a root list.
    #[derive(Default)]
    struct FakeHost {
        parent_of: HashMap<Node, Node>,
        wrapper_ids: HashMap<Node, String>,
        /// Relocation marker recorded on the node itself.
        markers: HashMap<Node, String>,
        root_children: Vec<Node>,
        surfaces: HashMap<Node, Node>,
        active: HashSet<Node>,
        generic: Option<GenericContent>,
        opened_urls: Vec<String>,
        scroll_suspended: bool,
        next_token: usize,
    }

    impl FakeHost {
        fn with_tile_surface(tile: Node, wrapper: Node, surface: Node) -> Self {
            let mut host = Self::default();
            host.add_tile_surface(tile, wrapper, surface);
            host
        }

        fn add_tile_surface(&mut self, tile: Node, wrapper: Node, surface: Node) {
            self.parent_of.insert(wrapper, tile);
            self.parent_of.insert(surface, wrapper);
            self.surfaces.insert(tile, surface);
        }

        fn parent_matching(&self, id: &str) -> Option<Node> {
            self.wrapper_ids
                .iter()
                .find(|(_, v)| v.as_str() == id)
                .map(|(k, _)| *k)
        }
    }

    impl ModalHost for FakeHost {
        type Node = Node;

        fn open_url(&mut self, url: &str) {
            self.opened_urls.push(url.to_string());
        }

        fn find_custom_surface(&mut self, tile: &Node) -> Option<Node> {
            self.surfaces.get(tile).copied()
        }

        fn ensure_parent_id(&mut self, node: &Node) -> Option<String> {
            let parent = *self.parent_of.get(node)?;
            if let Some(id) = self.wrapper_ids.get(&parent) {
                return Some(id.clone());
            }
            self.next_token += 1;
            let id = format!("wrap-{}", self.next_token);
            self.wrapper_ids.insert(parent, id.clone());
            Some(id)
        }

        fn relocate_to_root(&mut self, node: &Node, parent_id: Option<&str>) {
            if let Some(id) = parent_id {
                self.markers.insert(*node, id.to_string());
            }
            self.parent_of.remove(node);
            self.root_children.push(*node);
        }

        fn restore(&mut self, node: &Node, parent_id: &str) -> bool {
            let Some(parent) = self.parent_matching(parent_id) else {
                return false;
            };
            self.root_children.retain(|n| n != node);
            self.parent_of.insert(*node, parent);
            self.markers.remove(node);
            true
        }

        fn set_active(&mut self, node: &Node, active: bool) {
            if active {
                self.active.insert(*node);
            } else {
                self.active.remove(node);
            }
        }

        fn show_generic(&mut self, content: &GenericContent) {
            self.generic = Some(content.clone());
        }

        fn hide_generic(&mut self) {
            self.generic = None;
        }

        fn set_scroll_suspended(&mut self, suspended: bool) {
            self.scroll_suspended = suspended;
        }
    }

    fn descriptor(kind: LinkKind, url: Option<&str>) -> TileDescriptor {
        TileDescriptor {
            title: "Info".into(),
            description: "Details".into(),
            category: TileCategory::Info,
            link_kind: kind,
            target_url: url.map(str::to_string),
            icon_glyph: "i".into(),
            icon_color: String::new(),
            hidden: false,
        }
    }

    #[test]
    fn custom_modal_round_trip_restores_wrapper() {
        let (tile, wrapper, surface) = (1, 2, 3);
        let mut host = FakeHost::with_tile_surface(tile, wrapper, surface);
        let mut mgr = ModalManager::new();

        let outcome = mgr.open(&mut host, &tile, &descriptor(LinkKind::Modal, None));
        assert_eq!(outcome, OpenOutcome::CustomShown);
        assert!(host.root_children.contains(&surface));
        assert!(host.active.contains(&surface));
        assert!(host.scroll_suspended);
        // The wrapper got a synthesized id and the node carries it.
        let id = host.wrapper_ids.get(&wrapper).cloned().unwrap();
        assert_eq!(host.markers.get(&surface), Some(&id));

        mgr.close_all(&mut host);
        assert_eq!(host.parent_of.get(&surface), Some(&wrapper));
        assert!(!host.root_children.contains(&surface));
        assert!(host.markers.get(&surface).is_none());
        assert!(!host.active.contains(&surface));
        assert!(!host.scroll_suspended);
        assert!(!mgr.has_active());
    }

    #[test]
    fn close_with_nothing_active_is_a_no_op() {
        let mut host = FakeHost::default();
        let mut mgr: ModalManager<Node> = ModalManager::new();
        mgr.close_all(&mut host);
        assert!(!host.scroll_suspended);
        assert!(host.generic.is_none());
    }

    #[test]
    fn modal_kind_without_surface_falls_back_to_generic() {
        let mut host = FakeHost::default();
        let mut mgr = ModalManager::new();

        let outcome = mgr.open(&mut host, &7, &descriptor(LinkKind::Modal, None));
        assert_eq!(outcome, OpenOutcome::GenericShown);
        let shown = host.generic.as_ref().unwrap();
        assert_eq!(shown.title, "Info");
        assert_eq!(shown.description, "Details");
        assert!(host.scroll_suspended);

        mgr.close_all(&mut host);
        assert!(host.generic.is_none());
        assert!(!host.scroll_suspended);
    }

    #[test]
    fn external_link_opens_url_without_modal_state() {
        let mut host = FakeHost::with_tile_surface(1, 2, 3);
        let mut mgr = ModalManager::new();

        let desc = descriptor(LinkKind::External, Some("https://example.com"));
        let outcome = mgr.open(&mut host, &1, &desc);
        assert_eq!(outcome, OpenOutcome::OpenedUrl);
        assert_eq!(host.opened_urls, vec!["https://example.com".to_string()]);
        assert!(host.generic.is_none());
        assert!(host.root_children.is_empty());
        assert!(!host.scroll_suspended);
        assert!(!mgr.has_active());
    }

    #[test]
    fn external_link_without_url_falls_back_to_generic() {
        let mut host = FakeHost::default();
        let mut mgr = ModalManager::new();
        let outcome = mgr.open(&mut host, &1, &descriptor(LinkKind::External, None));
        assert_eq!(outcome, OpenOutcome::GenericShown);
        assert!(host.opened_urls.is_empty());
    }

    #[test]
    fn other_link_kind_opens_generic() {
        let mut host = FakeHost::default();
        let mut mgr = ModalManager::new();
        let desc = descriptor(LinkKind::Other, Some("https://example.com"));
        assert_eq!(mgr.open(&mut host, &1, &desc), OpenOutcome::GenericShown);
        assert!(host.opened_urls.is_empty());
    }

    #[test]
    fn unserialized_opens_all_restore_to_their_own_wrappers() {
        let mut host = FakeHost::with_tile_surface(1, 2, 3);
        host.add_tile_surface(4, 5, 6);
        let mut mgr = ModalManager::new();

        mgr.open(&mut host, &1, &descriptor(LinkKind::Modal, None));
        mgr.open(&mut host, &4, &descriptor(LinkKind::Modal, None));
        assert_eq!(host.root_children, vec![3, 6]);

        mgr.close_all(&mut host);
        assert_eq!(host.parent_of.get(&3), Some(&2));
        assert_eq!(host.parent_of.get(&6), Some(&5));
        assert!(host.root_children.is_empty());
        assert!(!host.scroll_suspended);
    }

    #[test]
    fn reopening_an_open_tile_keeps_a_single_relocation() {
        let (tile, wrapper, surface) = (1, 2, 3);
        let mut host = FakeHost::with_tile_surface(tile, wrapper, surface);
        let mut mgr = ModalManager::new();

        mgr.open(&mut host, &tile, &descriptor(LinkKind::Modal, None));
        mgr.open(&mut host, &tile, &descriptor(LinkKind::Modal, None));
        assert_eq!(host.root_children, vec![surface]);

        mgr.close_all(&mut host);
        assert_eq!(host.parent_of.get(&surface), Some(&wrapper));
        assert!(!mgr.has_active());
    }

    #[test]
    fn stale_parent_id_skips_that_node_only() {
        let mut host = FakeHost::with_tile_surface(1, 2, 3);
        host.add_tile_surface(4, 5, 6);
        let mut mgr = ModalManager::new();

        mgr.open(&mut host, &1, &descriptor(LinkKind::Modal, None));
        mgr.open(&mut host, &4, &descriptor(LinkKind::Modal, None));
        // First wrapper loses its id before close.
        host.wrapper_ids.remove(&2);

        mgr.close_all(&mut host);
        // Surface 3 stays where it is; surface 6 still went home.
        assert!(host.root_children.contains(&3));
        assert_eq!(host.parent_of.get(&6), Some(&5));
        assert!(!host.active.contains(&3));
        assert!(!host.scroll_suspended);
    }
}
