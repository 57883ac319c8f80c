// UI module - abstract presentation surface plus the renderer, modal and filter built on it
pub mod filter;
pub mod memory;
pub mod modal;
pub mod render;
pub mod terminal;

pub use memory::MemorySurface;
pub use modal::{DetailView, Modal};

/// Identifier of the search input the surface must provide.
pub const SEARCH_INPUT_ID: &str = "searchInput";
/// Identifier of the container the body items are rendered into.
pub const CONTAINER_ID: &str = "planet-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    /// Click, tap or keyboard activation
    Activate,
    /// Value of an input element changed
    Input,
}

/// What a registered handler does when its event fires.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Highlight(ElementId),
    ClearHighlight(ElementId),
    /// Open the detail modal for the body at this index of the rendered list
    ShowDetails(usize),
    HideModal(ElementId),
    FilterBodies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Flex,
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    pub scale: f64,
    pub glow: Option<String>,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self { scale: 1.0, glow: None }
    }
}

/// Capabilities the viewer needs from whatever renders it.
///
/// Elements are addressed by [`ElementId`]. Handlers are plain [`Action`]
/// values registered per element and event; the surface only stores them and
/// hands them back in [`Surface::handlers`] when an event targets that exact
/// element. Removing an element drops its handlers.
pub trait Surface {
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Remove every child of `parent`, recursively.
    fn clear_children(&mut self, parent: ElementId);

    /// Replace every child of `parent` with a single text paragraph.
    fn set_message(&mut self, parent: ElementId, text: &str);

    /// Append a button labelled `label`; `name` is the value the filter matches on.
    fn append_button(&mut self, parent: ElementId, label: &str, name: &str, class: &str) -> ElementId;

    fn children(&self, parent: ElementId) -> Vec<ElementId>;

    /// Name stored on an item by [`Surface::append_button`].
    fn item_name(&self, element: ElementId) -> Option<String>;

    fn set_display(&mut self, element: ElementId, display: Display);

    fn set_style(&mut self, element: ElementId, style: ItemStyle);

    fn input_value(&self, element: ElementId) -> String;

    /// The modal overlay created by an earlier [`Surface::create_modal`], if any.
    fn find_modal(&self) -> Option<Modal>;

    /// Create a hidden modal overlay with a close control and a details area.
    fn create_modal(&mut self) -> Modal;

    fn set_details(&mut self, details: ElementId, view: &DetailView);

    fn bind(&mut self, element: ElementId, kind: EventKind, action: Action);

    fn handlers(&self, element: ElementId, kind: EventKind) -> Vec<Action>;
}
