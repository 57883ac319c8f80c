use std::collections::{BTreeMap, HashMap};

use crate::ui::{
    Action, CONTAINER_ID, DetailView, Display, ElementId, EventKind, ItemStyle, Modal, SEARCH_INPUT_ID,
    Surface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Root,
    Container,
    Input,
    Button,
    Paragraph,
    Overlay,
    ModalContent,
    CloseButton,
    Details,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub dom_id: Option<String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub text: String,
    pub name: Option<String>,
    pub class: String,
    pub display: Display,
    pub style: ItemStyle,
    pub value: String,
    pub details: Option<DetailView>,
}

impl Element {
    fn new(kind: ElementKind, parent: Option<ElementId>) -> Self {
        Self {
            kind,
            dom_id: None,
            parent,
            children: Vec::new(),
            text: String::new(),
            name: None,
            class: String::new(),
            display: Display::Flex,
            style: ItemStyle::default(),
            value: String::new(),
            details: None,
        }
    }
}

/// In-memory element tree implementing [`Surface`].
///
/// Backs the terminal front end and doubles as the surface in tests.
#[derive(Debug)]
pub struct MemorySurface {
    elements: BTreeMap<ElementId, Element>,
    bindings: HashMap<(ElementId, EventKind), Vec<Action>>,
    next_id: u64,
    root: ElementId,
    modal: Option<Modal>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// A page with the search input and the body container in place.
    pub fn new() -> Self {
        let mut surface = Self::empty();
        let root = surface.root;
        surface.insert_with_id(ElementKind::Input, root, SEARCH_INPUT_ID);
        surface.insert_with_id(ElementKind::Container, root, CONTAINER_ID);
        surface
    }

    /// A page with nothing but the root element.
    pub fn empty() -> Self {
        let root = ElementId(0);
        let mut elements = BTreeMap::new();
        elements.insert(root, Element::new(ElementKind::Root, None));
        Self {
            elements,
            bindings: HashMap::new(),
            next_id: 1,
            root,
            modal: None,
        }
    }

    fn insert(&mut self, kind: ElementKind, parent: ElementId) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::new(kind, Some(parent)));
        if let Some(parent) = self.elements.get_mut(&parent) {
            parent.children.push(id);
        }
        id
    }

    fn insert_with_id(&mut self, kind: ElementKind, parent: ElementId, dom_id: &str) -> ElementId {
        let id = self.insert(kind, parent);
        if let Some(element) = self.elements.get_mut(&id) {
            element.dom_id = Some(dom_id.to_string());
        }
        id
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let Some(element) = self.elements.remove(&id) else {
            return;
        };
        for child in element.children {
            self.remove_subtree(child);
        }
        self.bindings.retain(|(target, _), _| *target != id);
        if self.modal.is_some_and(|m| m.overlay == id) {
            self.modal = None;
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.display == Display::Flex)
    }

    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|e| e.text.as_str())
    }

    pub fn style(&self, id: ElementId) -> Option<&ItemStyle> {
        self.elements.get(&id).map(|e| &e.style)
    }

    pub fn details(&self, id: ElementId) -> Option<&DetailView> {
        self.elements.get(&id).and_then(|e| e.details.as_ref())
    }

    /// Text of the paragraph children of `parent`, if any.
    pub fn message(&self, parent: ElementId) -> Option<String> {
        let texts: Vec<&str> = self
            .children(parent)
            .into_iter()
            .filter_map(|c| self.elements.get(&c))
            .filter(|e| e.kind == ElementKind::Paragraph)
            .map(|e| e.text.as_str())
            .collect();
        if texts.is_empty() { None } else { Some(texts.join("\n")) }
    }

    pub fn count_of_kind(&self, kind: ElementKind) -> usize {
        self.elements.values().filter(|e| e.kind == kind).count()
    }

    pub fn buttons(&self, parent: ElementId) -> Vec<ElementId> {
        self.children(parent)
            .into_iter()
            .filter(|c| self.elements.get(c).is_some_and(|e| e.kind == ElementKind::Button))
            .collect()
    }

    /// First rendered item under `parent` whose name equals `name`, ignoring case.
    pub fn item_by_name(&self, parent: ElementId, name: &str) -> Option<ElementId> {
        let wanted = name.trim().to_lowercase();
        self.buttons(parent).into_iter().find(|id| {
            self.elements
                .get(id)
                .and_then(|e| e.name.as_deref())
                .is_some_and(|n| n.to_lowercase() == wanted)
        })
    }

    pub fn set_input_value(&mut self, id: ElementId, value: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.value = value.to_string();
        }
    }
}

impl Surface for MemorySurface {
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, e)| e.dom_id.as_deref() == Some(id))
            .map(|(key, _)| *key)
    }

    fn clear_children(&mut self, parent: ElementId) {
        let children = match self.elements.get_mut(&parent) {
            Some(element) => std::mem::take(&mut element.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn set_message(&mut self, parent: ElementId, text: &str) {
        self.clear_children(parent);
        let paragraph = self.insert(ElementKind::Paragraph, parent);
        if let Some(element) = self.elements.get_mut(&paragraph) {
            element.text = text.to_string();
        }
    }

    fn append_button(&mut self, parent: ElementId, label: &str, name: &str, class: &str) -> ElementId {
        let button = self.insert(ElementKind::Button, parent);
        if let Some(element) = self.elements.get_mut(&button) {
            element.text = label.to_string();
            element.name = Some(name.to_string());
            element.class = class.to_string();
        }
        button
    }

    fn children(&self, parent: ElementId) -> Vec<ElementId> {
        self.elements
            .get(&parent)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }

    fn item_name(&self, element: ElementId) -> Option<String> {
        self.elements.get(&element).and_then(|e| e.name.clone())
    }

    fn set_display(&mut self, element: ElementId, display: Display) {
        if let Some(element) = self.elements.get_mut(&element) {
            element.display = display;
        }
    }

    fn set_style(&mut self, element: ElementId, style: ItemStyle) {
        if let Some(element) = self.elements.get_mut(&element) {
            element.style = style;
        }
    }

    fn input_value(&self, element: ElementId) -> String {
        self.elements
            .get(&element)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn find_modal(&self) -> Option<Modal> {
        self.modal.filter(|m| self.contains(m.overlay))
    }

    fn create_modal(&mut self) -> Modal {
        let overlay = self.insert(ElementKind::Overlay, self.root);
        let content = self.insert(ElementKind::ModalContent, overlay);
        let close = self.insert(ElementKind::CloseButton, content);
        let details = self.insert(ElementKind::Details, content);

        if let Some(element) = self.elements.get_mut(&overlay) {
            element.class = "modal".to_string();
            element.display = Display::Hidden;
        }
        if let Some(element) = self.elements.get_mut(&close) {
            element.text = "×".to_string();
            element.class = "modal-close".to_string();
        }
        if let Some(element) = self.elements.get_mut(&details) {
            element.dom_id = Some("modal-details".to_string());
        }

        let modal = Modal { overlay, content, close, details };
        self.modal = Some(modal);
        modal
    }

    fn set_details(&mut self, details: ElementId, view: &DetailView) {
        if let Some(element) = self.elements.get_mut(&details) {
            element.details = Some(view.clone());
        }
    }

    fn bind(&mut self, element: ElementId, kind: EventKind, action: Action) {
        if self.contains(element) {
            self.bindings.entry((element, kind)).or_default().push(action);
        }
    }

    fn handlers(&self, element: ElementId, kind: EventKind) -> Vec<Action> {
        self.bindings.get(&(element, kind)).cloned().unwrap_or_default()
    }
}
