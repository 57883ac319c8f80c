// Viewer module - drives key fetch, body fetch and rendering, then reacts to UI events
use tracing::{debug, error, info, warn};

use crate::client::{BodySource, Credential};
use crate::config::DisplayConfig;
use crate::error::{Result, ViewerError};
use crate::models::Body;
use crate::ui::filter::apply_filter;
use crate::ui::modal::{hide_modal, show_details};
use crate::ui::render::{highlight_style, render_bodies};
use crate::ui::{Action, CONTAINER_ID, ElementId, EventKind, ItemStyle, Modal, SEARCH_INPUT_ID, Surface};

pub const INIT_FAILED_MESSAGE: &str = "Initialization failed. Please try again later.";
pub const BODIES_FAILED_MESSAGE: &str = "Failed to load planets. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    KeyFetching,
    KeyFetched,
    KeyFailed,
    BodiesFetching,
    Rendered,
    BodiesFailed,
}

pub struct Viewer<S: Surface> {
    surface: S,
    display: DisplayConfig,
    container: ElementId,
    search_input: ElementId,
    bodies: Vec<Body>,
    state: LoadState,
}

impl<S: Surface> Viewer<S> {
    /// Attach to a surface that already has the search input and container.
    pub fn new(mut surface: S, display: DisplayConfig) -> Result<Self> {
        let search_input = surface
            .element_by_id(SEARCH_INPUT_ID)
            .ok_or(ViewerError::MissingElement(SEARCH_INPUT_ID))?;
        let container = surface
            .element_by_id(CONTAINER_ID)
            .ok_or(ViewerError::MissingElement(CONTAINER_ID))?;

        surface.bind(search_input, EventKind::Input, Action::FilterBodies);

        Ok(Self {
            surface,
            display,
            container,
            search_input,
            bodies: Vec::new(),
            state: LoadState::Idle,
        })
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn search_input(&self) -> ElementId {
        self.search_input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Fetch a key, then the bodies, then render them.
    ///
    /// Failures are logged and shown in the container; the returned state says
    /// where the pipeline stopped.
    pub async fn start(&mut self, source: &dyn BodySource) -> LoadState {
        info!("🚀 Fetching API key...");
        self.state = LoadState::KeyFetching;

        let credential = match source.fetch_key().await {
            Ok(credential) => {
                self.state = LoadState::KeyFetched;
                credential
            }
            Err(e) => {
                error!("❌ Initialization failed: {}", e);
                self.state = LoadState::KeyFailed;
                self.bodies.clear();
                self.surface.set_message(self.container, INIT_FAILED_MESSAGE);
                return self.state;
            }
        };

        // Already logged and displayed on failure
        let _ = self.load_bodies(source, Some(&credential)).await;
        self.state
    }

    /// Fetch and render the body list with `credential`.
    ///
    /// Without a credential nothing is requested or changed.
    pub async fn load_bodies(&mut self, source: &dyn BodySource, credential: Option<&Credential>) -> Result<usize> {
        let Some(credential) = credential else {
            error!("❌ API key missing, cannot fetch bodies");
            return Err(ViewerError::MissingCredential);
        };

        info!("🪐 Fetching bodies...");
        self.state = LoadState::BodiesFetching;

        match source.fetch_bodies(credential).await {
            Ok(bodies) => {
                let count = bodies.len();
                self.render(bodies);
                self.state = LoadState::Rendered;
                info!("✅ Rendered {} bodies", count);
                Ok(count)
            }
            Err(e) => {
                error!("❌ Failed to fetch bodies: {}", e);
                self.bodies.clear();
                self.surface.set_message(self.container, BODIES_FAILED_MESSAGE);
                self.state = LoadState::BodiesFailed;
                Err(e)
            }
        }
    }

    /// Replace whatever is rendered with `bodies`.
    pub fn render(&mut self, bodies: Vec<Body>) -> Vec<ElementId> {
        let items = render_bodies(&mut self.surface, self.container, &bodies);
        self.bodies = bodies;
        items
    }

    /// Run every handler registered for `kind` on `element`.
    pub fn dispatch(&mut self, element: ElementId, kind: EventKind) -> usize {
        let actions = self.surface.handlers(element, kind);
        if actions.is_empty() {
            debug!("No handler for {:?} on {:?}", kind, element);
        }
        for action in &actions {
            self.perform(action);
        }
        actions.len()
    }

    fn perform(&mut self, action: &Action) {
        match *action {
            Action::Highlight(item) => {
                self.surface.set_style(item, highlight_style(&self.display));
            }
            Action::ClearHighlight(item) => {
                self.surface.set_style(item, ItemStyle::default());
            }
            Action::ShowDetails(index) => {
                self.open_details(index);
            }
            Action::HideModal(overlay) => {
                hide_modal(&mut self.surface, overlay);
            }
            Action::FilterBodies => {
                self.filter();
            }
        }
    }

    pub fn open_details(&mut self, index: usize) -> Option<Modal> {
        match self.bodies.get(index) {
            Some(body) => {
                debug!("🔭 Showing details for {}", body.name);
                Some(show_details(&mut self.surface, body))
            }
            None => {
                warn!("⚠️ No rendered body at index {}", index);
                None
            }
        }
    }

    /// Filter the rendered items by the current search input value.
    pub fn filter(&mut self) -> usize {
        let query = self.surface.input_value(self.search_input);
        let visible = apply_filter(&mut self.surface, self.container, &query);
        debug!("🔍 Filter {:?}: {} visible", query, visible);
        visible
    }
}
