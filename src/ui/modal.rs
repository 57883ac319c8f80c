use crate::models::Body;
use crate::ui::{Action, Display, ElementId, EventKind, Surface};

/// Elements making up the single detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modal {
    pub overlay: ElementId,
    pub content: ElementId,
    pub close: ElementId,
    pub details: ElementId,
}

/// Text shown in the modal for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub heading: String,
    pub rows: Vec<(String, String)>,
}

impl DetailView {
    pub fn from_body(body: &Body) -> Self {
        let moons = if body.has_moons() {
            body.moons.join(", ")
        } else {
            "None".to_string()
        };

        Self {
            heading: format!("{} ({})", body.name, body.latin_name),
            rows: vec![
                ("Description".to_string(), body.desc.clone()),
                ("Type".to_string(), body.body_type.clone()),
                ("Rotation".to_string(), format!("{} Earth days", body.rotation)),
                ("Orbital period".to_string(), format!("{} Earth days", body.orbital_period)),
                ("Distance from the sun".to_string(), format!("{} km", body.distance)),
                (
                    "Temperature".to_string(),
                    format!("Day: {}°C, Night: {}°C", body.temp.day, body.temp.night),
                ),
                ("Moons".to_string(), moons),
            ],
        }
    }

    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, value)| value.as_str())
    }
}

/// Show `body` in the detail overlay, creating the overlay on first use.
pub fn show_details<S: Surface + ?Sized>(surface: &mut S, body: &Body) -> Modal {
    let modal = match surface.find_modal() {
        Some(modal) => modal,
        None => {
            let modal = surface.create_modal();
            // Clicks on the content area target the content element, so only a
            // click outside it reaches the overlay handler.
            surface.bind(modal.close, EventKind::Activate, Action::HideModal(modal.overlay));
            surface.bind(modal.overlay, EventKind::Activate, Action::HideModal(modal.overlay));
            modal
        }
    };

    surface.set_details(modal.details, &DetailView::from_body(body));
    surface.set_display(modal.overlay, Display::Flex);
    modal
}

/// Hide the overlay; it stays in place for the next `show_details`.
pub fn hide_modal<S: Surface + ?Sized>(surface: &mut S, overlay: ElementId) {
    surface.set_display(overlay, Display::Hidden);
}
