use crate::config::DisplayConfig;
use crate::models::Body;
use crate::ui::{Action, ElementId, EventKind, ItemStyle, Surface};

/// Replace the container's children with one button per body.
///
/// Each button gets hover highlight handlers and an activation handler that
/// opens the detail modal for the body at the same index of `bodies`.
pub fn render_bodies<S: Surface + ?Sized>(surface: &mut S, container: ElementId, bodies: &[Body]) -> Vec<ElementId> {
    surface.clear_children(container);

    bodies
        .iter()
        .enumerate()
        .map(|(index, body)| {
            let button = surface.append_button(container, &body.name, &body.name, &body.css_class());
            surface.bind(button, EventKind::PointerEnter, Action::Highlight(button));
            surface.bind(button, EventKind::PointerLeave, Action::ClearHighlight(button));
            surface.bind(button, EventKind::Activate, Action::ShowDetails(index));
            button
        })
        .collect()
}

pub fn highlight_style(display: &DisplayConfig) -> ItemStyle {
    ItemStyle {
        scale: display.highlight_scale,
        glow: Some(display.highlight_glow.clone()),
    }
}
