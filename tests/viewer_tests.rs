use async_trait::async_trait;
use planet_browser::config::DisplayConfig;
use planet_browser::ui::memory::ElementKind;
use planet_browser::ui::terminal::{self, Command};
use planet_browser::ui::{ElementId, EventKind, Surface};
use planet_browser::viewer::BODIES_FAILED_MESSAGE;
use planet_browser::{Body, BodySource, Credential, LoadState, MemorySurface, Temperature, Viewer, ViewerError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Viewer behaviour against an in-memory body source and surface
struct FakeSource {
    key_status: Option<u16>,
    bodies: Result<Vec<Body>, String>,
    key_calls: AtomicUsize,
    body_calls: AtomicUsize,
}

impl FakeSource {
    fn with_bodies(bodies: Vec<Body>) -> Self {
        Self {
            key_status: None,
            bodies: Ok(bodies),
            key_calls: AtomicUsize::new(0),
            body_calls: AtomicUsize::new(0),
        }
    }

    fn failing_key(status: u16) -> Self {
        Self {
            key_status: Some(status),
            ..Self::with_bodies(vec![body("Mars", &[])])
        }
    }

    fn malformed_bodies() -> Self {
        Self {
            bodies: Err("`bodies` is not an array".to_string()),
            ..Self::with_bodies(Vec::new())
        }
    }
}

#[async_trait]
impl BodySource for FakeSource {
    async fn fetch_key(&self) -> planet_browser::Result<Credential> {
        self.key_calls.fetch_add(1, Ordering::SeqCst);
        match self.key_status {
            Some(status) => Err(ViewerError::Request { status }),
            None => Ok(Credential::new("test-key")),
        }
    }

    async fn fetch_bodies(&self, credential: &Credential) -> planet_browser::Result<Vec<Body>> {
        assert_eq!(credential.as_str(), "test-key");
        self.body_calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.clone().map_err(ViewerError::Format)
    }
}

fn body(name: &str, moons: &[&str]) -> Body {
    Body {
        name: name.to_string(),
        latin_name: format!("{}us", name),
        desc: format!("About {}.", name),
        body_type: "planet".to_string(),
        rotation: 1.0,
        orbital_period: 365.0,
        distance: 149600000.0,
        temp: Temperature { day: 20.0, night: 10.0 },
        moons: moons.iter().map(|m| m.to_string()).collect(),
    }
}

fn planets() -> Vec<Body> {
    vec![
        body("Mercury", &[]),
        body("Venus", &[]),
        body("Earth", &["Moon"]),
        body("Mars", &["Phobos", "Deimos"]),
    ]
}

fn viewer() -> Viewer<MemorySurface> {
    Viewer::new(MemorySurface::new(), DisplayConfig::default()).expect("Failed to attach viewer")
}

fn labels(viewer: &Viewer<MemorySurface>) -> Vec<String> {
    let surface = viewer.surface();
    surface
        .buttons(viewer.container())
        .into_iter()
        .filter_map(|b| surface.label(b).map(str::to_string))
        .collect()
}

fn visible_labels(viewer: &Viewer<MemorySurface>) -> Vec<String> {
    let surface = viewer.surface();
    surface
        .buttons(viewer.container())
        .into_iter()
        .filter(|b| surface.is_visible(*b))
        .filter_map(|b| surface.label(b).map(str::to_string))
        .collect()
}

fn item(viewer: &Viewer<MemorySurface>, name: &str) -> ElementId {
    viewer
        .surface()
        .item_by_name(viewer.container(), name)
        .expect("item not rendered")
}

fn search(viewer: &mut Viewer<MemorySurface>, text: &str) {
    let input = viewer.search_input();
    viewer.surface_mut().set_input_value(input, text);
    viewer.dispatch(input, EventKind::Input);
}

#[tokio::test]
async fn test_key_failure_skips_body_fetch() {
    let source = FakeSource::failing_key(403);
    let mut viewer = viewer();

    assert_eq!(viewer.start(&source).await, LoadState::KeyFailed);
    assert_eq!(source.key_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.body_calls.load(Ordering::SeqCst), 0);
    assert!(labels(&viewer).is_empty());
}

#[tokio::test]
async fn test_malformed_bodies_show_error_and_no_items() {
    let source = FakeSource::malformed_bodies();
    let mut viewer = viewer();
    viewer.render(planets());

    assert_eq!(viewer.start(&source).await, LoadState::BodiesFailed);
    assert!(labels(&viewer).is_empty());
    assert!(viewer.bodies().is_empty());
    assert_eq!(
        viewer.surface().message(viewer.container()).as_deref(),
        Some(BODIES_FAILED_MESSAGE)
    );
}

#[tokio::test]
async fn test_search_after_failure_keeps_error_message() {
    let source = FakeSource::malformed_bodies();
    let mut viewer = viewer();
    assert_eq!(viewer.start(&source).await, LoadState::BodiesFailed);

    search(&mut viewer, "mars");

    let container = viewer.container();
    let children = viewer.surface().children(container);
    assert_eq!(children.len(), 1);
    assert!(viewer.surface().is_visible(children[0]), "error message hidden by search");
    assert_eq!(viewer.surface().message(container).as_deref(), Some(BODIES_FAILED_MESSAGE));
    assert!(terminal::render_page(&viewer).contains(BODIES_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_missing_credential_has_no_side_effects() {
    let source = FakeSource::with_bodies(planets());
    let mut viewer = viewer();

    let result = viewer.load_bodies(&source, None).await;
    assert!(matches!(result, Err(ViewerError::MissingCredential)));
    assert_eq!(source.body_calls.load(Ordering::SeqCst), 0);
    assert_eq!(viewer.state(), LoadState::Idle);
    assert!(viewer.surface().children(viewer.container()).is_empty());
}

#[tokio::test]
async fn test_renders_one_item_per_body() {
    let source = FakeSource::with_bodies(planets());
    let mut viewer = viewer();

    assert_eq!(viewer.start(&source).await, LoadState::Rendered);
    assert_eq!(labels(&viewer), vec!["Mercury", "Venus", "Earth", "Mars"]);

    let earth = item(&viewer, "Earth");
    let element = viewer.surface().element(earth).unwrap();
    assert_eq!(element.class, "planet earth");
    assert_eq!(viewer.surface().item_name(earth).as_deref(), Some("Earth"));
}

#[test]
fn test_rerender_replaces_previous_items() {
    let mut viewer = viewer();
    viewer.render(planets());
    let old_earth = item(&viewer, "Earth");

    viewer.render(vec![body("Jupiter", &["Io"]), body("Saturn", &["Titan"])]);
    assert_eq!(labels(&viewer), vec!["Jupiter", "Saturn"]);
    assert!(!viewer.surface().contains(old_earth));
    assert!(viewer.surface().handlers(old_earth, EventKind::Activate).is_empty());
}

#[test]
fn test_filter_matches_case_insensitive_substring() {
    let mut viewer = viewer();
    viewer.render(planets());

    search(&mut viewer, "  EAR ");
    assert_eq!(visible_labels(&viewer), vec!["Earth"]);

    search(&mut viewer, "");
    assert_eq!(visible_labels(&viewer).len(), 4);

    search(&mut viewer, "pluto");
    assert!(visible_labels(&viewer).is_empty());
    // Hidden, not removed
    assert_eq!(labels(&viewer).len(), 4);

    search(&mut viewer, "r");
    assert_eq!(visible_labels(&viewer), vec!["Mercury", "Earth", "Mars"]);
}

#[test]
fn test_hover_highlights_and_resets() {
    let mut viewer = viewer();
    viewer.render(planets());
    let mars = item(&viewer, "Mars");

    viewer.dispatch(mars, EventKind::PointerEnter);
    let style = viewer.surface().style(mars).unwrap();
    assert_eq!(style.scale, 1.2);
    assert_eq!(style.glow.as_deref(), Some("0 0 25px 15px rgba(255, 255, 255, 0.5)"));

    viewer.dispatch(mars, EventKind::PointerLeave);
    let style = viewer.surface().style(mars).unwrap();
    assert_eq!(style.scale, 1.0);
    assert!(style.glow.is_none());
}

#[test]
fn test_modal_is_reused_across_openings() {
    let mut viewer = viewer();
    viewer.render(planets());

    viewer.dispatch(item(&viewer, "Earth"), EventKind::Activate);
    let first = viewer.surface().find_modal().expect("modal not created");
    assert!(viewer.surface().is_visible(first.overlay));
    assert_eq!(viewer.surface().details(first.details).unwrap().heading, "Earth (Earthus)");

    viewer.dispatch(item(&viewer, "Mars"), EventKind::Activate);
    let second = viewer.surface().find_modal().unwrap();
    assert_eq!(first, second);
    assert_eq!(viewer.surface().count_of_kind(ElementKind::Overlay), 1);

    let details = viewer.surface().details(second.details).unwrap();
    assert_eq!(details.heading, "Mars (Marsus)");
    assert_eq!(details.row("Moons"), Some("Phobos, Deimos"));
}

#[test]
fn test_modal_dismissal_only_hides() {
    let mut viewer = viewer();
    viewer.render(planets());

    viewer.dispatch(item(&viewer, "Venus"), EventKind::Activate);
    let modal = viewer.surface().find_modal().unwrap();
    assert_eq!(viewer.surface().details(modal.details).unwrap().row("Moons"), Some("None"));

    // Clicking inside the content area does nothing
    assert_eq!(viewer.dispatch(modal.content, EventKind::Activate), 0);
    assert!(viewer.surface().is_visible(modal.overlay));

    viewer.dispatch(modal.close, EventKind::Activate);
    assert!(!viewer.surface().is_visible(modal.overlay));
    assert!(viewer.surface().contains(modal.overlay));

    viewer.dispatch(item(&viewer, "Venus"), EventKind::Activate);
    assert!(viewer.surface().is_visible(modal.overlay));
    viewer.dispatch(modal.overlay, EventKind::Activate);
    assert!(!viewer.surface().is_visible(modal.overlay));
    assert_eq!(viewer.surface().find_modal(), Some(modal));
}

#[tokio::test]
async fn test_terminal_session() {
    let source = FakeSource::with_bodies(planets());
    let mut viewer = viewer();
    viewer.start(&source).await;

    for line in ["search ma", "hover mars", "open Mars"] {
        let command = Command::parse(line).unwrap();
        assert_eq!(terminal::execute(&mut viewer, &command), None, "{}", line);
    }

    let page = terminal::render_page(&viewer);
    assert!(page.contains("✨ [Mars]"), "{}", page);
    assert!(!page.contains("[Earth]"), "{}", page);
    assert!(page.contains("┌ Mars (Marsus)"), "{}", page);
    assert!(page.contains("│ Moons: Phobos, Deimos"), "{}", page);

    terminal::execute(&mut viewer, &Command::Backdrop);
    assert!(!terminal::render_page(&viewer).contains("┌ Mars"));

    let note = terminal::execute(&mut viewer, &Command::Open("Pluto".to_string()));
    assert_eq!(note.as_deref(), Some("no body named \"Pluto\""));
}
