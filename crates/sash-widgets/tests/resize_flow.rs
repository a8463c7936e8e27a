//! End-to-end drag flows across the widget controllers.
//!
//! These tests drive the same pointer streams a host would deliver and
//! check the externally observable contract: accepted sizes, override
//! acquisition/release, and teardown on every exit path.

use std::cell::RefCell;
use std::rc::Rc;

use sash_core::event::{PointerEvent, PointerPhase};
use sash_core::geometry::{AxisSelector, PointerPoint};
use sash_layout::drag::{CursorStyle, OverrideHost};
use sash_layout::solver::SizeBounds;
use sash_widgets::{
    GridConfig, ResizableGrid, ResizeResponse, Sidebar, SidebarConfig, SplitPanel,
    SplitPanelConfig, Viewport,
};

/// Body-level override state shared between the test and the widget.
#[derive(Debug, Default)]
struct BodyState {
    cursor: Option<CursorStyle>,
    selection_suppressed: bool,
    acquisitions: u32,
    releases: u32,
}

#[derive(Debug, Clone, Default)]
struct SharedBody(Rc<RefCell<BodyState>>);

impl SharedBody {
    fn state(&self) -> std::cell::Ref<'_, BodyState> {
        self.0.borrow()
    }
}

impl OverrideHost for SharedBody {
    fn apply_cursor(&mut self, cursor: CursorStyle) {
        self.0.borrow_mut().cursor = Some(cursor);
    }
    fn clear_cursor(&mut self) {
        self.0.borrow_mut().cursor = None;
    }
    fn suppress_text_selection(&mut self) {
        let mut state = self.0.borrow_mut();
        state.selection_suppressed = true;
        state.acquisitions += 1;
    }
    fn restore_text_selection(&mut self) {
        let mut state = self.0.borrow_mut();
        state.selection_suppressed = false;
        state.releases += 1;
    }
}

fn mouse(phase: PointerPhase, x: f64, y: f64) -> PointerEvent {
    PointerEvent::mouse(phase, PointerPoint::new(x, y))
}

fn touch(phase: PointerPhase, x: f64, y: f64) -> PointerEvent {
    PointerEvent::touch(phase, PointerPoint::new(x, y))
}

#[test]
fn panel_drag_acquires_and_releases_body_overrides() {
    let body = SharedBody::default();
    let mut panel =
        SplitPanel::new(SplitPanelConfig::default(), body.clone()).expect("valid config");

    panel.begin_resize(mouse(PointerPhase::Down, 300.0, 10.0));
    {
        let state = body.state();
        assert_eq!(state.cursor, Some(CursorStyle::ColResize));
        assert!(state.selection_suppressed);
    }

    panel.on_pointer(mouse(PointerPhase::Move, 380.0, 12.0));
    panel.on_pointer(mouse(PointerPhase::Up, 380.0, 12.0));
    {
        let state = body.state();
        assert_eq!(state.cursor, None);
        assert!(!state.selection_suppressed);
        assert_eq!(state.acquisitions, 1);
        assert_eq!(state.releases, 1);
    }
    assert_eq!(panel.left_width(), 380.0);
}

#[test]
fn dropping_widget_mid_drag_releases_overrides() {
    let body = SharedBody::default();
    {
        let mut panel =
            SplitPanel::new(SplitPanelConfig::default(), body.clone()).expect("valid config");
        panel.begin_resize(mouse(PointerPhase::Down, 0.0, 0.0));
        panel.on_pointer(mouse(PointerPhase::Move, 40.0, 0.0));
        assert!(body.state().selection_suppressed);
        // Widget goes away without ever seeing a pointer-up.
    }
    let state = body.state();
    assert_eq!(state.cursor, None);
    assert!(!state.selection_suppressed);
    assert_eq!(state.releases, 1);
}

#[test]
fn touch_session_never_touches_cursor() {
    let body = SharedBody::default();
    let mut sidebar = Sidebar::new(SidebarConfig::default(), body.clone()).expect("valid config");

    sidebar.begin_resize(touch(PointerPhase::Down, 250.0, 0.0));
    assert_eq!(body.state().cursor, None);
    assert!(body.state().selection_suppressed);

    assert_eq!(
        sidebar.on_pointer(touch(PointerPhase::Move, 310.0, 0.0)),
        ResizeResponse::Resized { sizes: 310.0 }
    );

    // Platform aborts the touch; teardown still runs.
    assert_eq!(
        sidebar.on_pointer(touch(PointerPhase::Cancel, 310.0, 0.0)),
        ResizeResponse::Released
    );
    assert!(!body.state().selection_suppressed);
    assert_eq!(sidebar.width(), 310.0);
}

#[test]
fn sidebar_collapse_while_dragging_releases_overrides() {
    let body = SharedBody::default();
    let mut sidebar = Sidebar::new(SidebarConfig::default(), body.clone()).expect("valid config");

    sidebar.begin_resize(mouse(PointerPhase::Down, 0.0, 0.0));
    sidebar.on_pointer(mouse(PointerPhase::Move, 30.0, 0.0));
    assert!(body.state().selection_suppressed);

    assert_eq!(sidebar.toggle_collapse(), 60.0);
    assert!(!body.state().selection_suppressed);
    assert_eq!(body.state().cursor, None);

    // The stored width survives the collapse and comes back on expand.
    sidebar.toggle_collapse();
    assert_eq!(sidebar.width(), 280.0);
}

#[test]
fn grid_full_flow_conserves_total() {
    let body = SharedBody::default();
    let mut grid = ResizableGrid::new(
        GridConfig {
            panes: 3,
            selector: AxisSelector::Horizontal,
            default_sizes: Some(vec![33.33, 33.33, 33.34]),
        },
        Viewport::new(100.0, 100.0),
        body.clone(),
    )
    .expect("valid config");
    grid = grid
        .with_pane_bounds(0, SizeBounds::new(15.0, 60.0).expect("valid bounds"))
        .and_then(|g| g.with_pane_bounds(1, SizeBounds::new(15.0, 60.0).expect("valid bounds")))
        .and_then(|g| g.with_pane_bounds(2, SizeBounds::new(15.0, 60.0).expect("valid bounds")))
        .expect("valid bounds");

    grid.begin_resize(0, mouse(PointerPhase::Down, 33.0, 0.0));
    // -20 points: pane 0 bottoms out at 15, pane 1 absorbs the admissible
    // 18.33, pane 2 stays put.
    let response = grid.on_pointer(mouse(PointerPhase::Move, 13.0, 0.0));
    let ResizeResponse::Resized { sizes } = response else {
        panic!("expected resized: {response:?}");
    };
    assert!((sizes[0] - 15.0).abs() < 1e-9);
    assert!((sizes[1] - 51.66).abs() < 1e-9);
    assert_eq!(sizes[2], 33.34);

    let total: f64 = sizes.iter().sum();
    assert!((total - 100.0).abs() < 1e-9);

    grid.on_pointer(mouse(PointerPhase::Up, 13.0, 0.0));
    assert!(!body.state().selection_suppressed);
}

#[test]
fn grid_event_coalescing_is_path_independent() {
    let make = || {
        ResizableGrid::new(GridConfig::horizontal(2), Viewport::new(1_000.0, 800.0), ())
            .expect("valid config")
    };

    let mut dense = make();
    dense.begin_resize(0, mouse(PointerPhase::Down, 500.0, 0.0));
    for x in 501..=620 {
        dense.on_pointer(mouse(PointerPhase::Move, f64::from(x), 0.0));
    }
    dense.on_pointer(mouse(PointerPhase::Up, 620.0, 0.0));

    let mut sparse = make();
    sparse.begin_resize(0, mouse(PointerPhase::Down, 500.0, 0.0));
    sparse.on_pointer(mouse(PointerPhase::Move, 620.0, 0.0));
    sparse.on_pointer(mouse(PointerPhase::Up, 620.0, 0.0));

    assert_eq!(dense.sizes(), sparse.sizes());
}

#[test]
fn responses_serialize_with_snake_case_tags() {
    let response: ResizeResponse<f64> = ResizeResponse::Resized { sizes: 320.0 };
    let json = serde_json::to_value(&response).expect("serializable");
    assert_eq!(json["response"], "resized");
    assert_eq!(json["sizes"], 320.0);

    let rejected: ResizeResponse<Vec<f64>> = ResizeResponse::Rejected;
    let json = serde_json::to_value(&rejected).expect("serializable");
    assert_eq!(json["response"], "rejected");
}
