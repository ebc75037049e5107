use globe_core::*;

#[test]
fn idle_view_auto_rotates_each_frame() {
    let mut view = GlobeView::default();
    for _ in 0..10 {
        view.tick();
    }
    assert!((view.phi - 10.0 * AUTO_ROTATE_PER_FRAME).abs() < 1e-6);
    assert_eq!(view.theta, DEFAULT_THETA);
}

#[test]
fn dragging_pauses_rotation_and_offsets_phi() {
    let mut view = GlobeView::default();
    view.begin_drag(200.0);
    assert!(view.is_dragging());
    view.tick();
    assert_eq!(view.phi, 0.0);
    view.drag_to(300.0);
    assert!((view.effective_phi() - 1.0).abs() < 1e-6);
    view.end_drag();
    view.tick();
    assert!((view.effective_phi() - (1.0 + AUTO_ROTATE_PER_FRAME)).abs() < 1e-6);
}

#[test]
fn second_drag_continues_from_previous_offset() {
    let mut view = GlobeView::default();
    view.begin_drag(0.0);
    view.drag_to(50.0);
    view.end_drag();
    view.begin_drag(400.0);
    view.drag_to(450.0);
    assert!((view.effective_phi() - 1.0).abs() < 1e-6);
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut view = GlobeView::default();
    view.drag_to(1000.0);
    assert_eq!(view.effective_phi(), 0.0);
}

#[test]
fn model_matrix_preserves_lengths() {
    let mut view = GlobeView::default();
    view.begin_drag(0.0);
    view.drag_to(123.0);
    let m = view.model_matrix();
    let p = GeoPoint::new(12.0, 34.0).to_unit_vec3();
    assert!((m.transform_vector3(p).length() - 1.0).abs() < 1e-5);
}

#[test]
fn camera_projects_origin_to_screen_center() {
    let cam = Camera::looking_at_origin(3.0, 1.5);
    let clip = cam.projection_matrix() * cam.view_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
}
