// Turns store state into the instance list the renderer draws.
//
// Everything is expressed in globe model space (unit sphere); the renderer
// applies the view's rotation on the GPU.

use crate::constants::{
    ARC_HEAD_GLOW, ARC_HEAD_SIZE, ARC_LIFT, ARC_TRAIL_SEGMENTS, ARC_TRAIL_SIZE,
    GLOBE_BASE_COLOR, GLOBE_DOT_BRIGHTNESS, GLOBE_DOT_SIZE, MARKER_COLOR, MARKER_GLOW,
    MAX_DRAWN_FLIGHTS,
};
use globe_core::{arc_point, fibonacci_sphere, NotesStore};
use rand::Rng;

/// One billboard: model-space center, world-space size, HDR color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub pos: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

pub struct SceneBuilder {
    globe_dots: Vec<Instance>,
}

impl SceneBuilder {
    pub fn new(dot_count: usize) -> Self {
        let c = GLOBE_BASE_COLOR;
        let color = [
            c[0] * GLOBE_DOT_BRIGHTNESS,
            c[1] * GLOBE_DOT_BRIGHTNESS,
            c[2] * GLOBE_DOT_BRIGHTNESS,
            1.0,
        ];
        let globe_dots = fibonacci_sphere(dot_count)
            .into_iter()
            .map(|p| Instance {
                pos: p.to_array(),
                size: GLOBE_DOT_SIZE,
                color,
            })
            .collect();
        Self { globe_dots }
    }

    pub fn dot_count(&self) -> usize {
        self.globe_dots.len()
    }

    /// Fill `out` with globe dots, landed markers, then flight arcs.
    pub fn build<R: Rng>(&self, store: &NotesStore<R>, now_ms: f64, out: &mut Vec<Instance>) {
        out.clear();
        out.extend_from_slice(&self.globe_dots);

        let m = MARKER_COLOR;
        for marker in store.markers() {
            let p = marker.location.to_unit_vec3() * 1.005;
            out.push(Instance {
                pos: p.to_array(),
                size: marker.size,
                color: [m[0] * MARKER_GLOW, m[1] * MARKER_GLOW, m[2] * MARKER_GLOW, 1.0],
            });
        }

        let flying = store.flying();
        let skip = flying.len().saturating_sub(MAX_DRAWN_FLIGHTS);
        for note in &flying[skip..] {
            let progress = store.flight_progress(note, now_ms);
            let [r, g, b] = note.color.rgb();
            let fade = 0.6 - progress * 0.5;
            for k in 0..ARC_TRAIL_SEGMENTS {
                let t = k as f32 / (ARC_TRAIL_SEGMENTS - 1) as f32;
                let alpha = if t <= progress { fade } else { fade * 0.25 };
                let p = arc_point(&note.start, &note.end, t, ARC_LIFT);
                out.push(Instance {
                    pos: p.to_array(),
                    size: ARC_TRAIL_SIZE,
                    color: [r, g, b, alpha],
                });
            }
            let head = arc_point(&note.start, &note.end, progress, ARC_LIFT);
            out.push(Instance {
                pos: head.to_array(),
                size: ARC_HEAD_SIZE,
                color: [r * ARC_HEAD_GLOW, g * ARC_HEAD_GLOW, b * ARC_HEAD_GLOW, 1.0],
            });
        }
    }
}
