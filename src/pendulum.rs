use vek::Vec2;

use crate::draw::{draw_marker, Canvas, Color};
use crate::util::offset;

const MARKER_RADIUS: f32 = 2.0;
const CHAIN_COLOR: Color = Color::WHITE;
const ANCHOR_MARKER: Color = Color::RED;
const ENDPOINT_MARKER: Color = Color::GREEN;

/// Rigid link of the chain. The length is fixed at construction; the
/// endpoint is derived state owned by the pendulum's update pass.
pub struct Segment {
    length: f32,
    pub angle: f32,
    endpoint: Vec2<f32>,
}

impl Segment {
    pub fn new(length: f32, angle: f32) -> Self {
        Self {
            length,
            angle,
            endpoint: Vec2::zero(),
        }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Tip position as of the last endpoint pass.
    pub fn endpoint(&self) -> Vec2<f32> {
        self.endpoint
    }
}

pub struct Weight {
    /// Drives no behavior yet; a physics pass would read it.
    pub mass: f32,
    pub radius: f32,
}

impl Weight {
    pub fn new(mass: f32, radius: f32) -> Self {
        Self { mass, radius }
    }
}

/// Chain of segments hanging off a fixed anchor, with a weight drawn at
/// the tip. Segment order is significant: segment i pivots on the
/// endpoint of segment i - 1, the first one on the anchor.
pub struct Pendulum {
    anchor: Vec2<f32>,
    weight: Weight,
    segments: Vec<Segment>,
}

impl Pendulum {
    /// Endpoints are computed here as well, so the pendulum is drawable
    /// before the first `update`.
    pub fn new(anchor: Vec2<f32>, weight: Weight, segments: Vec<Segment>) -> Self {
        let mut pendulum = Self {
            anchor,
            weight,
            segments,
        };
        pendulum.update_endpoints();
        pendulum
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    fn update_endpoints(&mut self) {
        let mut parent = self.anchor;
        for seg in &mut self.segments {
            seg.endpoint = offset(parent, seg.length, seg.angle);
            parent = seg.endpoint;
        }
    }

    /// Forward kinematics from the anchor outward. Angles are left
    /// untouched, so repeated calls give identical endpoints.
    pub fn update(&mut self) {
        self.update_endpoints();
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let mut parent = self.anchor;
        for seg in &self.segments {
            canvas.line(parent, seg.endpoint, CHAIN_COLOR);
            parent = seg.endpoint;
        }

        // weight at the tip of the chain, or at the anchor of a bare one
        canvas.fill_circle(parent, self.weight.radius, CHAIN_COLOR);

        draw_marker(canvas, self.anchor, MARKER_RADIUS, ANCHOR_MARKER);
        for seg in &self.segments {
            draw_marker(canvas, seg.endpoint, MARKER_RADIUS, ENDPOINT_MARKER);
        }
    }
}
