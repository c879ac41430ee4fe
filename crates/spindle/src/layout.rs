use crate::angle;
use crate::config::Gravity;
use glam::{DMat3, DVec2, DVec3};
use std::cmp::Ordering;

/// Tilt of the wheel's axis toward the viewer.
pub const TILT_DEGREES: f64 = 15.0;
/// Distance of the pinhole camera from the screen plane, in pixels.
pub const CAMERA_DISTANCE: f64 = 576.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Screen area the wheel is drawn into. The wheel diameter is the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub item: Size,
    pub gravity: Gravity,
    pub padding: f64,
}

impl Viewport {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Untransformed top edge of every item, from the vertical gravity.
    pub fn item_top(&self) -> f64 {
        match self.gravity {
            Gravity::Top => self.padding,
            Gravity::Center => {
                let available = self.height - 2.0 * self.padding - self.item.height;
                self.padding + available / 2.0
            }
            Gravity::Bottom => self.height - self.padding - self.item.height,
        }
    }
}

/// Position of an item in wheel space. `z` grows away from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Projection {
    pub fn of(angle_deg: f64, viewport: &Viewport) -> Self {
        let theta = angle_deg.to_radians();
        let radius = viewport.width / 2.0;

        let x = -(radius * theta.sin()) + radius - viewport.item.width / 2.0;
        let z = radius * (1.0 - theta.cos());
        let y = -viewport.height / 2.0 + z * TILT_DEGREES.to_radians().sin();

        Self { x, y, z }
    }
}

/// Perspective transform of one item: translate by the projection through a
/// pinhole camera, re-centred on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    matrix: DMat3,
}

impl CameraTransform {
    pub fn new(projection: Projection, center: Point) -> Self {
        let camera = DMat3::from_cols(
            DVec3::X,
            DVec3::Y,
            DVec3::new(
                projection.x,
                -projection.y,
                (CAMERA_DISTANCE + projection.z) / CAMERA_DISTANCE,
            ),
        );
        let center = DVec2::new(center.x, center.y);
        let matrix =
            DMat3::from_translation(center) * camera * DMat3::from_translation(-center);
        Self { matrix }
    }

    pub fn map_point(&self, p: Point) -> Point {
        let v = self.matrix * DVec3::new(p.x, p.y, 1.0);
        Point::new(v.x / v.z, v.y / v.z)
    }

    /// Uniform scale the camera applies at this depth.
    pub fn scale(&self) -> f64 {
        1.0 / self.matrix.z_axis.z
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemState {
    index: usize,
    angle: f64,
    projection: Projection,
}

impl ItemState {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Farther items order first.
    pub fn cmp_depth(&self, other: &Self) -> Ordering {
        other.projection.z.total_cmp(&self.projection.z)
    }
}

/// Angles and projections of every item on the ring.
#[derive(Debug, Clone, Default)]
pub struct WheelLayout {
    viewport: Viewport,
    items: Vec<ItemState>,
}

impl WheelLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            items: Vec::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn items(&self) -> &[ItemState] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn angle_of(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(ItemState::angle)
    }

    pub fn projection_of(&self, index: usize) -> Option<Projection> {
        self.items.get(index).map(ItemState::projection)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for item in &mut self.items {
            item.projection = Projection::of(item.angle, &viewport);
        }
    }

    /// Full layout pass: evenly spaces `count` items with `selected` at zero.
    pub fn rebuild(&mut self, count: usize, selected: usize) {
        let viewport = self.viewport;
        self.items = (0..count)
            .map(|index| {
                let angle = angle::slot_angle(index, selected, count);
                ItemState {
                    index,
                    angle,
                    projection: Projection::of(angle, &viewport),
                }
            })
            .collect();
    }

    /// Rotates every item by `delta` degrees.
    pub fn apply_delta(&mut self, delta: f64) {
        let viewport = self.viewport;
        for item in &mut self.items {
            item.angle = angle::wrap360(item.angle + delta);
            item.projection = Projection::of(item.angle, &viewport);
        }
    }

    pub fn camera_transform(&self, index: usize) -> Option<CameraTransform> {
        self.items
            .get(index)
            .map(|item| CameraTransform::new(item.projection, self.viewport.center()))
    }

    /// Indices in painter's order, back-most first. Every item appears once.
    pub fn draw_order(&self) -> Vec<usize> {
        paint_order(&self.items)
    }

    /// Front-most item whose transformed bounds contain `point`.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        let top = self.viewport.item_top();
        let (w, h) = (self.viewport.item.width, self.viewport.item.height);
        let center = self.viewport.center();

        self.items
            .iter()
            .filter(|item| {
                let camera = CameraTransform::new(item.projection, center);
                let tl = camera.map_point(Point::new(0.0, top));
                let br = camera.map_point(Point::new(w, top + h));
                tl.x < point.x && br.x > point.x && tl.y < point.y && br.y > point.y
            })
            .min_by(|a, b| {
                a.projection
                    .z
                    .total_cmp(&b.projection.z)
                    .then(a.index.cmp(&b.index))
            })
            .map(ItemState::index)
    }
}

/// Back-to-front ordering by depth; equal depths keep index order.
pub fn paint_order(items: &[ItemState]) -> Vec<usize> {
    let mut sorted: Vec<&ItemState> = items.iter().collect();
    sorted.sort_by(|a, b| a.cmp_depth(b));
    sorted.into_iter().map(ItemState::index).collect()
}
