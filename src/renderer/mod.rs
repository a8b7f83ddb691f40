//! Rendering interface
//!
//! The game never draws by itself. `build_scene` turns a `GameState` into a
//! display list in world units (y up, origin at ground level on the left);
//! a backend implementing `Renderer` paints it, applying `Scene::scale` and
//! flipping y against `Scene::viewport`.

pub mod scene;

pub use scene::build_scene;

use glam::Vec2;

use crate::Viewport;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Vertical gradient filling the whole surface
    Sky { bottom: Color, top: Color },
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    FillPolygon { points: Vec<Vec2>, color: Color },
    /// Quadratic curve stroked with a solid line
    StrokeCurve {
        start: Vec2,
        control: Vec2,
        end: Vec2,
        width: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Straight line, optionally dashed as `[dash, gap]`
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: Option<[f32; 2]>,
        color: Color,
    },
    /// Until `ClearClip`, paint only outside these circles
    ClipOutsideCircles { centers: Vec<Vec2>, radius: f32 },
    ClearClip,
}

/// A full frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Pixels per world unit
    pub scale: f32,
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

/// A drawing backend
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}
