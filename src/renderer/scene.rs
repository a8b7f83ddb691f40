//! Display list generation for a game frame

use glam::Vec2;

use super::{Color, DrawCommand, Scene};
use crate::consts::{AIM_ARM_DIVISOR, ARM_STROKE_WIDTH, BLAST_HOLE_RADIUS};
use crate::sim::{Building, GamePhase, GameState, Player, Silhouette};

const SKY_BOTTOM: Color = [0.973, 0.729, 0.522, 1.0];
const SKY_TOP: Color = [1.0, 0.761, 0.557, 1.0];
const MOON: Color = [1.0, 1.0, 1.0, 0.6];
const BACKGROUND_BUILDING: Color = [0.580, 0.447, 0.522, 1.0];
const BUILDING: Color = [0.290, 0.235, 0.408, 1.0];
const WINDOW: Color = [0.910, 0.525, 0.635, 1.0];
const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
const FACE: Color = [0.827, 0.827, 0.827, 1.0];
const BOMB: Color = [1.0, 0.0, 0.0, 1.0];
const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

const MOON_CENTER: Vec2 = Vec2::new(300.0, 350.0);
const MOON_RADIUS: f32 = 60.0;

/// Window grid
const WINDOW_WIDTH: f32 = 10.0;
const WINDOW_HEIGHT: f32 = 12.0;
const WINDOW_GAP: f32 = 15.0;

/// Build the display list for the current state
pub fn build_scene(state: &GameState) -> Scene {
    let mut commands = vec![
        DrawCommand::Sky {
            bottom: SKY_BOTTOM,
            top: SKY_TOP,
        },
        DrawCommand::FillCircle {
            center: MOON_CENTER,
            radius: MOON_RADIUS,
            color: MOON,
        },
    ];

    for b in &state.background_buildings {
        commands.push(DrawCommand::FillRect {
            origin: Vec2::new(b.x, 0.0),
            size: Vec2::new(b.width, b.height),
            color: BACKGROUND_BUILDING,
        });
    }

    if !state.blast_holes.is_empty() {
        commands.push(DrawCommand::ClipOutsideCircles {
            centers: state.blast_holes.iter().map(|h| h.position).collect(),
            radius: BLAST_HOLE_RADIUS,
        });
    }
    for building in &state.buildings {
        push_building(&mut commands, building);
    }
    if !state.blast_holes.is_empty() {
        commands.push(DrawCommand::ClearClip);
    }

    push_gorilla(&mut commands, state, Player::One);
    push_gorilla(&mut commands, state, Player::Two);
    push_bomb(&mut commands, state);

    Scene {
        scale: state.scale,
        viewport: state.viewport,
        commands,
    }
}

/// Lit window slots as (floor, room) pairs
pub fn lit_windows(building: &Building) -> Vec<(usize, usize)> {
    let floors = ((building.height - WINDOW_GAP) / (WINDOW_HEIGHT + WINDOW_GAP))
        .ceil()
        .max(0.0) as usize;
    let rooms = ((building.width - WINDOW_GAP) / (WINDOW_WIDTH + WINDOW_GAP))
        .floor()
        .max(0.0) as usize;

    let mut lit = Vec::new();
    for floor in 0..floors {
        for room in 0..rooms {
            if building
                .lights
                .get(floor * rooms + room)
                .copied()
                .unwrap_or(false)
            {
                lit.push((floor, room));
            }
        }
    }
    lit
}

fn push_building(commands: &mut Vec<DrawCommand>, building: &Building) {
    commands.push(DrawCommand::FillRect {
        origin: Vec2::new(building.x, 0.0),
        size: Vec2::new(building.width, building.height),
        color: BUILDING,
    });

    // Floors count down from the roof
    for (floor, room) in lit_windows(building) {
        let left = building.x + WINDOW_GAP + room as f32 * (WINDOW_WIDTH + WINDOW_GAP);
        let top = building.height - WINDOW_GAP - floor as f32 * (WINDOW_HEIGHT + WINDOW_GAP);
        commands.push(DrawCommand::FillRect {
            origin: Vec2::new(left, top - WINDOW_HEIGHT),
            size: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            color: WINDOW,
        });
    }
}

fn push_gorilla(commands: &mut Vec<DrawCommand>, state: &GameState, player: Player) {
    let silhouette = Silhouette::of(state, player);
    let at = silhouette.anchor;

    commands.push(DrawCommand::FillPolygon {
        points: silhouette.body.to_vec(),
        color: BLACK,
    });
    for arm in [silhouette.left_arm, silhouette.right_arm] {
        commands.push(DrawCommand::StrokeCurve {
            start: arm.start,
            control: arm.control,
            end: arm.end,
            width: ARM_STROKE_WIDTH,
            color: BLACK,
        });
    }

    // Face, eyes and pupils
    let face = [
        (Vec2::new(0.0, 63.0), 9.0, FACE),
        (Vec2::new(-3.5, 70.0), 4.0, FACE),
        (Vec2::new(3.5, 70.0), 4.0, FACE),
        (Vec2::new(-3.5, 70.0), 1.4, BLACK),
        (Vec2::new(3.5, 70.0), 1.4, BLACK),
    ];
    for (offset, radius, color) in face {
        commands.push(DrawCommand::FillCircle {
            center: at + offset,
            radius,
            color,
        });
    }
    for side in [-1.0, 1.0] {
        commands.push(DrawCommand::Line {
            from: at + Vec2::new(side * 3.5, 66.5),
            to: at + Vec2::new(side * 1.5, 65.0),
            width: 1.4,
            dash: None,
            color: BLACK,
        });
    }

    let smiling = state.phase == GamePhase::Celebrating && state.current_player == player;
    let (corner_y, control_y) = if smiling { (60.0, 56.0) } else { (56.0, 60.0) };
    commands.push(DrawCommand::StrokeCurve {
        start: at + Vec2::new(-5.0, corner_y),
        control: at + Vec2::new(0.0, control_y),
        end: at + Vec2::new(5.0, corner_y),
        width: 1.4,
        color: BLACK,
    });
}

fn push_bomb(commands: &mut Vec<DrawCommand>, state: &GameState) {
    let bomb = &state.projectile;
    match state.phase {
        GamePhase::Aiming => {
            // Bomb sits in the pulled-back hand; guide shows the throw
            let at = bomb.position - bomb.velocity / AIM_ARM_DIVISOR;
            commands.push(DrawCommand::Line {
                from: at,
                to: at + bomb.velocity,
                width: 3.0,
                dash: Some([3.0, 8.0]),
                color: BOMB,
            });
            commands.push(DrawCommand::FillCircle {
                center: at,
                radius: 6.0,
                color: BOMB,
            });
            commands.push(DrawCommand::StrokeCircle {
                center: at,
                radius: 6.0,
                width: 2.0,
                color: WHITE,
            });
        }
        GamePhase::InFlight => {
            let (sin, cos) = bomb.rotation.sin_cos();
            let rotate = |p: Vec2| Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
            // Banana-shaped lens between two quadratic arcs
            let upper = crate::sim::QuadraticCurve::new(
                Vec2::new(-8.0, -2.0),
                Vec2::new(0.0, 12.0),
                Vec2::new(8.0, -2.0),
            );
            let lower = crate::sim::QuadraticCurve::new(
                Vec2::new(8.0, -2.0),
                Vec2::new(0.0, 2.0),
                Vec2::new(-8.0, -2.0),
            );
            let points = (0..8)
                .map(|i| upper.point_at(i as f32 / 8.0))
                .chain((0..8).map(|i| lower.point_at(i as f32 / 8.0)))
                .map(|p| bomb.position + rotate(p))
                .collect();
            commands.push(DrawCommand::FillPolygon {
                points,
                color: BOMB,
            });
        }
        GamePhase::Celebrating => {}
    }
}
