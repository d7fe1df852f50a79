//! Scene description
//!
//! Turns a `GameState` into an ordered list of draw commands (back to front).
//! The host renderer draws them; this module never touches a GPU or a font.

use glam::Vec2;

use super::vertex::{Color, colors};
use crate::sim::{Cell, GamePhase, GameState, Rect};

/// Where a text anchor sits relative to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    TopLeft,
    TopRight,
    MidLeft,
    MidRight,
    MidTop,
    MidBottom,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Border of `thickness` pixels drawn inside `rect`
    OutlineRect {
        rect: Rect,
        thickness: i32,
        color: Color,
    },
    RoundedRect {
        rect: Rect,
        radius: i32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        size: u32,
        color: Color,
        anchor: Vec2,
        align: TextAlign,
    },
}

pub const GAME_TITLE: &str = "Maze Runner Redux";

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState) -> Vec<DrawCommand> {
    let screen = state.config.screen_rect();
    let mut cmds = vec![DrawCommand::FillRect {
        rect: screen,
        color: colors::FLOOR,
    }];

    match state.phase {
        GamePhase::Title => title_screen(&mut cmds, screen),
        GamePhase::Playing => {
            world(&mut cmds, state);
            cmds.push(text(
                format!("Level: {}", state.level),
                24,
                colors::WHITE,
                Vec2::new(10.0, 10.0),
                TextAlign::TopLeft,
            ));
        }
        GamePhase::GameOver => {
            world(&mut cmds, state);
            end_screen(&mut cmds, screen, "Game Over", colors::PLAYER);
        }
        GamePhase::Win => {
            world(&mut cmds, state);
            end_screen(&mut cmds, screen, "You Win!", colors::EXIT);
        }
    }
    cmds
}

fn text(text: String, size: u32, color: Color, anchor: Vec2, align: TextAlign) -> DrawCommand {
    DrawCommand::Text {
        text,
        size,
        color,
        anchor,
        align,
    }
}

/// Square centred on `rect`'s centre, `grow` pixels larger on each side
fn bordered(rect: Rect, grow: i32) -> Rect {
    Rect::from_center(rect.center(), rect.w + grow * 2, rect.h + grow * 2)
}

/// Maze, enemies, projectiles, then the player on top
fn world(cmds: &mut Vec<DrawCommand>, state: &GameState) {
    if let Some(maze) = &state.maze {
        let tile = maze.tile_size();
        // markers shrink the tile by 20%
        let shrink = -(tile as f32 * 0.2) as i32;
        for ((col, row), cell) in maze.grid().iter() {
            let rect = maze.cell_rect((col, row));
            match cell {
                Cell::Wall => {
                    cmds.push(DrawCommand::FillRect {
                        rect,
                        color: colors::WALL,
                    });
                    cmds.push(DrawCommand::OutlineRect {
                        rect,
                        thickness: 2,
                        color: colors::WALL_BORDER,
                    });
                }
                Cell::Start | Cell::Exit => {
                    let color = if cell == Cell::Start {
                        colors::START
                    } else {
                        colors::EXIT
                    };
                    cmds.push(DrawCommand::RoundedRect {
                        rect: rect.inflate(shrink, shrink),
                        radius: 3,
                        color,
                    });
                }
                Cell::Floor => {}
            }
        }
    }

    for enemy in &state.enemies {
        let rect = enemy.rect();
        cmds.push(DrawCommand::RoundedRect {
            rect: bordered(rect, 1),
            radius: 5,
            color: colors::ENEMY_BORDER,
        });
        cmds.push(DrawCommand::RoundedRect {
            rect,
            radius: 5,
            color: colors::ENEMY,
        });
    }

    for projectile in &state.projectiles {
        cmds.push(DrawCommand::Circle {
            center: projectile.rect().center_f32(),
            radius: projectile.radius as f32,
            color: colors::PROJECTILE,
        });
    }

    if let Some(player) = &state.player {
        let rect = player.rect();
        let color = if player.sprinting {
            colors::PLAYER_SPRINT
        } else {
            colors::PLAYER
        };
        cmds.push(DrawCommand::RoundedRect {
            rect: bordered(rect, 2),
            radius: 3,
            color: colors::PLAYER_BORDER,
        });
        cmds.push(DrawCommand::RoundedRect {
            rect,
            radius: 3,
            color,
        });
    }
}

fn title_screen(cmds: &mut Vec<DrawCommand>, screen: Rect) {
    let cx = screen.w as f32 / 2.0;
    let mid = screen.h as f32 / 2.0;
    let lines: [(&str, u32, Color, f32); 7] = [
        (GAME_TITLE, 64, colors::WHITE, screen.h as f32 / 4.0),
        ("Arrow keys or WASD to move", 30, colors::WHITE, mid - 40.0),
        ("Hold Shift to sprint", 30, colors::WHITE, mid),
        ("Press Space to shoot", 30, colors::WHITE, mid + 40.0),
        ("Reach the blue square to win", 30, colors::EXIT, mid + 80.0),
        ("Avoid the yellow squares", 30, colors::ENEMY, mid + 120.0),
        ("Press Enter to start", 35, colors::WHITE, screen.h as f32 * 0.85),
    ];
    for (line, size, color, y) in lines {
        cmds.push(text(line.to_string(), size, color, Vec2::new(cx, y), TextAlign::Center));
    }
}

fn end_screen(cmds: &mut Vec<DrawCommand>, screen: Rect, message: &str, color: Color) {
    let cx = screen.w as f32 / 2.0;
    let h = screen.h as f32;
    cmds.push(DrawCommand::FillRect {
        rect: screen,
        color: colors::OVERLAY,
    });
    cmds.push(text(message.to_string(), 72, color, Vec2::new(cx, h / 3.0), TextAlign::Center));
    cmds.push(text(
        "Press Enter to return to the title".to_string(),
        35,
        colors::WHITE,
        Vec2::new(cx, h * 0.6),
        TextAlign::Center,
    ));
    cmds.push(text(
        "Press Esc to quit".to_string(),
        35,
        colors::WHITE,
        Vec2::new(cx, h * 0.6 + 50.0),
        TextAlign::Center,
    ));
}
