//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame rate only (speeds are pixels per frame)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod entities;
pub mod maze;
pub mod rect;
pub mod spatial;
pub mod state;
pub mod tick;

pub use body::{CollisionPolicy, KinematicBody, StepOutcome};
pub use collision::{EncounterReport, Kill, player_reached_exit, resolve_encounters};
pub use entities::{Enemy, FrameInput, Player, Projectile, ShotRequest};
pub use maze::{Cell, Grid, GridPos, Maze};
pub use rect::Rect;
pub use spatial::SpatialIndex;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
