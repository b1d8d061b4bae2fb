//! 2D light source: a fan of rays marched from an emitter until they leave
//! the viewport or strike a circular obstacle.
//!
//! The ray core is [`rays`], [`march`] and [`dispatch`], writing into the
//! shared [`canvas::RayCanvas`]. [`scene`] holds per-frame state and
//! [`draw`]/[`output`] turn a finished frame into a window or a PNG.

pub mod canvas;
pub mod config;
pub mod dispatch;
pub mod draw;
pub mod error;
pub mod march;
pub mod output;
pub mod rays;
pub mod scene;
pub mod types;
