//! CrystalScout: synthetic materials-candidate screening.
//!
//! The data layer (`data`) and the memoizing [`pipeline::Pipeline`] are
//! toolkit-agnostic; `app`, `state` and `ui` bind them to egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod ui;

pub use error::{Result, ScoutError};
