//! # Mandala core
//!
//! The symmetric-stroke and scene-history engine behind the mandala drawing
//! app. One pointer segment fans out into N rotational copies around the
//! canvas center, optionally point-mirrored and hue-cycled; committed gestures
//! are kept as rasterized snapshots on linear undo/redo stacks. A UI shell
//! drives all of it through [`canvas::Canvas`].

pub mod canvas;
pub mod color;
pub mod geometry;
pub mod guides;
pub mod history;
pub mod raster;
pub mod scene;
pub mod symmetry;

pub use canvas::Canvas;
