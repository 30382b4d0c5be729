//! # Canvas
//!
//! The drawing surface controller: owns the scene, the guide overlay, the
//! history stacks, the stroke settings, and the pointer gesture state
//! machine. This is the whole public surface the UI shell talks to -
//! setters, gesture events, commands, and the two affordance queries.
//!
//! Everything here is synchronous and single-threaded; events are handled
//! strictly in arrival order and a gesture's render-then-commit sequence
//! finishes before the next event is seen.

use std::path::Path;

use crate::color::Rgba8;
use crate::geometry::{Point, Segment};
use crate::guides::{self, GuideOverlay};
use crate::history::{History, Snapshot};
use crate::raster;
use crate::scene::{Line, LineStyle, Primitive, Scene};
use crate::symmetry::{self, StrokeSettings};

/// Failures at the image file boundary. Everything else in the canvas is a
/// guarded no-op, never an error.
#[derive(thiserror::Error, Debug)]
pub enum ImageIoError {
    #[error("image codec: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported image format {0:?}, expected bmp/jpg/jpeg/png")]
    UnsupportedFormat(std::ffi::OsString),
}

/// Export formats the save path accepts, matched on file extension.
const EXPORT_EXTENSIONS: [&str; 4] = ["bmp", "jpg", "jpeg", "png"];

/// Pointer gesture state. A drag's first event has no previous point and
/// draws nothing; `net_added` decides whether release commits a snapshot.
enum Gesture {
    Idle,
    Dragging {
        previous: Point,
        net_added: usize,
    },
}

pub struct Canvas {
    width: u32,
    height: u32,
    scene: Scene,
    guides: GuideOverlay,
    history: History,

    pen_width: f32,
    pen_color: Rgba8,
    slices: u32,
    /// Guide alpha, stored pre-inverted: `255 - brightness slider`.
    grid_alpha: u8,
    rainbow: bool,
    grid_enabled: bool,
    mirror_enabled: bool,
    paint_enabled: bool,

    gesture: Gesture,
}

impl Canvas {
    /// A fresh surface. Painting starts disabled - the shell enables it once
    /// a size has been chosen.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scene: Scene::new(),
            guides: GuideOverlay::new(),
            history: History::new(),
            pen_width: 2.0,
            pen_color: Rgba8::WHITE,
            slices: 0,
            grid_alpha: 255,
            rainbow: false,
            grid_enabled: false,
            mirror_enabled: false,
            paint_enabled: false,
            gesture: Gesture::Idle,
        }
    }

    // Configuration. Each takes effect on the next render or guide rebuild.

    pub fn set_pen_size(&mut self, size: u32) {
        self.pen_width = size as f32;
    }
    pub fn set_pen_color(&mut self, color: Rgba8) {
        self.pen_color = color;
    }
    /// Brightness slider, 0..=255. Higher slider means fainter grid.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.grid_alpha = 255 - brightness;
        if self.grid_enabled {
            self.guides
                .rebuild_slices(&mut self.scene, self.slices, self.grid_alpha, self.width, self.height);
        }
    }
    /// Both guide families depend on the slice count, so both rebuild.
    pub fn set_slice_count(&mut self, slices: u32) {
        self.slices = slices;
        self.rebuild_guides();
    }
    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid_enabled = enabled;
        self.guides.remove_slices(&mut self.scene);
        if enabled {
            self.guides
                .rebuild_slices(&mut self.scene, self.slices, self.grid_alpha, self.width, self.height);
        }
    }
    pub fn set_mirror_enabled(&mut self, enabled: bool) {
        self.mirror_enabled = enabled;
        self.guides.remove_mirrors(&mut self.scene);
        if enabled {
            self.guides
                .rebuild_mirrors(&mut self.scene, self.slices, self.width, self.height);
        }
    }
    pub fn set_rainbow_mode(&mut self, enabled: bool) {
        self.rainbow = enabled;
    }
    pub fn set_paint_enabled(&mut self, enabled: bool) {
        self.paint_enabled = enabled;
    }

    // Gesture events.

    /// One pointer sample during a drag. The first sample of a gesture only
    /// records its position; every later sample strokes a segment from the
    /// previous one, fanned out per the current settings.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.paint_enabled {
            return;
        }
        let (previous, net_added) = match self.gesture {
            Gesture::Idle => (None, 0),
            Gesture::Dragging {
                previous,
                net_added,
            } => (Some(previous), net_added),
        };

        let mut added = 0;
        if let Some(previous) = previous {
            // Guides out of the way so they are neither stroked over as
            // content nor confused with it.
            self.guides.remove_all(&mut self.scene);

            let settings = StrokeSettings {
                width: self.pen_width,
                color: self.pen_color,
                slices: self.slices,
                rainbow: self.rainbow,
                mirror: self.mirror_enabled,
            };
            let center = guides::surface_center(self.width, self.height);
            let plan = symmetry::plan_segment(Segment::new(previous, point), center, &settings);
            added = plan.len();
            for planned in plan {
                self.scene.insert(Primitive::Line(Line {
                    segment: planned.segment,
                    width: self.pen_width,
                    color: planned.color,
                    style: LineStyle::Solid,
                }));
            }
            self.rebuild_guides();
        }

        self.gesture = Gesture::Dragging {
            previous: point,
            net_added: net_added + added,
        };
    }

    /// End of a gesture. Commits one snapshot if the drag actually drew
    /// anything; a click without movement records nothing.
    pub fn pointer_release(&mut self) {
        let finished = std::mem::replace(&mut self.gesture, Gesture::Idle);
        let Gesture::Dragging { net_added, .. } = finished else {
            return;
        };
        if net_added == 0 {
            return;
        }
        let snapshot = std::sync::Arc::new(self.capture());
        log::debug!(
            "gesture committed: {net_added} primitives, snapshot {}x{}",
            self.width,
            self.height
        );
        self.history.push_edit(snapshot);
    }

    // Commands.

    /// Step back one committed state. Silent no-op with an empty stack.
    pub fn undo(&mut self) {
        if self.history.undo() {
            self.scene.clear();
            if let Some(snapshot) = self.history.current() {
                self.scene.insert(Primitive::Image(snapshot.clone()));
            }
        }
        self.rebuild_guides();
    }
    /// Re-apply the most recently undone state. Silent no-op with an empty
    /// redo stack.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            let snapshot = snapshot.clone();
            self.scene.clear();
            self.scene.insert(Primitive::Image(snapshot));
        }
        self.rebuild_guides();
    }
    /// Optionally clear the surface content, then refresh guides either way.
    /// History is untouched - this is not [`Self::clear_all_histories`].
    pub fn clear_scene(&mut self, clear_content: bool) {
        if clear_content {
            self.scene.clear();
        }
        self.guides.remove_all(&mut self.scene);
        self.rebuild_guides();
    }
    /// Empty the surface and both history stacks, unconditionally.
    pub fn clear_all_histories(&mut self) {
        self.scene.clear();
        self.history.clear();
    }
    /// Replace the surface content with an image file, scaled to the
    /// surface.
    ///
    /// Undo/redo history survives a load - only the scene resets. That
    /// mirrors the long-standing observed behavior; whether a load *should*
    /// reset history is an open product question, pinned by test until
    /// answered.
    pub fn open_image(&mut self, path: &Path) -> Result<(), ImageIoError> {
        let loaded: Snapshot = std::sync::Arc::new(image::open(path)?.into_rgba8());
        self.scene.clear();
        self.history.push_preserving_redo(loaded.clone());
        self.scene.insert(Primitive::Image(loaded));
        self.rebuild_guides();
        log::debug!("opened image {}", path.display());
        Ok(())
    }
    /// The surface was resized: redraw the current committed state scaled to
    /// the new size and refresh guides. No new snapshot is recorded.
    pub fn resize_replay(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        // Content is replaced wholesale; repeated resizes must not pile
        // hidden primitives under the opaque replay blit.
        self.scene.clear();
        if let Some(snapshot) = self.history.current() {
            self.scene.insert(Primitive::Image(snapshot.clone()));
        }
        self.rebuild_guides();
    }
    /// Rasterize current content, guides excluded, and write it out.
    /// BMP/JPG/JPEG/PNG only, chosen by extension.
    pub fn export(&mut self, path: &Path) -> Result<(), ImageIoError> {
        let extension = path
            .extension()
            .map(std::ffi::OsStr::to_ascii_lowercase)
            .unwrap_or_default();
        let Some(extension_str) = extension.to_str().filter(|e| EXPORT_EXTENSIONS.contains(e))
        else {
            return Err(ImageIoError::UnsupportedFormat(extension));
        };
        let shot = self.capture();
        if matches!(extension_str, "jpg" | "jpeg") {
            // JPEG has no alpha channel.
            image::DynamicImage::ImageRgba8(shot).to_rgb8().save(path)?;
        } else {
            shot.save(path)?;
        }
        log::debug!("exported {}", path.display());
        Ok(())
    }

    // Queries.

    #[must_use]
    pub fn is_undo_stack_empty(&self) -> bool {
        self.history.is_undo_empty()
    }
    #[must_use]
    pub fn is_redo_stack_empty(&self) -> bool {
        self.history.is_redo_empty()
    }
    /// True when the surface holds nothing at all, guides included.
    #[must_use]
    pub fn is_scene_empty(&self) -> bool {
        self.scene.is_empty()
    }
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rasterize the content with the guide overlay lifted out, then put the
    /// overlay back. This is the snapshot path - guides never reach pixels
    /// that history or export sees.
    #[must_use]
    pub fn capture(&mut self) -> image::RgbaImage {
        self.guides.remove_all(&mut self.scene);
        let shot = raster::rasterize(&self.scene, self.width, self.height);
        self.rebuild_guides();
        shot
    }

    fn rebuild_guides(&mut self) {
        if self.grid_enabled {
            self.guides
                .rebuild_slices(&mut self.scene, self.slices, self.grid_alpha, self.width, self.height);
        }
        if self.mirror_enabled {
            self.guides
                .rebuild_mirrors(&mut self.scene, self.slices, self.width, self.height);
        }
    }
}
