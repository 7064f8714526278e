use std::time::Instant;

use glam::UVec2;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::debug;

use crate::animation::{AnimationController, CompletionHook, Effect, EffectController, Motion, StopPolicy};
use crate::asset;
use crate::constants::{CELL_SIZE, MAX_USER_SCALE, MIN_USER_SCALE};
use crate::error::{ViewError, ViewResult};
use crate::layout;
use crate::sprite::frame::{self, SheetCell};
use crate::sprite::sheet::SheetLoader;

/// The on-canvas creature view.
///
/// Owns both animation controllers, both sheet loaders, and the two draw
/// surfaces they render through. The base sprite and the overlay effect are
/// composited from separate textures, so the two controllers never share
/// mutable drawing state. Dropping the view drops both controllers and any
/// in-flight session with them, so no completion hook can run after
/// teardown.
pub struct CritterView {
    creator: &'static TextureCreator<WindowContext>,
    sheet: SheetLoader,
    effect_sheet: SheetLoader,
    animation: AnimationController,
    effects: EffectController,
    base_surface: Texture,
    overlay_surface: Texture,
    container: UVec2,
    user_scale: f32,
    last_base_cell: Option<SheetCell>,
    last_overlay_cell: Option<SheetCell>,
    initialized: bool,
}

impl CritterView {
    pub fn new(creator: &'static TextureCreator<WindowContext>) -> ViewResult<Self> {
        let mut base_surface = creator
            .create_texture_target(Some(PixelFormatEnum::RGBA8888), CELL_SIZE, CELL_SIZE)
            .map_err(|e| ViewError::Sdl(e.to_string()))?;
        base_surface.set_blend_mode(BlendMode::Blend);

        let mut overlay_surface = creator
            .create_texture_target(Some(PixelFormatEnum::RGBA8888), CELL_SIZE, CELL_SIZE)
            .map_err(|e| ViewError::Sdl(e.to_string()))?;
        overlay_surface.set_blend_mode(BlendMode::Blend);

        Ok(Self {
            creator,
            sheet: SheetLoader::new(asset::sprite_sheet_path),
            effect_sheet: SheetLoader::new(asset::effect_sheet_path),
            animation: AnimationController::new(),
            effects: EffectController::new(),
            base_surface,
            overlay_surface,
            container: UVec2::new(CELL_SIZE, CELL_SIZE),
            user_scale: 1.0,
            last_base_cell: None,
            last_overlay_cell: None,
            initialized: false,
        })
    }

    /// Switches the creature sheet. A failed load renders blank until a
    /// later switch succeeds.
    pub fn set_sprite(&mut self, name: &str) {
        self.sheet.set_source(name, self.creator);
        self.last_base_cell = None;
    }

    /// Starts a new primary animation, superseding any in-flight one.
    pub fn play_animation(&mut self, motion: Motion, policy: StopPolicy, now: Instant, on_complete: CompletionHook) {
        self.animation.play(motion, policy, now, on_complete);
    }

    /// Returns the primary controller to its idle state.
    pub fn stop_animation(&mut self) {
        self.animation.stop();
    }

    /// Requests an overlay effect; returns `false` if dropped because one is
    /// already active.
    pub fn show_effect(&mut self, effect: Effect, now: Instant, on_complete: CompletionHook) -> bool {
        if !self.effects.show(effect, now, on_complete) {
            return false;
        }
        self.effect_sheet.set_source(effect.as_ref(), self.creator);
        true
    }

    /// Updates the container dimensions the render scale is resolved from.
    pub fn set_container(&mut self, size: UVec2) {
        if self.container != size {
            debug!(width = size.x, height = size.y, "Container resized");
            self.container = size;
        }
    }

    /// Nudges the user scale multiplier, clamped to its sane range.
    pub fn adjust_user_scale(&mut self, delta: f32) {
        self.user_scale = (self.user_scale + delta).clamp(MIN_USER_SCALE, MAX_USER_SCALE);
        debug!(user_scale = self.user_scale, "User scale adjusted");
    }

    /// Advances both controllers to `now`. The controllers interleave on the
    /// host loop but are fully independent of each other.
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
        self.effects.tick(now);
    }

    /// Redraws whichever surfaces changed and composites them onto `canvas`,
    /// base sprite first, overlay above it.
    pub fn draw(&mut self, canvas: &mut Canvas<Window>) -> ViewResult<()> {
        if !self.initialized {
            frame::clear(canvas, &mut self.base_surface)?;
            frame::clear(canvas, &mut self.overlay_surface)?;
            self.initialized = true;
        }

        match self.sheet.image() {
            Some(image) => {
                let cell = self.animation.current_cell();
                if self.last_base_cell != Some(cell) {
                    frame::blit(canvas, &mut self.base_surface, image, cell)?;
                    self.last_base_cell = Some(cell);
                }
            }
            // Not ready (still loading, or the load failed): stay blank.
            None => {
                if self.last_base_cell.take().is_some() {
                    frame::clear(canvas, &mut self.base_surface)?;
                }
            }
        }

        match (self.effects.current_cell(), self.effect_sheet.image()) {
            (Some(cell), Some(image)) => {
                if self.last_overlay_cell != Some(cell) {
                    frame::blit(canvas, &mut self.overlay_surface, image, cell)?;
                    self.last_overlay_cell = Some(cell);
                }
            }
            _ => {
                if self.last_overlay_cell.take().is_some() {
                    frame::clear(canvas, &mut self.overlay_surface)?;
                }
            }
        }

        let scale = layout::resolve_scale(self.container, self.user_scale);
        let size = (CELL_SIZE as f32 * scale).round() as u32;
        let dest = Rect::new(
            (self.container.x as i32 - size as i32) / 2,
            (self.container.y as i32 - size as i32) / 2,
            size,
            size,
        );

        canvas.copy(&self.base_surface, None, dest).map_err(ViewError::Sdl)?;
        canvas.copy(&self.overlay_surface, None, dest).map_err(ViewError::Sdl)?;
        Ok(())
    }
}
