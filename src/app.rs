use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use glam::UVec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};
use tracing::{error, event, info};

use crate::animation::{Effect, Motion, StopPolicy};
use crate::constants::{LOOP_TIME, WINDOW_SIZE};
use crate::formatter;
use crate::view::CritterView;

/// The creature shown until a caller selects another sprite.
const DEFAULT_SPRITE: &str = "emberling";

/// Main application wrapper that manages SDL initialization, window
/// lifecycle, and the per-frame loop that drives the view.
pub struct App {
    view: CritterView,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    paused: bool,
    _sdl_context: Sdl,
}

impl App {
    pub fn new() -> Result<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Critter", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .resizable()
            .position_centered()
            .build()?;

        let canvas = window.into_canvas().accelerated().build()?;

        let texture_creator_static: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));

        let mut view = CritterView::new(texture_creator_static)?;
        let (width, height) = canvas.output_size().map_err(|e| anyhow!(e))?;
        view.set_container(UVec2::new(width, height));
        view.set_sprite(DEFAULT_SPRITE);

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            view,
            canvas,
            event_pump,
            paused: false,
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame: pump events, advance both controllers, draw,
    /// then sleep off whatever is left of the frame's time slice.
    ///
    /// # Returns
    ///
    /// `true` if the viewer should keep running, `false` on exit request.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        formatter::increment_frame();

        for sdl_event in self.event_pump.poll_iter() {
            match sdl_event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                    ..
                } => {
                    event!(tracing::Level::INFO, "Exit requested. Exiting...");
                    return false;
                }
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height) | WindowEvent::Resized(width, height),
                    ..
                } => {
                    self.view.set_container(UVec2::new(width.max(0) as u32, height.max(0) as u32));
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    ..
                } => {
                    self.paused = !self.paused;
                    event!(tracing::Level::INFO, "{}", if self.paused { "Paused" } else { "Unpaused" });
                }
                Event::KeyDown {
                    keycode: Some(keycode), ..
                } => {
                    Self::handle_key(&mut self.view, keycode, start);
                }
                _ => {}
            }
        }

        if !self.paused {
            self.view.tick(start);

            self.canvas.set_draw_color(Color::RGB(24, 24, 32));
            self.canvas.clear();
            if let Err(e) = self.view.draw(&mut self.canvas) {
                error!("Failed to draw view: {e}");
            }
            self.canvas.present();
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Render loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }

        true
    }

    /// Demo keybindings standing in for the game UI: each key is an external
    /// caller requesting a motion or an effect with an explicit policy.
    fn handle_key(view: &mut CritterView, keycode: Keycode, now: Instant) {
        match keycode {
            Keycode::Right => view.play_animation(Motion::WalkRight, StopPolicy::Perpetual, now, Box::new(|| {})),
            Keycode::Left => view.play_animation(Motion::WalkLeft, StopPolicy::Perpetual, now, Box::new(|| {})),
            Keycode::Up => view.play_animation(Motion::WalkUp, StopPolicy::Perpetual, now, Box::new(|| {})),
            Keycode::Down => view.play_animation(Motion::WalkDown, StopPolicy::Perpetual, now, Box::new(|| {})),
            Keycode::A => {
                view.play_animation(Motion::AttackPrimary, StopPolicy::Once, now, Box::new(|| info!("Attack finished")))
            }
            Keycode::S => view.play_animation(
                Motion::AttackSecondary,
                StopPolicy::Loops(3),
                now,
                Box::new(|| info!("Combo finished")),
            ),
            Keycode::E => view.play_animation(
                Motion::Eat,
                StopPolicy::After(Duration::from_secs(2)),
                now,
                Box::new(|| info!("Meal finished")),
            ),
            Keycode::T => view.play_animation(
                Motion::Train,
                StopPolicy::After(Duration::from_secs(3)),
                now,
                Box::new(|| info!("Training finished")),
            ),
            Keycode::Z => view.play_animation(Motion::Sleep, StopPolicy::Perpetual, now, Box::new(|| {})),
            Keycode::X => view.stop_animation(),
            Keycode::Num1 => Self::request_effect(view, Effect::HealSmall, now),
            Keycode::Num2 => Self::request_effect(view, Effect::HealLarge, now),
            Keycode::Num3 => Self::request_effect(view, Effect::HealFull, now),
            Keycode::Num4 => Self::request_effect(view, Effect::Revive, now),
            Keycode::Num5 => Self::request_effect(view, Effect::AttackBoost, now),
            Keycode::Num6 => Self::request_effect(view, Effect::DefenseBoost, now),
            Keycode::Num7 => Self::request_effect(view, Effect::SpeedBoost, now),
            Keycode::Equals => view.adjust_user_scale(0.25),
            Keycode::Minus => view.adjust_user_scale(-0.25),
            _ => {}
        }
    }

    fn request_effect(view: &mut CritterView, effect: Effect, now: Instant) {
        view.show_effect(effect, now, Box::new(|| info!("Effect finished")));
    }
}
