//! Window, main loop and frame pacing
//!
//! Each frame runs in a fixed order: poll input, update whatever the
//! navigator points at, render the world or editor with the active menu
//! over it, capture a screenshot if one was asked for, present, then sleep
//! off the rest of the frame budget.

use super::audio::SdlAudio;
use super::canvas::capture;
use super::events;
use crate::appdata::AppData;
use crate::error::GameError;
use crate::game::{Editor, GameContext, GameManager, LevelSource, PlayerStats};
use crate::gfx::Renderer;
use crate::gfx::render::{TEXT_COLOR, text_width};
use crate::input::InputState;
use crate::settings::Settings;
use crate::view::{Navigator, ViewContext, ViewId, ViewSet};
use chrono::Local;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use std::net::TcpStream;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Logical screen width; the window is this times `guiScale`
pub const GAME_WIDTH: u32 = 480;
/// Logical screen height
pub const GAME_HEIGHT: u32 = 270;

/// Longest step the simulation takes, so a stalled frame cannot tunnel
/// objects through walls
const MAX_DT: f32 = 0.05;

/// Which of the two games the container runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    SquareMonster,
    CrusadeOfAges,
}

impl GameKind {
    pub fn title(self) -> &'static str {
        match self {
            GameKind::SquareMonster => "Square Monster",
            GameKind::CrusadeOfAges => "Crusade of Ages",
        }
    }

    pub fn views(self) -> ViewSet {
        match self {
            GameKind::SquareMonster => ViewSet::square_monster(),
            GameKind::CrusadeOfAges => ViewSet::crusade_of_ages(),
        }
    }

    /// Menu the editor opens on Escape
    pub fn editor_menu(self) -> ViewId {
        match self {
            GameKind::SquareMonster => ViewId::CreaMenu,
            GameKind::CrusadeOfAges => ViewId::PausedEdit,
        }
    }
}

/// What a launcher hands to the container
pub struct Launch {
    pub kind: GameKind,
    pub settings: Settings,
    pub appdata: AppData,
    pub asset_root: PathBuf,
    pub levels: LevelSource,
    pub session: Option<TcpStream>,
}

pub struct GameContainer {
    _sdl: Sdl,
    _audio_subsystem: AudioSubsystem,
    canvas: Canvas<Window>,
    pump: EventPump,
    audio: SdlAudio,
    input: InputState,
    settings: Settings,
    appdata: AppData,
    nav: Navigator,
    views: ViewSet,
    editor: Editor,
    stats: PlayerStats,
    manager: GameManager,
    _session: Option<TcpStream>,
    fps: u32,
}

impl GameContainer {
    pub fn new(launch: Launch) -> Result<Self, GameError> {
        let Launch {
            kind,
            settings,
            appdata,
            asset_root,
            levels,
            session,
        } = launch;

        let sdl = sdl2::init().map_err(GameError::Platform)?;
        let video = sdl.video().map_err(GameError::Platform)?;
        let audio_subsystem = sdl.audio().map_err(GameError::Platform)?;

        let scale = settings.scale.max(1.0);
        let window_width = (GAME_WIDTH as f32 * scale) as u32;
        let window_height = (GAME_HEIGHT as f32 * scale) as u32;
        println!("{}: {}x{} (scale {})", kind.title(), window_width, window_height, scale);

        let window = video
            .window(kind.title(), window_width, window_height)
            .position_centered()
            .build()
            .map_err(|e| GameError::Platform(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .build()
            .map_err(|e| GameError::Platform(e.to_string()))?;

        // Set logical size for automatic pixel-perfect scaling
        canvas
            .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
            .map_err(|e| GameError::Platform(e.to_string()))?;
        canvas.set_blend_mode(BlendMode::Blend);

        let pump = sdl.event_pump().map_err(GameError::Platform)?;
        let mut audio = SdlAudio::open(&asset_root).map_err(GameError::Platform)?;
        let manager = GameManager::new(levels, &mut audio)?;
        let stats = PlayerStats::load_or_default(appdata.stats_file());

        Ok(GameContainer {
            _sdl: sdl,
            _audio_subsystem: audio_subsystem,
            canvas,
            pump,
            audio,
            input: InputState::new(),
            settings,
            appdata,
            nav: Navigator::new(ViewId::Title),
            views: kind.views(),
            editor: Editor::new(kind.editor_menu()),
            stats,
            manager,
            _session: session,
            fps: 0,
        })
    }

    /// Run until the window closes or a menu asks to quit
    pub fn run(&mut self) -> Result<(), GameError> {
        let frame_budget = Duration::from_secs_f64(1.0 / self.settings.max_fps.max(1) as f64);
        let mut last = Instant::now();
        let mut fps_timer = Instant::now();
        let mut frames = 0;

        loop {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last).as_secs_f32().min(MAX_DT);
            last = frame_start;

            if events::poll(&mut self.pump, &mut self.input) {
                break;
            }

            self.update(dt);
            if self.nav.quit_requested() {
                break;
            }

            self.render().map_err(GameError::Platform)?;

            if self.manager.take_screenshot_request() {
                match capture(&self.canvas) {
                    Ok(shot) => {
                        self.manager.save_screenshot(&shot, &self.appdata, &Local::now());
                    }
                    Err(e) => log::error!("Could not capture screenshot: {}", e),
                }
            }

            self.canvas.present();

            frames += 1;
            if fps_timer.elapsed() >= Duration::from_secs(1) {
                self.fps = frames;
                frames = 0;
                fps_timer = Instant::now();
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        }

        if let Err(e) = self.stats.save(self.appdata.stats_file()) {
            log::error!("Could not save player stats: {}", e);
        }
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        match self.nav.current() {
            ViewId::Game => {
                let mut ctx = GameContext {
                    input: &self.input,
                    nav: &mut self.nav,
                    audio: &mut self.audio,
                    stats: &mut self.stats,
                };
                self.manager.update(&mut ctx, dt);
            }
            ViewId::Creative => self.editor.update(&self.input, &mut self.nav, dt),
            _ => {
                let mut ctx = ViewContext {
                    input: &self.input,
                    nav: &mut self.nav,
                    settings: &self.settings,
                    audio: &mut self.audio,
                    editor: &mut self.editor,
                    stats: &self.stats,
                    appdata: &self.appdata,
                };
                self.views.update(&mut ctx);
            }
        }
    }

    fn render(&mut self) -> Result<(), String> {
        let current = self.nav.current();
        let r: &mut dyn Renderer = &mut self.canvas;
        let (w, h) = r.size();
        r.fill_rect(0, 0, w, h, 0xff000000)?;

        if current.shows_world() {
            self.manager.render(r, &self.settings)?;
        } else if current.shows_editor() {
            self.editor.render(r)?;
        }
        self.views.render(current, r, &self.settings)?;

        if self.settings.show_fps {
            let label = format!("{} FPS", self.fps);
            let x = w as i32 - text_width(&label, 1) as i32 - 4;
            r.draw_text(&label, x, 4, TEXT_COLOR, 1)?;
        }
        Ok(())
    }
}
