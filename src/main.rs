//! Fish Frenzy entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use fish_frenzy::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use fish_frenzy::Settings;
    use fish_frenzy::consts::*;
    use fish_frenzy::platform::TickClock;
    use fish_frenzy::renderer::{RenderState, WaveClock, scene_vertices};
    use fish_frenzy::sim::{GameState, Snapshot, TickInput, countdown, drain_events, pointer_moved, tick};
    use fish_frenzy::ui::{Banner, HudText};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        clock: TickClock,
        waves: WaveClock,
        render_state: Option<RenderState>,
        idle_mode: bool,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            let seed = round_seed(&settings);
            Self {
                state: GameState::new(seed),
                idle_mode: settings.idle_mode,
                settings,
                clock: TickClock::new(),
                waves: WaveClock::default(),
                render_state: None,
            }
        }

        /// Pointer sample in canvas CSS pixels, scaled to world units
        fn pointer(&mut self, x: f32, y: f32, client_w: f32, client_h: f32) {
            if client_w <= 0.0 || client_h <= 0.0 {
                return;
            }
            let world_x = x * WINDOW_WIDTH / client_w;
            let world_y = y * WINDOW_HEIGHT / client_h;
            pointer_moved(&mut self.state, world_x, world_y);
        }

        /// Start a fresh round
        fn restart(&mut self) {
            let seed = round_seed(&self.settings);
            self.state.restart(seed);
            self.clock.reset();
        }

        /// Run whatever frame and countdown ticks are due
        fn update(&mut self, now_ms: f64) {
            let ticks = self.clock.advance_to(now_ms);
            let input = TickInput {
                pointer: None,
                idle_mode: self.idle_mode,
            };
            for _ in 0..ticks.frames {
                tick(&mut self.state, &input);
                self.waves.step();
            }
            for _ in 0..ticks.seconds {
                countdown(&mut self.state);
            }
            for event in drain_events(&mut self.state) {
                super::log_event(&event);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snap = Snapshot::capture(&self.state);
            let vertices = scene_vertices(&snap, &self.waves, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snap = Snapshot::capture(&self.state);
            let hud = HudText::from_snapshot(&snap);

            if let Some(el) = document.get_element_by_id("hud") {
                let class = if snap.game_over { "hidden" } else { "" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("hud-size") {
                if self.settings.show_size {
                    el.set_text_content(Some(&hud.size));
                } else {
                    el.set_text_content(None);
                }
            }
            if let Some(el) = document.get_element_by_id("hud-time") {
                el.set_text_content(Some(&hud.time));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match Banner::from_snapshot(&snap) {
                    Some(banner) => {
                        let _ = el.set_attribute("class", if snap.won { "won" } else { "lost" });
                        if let Some(title) = document.get_element_by_id("game-over-title") {
                            title.set_text_content(Some(banner.title));
                        }
                        if let Some(score) = document.get_element_by_id("final-score") {
                            score.set_text_content(Some(&banner.score_line));
                        }
                        if let Some(prompt) = document.get_element_by_id("restart-prompt") {
                            prompt.set_text_content(Some(banner.prompt));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    fn round_seed(settings: &Settings) -> u64 {
        settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Fish Frenzy starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        // Backing store at device resolution; CSS keeps the 2:1 world aspect
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(settings)));
        log::info!("Game initialized with seed: {}", game.borrow().state.seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::default(),
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("Failed to get adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Fish Frenzy running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - pointer-locked player
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                game.borrow_mut()
                    .pointer(event.offset_x() as f32, event.offset_y() as f32, w, h);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click after a round ends starts the next one
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.is_over() {
                    g.restart();
                    log::info!("Game restarted with seed: {}", g.state.seed);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move / start
        for kind in ["touchmove", "touchstart"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let mut g = game.borrow_mut();
                if event.type_() == "touchstart" && g.state.is_over() {
                    g.restart();
                    return;
                }
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                let rect = canvas_clone.get_bounding_client_rect();
                let x = touch.client_x() as f32 - rect.left() as f32;
                let y = touch.client_y() as f32 - rect.top() as f32;
                g.pointer(x, y, w, h);
            });
            let _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "F2" => {
                        event.prevent_default();
                        g.restart();
                        log::info!("Game restarted with seed: {}", g.state.seed);
                    }
                    "i" | "I" => {
                        g.idle_mode = !g.idle_mode;
                        log::info!("Idle mode: {}", g.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Report a simulation event
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::FishEaten {
            id,
            color,
            size_class,
            points,
        } => log::info!("Ate {:?} {:?} fish #{} (+{})", color, size_class, id, points),
        GameEvent::PlayerEaten { id, color } => {
            log::info!("Player eaten by {:?} fish #{}", color, id)
        }
        GameEvent::TimeUp => log::info!("Time up!"),
        GameEvent::RosterCleared => log::info!("Every fish eaten!"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use fish_frenzy::Settings;
    use fish_frenzy::consts::FRAME_INTERVAL_MS;
    use fish_frenzy::platform::TickClock;
    use fish_frenzy::sim::{GameState, Snapshot, TickInput, countdown, drain_events, tick};
    use fish_frenzy::ui::{Banner, HudText};

    env_logger::init();
    log::info!("Fish Frenzy (native) starting...");
    log::info!("Native mode plays one headless autopilot round - run with `trunk serve` for web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut state = GameState::new(seed);
    let mut clock = TickClock::new();
    let input = TickInput {
        pointer: None,
        idle_mode: true,
    };

    // Simulated wall clock: one frame interval per step
    while state.is_playing() {
        let ticks = clock.advance(FRAME_INTERVAL_MS);
        for _ in 0..ticks.frames {
            tick(&mut state, &input);
        }
        for _ in 0..ticks.seconds {
            countdown(&mut state);
        }
        for event in drain_events(&mut state) {
            log_event(&event);
        }
    }

    let snap = Snapshot::capture(&state);
    let hud = HudText::from_snapshot(&snap);
    if let Some(banner) = Banner::from_snapshot(&snap) {
        println!("\n{}", banner.title);
        println!("{}", banner.score_line);
    }
    println!("{} | {} | {} | seed {}", hud.score, hud.size, hud.time, seed);
}
