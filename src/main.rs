//! Exam Dash entry point
//!
//! Browser-side wiring: canvas setup, input handlers, HUD updates, and the
//! requestAnimationFrame driver around the simulation tick.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, TouchEvent};

    use exam_dash::assets::Assets;
    use exam_dash::consts::*;
    use exam_dash::sim::{GameState, TickInput, tick};
    use exam_dash::{SavedData, backend, render};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        ctx: web_sys::CanvasRenderingContext2d,
        assets: Assets,
        /// Guards against double-scheduling the frame loop
        loop_active: bool,
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(id: &str, class: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Write to the save-message line under the game-over modal
    fn set_message(text: &str, is_error: bool) {
        set_text("saveMessage", text);
        set_class(
            "saveMessage",
            if is_error {
                "save-message error"
            } else {
                "save-message success"
            },
        );
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Exam Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Offline cache proxy; orthogonal to the game itself
        let _ = window
            .navigator()
            .service_worker()
            .register("/service-worker.js");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: web_sys::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let assets = Assets::preload().expect("asset preload failed");

        // Persisted values seed the session state; the sim never reads the
        // store itself
        let saved = SavedData::load();
        set_text("highScore", &saved.high_score.to_string());
        apply_account_to_dom(saved.account.as_deref());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, saved.high_score),
            input: TickInput::default(),
            ctx,
            assets,
            loop_active: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_buttons(game.clone());
        setup_keyboard(game.clone());
        setup_touch(&canvas, game.clone());

        load_leaderboard();

        // Static idle frame until the first start
        {
            let g = game.borrow();
            render::draw(&g.ctx, &g.state, &g.assets);
        }

        log::info!("Exam Dash running!");
    }

    /// Begin (or restart) a session and enter the frame loop
    fn start_session(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.state.start();
            g.input = TickInput::default();
        }
        set_text("score", "0");
        set_text("startBtn", "Restart");
        set_class("gameOverModal", "modal hidden");
        ensure_loop(game.clone());
    }

    /// Schedule the frame loop if it isn't already running
    fn ensure_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display frame: tick, draw, HUD. The loop unschedules itself the
    /// moment the session leaves Running (pause or game over); resuming or
    /// restarting re-enters it.
    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let input = g.input.clone();
            tick(&mut g.state, &input);
            // Clear one-shot inputs after processing
            g.input.jump = false;

            render::draw(&g.ctx, &g.state, &g.assets);
            set_text("score", &g.state.score.to_string());

            if g.state.is_running() {
                true
            } else {
                g.loop_active = false;
                if g.state.is_over() {
                    on_game_over(&g.state);
                }
                false
            }
        };

        if keep_going {
            request_animation_frame(game);
        }
    }

    /// Game-over side effects, run exactly once per session (the loop stops
    /// right after): persist the high score, surface the modal, and submit
    /// automatically when an account exists
    fn on_game_over(state: &GameState) {
        SavedData::save_high_score(state.high_score);
        set_text("highScore", &state.high_score.to_string());
        set_text("finalScore", &state.score.to_string());
        set_class("gameOverModal", "modal");
        set_message("", false);

        let saved = SavedData::load();
        if let Some(account) = saved.account {
            set_class("saveScoreBtn", "hidden");
            submit_score(account, state.score);
        } else {
            set_class("saveScoreBtn", "");
        }
    }

    /// Fire-and-forget score submission; never awaited by the tick loop
    fn submit_score(name: String, score: u64) {
        spawn_local(async move {
            set_message("Saving...", false);
            match backend::submit_score(&name, score).await {
                Ok(resp) => {
                    let msg = resp
                        .message
                        .unwrap_or_else(|| "Score saved successfully!".to_string());
                    set_message(&msg, false);
                    load_leaderboard();
                }
                Err(msg) => {
                    log::warn!("score submission failed: {}", msg);
                    set_message(&msg, true);
                }
            }
        });
    }

    fn load_leaderboard() {
        spawn_local(async {
            let Some(list) = document().get_element_by_id("leaderboardList") else {
                return;
            };
            list.set_inner_html("<p>Loading...</p>");
            match backend::fetch_leaderboard().await {
                Ok(entries) if entries.is_empty() => {
                    list.set_inner_html("<p>No scores yet. Be the first!</p>");
                }
                Ok(entries) => {
                    let mut html = String::new();
                    for (i, entry) in entries.iter().enumerate() {
                        let rank = i + 1;
                        let medal = match rank {
                            1 => "1st".to_string(),
                            2 => "2nd".to_string(),
                            3 => "3rd".to_string(),
                            n => format!("{n}."),
                        };
                        let class = if rank <= 3 {
                            format!("leaderboard-item top-{rank}")
                        } else {
                            "leaderboard-item".to_string()
                        };
                        html.push_str(&format!(
                            "<div class=\"{class}\"><span>{medal} {}</span>\
                             <span><strong>{}</strong></span></div>",
                            entry.name, entry.score
                        ));
                    }
                    list.set_inner_html(&html);
                    log::info!("leaderboard loaded ({} entries)", entries.len());
                }
                Err(msg) => {
                    log::warn!("leaderboard fetch failed: {}", msg);
                    list.set_inner_html("<p>Failed to load leaderboard</p>");
                }
            }
        });
    }

    /// Reflect the signed-in account (or its absence) in the header and the
    /// name input
    fn apply_account_to_dom(account: Option<&str>) {
        match account {
            Some(name) => {
                set_text("playerNameDisplay", &format!("Player: {name}"));
                set_class("playerNameDisplay", "");
                set_class("signOutBtn", "");
                set_class("googleSignIn", "hidden");
                if let Some(input) = document()
                    .get_element_by_id("playerName")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_value(name);
                    input.set_disabled(true);
                }
            }
            None => {
                set_text("playerNameDisplay", "");
                set_class("playerNameDisplay", "hidden");
                set_class("signOutBtn", "hidden");
                set_class("googleSignIn", "");
                if let Some(input) = document()
                    .get_element_by_id("playerName")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                {
                    input.set_value("");
                    input.set_disabled(false);
                }
            }
        }
    }

    fn on_click(id: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        if let Some(btn) = document().get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(handler);
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            on_click("startBtn", move |_| start_session(&game));
        }
        {
            let game = game.clone();
            on_click("retryBtn", move |_| start_session(&game));
        }
        {
            let game = game.clone();
            on_click("jumpBtn", move |_| {
                game.borrow_mut().input.jump = true;
            });
        }
        {
            let game = game.clone();
            on_click("pauseBtn", move |_| {
                let running = {
                    let mut g = game.borrow_mut();
                    g.state.toggle_pause();
                    g.state.is_running()
                };
                set_text("pauseBtn", if running { "Pause" } else { "Resume" });
                if running {
                    ensure_loop(game.clone());
                }
            });
        }
        {
            let game = game.clone();
            on_click("saveScoreBtn", move |_| {
                let score = game.borrow().state.score;
                let saved = SavedData::load();
                let name = saved.account.unwrap_or_else(|| {
                    document()
                        .get_element_by_id("playerName")
                        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                        .map(|input| input.value().trim().to_string())
                        .unwrap_or_default()
                });
                if name.is_empty() {
                    set_message("Please enter your name!", true);
                    return;
                }
                submit_score(name, score);
            });
        }
        on_click("refreshLeaderboard", move |_| load_leaderboard());
        on_click("closeScoreModalBtn", move |_| {
            set_class("gameOverModal", "modal hidden");
        });
        on_click("signOutBtn", move |_| {
            SavedData::clear_account();
            apply_account_to_dom(None);
        });
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() == "Space" {
                event.prevent_default();
                let start_new = {
                    let g = game.borrow();
                    !g.state.is_running() && g.state.phase != exam_dash::sim::GamePhase::Paused
                };
                if start_new {
                    start_session(&game);
                } else {
                    game.borrow_mut().input.jump = true;
                }
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            game.borrow_mut().input.jump = true;
        });
        let _ =
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Identity-provider callback, invoked from the sign-in button's JS glue
    /// with the opaque credential token
    #[wasm_bindgen]
    pub fn handle_google_credential(credential: String) {
        spawn_local(async move {
            match backend::verify_identity(&credential).await {
                Ok(resp) => {
                    // Prefer the account identifier; fall back to display name
                    if let Some(account) = resp.account.or(resp.name) {
                        log::info!("signed in as {}", account);
                        SavedData::save_account(&account);
                        apply_account_to_dom(Some(&account));
                        set_message(&format!("Signed in as {account}"), false);
                    }
                }
                Err(msg) => {
                    log::warn!("sign-in failed: {}", msg);
                    set_message(&msg, true);
                }
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Exam Dash (native) starting...");
    log::info!("The game targets the browser - run with `trunk serve` for the web version");

    // Smoke-run the simulation headless until the first hazard hit
    let mut state = exam_dash::sim::GameState::new(42, 0);
    state.start();
    let input = exam_dash::sim::TickInput::default();
    let mut ticks = 0u64;
    while state.is_running() && ticks < 100_000 {
        exam_dash::sim::tick(&mut state, &input);
        ticks += 1;
    }
    println!(
        "Headless run ended: score {}, distance {:.0}",
        state.score, state.distance
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
