//! Lane Dash entry point
//!
//! Handles platform-specific initialization and runs the frame loop. All
//! gameplay truth lives in `lane_dash::sim`; this shell mirrors it into a
//! three.js scene and the DOM HUD.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use lane_dash::Tuning;
    use lane_dash::consts::*;
    use lane_dash::sim::{Action, GamePhase, GameState, InputState, ObstacleShape, tick};

    // JS bindings for the three.js scene. The scene owns meshes behind
    // opaque handles; the simulation never sees it.
    #[wasm_bindgen(inline_js = "
        let scene, camera, renderer;
        const visuals = new Map();
        let nextHandle = 1;

        export function init_scene(width, height) {
            scene = new THREE.Scene();
            scene.background = new THREE.Color(0x87ceeb);
            scene.fog = new THREE.Fog(0x87ceeb, 10, 50);

            camera = new THREE.PerspectiveCamera(75, width / height, 0.1, 1000);
            camera.position.set(0, 3, 5);
            camera.lookAt(0, 0, 0);

            renderer = new THREE.WebGLRenderer({ antialias: true });
            renderer.setSize(width, height);
            renderer.shadowMap.enabled = true;
            renderer.shadowMap.type = THREE.PCFSoftShadowMap;
            document.body.appendChild(renderer.domElement);

            scene.add(new THREE.AmbientLight(0xffffff, 0.6));
            const sun = new THREE.DirectionalLight(0xffffff, 0.8);
            sun.position.set(5, 10, 5);
            sun.castShadow = true;
            scene.add(sun);

            const ground = new THREE.Mesh(
                new THREE.PlaneGeometry(10, 100),
                new THREE.MeshStandardMaterial({ color: 0x90ee90, roughness: 0.8 })
            );
            ground.rotation.x = -Math.PI / 2;
            ground.receiveShadow = true;
            scene.add(ground);

            for (let i = -2; i <= 2; i += 4) {
                const line = new THREE.Mesh(
                    new THREE.PlaneGeometry(0.2, 100),
                    new THREE.MeshBasicMaterial({ color: 0xffffff })
                );
                line.rotation.x = -Math.PI / 2;
                line.position.set(i, 0.01, 0);
                scene.add(line);
            }
        }

        export function scene_resize(width, height) {
            if (!camera || !renderer) return;
            camera.aspect = width / height;
            camera.updateProjectionMatrix();
            renderer.setSize(width, height);
        }

        function track(mesh) {
            const handle = nextHandle++;
            visuals.set(handle, mesh);
            scene.add(mesh);
            return handle;
        }

        export function create_player_visual(x, y, z) {
            const mesh = new THREE.Mesh(
                new THREE.SphereGeometry(0.5, 32, 32),
                new THREE.MeshStandardMaterial({ color: 0xff6347, metalness: 0.3, roughness: 0.4 })
            );
            mesh.position.set(x, y, z);
            mesh.castShadow = true;
            return track(mesh);
        }

        export function create_obstacle_visual(kind, x, y, z) {
            const dims = kind === 1 ? [0.6, 1.5, 0.6]
                       : kind === 2 ? [1.5, 0.6, 0.6]
                       : [0.8, 0.8, 0.8];
            const mesh = new THREE.Mesh(
                new THREE.BoxGeometry(dims[0], dims[1], dims[2]),
                new THREE.MeshStandardMaterial({
                    color: Math.random() * 0xffffff,
                    metalness: 0.5,
                    roughness: 0.5,
                })
            );
            mesh.position.set(x, y, z);
            mesh.castShadow = true;
            mesh.receiveShadow = true;
            return track(mesh);
        }

        export function remove_visual(handle) {
            const mesh = visuals.get(handle);
            if (mesh) {
                scene.remove(mesh);
                visuals.delete(handle);
            }
        }

        export function set_visual_position(handle, x, y, z) {
            const mesh = visuals.get(handle);
            if (mesh) mesh.position.set(x, y, z);
        }

        export function set_visual_spin(handle, angle) {
            const mesh = visuals.get(handle);
            if (mesh) mesh.rotation.z = angle;
        }

        export function render_frame() {
            if (renderer && scene && camera) renderer.render(scene, camera);
        }
    ")]
    extern "C" {
        fn init_scene(width: f32, height: f32);
        fn scene_resize(width: f32, height: f32);
        fn create_player_visual(x: f32, y: f32, z: f32) -> u32;
        fn create_obstacle_visual(kind: u32, x: f32, y: f32, z: f32) -> u32;
        fn remove_visual(handle: u32);
        fn set_visual_position(handle: u32, x: f32, y: f32, z: f32);
        fn set_visual_spin(handle: u32, angle: f32);
        fn render_frame();
    }

    fn shape_kind(shape: ObstacleShape) -> u32 {
        match shape {
            ObstacleShape::Box => 0,
            ObstacleShape::Tall => 1,
            ObstacleShape::Wide => 2,
        }
    }

    /// Game instance holding simulation state and scene handles
    struct Game {
        state: GameState,
        input: InputState,
        player_visual: u32,
        obstacle_visuals: HashMap<u32, u32>,
        /// Cosmetic roll of the player sphere
        spin: f32,
        // Track phase to toggle overlays once per transition
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning) -> Self {
            Self {
                state: GameState::new(seed, tuning),
                input: InputState::default(),
                player_visual: 0,
                obstacle_visuals: HashMap::new(),
                spin: 0.0,
                last_phase: GamePhase::Idle,
            }
        }

        fn start_run(&mut self) {
            self.state.start();
            self.input.reset();
        }

        /// Mirror simulation state into the scene by diffing obstacle ids
        fn sync_scene(&mut self) {
            let player = &self.state.player;
            set_visual_position(self.player_visual, player.pos.x, player.pos.y, player.pos.z);
            if self.state.phase == GamePhase::Running {
                self.spin += PLAYER_SPIN_RATE;
                set_visual_spin(self.player_visual, self.spin);
            }

            for obstacle in &self.state.obstacles {
                let center = obstacle.center();
                let handle = *self.obstacle_visuals.entry(obstacle.id).or_insert_with(|| {
                    create_obstacle_visual(
                        shape_kind(obstacle.shape),
                        center.x,
                        center.y,
                        center.z,
                    )
                });
                set_visual_position(handle, center.x, center.y, center.z);
            }

            let live: Vec<u32> = self.state.obstacles.iter().map(|o| o.id).collect();
            self.obstacle_visuals.retain(|id, handle| {
                if live.contains(id) {
                    true
                } else {
                    remove_visual(*handle);
                    false
                }
            });
        }

        /// Reflect score/distance and phase overlays in the DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-distance") {
                el.set_text_content(Some(&self.state.distance.to_string()));
            }

            if self.state.phase == self.last_phase {
                return;
            }
            self.last_phase = self.state.phase;

            match self.state.phase {
                GamePhase::Idle => {
                    if let Some(el) = document.get_element_by_id("instructions") {
                        let _ = el.set_attribute("class", "");
                    }
                }
                GamePhase::Running => {
                    if let Some(el) = document.get_element_by_id("instructions") {
                        let _ = el.set_attribute("class", "hidden");
                    }
                    if let Some(el) = document.get_element_by_id("game-over") {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
                GamePhase::GameOver => {
                    if let Some(el) = document.get_element_by_id("final-score") {
                        el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    if let Some(el) = document.get_element_by_id("final-distance") {
                        el.set_text_content(Some(&format!("{}m", self.state.distance)));
                    }
                    if let Some(el) = document.get_element_by_id("game-over") {
                        let _ = el.set_attribute("class", "");
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Optional tuning overrides embedded in the page
        let tuning = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
            .map(|json| Tuning::from_json(&json))
            .unwrap_or_default();

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0) as f32;
        init_scene(width, height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, tuning)));
        {
            let mut g = game.borrow_mut();
            let pos = g.state.player.pos;
            g.player_visual = create_player_visual(pos.x, pos.y, pos.z);
        }

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_resize_handler();

        request_animation_frame(game);

        log::info!("Lane Dash running!");
    }

    /// Map a physical key to its logical action; anything else is ignored
    fn key_action(code: &str) -> Option<Action> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::MoveLeft),
            "ArrowRight" | "KeyD" => Some(Action::MoveRight),
            "Space" => Some(Action::Jump),
            _ => None,
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = key_action(&event.code()) {
                    game.borrow_mut().input.set_intent(action, true);
                    event.prevent_default();
                } else if event.code() == "KeyP" {
                    // Debug: dump the full simulation state
                    log::debug!("{}", game.borrow().state.snapshot_json());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = key_action(&event.code()) {
                    game.borrow_mut().input.set_intent(action, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().start_run();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().start_run();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler() {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(w) = web_sys::window() {
                let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
                let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
                scene_resize(width as f32, height as f32);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { state, input, .. } = &mut *g;
            tick(state, input);
            g.sync_scene();
            render_frame();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_dash::Tuning;
    use lane_dash::sim::{GamePhase, GameState, InputState, tick};

    env_logger::init();
    log::info!("Lane Dash (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 for the playable game");

    // Let a run play itself out with no input: obstacles in the side lanes
    // score, the first center-lane obstacle ends it.
    let mut state = GameState::new(0xC0FFEE, Tuning::default());
    let mut input = InputState::default();
    state.start();

    for _ in 0..20_000 {
        tick(&mut state, &mut input);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Run ended after {} ticks: score {}, distance {}m, {} obstacles live",
        state.time_ticks,
        state.score,
        state.distance,
        state.obstacles.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
