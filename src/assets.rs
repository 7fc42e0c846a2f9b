//! Sprite preloading
//!
//! Images are kicked off once at startup and tracked by a shared counter.
//! Load errors count as loaded too: a missing sprite degrades that entity to
//! a placeholder rectangle without ever blocking the game.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

use crate::sim::ObstacleKind;

/// All sprite images used by the renderer
pub struct Assets {
    pub background: HtmlImageElement,
    pub collectible: HtmlImageElement,
    /// Indexed in OBSTACLE_KINDS order
    obstacles: [HtmlImageElement; 7],
    pub run_frames: Vec<HtmlImageElement>,
    pub jump: HtmlImageElement,
    pub fall: HtmlImageElement,
    loaded: Rc<Cell<usize>>,
    total: usize,
}

impl Assets {
    /// Start preloading every sprite. Returns immediately; `all_loaded`
    /// flips once every load/error handler has fired.
    pub fn preload() -> Result<Self, wasm_bindgen::JsValue> {
        let loaded = Rc::new(Cell::new(0usize));

        let image = |src: &str| -> Result<HtmlImageElement, wasm_bindgen::JsValue> {
            let img = HtmlImageElement::new()?;
            let counter = loaded.clone();
            let on_done = Closure::<dyn FnMut()>::new(move || {
                counter.set(counter.get() + 1);
            });
            // Error counts as loaded so one broken asset can't wedge startup
            img.set_onload(Some(on_done.as_ref().unchecked_ref()));
            img.set_onerror(Some(on_done.as_ref().unchecked_ref()));
            on_done.forget();
            img.set_src(src);
            Ok(img)
        };

        let background = image("/static/characters/bg.jpg")?;
        let collectible = image("/static/characters/attendence_sheet.jpg")?;
        let obstacles = [
            image("/static/characters/books.jpg")?,
            image("/static/characters/coffee.jpg")?,
            // Assignments share the papers sprite
            image("/static/characters/papers.jpg")?,
            image("/static/characters/papers.jpg")?,
            image("/static/characters/pizza.jpg")?,
            image("/static/characters/spills.jpg")?,
            image("/static/characters/dues.jpg")?,
        ];
        let run_frames = ["run1", "run2", "run3", "run4"]
            .iter()
            .map(|name| image(&format!("/static/characters/{name}.jpg")))
            .collect::<Result<Vec<_>, _>>()?;
        let jump = image("/static/characters/jump.jpg")?;
        let fall = image("/static/characters/fall.jpg")?;

        let total = 2 + obstacles.len() + run_frames.len() + 2;
        log::info!("preloading {} sprites", total);

        Ok(Self {
            background,
            collectible,
            obstacles,
            run_frames,
            jump,
            fall,
            loaded,
            total,
        })
    }

    pub fn all_loaded(&self) -> bool {
        self.loaded.get() >= self.total
    }

    pub fn obstacle_image(&self, kind: ObstacleKind) -> &HtmlImageElement {
        let idx = match kind {
            ObstacleKind::Book => 0,
            ObstacleKind::Coffee => 1,
            ObstacleKind::Assignment => 2,
            ObstacleKind::Papers => 3,
            ObstacleKind::Pizza => 4,
            ObstacleKind::Spills => 5,
            ObstacleKind::Dues => 6,
        };
        &self.obstacles[idx]
    }
}
