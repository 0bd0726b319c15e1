use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use slidekit_core::{Inputs, Key, Slider, SliderConfig, TimerHandle, VisibilityProvider};

#[wasm_bindgen]
pub struct WasmSlider {
    core: Slider,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: serde::Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    swb::to_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

/// Visibility callback: `isVisible(index: number, rootMarginPx: number) -> boolean`.
struct JsVisibility {
    f: Function,
}

impl VisibilityProvider for JsVisibility {
    fn is_visible(&mut self, index: usize, root_margin_px: f32) -> bool {
        let index = JsValue::from_f64(index as f64);
        let margin = JsValue::from_f64(root_margin_px as f64);
        match self.f.call2(&JsValue::UNDEFINED, &index, &margin) {
            Ok(val) => val.is_truthy(),
            Err(_) => false,
        }
    }
}

#[wasm_bindgen]
impl WasmSlider {
    /// Create a slider. `config` is an options object or undefined/null for defaults.
    /// Example:
    ///   new WasmSlider({ slidesToShow: 3, loop: false }, 12, window.innerWidth)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, item_count: u32, viewport_width: f32) -> Result<WasmSlider, JsError> {
        console_error_panic_hook::set_once();

        let cfg: SliderConfig = if jsvalue_is_undefined_or_null(&config) {
            SliderConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(WasmSlider {
            core: Slider::new(cfg, item_count as usize, viewport_width),
        })
    }

    /// Create a slider from a JSON options string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, item_count: u32, viewport_width: f32) -> Result<WasmSlider, JsError> {
        console_error_panic_hook::set_once();
        let cfg = SliderConfig::from_json(json)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(WasmSlider {
            core: Slider::new(cfg, item_count as usize, viewport_width),
        })
    }

    /// Advance by `dt_ms` with an optional `{ events, commands }` batch. Returns
    /// `{ events, frame }`.
    #[wasm_bindgen]
    pub fn step(&mut self, dt_ms: f64, inputs: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs) {
            Inputs::default()
        } else {
            swb::from_value(inputs).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out = self.core.step(dt_ms, inputs);
        to_js(&out, "outputs")
    }

    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&mut self, index: i32) {
        self.core.go_to_slide(index as i64);
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&mut self) {
        self.core.next_slide();
    }

    #[wasm_bindgen(js_name = prevSlide)]
    pub fn prev_slide(&mut self) {
        self.core.prev_slide();
    }

    /// Returns the run handle, or undefined when autoplay cannot start.
    #[wasm_bindgen(js_name = startAutoplay)]
    pub fn start_autoplay(&mut self) -> Option<u32> {
        self.core.start_autoplay().map(|h| h.0)
    }

    #[wasm_bindgen(js_name = stopAutoplay)]
    pub fn stop_autoplay(&mut self) {
        self.core.stop_autoplay();
    }

    /// Stop the run `handle` came from. Returns false for a stale handle.
    #[wasm_bindgen(js_name = stopAutoplayHandle)]
    pub fn stop_autoplay_handle(&mut self, handle: u32) -> bool {
        self.core.stop_autoplay_handle(TimerHandle(handle))
    }

    #[wasm_bindgen]
    pub fn update(&mut self) {
        self.core.update();
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.core.destroy();
    }

    #[wasm_bindgen(js_name = pauseMarquee)]
    pub fn pause_marquee(&mut self) {
        self.core.pause_marquee();
    }

    #[wasm_bindgen(js_name = resumeMarquee)]
    pub fn resume_marquee(&mut self) {
        self.core.resume_marquee();
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32) {
        self.core.resize(width);
    }

    #[wasm_bindgen(js_name = setItemCount)]
    pub fn set_item_count(&mut self, count: u32) {
        self.core.set_item_count(count as usize);
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        let cfg: SliderConfig = if jsvalue_is_undefined_or_null(&config) {
            SliderConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        self.core.set_config(cfg);
        Ok(())
    }

    /// Handle a DOM key name. Returns true when the key was consumed, so the
    /// caller can `preventDefault()`.
    #[wasm_bindgen]
    pub fn key(&mut self, key: &str) -> bool {
        let key = match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            _ => return false,
        };
        self.core.key(key)
    }

    /// Ask `isVisible(index, rootMarginPx)` about every item still waiting to
    /// load. Returns the indices that loaded.
    #[wasm_bindgen(js_name = pollVisibility)]
    pub fn poll_visibility(&mut self, is_visible: Function) -> Vec<u32> {
        let mut provider = JsVisibility { f: is_visible };
        self.core
            .poll_visibility(&mut provider)
            .into_iter()
            .map(|i| i as u32)
            .collect()
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.core.current_index() as u32
    }

    #[wasm_bindgen(js_name = totalSlides)]
    pub fn total_slides(&self) -> u32 {
        self.core.total_slides() as u32
    }

    #[wasm_bindgen(js_name = maxIndex)]
    pub fn max_index(&self) -> u32 {
        self.core.max_index() as u32
    }

    #[wasm_bindgen(js_name = isAutoplayRunning)]
    pub fn is_autoplay_running(&self) -> bool {
        self.core.is_autoplay_running()
    }

    #[wasm_bindgen(js_name = isDestroyed)]
    pub fn is_destroyed(&self) -> bool {
        self.core.is_destroyed()
    }

    #[wasm_bindgen(js_name = canGoPrev)]
    pub fn can_go_prev(&self) -> bool {
        self.core.can_go_prev()
    }

    #[wasm_bindgen(js_name = canGoNext)]
    pub fn can_go_next(&self) -> bool {
        self.core.can_go_next()
    }

    #[wasm_bindgen(js_name = dotCount)]
    pub fn dot_count(&self) -> u32 {
        self.core.dot_count() as u32
    }

    #[wasm_bindgen(js_name = slideWidthCss)]
    pub fn slide_width_css(&self) -> String {
        self.core.slide_width_css()
    }

    #[wasm_bindgen]
    pub fn frame(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.frame(), "frame")
    }

    #[wasm_bindgen(js_name = renderSlide)]
    pub fn render_slide(&mut self, index: u32) -> Result<JsValue, JsError> {
        let props = self.core.render_slide(index as usize);
        to_js(&props, "renderSlide")
    }

    #[wasm_bindgen(js_name = slideAria)]
    pub fn slide_aria(&self, index: u32) -> Result<JsValue, JsError> {
        to_js(&self.core.slide_aria(index as usize), "slideAria")
    }

    #[wasm_bindgen(js_name = containerAria)]
    pub fn container_aria(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.container_aria(), "containerAria")
    }

    #[wasm_bindgen(js_name = prevLabel)]
    pub fn prev_label(&self) -> String {
        self.core.prev_label().to_string()
    }

    #[wasm_bindgen(js_name = nextLabel)]
    pub fn next_label(&self) -> String {
        self.core.next_label().to_string()
    }

    #[wasm_bindgen(js_name = bulletLabel)]
    pub fn bullet_label(&self, index: u32) -> String {
        self.core.bullet_label(index as usize)
    }

    /// Live-region `{ text, politeness }`, or null in marquee mode.
    #[wasm_bindgen]
    pub fn announcement(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.announcement(), "announcement")
    }

    /// Item indices in render order (doubled in marquee mode).
    #[wasm_bindgen(js_name = renderSequence)]
    pub fn render_sequence(&self) -> Vec<u32> {
        self.core
            .render_sequence()
            .into_iter()
            .map(|i| i as u32)
            .collect()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
