//! Environment provider for the performance subsystem.
//!
//! All browser globals the profiler and sampler read go through the
//! [`Environment`] trait, so tests can drive them with a scripted double.
//! [`EnvironmentSignals`] is the single place where missing signals are
//! replaced by their defaults.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::types::HeapUsage;

/// Fallback for `navigator.deviceMemory` when unreported.
pub const DEFAULT_MEMORY_GB: f64 = 4.0;
/// Fallback for `navigator.hardwareConcurrency` when unreported.
pub const DEFAULT_CPU_CORES: u32 = 4;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Identifier of a pending repaint callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

/// Read surface of the host runtime.
///
/// Every query is optional; `None` means the host does not expose the
/// signal.
pub trait Environment {
    /// Whether a browser window is present at all.
    fn is_browser(&self) -> bool;

    fn user_agent(&self) -> Option<String>;

    /// Approximate device RAM in GB.
    fn device_memory_gb(&self) -> Option<f64>;

    /// Logical CPU core count.
    fn hardware_concurrency(&self) -> Option<u32>;

    /// Display refresh rate in Hz. Rarely implemented by browsers.
    fn refresh_rate(&self) -> Option<f64>;

    fn heap_usage(&self) -> Option<HeapUsage>;

    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> f64;

    /// Navigation start on the same clock as [`Environment::now_ms`].
    fn navigation_start_ms(&self) -> f64 {
        0.0
    }

    fn prefers_reduced_motion(&self) -> bool;

    /// Schedule `callback` for the next repaint opportunity.
    ///
    /// Returns `None` when the host has no repaint scheduler.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId>;

    fn cancel_frame(&self, id: FrameId);
}

/// Fully-populated environment signals used for device profiling.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSignals {
    pub user_agent: String,
    pub memory_gb: f64,
    pub cpu_cores: u32,
    pub refresh_rate_hz: Option<f64>,
}

impl EnvironmentSignals {
    /// Read every signal once and fill in defaults.
    ///
    /// Zero values count as unreported, matching how browsers behave when a
    /// property exists but is masked.
    pub fn read(env: &impl Environment) -> Self {
        EnvironmentSignals {
            user_agent: env.user_agent().unwrap_or_default(),
            memory_gb: env
                .device_memory_gb()
                .filter(|gb| *gb > 0.0)
                .unwrap_or(DEFAULT_MEMORY_GB),
            cpu_cores: env
                .hardware_concurrency()
                .filter(|cores| *cores > 0)
                .unwrap_or(DEFAULT_CPU_CORES),
            refresh_rate_hz: env.refresh_rate().filter(|hz| *hz > 0.0),
        }
    }
}

/// Whether the user asked the OS for reduced motion. False outside a browser.
pub fn prefers_reduced_motion(env: &impl Environment) -> bool {
    env.is_browser() && env.prefers_reduced_motion()
}

type FrameSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Callbacks waiting on a repaint, keyed by frame id.
///
/// The JS closure handed to the browser only holds a slot. Releasing a
/// canceled frame empties its slot, so the callback and everything it
/// captures are dropped even though the closure never runs.
#[derive(Clone, Default)]
struct FrameSlots {
    slots: Rc<RefCell<HashMap<i32, FrameSlot>>>,
}

impl FrameSlots {
    fn slot(callback: Box<dyn FnOnce()>) -> FrameSlot {
        Rc::new(RefCell::new(Some(callback)))
    }

    fn track(&self, id: i32, slot: FrameSlot) {
        self.slots.borrow_mut().insert(id, slot);
    }

    /// Forget the frame and drop its callback if it has not run.
    fn release(&self, id: i32) {
        let slot = self.slots.borrow_mut().remove(&id);
        if let Some(slot) = slot {
            let _ = slot.borrow_mut().take();
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Run the slot's callback once. `id` is unset if the browser fired
    /// before the request returned.
    fn fire(&self, id: Option<i32>, slot: &FrameSlot) {
        if let Some(id) = id {
            self.slots.borrow_mut().remove(&id);
        }
        let callback = slot.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }
}

/// [`Environment`] backed by `web_sys::window()`.
#[derive(Clone)]
pub struct BrowserEnvironment {
    window: Option<web_sys::Window>,
    frames: FrameSlots,
}

impl BrowserEnvironment {
    pub fn new() -> Self {
        BrowserEnvironment {
            window: web_sys::window(),
            frames: FrameSlots::default(),
        }
    }

    fn navigator_number(&self, property: &str) -> Option<f64> {
        let navigator = self.window.as_ref()?.navigator();
        js_sys::Reflect::get(&navigator, &JsValue::from_str(property))
            .ok()?
            .as_f64()
    }
}

impl Default for BrowserEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for BrowserEnvironment {
    fn is_browser(&self) -> bool {
        self.window.is_some()
    }

    fn user_agent(&self) -> Option<String> {
        self.window.as_ref()?.navigator().user_agent().ok()
    }

    fn device_memory_gb(&self) -> Option<f64> {
        // Non-standard, Chromium only
        self.navigator_number("deviceMemory")
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.navigator_number("hardwareConcurrency")
            .map(|cores| cores as u32)
    }

    fn refresh_rate(&self) -> Option<f64> {
        let screen = self.window.as_ref()?.screen().ok()?;
        js_sys::Reflect::get(&screen, &JsValue::from_str("refreshRate"))
            .ok()?
            .as_f64()
    }

    fn heap_usage(&self) -> Option<HeapUsage> {
        let performance = self.window.as_ref()?.performance()?;
        let memory = js_sys::Reflect::get(&performance, &JsValue::from_str("memory")).ok()?;
        if memory.is_undefined() || memory.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value(memory).ok()
    }

    fn now_ms(&self) -> f64 {
        self.window
            .as_ref()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .as_ref()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
        let window = self.window.as_ref()?;
        let slot = FrameSlots::slot(callback);
        let assigned = Rc::new(Cell::new(None));

        let closure = {
            let frames = self.frames.clone();
            let slot = Rc::clone(&slot);
            let assigned = Rc::clone(&assigned);
            Closure::once_into_js(move || frames.fire(assigned.get(), &slot))
        };
        let id = window
            .request_animation_frame(closure.unchecked_ref())
            .ok()?;
        assigned.set(Some(id));
        self.frames.track(id, slot);
        Some(FrameId(id))
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Some(window) = self.window.as_ref() {
            let _ = window.cancel_animation_frame(id.0);
        }
        self.frames.release(id.0);
    }
}

/// Scripted environment for unit tests.
#[cfg(test)]
pub(crate) mod fake {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    pub struct FakeEnvironment {
        pub browser: bool,
        pub user_agent: Option<String>,
        pub memory_gb: Option<f64>,
        pub cores: Option<u32>,
        pub refresh_rate: Option<f64>,
        pub heap: Cell<Option<HeapUsage>>,
        pub reduced_motion: bool,
        pub navigation_start: f64,
        pub clock: Cell<f64>,
        pub next_id: Cell<i32>,
        pub pending: RefCell<Vec<(FrameId, Box<dyn FnOnce()>)>>,
        pub canceled: RefCell<Vec<FrameId>>,
    }

    impl FakeEnvironment {
        /// A desktop browser with 8 GB, 8 cores and a 120 Hz display.
        pub fn desktop() -> Self {
            FakeEnvironment {
                browser: true,
                user_agent: Some(
                    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0".to_string(),
                ),
                memory_gb: Some(8.0),
                cores: Some(8),
                refresh_rate: Some(120.0),
                ..Default::default()
            }
        }

        pub fn advance(&self, ms: f64) {
            self.clock.set(self.clock.get() + ms);
        }

        pub fn pending_frames(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Run every callback registered before this call.
        pub fn fire_frame(&self) {
            let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback();
            }
        }
    }

    impl Environment for FakeEnvironment {
        fn is_browser(&self) -> bool {
            self.browser
        }

        fn user_agent(&self) -> Option<String> {
            self.user_agent.clone()
        }

        fn device_memory_gb(&self) -> Option<f64> {
            self.memory_gb
        }

        fn hardware_concurrency(&self) -> Option<u32> {
            self.cores
        }

        fn refresh_rate(&self) -> Option<f64> {
            self.refresh_rate
        }

        fn heap_usage(&self) -> Option<HeapUsage> {
            self.heap.get()
        }

        fn now_ms(&self) -> f64 {
            self.clock.get()
        }

        fn navigation_start_ms(&self) -> f64 {
            self.navigation_start
        }

        fn prefers_reduced_motion(&self) -> bool {
            self.reduced_motion
        }

        fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameId> {
            if !self.browser {
                return None;
            }
            let id = FrameId(self.next_id.get() + 1);
            self.next_id.set(id.0);
            self.pending.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel_frame(&self, id: FrameId) {
            self.pending.borrow_mut().retain(|(pending, _)| *pending != id);
            self.canceled.borrow_mut().push(id);
        }
    }
}
