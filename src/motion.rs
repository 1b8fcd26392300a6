use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::perf::{
    optimal_duration, settings::optimize_animations, AnimationOptimizations, DeviceCapabilities,
    PerformanceSettings,
};

/// Device profile and derived policy, provided to every section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionContext {
    pub capabilities: DeviceCapabilities,
    pub settings: PerformanceSettings,
    pub optimizations: AnimationOptimizations,
    pub reduced_motion: bool,
}

impl MotionContext {
    pub fn new(
        capabilities: DeviceCapabilities,
        settings: PerformanceSettings,
        reduced_motion: bool,
    ) -> Self {
        MotionContext {
            capabilities,
            settings,
            optimizations: optimize_animations(&settings),
            reduced_motion,
        }
    }

    /// Whether decorative motion should run at all.
    pub fn animate(&self) -> bool {
        self.settings.enable_animations && !self.reduced_motion
    }

    /// Whether heavy decorations (grid lines, floating particles) are rendered.
    pub fn complex_effects(&self) -> bool {
        self.settings.enable_complex_effects && !self.reduced_motion
    }

    /// CSS duration in seconds for a nominal `base_secs` animation.
    pub fn duration(&self, base_secs: f64) -> String {
        format!("{:.2}s", optimal_duration(&self.capabilities, base_secs))
    }
}

/// Attributes written to `<html>`; the stylesheet keys animation rules off them.
pub fn root_attributes(ctx: &MotionContext) -> Vec<(&'static str, String)> {
    vec![
        (
            "data-animations",
            if ctx.animate() { "on" } else { "off" }.to_string(),
        ),
        (
            "data-motion",
            if ctx.reduced_motion || ctx.optimizations.reduce_motion {
                "reduced"
            } else {
                "full"
            }
            .to_string(),
        ),
        (
            "data-effects",
            ctx.settings.effect_quality.as_str().to_string(),
        ),
        (
            "data-animation-quality",
            ctx.settings.animation_quality.as_str().to_string(),
        ),
        (
            "style",
            format!("--animation-speed: {}", ctx.optimizations.animation_speed),
        ),
    ]
}

/// Apply the motion policy by setting data attributes on `<html>`.
pub fn apply_motion(ctx: &MotionContext) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                for (name, value) in root_attributes(ctx) {
                    let _ = html.set_attribute(name, &value);
                }
            }
        }
    }
}

pub fn use_motion() -> MotionContext {
    use_context::<MotionContext>().unwrap_or_else(|| {
        let caps = DeviceCapabilities::default();
        MotionContext::new(caps, crate::perf::resolve(&caps), false)
    })
}

/// Share of an element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer plus the callback it calls; disconnects when dropped.
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_reveal(element: &web_sys::Element, on_visible: impl Fn() + 'static) -> Option<RevealObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            on_visible();
        }
    });

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;
    observer.observe(element);
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// True once `target` has scrolled into view; never goes back to false.
///
/// Reveals immediately where `IntersectionObserver` is unavailable.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        match observe_reveal(&element, move || set_revealed.set(true)) {
            Some(observer) => {
                let observer = SendWrapper::new(observer);
                on_cleanup(move || drop(observer));
            }
            None => set_revealed.set(true),
        }
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::resolve;

    fn context(is_mobile: bool, is_low_end: bool, reduced_motion: bool) -> MotionContext {
        let caps = DeviceCapabilities {
            is_mobile,
            is_low_end,
            has_high_refresh_rate: !is_low_end,
            memory_gb: 8.0,
            cpu_cores: 8,
        };
        MotionContext::new(caps, resolve(&caps), reduced_motion)
    }

    fn attr(ctx: &MotionContext, name: &str) -> String {
        root_attributes(ctx)
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
            .unwrap_or_default()
    }

    #[test]
    fn test_desktop_gets_full_motion() {
        let ctx = context(false, false, false);
        assert!(ctx.animate());
        assert!(ctx.complex_effects());
        assert_eq!(attr(&ctx, "data-animations"), "on");
        assert_eq!(attr(&ctx, "data-motion"), "full");
        assert_eq!(attr(&ctx, "data-effects"), "full");
        assert_eq!(attr(&ctx, "style"), "--animation-speed: 1");
    }

    #[test]
    fn test_low_end_turns_motion_off() {
        let ctx = context(false, true, false);
        assert!(!ctx.animate());
        assert_eq!(attr(&ctx, "data-animations"), "off");
        assert_eq!(attr(&ctx, "data-motion"), "reduced");
        assert_eq!(attr(&ctx, "data-effects"), "minimal");
        assert_eq!(attr(&ctx, "style"), "--animation-speed: 0.5");
        assert_eq!(ctx.duration(0.8), "0.40s");
    }

    #[test]
    fn test_reduced_motion_preference_wins() {
        let ctx = context(false, false, true);
        assert!(!ctx.animate());
        assert!(!ctx.complex_effects());
        assert_eq!(attr(&ctx, "data-motion"), "reduced");
        assert_eq!(ctx.duration(0.8), "0.80s");
    }

    #[test]
    fn test_mobile_keeps_simple_animation() {
        let ctx = context(true, false, false);
        assert!(ctx.animate());
        assert!(!ctx.complex_effects());
        assert_eq!(attr(&ctx, "data-effects"), "simple");
        assert_eq!(attr(&ctx, "data-animation-quality"), "medium");
    }
}
