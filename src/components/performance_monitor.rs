//! Development overlay showing live frame rate, heap usage and load time.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::components::metric_row::{fps_level, memory_level, MetricLevel, MetricRow};
use crate::config::MonitorConfig;
use crate::perf::sampler;
use crate::perf::{BrowserEnvironment, RuntimeSample};

const SLOW_LOAD_MS: f64 = 3000.0;

/// Detail lines shown under "Show Details".
pub fn detail_lines(sample: &RuntimeSample, low_fps: u32, high_memory_mb: u32) -> [String; 4] {
    [
        format!(
            "CSS Animations: {}",
            if sample.fps < low_fps { "Optimizing..." } else { "Optimal" }
        ),
        format!(
            "Memory Usage: {}",
            if sample.memory_mb > high_memory_mb { "High" } else { "Normal" }
        ),
        format!(
            "Page Load: {}",
            if sample.load_time_ms > SLOW_LOAD_MS { "Slow" } else { "Fast" }
        ),
        format!(
            "Overall: {}",
            if sample.is_low_performance { "Needs Attention" } else { "Excellent" }
        ),
    ]
}

#[component]
pub fn PerformanceMonitor(config: MonitorConfig) -> impl IntoView {
    if !config.enabled {
        return ().into_any();
    }

    let (visible, set_visible) = signal(false);
    let (show_details, set_show_details) = signal(false);
    let (sample, set_sample) = signal(RuntimeSample::default());
    let thresholds = config.thresholds;

    // Sample for as long as the overlay is mounted
    Effect::new(move |_| {
        let env = Rc::new(BrowserEnvironment::new());
        let handle = sampler::start_with(env, thresholds, move |s| set_sample.set(s));
        let handle = SendWrapper::new(handle);
        on_cleanup(move || handle.cancel());
    });

    // Reveal after a delay so the first samples are meaningful
    Effect::new(move |_| {
        if let Ok(timer) = set_timeout_with_handle(
            move || set_visible.set(true),
            Duration::from_millis(config.reveal_delay_ms),
        ) {
            on_cleanup(move || timer.clear());
        }
    });

    let fps = Signal::derive(move || sample.get().fps.to_string());
    let fps_grade = Signal::derive(move || Some(fps_level(sample.get().fps)));
    let memory = Signal::derive(move || format!("{}MB", sample.get().memory_mb));
    let memory_grade = Signal::derive(move || Some(memory_level(sample.get().memory_mb)));
    let load = Signal::derive(move || format!("{:.0}ms", sample.get().load_time_ms));

    view! {
        <Show when=move || visible.get()>
            <div class="perf-monitor">
                <div class="perf-monitor-header">
                    <span class="perf-monitor-title">"Performance Monitor"</span>
                    <button
                        class="perf-monitor-close"
                        aria-label="Close"
                        on:click=move |_| set_visible.set(false)
                    >
                        "\u{2715}"
                    </button>
                </div>

                <div class="perf-monitor-metrics">
                    <MetricRow label="FPS:" value=fps level=fps_grade />
                    <MetricRow label="Memory:" value=memory level=memory_grade />
                    <MetricRow label="Load Time:" value=load level=Signal::stored(None::<MetricLevel>) />
                </div>

                {move || {
                    let current = sample.get();
                    if current.is_low_performance {
                        view! {
                            <div class="perf-monitor-issues">
                                <span class="status-text status-warning">"Performance Issues Detected"</span>
                                <ul class="perf-suggestions">
                                    {current.suggestions.into_iter().map(|s| view! {
                                        <li class="perf-suggestion">{s}</li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="perf-monitor-ok">
                                <span class="status-text status-good">"Performance is Good"</span>
                            </div>
                        }.into_any()
                    }
                }}

                <button
                    class="perf-monitor-toggle"
                    on:click=move |_| set_show_details.update(|d| *d = !*d)
                >
                    {move || if show_details.get() { "Hide Details" } else { "Show Details" }}
                </button>

                <Show when=move || show_details.get()>
                    <ul class="perf-monitor-details">
                        {move || {
                            detail_lines(&sample.get(), thresholds.low_fps, thresholds.high_memory_mb)
                                .into_iter()
                                .map(|line| view! { <li>{line}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
        </Show>
    }
    .into_any()
}
