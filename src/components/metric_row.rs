use leptos::prelude::*;

/// Colour grade for a live metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricLevel {
    Good,
    Fair,
    Poor,
}

impl MetricLevel {
    pub fn class(self) -> &'static str {
        match self {
            MetricLevel::Good => "metric-value metric-good",
            MetricLevel::Fair => "metric-value metric-fair",
            MetricLevel::Poor => "metric-value metric-poor",
        }
    }
}

pub fn fps_level(fps: u32) -> MetricLevel {
    if fps >= 50 {
        MetricLevel::Good
    } else if fps >= 30 {
        MetricLevel::Fair
    } else {
        MetricLevel::Poor
    }
}

pub fn memory_level(memory_mb: u32) -> MetricLevel {
    if memory_mb < 50 {
        MetricLevel::Good
    } else if memory_mb < 100 {
        MetricLevel::Fair
    } else {
        MetricLevel::Poor
    }
}

#[component]
pub fn MetricRow(
    /// The label text, e.g. "FPS:"
    #[prop(into)]
    label: String,
    /// Formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Colour grade; `None` renders neutral
    #[prop(into)]
    level: Signal<Option<MetricLevel>>,
) -> impl IntoView {
    view! {
        <div class="metric-row">
            <span class="metric-label">{label}</span>
            <span class=move || level.get().map(MetricLevel::class).unwrap_or("metric-value")>
                {move || value.get()}
            </span>
        </div>
    }
}
