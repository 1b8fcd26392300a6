use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::info;

use crate::components::navigation::Navigation;
use crate::components::performance_monitor::PerformanceMonitor;
use crate::config::SiteConfig;
use crate::content;
use crate::motion::{apply_motion, MotionContext};
use crate::pages::home::HomePage;
use crate::perf::settings::performance_warnings;
use crate::perf::types::MemoryUsage;
use crate::perf::{self, BrowserEnvironment, Environment};

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let portfolio = content::default_content();

    // Profile once per page load; the sampler in the overlay handles the rest
    let env = BrowserEnvironment::new();
    let capabilities = perf::profile(&env);
    let settings = perf::resolve(&capabilities);
    let motion = MotionContext::new(capabilities, settings, perf::prefers_reduced_motion(&env));
    info!(
        "Motion policy: animations={} effects={} reduced_motion={}",
        motion.animate(),
        settings.effect_quality.as_str(),
        motion.reduced_motion
    );
    for warning in performance_warnings(&capabilities, env.heap_usage().map(MemoryUsage::from)) {
        info!("{}", warning);
    }

    let brand = portfolio.profile.name.clone();
    let monitor = config.monitor;
    provide_context(motion);
    provide_context(portfolio);
    provide_context(config);

    // Apply motion attributes to DOM
    Effect::new(move |_| {
        apply_motion(&motion);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Navigation brand=brand smooth=motion.animate() />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <PerformanceMonitor config=monitor />
            </div>
        </Router>
    }
}
