use leptos::html;
use leptos::prelude::*;

use crate::components::navigation::scroll_to_section;
use crate::content::Profile;
use crate::motion::{use_motion, use_reveal};

const GRID_LINES: usize = 6;

/// Inline styles for the animated grid lines. Empty until the hero is on
/// screen, and always empty when complex effects are off.
pub fn grid_line_styles(revealed: bool, complex_effects: bool, line_duration: &str) -> Vec<String> {
    if !(revealed && complex_effects) {
        return Vec::new();
    }
    (0..GRID_LINES)
        .map(|i| {
            format!(
                "top: {}%; animation-duration: {}; animation-delay: {:.1}s",
                i * 15,
                line_duration,
                i as f64 * 0.5
            )
        })
        .collect()
}

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let motion = use_motion();
    let smooth = motion.animate();
    let complex_effects = motion.complex_effects();
    let line_duration = motion.duration(3.0);

    let hero_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(hero_ref);

    let grid = move || {
        grid_line_styles(revealed.get(), complex_effects, &line_duration)
            .into_iter()
            .map(|style| view! { <div class="hero-grid-line" style=style></div> })
            .collect::<Vec<_>>()
    };

    view! {
        <div
            class=move || if revealed.get() { "hero hero-revealed" } else { "hero" }
            node_ref=hero_ref
        >
            <div class="hero-grid" aria-hidden="true">{grid}</div>
            <div class="hero-content">
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-name">{profile.name.clone()}</h1>
                <h2 class="hero-title">{profile.title.clone()}</h2>
                <p class="hero-tagline">{profile.tagline.clone()}</p>

                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| scroll_to_section("contact", smooth)>
                        "Get In Touch"
                    </button>
                    {profile.resume_url.clone().map(|url| view! {
                        <a href=url class="btn btn-secondary" download="">"Download Resume"</a>
                    })}
                </div>

                <div class="hero-social">
                    {profile.github.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class="social-link">"GitHub"</a>
                    })}
                    {profile.linkedin.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener" class="social-link">"LinkedIn"</a>
                    })}
                    <a href=format!("mailto:{}", profile.email) class="social-link">"Email"</a>
                </div>
            </div>

            <button
                class="hero-scroll"
                aria-label="Scroll to about"
                on:click=move |_| scroll_to_section("about", smooth)
            >
                "\u{2193}"
            </button>
        </div>
    }
}
