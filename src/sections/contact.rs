use leptos::prelude::*;

use crate::components::contact_form::ContactFormPanel;
use crate::config::SiteConfig;
use crate::content::Profile;
use crate::email::Recipient;
use crate::motion::use_motion;

const FLOATING_ELEMENTS: usize = 18;

/// Placement of one decorative floating dot.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingElement {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

/// Deterministic layout so every render places the dots identically.
pub fn floating_elements(count: usize) -> Vec<FloatingElement> {
    (0..count)
        .map(|i| FloatingElement {
            left_pct: (i as f64 * 5.5) % 100.0,
            top_pct: ((i * 8) % 100) as f64,
            duration_secs: 7.0 + (i % 4) as f64,
            delay_secs: (i % 5) as f64 * 0.8,
        })
        .collect()
}

#[component]
pub fn Contact(profile: Profile, config: SiteConfig) -> impl IntoView {
    let motion = use_motion();

    let decorations = motion.complex_effects().then(|| {
        floating_elements(FLOATING_ELEMENTS)
            .into_iter()
            .map(|el| {
                let style = format!(
                    "left: {:.1}%; top: {}%; animation-duration: {:.0}s; animation-delay: {:.1}s",
                    el.left_pct, el.top_pct, el.duration_secs, el.delay_secs
                );
                view! { <div class="floating-dot" style=style></div> }
            })
            .collect::<Vec<_>>()
    });

    let recipient = Recipient {
        name: profile.name.clone(),
        email: profile.email.clone(),
    };

    view! {
        <div class="section contact">
            <div class="contact-decorations" aria-hidden="true">{decorations}</div>
            <h2 class="section-title">"Get In " <span class="gradient-text">"Touch"</span></h2>
            <p class="section-description">
                "Have a project in mind or just want to say hello? My inbox is open."
            </p>

            <div class="contact-layout">
                <div class="contact-details">
                    <div class="contact-item">
                        <span class="contact-label">"Email"</span>
                        <a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                    </div>
                    {profile.phone.clone().map(|phone| view! {
                        <div class="contact-item">
                            <span class="contact-label">"Phone"</span>
                            <a href=format!("tel:{}", phone.replace(' ', ""))>{phone.clone()}</a>
                        </div>
                    })}
                    <div class="contact-item">
                        <span class="contact-label">"Location"</span>
                        <span>{profile.location.clone()}</span>
                    </div>
                </div>

                <ContactFormPanel
                    emailjs=config.emailjs.clone()
                    recipient=recipient
                    status_reset_ms=config.status_reset_ms
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_layout_is_deterministic() {
        assert_eq!(floating_elements(18), floating_elements(18));
    }

    #[test]
    fn test_floating_layout_values() {
        let els = floating_elements(18);
        assert_eq!(els.len(), 18);
        assert_eq!(els[0], FloatingElement { left_pct: 0.0, top_pct: 0.0, duration_secs: 7.0, delay_secs: 0.0 });
        assert_eq!(els[13].top_pct, 4.0);
        assert_eq!(els[5].duration_secs, 8.0);
        assert!((els[3].delay_secs - 2.4).abs() < 1e-9);
        assert!(els.iter().all(|e| e.left_pct < 100.0 && e.top_pct < 100.0));
    }
}
