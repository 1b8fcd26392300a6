use leptos::prelude::*;

use crate::content::Role;

/// Achievements listed before "Show more".
const COLLAPSED_ACHIEVEMENTS: usize = 3;

pub fn visible_achievements(achievements: &[String], expanded: bool) -> &[String] {
    if expanded {
        achievements
    } else {
        &achievements[..achievements.len().min(COLLAPSED_ACHIEVEMENTS)]
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let hidden = role.achievements.len().saturating_sub(COLLAPSED_ACHIEVEMENTS);
    let achievements = StoredValue::new(role.achievements);

    view! {
        <div class="card role-card">
            <div class="role-header">
                <div>
                    <h3 class="role-position">{role.position}</h3>
                    <span class="role-company">{role.company}</span>
                </div>
                <span class="role-kind">{role.kind}</span>
            </div>
            <div class="role-meta">
                <span class="role-duration">{role.duration}</span>
                <span class="role-location">{role.location}</span>
            </div>

            <ul class="role-achievements">
                {move || achievements.with_value(|all| {
                    visible_achievements(all, expanded.get())
                        .iter()
                        .map(|a| view! { <li>{a.clone()}</li> })
                        .collect::<Vec<_>>()
                })}
            </ul>

            {(hidden > 0).then(|| view! {
                <button
                    class="btn-link role-toggle"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() {
                        "Show less".to_string()
                    } else {
                        format!("Show {} more", hidden)
                    }}
                </button>
            })}

            <ul class="tag-list">
                {role.technologies.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn Experience(roles: Vec<Role>) -> impl IntoView {
    view! {
        <div class="section experience">
            <h2 class="section-title">"Work " <span class="gradient-text">"Experience"</span></h2>
            <div class="timeline">
                {roles.into_iter().map(|role| view! { <RoleCard role=role /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
