use leptos::prelude::*;

use crate::content::{About as AboutContent, Education};

#[component]
pub fn About(about: AboutContent, education: Vec<Education>) -> impl IntoView {
    let education_title = (!education.is_empty())
        .then(|| view! { <h3 class="subsection-title">"Education"</h3> });

    view! {
        <div class="section about">
            <h2 class="section-title">"About " <span class="gradient-text">"Me"</span></h2>
            <div class="about-body">
                {about.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
            </div>

            <div class="about-stats">
                {about.stats.into_iter().map(|stat| view! {
                    <div class="stat">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            {education_title}
            <div class="education-list">
                {education.into_iter().map(|e| view! {
                    <div class="card education-card">
                        <strong>{e.degree}</strong>
                        <span class="education-institution">{e.institution}</span>
                        <span class="education-period">{e.period}</span>
                        {e.details.map(|d| view! { <p class="education-details">{d}</p> })}
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
