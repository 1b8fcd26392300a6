use leptos::prelude::*;

use crate::content::{visible_projects, Project};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="card project-card">
            <div class="project-card-header">
                <h3 class="project-title">{project.title}</h3>
                <span class="project-category">{project.category}</span>
            </div>
            <p class="project-description">{project.description}</p>
            <ul class="tag-list">
                {project.technologies.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect::<Vec<_>>()}
            </ul>
            <div class="project-links">
                {project.live_url.map(|url| view! {
                    <a href=url target="_blank" rel="noopener" class="btn btn-primary">"Live Demo"</a>
                })}
                {project.github_url.map(|url| view! {
                    <a href=url target="_blank" rel="noopener" class="btn btn-secondary">"Source"</a>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    let (show_all, set_show_all) = signal(false);
    let has_more = projects.iter().any(|p| !p.featured);
    let projects = StoredValue::new(projects);

    view! {
        <div class="section projects">
            <h2 class="section-title">"Featured " <span class="gradient-text">"Projects"</span></h2>
            <div class="card-grid">
                {move || projects.with_value(|all| {
                    visible_projects(all, show_all.get())
                        .into_iter()
                        .map(|p| view! { <ProjectCard project=p.clone() /> })
                        .collect::<Vec<_>>()
                })}
            </div>
            {has_more.then(|| view! {
                <button
                    class="btn btn-secondary projects-toggle"
                    on:click=move |_| set_show_all.update(|s| *s = !*s)
                >
                    {move || if show_all.get() { "Show Less" } else { "See All Projects" }}
                </button>
            })}
        </div>
    }
}
