use leptos::prelude::*;

use crate::content::SkillGroup;

#[component]
pub fn Skills(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <div class="section skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="card-grid">
                {groups.into_iter().map(|group| view! {
                    <div class="card skill-card">
                        <h3>{group.name}</h3>
                        <ul class="tag-list">
                            {group.items.into_iter().map(|item| view! {
                                <li class="tag">{item}</li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
