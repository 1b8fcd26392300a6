use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::Portfolio;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::experience::Experience;
use crate::sections::hero::Hero;
use crate::sections::projects::Projects;
use crate::sections::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<Portfolio>();
    let config = expect_context::<SiteConfig>();

    view! {
        <div class="page home-page">
            <section id="home">
                <Hero profile=content.profile.clone() />
            </section>
            <section id="about">
                <About about=content.about.clone() education=content.education.clone() />
            </section>
            <section id="skills">
                <Skills groups=content.skills.clone() />
            </section>
            <section id="experience">
                <Experience roles=content.experience.clone() />
            </section>
            <section id="projects">
                <Projects projects=content.projects.clone() />
            </section>
            <section id="contact">
                <Contact profile=content.profile.clone() config=config />
            </section>
        </div>
    }
}
