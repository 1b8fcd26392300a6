use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Section anchors in page order: (element id, label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Scroll to a section by element id. No-op if it is not in the DOM.
pub fn scroll_to_section(id: &str, smooth: bool) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Navigation(
    /// Display name shown as the brand link
    #[prop(into)]
    brand: String,
    /// Use smooth scrolling between sections
    #[prop(default = true)]
    smooth: bool,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go = move |id: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(id, smooth);
    };

    view! {
        <nav class="navigation">
            <div class="nav-inner">
                <a href="#home" class="nav-brand" on:click=move |ev| {
                    ev.prevent_default();
                    go("home");
                }>
                    {brand}
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <ul class=move || if menu_open.get() { "nav-list nav-list-open" } else { "nav-list" }>
                    {SECTIONS.iter().map(|&(id, label)| {
                        view! {
                            <li class="nav-item">
                                <a
                                    href=format!("#{}", id)
                                    class="nav-link"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go(id);
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
