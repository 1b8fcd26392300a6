use portfolio::config::SiteConfig;
use portfolio::{logging, App};

fn main() {
    logging::init(&SiteConfig::load().log_filter);
    leptos::mount::mount_to_body(App);
}
