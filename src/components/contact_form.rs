use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::EmailJsConfig;
use crate::email::{self, ContactForm, Recipient, SubmitStatus};

/// Status banner under the form.
///
/// Every change bumps the generation, so a reset timer started for an
/// earlier status cannot clear a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBanner {
    pub status: SubmitStatus,
    generation: u32,
}

impl StatusBanner {
    pub fn show(&mut self, status: SubmitStatus) {
        self.status = status;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Return to idle, unless the status changed since `generation`.
    pub fn expire(&mut self, generation: u32) {
        if self.generation == generation {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[component]
pub fn ContactFormPanel(
    /// EmailJS identifiers
    emailjs: EmailJsConfig,
    /// Owner receiving the notification
    recipient: Recipient,
    /// How long the success/error banner stays up
    #[prop(default = 5000)]
    status_reset_ms: u64,
) -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (banner, set_banner) = signal(StatusBanner::default());
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let emailjs = StoredValue::new(emailjs);
    let recipient = StoredValue::new(recipient);

    let pending_reset = StoredValue::new(None::<TimeoutHandle>);

    let clear_pending = move || {
        if let Some(previous) = pending_reset.try_update_value(Option::take).flatten() {
            previous.clear();
        }
    };
    on_cleanup(clear_pending);

    // Show a status; anything but Idle returns to Idle after the delay
    let show_status = move |next: SubmitStatus| {
        set_banner.update(|b| b.show(next));
        clear_pending();
        if next == SubmitStatus::Idle {
            return;
        }
        let generation = banner.get_untracked().generation();
        if let Ok(handle) = set_timeout_with_handle(
            move || set_banner.update(|b| b.expire(generation)),
            Duration::from_millis(status_reset_ms),
        ) {
            pending_reset.set_value(Some(handle));
        }
    };

    // Submit handler
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_error_message.set(Some(e.to_string()));
            show_status(SubmitStatus::Error);
            return;
        }

        set_is_submitting.set(true);
        show_status(SubmitStatus::Idle);
        set_error_message.set(None);
        let config = emailjs.get_value();
        let to = recipient.get_value();
        spawn_local(async move {
            match email::submit(&config, &to, &current).await {
                Ok(()) => {
                    set_form.set(ContactForm::default());
                    show_status(SubmitStatus::Success);
                }
                Err(e) => {
                    tracing::error!("Contact form submission failed: {}", e);
                    show_status(SubmitStatus::Error);
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-row">
                <div class="form-group">
                    <label for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        type="text"
                        class="input"
                        placeholder="Your name"
                        required
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            set_form.update(|f| f.name = event_target_value(&ev));
                        }
                        disabled=move || is_submitting.get()
                    />
                </div>
                <div class="form-group">
                    <label for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        type="email"
                        class="input"
                        placeholder="you@example.com"
                        required
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            set_form.update(|f| f.email = event_target_value(&ev));
                        }
                        disabled=move || is_submitting.get()
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="contact-subject">"Subject"</label>
                <input
                    id="contact-subject"
                    type="text"
                    class="input"
                    placeholder="What is this about?"
                    required
                    prop:value=move || form.get().subject
                    on:input=move |ev| {
                        set_form.update(|f| f.subject = event_target_value(&ev));
                    }
                    disabled=move || is_submitting.get()
                />
            </div>
            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    class="input input-textarea"
                    rows="6"
                    placeholder="Tell me about your project"
                    required
                    prop:value=move || form.get().message
                    on:input=move |ev| {
                        set_form.update(|f| f.message = event_target_value(&ev));
                    }
                    disabled=move || is_submitting.get()
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
            </button>

            <div class="form-status-row">
                {move || match banner.get().status {
                    SubmitStatus::Success => view! {
                        <span class="status-text status-saved">
                            "Message sent successfully! I'll get back to you soon."
                        </span>
                    }.into_any(),
                    SubmitStatus::Error => {
                        let text = error_message
                            .get()
                            .unwrap_or_else(|| "Something went wrong. Please try again.".to_string());
                        view! { <span class="status-text status-error">{text}</span> }.into_any()
                    }
                    SubmitStatus::Idle => ().into_any(),
                }}
            </div>
        </form>
    }
}
