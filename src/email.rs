//! Contact form delivery through the EmailJS REST API.

use std::future::Future;

use serde::Serialize;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::{EmailJsConfig, EmailJsCredentials};
use crate::error::PortfolioError;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Reject blank fields and obviously malformed addresses before sending.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        let fields = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(PortfolioError::Validation(format!("{} is required", label)));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(PortfolioError::Validation(
                "Please enter a valid email address".to_string(),
            )),
        }
    }
}

/// Outcome shown under the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Site owner receiving the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

// -- Template parameter structs --

#[derive(Debug, Serialize)]
pub struct NotificationParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub to_email: &'a str,
    pub to_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AutoReplyParams<'a> {
    pub from_name: &'a str,
    pub subject: &'a str,
    pub to_email: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: P,
}

pub fn notification_params<'a>(
    form: &'a ContactForm,
    recipient: &'a Recipient,
) -> NotificationParams<'a> {
    NotificationParams {
        from_name: form.name.trim(),
        from_email: form.email.trim(),
        subject: form.subject.trim(),
        message: &form.message,
        to_email: &recipient.email,
        to_name: &recipient.name,
    }
}

pub fn auto_reply_params(form: &ContactForm) -> AutoReplyParams<'_> {
    AutoReplyParams {
        from_name: form.name.trim(),
        subject: form.subject.trim(),
        to_email: form.email.trim(),
    }
}

fn request_body<P: Serialize>(
    credentials: &EmailJsCredentials<'_>,
    template_id: &str,
    params: P,
) -> Result<String, PortfolioError> {
    let request = SendRequest {
        service_id: credentials.service_id,
        template_id,
        user_id: credentials.public_key,
        template_params: params,
    };
    Ok(serde_json::to_string(&request)?)
}

fn js_error(value: JsValue) -> PortfolioError {
    PortfolioError::Email(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

async fn post_json(body: &str) -> Result<(), PortfolioError> {
    let window = web_sys::window()
        .ok_or_else(|| PortfolioError::Email("no browser window".to_string()))?;

    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(EMAILJS_ENDPOINT, &init).map_err(js_error)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if response.ok() {
        return Ok(());
    }

    let detail = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(PortfolioError::Email(format!(
        "EmailJS returned {}: {}",
        response.status(),
        detail
    )))
}

/// Send the notification to the owner and, when configured, an
/// acknowledgment to the visitor.
pub async fn submit(
    config: &EmailJsConfig,
    recipient: &Recipient,
    form: &ContactForm,
) -> Result<(), String> {
    deliver(config, recipient, form, |body| async move { post_json(&body).await }).await
}

/// Run the send sequence through `send`, which posts one JSON body.
///
/// Only the owner notification decides the outcome. A failed auto-reply is
/// logged and the submission still succeeds, since the message has already
/// reached the owner.
pub async fn deliver<F, Fut>(
    config: &EmailJsConfig,
    recipient: &Recipient,
    form: &ContactForm,
    mut send: F,
) -> Result<(), String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), PortfolioError>>,
{
    form.validate()?;
    let credentials = config.credentials()?;

    let body = request_body(
        &credentials,
        credentials.template_id,
        notification_params(form, recipient),
    )?;
    info!("Sending contact notification");
    send(body).await.map_err(|e| {
        warn!("Contact notification failed: {}", e);
        e.to_string()
    })?;

    match config.auto_reply_template() {
        Some(template_id) => {
            let body = request_body(&credentials, template_id, auto_reply_params(form))?;
            info!("Sending auto-reply");
            if let Err(e) = send(body).await {
                warn!("Auto-reply failed: {}", e);
            }
        }
        None => info!("Auto-reply template not configured, skipping auto-reply"),
    }

    Ok(())
}
