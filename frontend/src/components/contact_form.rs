use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::info;
use serde::Deserialize;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::{self, FORM_BANNER_MS};
use crate::error::SubmitError;
use crate::form::flow::{BannerKind, Expired, FormFlow, SubmitStatus};
use crate::form::validation::{ContactFields, Field};

/// Body FormSubmit sends back on `Accept: application/json`. It answers
/// 200 even when it refuses a submission, so `success` has to be checked.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SubmitReply {
    #[serde(default)]
    pub success: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitReply {
    /// `success` comes back as either a bool or the string `"true"`/`"false"`.
    /// A missing flag is not treated as a rejection.
    pub fn is_rejected(&self) -> bool {
        match &self.success {
            serde_json::Value::Bool(ok) => !ok,
            serde_json::Value::String(ok) => ok.eq_ignore_ascii_case("false"),
            _ => false,
        }
    }

    fn into_result(self) -> Result<Self, SubmitError> {
        if self.is_rejected() {
            Err(SubmitError::Rejected(self.message.unwrap_or_default()))
        } else {
            Ok(self)
        }
    }
}

async fn post_form(form: HtmlFormElement) -> Result<SubmitReply, SubmitError> {
    let data = FormData::new_with_form(&form)
        .map_err(|e| SubmitError::Build(format!("{:?}", e)))?;

    let response = Request::post(&form.action())
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }
    response.json::<SubmitReply>().await?.into_result()
}

const PROJECT_TYPES: [(&str, &str); 4] = [
    ("landing-page", "Landing page"),
    ("business-website", "Business website"),
    ("ecommerce", "Online store"),
    ("redesign", "Website redesign"),
];

pub enum ContactFormMsg {
    Submit(SubmitEvent),
    FieldEdited(Field),
    Resolved(Result<SubmitReply, SubmitError>),
    BannerExpired(u32),
}

pub struct ContactForm {
    flow: FormFlow,
    form_ref: NodeRef,
    name_ref: NodeRef,
    email_ref: NodeRef,
    business_ref: NodeRef,
    project_type_ref: NodeRef,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: FormFlow::default(),
            form_ref: NodeRef::default(),
            name_ref: NodeRef::default(),
            email_ref: NodeRef::default(),
            business_ref: NodeRef::default(),
            project_type_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Submit(e) => {
                e.prevent_default();
                let Some(form) = self.form_ref.cast::<HtmlFormElement>() else {
                    return false;
                };
                let fields = self.read_fields();
                let Some(submission) = self.flow.submit(&fields) else {
                    return true;
                };
                info!("Sending contact form, attempt {}", submission.attempt);
                ctx.link()
                    .send_future(async move { ContactFormMsg::Resolved(post_form(form).await) });
                true
            }
            ContactFormMsg::FieldEdited(field) => self.flow.field_edited(field),
            ContactFormMsg::Resolved(result) => {
                match &result {
                    Ok(reply) => info!(
                        "Contact form accepted: {}",
                        reply.message.as_deref().unwrap_or("no message")
                    ),
                    Err(e) => gloo_console::error!("Error:", e.to_string()),
                }
                let banner = self.flow.resolve(&result);
                let link = ctx.link().clone();
                Timeout::new(FORM_BANNER_MS, move || {
                    link.send_message(ContactFormMsg::BannerExpired(banner.id));
                })
                .forget();
                true
            }
            ContactFormMsg::BannerExpired(id) => match self.flow.expire(id) {
                Expired::ResetForm => {
                    if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                    true
                }
                Expired::RemoveOnly => true,
                Expired::Nothing => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(ContactFormMsg::Submit);
        let edited = |field: Field| {
            ctx.link()
                .callback(move |_: InputEvent| ContactFormMsg::FieldEdited(field))
        };

        html! {
            <form
                id="contact-form"
                class="contact-form"
                ref={self.form_ref.clone()}
                action={config::get_form_action()}
                method="POST"
                novalidate=true
                {onsubmit}
            >
                <input type="hidden" name="_subject" value="New quote request from the website" />
                <input type="hidden" name="_captcha" value="false" />

                <div class="form-row">
                    <div class="form-group">
                        <label for={Field::Name.id()}>{"Your name"}</label>
                        <input
                            type="text"
                            id={Field::Name.id()}
                            name={Field::Name.id()}
                            placeholder="Jane Smith"
                            ref={self.name_ref.clone()}
                            class={self.error_class(Field::Name)}
                            oninput={edited(Field::Name)}
                        />
                        { self.error_message(Field::Name) }
                    </div>
                    <div class="form-group">
                        <label for={Field::Email.id()}>{"Email"}</label>
                        <input
                            type="email"
                            id={Field::Email.id()}
                            name={Field::Email.id()}
                            placeholder="jane@business.com"
                            ref={self.email_ref.clone()}
                            class={self.error_class(Field::Email)}
                            oninput={edited(Field::Email)}
                        />
                        { self.error_message(Field::Email) }
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for={Field::Business.id()}>{"Business name"}</label>
                        <input
                            type="text"
                            id={Field::Business.id()}
                            name={Field::Business.id()}
                            placeholder="Smith Plumbing"
                            ref={self.business_ref.clone()}
                            class={self.error_class(Field::Business)}
                            oninput={edited(Field::Business)}
                        />
                        { self.error_message(Field::Business) }
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Phone (optional)"}</label>
                        <input type="tel" id="phone" name="phone" placeholder="0400 000 000" />
                    </div>
                </div>

                <div class="form-group">
                    <label for={Field::ProjectType.id()}>{"What do you need?"}</label>
                    <select
                        id={Field::ProjectType.id()}
                        name={Field::ProjectType.id()}
                        ref={self.project_type_ref.clone()}
                        class={self.error_class(Field::ProjectType)}
                        oninput={edited(Field::ProjectType)}
                    >
                        <option value="" selected=true>{"Select a project type"}</option>
                        { for PROJECT_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value}>{*label}</option>
                        }) }
                    </select>
                    { self.error_message(Field::ProjectType) }
                </div>

                <div class="form-group">
                    <label for="message">{"Anything else? (optional)"}</label>
                    <textarea id="message" name="message" rows="4" placeholder="Tell us about your business" />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-full"
                    disabled={self.flow.button_disabled()}
                >
                    { self.button_content() }
                </button>

                { for self.flow.banners().iter().map(|banner| match banner.kind {
                    BannerKind::Success => html! {
                        <div class="form-success" key={banner.id}>
                            <strong>{"Thanks for reaching out!"}</strong>
                            <p>{"We'll get back to you within 24 hours with a custom quote."}</p>
                        </div>
                    },
                    BannerKind::Error(text) => html! {
                        <div class="form-error-msg" key={banner.id}>{text}</div>
                    },
                }) }
            </form>
        }
    }
}

impl ContactForm {
    fn read_fields(&self) -> ContactFields {
        let input = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        ContactFields {
            name: input(&self.name_ref),
            email: input(&self.email_ref),
            business: input(&self.business_ref),
            project_type: self
                .project_type_ref
                .cast::<HtmlSelectElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
        }
    }

    fn error_class(&self, field: Field) -> Classes {
        classes!(self.flow.error_for(field).is_some().then(|| "error"))
    }

    fn error_message(&self, field: Field) -> Html {
        match self.flow.error_for(field) {
            Some(invalid) => html! { <span class="form-error">{invalid.message()}</span> },
            None => html! {},
        }
    }

    fn button_content(&self) -> Html {
        match self.flow.status() {
            SubmitStatus::Pending => html! {
                <>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="btn-icon spinning">
                        <circle cx="12" cy="12" r="10" stroke-dasharray="32" stroke-dashoffset="32"></circle>
                    </svg>
                    {"Sending..."}
                </>
            },
            SubmitStatus::Sent => html! {
                <>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="btn-icon">
                        <polyline points="20,6 9,17 4,12"></polyline>
                    </svg>
                    {"Request Sent!"}
                </>
            },
            SubmitStatus::Idle | SubmitStatus::Failed => html! {
                <>
                    {"Get My Free Quote"}
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="btn-icon">
                        <line x1="5" y1="12" x2="19" y2="12"></line>
                        <polyline points="12,5 19,12 12,19"></polyline>
                    </svg>
                </>
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formsubmit_reply_decodes() {
        let reply: SubmitReply = serde_json::from_str(
            r#"{"success":"true","message":"The form was submitted successfully."}"#,
        )
        .unwrap();
        assert_eq!(reply.success, serde_json::json!("true"));
        assert_eq!(reply.message.as_deref(), Some("The form was submitted successfully."));
    }

    #[test]
    fn empty_object_is_still_a_reply() {
        let reply: SubmitReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.message, None);
    }

    #[test]
    fn activation_notice_is_a_rejection() {
        let reply: SubmitReply = serde_json::from_str(
            r#"{"success":"false","message":"This form needs Activation."}"#,
        )
        .unwrap();
        assert!(reply.is_rejected());
        assert_eq!(
            reply.into_result(),
            Err(SubmitError::Rejected("This form needs Activation.".into()))
        );
    }

    #[test]
    fn success_flag_forms() {
        let parse = |body: &str| serde_json::from_str::<SubmitReply>(body).unwrap();
        assert!(parse(r#"{"success":false}"#).is_rejected());
        assert!(!parse(r#"{"success":true}"#).is_rejected());
        assert!(!parse(r#"{"success":"true"}"#).is_rejected());
        assert!(!parse("{}").is_rejected());
    }

    #[test]
    fn rejected_reply_shows_the_error_banner_and_keeps_the_form() {
        let mut flow = FormFlow::default();
        let fields = ContactFields {
            name: "Sam".into(),
            email: "sam@shop.com.au".into(),
            business: "Sam's Shop".into(),
            project_type: "ecommerce".into(),
        };
        assert!(flow.submit(&fields).is_some());

        let outcome = serde_json::from_str::<SubmitReply>(r#"{"success":"false"}"#)
            .unwrap()
            .into_result();
        let banner = flow.resolve(&outcome);

        assert!(matches!(banner.kind, BannerKind::Error(_)));
        assert_eq!(flow.status(), SubmitStatus::Failed);
        assert!(!flow.button_disabled());
        assert_eq!(flow.expire(banner.id), Expired::RemoveOnly);
    }

    #[test]
    fn html_error_page_is_not_a_reply() {
        assert!(serde_json::from_str::<SubmitReply>("<html>502 Bad Gateway</html>").is_err());
    }
}
