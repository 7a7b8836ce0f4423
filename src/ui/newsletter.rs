//! Newsletter sign-up form with a simulated acknowledgement

use leptos::html;
use leptos::prelude::*;

use super::language::Bilingual;
use super::reveal::use_reveal;
use super::ripple::RippleButton;
use super::state::use_site_context;
use crate::core::{Locale, NewsletterForm, RevealKind};

const PLACEHOLDER_EN: &str = "Enter your email";
const PLACEHOLDER_AR: &str = "أدخل بريدك الإلكتروني";

/// Start a submission of the current input; `None` when it is ignored
fn begin_submission(
    form: RwSignal<NewsletterForm>,
    email: RwSignal<String>,
    locale: Locale,
) -> Option<u64> {
    let value = email.get_untracked();
    form.try_update(|form| form.submit(&value, locale))?.ok()
}

/// Show the success message if `generation` is still current
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn complete_submission(form: RwSignal<NewsletterForm>, generation: u64) -> bool {
    form.try_update(|form| form.complete(generation)).unwrap_or(false)
}

/// Bring back an empty form if `generation` is still current
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn reset_submission(form: RwSignal<NewsletterForm>, email: RwSignal<String>, generation: u64) {
    if form.try_update(|form| form.reset(generation)).unwrap_or(false) {
        email.try_set(String::new());
    }
}

#[component]
pub fn NewsletterSection() -> impl IntoView {
    let form = RwSignal::new(NewsletterForm::new());
    let email = RwSignal::new(String::new());
    let content_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(content_ref, RevealKind::Section, 0);

    // Pending timers must not touch a form that is gone
    on_cleanup(move || {
        form.try_update(NewsletterForm::cancel);
    });

    view! {
        <section id="newsletter" class="newsletter">
            <div class="container">
                <div class=move || reveal.class("newsletter-content") node_ref=content_ref>
                    <h2 class="section-title">
                        <Bilingual en="Stay in the Loop" ar="ابقَ على اطلاع" />
                    </h2>
                    <p class="section-subtitle">
                        <Bilingual
                            en="Be the first to hear about new shows, workshops and open calls."
                            ar="كن أول من يعرف عن العروض الجديدة وورش العمل والدعوات المفتوحة."
                        />
                    </p>
                    <SignupForm form=form email=email />
                </div>
            </div>
        </section>
    }
}

/// Form and success message driven by `form`.
///
/// Validation happens in [`NewsletterForm::submit`] only, so the form opts
/// out of the browser's own checks and bad input is ignored without a
/// message.
#[component]
fn SignupForm(form: RwSignal<NewsletterForm>, email: RwSignal<String>) -> impl IntoView {
    let site = use_site_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(generation) = begin_submission(form, email, site.locale_untracked()) else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::newsletter::{RESET_DELAY_MS, SUBMIT_DELAY_MS};
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                if !complete_submission(form, generation) {
                    return;
                }
                TimeoutFuture::new(RESET_DELAY_MS).await;
                reset_submission(form, email, generation);
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = generation;
        }
    };

    let placeholder = move || match site.locale() {
        Locale::En => PLACEHOLDER_EN,
        Locale::Ar => PLACEHOLDER_AR,
    };

    view! {
        <form
            id="newsletterForm"
            class="newsletter-form"
            novalidate
            style=move || format!("display: {};", form.get().form_display())
            on:submit=on_submit
        >
            <input
                type="email"
                name="email"
                autocomplete="email"
                data-en-placeholder=PLACEHOLDER_EN
                data-ar-placeholder=PLACEHOLDER_AR
                placeholder=placeholder
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <RippleButton
                class="btn-primary"
                button_type="submit"
                disabled=Signal::derive(move || form.get().is_busy())
            >
                {move || match form.get().pending_label() {
                    Some(label) => label.into_any(),
                    None => view! { <Bilingual en="Subscribe" ar="اشترك" /> }.into_any(),
                }}
            </RippleButton>
        </form>

        <div
            id="newsletterSuccess"
            class="newsletter-success"
            style=move || format!("display: {};", form.get().success_display())
            role="status"
        >
            <p>
                <Bilingual
                    en="Thank you for subscribing! See you at The Junction."
                    ar="شكراً لاشتراكك! نراك في ذا جانكشن."
                />
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubmissionPhase;
    use crate::ui::state::provide_site_context;

    fn render(form: RwSignal<NewsletterForm>, email: RwSignal<String>) -> String {
        view! { <SignupForm form=form email=email /> }.to_html()
    }

    #[test]
    fn test_form_leaves_validation_to_submit() {
        let owner = Owner::new();
        owner.with(|| {
            provide_site_context();
            let html = render(RwSignal::new(NewsletterForm::new()), RwSignal::new(String::new()));

            assert!(html.contains("novalidate"));
            assert!(!html.contains("required"));
        });
    }

    #[test]
    fn test_invalid_input_is_ignored_silently() {
        let owner = Owner::new();
        owner.with(|| {
            provide_site_context();
            let form = RwSignal::new(NewsletterForm::new());

            for input in ["", "not-an-email"] {
                let email = RwSignal::new(input.to_string());
                assert_eq!(begin_submission(form, email, Locale::En), None);
                assert_eq!(email.get_untracked(), input);

                let html = render(form, email);
                assert!(!html.contains("disabled"));
                assert!(html.contains("display: grid;"));
            }
            assert_eq!(form.get_untracked().phase(), SubmissionPhase::Idle);
        });
    }

    #[test]
    fn test_submission_cycle_restores_empty_form() {
        let owner = Owner::new();
        owner.with(|| {
            provide_site_context();
            let form = RwSignal::new(NewsletterForm::new());
            let email = RwSignal::new("a@b.co".to_string());

            let generation = begin_submission(form, email, Locale::En).unwrap();
            let html = render(form, email);
            assert!(html.contains("Subscribing..."));
            assert!(html.contains("disabled"));

            assert!(complete_submission(form, generation));
            let html = render(form, email);
            assert!(html.contains("display: block;"));
            assert!(!html.contains("display: grid;"));

            reset_submission(form, email, generation);
            assert_eq!(email.get_untracked(), "");
            let html = render(form, email);
            assert!(html.contains(">Subscribe</span>"));
            assert!(!html.contains("Subscribing..."));
            assert!(!html.contains("disabled"));
            assert!(html.contains("display: grid;"));
        });
    }

    #[test]
    fn test_reset_from_cancelled_submission_keeps_input() {
        let owner = Owner::new();
        owner.with(|| {
            provide_site_context();
            let form = RwSignal::new(NewsletterForm::new());
            let email = RwSignal::new("a@b.co".to_string());

            let generation = begin_submission(form, email, Locale::En).unwrap();
            form.update(NewsletterForm::cancel);

            assert!(!complete_submission(form, generation));
            reset_submission(form, email, generation);
            assert_eq!(email.get_untracked(), "a@b.co");
        });
    }

    #[test]
    fn test_placeholder_follows_locale() {
        let owner = Owner::new();
        owner.with(|| {
            let site = provide_site_context();
            let form = RwSignal::new(NewsletterForm::new());
            let email = RwSignal::new(String::new());

            let html = render(form, email);
            assert!(html.contains(&format!("placeholder=\"{PLACEHOLDER_EN}\"")));

            site.set_locale(Locale::Ar);
            let html = render(form, email);
            assert!(html.contains(&format!("placeholder=\"{PLACEHOLDER_AR}\"")));
            assert!(html.contains(&format!("data-en-placeholder=\"{PLACEHOLDER_EN}\"")));
            assert!(html.contains(">اشترك</span>"));
        });
    }
}
