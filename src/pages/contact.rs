use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::magnetic::Magnetic;
use crate::components::section::Section;
use crate::config;
use crate::contact::{
    submit, ContactFlow, ContactForm, Currency, Formspree, SubmissionState, FAILURE_MESSAGE, INTERESTS,
};
use crate::data::{EMAIL, EMAIL_COMPOSE_URL, LOCATION, PHONE_URL, SOCIALS, WHATSAPP_URL};

fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

fn editor<E: AsRef<Event> + 'static>(
    flow: &Rc<RefCell<ContactFlow>>,
    view: &UseStateHandle<ContactFlow>,
    apply: fn(&mut ContactForm, String),
) -> Callback<E> {
    let flow = flow.clone();
    let view = view.clone();
    Callback::from(move |e: E| {
        let Some(value) = event_value(e.as_ref()) else {
            return;
        };
        let mut flow = flow.borrow_mut();
        flow.edit(|form| apply(form, value));
        view.set(flow.clone());
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let flow = use_mut_ref(ContactFlow::default);
    let view = use_state_eq(ContactFlow::default);

    let onsubmit = {
        let flow = flow.clone();
        let view = view.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let endpoint = Formspree::new(config::contact_endpoint());
            match submit(flow.clone(), endpoint) {
                Ok(pending) => {
                    view.set(flow.borrow().clone());
                    let flow = flow.clone();
                    let view = view.clone();
                    spawn_local(async move {
                        pending.await;
                        view.set(flow.borrow().clone());
                    });
                }
                Err(e) => gloo_console::log!(format!("Submit ignored: {}", e)),
            }
        })
    };

    let send_another = {
        let flow = flow.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let mut flow = flow.borrow_mut();
            flow.reset();
            view.set(flow.clone());
        })
    };

    let currency_button = |currency: Currency| {
        let flow = flow.clone();
        let view = view.clone();
        let selected = view.form().currency() == currency;
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut flow = flow.borrow_mut();
            flow.edit(|form| form.set_currency(currency));
            view.set(flow.clone());
        });
        html! {
            <button
                type="button"
                class={classes!("currency", selected.then_some("selected"))}
                {onclick}
            >
                {currency.label()}
            </button>
        }
    };

    let form = view.form();
    let submitting = view.state() == SubmissionState::Submitting;

    let panel = if view.state() == SubmissionState::Success {
        html! {
            <div class="contact-success">
                <div class="success-mark">{"✓"}</div>
                <h3>{"Proposal Sent!"}</h3>
                <p class="muted">
                    {format!("Thanks for reaching out. We will review your message and get back to you from {} shortly.", EMAIL)}
                </p>
                <Button variant={ButtonVariant::Outline} onclick={send_another.clone()}>{"Send Another"}</Button>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <label class="field">
                        <span>{"Name"}</span>
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            required=true
                            value={form.name.clone()}
                            oninput={editor::<InputEvent>(&flow, &view, |f, v| f.name = v)}
                        />
                    </label>
                    <label class="field">
                        <span>{"Email"}</span>
                        <input
                            type="email"
                            name="email"
                            placeholder="your@email.com"
                            required=true
                            value={form.email.clone()}
                            oninput={editor::<InputEvent>(&flow, &view, |f, v| f.email = v)}
                        />
                    </label>
                </div>
                <div class="form-row">
                    <label class="field">
                        <span>{"Interest"}</span>
                        <select
                            name="interest"
                            onchange={editor::<Event>(&flow, &view, |f, v| f.interest = v)}
                        >
                            { for INTERESTS.iter().map(|option| html! {
                                <option value={*option} selected={form.interest == *option}>{*option}</option>
                            }) }
                        </select>
                    </label>
                    <label class="field">
                        <span class="field-head">
                            {"Budget"}
                            <span class="currency-toggle">
                                { currency_button(Currency::Inr) }
                                { currency_button(Currency::Usd) }
                            </span>
                        </span>
                        <select
                            name="budget"
                            onchange={editor::<Event>(&flow, &view, |f, v| f.budget = v)}
                        >
                            { for form.currency().budget_options().iter().map(|option| html! {
                                <option value={*option} selected={form.budget == *option}>{*option}</option>
                            }) }
                        </select>
                    </label>
                </div>
                <label class="field">
                    <span>{"Project Details"}</span>
                    <textarea
                        name="message"
                        rows="4"
                        placeholder="Tell us about your goals, timeline, and current challenges..."
                        value={form.message.clone()}
                        oninput={editor::<InputEvent>(&flow, &view, |f, v| f.message = v)}
                    />
                </label>
                <Button
                    button_type="submit"
                    size={ButtonSize::Lg}
                    disabled={submitting}
                    magnetic={false}
                    class="submit"
                >
                    { if submitting { "Sending..." } else { "Send Proposal ➤" } }
                </Button>
                if view.state().is_settled() {
                    <div class="form-error-row">
                        <p class="form-error">{FAILURE_MESSAGE}</p>
                        <button type="button" class="start-over" onclick={send_another}>{"Start over"}</button>
                    </div>
                }
            </form>
        }
    };

    html! {
        <div class="contact">
            <style>
                {r#"
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 5fr 7fr;
                        gap: 4rem;
                    }
                    .contact-info dl {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        margin: 3rem 0;
                    }
                    .contact-info dt {
                        font-size: 0.75rem;
                        color: #737373;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 0.5rem;
                    }
                    .contact-info dd {
                        margin: 0;
                        color: #fff;
                    }
                    .contact-info dd a {
                        color: #fff;
                        text-decoration: none;
                    }
                    .connect-links {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .connect-links a {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #d4d4d4;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .connect-links a:hover {
                        border-color: rgba(168, 85, 247, 0.5);
                        color: #fff;
                    }
                    .contact-panel {
                        padding: 3rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(255, 255, 255, 0.02);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                        color: #a3a3a3;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .field-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .field input, .field select, .field textarea {
                        padding: 0.875rem 0;
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font-size: 1rem;
                        text-transform: none;
                        letter-spacing: normal;
                        outline: none;
                        transition: border-color 0.3s;
                    }
                    .field input:focus, .field select:focus, .field textarea:focus {
                        border-color: #a855f7;
                    }
                    .field option {
                        background: #0a0a0a;
                    }
                    .currency-toggle {
                        display: inline-flex;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        padding: 2px;
                    }
                    .currency {
                        padding: 0.25rem 0.625rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: #a3a3a3;
                        font-size: 0.625rem;
                        cursor: pointer;
                    }
                    .currency.selected {
                        background: #a855f7;
                        color: #fff;
                    }
                    .form-error-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .form-error {
                        color: #f87171;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .start-over {
                        background: none;
                        border: none;
                        color: #a3a3a3;
                        font-size: 0.875rem;
                        text-decoration: underline;
                        cursor: pointer;
                    }
                    .start-over:hover {
                        color: #fff;
                    }
                    .contact-success {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .success-mark {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 80px;
                        height: 80px;
                        border-radius: 50%;
                        background: rgba(16, 185, 129, 0.1);
                        color: #34d399;
                        font-size: 2.5rem;
                    }
                    @media (max-width: 1024px) {
                        .contact-layout, .form-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>

            <Section class="page-hero">
                <span class="eyebrow">{"Contact Us"}</span>
                <h1>{"Let's build the"}<br /><span class="accent-text">{"extraordinary."}</span></h1>
            </Section>

            <Section>
                <div class="contact-layout">
                    <div class="contact-info">
                        <p class="lead muted">
                            {"We are selective with our partnerships. We look for ambitious brands ready to disrupt their industry. If that sounds like you, tell us about your vision."}
                        </p>
                        <dl>
                            <div>
                                <dt>{"✉ Gmail"}</dt>
                                <dd><a href={EMAIL_COMPOSE_URL} target="_blank" rel="noopener noreferrer">{EMAIL}</a></dd>
                            </div>
                            <div>
                                <dt>{"⌖ Location"}</dt>
                                <dd>{"PixelKode"}<br />{LOCATION}</dd>
                            </div>
                        </dl>
                        <h4>{"Connect"}</h4>
                        <div class="connect-links">
                            <Magnetic>
                                <a href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                            </Magnetic>
                            <Magnetic>
                                <a href={PHONE_URL}>{"Call Us"}</a>
                            </Magnetic>
                            { for SOCIALS.iter().map(|(name, url)| html! {
                                <Magnetic>
                                    <a href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                                </Magnetic>
                            }) }
                        </div>
                    </div>
                    <div class="contact-panel">{panel}</div>
                </div>
            </Section>
        </div>
    }
}
