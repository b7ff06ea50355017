use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Array};
use web_sys::{Event, EventInit, FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::capabilities::Capabilities;
use crate::config::{FORM_MESSAGE_ID, LEAD_FORM_ID, PROPOSAL_BUTTON_ID};
use crate::dom;
use crate::error::{SiteError, SiteResult};
use crate::lead_form::{DomEffect, FeedbackMessage, FormInput, FormPayload, LeadFormController, Submission};
use crate::Route;

fn collect_fields(form: &HtmlFormElement) -> FormPayload {
    let Ok(data) = FormData::new_with_form(form) else {
        return FormPayload::default();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return FormPayload::default();
    };
    FormPayload::from_entries(entries.filter_map(|entry| {
        let pair: Array = entry.ok()?.dyn_into().ok()?;
        // file inputs have no string value and are skipped
        Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
    }))
}

fn request_submit(form: &HtmlFormElement) -> SiteResult<()> {
    if dom::method(form.as_ref(), "requestSubmit").is_some() {
        form.request_submit()?;
    } else {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init)?;
        form.dispatch_event(&event)?;
    }
    Ok(())
}

/// Lead delivery is not wired to any backend yet; the payload stops here.
fn deliver_lead(payload: &FormPayload) {
    match serde_json::to_string(payload) {
        Ok(json) => log::debug!("lead payload ready for delivery: {}", json),
        Err(e) => log::warn!("lead payload could not be encoded: {}", e),
    }
}

fn run_effects(
    effects: Vec<DomEffect>,
    form_ref: &NodeRef,
    feedback: &UseStateHandle<Option<FeedbackMessage>>,
) {
    let form = form_ref.cast::<HtmlFormElement>();
    for effect in effects {
        match (effect, form.as_ref()) {
            (DomEffect::ShowFeedback(message), _) => feedback.set(Some(message)),
            (DomEffect::Deliver(payload), _) => deliver_lead(&payload),
            (DomEffect::RequestSubmit, Some(form)) => {
                if let Err(e) = request_submit(form) {
                    log::warn!("could not submit {}: {}", LEAD_FORM_ID, e);
                }
            }
            (DomEffect::ReportValidity, Some(form)) => {
                form.report_validity();
            }
            (DomEffect::ResetFields, Some(form)) => form.reset(),
            (effect, None) => {
                log::debug!("skipping {:?}: {}", effect, SiteError::MissingElement(LEAD_FORM_ID))
            }
        }
    }
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let caps = use_context::<Capabilities>().unwrap_or_default();
    let form_ref = use_node_ref();
    let feedback = use_state(|| None::<FeedbackMessage>);
    let controller = {
        let sink = caps.analytics.clone();
        use_mut_ref(move || LeadFormController::new(LEAD_FORM_ID, sink))
    };

    let onsubmit = {
        let controller = controller.clone();
        let form_ref = form_ref.clone();
        let feedback = feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let submission = Submission {
                valid: form.check_validity(),
                fields: collect_fields(&form),
            };
            let effects = controller.borrow_mut().handle(FormInput::Submit(submission));
            run_effects(effects, &form_ref, &feedback);
        })
    };

    let request_proposal = {
        let controller = controller.clone();
        let form_ref = form_ref.clone();
        let feedback = feedback.clone();
        Callback::from(move |_: MouseEvent| {
            let form_valid = form_ref
                .cast::<HtmlFormElement>()
                .map(|form| form.check_validity())
                .unwrap_or(false);
            // released before RequestSubmit re-enters through onsubmit
            let effects = controller.borrow_mut().handle(FormInput::ProposalClicked { form_valid });
            run_effects(effects, &form_ref, &feedback);
            controller.borrow_mut().settle();
        })
    };

    let (message_text, message_style) = match (*feedback).as_ref() {
        Some(message) => (message.text.clone(), format!("color: {};", message.color())),
        None => (String::new(), String::new()),
    };

    html! {
        <form id={LEAD_FORM_ID} class="lead-form" ref={form_ref} {onsubmit}>
            <div class="form-row">
                <label for="lead-name">{"Имя"}</label>
                <input id="lead-name" name="name" type="text" autocomplete="name" required={true} />
            </div>
            <div class="form-row">
                <label for="lead-phone">{"Телефон"}</label>
                <input id="lead-phone" name="phone" type="tel" autocomplete="tel" minlength="10" required={true} />
            </div>
            <div class="form-row">
                <label for="lead-object">{"Объект"}</label>
                <select id="lead-object" name="object">
                    <option value="apartment">{"Квартира"}</option>
                    <option value="house">{"Дом"}</option>
                    <option value="office">{"Офис"}</option>
                </select>
            </div>
            <div class="form-row">
                <label for="lead-area">{"Площадь, м²"}</label>
                <input id="lead-area" name="area" type="number" min="1" step="1" />
            </div>
            <div class="form-row">
                <label for="lead-comment">{"Комментарий"}</label>
                <textarea id="lead-comment" name="comment" rows="3" />
            </div>
            <label class="consent">
                <input name="consent" type="checkbox" required={true} />
                <span>
                    {"Согласен на обработку персональных данных согласно "}
                    <Link<Route> to={Route::Privacy}>{"политике конфиденциальности"}</Link<Route>>
                </span>
            </label>
            <div class="form-actions">
                <button type="submit" class="cta">{"Отправить заявку"}</button>
                <button id={PROPOSAL_BUTTON_ID} type="button" class="cta cta-secondary" onclick={request_proposal}>
                    {"Получить КП"}
                </button>
            </div>
            <p id={FORM_MESSAGE_ID} class="form-message" role="status" aria-live="polite" style={message_style}>
                {message_text}
            </p>
        </form>
    }
}
