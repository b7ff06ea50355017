//! Lead form submission state machine.
//!
//! Every submit attempt runs `Idle -> Validating -> {Rejected, Accepted} -> Idle`
//! inside a single call to [`LeadFormController::handle`]. The controller
//! owns the submission intent and the analytics sink; everything that has
//! to touch the real `<form>` comes back as a [`DomEffect`] for the caller
//! to execute in order.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::analytics::{AnalyticsPayload, AnalyticsSink};
use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Lead,
    Proposal,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Lead => "lead",
            Intent::Proposal => "proposal",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values collected from the form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    fields: BTreeMap<String, String>,
}

impl FormPayload {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // later duplicates win
        let fields = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub tone: Tone,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Neutral }
    }

    pub fn color(&self) -> &'static str {
        match self.tone {
            Tone::Success => config::COLOR_SUCCESS,
            Tone::Neutral => config::COLOR_NEUTRAL,
        }
    }
}

/// Snapshot of the form taken inside the submit handler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub valid: bool,
    pub fields: FormPayload,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormInput {
    /// Proposal CTA pressed; `form_valid` is the form's validity at click time.
    ProposalClicked { form_valid: bool },
    Submit(Submission),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Rejected,
    Accepted,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DomEffect {
    /// Ask the form to submit itself, re-running constraint validation.
    RequestSubmit,
    /// Show the browser's constraint violation UI.
    ReportValidity,
    ShowFeedback(FeedbackMessage),
    ResetFields,
    /// Hand the accepted payload to lead delivery.
    Deliver(FormPayload),
}

pub struct LeadFormController {
    form_id: String,
    intent: Intent,
    phase: Phase,
    sink: Rc<dyn AnalyticsSink>,
}

#[cfg(test)]
impl Default for LeadFormController {
    fn default() -> Self {
        Self::new(config::LEAD_FORM_ID, Rc::new(crate::analytics::NoopSink))
    }
}

impl LeadFormController {
    pub fn new(form_id: impl Into<String>, sink: Rc<dyn AnalyticsSink>) -> Self {
        Self {
            form_id: form_id.into(),
            intent: Intent::Lead,
            phase: Phase::Idle,
            sink,
        }
    }

    #[cfg(test)]
    pub fn intent(&self) -> Intent {
        self.intent
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle(&mut self, input: FormInput) -> Vec<DomEffect> {
        match input {
            // requestSubmit fires no submit event on an invalid form
            FormInput::ProposalClicked { form_valid: false } => {
                self.submit(Submission::default())
            }
            FormInput::ProposalClicked { form_valid: true } => {
                self.intent = Intent::Proposal;
                vec![DomEffect::RequestSubmit]
            }
            FormInput::Submit(submission) => self.submit(submission),
        }
    }

    /// Called once the effects of a proposal click have run. A proposal
    /// intent still pending here never reached a submit and is dropped.
    pub fn settle(&mut self) {
        if self.intent == Intent::Proposal {
            log::debug!("{}: proposal request produced no submit", self.form_id);
            self.intent = Intent::Lead;
        }
    }

    fn submit(&mut self, submission: Submission) -> Vec<DomEffect> {
        self.enter(Phase::Validating);
        let effects = if submission.valid {
            self.enter(Phase::Accepted);
            self.accept(submission.fields)
        } else {
            self.enter(Phase::Rejected);
            vec![
                DomEffect::ShowFeedback(FeedbackMessage::neutral(config::MSG_REJECTED)),
                DomEffect::ReportValidity,
            ]
        };
        self.intent = Intent::Lead;
        self.enter(Phase::Idle);
        effects
    }

    fn accept(&self, mut fields: FormPayload) -> Vec<DomEffect> {
        fields.insert("intent", self.intent.as_str());
        log::info!("lead accepted: {} fields, intent {}", fields.len(), self.intent);

        let payload = AnalyticsPayload::new(self.form_id.clone(), self.intent);
        self.sink.emit(config::EVENT_GENERATE_LEAD, &payload);
        self.sink.emit(config::EVENT_FORM_SUBMIT, &payload);

        vec![
            DomEffect::Deliver(fields),
            DomEffect::ShowFeedback(FeedbackMessage::success(config::MSG_ACCEPTED)),
            DomEffect::ResetFields,
        ]
    }

    fn enter(&mut self, next: Phase) {
        log::debug!("{}: {:?} -> {:?}", self.form_id, self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::RecordingSink;
    use pretty_assertions::assert_eq;

    fn controller() -> (LeadFormController, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        let controller = LeadFormController::new("leadForm", sink.clone());
        (controller, sink)
    }

    fn valid() -> FormInput {
        FormInput::Submit(Submission {
            valid: true,
            fields: FormPayload::from_entries([("name", "Анна"), ("phone", "+7 900 000-00-00"), ("consent", "on")]),
        })
    }

    fn invalid() -> FormInput {
        FormInput::Submit(Submission {
            valid: false,
            fields: FormPayload::from_entries([("name", ""), ("phone", "+7 900 000-00-00")]),
        })
    }

    fn feedback(effects: &[DomEffect]) -> Vec<&FeedbackMessage> {
        effects
            .iter()
            .filter_map(|e| match e {
                DomEffect::ShowFeedback(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn delivered(effects: &[DomEffect]) -> Option<&FormPayload> {
        effects.iter().find_map(|e| match e {
            DomEffect::Deliver(payload) => Some(payload),
            _ => None,
        })
    }

    #[test]
    fn valid_submit_emits_both_events_and_clears_form() {
        let (mut form, sink) = controller();
        let effects = form.handle(valid());

        assert_eq!(sink.names(), vec!["generate_lead".to_string(), "form_submit".to_string()]);
        assert_eq!(sink.intents(), vec![Intent::Lead, Intent::Lead]);
        assert_eq!(feedback(&effects), vec![&FeedbackMessage::success(config::MSG_ACCEPTED)]);
        assert!(effects.contains(&DomEffect::ResetFields));
        assert!(!effects.contains(&DomEffect::ReportValidity));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn accepted_payload_carries_intent_field() {
        let (mut form, _sink) = controller();
        let effects = form.handle(valid());
        let payload = delivered(&effects).expect("payload delivered");
        assert_eq!(payload.get("intent"), Some("lead"));
        assert_eq!(payload.get("name"), Some("Анна"));
        assert_eq!(payload.len(), 4);
    }

    #[test]
    fn invalid_submit_is_rejected_without_analytics() {
        let (mut form, sink) = controller();
        let effects = form.handle(invalid());

        assert!(sink.names().is_empty());
        assert_eq!(
            effects,
            vec![
                DomEffect::ShowFeedback(FeedbackMessage::neutral(config::MSG_REJECTED)),
                DomEffect::ReportValidity,
            ]
        );
        assert_eq!(form.intent(), Intent::Lead);
        assert_eq!(form.phase(), Phase::Idle);
    }

    /// Runs a proposal click the way the component does, delivering the
    /// submit that `requestSubmit` fires on a valid form.
    fn click_proposal(form: &mut LeadFormController, form_valid: bool) -> Vec<DomEffect> {
        let mut effects = form.handle(FormInput::ProposalClicked { form_valid });
        if effects.contains(&DomEffect::RequestSubmit) {
            effects.extend(form.handle(valid()));
        }
        form.settle();
        effects
    }

    #[test]
    fn proposal_on_invalid_form_is_rejected_without_submit() {
        let (mut form, sink) = controller();
        let effects = form.handle(FormInput::ProposalClicked { form_valid: false });

        assert_eq!(
            effects,
            vec![
                DomEffect::ShowFeedback(FeedbackMessage::neutral(config::MSG_REJECTED)),
                DomEffect::ReportValidity,
            ]
        );
        assert_eq!(form.intent(), Intent::Lead);
        assert!(sink.names().is_empty());

        form.handle(valid());
        assert_eq!(sink.intents(), vec![Intent::Lead, Intent::Lead]);
    }

    #[test]
    fn undelivered_proposal_does_not_tag_the_next_direct_submit() {
        let (mut form, sink) = controller();
        assert_eq!(
            form.handle(FormInput::ProposalClicked { form_valid: true }),
            vec![DomEffect::RequestSubmit]
        );
        assert_eq!(form.intent(), Intent::Proposal);
        // the submit event never arrives
        form.settle();
        assert_eq!(form.intent(), Intent::Lead);

        form.handle(valid());
        assert_eq!(sink.intents(), vec![Intent::Lead, Intent::Lead]);
    }

    #[test]
    fn proposal_click_tags_only_the_next_submit() {
        let (mut form, sink) = controller();
        let effects = click_proposal(&mut form, true);
        assert_eq!(delivered(&effects).and_then(|p| p.get("intent")), Some("proposal"));

        form.handle(valid());
        assert_eq!(
            sink.intents(),
            vec![Intent::Proposal, Intent::Proposal, Intent::Lead, Intent::Lead]
        );
    }

    #[test]
    fn feedback_colors_follow_tone() {
        assert_eq!(FeedbackMessage::success("ok").color(), "#16a34a");
        assert_eq!(FeedbackMessage::neutral("no").color(), "var(--muted)");
    }

    #[test]
    fn duplicate_field_names_keep_last_value() {
        let payload = FormPayload::from_entries([("service", "bath"), ("service", "kitchen")]);
        assert_eq!(payload.get("service"), Some("kitchen"));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn default_controller_uses_noop_sink() {
        let mut form = LeadFormController::default();
        let effects = form.handle(valid());
        assert!(effects.contains(&DomEffect::ResetFields));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Step {
            Proposal(bool),
            Submit(bool),
        }

        fn arb_step() -> impl Strategy<Value = Step> {
            prop_oneof![any::<bool>().prop_map(Step::Proposal), any::<bool>().prop_map(Step::Submit)]
        }

        proptest! {
            #[test]
            fn intent_is_proposal_only_right_after_cta(steps in proptest::collection::vec(arb_step(), 0..40)) {
                let (mut form, sink) = controller();
                let mut expected = Vec::new();
                for step in &steps {
                    match step {
                        Step::Proposal(ok) => {
                            click_proposal(&mut form, *ok);
                            if *ok {
                                expected.extend([Intent::Proposal, Intent::Proposal]);
                            }
                        }
                        Step::Submit(ok) => {
                            let input = if *ok { valid() } else { invalid() };
                            form.handle(input);
                            if *ok {
                                expected.extend([Intent::Lead, Intent::Lead]);
                            }
                        }
                    }
                    prop_assert_eq!(form.phase(), Phase::Idle);
                    prop_assert_eq!(form.intent(), Intent::Lead);
                }
                prop_assert_eq!(sink.intents(), expected);
            }
        }
    }
}
