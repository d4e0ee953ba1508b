use namespark_core::{Error, FormField, FormInput, FormState, FormStep};

fn filled_form() -> FormState {
    let mut form = FormState::new();
    form.set_field(FormField::CoreConcept, "AI platform that helps writers");
    form.set_field(FormField::Industry, "Tech");
    form.set_field(FormField::Vibe, "Modern");
    form
}

#[test]
fn concept_step_rejects_blank_text() {
    let mut form = FormState::new();
    form.set_field(FormField::CoreConcept, "   ");

    let result = form.advance();
    match result {
        Err(Error::Validation { step, message }) => {
            assert_eq!(step, FormStep::Concept);
            assert_eq!(message, "Please describe your core concept.");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(form.current_step(), FormStep::Concept);
    assert!(!form.is_completed(FormStep::Concept));
}

#[test]
fn industry_and_vibe_steps_require_a_selection() {
    let mut form = FormState::new();
    form.set_field(FormField::CoreConcept, "meal kits");
    assert_eq!(form.advance().expect("concept step"), FormStep::Industry);

    let err = form.advance().expect_err("industry missing");
    assert!(err.to_string().contains("Please select an industry."));

    form.set_field(FormField::Industry, "Food");
    assert_eq!(form.advance().expect("industry step"), FormStep::Vibe);

    let err = form.advance().expect_err("vibe missing");
    assert!(err.to_string().contains("Please select a vibe."));
}

#[test]
fn blank_keywords_become_placeholder() {
    let mut form = filled_form();
    form.set_field(FormField::Keywords, "  ");

    let input = form.submit().expect("submit");
    assert_eq!(input.keywords, "None specified");
    assert_eq!(form.current_step(), FormStep::Results);
    for step in [
        FormStep::Concept,
        FormStep::Industry,
        FormStep::Vibe,
        FormStep::Keywords,
    ] {
        assert!(form.is_completed(step), "step {step} should be completed");
    }
}

#[test]
fn keywords_are_trimmed_and_placeholder_can_be_disabled() {
    let mut form = FormState::with_keyword_placeholder(None);
    form = form.prefilled(FormInput::new("meal kits", "Food", "Playful", ""));
    let input = form.submit().expect("submit");
    assert_eq!(input.keywords, "");

    let mut form = filled_form();
    form.set_field(FormField::Keywords, "  flow, insight  ");
    let input = form.submit().expect("submit");
    assert_eq!(input.keywords, "flow, insight");
}

#[test]
fn back_stops_at_first_step_and_advance_stops_at_results() {
    let mut form = filled_form();
    assert_eq!(form.back(), FormStep::Concept);

    form.submit().expect("submit");
    assert_eq!(form.advance().expect("results step"), FormStep::Results);
    assert_eq!(form.back(), FormStep::Keywords);
}

#[test]
fn unknown_step_numbers_are_rejected() {
    assert!(matches!(FormStep::from_number(0), Err(Error::UnknownStep(0))));
    assert!(matches!(FormStep::from_number(6), Err(Error::UnknownStep(6))));
    assert_eq!(FormStep::from_number(3).expect("step 3"), FormStep::Vibe);
}
