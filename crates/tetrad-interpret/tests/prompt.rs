//! Tests for prompt assembly.

use tetrad_core::models::demographics::{AdditionalInfo, Gender};
use tetrad_core::models::scores::{Percentiles, RawScores, TScores};
use tetrad_interpret::prompt::{user_message, SYSTEM_PROMPT};
use tetrad_interpret::InterpretationRequest;

fn request() -> InterpretationRequest {
    InterpretationRequest {
        age: 34,
        gender: Gender::Female,
        raw_scores: RawScores {
            mach: 22,
            narc: 17,
            psyc: 9,
            sadi: 25,
        },
        t_scores: TScores {
            mach: 65.62,
            narc: 54.4,
            psyc: 42.5,
            sadi: 71.0,
        },
        percentiles: Percentiles {
            mach: 94,
            narc: 67,
            psyc: 23,
            sadi: 98,
        },
        additional_info: None,
    }
}

#[test]
fn system_prompt_states_the_guideline_bands() {
    assert!(SYSTEM_PROMPT.contains("T-score < 40: low"));
    assert!(SYSTEM_PROMPT.contains("T-score 40-60: average range"));
    assert!(SYSTEM_PROMPT.contains("T-score > 60: high"));
}

#[test]
fn system_prompt_requests_the_four_sections() {
    assert!(SYSTEM_PROMPT.contains("### 1. Overall personality profile"));
    assert!(SYSTEM_PROMPT.contains("### 2. Scale-by-scale interpretation"));
    assert!(SYSTEM_PROMPT.contains("### 3. Implications for the counseling relationship"));
    assert!(SYSTEM_PROMPT.contains("### 4. Self-reflection and growth"));
    for scale_heading in [
        "#### Machiavellianism",
        "#### Narcissism",
        "#### Psychopathy",
        "#### Sadism",
    ] {
        assert!(SYSTEM_PROMPT.contains(scale_heading), "missing {scale_heading}");
    }
}

#[test]
fn user_message_reports_raw_scores_against_their_maxima() {
    let message = user_message(&request());

    assert!(message.contains("- Machiavellianism (mach): 22/30"));
    assert!(message.contains("- Narcissism (narc): 17/30"));
    assert!(message.contains("- Psychopathy (psyc): 9/30"));
    assert!(message.contains("- Sadism (sadi): 25/25"));
}

#[test]
fn user_message_formats_t_scores_to_one_decimal_with_percentiles() {
    let message = user_message(&request());

    assert!(message.contains("- Machiavellianism: T=65.6 (percentile 94)"));
    assert!(message.contains("- Narcissism: T=54.4 (percentile 67)"));
    assert!(message.contains("- Psychopathy: T=42.5 (percentile 23)"));
    assert!(message.contains("- Sadism: T=71.0 (percentile 98)"));
}

#[test]
fn user_message_opens_with_the_examinee_profile() {
    let message = user_message(&request());

    assert!(message.starts_with("## Examinee profile\n"));
    assert!(message.contains("- Gender: female\n"));
    assert!(message.contains("- Age: 34\n"));
}

#[test]
fn background_lines_appear_only_when_provided() {
    let bare = user_message(&request());
    assert!(!bare.contains("How I see my own personality"));
    assert!(!bare.contains("My recent stress"));

    let mut with_context = request();
    with_context.additional_info = Some(AdditionalInfo {
        my_personality: Some("calm but stubborn".to_owned()),
        recent_stress: Some("deadline pressure".to_owned()),
        ..AdditionalInfo::default()
    });
    let message = user_message(&with_context);

    assert!(message.contains("- How I see my own personality: calm but stubborn\n"));
    assert!(message.contains("- My recent stress: deadline pressure\n"));
    assert!(!message.contains("A significant childhood memory"));
    assert!(!message.contains("Clients I understand well"));
}
