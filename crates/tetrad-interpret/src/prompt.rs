//! Prompt assembly for model-backed interpretation.

use tetrad_core::models::scale::Scale;

use crate::request::InterpretationRequest;

/// Fixed framing sent as the system prompt: the interpreter's role, the
/// T-score guideline bands, and the required four-section response
/// structure.
pub const SYSTEM_PROMPT: &str = "\
You are a clinical psychologist interpreting Dark Tetrad personality \
inventory results for counselor education.

## Interpretation guidelines
- T-score < 40: low
- T-score 40-60: average range
- T-score > 60: high

## Requested structure
Write the interpretation using exactly this structure:

### 1. Overall personality profile
Summarize the examinee's character by integrating the pattern across all \
four scales (three to four sentences).

### 2. Scale-by-scale interpretation
Interpret each scale concretely, weighing its T-score together with the \
examinee's background information (two to three sentences per scale).

#### Machiavellianism
[interpretation]

#### Narcissism
[interpretation]

#### Psychopathy
[interpretation]

#### Sadism
[interpretation]

### 3. Implications for the counseling relationship
Explain how these traits may shape the counseling relationship and the \
therapeutic approach, drawing in particular on the answers about clients \
the examinee understands well and clients the examinee finds difficult \
(three to four sentences).

### 4. Self-reflection and growth
Offer concrete suggestions for self-awareness and professional \
development, considering how recent stress may affect counseling work \
(three to four sentences).

---

**Important**:
- This is an educational instrument for the counselor's own development: \
the analysis concerns the examinee, not a client.
- Avoid diagnostic language; write insight-oriented prose aimed at \
self-understanding and professional growth.
- Use every piece of background the examinee provided (personality, \
childhood, comfortable and difficult clients, stress) to contextualize \
the interpretation.
- Keep a balanced tone that recognizes strengths while encouraging \
self-reflection.
- Keep the section headings exactly as given and fill in only the content.";

/// Assemble the per-examinee message: the profile lines, then each scale's
/// raw sum against its maximum, T-score to one decimal, and percentile
/// rank.
pub fn user_message(request: &InterpretationRequest) -> String {
    let mut message = String::new();

    message.push_str("## Examinee profile\n");
    message.push_str(&format!("- Gender: {}\n", request.gender.label()));
    message.push_str(&format!("- Age: {}\n", request.age));
    if let Some(info) = &request.additional_info {
        if let Some(text) = &info.my_personality {
            message.push_str(&format!("- How I see my own personality: {text}\n"));
        }
        if let Some(text) = &info.childhood_event {
            message.push_str(&format!("- A significant childhood memory: {text}\n"));
        }
        if let Some(text) = &info.comfortable_clients {
            message.push_str(&format!("- Clients I understand well: {text}\n"));
        }
        if let Some(text) = &info.difficult_clients {
            message.push_str(&format!("- Clients I find uncomfortable or difficult: {text}\n"));
        }
        if let Some(text) = &info.recent_stress {
            message.push_str(&format!("- My recent stress: {text}\n"));
        }
    }

    message.push_str("\n## Results\n### Raw scores\n");
    for scale in Scale::ALL {
        let (_, max) = scale.raw_range();
        message.push_str(&format!(
            "- {} ({}): {}/{}\n",
            scale.name(),
            scale.as_str(),
            request.raw_scores.get(scale),
            max
        ));
    }

    message.push_str("\n### T-scores (standardized, mean 50, SD 10)\n");
    for scale in Scale::ALL {
        message.push_str(&format!(
            "- {}: T={:.1} (percentile {})\n",
            scale.name(),
            request.t_scores.get(scale),
            request.percentiles.get(scale)
        ));
    }

    message
}
