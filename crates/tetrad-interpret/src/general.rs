//! Rule-based interpretation, available without any model call.
//!
//! Text is selected by scale and T-score band, then contextualized with a
//! gender line and a life-stage line. Deterministic, offline, and always
//! available as the fallback when the examinee declines the model-backed
//! path.

use serde::{Deserialize, Serialize};

use tetrad_core::models::demographics::Gender;
use tetrad_core::models::scale::Scale;
use tetrad_core::models::scores::TScores;

use crate::levels::{AgeGroup, TScoreLevel};

/// Interpretation text for one scale at one T-score band.
struct LevelTexts {
    base: &'static str,
    male: &'static str,
    female: &'static str,
    youth: &'static str,
    young_adult: &'static str,
    middle_age: &'static str,
    senior: &'static str,
}

impl LevelTexts {
    fn gender_context(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    fn age_context(&self, group: AgeGroup) -> &'static str {
        match group {
            AgeGroup::Youth => self.youth,
            AgeGroup::YoungAdult => self.young_adult,
            AgeGroup::MiddleAge => self.middle_age,
            AgeGroup::Senior => self.senior,
        }
    }
}

/// Rule-based interpretations for all four scales of one administration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralInterpretation {
    pub mach: String,
    pub narc: String,
    pub psyc: String,
    pub sadi: String,
}

/// The deterministic interpretation for one scale: the band's base text,
/// a gender context line, and a life-stage context line, joined by blank
/// lines.
pub fn scale_interpretation(scale: Scale, t_score: f64, gender: Gender, age: u8) -> String {
    let texts = texts(scale, TScoreLevel::from_t(t_score));
    format!(
        "{}\n\n{}\n\n{}",
        texts.base,
        texts.gender_context(gender),
        texts.age_context(AgeGroup::from_age(age))
    )
}

/// Assemble the rule-based interpretation for every scale.
pub fn general_interpretation(t_scores: &TScores, gender: Gender, age: u8) -> GeneralInterpretation {
    GeneralInterpretation {
        mach: scale_interpretation(Scale::Mach, t_scores.mach, gender, age),
        narc: scale_interpretation(Scale::Narc, t_scores.narc, gender, age),
        psyc: scale_interpretation(Scale::Psyc, t_scores.psyc, gender, age),
        sadi: scale_interpretation(Scale::Sadi, t_scores.sadi, gender, age),
    }
}

fn texts(scale: Scale, level: TScoreLevel) -> &'static LevelTexts {
    match (scale, level) {
        (Scale::Mach, TScoreLevel::VeryLow) => &MACH_VERY_LOW,
        (Scale::Mach, TScoreLevel::Low) => &MACH_LOW,
        (Scale::Mach, TScoreLevel::Average) => &MACH_AVERAGE,
        (Scale::Mach, TScoreLevel::High) => &MACH_HIGH,
        (Scale::Mach, TScoreLevel::VeryHigh) => &MACH_VERY_HIGH,
        (Scale::Narc, TScoreLevel::VeryLow) => &NARC_VERY_LOW,
        (Scale::Narc, TScoreLevel::Low) => &NARC_LOW,
        (Scale::Narc, TScoreLevel::Average) => &NARC_AVERAGE,
        (Scale::Narc, TScoreLevel::High) => &NARC_HIGH,
        (Scale::Narc, TScoreLevel::VeryHigh) => &NARC_VERY_HIGH,
        (Scale::Psyc, TScoreLevel::VeryLow) => &PSYC_VERY_LOW,
        (Scale::Psyc, TScoreLevel::Low) => &PSYC_LOW,
        (Scale::Psyc, TScoreLevel::Average) => &PSYC_AVERAGE,
        (Scale::Psyc, TScoreLevel::High) => &PSYC_HIGH,
        (Scale::Psyc, TScoreLevel::VeryHigh) => &PSYC_VERY_HIGH,
        (Scale::Sadi, TScoreLevel::VeryLow) => &SADI_VERY_LOW,
        (Scale::Sadi, TScoreLevel::Low) => &SADI_LOW,
        (Scale::Sadi, TScoreLevel::Average) => &SADI_AVERAGE,
        (Scale::Sadi, TScoreLevel::High) => &SADI_HIGH,
        (Scale::Sadi, TScoreLevel::VeryHigh) => &SADI_VERY_HIGH,
    }
}

const MACH_VERY_LOW: LevelTexts = LevelTexts {
    base: "Very little tendency to use or manipulate others strategically. \
           Open and transparent in relationships, placing high value on \
           honesty and trust.",
    male: "As a man, prefers an honest approach even in competitive \
           settings and values long-term trust over short-term gain.",
    female: "As a woman, shows strong empathy and consideration for others \
             and treats sincerity in relationships as essential.",
    youth: "Honest values formed at this age become a solid base for later \
            relationships.",
    young_adult: "Early in working life, an honest posture helps build a \
                  reputation as someone worth trusting.",
    middle_age: "The trust built up across work and relationships is now \
                 an important asset.",
    senior: "A lifetime of honesty and integrity earns the respect of the \
             people nearby.",
};

const MACH_LOW: LevelTexts = LevelTexts {
    base: "Low tendency to manipulate or exploit others. Generally open \
           and candid in relationships, preferring sincere communication \
           over strategic calculation.",
    male: "As a man, values fair play even when competing and is \
           uncomfortable with win-at-any-cost approaches.",
    female: "As a woman, values sincerity in relationships and respects \
             other people's feelings and positions.",
    youth: "A candid manner builds trust among peers.",
    young_adult: "Honesty tends to be received well at work and in social \
                  life.",
    middle_age: "Accumulated trust becomes a source of leadership and \
                 influence.",
    senior: "Sincerity combined with life experience has a positive effect \
             on others.",
};

const MACH_AVERAGE: LevelTexts = LevelTexts {
    base: "Able to balance strategic thinking with candor as the situation \
           requires. Can act shrewdly when needed while avoiding outright \
           manipulation or deceit.",
    male: "As a man, can shift between competition and cooperation as \
           circumstances demand.",
    female: "As a woman, can keep relationships in harmony while still \
             pursuing personal interests when appropriate.",
    youth: "Developing an appropriate sense of balance while learning \
            social skills.",
    young_adult: "Finding the working balance between strategic thinking \
                  and sincerity that adult life requires.",
    middle_age: "Experience allows flexible responses fitted to the \
                 situation.",
    senior: "Long experience allows wise judgment suited to each \
             situation.",
};

const MACH_HIGH: LevelTexts = LevelTexts {
    base: "A fairly strong tendency toward strategic, calculating thought. \
           Skilled at persuading others and steering situations toward a \
           goal, but taken too far this can cost others' trust.",
    male: "As a man, pursues strategic advantage in competitive settings; \
           the sincerity of relationships deserves attention too.",
    female: "As a woman, handles situations cleverly, but excessive \
             calculation can strain relationships.",
    youth: "Strategic thinking is developing; ethical standards need to be \
            established alongside it.",
    young_adult: "A strategic approach is useful at work, but long-term \
                  trust also matters.",
    middle_age: "A good time to re-examine the balance between strategic \
                 skill and genuine relationships.",
    senior: "Long experience should confirm that strategy and sincerity \
             need to stay in balance.",
};

const MACH_VERY_HIGH: LevelTexts = LevelTexts {
    base: "A very strong tendency to manipulate or exploit others. May \
           stop at little to reach a goal, which risks damaged trust and \
           broken relationships over time.",
    male: "As a man, an overly strategic posture can read as power-seeking \
           and make genuine cooperation difficult.",
    female: "As a woman, a markedly manipulative manner can put the people \
             nearby on guard.",
    youth: "Excessive strategic thinking this early can lead to isolation \
            among peers.",
    young_adult: "Focusing on short-term wins risks losing long-term \
                  trust.",
    middle_age: "A pattern of putting gain before the quality of \
                 relationships risks becoming entrenched.",
    senior: "A time to re-evaluate lifelong relationship patterns and \
             recover sincerity.",
};

const NARC_VERY_LOW: LevelTexts = LevelTexts {
    base: "Self-regard is low or notably modest. May underestimate \
           personal abilities and sometimes miss opportunities through \
           lack of confidence.",
    male: "As a man, would benefit from acknowledging and expressing \
           personal ability and worth more.",
    female: "As a woman, modesty can be a strength, but recognizing \
             personal worth matters as well.",
    youth: "The identity-forming years call for building a positive \
            self-image.",
    young_adult: "Entering working life calls for practice presenting \
                  personal strengths.",
    middle_age: "A time to recover confidence in accumulated experience \
                 and ability.",
    senior: "Life experience and wisdom deserve some pride.",
};

const NARC_LOW: LevelTexts = LevelTexts {
    base: "Modest in self-evaluation. Does not parade achievements and \
           readily credits the contributions of others.",
    male: "As a man, modesty is a strength, though showing ability when it \
           counts has value too.",
    female: "As a woman, consideration for others is positive; personal \
             worth deserves respect as well.",
    youth: "Modesty is good; confidence should grow alongside it.",
    young_adult: "Career growth sometimes requires presenting results \
                  plainly.",
    middle_age: "Accumulated achievements justify a measure of pride.",
    senior: "Life's achievements can be acknowledged and valued \
             positively.",
};

const NARC_AVERAGE: LevelTexts = LevelTexts {
    base: "Balanced self-evaluation. Aware of personal strengths without \
           inflating them, and able to take feedback from others.",
    male: "As a man, confidence and modesty are well balanced.",
    female: "As a woman, self-worth and consideration for others are in \
             harmony.",
    youth: "A healthy self-image is taking shape.",
    young_adult: "Carries the level of confidence adult life requires.",
    middle_age: "Capable of realistic appraisal of experience and \
                 ability.",
    senior: "Maintains a balanced self-image grounded in life experience.",
};

const NARC_HIGH: LevelTexts = LevelTexts {
    base: "Self-evaluation runs high. A strong sense of personal ability \
           and worth, with a desire for attention and recognition. Taken \
           too far this can strain relationships.",
    male: "As a man, strong confidence can become leadership, but other \
           people's views deserve a hearing.",
    female: "As a woman, confidence is positive; keeping relationships \
             cooperative deserves attention too.",
    youth: "Confidence is good; so is a willingness to take feedback.",
    young_adult: "Confidence drives results, but teamwork matters as \
                  much.",
    middle_age: "A time to check the balance between pride in achievement \
                 and humility.",
    senior: "Confidence earned over long experience is best expressed with \
             wisdom.",
};

const NARC_VERY_HIGH: LevelTexts = LevelTexts {
    base: "Self-evaluation is very high, with a grandiose self-image. \
           Craves constant attention and praise and can react sharply to \
           criticism, which invites conflict in relationships.",
    male: "As a man, marked self-centeredness is a serious obstacle to \
           cooperative relationships.",
    female: "As a woman, conspicuous self-display can make relationships \
             with others difficult.",
    youth: "A grandiose self-image can harm peer relationships and \
            growth.",
    young_adult: "At a stage where teamwork matters, self-centeredness \
                  needs restraint.",
    middle_age: "Self-perception needs re-examination for the sake of \
                 relationship quality.",
    senior: "Life experience offers an opening to learn humility.",
};

const PSYC_VERY_LOW: LevelTexts = LevelTexts {
    base: "Impulses are very well controlled; rules and authority are \
           respected. Acts deliberately and with planning, and works to \
           avoid clashes with others.",
    male: "As a man, presents as steady and responsible.",
    female: "As a woman, presents as harmonious and orderly.",
    youth: "Follows rules well and keeps a stable routine.",
    young_adult: "Seen as responsible and dependable in working life.",
    middle_age: "A stable way of living underpins social trust.",
    senior: "Lifelong self-restraint sets an example for others.",
};

const PSYC_LOW: LevelTexts = LevelTexts {
    base: "Impulse control is good and social norms are generally \
           observed. Tries to respond rationally even in conflict.",
    male: "As a man, shows self-control and a sense of responsibility.",
    female: "As a woman, shows a stable, predictable pattern of behavior.",
    youth: "Self-regulation is developing well.",
    young_adult: "Carries the self-control working life requires.",
    middle_age: "A stable way of living is established.",
    senior: "Restraint and wisdom work together at this stage.",
};

const PSYC_AVERAGE: LevelTexts = LevelTexts {
    base: "Impulsivity and self-restraint are in balance. Behaves \
           appropriately in most situations, with occasional impulsiveness \
           under stress.",
    male: "As a man, shows a typical level of impulse control.",
    female: "As a woman, keeps emotion and reason in balance as situations \
             demand.",
    youth: "Impulse control is developing along a normal course.",
    young_adult: "Has the basic self-restraint adult life requires.",
    middle_age: "Experience is steadying impulse control.",
    senior: "Life experience allows a calm response to most situations.",
};

const PSYC_HIGH: LevelTexts = LevelTexts {
    base: "Impulsivity runs high and restraint runs short. May resist \
           rules or take risks, acting without weighing consequences. \
           Conflict with others can be frequent.",
    male: "As a man, impulsive acts can escalate into legal or social \
           trouble; caution is warranted.",
    female: "As a woman, difficulty regulating emotion can weigh on \
             relationships.",
    youth: "A stage where support in building impulse control is needed.",
    young_adult: "Short restraint can become a problem at work; deliberate \
                  practice helps.",
    middle_age: "Sustained impulsivity can erode life's stability; \
                 professional help is worth seeking.",
    senior: "Long-standing patterns take real effort to change.",
};

const PSYC_VERY_HIGH: LevelTexts = LevelTexts {
    base: "Impulsivity is very high and restraint markedly short. Pushes \
           hard against authority and rules, with real risk of dangerous \
           or antisocial behavior. Legal trouble and broken relationships \
           are live risks; professional help is needed.",
    male: "As a man, aggression combined with impulsivity can do serious \
           damage; prompt intervention is needed.",
    female: "As a woman, severe failures of emotional control can harm \
             self and others.",
    youth: "Early, intensive intervention is urgent.",
    young_adult: "Treatment is essential before antisocial patterns set.",
    middle_age: "Long-running problem behavior calls for comprehensive \
                 intervention.",
    senior: "The pattern is lifelong, but improvement through treatment \
             remains possible.",
};

const SADI_VERY_LOW: LevelTexts = LevelTexts {
    base: "No interest in others' pain or in violence. Strongly empathic, \
           sensitive to others' hurt, and seeks peace over conflict.",
    male: "As a man, presents as nonviolent and empathic.",
    female: "As a woman, empathizes deeply with others' feelings and shows \
             consistent consideration.",
    youth: "Empathy and prosocial attitudes are developing well.",
    young_adult: "Shows a mature, considerate manner with others.",
    middle_age: "A settled preference for peaceful, harmonious \
                 relationships.",
    senior: "A lifetime of empathy and consideration benefits everyone \
             nearby.",
};

const SADI_LOW: LevelTexts = LevelTexts {
    base: "Takes no pleasure in others' pain and has little interest in \
           violent content. Generally empathic and prosocial.",
    male: "As a man, presents as non-aggressive and peaceable.",
    female: "As a woman, respects and considers other people's feelings.",
    youth: "Healthy empathy is developing.",
    young_adult: "Considerate in personal relationships.",
    middle_age: "Keeps relationships harmonious and calm.",
    senior: "Life experience has deepened empathy.",
};

const SADI_AVERAGE: LevelTexts = LevelTexts {
    base: "A typical appetite for stimulation and competition. May enjoy \
           rough sports or games but has no wish to do real harm to \
           anyone.",
    male: "As a man, enjoys competition and thrills within limits that \
           hurt no one.",
    female: "As a woman, balances a moderate taste for excitement with \
             empathy.",
    youth: "Competitive drive and stimulation-seeking are at normal \
            levels.",
    young_adult: "Seeks excitement within socially accepted bounds.",
    middle_age: "Experience has taught appropriate outlets for \
                 stimulation.",
    senior: "Has settled on healthy ways to pursue interest and \
             excitement.",
};

const SADI_HIGH: LevelTexts = LevelTexts {
    base: "A tendency to find amusement in others' pain or missteps. \
           Prefers violent or intense content and may tease or torment \
           others at times, which can damage relationships.",
    male: "As a man, elevated aggression can provoke conflict in \
           relationships.",
    female: "As a woman, relational aggression such as gossip or exclusion \
             can surface.",
    youth: "Can develop into bullying; attention is needed.",
    young_adult: "Aggressive behavior can become a problem at work and in \
                  relationships.",
    middle_age: "A time when empathy needs deliberate strengthening.",
    senior: "Long-standing patterns deserve re-evaluation and \
             empathy-building.",
};

const SADI_VERY_HIGH: LevelTexts = LevelTexts {
    base: "Strong pleasure taken in others' pain. High risk of \
           deliberately causing pain or humiliation, which can end in \
           serious relationship and legal trouble; professional help is \
           needed.",
    male: "As a man, the risk of physical and verbal violence is high; \
           prompt intervention is needed.",
    female: "As a woman, the risk of relational violence such as \
             cyberbullying or group exclusion is high.",
    youth: "Early intervention is urgent before serious bullying takes \
            hold.",
    young_adult: "Treatment is needed before antisocial patterns set.",
    middle_age: "Changing a long pattern of harm requires professional \
                 treatment.",
    senior: "The pattern is lifelong, but change with professional help \
             remains possible.",
};
