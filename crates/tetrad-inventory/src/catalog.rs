use std::sync::LazyLock;

use tetrad_core::models::scale::Scale;

use crate::item::{Item, LikertOption};

/// The 23 items, interleaved so consecutive items come from different
/// scales (rounds of mach → narc → psyc → sadi). Within a scale the
/// presentation order matches ascending item number, which is also the
/// reference-dataset column order.
pub fn items() -> &'static [Item] {
    static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
        vec![
            // Round 1
            item("dtmc1", Scale::Mach, 1, "It is unwise to let others know your secrets."),
            item("dtnc1", Scale::Narc, 2, "People see me as a natural leader."),
            item("dtps1", Scale::Psyc, 3, "People often say I'm out of control."),
            item("dtsd1", Scale::Sadi, 4, "Watching a fistfight excites me."),
            // Round 2
            item(
                "dtmc2",
                Scale::Mach,
                5,
                "Whatever it takes, you must get the important people on your side.",
            ),
            item("dtnc2", Scale::Narc, 6, "I have a unique talent for persuading people."),
            item(
                "dtps2",
                Scale::Psyc,
                7,
                "I tend to fight against authorities and their rules.",
            ),
            item("dtsd2", Scale::Sadi, 8, "I really enjoy violent films and video games."),
            // Round 3
            item(
                "dtmc3",
                Scale::Mach,
                9,
                "You should avoid direct conflict with people who may be useful to you.",
            ),
            item("dtnc3", Scale::Narc, 10, "Group activities tend to be dull without me."),
            item(
                "dtps3",
                Scale::Psyc,
                11,
                "I have been in more fights than most people of my age and gender.",
            ),
            item("dtsd3", Scale::Sadi, 12, "It is funny to watch fools make mistakes."),
            // Round 4
            item("dtmc4", Scale::Mach, 13, "Keeping a low profile is how you get your way."),
            item(
                "dtnc4",
                Scale::Narc,
                14,
                "I know that I am special because people keep telling me so.",
            ),
            item("dtps5", Scale::Psyc, 15, "I have been in trouble with the law."),
            item("dtsd5", Scale::Sadi, 16, "I enjoy watching violent sports."),
            // Round 5
            item("dtmc5", Scale::Mach, 17, "Manipulating a situation takes planning."),
            item("dtnc5", Scale::Narc, 18, "I have some exceptional qualities."),
            item("dtps6", Scale::Psyc, 19, "I sometimes get into dangerous situations."),
            // Round 6
            item("dtmc6", Scale::Mach, 20, "Flattery is a good way to win people over."),
            item(
                "dtnc6",
                Scale::Narc,
                21,
                "I am likely to become an influential person in my field.",
            ),
            item("dtps7", Scale::Psyc, 22, "People who mess with me always regret it."),
            item(
                "dtsd6",
                Scale::Sadi,
                23,
                "I have said nasty things on social media just for fun.",
            ),
        ]
    });
    &ITEMS
}

/// The agreement anchors, 1 = strongly disagree through 5 = strongly agree.
pub fn likert_options() -> &'static [LikertOption] {
    static OPTIONS: LazyLock<Vec<LikertOption>> = LazyLock::new(|| {
        vec![
            option(1, "Strongly disagree"),
            option(2, "Disagree"),
            option(3, "Neutral"),
            option(4, "Agree"),
            option(5, "Strongly agree"),
        ]
    });
    &OPTIONS
}

fn item(id: &str, scale: Scale, order: u32, text: &str) -> Item {
    Item {
        id: id.to_string(),
        scale,
        order,
        text: text.to_string(),
    }
}

fn option(value: u8, label: &str) -> LikertOption {
    LikertOption {
        value,
        label: label.to_string(),
    }
}
