//! Starter question set.
//!
//! Seeded into an empty pool so a fresh node has something to promote before
//! an operator loads the full catalogue through the manage surface.

use shared_types::NewQuestion;

/// The built-in dilemmas, in insertion order.
pub fn seed_questions() -> Vec<NewQuestion> {
    vec![
        NewQuestion {
            title: Some("The Signal Box".into()),
            image: None,
            text: "You operate a railway signal box. A runaway freight car is \
                   heading toward five workers on the main line. Throwing the \
                   switch diverts it onto a siding where a single inspector is \
                   working. Nobody else can act in time. What do you do?"
                .into(),
            answers: vec![
                "Throw the switch; one life against five is arithmetic.".into(),
                "Leave the switch; you will not make yourself the cause of a death.".into(),
            ],
        },
        NewQuestion {
            title: Some("The Borrowed Thesis".into()),
            image: None,
            text: "A close friend defends their doctoral thesis next week. By \
                   accident you discover a chapter is lifted almost verbatim \
                   from an obscure dissertation. Reporting it ends their \
                   career; staying silent makes you complicit if it ever \
                   surfaces. What do you do?"
                .into(),
            answers: vec![
                "Report it; the degree means nothing if it is built on theft.".into(),
                "Stay silent; loyalty outweighs a rule they may never trip over.".into(),
            ],
        },
        NewQuestion {
            title: Some("The Last Dose".into()),
            image: None,
            text: "You are the village medic with one dose of antivenom. Two \
                   patients arrive: an elderly doctor who could save others for \
                   years to come, and a child with a weaker chance of surviving \
                   even with the dose. What do you do?"
                .into(),
            answers: vec![
                "Treat the doctor; the greatest total good over time.".into(),
                "Treat the child; the most life left to live deserves the chance.".into(),
            ],
        },
    ]
}
