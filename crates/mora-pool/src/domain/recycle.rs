//! Recycling: cloning a FINALIZED question back into the pool.

use shared_types::{Answer, NewQuestion, Question};

/// Clone a finalized question's text into a brand-new UPCOMING insert
/// payload. Identifiers, timestamps, status, and epoch are all dropped; only
/// title, image, body, and answer texts survive.
///
/// For exactly two answers, `swap` reverses their order. Callers draw `swap`
/// from an unbiased coin so a recycled question's A/B positions carry no
/// history of the source row.
pub fn recycle_clone(source: &Question, answers: &[Answer], swap: bool) -> NewQuestion {
    let mut texts: Vec<String> = answers.iter().map(|a| a.text.clone()).collect();
    if swap && texts.len() == 2 {
        texts.reverse();
    }

    NewQuestion {
        title: source.title.clone(),
        image: source.image.clone(),
        text: source.text.clone(),
        answers: texts,
    }
}
