use rand::Rng;
use std::collections::HashSet;
use trivia_schema::Question;

/// Pick the next quiz question uniformly from `pool` minus `previously_served`.
///
/// `None` means the round is exhausted. The caller owns `previously_served` and grows it between
/// calls; this function keeps no state of its own.
pub fn select_next<'a, R>(
    pool: &'a [Question],
    previously_served: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Question> = pool
        .iter()
        .filter(|q| !previously_served.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let index = rng.random_range(0..eligible.len());
    Some(eligible[index])
}
