use crate::catalog::Country;
use crate::util::alias::AResult;
use crate::{lined_bail, lined_err};
use crate::util::random::{pick_where_with, shuffled_with};
use crate::util::traits::option::OptionExt;
use itertools::Itertools;
use rand::Rng;

/// One multiple-choice question: name the capital of `country`. The
/// correct `answer` sits somewhere inside the shuffled `choices`.
#[derive(Debug, Clone)]
pub struct QuizRound {
    pub country: Country,
    pub answer: String,
    pub choices: Vec<String>,
}

/// Picks the answer country uniformly among those with a capital on
/// record, draws `choice_count - 1` distinct decoy capitals from the
/// rest, and shuffles the lot. The input slice is never touched.
pub fn build_capital_round<R>(
    rng: &mut R,
    countries: &[Country],
    choice_count: usize,
) -> AResult<QuizRound>
where
    R: Rng + ?Sized,
{
    if choice_count == 0 {
        lined_bail!("a round needs at least one choice");
    }

    let country = pick_where_with(rng, countries, |c| c.capital.is_some())?.clone();
    let answer = country.capital.clone().or_err("picked country lost its capital")?;

    let decoy_pool: Vec<String> = countries
        .iter()
        .filter(|c| c.iso != country.iso)
        .filter_map(|c| c.capital.clone())
        .filter(|capital| *capital != answer)
        .unique()
        .collect();
    if decoy_pool.len() + 1 < choice_count {
        return Err(lined_err!(
            "need {} distinct capitals, only {} available",
            choice_count,
            decoy_pool.len() + 1
        ));
    }

    let mut choices: Vec<String> = shuffled_with(rng, &decoy_pool)
        .into_iter()
        .take(choice_count - 1)
        .collect();
    choices.push(answer.clone());

    Ok(QuizRound {
        country,
        answer,
        choices: shuffled_with(rng, &choices),
    })
}
