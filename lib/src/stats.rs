use crate::data::WordList;
use crate::engine::choose_target;
use crate::engine::play_game_with_guesser;
use crate::engine::RandomGuesser;
use crate::results::GameError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Aggregate statistics over repeated solver rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialStats {
    /// The number of rounds played.
    pub num_trials: u32,
    /// The arithmetic mean of guesses per round.
    pub mean_guesses: f64,
    /// The population standard deviation of guesses per round.
    pub std_dev: f64,
    /// The fewest guesses any round took, or zero if no rounds ran.
    pub best: u32,
    /// The most guesses any round took, or zero if no rounds ran.
    pub worst: u32,
    /// How many rounds finished in exactly N guesses, keyed by N.
    pub games_per_guess_count: BTreeMap<u32, u32>,
}

impl TrialStats {
    fn from_guess_counts(counts: &[u32]) -> TrialStats {
        let num_trials = counts.len() as u32;
        let mean = if num_trials == 0 {
            0.0
        } else {
            counts.iter().map(|count| *count as f64).sum::<f64>() / num_trials as f64
        };
        let variance = if num_trials == 0 {
            0.0
        } else {
            counts
                .iter()
                .map(|count| (*count as f64 - mean).powi(2))
                .sum::<f64>()
                / num_trials as f64
        };
        let mut games_per_guess_count: BTreeMap<u32, u32> = BTreeMap::new();
        for count in counts {
            *games_per_guess_count.entry(*count).or_insert(0) += 1;
        }
        TrialStats {
            num_trials,
            mean_guesses: mean,
            std_dev: variance.sqrt(),
            best: counts.iter().copied().min().unwrap_or(0),
            worst: counts.iter().copied().max().unwrap_or(0),
            games_per_guess_count,
        }
    }
}

/// Plays `num_trials` independent solver rounds against `words` and collects
/// guess-count statistics.
///
/// Trials run in parallel, each with its own target and generator. Given a
/// base `seed`, trial `i` uses `seed + i`, so a run is reproducible no matter
/// how the trials are scheduled across threads. Without a seed every trial
/// draws from OS entropy.
pub fn run_auto_trials(
    words: &WordList,
    num_trials: u32,
    seed: Option<u64>,
) -> Result<TrialStats, GameError> {
    let guess_counts = (0..num_trials)
        .into_par_iter()
        .map(|trial| -> Result<u32, GameError> {
            let mut rng = match seed {
                Some(base) => StdRng::seed_from_u64(base.wrapping_add(trial as u64)),
                None => StdRng::from_entropy(),
            };
            let target = choose_target(words, &mut rng)?;
            let summary = play_game_with_guesser(&target, RandomGuesser::with_rng(words, rng))?;
            Ok(summary.num_guesses())
        })
        .collect::<Result<Vec<u32>, GameError>>()?;
    Ok(TrialStats::from_guess_counts(&guess_counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_from_no_counts_are_zeroed() {
        let stats = TrialStats::from_guess_counts(&[]);

        assert_eq!(stats.num_trials, 0);
        assert_eq!(stats.mean_guesses, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.best, 0);
        assert_eq!(stats.worst, 0);
        assert!(stats.games_per_guess_count.is_empty());
    }

    #[test]
    fn stats_summarize_guess_counts() {
        let stats = TrialStats::from_guess_counts(&[2, 4, 4, 2, 3]);

        assert_eq!(stats.num_trials, 5);
        assert_eq!(stats.mean_guesses, 3.0);
        assert_eq!(stats.best, 2);
        assert_eq!(stats.worst, 4);
        assert_eq!(
            stats.games_per_guess_count,
            BTreeMap::from([(2, 2), (3, 1), (4, 2)])
        );
        // Population variance of [2, 4, 4, 2, 3] is 0.8.
        assert!((stats.std_dev - 0.8f64.sqrt()).abs() < 1e-9);
    }
}
