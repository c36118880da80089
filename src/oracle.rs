//! Shake for an answer
//!
//! The magic eight ball: every shake picks one of a fixed set of answers.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Answers given when no custom list is supplied
pub const DEFAULT_ANSWERS: [&str; 4] = ["yes", "no", "If you're lucky", "some day"];

#[derive(Debug, Clone)]
pub struct Oracle {
    answers: Vec<String>,
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new(DEFAULT_ANSWERS.iter().map(|s| s.to_string()).collect())
    }
}

impl Oracle {
    /// Oracle over a custom answer list; an empty list falls back to the defaults
    pub fn new(answers: Vec<String>) -> Self {
        if answers.is_empty() {
            log::warn!("Empty answer list, using defaults");
            return Self::default();
        }
        Self { answers }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Pick an answer uniformly at random
    pub fn shake<R: Rng>(&self, rng: &mut R) -> &str {
        self.answers
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ANSWERS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_answers_come_from_list() {
        let oracle = Oracle::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let answer = oracle.shake(&mut rng);
            assert!(DEFAULT_ANSWERS.contains(&answer), "unexpected {answer}");
        }
    }

    #[test]
    fn test_every_answer_shows_up() {
        let oracle = Oracle::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let answer = oracle.shake(&mut rng);
            let i = DEFAULT_ANSWERS.iter().position(|a| *a == answer).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_empty_list_falls_back() {
        let oracle = Oracle::new(Vec::new());
        assert_eq!(oracle.answers().len(), DEFAULT_ANSWERS.len());
    }

    #[test]
    fn test_custom_answers() {
        let oracle = Oracle::new(vec!["maybe".to_string()]);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(oracle.shake(&mut rng), "maybe");
    }
}
