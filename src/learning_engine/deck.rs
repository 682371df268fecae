use rand::Rng;

/// Fisher-Yates shuffle driven by the caller's RNG.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Number of levels needed to cover `word_count` words.
pub fn total_levels(word_count: usize, per_level: usize) -> usize {
    if per_level == 0 {
        return 0;
    }
    word_count.div_ceil(per_level)
}

/// The words of one flashcard level, shuffled and dealt one at a time.
pub struct LevelDeck {
    words: Vec<String>,
    cursor: usize,
}

impl LevelDeck {
    /// Take level `level` (1-based) from `vocabulary` and shuffle it with `rng`.
    ///
    /// Level 0 or a level past the end of the vocabulary gives an empty deck.
    pub fn new_shuffled<R: Rng, S: AsRef<str>>(
        rng: &mut R,
        vocabulary: &[S],
        level: usize,
        per_level: usize,
    ) -> Self {
        let mut words: Vec<String> = if level == 0 {
            Vec::new()
        } else {
            vocabulary
                .iter()
                .skip((level - 1) * per_level)
                .take(per_level)
                .map(|w| w.as_ref().to_string())
                .collect()
        };
        shuffle(rng, &mut words);
        LevelDeck { words, cursor: 0 }
    }

    /// Next word, or `None` once the level is exhausted.
    pub fn deal(&mut self) -> Option<&str> {
        let word = self.words.get(self.cursor)?;
        self.cursor += 1;
        Some(word.as_str())
    }

    /// Words not yet dealt.
    pub fn remaining(&self) -> usize {
        self.words.len() - self.cursor
    }

    /// Words in the level, dealt or not.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the level has no words (level 0 or past the vocabulary).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words already dealt this level.
    pub fn dealt(&self) -> &[String] {
        &self.words[..self.cursor]
    }
}
