pub const FIRST_NAMES: [&str; 24] = [
    "Phil", "Pat", "Peyton", "Chamique", "Jamal", "Tamika", "Terry", "Teresa", "Peerless", "Semeka", "Al",
    "Kristin", "Tori", "Misty", "Marcus", "Kellie", "Leonard", "LaShonda", "Trey", "Byrnae", "Mercedes", "Kyra",
    "Jonathan", "Niya",
];

pub const LAST_NAMES: [&str; 24] = [
    "Fulmer", "Summitt", "Manning", "Holdsclaw", "Lewis", "Catchings", "Fair", "Geter", "Price", "Randall",
    "Wilson", "Clement", "Noel", "Greene", "Nash", "Jolly", "Little", "Stevens", "Teague", "Laxton", "Hamilton",
    "Elzy", "Brown", "Butts",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    First(usize),
    Paired(usize),
    Numbered(u64),
}

/**
 * Infinite person-name sequence.
 *
 * Yields every first name, then every `First_Last` pair in skewed order, then
 * `Person0`, `Person1`, ... without end. There is no reset: a cursor only moves
 * forward, and a new process starts from the beginning with a new cursor.
 */
#[derive(Debug, Clone)]
pub struct NameCursor {
    phase: Phase,
}

impl NameCursor {
    pub fn new() -> NameCursor {
        NameCursor {
            phase: Phase::First(0),
        }
    }

    fn pair(&self, k: usize) -> String {
        let (f, l) = skew_index(k, FIRST_NAMES.len());
        format!("{}_{}", FIRST_NAMES[f], LAST_NAMES[l])
    }
}

impl Default for NameCursor {
    fn default() -> Self {
        NameCursor::new()
    }
}

impl Iterator for NameCursor {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let n = FIRST_NAMES.len();
        let (name, next) = match self.phase {
            Phase::First(i) if i < n => (FIRST_NAMES[i].to_string(), Phase::First(i + 1)),
            Phase::First(_) => (self.pair(0), Phase::Paired(1)),
            Phase::Paired(k) if k < n * n => (self.pair(k), Phase::Paired(k + 1)),
            Phase::Paired(_) => ("Person0".to_string(), Phase::Numbered(1)),
            Phase::Numbered(k) => (format!("Person{}", k), Phase::Numbered(k + 1)),
        };
        self.phase = next;
        Some(name)
    }
}

/**
 * The `k`-th index pair of the skewed product of two lists of length `n`.
 *
 * Walks `(f, (f + offset) % n)` for `f` in `0..n`, once per offset, so every pair
 * appears exactly once in `n * n` steps. For "ABC" and "123" the order is
 * A1 B2 C3 A2 B3 C1 A3 B1 C2.
 */
pub fn skew_index(k: usize, n: usize) -> (usize, usize) {
    let (offset, f) = (k / n, k % n);
    (f, (f + offset) % n)
}
