//! Win probabilities between dice.

use super::Die;

const CORNER_LABEL: &str = "User v PC >";

/// Square matrix where cell `(i, j)` is the chance that die `i` rolls a
/// strictly higher face than die `j`.
///
/// The diagonal uses the same cross product as every other cell (a die
/// against an identical copy of itself), so it is generally not 0.5.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMatrix {
    wins: Vec<Vec<f64>>,
    ties: Vec<Vec<f64>>,
}

impl ProbabilityMatrix {
    pub fn compute(dice: &[Die]) -> Self {
        let wins = dice
            .iter()
            .map(|a| dice.iter().map(|b| fraction(a, b, |x, y| x > y)).collect())
            .collect();
        let ties = dice
            .iter()
            .map(|a| dice.iter().map(|b| fraction(a, b, |x, y| x == y)).collect())
            .collect();
        Self { wins, ties }
    }

    /// Number of dice on each side
    pub fn size(&self) -> usize {
        self.wins.len()
    }

    /// P(die `i` beats die `j`)
    pub fn win_probability(&self, i: usize, j: usize) -> f64 {
        self.wins[i][j]
    }

    /// P(die `i` and die `j` roll the same value)
    pub fn tie_probability(&self, i: usize, j: usize) -> f64 {
        self.ties[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.wins
    }
}

fn fraction(a: &Die, b: &Die, pred: impl Fn(i64, i64) -> bool) -> f64 {
    let hits = a
        .faces()
        .iter()
        .flat_map(|&x| b.faces().iter().map(move |&y| (x, y)))
        .filter(|&(x, y)| pred(x, y))
        .count();
    let total = a.face_count() * b.face_count();
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// Help screen: a grid with the user's die per row and the computer's die
/// per column. Diagonal cells are starred.
pub fn render_table(matrix: &ProbabilityMatrix, labels: &[String]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(matrix.size() + 1);

    let mut header = vec![CORNER_LABEL.to_string()];
    header.extend(labels.iter().cloned());
    rows.push(header);

    for (i, probs) in matrix.rows().iter().enumerate() {
        let mut row = vec![labels.get(i).cloned().unwrap_or_default()];
        row.extend(probs.iter().enumerate().map(|(j, p)| {
            if i == j {
                format!("*{:.4}*", p)
            } else {
                format!("{:.4}", p)
            }
        }));
        rows.push(row);
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str("\n--- Win Probability Table ---\n");
    out.push_str(
        "This table shows the probability of the User's die (rows) winning against the PC's die (columns).\n",
    );
    out.push_str("* Diagonal values show probability of a die winning against an identical one.\n");
    out.push_str(&rule('-'));
    out.push('\n');
    for (r, row) in rows.iter().enumerate() {
        out.push('|');
        for (c, w) in widths.iter().enumerate() {
            let cell = row.get(c).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} |", cell, width = w));
        }
        out.push('\n');
        out.push_str(&rule(if r == 0 { '=' } else { '-' }));
        out.push('\n');
    }
    out
}
