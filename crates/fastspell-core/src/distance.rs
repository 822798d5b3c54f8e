// Levenshtein edit distance

/// Edit distance between two strings with unit-cost insertion, deletion
/// and substitution, measured in Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// [`levenshtein`] over pre-split character slices.
///
/// Fills the full `(a.len() + 1) x (b.len() + 1)` table row by row.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let cols = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * cols];

    for i in 0..=a.len() {
        table[i * cols] = i;
    }
    for (j, cell) in table.iter_mut().enumerate().take(cols) {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = table[(i - 1) * cols + j] + 1;
            let insertion = table[i * cols + j - 1] + 1;
            let replace = table[(i - 1) * cols + j - 1] + substitution;
            table[i * cols + j] = deletion.min(insertion).min(replace);
        }
    }

    table[a.len() * cols + b.len()]
}
