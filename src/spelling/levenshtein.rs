//! Distancia de edición y similitud normalizada

/// Distancia de Levenshtein: inserciones, eliminaciones y sustituciones.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

/// Distancia de Damerau-Levenshtein (alineamiento óptimo): una
/// transposición de dos letras adyacentes cuenta como una sola edición.
///
/// Mantiene tres filas en vez de la matriz completa.
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let width = b_chars.len() + 1;

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut before_prev = vec![0usize; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr = vec![0usize; width];

    for i in 1..=a_chars.len() {
        curr[0] = i;
        for j in 1..width {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            let transposed = i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1];
            if transposed {
                best = best.min(before_prev[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Similitud en [0, 1]: `1 - distancia / longitud_mayor`.
///
/// Dos cadenas vacías son idénticas (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = damerau_levenshtein_distance(a, b);
    1.0 - distance as f64 / longest as f64
}
