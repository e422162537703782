use crate::core::error::PaletteError;

/// How many times each picked stop is repeated, darkest first.
const REPEATS: [usize; 4] = [3, 3, 3, 3];

/// Builds the dark-to-light legend stops for a palette.
///
/// The palette is read reversed (step 12 first) and the two darkest and two
/// lightest entries are each repeated three times.
pub fn color_scales<T: Clone>(palette: &[T]) -> Result<Vec<T>, PaletteError> {
    if palette.len() < 2 {
        return Err(PaletteError::PaletteTooShort { len: palette.len() });
    }

    let reversed: Vec<&T> = palette.iter().rev().collect();
    let last = reversed.len() - 1;
    let indices = [0, 1, last - 1, last];

    Ok(REPEATS
        .iter()
        .zip(indices)
        .flat_map(|(&count, index)| std::iter::repeat(reversed[index]).take(count).cloned())
        .collect())
}
