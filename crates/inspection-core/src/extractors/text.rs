//! Text helpers for form values: emptiness, sentinels, lists, accent folding

use inspection_types::FormScalar;

/// Value of a yes/no select that counts as yes
pub const AFFIRMATIVE_SENTINEL: &str = "si";

/// Drop empty text, pass everything else through
pub fn null_if_empty(value: Option<&FormScalar>) -> Option<FormScalar> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// True only for the exact `"si"` sentinel
pub fn is_affirmative(value: Option<&FormScalar>) -> bool {
    value.and_then(FormScalar::as_text) == Some(AFFIRMATIVE_SENTINEL)
}

/// Split a comma-separated selection into trimmed, non-empty items
pub fn split_list(value: Option<&FormScalar>) -> Vec<String> {
    value
        .and_then(FormScalar::as_text)
        .map(|text| {
            text.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Strip diacritics from Latin letters (`Física` -> `Fisica`).
/// Combining marks from already-decomposed input are dropped.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_char)
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_if_empty() {
        assert_eq!(null_if_empty(Some(&"".into())), None);
        assert_eq!(null_if_empty(None), None);
        assert_eq!(null_if_empty(Some(&"Ana".into())), Some("Ana".into()));
        assert_eq!(
            null_if_empty(Some(&FormScalar::Bool(false))),
            Some(FormScalar::Bool(false))
        );
    }

    #[test]
    fn test_is_affirmative_is_exact() {
        assert!(is_affirmative(Some(&"si".into())));
        assert!(!is_affirmative(Some(&"Si".into())));
        assert!(!is_affirmative(Some(&"sí".into())));
        assert!(!is_affirmative(Some(&"no".into())));
        assert!(!is_affirmative(Some(&FormScalar::Bool(true))));
        assert!(!is_affirmative(None));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(Some(&"wood, metal".into())), vec!["wood", "metal"]);
        assert_eq!(
            split_list(Some(&" malla ,, alambre , ".into())),
            vec!["malla", "alambre"]
        );
        assert!(split_list(Some(&"".into())).is_empty());
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn test_fold_diacritics() {
        assert_eq!(fold_diacritics("Persona Física"), "Persona Fisica");
        assert_eq!(fold_diacritics("JURÍDICA"), "JURIDICA");
        assert_eq!(fold_diacritics("Año"), "Ano");
        // decomposed i + combining acute accent
        assert_eq!(fold_diacritics("Fi\u{0301}sica"), "Fisica");
    }
}
