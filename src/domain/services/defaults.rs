/// Categories every new user starts with.
pub const DEFAULT_CATEGORIES: [&str; 11] = [
    "Comida",
    "Transporte",
    "Entretenimiento",
    "Servicios",
    "Vivienda",
    "Salud",
    "Educación",
    "Ropa",
    "Regalos",
    "Viajes",
    "Ahorro",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_categories_are_distinct() {
        let unique: HashSet<_> = DEFAULT_CATEGORIES.iter().collect();
        assert_eq!(unique.len(), DEFAULT_CATEGORIES.len());
        assert!(DEFAULT_CATEGORIES.contains(&"Educación"), "Accented name missing");
        assert!(DEFAULT_CATEGORIES.iter().all(|c| !c.trim().is_empty()));
    }
}
