use crate::model::{Annotation, GoCategory};

/// Keep only the annotations whose `goAspect` matches the category `code`.
///
/// An unrecognised code is not an error: the list comes back unchanged.
/// Annotations without an aspect are dropped whenever a real category is
/// applied.
pub fn filter_by_category(annotations: Vec<Annotation>, code: &str) -> Vec<Annotation> {
    match GoCategory::from_code(code) {
        Some(category) => annotations
            .into_iter()
            .filter(|annotation| annotation.is_aspect(category.aspect()))
            .collect(),
        None => annotations,
    }
}
