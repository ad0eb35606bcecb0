use super::model::Model;

/// A complete parsed structure: an ordered sequence of models.
///
/// A structure holds at least one model once any atom record has been
/// processed. It is built once by [`super::builder::StructureBuilder`] and
/// is read-only afterwards; all geometry queries borrow it immutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    models: Vec<Model>,
}

impl Structure {
    pub(crate) fn push_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub(crate) fn last_model_mut(&mut self) -> Option<&mut Model> {
        self.models.last_mut()
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Zero-based model access. Callers exposing 1-based selection to users
    /// validate the index before converting.
    pub fn model(&self, index: usize) -> Option<&Model> {
        self.models.get(index)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// True when no coordinate record was ever processed.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
