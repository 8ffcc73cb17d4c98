use indexmap::IndexMap;

use crate::descriptor::OperationDescriptor;

/// Category for operations without tags.
pub const DEFAULT_CATEGORY: &str = "general";

/// A category of operations, holding indices into the input list.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    /// Raw category name (first tag, or `general`), not yet sanitized.
    pub name: String,
    pub operation_indices: Vec<usize>,
}

/// Partition operations by their first tag, insertion-ordered by first
/// occurrence. Operation order is preserved within each category.
pub fn group_by_category(ops: &[OperationDescriptor]) -> Vec<CategoryGroup> {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();

    for (i, op) in ops.iter().enumerate() {
        let category = op
            .tags
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();
        groups.entry(category).or_default().push(i);
    }

    groups
        .into_iter()
        .map(|(name, operation_indices)| CategoryGroup { name, operation_indices })
        .collect()
}
