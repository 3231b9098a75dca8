use super::prelude::*;

/// Ids of all direct subcategories of the given category.
pub fn subcategory_ids<R: CategoryRepo>(repo: &R, parent_id: &Id) -> Result<Vec<Id>> {
    Ok(repo.subcategory_ids(parent_id)?)
}

/// A top-level category with its direct subcategories.
#[derive(Debug, Clone)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<Category>,
}

/// All (non-deleted) categories grouped into their two-level hierarchy,
/// preserving the repository order within each level.
pub fn nested_categories<R: CategoryRepo>(repo: &R) -> Result<Vec<CategoryNode>> {
    let all = repo.all_categories()?;
    let (roots, children): (Vec<_>, Vec<_>) =
        all.into_iter().partition(|c| c.parent_id.is_none());
    Ok(roots
        .into_iter()
        .map(|category| {
            let children = children
                .iter()
                .filter(|c| c.parent_id.as_ref() == Some(&category.id))
                .cloned()
                .collect();
            CategoryNode { category, children }
        })
        .collect())
}
