use super::prelude::*;

/// Marks a category as deleted. The row is kept so that existing issues
/// retain their classification, but the category disappears from all
/// listings and filters.
pub fn delete_category<R: CategoryRepo>(repo: &R, id: &Id) -> Result<()> {
    let category = repo.get_category(id)?;
    log::info!("Deleting category '{}'", category.name);
    repo.mark_category_deleted(&category.id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ocdb_entities::builders::*;

    #[test]
    fn deleted_categories_vanish_from_queries() {
        let db = MockDb::default();
        let category = Category::build().finish();
        db.create_category(&category).unwrap();
        assert!(delete_category(&db, &category.id).is_ok());
        assert!(matches!(
            db.get_category(&category.id),
            Err(RepoError::NotFound)
        ));
        assert!(db.all_categories().unwrap().is_empty());
        // The row itself is kept
        assert_eq!(1, db.categories.borrow().len());
    }

    #[test]
    fn delete_twice_fails() {
        let db = MockDb::default();
        let category = Category::build().finish();
        db.create_category(&category).unwrap();
        assert!(delete_category(&db, &category.id).is_ok());
        assert!(delete_category(&db, &category.id).is_err());
    }
}
