use super::*;

pub fn delete_category(connections: &sqlite::Connections, id: &Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_category(conn, id).map_err(|err| {
            log::warn!("Failed to delete category '{}': {}", id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn issues_keep_their_classification() {
        let fixture = BackendFixture::new();
        let (_, issue) = fixture.reported_issue();
        let category_id = issue.category_id.clone();

        flows::delete_category(&fixture.db_connections, &category_id).unwrap();
        assert!(flows::nested_categories(&fixture.db_connections)
            .unwrap()
            .is_empty());

        // The issue still references the deleted category
        assert_eq!(category_id, fixture.get_issue(&issue.id).category_id);
    }

    #[test]
    fn deleting_twice_fails() {
        let fixture = BackendFixture::new();
        let roads = fixture.create_category("Roads", None);
        assert!(flows::delete_category(&fixture.db_connections, &roads.id).is_ok());
        assert!(flows::delete_category(&fixture.db_connections, &roads.id).is_err());
    }
}
