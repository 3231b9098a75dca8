use super::*;

impl UniqueViewRepo for DbReadOnly<'_> {
    fn create_unique_view(&self, _view: &UniqueView) -> Result<()> {
        unreachable!();
    }
    fn update_unique_view(&self, _view: &UniqueView) -> Result<()> {
        unreachable!();
    }

    fn find_unique_view(&self, issue_id: &Id, session: &str) -> Result<Option<UniqueView>> {
        find_unique_view(&mut self.conn.borrow_mut(), issue_id, session)
    }
}

impl UniqueViewRepo for DbReadWrite<'_> {
    fn create_unique_view(&self, view: &UniqueView) -> Result<()> {
        create_unique_view(&mut self.conn.borrow_mut(), view)
    }
    fn update_unique_view(&self, view: &UniqueView) -> Result<()> {
        update_unique_view(&mut self.conn.borrow_mut(), view)
    }

    fn find_unique_view(&self, issue_id: &Id, session: &str) -> Result<Option<UniqueView>> {
        find_unique_view(&mut self.conn.borrow_mut(), issue_id, session)
    }
}

impl UniqueViewRepo for DbConnection<'_> {
    fn create_unique_view(&self, view: &UniqueView) -> Result<()> {
        create_unique_view(&mut self.conn.borrow_mut(), view)
    }
    fn update_unique_view(&self, view: &UniqueView) -> Result<()> {
        update_unique_view(&mut self.conn.borrow_mut(), view)
    }

    fn find_unique_view(&self, issue_id: &Id, session: &str) -> Result<Option<UniqueView>> {
        find_unique_view(&mut self.conn.borrow_mut(), issue_id, session)
    }
}

fn create_unique_view(conn: &mut SqliteConnection, view: &UniqueView) -> Result<()> {
    let model = models::NewUniqueView::from(view);
    diesel::insert_into(schema::unique_views::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn find_unique_view(
    conn: &mut SqliteConnection,
    issue_id: &Id,
    session: &str,
) -> Result<Option<UniqueView>> {
    use schema::unique_views::dsl;
    Ok(dsl::unique_views
        .filter(dsl::issue_id.eq(issue_id.as_str()))
        .filter(dsl::session.eq(session))
        .first::<models::UniqueViewEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn update_unique_view(conn: &mut SqliteConnection, view: &UniqueView) -> Result<()> {
    use schema::unique_views::dsl;
    let model = models::NewUniqueView::from(view);
    if diesel::update(dsl::unique_views.filter(dsl::id.eq(model.id)))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
