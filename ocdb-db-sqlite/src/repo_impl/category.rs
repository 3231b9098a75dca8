use super::*;

impl CategoryRepo for DbReadOnly<'_> {
    fn create_category(&self, _category: &Category) -> Result<()> {
        unreachable!();
    }
    fn update_category(&self, _category: &Category) -> Result<()> {
        unreachable!();
    }

    fn get_category(&self, id: &Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn subcategory_ids(&self, parent_id: &Id) -> Result<Vec<Id>> {
        subcategory_ids(&mut self.conn.borrow_mut(), parent_id)
    }

    fn mark_category_deleted(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }
}

impl CategoryRepo for DbReadWrite<'_> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }
    fn update_category(&self, category: &Category) -> Result<()> {
        update_category(&mut self.conn.borrow_mut(), category)
    }

    fn get_category(&self, id: &Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn subcategory_ids(&self, parent_id: &Id) -> Result<Vec<Id>> {
        subcategory_ids(&mut self.conn.borrow_mut(), parent_id)
    }

    fn mark_category_deleted(&self, id: &Id) -> Result<()> {
        mark_category_deleted(&mut self.conn.borrow_mut(), id)
    }
}

impl CategoryRepo for DbConnection<'_> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }
    fn update_category(&self, category: &Category) -> Result<()> {
        update_category(&mut self.conn.borrow_mut(), category)
    }

    fn get_category(&self, id: &Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn subcategory_ids(&self, parent_id: &Id) -> Result<Vec<Id>> {
        subcategory_ids(&mut self.conn.borrow_mut(), parent_id)
    }

    fn mark_category_deleted(&self, id: &Id) -> Result<()> {
        mark_category_deleted(&mut self.conn.borrow_mut(), id)
    }
}

fn create_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    let model = models::NewCategory::from(category);
    diesel::insert_into(schema::categories::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    use schema::categories::dsl;
    let model = models::NewCategory::from(category);
    if diesel::update(dsl::categories.filter(dsl::id.eq(model.id)))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_category(conn: &mut SqliteConnection, id: &Id) -> Result<Category> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .filter(dsl::id.eq(id.as_str()))
        .filter(dsl::deleted.eq(false))
        .first::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .filter(dsl::deleted.eq(false))
        .load::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn subcategory_ids(conn: &mut SqliteConnection, parent_id: &Id) -> Result<Vec<Id>> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .select(dsl::id)
        .filter(dsl::parent_id.eq(parent_id.as_str()))
        .filter(dsl::deleted.eq(false))
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn mark_category_deleted(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::categories::dsl;
    // Already deleted rows are treated as missing
    if diesel::update(
        dsl::categories
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::deleted.eq(false)),
    )
    .set(dsl::deleted.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
