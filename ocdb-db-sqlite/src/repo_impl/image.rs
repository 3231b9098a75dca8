use super::*;

impl ImageRepo for DbReadOnly<'_> {
    fn create_image(&self, _image: &Image) -> Result<()> {
        unreachable!();
    }
    fn attach_images_to_issue(&self, _image_ids: &[Id], _issue_id: &Id) -> Result<usize> {
        unreachable!();
    }

    fn load_images_of_issue(&self, issue_id: &Id) -> Result<Vec<Image>> {
        load_images_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

impl ImageRepo for DbReadWrite<'_> {
    fn create_image(&self, image: &Image) -> Result<()> {
        create_image(&mut self.conn.borrow_mut(), image)
    }
    fn attach_images_to_issue(&self, image_ids: &[Id], issue_id: &Id) -> Result<usize> {
        attach_images_to_issue(&mut self.conn.borrow_mut(), image_ids, issue_id)
    }

    fn load_images_of_issue(&self, issue_id: &Id) -> Result<Vec<Image>> {
        load_images_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

impl ImageRepo for DbConnection<'_> {
    fn create_image(&self, image: &Image) -> Result<()> {
        create_image(&mut self.conn.borrow_mut(), image)
    }
    fn attach_images_to_issue(&self, image_ids: &[Id], issue_id: &Id) -> Result<usize> {
        attach_images_to_issue(&mut self.conn.borrow_mut(), image_ids, issue_id)
    }

    fn load_images_of_issue(&self, issue_id: &Id) -> Result<Vec<Image>> {
        load_images_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

fn create_image(conn: &mut SqliteConnection, image: &Image) -> Result<()> {
    let model = models::NewImage::from(image);
    diesel::insert_into(schema::images::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn attach_images_to_issue(
    conn: &mut SqliteConnection,
    image_ids: &[Id],
    issue_id: &Id,
) -> Result<usize> {
    use schema::images::dsl;
    diesel::update(dsl::images.filter(dsl::id.eq_any(image_ids.iter().map(Id::as_str))))
        .set(dsl::issue_id.eq(issue_id.as_str()))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn load_images_of_issue(conn: &mut SqliteConnection, issue_id: &Id) -> Result<Vec<Image>> {
    use schema::images::dsl;
    Ok(dsl::images
        .filter(dsl::issue_id.eq(issue_id.as_str()))
        .order_by(dsl::created_at.asc())
        .load::<models::ImageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
