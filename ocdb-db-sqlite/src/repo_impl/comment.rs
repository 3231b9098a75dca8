use super::*;

impl CommentRepo for DbReadOnly<'_> {
    fn create_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }

    fn load_comments_of_issue(&self, issue_id: &Id) -> Result<Vec<Comment>> {
        load_comments_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

impl CommentRepo for DbReadWrite<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }

    fn load_comments_of_issue(&self, issue_id: &Id) -> Result<Vec<Comment>> {
        load_comments_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

impl CommentRepo for DbConnection<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }

    fn load_comments_of_issue(&self, issue_id: &Id) -> Result<Vec<Comment>> {
        load_comments_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    let model = models::NewComment::from(comment);
    diesel::insert_into(schema::comments::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_comments_of_issue(conn: &mut SqliteConnection, issue_id: &Id) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::issue_id.eq(issue_id.as_str()))
        .order_by(dsl::created_at.asc())
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
