use super::*;

impl VoteRepo for DbReadOnly<'_> {
    fn create_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn delete_vote(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn find_vote(&self, user_id: &Id, issue_id: &Id) -> Result<Option<Vote>> {
        find_vote(&mut self.conn.borrow_mut(), user_id, issue_id)
    }
    fn count_votes_of_issue(&self, issue_id: &Id) -> Result<usize> {
        count_votes_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

impl VoteRepo for DbReadWrite<'_> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, id: &Id) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), id)
    }

    fn find_vote(&self, user_id: &Id, issue_id: &Id) -> Result<Option<Vote>> {
        find_vote(&mut self.conn.borrow_mut(), user_id, issue_id)
    }
    fn count_votes_of_issue(&self, issue_id: &Id) -> Result<usize> {
        count_votes_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

impl VoteRepo for DbConnection<'_> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn delete_vote(&self, id: &Id) -> Result<()> {
        delete_vote(&mut self.conn.borrow_mut(), id)
    }

    fn find_vote(&self, user_id: &Id, issue_id: &Id) -> Result<Option<Vote>> {
        find_vote(&mut self.conn.borrow_mut(), user_id, issue_id)
    }
    fn count_votes_of_issue(&self, issue_id: &Id) -> Result<usize> {
        count_votes_of_issue(&mut self.conn.borrow_mut(), issue_id)
    }
}

fn create_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    let model = models::NewVote::from(vote);
    diesel::insert_into(schema::votes::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn find_vote(conn: &mut SqliteConnection, user_id: &Id, issue_id: &Id) -> Result<Option<Vote>> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .filter(dsl::user_id.eq(user_id.as_str()))
        .filter(dsl::issue_id.eq(issue_id.as_str()))
        .first::<models::VoteEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn delete_vote(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::votes::dsl;
    if diesel::delete(dsl::votes.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn count_votes_of_issue(conn: &mut SqliteConnection, issue_id: &Id) -> Result<usize> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .filter(dsl::issue_id.eq(issue_id.as_str()))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
