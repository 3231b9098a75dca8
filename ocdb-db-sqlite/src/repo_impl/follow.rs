use super::*;

impl FollowRepo for DbReadOnly<'_> {
    fn create_issue_follow(&self, _follow: &IssueFollow) -> Result<()> {
        unreachable!();
    }
    fn create_user_follow(&self, _follow: &UserFollow) -> Result<()> {
        unreachable!();
    }

    fn find_issue_follow(&self, user_id: &Id, issue_id: &Id) -> Result<Option<IssueFollow>> {
        find_issue_follow(&mut self.conn.borrow_mut(), user_id, issue_id)
    }
    fn find_user_follow(&self, follower_id: &Id, followed_id: &Id) -> Result<Option<UserFollow>> {
        find_user_follow(&mut self.conn.borrow_mut(), follower_id, followed_id)
    }
    fn follows_of_user(&self, user_id: &Id) -> Result<UserFollows> {
        follows_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl FollowRepo for DbReadWrite<'_> {
    fn create_issue_follow(&self, follow: &IssueFollow) -> Result<()> {
        create_issue_follow(&mut self.conn.borrow_mut(), follow)
    }
    fn create_user_follow(&self, follow: &UserFollow) -> Result<()> {
        create_user_follow(&mut self.conn.borrow_mut(), follow)
    }

    fn find_issue_follow(&self, user_id: &Id, issue_id: &Id) -> Result<Option<IssueFollow>> {
        find_issue_follow(&mut self.conn.borrow_mut(), user_id, issue_id)
    }
    fn find_user_follow(&self, follower_id: &Id, followed_id: &Id) -> Result<Option<UserFollow>> {
        find_user_follow(&mut self.conn.borrow_mut(), follower_id, followed_id)
    }
    fn follows_of_user(&self, user_id: &Id) -> Result<UserFollows> {
        follows_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl FollowRepo for DbConnection<'_> {
    fn create_issue_follow(&self, follow: &IssueFollow) -> Result<()> {
        create_issue_follow(&mut self.conn.borrow_mut(), follow)
    }
    fn create_user_follow(&self, follow: &UserFollow) -> Result<()> {
        create_user_follow(&mut self.conn.borrow_mut(), follow)
    }

    fn find_issue_follow(&self, user_id: &Id, issue_id: &Id) -> Result<Option<IssueFollow>> {
        find_issue_follow(&mut self.conn.borrow_mut(), user_id, issue_id)
    }
    fn find_user_follow(&self, follower_id: &Id, followed_id: &Id) -> Result<Option<UserFollow>> {
        find_user_follow(&mut self.conn.borrow_mut(), follower_id, followed_id)
    }
    fn follows_of_user(&self, user_id: &Id) -> Result<UserFollows> {
        follows_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_issue_follow(conn: &mut SqliteConnection, follow: &IssueFollow) -> Result<()> {
    let model = models::NewIssueFollow::from(follow);
    diesel::insert_into(schema::issue_follows::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn find_issue_follow(
    conn: &mut SqliteConnection,
    user_id: &Id,
    issue_id: &Id,
) -> Result<Option<IssueFollow>> {
    use schema::issue_follows::dsl;
    Ok(dsl::issue_follows
        .filter(dsl::user_id.eq(user_id.as_str()))
        .filter(dsl::issue_id.eq(issue_id.as_str()))
        .first::<models::IssueFollowEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn create_user_follow(conn: &mut SqliteConnection, follow: &UserFollow) -> Result<()> {
    let model = models::NewUserFollow::from(follow);
    diesel::insert_into(schema::user_follows::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn find_user_follow(
    conn: &mut SqliteConnection,
    follower_id: &Id,
    followed_id: &Id,
) -> Result<Option<UserFollow>> {
    use schema::user_follows::dsl;
    Ok(dsl::user_follows
        .filter(dsl::follower_id.eq(follower_id.as_str()))
        .filter(dsl::followed_id.eq(followed_id.as_str()))
        .first::<models::UserFollowEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn follows_of_user(conn: &mut SqliteConnection, user_id: &Id) -> Result<UserFollows> {
    let issues = {
        use schema::issue_follows::dsl;
        dsl::issue_follows
            .filter(dsl::user_id.eq(user_id.as_str()))
            .order_by(dsl::created_at.asc())
            .load::<models::IssueFollowEntity>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(Into::into)
            .collect()
    };
    let users = {
        use schema::user_follows::dsl;
        dsl::user_follows
            .filter(dsl::follower_id.eq(user_id.as_str()))
            .order_by(dsl::created_at.asc())
            .load::<models::UserFollowEntity>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(Into::into)
            .collect()
    };
    Ok(UserFollows { issues, users })
}
