use std::collections::{HashMap, HashSet};

use super::*;

impl IssueRepo for DbReadOnly<'_> {
    fn create_issue(&self, _issue: &Issue) -> Result<()> {
        unreachable!();
    }
    fn update_issue(&self, _issue: &Issue) -> Result<()> {
        unreachable!();
    }

    fn get_issue(&self, id: &Id) -> Result<Issue> {
        get_issue(&mut self.conn.borrow_mut(), id)
    }
    fn query_issues(
        &self,
        params: &IssueQueryParams,
        pagination: &Pagination,
    ) -> Result<Vec<EnrichedIssue>> {
        query_issues(&mut self.conn.borrow_mut(), params, pagination)
    }
    fn query_issues_in_bbox(&self, bbox: &MapBbox, limit: u64) -> Result<Vec<Issue>> {
        query_issues_in_bbox(&mut self.conn.borrow_mut(), bbox, limit)
    }
    fn count_issues(&self) -> Result<usize> {
        count_issues(&mut self.conn.borrow_mut())
    }
}

impl IssueRepo for DbReadWrite<'_> {
    fn create_issue(&self, issue: &Issue) -> Result<()> {
        create_issue(&mut self.conn.borrow_mut(), issue)
    }
    fn update_issue(&self, issue: &Issue) -> Result<()> {
        update_issue(&mut self.conn.borrow_mut(), issue)
    }

    fn get_issue(&self, id: &Id) -> Result<Issue> {
        get_issue(&mut self.conn.borrow_mut(), id)
    }
    fn query_issues(
        &self,
        params: &IssueQueryParams,
        pagination: &Pagination,
    ) -> Result<Vec<EnrichedIssue>> {
        query_issues(&mut self.conn.borrow_mut(), params, pagination)
    }
    fn query_issues_in_bbox(&self, bbox: &MapBbox, limit: u64) -> Result<Vec<Issue>> {
        query_issues_in_bbox(&mut self.conn.borrow_mut(), bbox, limit)
    }
    fn count_issues(&self) -> Result<usize> {
        count_issues(&mut self.conn.borrow_mut())
    }
}

impl IssueRepo for DbConnection<'_> {
    fn create_issue(&self, issue: &Issue) -> Result<()> {
        create_issue(&mut self.conn.borrow_mut(), issue)
    }
    fn update_issue(&self, issue: &Issue) -> Result<()> {
        update_issue(&mut self.conn.borrow_mut(), issue)
    }

    fn get_issue(&self, id: &Id) -> Result<Issue> {
        get_issue(&mut self.conn.borrow_mut(), id)
    }
    fn query_issues(
        &self,
        params: &IssueQueryParams,
        pagination: &Pagination,
    ) -> Result<Vec<EnrichedIssue>> {
        query_issues(&mut self.conn.borrow_mut(), params, pagination)
    }
    fn query_issues_in_bbox(&self, bbox: &MapBbox, limit: u64) -> Result<Vec<Issue>> {
        query_issues_in_bbox(&mut self.conn.borrow_mut(), bbox, limit)
    }
    fn count_issues(&self) -> Result<usize> {
        count_issues(&mut self.conn.borrow_mut())
    }
}

fn create_issue(conn: &mut SqliteConnection, issue: &Issue) -> Result<()> {
    let model = models::NewIssue::from(issue);
    diesel::insert_into(schema::issues::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_issue(conn: &mut SqliteConnection, issue: &Issue) -> Result<()> {
    use schema::issues::dsl;
    let model = models::NewIssue::from(issue);
    if diesel::update(dsl::issues.filter(dsl::id.eq(model.id)))
        .set(&model)
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_issue(conn: &mut SqliteConnection, id: &Id) -> Result<Issue> {
    use schema::issues::dsl;
    let entity = dsl::issues
        .filter(dsl::id.eq(id.as_str()))
        .filter(dsl::status.ne(IssueStatus::Deleted as i16))
        .first::<models::IssueEntity>(conn)
        .map_err(from_diesel_err)?;
    load_issue(entity)
}

fn query_issues(
    conn: &mut SqliteConnection,
    params: &IssueQueryParams,
    pagination: &Pagination,
) -> Result<Vec<EnrichedIssue>> {
    use schema::issues::dsl;
    let mut query = dsl::issues
        .filter(dsl::status.ne(IssueStatus::Deleted as i16))
        .into_boxed();
    if !params.category_ids.is_empty() {
        query = query.filter(dsl::category_id.eq_any(params.category_ids.iter().map(Id::as_str)));
    }
    if let Some(status) = params.status {
        query = query.filter(dsl::status.eq(status as i16));
    }
    if let Some(city_id) = &params.city_id {
        query = query.filter(dsl::city_id.eq(city_id.as_str()));
    }
    if let Some((start, end)) = params.created_between {
        query = query
            .filter(dsl::created_at.ge(start.as_millis()))
            .filter(dsl::created_at.lt(end.as_millis()));
    }
    query = match params.sort {
        SortOrder::CreatedAt => query.order_by(dsl::created_at.desc()),
        SortOrder::MostViewed => query.order_by(dsl::view_count.desc()),
        SortOrder::MostVoted => query.order_by(dsl::vote_count.desc()),
        SortOrder::MostDiscussed => query.order_by(dsl::comment_count.desc()),
    };
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    let issues = query
        .load::<models::IssueEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_issue)
        .collect::<Result<Vec<_>>>()?;
    enrich_issues(conn, issues)
}

// One batched query per referenced table instead of one per issue. The
// listing order of the issues is preserved.
fn enrich_issues(conn: &mut SqliteConnection, issues: Vec<Issue>) -> Result<Vec<EnrichedIssue>> {
    let issue_ids: Vec<&str> = issues.iter().map(|issue| issue.id.as_str()).collect();
    let user_ids: HashSet<&str> = issues.iter().map(|issue| issue.user_id.as_str()).collect();
    let category_ids: HashSet<&str> = issues
        .iter()
        .map(|issue| issue.category_id.as_str())
        .collect();
    let city_ids: HashSet<&str> = issues.iter().map(|issue| issue.city_id.as_str()).collect();

    let users: HashMap<Id, User> = {
        use schema::users::dsl;
        dsl::users
            .filter(dsl::id.eq_any(user_ids))
            .load::<models::UserEntity>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(|entity| load_user(entity).map(|user| (user.id.clone(), user)))
            .collect::<Result<_>>()?
    };
    let categories: HashMap<Id, Category> = {
        use schema::categories::dsl;
        dsl::categories
            .filter(dsl::id.eq_any(category_ids))
            .load::<models::CategoryEntity>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(Category::from)
            .map(|category| (category.id.clone(), category))
            .collect()
    };
    let cities: HashMap<Id, City> = {
        use schema::cities::dsl;
        dsl::cities
            .filter(dsl::id.eq_any(city_ids))
            .load::<models::CityEntity>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(City::from)
            .map(|city| (city.id.clone(), city))
            .collect()
    };
    let mut images: HashMap<Id, Vec<Image>> = HashMap::new();
    {
        use schema::images::dsl;
        for image in dsl::images
            .filter(dsl::issue_id.eq_any(issue_ids))
            .load::<models::ImageEntity>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .map(Image::from)
        {
            if let Some(issue_id) = &image.issue_id {
                images.entry(issue_id.clone()).or_default().push(image);
            }
        }
    }

    issues
        .into_iter()
        .map(|issue| {
            let user = users
                .get(&issue.user_id)
                .cloned()
                .ok_or_else(|| referential_integrity_violation("user", &issue.user_id))?;
            let category = categories
                .get(&issue.category_id)
                .cloned()
                .ok_or_else(|| referential_integrity_violation("category", &issue.category_id))?;
            let city = cities
                .get(&issue.city_id)
                .cloned()
                .ok_or_else(|| referential_integrity_violation("city", &issue.city_id))?;
            let images = images.get(&issue.id).cloned().unwrap_or_default();
            Ok(EnrichedIssue {
                issue,
                user,
                city,
                category,
                images,
            })
        })
        .collect()
}

fn query_issues_in_bbox(
    conn: &mut SqliteConnection,
    bbox: &MapBbox,
    limit: u64,
) -> Result<Vec<Issue>> {
    use schema::issues::dsl;
    let MapBbox {
        southwest,
        northeast,
    } = bbox;
    dsl::issues
        .filter(dsl::status.ne(IssueStatus::Deleted as i16))
        .filter(dsl::lat.gt(southwest.lat.to_deg()))
        .filter(dsl::lat.lt(northeast.lat.to_deg()))
        .filter(dsl::lng.gt(southwest.lng.to_deg()))
        .filter(dsl::lng.lt(northeast.lng.to_deg()))
        .limit(limit as i64)
        .load::<models::IssueEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_issue)
        .collect()
}

fn count_issues(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::issues::dsl;
    Ok(dsl::issues
        .filter(dsl::status.ne(IssueStatus::Deleted as i16))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
