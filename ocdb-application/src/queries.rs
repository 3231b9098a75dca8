//! Read-only flows. Everything here runs on a shared connection and
//! never writes.

use super::*;

pub fn query_issues(
    connections: &sqlite::Connections,
    query: usecases::IssueQuery,
    pagination: &Pagination,
) -> Result<Vec<EnrichedIssue>> {
    Ok(usecases::query_issues(
        &connections.shared()?,
        query,
        pagination,
    )?)
}

pub fn query_issues_in_bbox(
    connections: &sqlite::Connections,
    bbox: &MapBbox,
    limit: u64,
) -> Result<Vec<Issue>> {
    Ok(usecases::query_issues_in_bbox(
        &connections.shared()?,
        bbox,
        limit,
    )?)
}

pub fn load_comments_of_issue(
    connections: &sqlite::Connections,
    issue_id: &Id,
) -> Result<Vec<Comment>> {
    Ok(connections.shared()?.load_comments_of_issue(issue_id)?)
}

pub fn follows_of_user(connections: &sqlite::Connections, user_id: &Id) -> Result<UserFollows> {
    Ok(usecases::follows_of_user(&connections.shared()?, user_id)?)
}

pub fn nested_categories(
    connections: &sqlite::Connections,
) -> Result<Vec<usecases::CategoryNode>> {
    Ok(usecases::nested_categories(&connections.shared()?)?)
}

pub fn all_cities(connections: &sqlite::Connections) -> Result<Vec<City>> {
    Ok(connections.shared()?.all_cities()?)
}

pub fn user_map_view(
    connections: &sqlite::Connections,
    user_id: &Id,
    defaults: &usecases::MapDefaults,
) -> Result<usecases::MapView> {
    Ok(usecases::user_map_view(
        &connections.shared()?,
        user_id,
        defaults,
    )?)
}

pub fn gather_stats(connections: &sqlite::Connections) -> Result<usecases::Stats> {
    Ok(usecases::gather_stats(&connections.shared()?)?)
}
