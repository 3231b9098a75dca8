use super::prelude::*;

/// Entity counts for monitoring and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub issue_count: usize,
    pub user_count: usize,
    pub city_count: usize,
    pub category_count: usize,
}

pub fn gather_stats<R>(repo: &R) -> Result<Stats>
where
    R: IssueRepo + UserRepo + CityRepo + CategoryRepo,
{
    Ok(Stats {
        issue_count: repo.count_issues()?,
        user_count: repo.count_users()?,
        city_count: repo.all_cities()?.len(),
        category_count: repo.all_categories()?.len(),
    })
}
