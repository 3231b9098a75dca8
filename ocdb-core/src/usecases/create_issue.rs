use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewIssue {
    pub user_id: Id,
    pub title: String,
    pub description: String,
    pub category_id: Id,
    pub city_id: Id,
    pub lat: f64,
    pub lng: f64,
    /// Images uploaded ahead of time that belong to this issue.
    pub image_ids: Vec<Id>,
}

/// Reports a new issue. The referenced category and city must exist;
/// previously uploaded images are attached to the fresh issue.
pub fn create_issue<R>(repo: &R, new_issue: NewIssue) -> Result<Issue>
where
    R: IssueRepo + CategoryRepo + CityRepo + ImageRepo,
{
    let NewIssue {
        user_id,
        title,
        description,
        category_id,
        city_id,
        lat,
        lng,
        image_ids,
    } = new_issue;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(Error::Title);
    }
    let position = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::Position)?;
    let category = repo.get_category(&category_id)?;
    let city = repo.get_city(&city_id)?;

    let issue = Issue {
        id: Id::new(),
        title,
        description,
        position,
        status: IssueStatus::Open,
        view_count: 0,
        session_view_count: 0,
        vote_count: 0,
        comment_count: 0,
        share_count: 0,
        user_id,
        category_id: category.id,
        city_id: city.id,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new issue '{}'", issue.title);
    repo.create_issue(&issue)?;
    if !image_ids.is_empty() {
        repo.attach_images_to_issue(&image_ids, &issue.id)?;
    }
    Ok(issue)
}

/// An issue imported with its history, e.g. from a data dump.
#[derive(Debug, Clone)]
pub struct IssueSeed {
    pub new_issue: NewIssue,
    pub status: IssueStatus,
    pub created_at: Timestamp,
    pub view_count: u64,
    pub session_view_count: u64,
    pub vote_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
}

/// Like [`create_issue`], but preserves the imported status, counters
/// and creation time instead of starting from scratch.
pub fn create_issue_seed<R>(repo: &R, seed: IssueSeed) -> Result<Issue>
where
    R: IssueRepo + CategoryRepo + CityRepo + ImageRepo,
{
    let IssueSeed {
        new_issue,
        status,
        created_at,
        view_count,
        session_view_count,
        vote_count,
        comment_count,
        share_count,
    } = seed;
    let mut issue = create_issue(repo, new_issue)?;
    issue.status = status;
    issue.created_at = created_at;
    issue.view_count = view_count;
    issue.session_view_count = session_view_count;
    issue.vote_count = vote_count;
    issue.comment_count = comment_count;
    issue.share_count = share_count;
    repo.update_issue(&issue)?;
    Ok(issue)
}
