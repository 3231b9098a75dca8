use super::prelude::*;

/// Issues located strictly inside the bounding box, e.g. for rendering
/// map markers. Issues exactly on the boundary are excluded.
pub fn query_issues_in_bbox<R: IssueRepo>(
    repo: &R,
    bbox: &MapBbox,
    limit: u64,
) -> Result<Vec<Issue>> {
    if !bbox.is_valid() {
        return Err(Error::Bbox);
    }
    Ok(repo.query_issues_in_bbox(bbox, limit)?)
}
