use time::{Date, Month};

use super::prelude::*;

/// Listings show at most this many issues unless the caller asks for
/// a different page size.
pub const DEFAULT_PAGE_SIZE: u64 = 9;

/// Caller-facing filter set for issue listings.
///
/// All filters are optional and combined with AND. The category filter
/// matches the category itself plus all of its subcategories.
#[derive(Debug, Default, Clone)]
pub struct IssueQuery {
    pub category: Option<Id>,
    pub status: Option<IssueStatus>,
    pub city: Option<Id>,
    pub created_within: Option<DatePeriod>,
    pub sort: SortOrder,
}

/// A calendar period anchored at the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePeriod {
    Today,
    ThisWeek,
    ThisMonth,
}

impl DatePeriod {
    /// Recognizes the filter values "today", "week" and "month".
    pub fn parse_param(param: &str) -> Option<Self> {
        match param {
            "today" => Some(Self::Today),
            "week" => Some(Self::ThisWeek),
            "month" => Some(Self::ThisMonth),
            _ => None,
        }
    }

    /// The enclosing calendar period of `now` as a half-open interval
    /// `[start, end)`. Days begin at midnight UTC and weeks on Monday.
    pub fn bounds(self, now: Timestamp) -> (Timestamp, Timestamp) {
        let today = time::OffsetDateTime::from(now).date();
        let (start, end) = match self {
            Self::Today => (today, today.next_day().expect("next calendar day")),
            Self::ThisWeek => {
                let monday = today
                    - time::Duration::days(i64::from(today.weekday().number_days_from_monday()));
                (monday, monday + time::Duration::days(7))
            }
            Self::ThisMonth => {
                let first = today.replace_day(1).expect("first day of month");
                let next_first = if first.month() == Month::December {
                    Date::from_calendar_date(first.year() + 1, Month::January, 1)
                } else {
                    Date::from_calendar_date(first.year(), first.month().next(), 1)
                }
                .expect("first day of next month");
                (first, next_first)
            }
        };
        (
            start.midnight().assume_utc().into(),
            end.midnight().assume_utc().into(),
        )
    }
}

/// Recognizes the "featured" sort values "viewed", "votes" and
/// "discussed". Anything else keeps the default order (newest first).
pub fn parse_featured_param(param: &str) -> SortOrder {
    match param {
        "viewed" => SortOrder::MostViewed,
        "votes" => SortOrder::MostVoted,
        "discussed" => SortOrder::MostDiscussed,
        _ => SortOrder::CreatedAt,
    }
}

pub fn query_issues<R>(
    repo: &R,
    query: IssueQuery,
    pagination: &Pagination,
) -> Result<Vec<EnrichedIssue>>
where
    R: CategoryRepo + IssueRepo,
{
    let IssueQuery {
        category,
        status,
        city,
        created_within,
        sort,
    } = query;

    // The filter covers the whole category subtree.
    let mut category_ids = Vec::new();
    if let Some(category) = category {
        category_ids = repo.subcategory_ids(&category)?;
        category_ids.insert(0, category);
    }

    let params = IssueQueryParams {
        category_ids,
        status,
        city_id: city,
        created_between: created_within.map(|period| period.bounds(Timestamp::now())),
        sort,
    };
    let pagination = Pagination {
        offset: pagination.offset.or(Some(0)),
        limit: pagination.limit.or(Some(DEFAULT_PAGE_SIZE)),
    };
    Ok(repo.query_issues(&params, &pagination)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ocdb_entities::builders::*;
    use time::macros::datetime;

    #[test]
    fn parse_filter_params() {
        assert_eq!(Some(DatePeriod::Today), DatePeriod::parse_param("today"));
        assert_eq!(Some(DatePeriod::ThisWeek), DatePeriod::parse_param("week"));
        assert_eq!(Some(DatePeriod::ThisMonth), DatePeriod::parse_param("month"));
        assert_eq!(None, DatePeriod::parse_param("yesterday"));
        assert_eq!(SortOrder::MostViewed, parse_featured_param("viewed"));
        assert_eq!(SortOrder::MostVoted, parse_featured_param("votes"));
        assert_eq!(SortOrder::MostDiscussed, parse_featured_param("discussed"));
        assert_eq!(SortOrder::CreatedAt, parse_featured_param(""));
        assert_eq!(SortOrder::CreatedAt, parse_featured_param("anything"));
    }

    #[test]
    fn bounds_of_day_week_and_month() {
        // A Wednesday
        let now = datetime!(2026-08-19 10:30 UTC).into();

        let (start, end) = DatePeriod::Today.bounds(now);
        assert_eq!(Timestamp::from(datetime!(2026-08-19 00:00 UTC)), start);
        assert_eq!(Timestamp::from(datetime!(2026-08-20 00:00 UTC)), end);

        let (start, end) = DatePeriod::ThisWeek.bounds(now);
        assert_eq!(Timestamp::from(datetime!(2026-08-17 00:00 UTC)), start);
        assert_eq!(Timestamp::from(datetime!(2026-08-24 00:00 UTC)), end);

        let (start, end) = DatePeriod::ThisMonth.bounds(now);
        assert_eq!(Timestamp::from(datetime!(2026-08-01 00:00 UTC)), start);
        assert_eq!(Timestamp::from(datetime!(2026-09-01 00:00 UTC)), end);
    }

    #[test]
    fn month_bounds_roll_over_the_year() {
        let now = datetime!(2026-12-31 23:59 UTC).into();
        let (start, end) = DatePeriod::ThisMonth.bounds(now);
        assert_eq!(Timestamp::from(datetime!(2026-12-01 00:00 UTC)), start);
        assert_eq!(Timestamp::from(datetime!(2027-01-01 00:00 UTC)), end);
    }

    #[test]
    fn week_bounds_on_a_monday_span_the_full_week() {
        let now = datetime!(2026-08-24 00:00 UTC).into();
        let (start, end) = DatePeriod::ThisWeek.bounds(now);
        assert_eq!(Timestamp::from(datetime!(2026-08-24 00:00 UTC)), start);
        assert_eq!(Timestamp::from(datetime!(2026-08-31 00:00 UTC)), end);
    }

    #[test]
    fn category_filter_includes_subcategories() {
        let db = MockDb::default();
        let fixture = db.issue_fixture();
        let sub = Category::build()
            .name("Potholes")
            .parent_id(fixture.category.id.as_str())
            .finish();
        db.create_category(&sub).unwrap();
        let other = Category::build().name("Parks").finish();
        db.create_category(&other).unwrap();

        let in_parent = fixture.issue("In parent");
        db.create_issue(&in_parent).unwrap();
        let mut in_sub = fixture.issue("In subcategory");
        in_sub.category_id = sub.id.clone();
        db.create_issue(&in_sub).unwrap();
        let mut elsewhere = fixture.issue("Elsewhere");
        elsewhere.category_id = other.id.clone();
        db.create_issue(&elsewhere).unwrap();

        let query = IssueQuery {
            category: Some(fixture.category.id.clone()),
            ..Default::default()
        };
        let found = query_issues(&db, query, &Pagination::default()).unwrap();
        let mut titles: Vec<_> = found.iter().map(|e| e.issue.title.clone()).collect();
        titles.sort();
        assert_eq!(vec!["In parent", "In subcategory"], titles);
    }

    #[test]
    fn default_order_is_newest_first_with_page_size_nine() {
        let db = MockDb::default();
        let fixture = db.issue_fixture();
        for i in 0..12_i64 {
            let mut issue = fixture.issue(&format!("Issue {i}"));
            issue.created_at = Timestamp::from_secs(1_000 + i);
            db.create_issue(&issue).unwrap();
        }

        let found = query_issues(&db, IssueQuery::default(), &Pagination::default()).unwrap();
        assert_eq!(DEFAULT_PAGE_SIZE as usize, found.len());
        assert_eq!("Issue 11", found[0].issue.title);
        assert_eq!("Issue 3", found[8].issue.title);

        let second_page = Pagination {
            offset: Some(DEFAULT_PAGE_SIZE),
            limit: None,
        };
        let found = query_issues(&db, IssueQuery::default(), &second_page).unwrap();
        assert_eq!(3, found.len());
        assert_eq!("Issue 2", found[0].issue.title);
    }

    #[test]
    fn sort_by_votes() {
        let db = MockDb::default();
        let fixture = db.issue_fixture();
        for (title, votes) in [("few", 1), ("many", 7), ("none", 0)] {
            let mut issue = fixture.issue(title);
            issue.vote_count = votes;
            db.create_issue(&issue).unwrap();
        }
        let query = IssueQuery {
            sort: SortOrder::MostVoted,
            ..Default::default()
        };
        let found = query_issues(&db, query, &Pagination::default()).unwrap();
        let titles: Vec<_> = found.iter().map(|e| e.issue.title.as_str()).collect();
        assert_eq!(vec!["many", "few", "none"], titles);
    }

    #[test]
    fn date_filter_is_half_open() {
        let db = MockDb::default();
        let fixture = db.issue_fixture();
        let (start, end) = DatePeriod::Today.bounds(Timestamp::now());

        let mut at_start = fixture.issue("at start");
        at_start.created_at = start;
        db.create_issue(&at_start).unwrap();
        let mut at_end = fixture.issue("at end");
        at_end.created_at = end;
        db.create_issue(&at_end).unwrap();
        let mut before = fixture.issue("before");
        before.created_at = start - time::Duration::milliseconds(1);
        db.create_issue(&before).unwrap();

        let query = IssueQuery {
            created_within: Some(DatePeriod::Today),
            ..Default::default()
        };
        let found = query_issues(&db, query, &Pagination::default()).unwrap();
        let titles: Vec<_> = found.iter().map(|e| e.issue.title.as_str()).collect();
        assert_eq!(vec!["at start"], titles);
    }

    #[test]
    fn deleted_issues_never_show_up() {
        let db = MockDb::default();
        let fixture = db.issue_fixture();
        let mut gone = fixture.issue("gone");
        gone.status = IssueStatus::Deleted;
        db.issues.borrow_mut().push(gone);
        db.create_issue(&fixture.issue("visible")).unwrap();

        let found = query_issues(&db, IssueQuery::default(), &Pagination::default()).unwrap();
        assert_eq!(1, found.len());
        assert_eq!("visible", found[0].issue.title);
    }
}
