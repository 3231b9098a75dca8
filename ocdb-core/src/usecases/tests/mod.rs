// In-memory repository used by the use case unit tests.

use std::cell::RefCell;

use super::prelude::*;
use ocdb_entities::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

trait ObjectId {
    fn object_id(&self) -> &Id;
}

macro_rules! impl_object_id {
    ($($entity:ty),+) => {
        $(impl ObjectId for $entity {
            fn object_id(&self) -> &Id {
                &self.id
            }
        })+
    };
}

impl_object_id!(
    Category,
    City,
    Comment,
    Image,
    Issue,
    IssueFollow,
    UniqueView,
    User,
    UserFollow,
    Vote
);

fn get<T: Clone + ObjectId>(objects: &[T], id: &Id) -> RepoResult<T> {
    match objects.iter().find(|x| x.object_id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + ObjectId>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.object_id() == e.object_id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + ObjectId>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.object_id() == e.object_id()) {
        objects[pos] = e.clone();
        Ok(())
    } else {
        Err(RepoError::NotFound)
    }
}

fn delete<T: Clone + ObjectId>(objects: &mut Vec<T>, id: &Id) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.object_id() == id) {
        objects.remove(pos);
        Ok(())
    } else {
        Err(RepoError::NotFound)
    }
}

#[derive(Default)]
pub struct MockDb {
    pub categories: RefCell<Vec<Category>>,
    pub cities: RefCell<Vec<City>>,
    pub users: RefCell<Vec<User>>,
    pub issues: RefCell<Vec<Issue>>,
    pub comments: RefCell<Vec<Comment>>,
    pub votes: RefCell<Vec<Vote>>,
    pub issue_follows: RefCell<Vec<IssueFollow>>,
    pub user_follows: RefCell<Vec<UserFollow>>,
    pub unique_views: RefCell<Vec<UniqueView>>,
    pub images: RefCell<Vec<Image>>,
    pub password_resets: RefCell<Vec<PasswordReset>>,
}

/// A user, city and category to hang test issues on.
pub struct IssueFixture {
    pub user: User,
    pub city: City,
    pub category: Category,
}

impl IssueFixture {
    /// A valid open issue wired up to the fixture rows.
    pub fn issue(&self, title: &str) -> Issue {
        Issue::build()
            .title(title)
            .position(43.85, 18.39)
            .user_id(self.user.id.as_str())
            .category_id(self.category.id.as_str())
            .city_id(self.city.id.as_str())
            .finish()
    }
}

impl MockDb {
    pub fn issue_fixture(&self) -> IssueFixture {
        let user = User::build().username("reporter").finish();
        let city = City {
            id: Id::new(),
            name: "Sarajevo".into(),
            center: MapPoint::from_lat_lng_deg(43.8563, 18.4131),
            zoom: 13,
        };
        let category = Category::build().name("Roads").finish();
        self.create_user(&user).unwrap();
        self.create_city(&city).unwrap();
        self.create_category(&category).unwrap();
        IssueFixture {
            user,
            city,
            category,
        }
    }

    pub fn register_active_user(&self, username: &str) -> User {
        self.register_active_admin(username, Role::User)
    }

    pub fn register_active_admin(&self, username: &str, role: Role) -> User {
        let user = User::build()
            .username(username)
            .email(&format!("{username}@example.org"))
            .password("secret1")
            .role(role)
            .active(true)
            .finish();
        self.create_user(&user).unwrap();
        user
    }

    pub fn activate(&self, user_id: &Id) {
        let mut user = self.get_user(user_id).unwrap();
        user.active = true;
        self.update_user(&user).unwrap();
    }

    fn enrich(&self, issue: Issue) -> RepoResult<EnrichedIssue> {
        let user = get(&self.users.borrow(), &issue.user_id)?;
        let city = get(&self.cities.borrow(), &issue.city_id)?;
        let category = get(&self.categories.borrow(), &issue.category_id)?;
        let images = self.load_images_of_issue(&issue.id)?;
        Ok(EnrichedIssue {
            issue,
            user,
            city,
            category,
            images,
        })
    }
}

impl CategoryRepo for MockDb {
    fn create_category(&self, category: &Category) -> RepoResult<()> {
        create(&mut self.categories.borrow_mut(), category.clone())
    }

    fn update_category(&self, category: &Category) -> RepoResult<()> {
        update(&mut self.categories.borrow_mut(), category)
    }

    fn get_category(&self, id: &Id) -> RepoResult<Category> {
        get(&self.categories.borrow(), id).and_then(|c| {
            if c.deleted {
                Err(RepoError::NotFound)
            } else {
                Ok(c)
            }
        })
    }

    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .filter(|c| !c.deleted)
            .cloned()
            .collect())
    }

    fn subcategory_ids(&self, parent_id: &Id) -> RepoResult<Vec<Id>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .filter(|c| !c.deleted && c.parent_id.as_ref() == Some(parent_id))
            .map(|c| c.id.clone())
            .collect())
    }

    fn mark_category_deleted(&self, id: &Id) -> RepoResult<()> {
        let mut category = self.get_category(id)?;
        category.deleted = true;
        update(&mut self.categories.borrow_mut(), &category)
    }
}

impl IssueRepo for MockDb {
    fn create_issue(&self, issue: &Issue) -> RepoResult<()> {
        create(&mut self.issues.borrow_mut(), issue.clone())
    }

    fn update_issue(&self, issue: &Issue) -> RepoResult<()> {
        update(&mut self.issues.borrow_mut(), issue)
    }

    fn get_issue(&self, id: &Id) -> RepoResult<Issue> {
        get(&self.issues.borrow(), id).and_then(|i| {
            if i.is_deleted() {
                Err(RepoError::NotFound)
            } else {
                Ok(i)
            }
        })
    }

    fn query_issues(
        &self,
        params: &IssueQueryParams,
        pagination: &Pagination,
    ) -> RepoResult<Vec<EnrichedIssue>> {
        let mut issues: Vec<_> = self
            .issues
            .borrow()
            .iter()
            .filter(|i| !i.is_deleted())
            .filter(|i| {
                params.category_ids.is_empty() || params.category_ids.contains(&i.category_id)
            })
            .filter(|i| params.status.map_or(true, |status| i.status == status))
            .filter(|i| {
                params
                    .city_id
                    .as_ref()
                    .map_or(true, |city_id| &i.city_id == city_id)
            })
            .filter(|i| {
                params.created_between.map_or(true, |(start, end)| {
                    i.created_at >= start && i.created_at < end
                })
            })
            .cloned()
            .collect();
        match params.sort {
            SortOrder::CreatedAt => issues.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::MostViewed => issues.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
            SortOrder::MostVoted => issues.sort_by(|a, b| b.vote_count.cmp(&a.vote_count)),
            SortOrder::MostDiscussed => {
                issues.sort_by(|a, b| b.comment_count.cmp(&a.comment_count))
            }
        }
        issues
            .into_iter()
            .skip(pagination.offset.unwrap_or(0) as usize)
            .take(pagination.limit.unwrap_or(u64::MAX) as usize)
            .map(|issue| self.enrich(issue))
            .collect()
    }

    fn query_issues_in_bbox(&self, bbox: &MapBbox, limit: u64) -> RepoResult<Vec<Issue>> {
        Ok(self
            .issues
            .borrow()
            .iter()
            .filter(|i| !i.is_deleted() && bbox.contains_point_exclusive(i.position))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    fn count_issues(&self) -> RepoResult<usize> {
        Ok(self
            .issues
            .borrow()
            .iter()
            .filter(|i| !i.is_deleted())
            .count())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment.clone())
    }

    fn load_comments_of_issue(&self, issue_id: &Id) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| &c.issue_id == issue_id)
            .cloned()
            .collect())
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: &Vote) -> RepoResult<()> {
        create(&mut self.votes.borrow_mut(), vote.clone())
    }

    fn find_vote(&self, user_id: &Id, issue_id: &Id) -> RepoResult<Option<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| &v.user_id == user_id && &v.issue_id == issue_id)
            .cloned())
    }

    fn delete_vote(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.votes.borrow_mut(), id)
    }

    fn count_votes_of_issue(&self, issue_id: &Id) -> RepoResult<usize> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| &v.issue_id == issue_id)
            .count())
    }
}

impl FollowRepo for MockDb {
    fn create_issue_follow(&self, follow: &IssueFollow) -> RepoResult<()> {
        create(&mut self.issue_follows.borrow_mut(), follow.clone())
    }

    fn find_issue_follow(&self, user_id: &Id, issue_id: &Id) -> RepoResult<Option<IssueFollow>> {
        Ok(self
            .issue_follows
            .borrow()
            .iter()
            .find(|f| &f.user_id == user_id && &f.issue_id == issue_id)
            .cloned())
    }

    fn create_user_follow(&self, follow: &UserFollow) -> RepoResult<()> {
        create(&mut self.user_follows.borrow_mut(), follow.clone())
    }

    fn find_user_follow(
        &self,
        follower_id: &Id,
        followed_id: &Id,
    ) -> RepoResult<Option<UserFollow>> {
        Ok(self
            .user_follows
            .borrow()
            .iter()
            .find(|f| &f.follower_id == follower_id && &f.followed_id == followed_id)
            .cloned())
    }

    fn follows_of_user(&self, user_id: &Id) -> RepoResult<UserFollows> {
        Ok(UserFollows {
            issues: self
                .issue_follows
                .borrow()
                .iter()
                .filter(|f| &f.user_id == user_id)
                .cloned()
                .collect(),
            users: self
                .user_follows
                .borrow()
                .iter()
                .filter(|f| &f.follower_id == user_id)
                .cloned()
                .collect(),
        })
    }
}

impl UniqueViewRepo for MockDb {
    fn create_unique_view(&self, view: &UniqueView) -> RepoResult<()> {
        create(&mut self.unique_views.borrow_mut(), view.clone())
    }

    fn find_unique_view(&self, issue_id: &Id, session: &str) -> RepoResult<Option<UniqueView>> {
        Ok(self
            .unique_views
            .borrow()
            .iter()
            .find(|v| &v.issue_id == issue_id && v.session == session)
            .cloned())
    }

    fn update_unique_view(&self, view: &UniqueView) -> RepoResult<()> {
        update(&mut self.unique_views.borrow_mut(), view)
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }

    fn get_user(&self, id: &Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl CityRepo for MockDb {
    fn create_city(&self, city: &City) -> RepoResult<()> {
        create(&mut self.cities.borrow_mut(), city.clone())
    }

    fn get_city(&self, id: &Id) -> RepoResult<City> {
        get(&self.cities.borrow(), id)
    }

    fn all_cities(&self) -> RepoResult<Vec<City>> {
        Ok(self.cities.borrow().clone())
    }
}

impl ImageRepo for MockDb {
    fn create_image(&self, image: &Image) -> RepoResult<()> {
        create(&mut self.images.borrow_mut(), image.clone())
    }

    fn attach_images_to_issue(&self, image_ids: &[Id], issue_id: &Id) -> RepoResult<usize> {
        let mut attached = 0;
        for image in self.images.borrow_mut().iter_mut() {
            if image_ids.contains(&image.id) {
                image.issue_id = Some(issue_id.clone());
                attached += 1;
            }
        }
        Ok(attached)
    }

    fn load_images_of_issue(&self, issue_id: &Id) -> RepoResult<Vec<Image>> {
        Ok(self
            .images
            .borrow()
            .iter()
            .filter(|i| i.issue_id.as_ref() == Some(issue_id))
            .cloned()
            .collect())
    }
}

impl PasswordResetRepo for MockDb {
    fn replace_password_reset(&self, reset: PasswordReset) -> RepoResult<EmailNonce> {
        let mut resets = self.password_resets.borrow_mut();
        resets.retain(|r| r.email_nonce.email != reset.email_nonce.email);
        let email_nonce = reset.email_nonce.clone();
        resets.push(reset);
        Ok(email_nonce)
    }

    fn consume_password_reset(&self, email_nonce: &EmailNonce) -> RepoResult<PasswordReset> {
        let mut resets = self.password_resets.borrow_mut();
        if let Some(pos) = resets.iter().position(|r| &r.email_nonce == email_nonce) {
            Ok(resets.remove(pos))
        } else {
            Err(RepoError::NotFound)
        }
    }
}
