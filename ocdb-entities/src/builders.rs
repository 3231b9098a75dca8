pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{category_builder::*, issue_builder::*, user_builder::*};

pub mod issue_builder {

    use super::*;
    use crate::{geo::*, id::*, issue::*, time::*};

    #[derive(Debug)]
    pub struct IssueBuild {
        issue: Issue,
    }

    impl IssueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.issue.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.issue.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.issue.description = desc.into();
            self
        }
        pub fn position(mut self, lat: f64, lng: f64) -> Self {
            self.issue.position = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn status(mut self, status: IssueStatus) -> Self {
            self.issue.status = status;
            self
        }
        pub fn user_id(mut self, id: &str) -> Self {
            self.issue.user_id = id.into();
            self
        }
        pub fn category_id(mut self, id: &str) -> Self {
            self.issue.category_id = id.into();
            self
        }
        pub fn city_id(mut self, id: &str) -> Self {
            self.issue.city_id = id.into();
            self
        }
        pub fn vote_count(mut self, count: u64) -> Self {
            self.issue.vote_count = count;
            self
        }
        pub fn view_count(mut self, count: u64) -> Self {
            self.issue.view_count = count;
            self
        }
        pub fn comment_count(mut self, count: u64) -> Self {
            self.issue.comment_count = count;
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.issue.created_at = at;
            self
        }
        pub fn finish(self) -> Issue {
            self.issue
        }
    }

    impl Builder for Issue {
        type Build = IssueBuild;
        fn build() -> Self::Build {
            IssueBuild {
                issue: Issue {
                    id: Id::new(),
                    title: "A pothole".into(),
                    description: String::new(),
                    position: MapPoint::default(),
                    status: Default::default(),
                    view_count: 0,
                    session_view_count: 0,
                    vote_count: 0,
                    comment_count: 0,
                    share_count: 0,
                    user_id: Id::default(),
                    category_id: Id::default(),
                    city_id: Id::default(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, nonce::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn password(mut self, plain: &str) -> Self {
            self.user.password = Some(plain.parse().unwrap());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn active(mut self, active: bool) -> Self {
            self.user.active = active;
            self
        }
        pub fn city_id(mut self, id: &str) -> Self {
            self.user.city_id = Some(id.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "citizen".into(),
                    email: EmailAddress::new_unchecked("citizen@example.org".into()),
                    password: None,
                    federated: None,
                    role: Role::User,
                    active: true,
                    city_id: None,
                    first_name: None,
                    last_name: None,
                    website: None,
                    about: None,
                    locale: DEFAULT_LOCALE.into(),
                    image_id: None,
                    activation_nonce: Nonce::new(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod category_builder {

    use super::*;
    use crate::{category::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CategoryBuild {
        category: Category,
    }

    impl CategoryBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.category.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.category.name = name.into();
            self
        }
        pub fn parent_id(mut self, id: &str) -> Self {
            self.category.parent_id = Some(id.into());
            self
        }
        pub fn deleted(mut self, deleted: bool) -> Self {
            self.category.deleted = deleted;
            self
        }
        pub fn finish(self) -> Category {
            self.category
        }
    }

    impl Builder for Category {
        type Build = CategoryBuild;
        fn build() -> Self::Build {
            CategoryBuild {
                category: Category {
                    id: Id::new(),
                    name: "Utilities".into(),
                    description: None,
                    color: "ffffff".into(),
                    icon: DEFAULT_ICON.into(),
                    parent_id: None,
                    created_at: Timestamp::now(),
                    deleted: false,
                },
            }
        }
    }
}
