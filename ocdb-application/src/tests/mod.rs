
pub mod prelude {

    pub use ocdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct DummyNotifyGW;

    impl ocdb_core::gateways::notify::NotificationGateway for DummyNotifyGW {
        fn user_registered(&self, _: &User) {}
        fn admin_account_created(&self, _: &User, _: &EmailNonce) {}
        fn community_admin_alerted(&self, _: &User, _: &City) {}
        fn city_signup_notified(&self, _: &City) {}
        fn user_reset_password_requested(&self, _: &EmailNonce) {}
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            ocdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                notify: DummyNotifyGW,
            }
        }

        pub fn create_city(&self, name: &str, lat: f64, lng: f64) -> City {
            flows::create_city(
                &self.db_connections,
                usecases::NewCity {
                    name: name.into(),
                    lat,
                    lng,
                    zoom: 13,
                },
            )
            .unwrap()
        }

        pub fn create_category(&self, name: &str, parent_id: Option<&Id>) -> Category {
            let (category, created) = flows::create_or_edit_category(
                &self.db_connections,
                usecases::CategoryInput {
                    id: None,
                    name: name.into(),
                    description: None,
                    color: "178bca".into(),
                    icon: None,
                    parent_id: parent_id.cloned(),
                },
            )
            .unwrap();
            assert!(created);
            category
        }

        pub fn register_user(&self, username: &str, city_id: Option<&Id>) -> User {
            flows::register_user(
                &self.db_connections,
                &self.notify,
                usecases::NewUser {
                    username: username.into(),
                    email: format!("{username}@example.org").parse().unwrap(),
                    password: "secret1".into(),
                    city_id: city_id.cloned(),
                },
            )
            .unwrap()
        }

        pub fn register_active_user(&self, username: &str) -> User {
            let user = self.register_user(username, None);
            let token = user.activation_nonce.to_string();
            flows::activate_user(&self.db_connections, &user.id, &token).unwrap()
        }

        pub fn create_admin(&self, username: &str, role: Role, city_id: Option<&Id>) -> User {
            let (user, _) = flows::create_admin_user(
                &self.db_connections,
                &self.notify,
                usecases::NewAdminUser {
                    username: username.into(),
                    email: format!("{username}@example.org").parse().unwrap(),
                    role,
                    city_id: city_id.cloned(),
                    first_name: None,
                    last_name: None,
                },
            )
            .unwrap();
            user
        }

        pub fn report_issue(
            &self,
            user: &User,
            category: &Category,
            city: &City,
            title: &str,
        ) -> Issue {
            flows::create_issue(
                &self.db_connections,
                usecases::NewIssue {
                    user_id: user.id.clone(),
                    title: title.into(),
                    description: String::new(),
                    category_id: category.id.clone(),
                    city_id: city.id.clone(),
                    lat: 43.8563,
                    lng: 18.4131,
                    image_ids: vec![],
                },
            )
            .unwrap()
        }

        /// A city, a category, a reporter and one issue of theirs.
        pub fn reported_issue(&self) -> (User, Issue) {
            let city = self.create_city("Sarajevo", 43.8563, 18.4131);
            let category = self.create_category("Roads", None);
            let reporter = self.register_active_user("reporter");
            let issue = self.report_issue(&reporter, &category, &city, "Pothole on Ferhadija");
            (reporter, issue)
        }

        pub fn get_issue(&self, id: &Id) -> Issue {
            self.db_connections.shared().unwrap().get_issue(id).unwrap()
        }

        pub fn try_get_user(&self, username: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_username(username)
                .unwrap()
        }
    }
}
