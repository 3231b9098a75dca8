use std::{collections::HashMap, io::Read};

use serde::Deserialize;
use time::format_description::well_known::Rfc3339;

use super::*;
use crate::error::BError;

/// Bulk import format for bootstrapping an instance.
///
/// Users reference their home city and issues reference their user,
/// category and city by name; ids are assigned during the import.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub cities: Vec<SeedCity>,
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub issues: Vec<SeedIssue>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCity {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_zoom() -> u8 {
    13
}

#[derive(Debug, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<SeedSubcategory>,
}

#[derive(Debug, Deserialize)]
pub struct SeedSubcategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `"user"`, `"community_admin"` or `"ssg_admin"`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedIssue {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub user: String,
    pub category: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub status: Option<String>,
    /// RFC 3339, defaults to the import time.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub session_view_count: u64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub share_count: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub cities: usize,
    pub categories: usize,
    pub users: usize,
    pub issues: usize,
}

pub fn seed_from_reader(
    connections: &sqlite::Connections,
    reader: impl Read,
) -> Result<SeedSummary> {
    let file = serde_json::from_reader(reader)?;
    seed(connections, file)
}

/// Imports a whole seed file in a single transaction; either all of it
/// or nothing of it ends up in the database.
pub fn seed(connections: &sqlite::Connections, file: SeedFile) -> Result<SeedSummary> {
    let SeedFile {
        cities,
        categories,
        users,
        issues,
    } = file;

    // Everything that can fail without the database is checked before
    // the transaction starts.
    let users = users
        .into_iter()
        .map(parse_user)
        .collect::<Result<Vec<_>>>()?;
    let issues = issues
        .into_iter()
        .map(parse_issue)
        .collect::<Result<Vec<_>>>()?;

    let summary = SeedSummary {
        cities: cities.len(),
        categories: categories
            .iter()
            .map(|category| 1 + category.subcategories.len())
            .sum(),
        users: users.len(),
        issues: issues.len(),
    };

    connections.exclusive()?.transaction(|conn| {
        let mut city_ids = HashMap::new();
        for city in cities {
            let created = usecases::create_city(
                conn,
                usecases::NewCity {
                    name: city.name.clone(),
                    lat: city.lat,
                    lng: city.lng,
                    zoom: city.zoom,
                },
            )?;
            city_ids.insert(city.name, created.id);
        }

        let mut category_ids = HashMap::new();
        for category in categories {
            let (parent, _) = usecases::create_or_edit_category(
                conn,
                usecases::CategoryInput {
                    id: None,
                    name: category.name.clone(),
                    description: category.description,
                    color: category.color,
                    icon: category.icon,
                    parent_id: None,
                },
            )?;
            for sub in category.subcategories {
                let (child, _) = usecases::create_or_edit_category(
                    conn,
                    usecases::CategoryInput {
                        id: None,
                        name: sub.name.clone(),
                        description: sub.description,
                        color: sub.color,
                        icon: sub.icon,
                        parent_id: Some(parent.id.clone()),
                    },
                )?;
                category_ids.insert(sub.name, child.id);
            }
            category_ids.insert(category.name, parent.id);
        }

        let mut user_ids = HashMap::new();
        for user in users {
            let ParsedUser {
                username,
                email,
                password,
                role,
                city,
            } = user;
            let city_id = city
                .as_deref()
                .map(|name| resolve(&city_ids, name, usecases::Error::CityName))
                .transpose()?;
            let mut created = usecases::register_user(
                conn,
                usecases::NewUser {
                    username: username.clone(),
                    email,
                    password,
                    city_id,
                },
            )?;
            // Seeded accounts skip the mail activation.
            created.active = true;
            created.role = role;
            conn.update_user(&created)?;
            user_ids.insert(username, created.id);
        }

        for issue in issues {
            let ParsedIssue {
                title,
                description,
                user,
                category,
                city,
                lat,
                lng,
                status,
                created_at,
                view_count,
                session_view_count,
                vote_count,
                comment_count,
                share_count,
            } = issue;
            let user_id = resolve(&user_ids, &user, usecases::Error::UserDoesNotExist)?;
            let category_id = resolve(&category_ids, &category, usecases::Error::CategoryName)?;
            let city_id = resolve(&city_ids, &city, usecases::Error::CityName)?;
            usecases::create_issue_seed(
                conn,
                usecases::IssueSeed {
                    new_issue: usecases::NewIssue {
                        user_id,
                        title,
                        description,
                        category_id,
                        city_id,
                        lat,
                        lng,
                        image_ids: vec![],
                    },
                    status,
                    created_at: created_at.unwrap_or_else(Timestamp::now),
                    view_count,
                    session_view_count,
                    vote_count,
                    comment_count,
                    share_count,
                },
            )?;
        }

        info!(
            "Seeded {} cities, {} categories, {} users and {} issues",
            summary.cities, summary.categories, summary.users, summary.issues
        );
        Ok::<_, usecases::Error>(())
    })?;

    Ok(summary)
}

fn resolve(
    ids: &HashMap<String, Id>,
    name: &str,
    err: usecases::Error,
) -> std::result::Result<Id, usecases::Error> {
    ids.get(name).cloned().ok_or_else(|| {
        log::warn!("The seed file references the unknown name '{}'", name);
        err
    })
}

struct ParsedUser {
    username: String,
    email: EmailAddress,
    password: String,
    role: Role,
    city: Option<String>,
}

fn parse_user(user: SeedUser) -> Result<ParsedUser> {
    let SeedUser {
        username,
        email,
        password,
        role,
        city,
    } = user;
    let email = email.parse::<EmailAddress>()?;
    let role = match role.as_deref() {
        None => Role::User,
        Some(name) => name
            .parse()
            .map_err(|_| BError::Internal(format!("Invalid role '{name}'")))?,
    };
    Ok(ParsedUser {
        username,
        email,
        password,
        role,
        city,
    })
}

struct ParsedIssue {
    title: String,
    description: String,
    user: String,
    category: String,
    city: String,
    lat: f64,
    lng: f64,
    status: IssueStatus,
    created_at: Option<Timestamp>,
    view_count: u64,
    session_view_count: u64,
    vote_count: u64,
    comment_count: u64,
    share_count: u64,
}

fn parse_issue(issue: SeedIssue) -> Result<ParsedIssue> {
    let SeedIssue {
        title,
        description,
        user,
        category,
        city,
        lat,
        lng,
        status,
        created_at,
        view_count,
        session_view_count,
        vote_count,
        comment_count,
        share_count,
    } = issue;
    let status = match status.as_deref() {
        None => IssueStatus::default(),
        Some(name) => name.parse().map_err(|_| usecases::Error::Status)?,
    };
    let created_at = created_at
        .map(|raw| {
            time::OffsetDateTime::parse(&raw, &Rfc3339)
                .map(Timestamp::from)
                .map_err(|err| BError::Internal(format!("Invalid created_at '{raw}': {err}")))
        })
        .transpose()?;
    Ok(ParsedIssue {
        title,
        description,
        user,
        category,
        city,
        lat,
        lng,
        status,
        created_at,
        view_count,
        session_view_count,
        vote_count,
        comment_count,
        share_count,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    const SEED: &str = r##"{
        "cities": [
            { "name": "Sarajevo", "lat": 43.8563, "lng": 18.4131 },
            { "name": "Mostar", "lat": 43.3438, "lng": 17.8078, "zoom": 14 }
        ],
        "categories": [
            {
                "name": "Roads", "color": "#ff6600",
                "subcategories": [ { "name": "Potholes", "color": "cc5200" } ]
            },
            { "name": "Lighting", "color": "ffcc00" }
        ],
        "users": [
            { "username": "ana", "email": "ana@example.org", "password": "seeded1", "city": "Sarajevo" },
            { "username": "mirza", "email": "mirza@example.org", "password": "seeded1", "role": "community_admin", "city": "Mostar" }
        ],
        "issues": [
            {
                "title": "Pothole on Ferhadija", "user": "ana", "category": "Potholes",
                "city": "Sarajevo", "lat": 43.859, "lng": 18.423,
                "status": "in_progress", "created_at": "2026-03-01T08:30:00Z",
                "view_count": 120, "vote_count": 4
            },
            {
                "title": "Broken street light", "user": "mirza", "category": "Lighting",
                "city": "Mostar", "lat": 43.34, "lng": 17.81
            }
        ]
    }"##;

    #[test]
    fn import_a_seed_file() {
        let fixture = BackendFixture::new();
        let summary = flows::seed_from_reader(&fixture.db_connections, SEED.as_bytes()).unwrap();
        assert_eq!(2, summary.cities);
        assert_eq!(3, summary.categories);
        assert_eq!(2, summary.users);
        assert_eq!(2, summary.issues);

        // Seeded accounts are active and can log in right away
        let credentials = usecases::Credentials {
            username: "ana",
            password: "seeded1",
        };
        assert!(flows::login_user(&fixture.db_connections, &credentials).is_ok());
        assert_eq!(
            Role::CommunityAdmin,
            fixture.try_get_user("mirza").unwrap().role
        );

        // Imported status and counters survive
        let listed = flows::query_issues(
            &fixture.db_connections,
            usecases::IssueQuery::default(),
            &Pagination::default(),
        )
        .unwrap();
        assert_eq!(2, listed.len());
        let pothole = listed
            .iter()
            .find(|enriched| enriched.issue.title == "Pothole on Ferhadija")
            .unwrap();
        assert_eq!(IssueStatus::InProgress, pothole.issue.status);
        assert_eq!(120, pothole.issue.view_count);
        assert_eq!(4, pothole.issue.vote_count);
        assert_eq!("Potholes", pothole.category.name);
        assert_eq!("Sarajevo", pothole.city.name);
    }

    #[test]
    fn nothing_is_imported_when_a_reference_is_broken() {
        let fixture = BackendFixture::new();
        let broken = r#"{
            "cities": [ { "name": "Sarajevo", "lat": 43.8563, "lng": 18.4131 } ],
            "categories": [ { "name": "Roads", "color": "ff6600" } ],
            "users": [ { "username": "ana", "email": "ana@example.org", "password": "seeded1" } ],
            "issues": [
                { "title": "Pothole", "user": "ana", "category": "Roads", "city": "Tuzla", "lat": 44.54, "lng": 18.67 }
            ]
        }"#;
        assert!(flows::seed_from_reader(&fixture.db_connections, broken.as_bytes()).is_err());

        let stats = flows::gather_stats(&fixture.db_connections).unwrap();
        assert_eq!(0, stats.city_count);
        assert_eq!(0, stats.user_count);
        assert_eq!(0, stats.issue_count);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let fixture = BackendFixture::new();
        let broken = r#"{
            "users": [
                { "username": "ana", "email": "ana@example.org", "password": "seeded1", "role": "mayor" }
            ]
        }"#;
        assert!(flows::seed_from_reader(&fixture.db_connections, broken.as_bytes()).is_err());
    }
}
