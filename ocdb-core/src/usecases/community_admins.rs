use super::prelude::*;

/// The community admins responsible for a city.
pub fn community_admins_of_city<R: UserRepo>(repo: &R, city_id: &Id) -> Result<Vec<User>> {
    Ok(repo
        .all_users()?
        .into_iter()
        .filter(|user| user.is_community_admin() && user.city_id.as_ref() == Some(city_id))
        .collect())
}
