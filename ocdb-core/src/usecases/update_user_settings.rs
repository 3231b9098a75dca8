use super::prelude::*;

/// Profile settings as submitted by the settings form. Field values
/// replace the stored ones, so a `None` clears the field; only the
/// avatar image is kept when no new one was uploaded.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city_id: Option<Id>,
    pub locale: Option<String>,
    pub website: Option<String>,
    pub about: Option<String>,
    /// Replaces the avatar when present.
    pub image_id: Option<Id>,
    /// The two password entries of the form. The password is only
    /// changed when both are present, non-blank and equal.
    pub password_entries: Option<(String, String)>,
}

pub fn update_user_settings<R: UserRepo>(
    repo: &R,
    user_id: &Id,
    update: SettingsUpdate,
) -> Result<User> {
    let SettingsUpdate {
        first_name,
        last_name,
        city_id,
        locale,
        website,
        about,
        image_id,
        password_entries,
    } = update;

    let mut user = repo.get_user(user_id)?;
    user.first_name = first_name;
    user.last_name = last_name;
    user.city_id = city_id;
    user.website = website;
    user.about = about;
    if let Some(locale) = locale {
        user.locale = locale;
    }
    if image_id.is_some() {
        user.image_id = image_id;
    }
    if let Some((first, second)) = password_entries {
        if !first.trim().is_empty() && first == second {
            user.password = Some(first.parse::<Password>()?);
        }
    }
    repo.update_user(&user)?;
    Ok(user)
}
