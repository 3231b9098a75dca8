use super::prelude::*;

#[derive(Debug, Clone)]
pub struct CategoryInput {
    /// `None` creates a new category, `Some` edits an existing one.
    pub id: Option<Id>,
    pub name: String,
    pub description: Option<String>,
    /// Hex color, with or without a leading '#'.
    pub color: String,
    pub icon: Option<String>,
    pub parent_id: Option<Id>,
}

/// Creates or updates a category. Returns the stored category and
/// whether it was newly created.
pub fn create_or_edit_category<R: CategoryRepo>(
    repo: &R,
    input: CategoryInput,
) -> Result<(Category, bool)> {
    let CategoryInput {
        id,
        name,
        description,
        color,
        icon,
        parent_id,
    } = input;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::CategoryName);
    }
    let color = parse_color_param(&color)?;
    let icon = icon
        .filter(|icon| !icon.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ICON.to_string());

    // The hierarchy has two levels, so the parent must itself be
    // a top-level category.
    if let Some(parent_id) = &parent_id {
        let parent = repo.get_category(parent_id)?;
        if parent.parent_id.is_some() {
            return Err(Error::ParentCategory);
        }
    }

    match id {
        Some(id) => {
            let mut category = repo.get_category(&id)?;
            category.name = name;
            category.description = description;
            category.color = color;
            category.icon = icon;
            category.parent_id = parent_id;
            repo.update_category(&category)?;
            Ok((category, false))
        }
        None => {
            let category = Category {
                id: Id::new(),
                name,
                description,
                color,
                icon,
                parent_id,
                created_at: Timestamp::now(),
                deleted: false,
            };
            log::info!("Creating new category '{}'", category.name);
            repo.create_category(&category)?;
            Ok((category, true))
        }
    }
}

/// Accepts "#RGB", "#RRGGBB" and the same without the hash sign;
/// stores the bare hex digits.
fn parse_color_param(color: &str) -> Result<String> {
    let hex = color.trim().trim_start_matches('#');
    if (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_lowercase())
    } else {
        Err(Error::Color)
    }
}
