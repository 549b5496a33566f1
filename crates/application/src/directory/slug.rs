use crate::AppResult;
use kasbyar_core::entities::businesses;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;

/// Unicode-preserving slugification: keeps letters, digits and underscores
/// from any script (Persian names stay Persian), lowercases where the script
/// has case, and collapses whitespace/hyphen runs into single hyphens.
pub fn slugify(value: &str) -> String {
    let mut cleaned = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '-' || ch.is_whitespace() {
            cleaned.extend(ch.to_lowercase());
        }
    }

    let mut slug = String::with_capacity(cleaned.len());
    let mut pending_separator = false;
    for ch in cleaned.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        } else {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_separator = false;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Derive a slug for a business from its name and probe `candidate`,
/// `candidate-1`, `candidate-2`, ... until an unused one is found, skipping
/// `exclude` so an existing record can keep its own slug. Run inside the
/// transaction that inserts the row; the unique index on `businesses.slug`
/// is the backstop when two writers race past the probe.
pub async fn assign_unique_slug<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    exclude: Option<Uuid>,
) -> AppResult<String> {
    let mut base = slugify(name);
    if base.is_empty() {
        let total = businesses::Entity::find().count(conn).await?;
        base = format!("business-{}", total + 1);
    }

    let mut candidate = base.clone();
    let mut counter = 1u64;
    loop {
        let mut query =
            businesses::Entity::find().filter(businesses::Column::Slug.eq(&candidate));
        if let Some(id) = exclude {
            query = query.filter(businesses::Column::BusinessId.ne(id));
        }
        if query.count(conn).await? == 0 {
            return Ok(candidate);
        }
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }
}
