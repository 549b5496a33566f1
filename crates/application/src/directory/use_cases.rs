use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use kasbyar_core::entities::{
    business_hours, business_images, business_ratings, businesses, categories, services,
};

use super::dtos::*;
use super::slug::assign_unique_slug;
use crate::reviews::stats::rating_stats;
use crate::reviews::ReviewDto;
use crate::{AppError, AppResult};

const SENTINEL_ALL: &str = "all";
const SLUG_INSERT_ATTEMPTS: u32 = 3;
const SIMILAR_LIMIT: u64 = 3;
const LATEST_REVIEWS_LIMIT: u64 = 3;

// ============ Register Business Use Case ============

pub struct RegisterBusinessUseCase;

impl RegisterBusinessUseCase {
    #[instrument(skip(db, req), fields(name = %req.name))]
    pub async fn execute(
        db: &DatabaseConnection,
        owner_id: Uuid,
        req: RegisterBusinessRequest,
    ) -> AppResult<RegisterBusinessResponse> {
        req.validate()?;
        for service in &req.services {
            service.validate()?;
        }
        for hours in &req.hours {
            hours.validate()?;
        }

        if let Some(category_id) = req.category_id {
            let known = categories::Entity::find_by_id(category_id).count(db).await?;
            if known == 0 {
                return Err(AppError::Validation("Unknown category".to_string()));
            }
        }

        // The slug probe and the insert share a transaction; if a concurrent
        // writer still claims the same slug first, the unique index rejects
        // the commit and the whole probe re-runs against the new state.
        let mut attempt = 0;
        loop {
            attempt += 1;
            match Self::try_insert(db, owner_id, &req).await {
                Ok(response) => {
                    info!(slug = %response.slug, "Registered business");
                    return Ok(response);
                }
                Err(AppError::Database(e))
                    if AppError::is_unique_violation(&e) && attempt < SLUG_INSERT_ATTEMPTS =>
                {
                    warn!("Slug collision on insert, retrying (attempt {})", attempt);
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_insert(
        db: &DatabaseConnection,
        owner_id: Uuid,
        req: &RegisterBusinessRequest,
    ) -> AppResult<RegisterBusinessResponse> {
        let txn = db.begin().await?;

        let slug = match &req.slug {
            Some(explicit) if !explicit.is_empty() => explicit.clone(),
            _ => assign_unique_slug(&txn, &req.name, None).await?,
        };

        let business_id = Uuid::new_v4();
        let business = businesses::ActiveModel {
            business_id: Set(business_id),
            owner_id: Set(owner_id),
            name: Set(req.name.clone()),
            slug: Set(slug),
            category_id: Set(req.category_id),
            description: Set(req.description.clone()),
            address: Set(req.address.clone()),
            city: Set(req.city.clone()),
            district: Set(req.district.clone()),
            phone: Set(req.phone.clone()),
            instagram: Set(req.instagram.clone()),
            is_approved: Set(false),
            created_at: Set(Utc::now().into()),
        };
        let inserted = business.insert(&txn).await?;

        for service in &req.services {
            let row = services::ActiveModel {
                business_id: Set(business_id),
                name: Set(service.name.clone()),
                icon: Set(service.icon.clone()),
                ..Default::default()
            };
            row.insert(&txn).await?;
        }

        for hours in &req.hours {
            let row = business_hours::ActiveModel {
                business_id: Set(business_id),
                days: Set(hours.days.clone()),
                start_time: Set(hours.start_time.clone()),
                end_time: Set(hours.end_time.clone()),
                is_closed: Set(hours.is_closed),
                ..Default::default()
            };
            row.insert(&txn).await?;
        }

        for image_url in &req.image_urls {
            let row = business_images::ActiveModel {
                business_id: Set(business_id),
                image_url: Set(image_url.clone()),
                ..Default::default()
            };
            row.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(RegisterBusinessResponse {
            business_id: inserted.business_id,
            slug: inserted.slug,
            is_approved: inserted.is_approved,
        })
    }
}

// ============ List Businesses Use Case ============

pub struct ListBusinessesUseCase;

impl ListBusinessesUseCase {
    #[instrument(skip(db, filter))]
    pub async fn execute(
        db: &DatabaseConnection,
        filter: ListBusinessesFilter,
    ) -> AppResult<ListBusinessesResponse> {
        let mut query = businesses::Entity::find()
            .filter(businesses::Column::IsApproved.eq(true))
            .filter(businesses::Column::Slug.ne(""));

        let has_all_category = filter
            .categories
            .iter()
            .any(|slug| slug.as_str() == SENTINEL_ALL);
        if !filter.categories.is_empty() && !has_all_category {
            let matching: Vec<Uuid> = categories::Entity::find()
                .filter(categories::Column::Slug.is_in(filter.categories.clone()))
                .all(db)
                .await?
                .into_iter()
                .map(|c| c.category_id)
                .collect();
            query = query.filter(businesses::Column::CategoryId.is_in(matching));
        }

        let has_all_city = filter.cities.iter().any(|city| city.as_str() == SENTINEL_ALL);
        if !filter.cities.is_empty() && !has_all_city {
            query = query.filter(businesses::Column::City.is_in(filter.cities.clone()));
        }

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", escape_like(term));
            let matching_categories: Vec<Uuid> = categories::Entity::find()
                .filter(
                    Expr::col((categories::Entity, categories::Column::Name)).ilike(&*pattern),
                )
                .all(db)
                .await?
                .into_iter()
                .map(|c| c.category_id)
                .collect();

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::col((businesses::Entity, businesses::Column::Name)).ilike(&*pattern),
                    )
                    .add(
                        Expr::col((businesses::Entity, businesses::Column::Description))
                            .ilike(&*pattern),
                    )
                    .add(businesses::Column::CategoryId.is_in(matching_categories)),
            );
        }

        let rows = query.all(db).await?;
        let ids: Vec<Uuid> = rows.iter().map(|b| b.business_id).collect();

        let averages = approved_rating_averages(db, &ids).await?;
        let covers = cover_images(db, &ids).await?;
        let category_names = category_name_map(db).await?;

        let businesses = rows
            .into_iter()
            .map(|b| BusinessSummary {
                avg_rating: averages.get(&b.business_id).copied().unwrap_or(0.0),
                image_url: covers.get(&b.business_id).cloned(),
                category_name: b
                    .category_id
                    .and_then(|id| category_names.get(&id).cloned()),
                business_id: b.business_id,
                name: b.name,
                slug: b.slug,
                description: b.description,
                city: b.city,
                district: b.district,
            })
            .collect();

        Ok(ListBusinessesResponse {
            businesses,
            categories: category_facets(db).await?,
            cities: city_facets(db).await?,
        })
    }
}

// ============ Business Detail Use Case ============

pub struct GetBusinessUseCase;

impl GetBusinessUseCase {
    #[instrument(skip(db))]
    pub async fn execute(
        db: &DatabaseConnection,
        slug: &str,
        viewer: Option<Uuid>,
    ) -> AppResult<BusinessDetailResponse> {
        let business = businesses::Entity::find()
            .filter(businesses::Column::Slug.eq(slug))
            .filter(businesses::Column::IsApproved.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let images = business_images::Entity::find()
            .filter(business_images::Column::BusinessId.eq(business.business_id))
            .all(db)
            .await?
            .into_iter()
            .map(|i| i.image_url)
            .collect();

        let services = services::Entity::find()
            .filter(services::Column::BusinessId.eq(business.business_id))
            .all(db)
            .await?
            .into_iter()
            .map(|s| ServiceDto {
                name: s.name,
                icon: s.icon,
            })
            .collect();

        let hours = business_hours::Entity::find()
            .filter(business_hours::Column::BusinessId.eq(business.business_id))
            .all(db)
            .await?
            .into_iter()
            .map(|h| HoursDto {
                days: h.days,
                start_time: h.start_time,
                end_time: h.end_time,
                is_closed: h.is_closed,
            })
            .collect();

        // Aggregates run over approved ratings only, recomputed per request.
        let approved: Vec<f64> = business_ratings::Entity::find()
            .filter(business_ratings::Column::BusinessId.eq(business.business_id))
            .filter(business_ratings::Column::IsApproved.eq(true))
            .all(db)
            .await?
            .into_iter()
            .map(|r| r.rating)
            .collect();
        let stats = rating_stats(&approved);

        let latest_reviews = business_ratings::Entity::find()
            .filter(business_ratings::Column::BusinessId.eq(business.business_id))
            .filter(business_ratings::Column::IsApproved.eq(true))
            .find_also_related(kasbyar_core::entities::users::Entity)
            .order_by_desc(business_ratings::Column::CreatedAt)
            .limit(LATEST_REVIEWS_LIMIT)
            .all(db)
            .await?
            .into_iter()
            .filter_map(|(rating, user)| {
                user.map(|u| ReviewDto {
                    rating: rating.rating,
                    comment: rating.comment,
                    username: u.username,
                    created_at: rating.created_at.with_timezone(&Utc),
                })
            })
            .collect();

        let similar_businesses = match business.category_id {
            Some(category_id) => {
                let similar = businesses::Entity::find()
                    .filter(businesses::Column::CategoryId.eq(category_id))
                    .filter(businesses::Column::IsApproved.eq(true))
                    .filter(businesses::Column::Slug.ne(slug))
                    .filter(businesses::Column::Slug.ne(""))
                    .limit(SIMILAR_LIMIT)
                    .all(db)
                    .await?;
                let similar_ids: Vec<Uuid> = similar.iter().map(|b| b.business_id).collect();
                let averages = approved_rating_averages(db, &similar_ids).await?;
                similar
                    .into_iter()
                    .map(|b| SimilarBusinessDto {
                        avg_rating: averages.get(&b.business_id).copied().unwrap_or(0.0),
                        name: b.name,
                        slug: b.slug,
                        city: b.city,
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        let viewer_has_reviewed = match viewer {
            Some(user_id) => {
                business_ratings::Entity::find()
                    .filter(business_ratings::Column::BusinessId.eq(business.business_id))
                    .filter(business_ratings::Column::UserId.eq(user_id))
                    .count(db)
                    .await?
                    > 0
            }
            None => false,
        };

        let category_name = match business.category_id {
            Some(id) => categories::Entity::find_by_id(id)
                .one(db)
                .await?
                .map(|c| c.name),
            None => None,
        };

        Ok(BusinessDetailResponse {
            business_id: business.business_id,
            name: business.name,
            slug: business.slug,
            category_name,
            description: business.description,
            address: business.address,
            city: business.city,
            district: business.district,
            phone: business.phone,
            instagram: business.instagram,
            images,
            services,
            hours,
            rating_stats: stats,
            latest_reviews,
            similar_businesses,
            viewer_has_reviewed,
        })
    }
}

// ============ Owner's Businesses Use Case ============

pub struct MyBusinessesUseCase;

impl MyBusinessesUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, owner_id: Uuid) -> AppResult<Vec<MyBusinessDto>> {
        let rows = businesses::Entity::find()
            .filter(businesses::Column::OwnerId.eq(owner_id))
            .order_by_desc(businesses::Column::CreatedAt)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|b| MyBusinessDto {
                business_id: b.business_id,
                name: b.name,
                slug: b.slug,
                city: b.city,
                is_approved: b.is_approved,
                created_at: b.created_at.with_timezone(&Utc),
            })
            .collect())
    }
}

// ============ Categories Use Case ============

pub struct ListCategoriesUseCase;

impl ListCategoriesUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection) -> AppResult<Vec<CategoryFacet>> {
        category_facets(db).await
    }
}

// ============ Shared queries ============

async fn category_facets(db: &DatabaseConnection) -> AppResult<Vec<CategoryFacet>> {
    let counts: Vec<(Option<Uuid>, i64)> = businesses::Entity::find()
        .select_only()
        .column(businesses::Column::CategoryId)
        .column_as(businesses::Column::BusinessId.count(), "count")
        .filter(businesses::Column::IsApproved.eq(true))
        .group_by(businesses::Column::CategoryId)
        .into_tuple()
        .all(db)
        .await?;
    let by_category: HashMap<Option<Uuid>, i64> = counts.into_iter().collect();

    let rows = categories::Entity::find()
        .order_by_asc(categories::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|c| CategoryFacet {
            count: by_category
                .get(&Some(c.category_id))
                .copied()
                .unwrap_or(0)
                .max(0) as u64,
            category_id: c.category_id,
            name: c.name,
            slug: c.slug,
        })
        .collect())
}

async fn city_facets(db: &DatabaseConnection) -> AppResult<Vec<CityFacet>> {
    let counts: Vec<(String, i64)> = businesses::Entity::find()
        .select_only()
        .column(businesses::Column::City)
        .column_as(businesses::Column::BusinessId.count(), "count")
        .filter(businesses::Column::IsApproved.eq(true))
        .group_by(businesses::Column::City)
        .order_by_asc(businesses::Column::City)
        .into_tuple()
        .all(db)
        .await?;

    Ok(counts
        .into_iter()
        .map(|(city, count)| CityFacet {
            city,
            count: count.max(0) as u64,
        })
        .collect())
}

async fn approved_rating_averages(
    db: &DatabaseConnection,
    business_ids: &[Uuid],
) -> AppResult<HashMap<Uuid, f64>> {
    if business_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<(Uuid, Option<f64>)> = business_ratings::Entity::find()
        .select_only()
        .column(business_ratings::Column::BusinessId)
        .column_as(
            Expr::expr(Func::avg(Expr::col((
                business_ratings::Entity,
                business_ratings::Column::Rating,
            )))),
            "avg",
        )
        .filter(business_ratings::Column::BusinessId.is_in(business_ids.to_vec()))
        .filter(business_ratings::Column::IsApproved.eq(true))
        .group_by(business_ratings::Column::BusinessId)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, avg)| (id, avg.unwrap_or(0.0)))
        .collect())
}

async fn cover_images(
    db: &DatabaseConnection,
    business_ids: &[Uuid],
) -> AppResult<HashMap<Uuid, String>> {
    if business_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = business_images::Entity::find()
        .filter(business_images::Column::BusinessId.is_in(business_ids.to_vec()))
        .order_by_asc(business_images::Column::ImageId)
        .all(db)
        .await?;

    let mut covers = HashMap::new();
    for image in rows {
        covers.entry(image.business_id).or_insert(image.image_url);
    }
    Ok(covers)
}

async fn category_name_map(db: &DatabaseConnection) -> AppResult<HashMap<Uuid, String>> {
    Ok(categories::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.category_id, c.name))
        .collect())
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
