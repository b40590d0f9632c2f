//! Sample data: one beauty studio with its staff, services, two customers,
//! their bookings and ratings.
//!
//! Everything goes in through one transaction. Running it against a database
//! that already holds the sample customers fails on the unique email and
//! leaves the database untouched.
use chrono::{DateTime, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, Set};
use tracing::{error, info};
use uuid::Uuid;

use models::{
    address, booking, business, opening_hour, qualification, rating, service, service_category, staff, user,
};
use crate::errors::ServiceError;
use crate::session::with_transaction;

/// Ids of the rows a seed run created.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub business_id: Uuid,
    pub address_ids: Vec<Uuid>,
    pub user_ids: Vec<Uuid>,
    pub service_ids: Vec<Uuid>,
    pub booking_ids: Vec<Uuid>,
    pub rating_ids: Vec<Uuid>,
}

/// Insert the sample graph and commit; roll back everything on failure.
pub async fn run(db: &DatabaseConnection) -> Result<SeedReport, ServiceError> {
    match with_transaction(db, |txn| Box::pin(insert_sample_graph(txn))).await {
        Ok(report) => {
            info!(
                event = "seed_committed",
                business_id = %report.business_id,
                users = report.user_ids.len(),
                bookings = report.booking_ids.len(),
                "seed data inserted"
            );
            Ok(report)
        }
        Err(e) => {
            error!(event = "seed_failed", error = %e, "seeding failed; transaction rolled back");
            Err(e)
        }
    }
}

fn at(rfc3339: &str) -> Result<DateTimeWithTimeZone, ServiceError> {
    DateTime::parse_from_rfc3339(rfc3339).map_err(|e| ServiceError::Seed(format!("{rfc3339}: {e}")))
}

fn day(iso: &str) -> Result<NaiveDate, ServiceError> {
    iso.parse().map_err(|e| ServiceError::Seed(format!("{iso}: {e}")))
}

fn clock(hh_mm: &str) -> Result<NaiveTime, ServiceError> {
    NaiveTime::parse_from_str(hh_mm, "%H:%M").map_err(|e| ServiceError::Seed(format!("{hh_mm}: {e}")))
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// Insert the sample graph on an open transaction without committing it.
pub async fn insert_sample_graph(txn: &DatabaseTransaction) -> Result<SeedReport, ServiceError> {
    // addresses
    let addr_business = address::ActiveModel {
        street_line_1: Set("123 Beauty Lane".into()),
        suburb: Set(Some("Surry Hills".into())),
        city: Set(Some("Sydney".into())),
        state: Set(Some("NSW".into())),
        postcode: Set(Some("2010".into())),
        country: Set(Some("Australia".into())),
        latitude: Set(Some(Decimal::new(-338840, 4))),
        longitude: Set(Some(Decimal::new(1512120, 4))),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let addr_user = address::ActiveModel {
        street_line_1: Set("45 User St".into()),
        suburb: Set(Some("Newtown".into())),
        city: Set(Some("Sydney".into())),
        state: Set(Some("NSW".into())),
        postcode: Set(Some("2042".into())),
        country: Set(Some("Australia".into())),
        latitude: Set(Some(Decimal::new(-338970, 4))),
        longitude: Set(Some(Decimal::new(1511780, 4))),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // business
    let biz = business::ActiveModel {
        name: Set("Vanity Club".into()),
        address_id: Set(Some(addr_business.id)),
        description: Set(Some(
            "A cosy beauty studio specialising in brows, lashes, and skin treatments.".into(),
        )),
        images: Set(strings(&[
            "business-images/vanityclub_front.jpg",
            "business-images/vanityclub_room.jpg",
        ])),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // opening hours
    for (date, start, end) in [("2025-12-01", "09:00", "17:00"), ("2025-12-02", "11:00", "19:00")] {
        opening_hour::ActiveModel {
            business_id: Set(biz.id),
            date: Set(day(date)?),
            start_time: Set(clock(start)?),
            end_time: Set(clock(end)?),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    // staff and qualifications
    let staff_1 = staff::ActiveModel {
        first_name: Set("Mia".into()),
        last_name: Set("Chan".into()),
        position: Set(strings(&["Senior Brow Artist", "Lash Tech"])),
        description: Set(Some("Specialises in natural-looking brows and lash lifts.".into())),
        business_id: Set(biz.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let staff_2 = staff::ActiveModel {
        first_name: Set("Olivia".into()),
        last_name: Set("Nguyen".into()),
        position: Set(strings(&["Skin Therapist"])),
        description: Set(Some("Focuses on facials and skin health treatments.".into())),
        business_id: Set(biz.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    qualification::ActiveModel {
        name: Set("Certificate in Brow Design".into()),
        company: Set(Some("Beauty Institute Sydney".into())),
        description: Set(Some("Advanced techniques in brow mapping and tinting.".into())),
        certificate_id: Set(Some("BROW-2022-001".into())),
        certificate_image: Set(strings(&["certificates/mia_brow_cert.jpg"])),
        staff_id: Set(staff_1.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    qualification::ActiveModel {
        name: Set("Diploma of Beauty Therapy".into()),
        company: Set(Some("Skin Academy Australia".into())),
        description: Set(Some("Comprehensive training in skin treatments and facials.".into())),
        certificate_id: Set(Some("SKIN-2021-014".into())),
        certificate_image: Set(strings(&["certificates/olivia_skin_diploma.jpg"])),
        staff_id: Set(staff_2.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // service categories
    let category = |name: &str, description: &str, image: &str, price_from: i32, duration_range: &str| {
        service_category::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            images: Set(strings(&[image])),
            price_from: Set(Some(price_from)),
            duration_range: Set(Some(duration_range.to_string())),
            business_id: Set(biz.id),
            ..Default::default()
        }
    };
    let brows = category(
        "Brows",
        "Brow shaping, tinting and lamination services.",
        "service-categories/brows.jpg",
        60,
        "30–75 mins",
    )
    .insert(txn)
    .await?;
    let lashes = category(
        "Lashes",
        "Lash lifts and tints for a natural, lifted look.",
        "service-categories/lashes.jpg",
        80,
        "45–90 mins",
    )
    .insert(txn)
    .await?;
    let facials = category(
        "Facials",
        "Skin treatments tailored to your skin type.",
        "service-categories/facials.jpg",
        100,
        "60–90 mins",
    )
    .insert(txn)
    .await?;

    // services
    let offering = |name: &str, duration_mins: i32, price: i32, description: &str, image: &str, category_id: Uuid| {
        service::ActiveModel {
            name: Set(name.to_string()),
            duration_mins: Set(duration_mins),
            price: Set(price),
            description: Set(Some(description.to_string())),
            images: Set(strings(&[image])),
            service_category_id: Set(category_id),
            ..Default::default()
        }
    };
    let brow_shape_tint = offering(
        "Brow Shape & Tint",
        45,
        70,
        "Custom brow shaping with tint to define your brows.",
        "services/brow_shape_tint.jpg",
        brows.id,
    )
    .insert(txn)
    .await?;
    let brow_lamination = offering(
        "Brow Lamination",
        75,
        110,
        "Full brow lamination including shape and tint.",
        "services/brow_lamination.jpg",
        brows.id,
    )
    .insert(txn)
    .await?;
    let lash_lift = offering(
        "Lash Lift",
        60,
        95,
        "Natural lash lift to enhance your lashes without extensions.",
        "services/lash_lift.jpg",
        lashes.id,
    )
    .insert(txn)
    .await?;
    let signature_facial = offering(
        "Signature Glow Facial",
        75,
        130,
        "Deep cleansing, exfoliation and hydration for glowing skin.",
        "services/signature_facial.jpg",
        facials.id,
    )
    .insert(txn)
    .await?;

    // users
    let nicole = user::ActiveModel {
        first_name: Set("Nicole".into()),
        last_name: Set("Low".into()),
        email: Set("nicole@example.com".into()),
        phone: Set(Some("+61 400 000 001".into())),
        avatar: Set(Some("users/nicole_avatar.jpg".into())),
        address_id: Set(Some(addr_user.id)),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let emily = user::ActiveModel {
        first_name: Set("Emily".into()),
        last_name: Set("Wong".into()),
        email: Set("emily@example.com".into()),
        phone: Set(Some("+61 400 000 002".into())),
        avatar: Set(Some("users/emily_avatar.jpg".into())),
        address_id: Set(None),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // bookings with their services, in Sydney local time (AEDT)
    let booking_1 = booking::create_with_services(
        txn,
        nicole.id,
        biz.id,
        at("2025-12-01T10:00:00+11:00")?,
        &[brow_shape_tint.id, lash_lift.id],
    )
    .await?;
    let booking_2 = booking::create_with_services(
        txn,
        emily.id,
        biz.id,
        at("2025-12-02T13:30:00+11:00")?,
        &[signature_facial.id],
    )
    .await?;

    // one rating per booking
    let rating_1 = rating::create(
        txn,
        booking_1.id,
        Decimal::new(480, 2),
        Some("Loved my brows and lashes! Will definitely come back."),
    )
    .await?;
    let rating_2 = rating::create(
        txn,
        booking_2.id,
        Decimal::new(500, 2),
        Some("Skin feels amazing, very relaxing experience."),
    )
    .await?;

    Ok(SeedReport {
        business_id: biz.id,
        address_ids: vec![addr_business.id, addr_user.id],
        user_ids: vec![nicole.id, emily.id],
        service_ids: vec![brow_shape_tint.id, brow_lamination.id, lash_lift.id, signature_facial.id],
        booking_ids: vec![booking_1.id, booking_2.id],
        rating_ids: vec![rating_1.id, rating_2.id],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, TransactionTrait};
    use models::booking_service;
    use crate::test_support::get_db;

    /// Seeds inside a transaction that is rolled back, so the shared test
    /// database keeps whatever state it had.
    #[tokio::test]
    async fn sample_graph_is_consistent() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let txn = db.begin().await?;

        let report = match insert_sample_graph(&txn).await {
            Ok(r) => r,
            // database already seeded by a previous run
            Err(e) if e.is_unique_violation() => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        assert_eq!(report.address_ids.len(), 2);
        assert_eq!(report.user_ids.len(), 2);
        assert_eq!(report.service_ids.len(), 4);

        let biz = business::Entity::find_by_id(report.business_id).one(&txn).await?.expect("business");
        assert_eq!(biz.find_related(staff::Entity).count(&txn).await?, 2);
        assert_eq!(biz.find_related(opening_hour::Entity).count(&txn).await?, 2);
        assert_eq!(biz.find_related(service_category::Entity).count(&txn).await?, 3);
        let addr = biz.find_related(address::Entity).one(&txn).await?.expect("address");
        assert_eq!(addr.suburb.as_deref(), Some("Surry Hills"));

        let links = booking_service::Entity::find()
            .filter(booking_service::Column::BookingId.is_in(report.booking_ids.clone()))
            .count(&txn)
            .await?;
        assert_eq!(links, 3);

        for booking_id in &report.booking_ids {
            let b = booking::Entity::find_by_id(*booking_id).one(&txn).await?.expect("booking");
            let r = b.find_related(rating::Entity).one(&txn).await?;
            assert!(r.is_some());
        }

        txn.rollback().await?;
        let gone = business::Entity::find_by_id(report.business_id).one(&db).await?;
        assert!(gone.is_none());
        Ok(())
    }

    #[test]
    fn booking_times_carry_sydney_offset() {
        let t = at("2025-12-01T10:00:00+11:00").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 11 * 3600);
        assert!(at("not a time").is_err());
        assert!(clock("25:00").is_err());
        assert_eq!(day("2025-12-02").unwrap().to_string(), "2025-12-02");
    }
}
