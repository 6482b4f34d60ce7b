// Store tests against a real PostgreSQL database. Each test gets a fresh
// database with the crate migrations applied.
//
//   DATABASE_URL=postgres://... cargo test --test 50_postgres_store -- --ignored

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use hotel_booking_api::booking::{BookingError, BookingPolicy, BookingRequest, BookingScope, StayDates};
use hotel_booking_api::database::{BookingStore, PgBookingStore};
use hotel_booking_api::types::Principal;

async fn insert_hotel(pool: &PgPool, name: &str, province: &str) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO hotels (id, name, address, province, tel) VALUES ($1, $2, '1 Main Rd', $3, '02-000-0000')")
        .bind(id)
        .bind(name)
        .bind(province)
        .execute(pool)
        .await?;
    Ok(id)
}

async fn booking_rows(pool: &PgPool) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM bookings").fetch_one(pool).await?)
}

fn stay(check_in: &str, check_out: &str) -> StayDates {
    BookingRequest::new(check_in, check_out).parse().expect("valid dates")
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn concurrent_creates_stop_at_user_limit(pool: PgPool) -> Result<()> {
    let hotel = insert_hotel(&pool, "Riverside", "Bangkok").await?;
    let store = PgBookingStore::new(pool.clone());
    let user = Principal::user(Uuid::new_v4());

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create_booking(hotel, &user, &stay("2024-06-01", "2024-06-02"), &BookingPolicy::default())
                .await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => accepted += 1,
            Err(err) => assert!(matches!(err, BookingError::PolicyViolation(_)), "unexpected: {:?}", err),
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(booking_rows(&pool).await?, 3);
    Ok(())
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn rejected_create_writes_nothing(pool: PgPool) -> Result<()> {
    let hotel = insert_hotel(&pool, "Riverside", "Bangkok").await?;
    let store = PgBookingStore::new(pool.clone());
    let user = Principal::user(Uuid::new_v4());
    let policy = BookingPolicy::default();

    let too_long = store.create_booking(hotel, &user, &stay("2024-06-01", "2024-06-05"), &policy).await;
    assert!(matches!(too_long, Err(BookingError::PolicyViolation(_))));

    let nowhere = store
        .create_booking(Uuid::new_v4(), &user, &stay("2024-06-01", "2024-06-02"), &policy)
        .await;
    assert!(matches!(nowhere, Err(BookingError::NotFound(_))));

    assert_eq!(booking_rows(&pool).await?, 0);
    Ok(())
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn listings_follow_scope_and_embed_hotel(pool: PgPool) -> Result<()> {
    let riverside = insert_hotel(&pool, "Riverside", "Bangkok").await?;
    let hillview = insert_hotel(&pool, "Hillview", "Chiang Mai").await?;
    let store = PgBookingStore::new(pool.clone());
    let policy = BookingPolicy::default();
    let alice = Principal::user(Uuid::new_v4());
    let bob = Principal::user(Uuid::new_v4());

    store.create_booking(riverside, &alice, &stay("2024-06-01", "2024-06-02"), &policy).await?;
    store.create_booking(hillview, &alice, &stay("2024-07-01", "2024-07-03"), &policy).await?;
    store.create_booking(hillview, &bob, &stay("2024-07-01", "2024-07-02"), &policy).await?;

    assert_eq!(store.list_bookings(BookingScope::All).await?.len(), 3);

    let alices = store.list_bookings(BookingScope::User(alice.id)).await?;
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|b| b.user_id == alice.id));

    let at_hillview = store.list_bookings(BookingScope::Hotel(hillview)).await?;
    assert_eq!(at_hillview.len(), 2);
    assert!(at_hillview.iter().all(|b| b.hotel.name == "Hillview" && b.hotel.province == "Chiang Mai"));

    let hotel = store.find_hotel(riverside).await?.expect("hotel row");
    assert_eq!(hotel.name, "Riverside");
    assert!(store.find_hotel(Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn update_merges_dates_and_keeps_row_on_rejection(pool: PgPool) -> Result<()> {
    let hotel = insert_hotel(&pool, "Riverside", "Bangkok").await?;
    let store = PgBookingStore::new(pool.clone());
    let policy = BookingPolicy::default();
    let user = Principal::user(Uuid::new_v4());

    let booking = store.create_booking(hotel, &user, &stay("2024-06-01", "2024-06-02"), &policy).await?;

    let later_checkout = BookingRequest {
        check_in_date: None,
        check_out_date: Some("2024-06-04".into()),
    }
    .parse()?;
    let updated = store.update_booking(booking.id, &later_checkout, &policy).await?.expect("booking row");
    assert_eq!(updated.check_in_date, booking.check_in_date);
    assert_eq!(updated.check_out_date, stay("2024-06-01", "2024-06-04").check_out.expect("date"));

    let too_long = BookingRequest {
        check_in_date: None,
        check_out_date: Some("2024-06-09".into()),
    }
    .parse()?;
    let rejected = store.update_booking(booking.id, &too_long, &policy).await;
    assert!(matches!(rejected, Err(BookingError::PolicyViolation(_))));

    let stored = store.find_booking(booking.id).await?.expect("booking row");
    assert_eq!(stored.check_out_date, updated.check_out_date);
    assert_eq!(stored.hotel.name, "Riverside");

    assert!(store.update_booking(Uuid::new_v4(), &later_checkout, &policy).await?.is_none());
    Ok(())
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn delete_removes_once(pool: PgPool) -> Result<()> {
    let hotel = insert_hotel(&pool, "Riverside", "Bangkok").await?;
    let store = PgBookingStore::new(pool.clone());
    let user = Principal::user(Uuid::new_v4());

    let booking = store
        .create_booking(hotel, &user, &stay("2024-06-01", "2024-06-02"), &BookingPolicy::default())
        .await?;

    assert!(store.delete_booking(booking.id).await?);
    assert!(!store.delete_booking(booking.id).await?);
    assert!(store.find_booking(booking.id).await?.is_none());
    Ok(())
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn schema_rejects_reversed_stay(pool: PgPool) -> Result<()> {
    let hotel = insert_hotel(&pool, "Riverside", "Bangkok").await?;

    let result = sqlx::query(
        "INSERT INTO bookings (id, hotel_id, user_id, check_in_date, check_out_date) \
         VALUES ($1, $2, $3, '2024-06-03T00:00:00Z', '2024-06-01T00:00:00Z')",
    )
    .bind(Uuid::new_v4())
    .bind(hotel)
    .bind(Uuid::new_v4())
    .execute(&pool)
    .await;

    assert!(result.is_err());
    assert_eq!(booking_rows(&pool).await?, 0);
    Ok(())
}
