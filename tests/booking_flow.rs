use chrono::NaiveDate;
use hotel_admin_api::{
    config::DashboardConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        availability::{BlockDateRequest, BookRoomsRequest, CreateAvailabilityRequest, ReleaseRoomsRequest},
        hotels::{AddHotelImageRequest, CreateCancellationPolicyRequest, CreateHotelRequest},
        rates::{CreateRoomRateRequest, UpdateRoomRateRequest},
        room_types::CreateRoomTypeRequest,
        seasons::CreateSeasonRequest,
        companies::CreateCompanyRequest,
    },
    error::AppError,
    routes::params::{Pagination, RateResolveQuery},
    services::{
        availability_service, company_service, hotel_service, rate_service, room_type_service,
        season_service,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// Full flow: company -> season -> hotel -> room type -> rates -> availability,
// exercising rate recomputation, resolution, the booking ledger and cascade
// deletes against a real Postgres.
#[tokio::test]
async fn rates_and_booking_ledger_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Seed the ownership chain
    let company = company_service::create_company(
        &state,
        CreateCompanyRequest {
            name: "Sunward Stays".into(),
        },
    )
    .await?
    .data
    .unwrap();

    let season = season_service::create_season(
        &state,
        CreateSeasonRequest {
            company_id: company.id.clone(),
            name: "High Season".into(),
            description: None,
            start_date: date(2026, 6, 1),
            end_date: date(2026, 8, 31),
        },
    )
    .await?
    .data
    .unwrap();

    // Inverted season dates must be rejected before they hit the store.
    let err = season_service::create_season(
        &state,
        CreateSeasonRequest {
            company_id: company.id.clone(),
            name: "Backwards".into(),
            description: None,
            start_date: date(2026, 9, 1),
            end_date: date(2026, 6, 1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let hotel = hotel_service::create_hotel(
        &state,
        CreateHotelRequest {
            company_id: company.id.clone(),
            name: "Hotel Meridian".into(),
            description: None,
            address: "Avenida da Liberdade 1".into(),
            city: "Lisbon".into(),
            country: "Portugal".into(),
            star_rating: 4,
            contact_email: None,
            contact_phone: None,
        },
    )
    .await?
    .data
    .unwrap();

    let room_type = room_type_service::create_room_type(
        &state,
        CreateRoomTypeRequest {
            hotel_id: hotel.id.clone(),
            name: "Deluxe Double".into(),
            description: None,
            max_occupancy: 2,
            bed_type: "queen".into(),
            size: None,
            total_rooms: 10,
            available_rooms: 10,
        },
    )
    .await?
    .data
    .unwrap();

    // Year-round base rate and a season-scoped rate over the same window.
    let base_rate = rate_service::create_rate(
        &state,
        CreateRoomRateRequest {
            hotel_id: hotel.id.clone(),
            room_type_id: room_type.id.clone(),
            season_id: None,
            base_rate_per_night: dec("100.00"),
            season_multiplier: None,
            currency: None,
            valid_from: date(2026, 1, 1),
            valid_to: date(2026, 12, 31),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(base_rate.final_rate_per_night, dec("100.00"));

    let seasonal_rate = rate_service::create_rate(
        &state,
        CreateRoomRateRequest {
            hotel_id: hotel.id.clone(),
            room_type_id: room_type.id.clone(),
            season_id: Some(season.id.clone()),
            base_rate_per_night: dec("100.00"),
            season_multiplier: Some(dec("1.20")),
            currency: None,
            valid_from: date(2026, 1, 1),
            valid_to: date(2026, 12, 31),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(seasonal_rate.final_rate_per_night, dec("120.00"));

    // In season the season-scoped rate wins; outside it the base rate applies.
    let quote = rate_service::resolve_rate(
        &state,
        RateResolveQuery {
            room_type_id: room_type.id.clone(),
            date: date(2026, 7, 15),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(quote.room_rate_id, seasonal_rate.id);
    assert_eq!(quote.final_rate_per_night, dec("120.00"));

    let quote = rate_service::resolve_rate(
        &state,
        RateResolveQuery {
            room_type_id: room_type.id.clone(),
            date: date(2026, 2, 1),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(quote.room_rate_id, base_rate.id);
    assert_eq!(quote.final_rate_per_night, dec("100.00"));

    // A narrower seasonless window beats the year-round rate.
    let march_rate = rate_service::create_rate(
        &state,
        CreateRoomRateRequest {
            hotel_id: hotel.id.clone(),
            room_type_id: room_type.id.clone(),
            season_id: None,
            base_rate_per_night: dec("90.00"),
            season_multiplier: None,
            currency: None,
            valid_from: date(2026, 3, 1),
            valid_to: date(2026, 3, 31),
        },
    )
    .await?
    .data
    .unwrap();
    let quote = rate_service::resolve_rate(
        &state,
        RateResolveQuery {
            room_type_id: room_type.id.clone(),
            date: date(2026, 3, 15),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(quote.room_rate_id, march_rate.id);

    // Updating the multiplier recomputes the stored final rate.
    let updated = rate_service::update_rate(
        &state,
        &march_rate.id,
        UpdateRoomRateRequest {
            base_rate_per_night: None,
            season_multiplier: Some(dec("1.10")),
            currency: None,
            valid_from: None,
            valid_to: None,
            is_active: None,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.final_rate_per_night, dec("99.00"));

    // Availability ledger: one row per room type and date.
    let night = availability_service::create_availability(
        &state,
        CreateAvailabilityRequest {
            room_type_id: room_type.id.clone(),
            date: date(2026, 7, 15),
            available_rooms: 10,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(night.hotel_id, hotel.id);

    let err = availability_service::create_availability(
        &state,
        CreateAvailabilityRequest {
            room_type_id: room_type.id.clone(),
            date: date(2026, 7, 15),
            available_rooms: 10,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));

    // Book 3 of 10, then fail to book 8 more; the count must not move.
    let booked = availability_service::book_rooms(
        &state,
        &night.id,
        BookRoomsRequest { rooms: 3 },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(booked.booked_rooms, 3);

    let err = availability_service::book_rooms(
        &state,
        &night.id,
        BookRoomsRequest { rooms: 8 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Capacity(_)));

    let row = availability_service::get_availability(&state, &night.id)
        .await?
        .data
        .unwrap();
    assert_eq!(row.booked_rooms, 3);

    // Cancellations floor at zero.
    let row = availability_service::release_rooms(
        &state,
        &night.id,
        ReleaseRoomsRequest { rooms: 2 },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(row.booked_rooms, 1);

    let row = availability_service::release_rooms(
        &state,
        &night.id,
        ReleaseRoomsRequest { rooms: 5 },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(row.booked_rooms, 0);

    // A blocked date refuses bookings no matter the capacity.
    let row = availability_service::block_date(
        &state,
        &night.id,
        BlockDateRequest {
            reason: "renovation".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert!(row.is_blocked);

    let err = availability_service::book_rooms(
        &state,
        &night.id,
        BookRoomsRequest { rooms: 1 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Blocked(_)));

    let row = availability_service::unblock_date(&state, &night.id)
        .await?
        .data
        .unwrap();
    assert!(!row.is_blocked);
    assert!(row.block_reason.is_none());

    availability_service::book_rooms(&state, &night.id, BookRoomsRequest { rooms: 1 }).await?;

    // Single primary image per hotel.
    hotel_service::add_image(
        &state,
        &hotel.id,
        AddHotelImageRequest {
            image_url: "https://img.example.com/lobby.jpg".into(),
            caption: None,
            is_primary: true,
            sort_order: 0,
        },
    )
    .await?;
    hotel_service::add_image(
        &state,
        &hotel.id,
        AddHotelImageRequest {
            image_url: "https://img.example.com/pool.jpg".into(),
            caption: None,
            is_primary: true,
            sort_order: 1,
        },
    )
    .await?;
    let images = hotel_service::list_images(&state, &hotel.id)
        .await?
        .data
        .unwrap()
        .items;
    let primaries: Vec<_> = images.iter().filter(|i| i.is_primary).collect();
    assert_eq!(primaries.len(), 1);
    assert_eq!(primaries[0].image_url, "https://img.example.com/pool.jpg");

    // Refund percentage is bounded, and only one policy may be the default.
    let err = hotel_service::add_policy(
        &state,
        &hotel.id,
        CreateCancellationPolicyRequest {
            name: "Broken".into(),
            description: None,
            cancellation_window_days: 7,
            refund_percentage: 150,
            is_default: false,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    hotel_service::add_policy(
        &state,
        &hotel.id,
        CreateCancellationPolicyRequest {
            name: "Flexible".into(),
            description: None,
            cancellation_window_days: 1,
            refund_percentage: 100,
            is_default: true,
        },
    )
    .await?;
    hotel_service::add_policy(
        &state,
        &hotel.id,
        CreateCancellationPolicyRequest {
            name: "Strict".into(),
            description: None,
            cancellation_window_days: 14,
            refund_percentage: 50,
            is_default: true,
        },
    )
    .await?;
    let policies = hotel_service::list_policies(&state, &hotel.id)
        .await?
        .data
        .unwrap()
        .items;
    let defaults: Vec<_> = policies.iter().filter(|p| p.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].name, "Strict");

    // Deleting the hotel removes every dependent row.
    hotel_service::delete_hotel(&state, &hotel.id).await?;

    assert!(matches!(
        room_type_service::get_room_type(&state, &room_type.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        rate_service::get_rate(&state, &base_rate.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        availability_service::get_availability(&state, &night.id).await,
        Err(AppError::NotFound)
    ));
    let images = hotel_service::list_images(&state, &hotel.id).await;
    assert!(matches!(images, Err(AppError::NotFound)));

    // The company and its season survive.
    company_service::get_company(&state, &company.id).await?;
    season_service::get_season(&state, &season.id).await?;

    let companies = company_service::list_companies(
        &state,
        Pagination {
            page: Some(1),
            per_page: Some(20),
        },
    )
    .await?
    .data
    .unwrap();
    assert!(companies.items.iter().any(|c| c.id == company.id));

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;
    let pool = create_pool(database_url).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE availability, room_rates, hotel_images, cancellation_policies, room_types, hotels, seasons, companies, audit_logs RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState {
        pool,
        orm,
        dashboard: DashboardConfig::standard(),
    })
}
