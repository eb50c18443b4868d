use chrono::{Datelike, Duration, NaiveDate, Utc};
use hotel_admin_api::{config::AppConfig, db::create_pool};
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let company_id = ensure_company(&pool, "Sunward Stays").await?;
    let high_season_id = ensure_season(
        &pool,
        &company_id,
        "High Season",
        summer_start(),
        summer_end(),
    )
    .await?;
    let hotel_id = ensure_hotel(&pool, &company_id, "Hotel Meridian", "Lisbon", "Portugal").await?;
    let room_type_id = ensure_room_type(&pool, &hotel_id, "Deluxe Double", 2, 10).await?;

    ensure_rate(
        &pool,
        &hotel_id,
        &room_type_id,
        None,
        Decimal::new(10000, 2),
        Decimal::new(100, 2),
    )
    .await?;
    ensure_rate(
        &pool,
        &hotel_id,
        &room_type_id,
        Some(&high_season_id),
        Decimal::new(10000, 2),
        Decimal::new(120, 2),
    )
    .await?;

    seed_availability(&pool, &hotel_id, &room_type_id, 10).await?;

    println!("Seed completed. Company ID: {company_id}, Hotel ID: {hotel_id}");
    Ok(())
}

fn summer_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(Utc::now().year(), 6, 1).expect("valid date")
}

fn summer_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(Utc::now().year(), 8, 31).expect("valid date")
}

async fn ensure_company(pool: &sqlx::PgPool, name: &str) -> anyhow::Result<String> {
    if let Some((id,)) =
        sqlx::query_as::<_, (String,)>("SELECT id FROM companies WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?
    {
        return Ok(id);
    }

    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO companies (id, name) VALUES ($1, $2)")
        .bind(&id)
        .bind(name)
        .execute(pool)
        .await?;

    println!("Seeded company {name}");
    Ok(id)
}

async fn ensure_season(
    pool: &sqlx::PgPool,
    company_id: &str,
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<String> {
    if let Some((id,)) = sqlx::query_as::<_, (String,)>(
        "SELECT id FROM seasons WHERE company_id = $1 AND name = $2",
    )
    .bind(company_id)
    .bind(name)
    .fetch_optional(pool)
    .await?
    {
        return Ok(id);
    }

    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO seasons (id, company_id, name, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&id)
    .bind(company_id)
    .bind(name)
    .bind(start)
    .bind(end)
    .execute(pool)
    .await?;

    println!("Seeded season {name}");
    Ok(id)
}

async fn ensure_hotel(
    pool: &sqlx::PgPool,
    company_id: &str,
    name: &str,
    city: &str,
    country: &str,
) -> anyhow::Result<String> {
    if let Some((id,)) = sqlx::query_as::<_, (String,)>(
        "SELECT id FROM hotels WHERE company_id = $1 AND name = $2",
    )
    .bind(company_id)
    .bind(name)
    .fetch_optional(pool)
    .await?
    {
        return Ok(id);
    }

    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO hotels (id, company_id, name, address, city, country, star_rating)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(&id)
    .bind(company_id)
    .bind(name)
    .bind("Avenida da Liberdade 1")
    .bind(city)
    .bind(country)
    .bind(4)
    .execute(pool)
    .await?;

    println!("Seeded hotel {name}");
    Ok(id)
}

async fn ensure_room_type(
    pool: &sqlx::PgPool,
    hotel_id: &str,
    name: &str,
    max_occupancy: i32,
    total_rooms: i32,
) -> anyhow::Result<String> {
    if let Some((id,)) = sqlx::query_as::<_, (String,)>(
        "SELECT id FROM room_types WHERE hotel_id = $1 AND name = $2",
    )
    .bind(hotel_id)
    .bind(name)
    .fetch_optional(pool)
    .await?
    {
        return Ok(id);
    }

    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO room_types
            (id, hotel_id, name, max_occupancy, bed_type, total_rooms, available_rooms)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        "#,
    )
    .bind(&id)
    .bind(hotel_id)
    .bind(name)
    .bind(max_occupancy)
    .bind("queen")
    .bind(total_rooms)
    .execute(pool)
    .await?;

    println!("Seeded room type {name}");
    Ok(id)
}

async fn ensure_rate(
    pool: &sqlx::PgPool,
    hotel_id: &str,
    room_type_id: &str,
    season_id: Option<&str>,
    base: Decimal,
    multiplier: Decimal,
) -> anyhow::Result<()> {
    let existing: Option<(String,)> = sqlx::query_as(
        "SELECT id FROM room_rates WHERE room_type_id = $1 AND season_id IS NOT DISTINCT FROM $2",
    )
    .bind(room_type_id)
    .bind(season_id)
    .fetch_optional(pool)
    .await?;
    if existing.is_some() {
        return Ok(());
    }

    let year = Utc::now().year();
    let valid_from = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date");
    let valid_to = NaiveDate::from_ymd_opt(year, 12, 31).expect("valid date");
    let final_rate = (base * multiplier).round_dp(2);

    sqlx::query(
        r#"
        INSERT INTO room_rates
            (id, hotel_id, room_type_id, season_id, base_rate_per_night,
             season_multiplier, final_rate_per_night, currency, valid_from, valid_to)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(hotel_id)
    .bind(room_type_id)
    .bind(season_id)
    .bind(base)
    .bind(multiplier)
    .bind(final_rate)
    .bind("USD")
    .bind(valid_from)
    .bind(valid_to)
    .execute(pool)
    .await?;

    println!("Seeded rate (season: {season_id:?})");
    Ok(())
}

async fn seed_availability(
    pool: &sqlx::PgPool,
    hotel_id: &str,
    room_type_id: &str,
    rooms: i32,
) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();
    for offset in 0..30 {
        let date = today + Duration::days(offset);
        sqlx::query(
            r#"
            INSERT INTO availability (id, hotel_id, room_type_id, date, available_rooms)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (room_type_id, date) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(hotel_id)
        .bind(room_type_id)
        .bind(date)
        .bind(rooms)
        .execute(pool)
        .await?;
    }

    println!("Seeded 30 days of availability");
    Ok(())
}
