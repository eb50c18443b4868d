use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HotelSortBy {
    CreatedAt,
    Name,
    StarRating,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HotelQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
    pub company_id: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub min_star_rating: Option<i32>,
    pub active_only: Option<bool>,
    pub sort_by: Option<HotelSortBy>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeasonListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub company_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomTypeListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub hotel_id: Option<String>,
    pub active_only: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RateListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub hotel_id: Option<String>,
    pub room_type_id: Option<String>,
    pub active_only: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RateResolveQuery {
    pub room_type_id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AvailabilityListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub room_type_id: Option<String>,
    pub hotel_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_normalizes_out_of_range_input() {
        let p = Pagination {
            page: Some(0),
            per_page: Some(1000),
        };
        assert_eq!(p.normalize(), (1, 100, 0));

        let p = Pagination {
            page: None,
            per_page: None,
        };
        assert_eq!(p.normalize(), (1, 20, 0));

        let p = Pagination {
            page: Some(3),
            per_page: Some(10),
        };
        assert_eq!(p.normalize(), (3, 10, 20));
    }
}
