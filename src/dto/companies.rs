use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Company;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCompanyRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyList {
    pub items: Vec<Company>,
}
